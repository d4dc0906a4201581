use iced::widget::image;
use iced::{Element, Task, Theme};

mod api;
mod color;
mod config;
mod format;
mod posters;
mod state;
mod ui;
mod util;

use api::{FetchError, Movie};
use config::Config;
use posters::{poster_source, PosterCache, PosterLibrary, PosterSource};
use state::{FetchState, NowShowing};

/// Which screen is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Landing,
    Movies,
    /// Detail view for the movie with this id.
    Detail(i64),
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Landing action: go to the now-showing grid.
    BrowseNowShowing,
    /// "Try Again" on the error screen.
    RetryFetch,
    /// A listing request finished; the token says which one.
    MoviesFetched(u64, Result<Vec<Movie>, FetchError>),
    /// A remote poster download finished for one movie.
    PosterFetched(i64, Result<Vec<u8>, String>),
    /// User clicked a card.
    MovieSelected(i64),
    /// Detail action: back to the grid, without refetching.
    BackToListing,
    /// Detail action: open the movie's web page.
    OpenMoviePage(String),
    /// The system browser launch completed.
    BrowserOpened(Result<(), String>),
}

/// Main application state
struct Marquee {
    config: Config,
    client: reqwest::Client,
    /// Manifest of bundled poster files.
    posters: PosterLibrary,
    /// Downloaded remote posters, keyed by movie id.
    cache: PosterCache,
    /// Fetch lifecycle of the now-showing listing.
    now_showing: NowShowing,
    screen: Screen,
}

impl Marquee {
    fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        let posters = PosterLibrary::scan(config::POSTER_DIR);

        println!("🎬 Marquee starting against {}", config.api_base_url);
        println!("🖼️  {} bundled posters in the manifest", posters.len());

        (
            Marquee {
                config,
                client: api::client(),
                posters,
                cache: PosterCache::new(),
                now_showing: NowShowing::new(),
                screen: Screen::Landing,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseNowShowing => {
                self.screen = Screen::Movies;
                // The listing survives navigation; only the first entry
                // (or an explicit retry) issues a request.
                if self.now_showing.is_started() {
                    Task::none()
                } else {
                    self.fetch_listing()
                }
            }
            Message::RetryFetch => self.fetch_listing(),
            Message::MoviesFetched(token, result) => {
                if !self.now_showing.resolve(token, result) {
                    println!("⏭️  Discarded a stale listing response");
                    return Task::none();
                }
                let movies = match self.now_showing.state() {
                    FetchState::Success(movies) => movies.clone(),
                    _ => return Task::none(),
                };
                println!("🎬 {} movies now showing", movies.len());
                self.queue_poster_downloads(&movies)
            }
            Message::PosterFetched(id, Ok(bytes)) => {
                self.cache.insert_loaded(id, image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::PosterFetched(id, Err(err)) => {
                eprintln!("⚠️  Poster download failed for movie {}: {}", id, err);
                self.cache.mark_failed(id);
                Task::none()
            }
            Message::MovieSelected(id) => {
                self.screen = Screen::Detail(id);
                Task::none()
            }
            Message::BackToListing => {
                self.screen = Screen::Movies;
                Task::none()
            }
            Message::OpenMoviePage(slug) => {
                let url = self.config.movie_page_url(&slug);
                println!("🌐 Opening {}", url);
                Task::perform(util::open_system_uri(url), Message::BrowserOpened)
            }
            Message::BrowserOpened(Ok(())) => Task::none(),
            Message::BrowserOpened(Err(err)) => {
                eprintln!("⚠️  Could not open the browser: {}", err);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match self.screen {
            Screen::Landing => ui::landing::view(),
            Screen::Movies => self.listing_view(),
            Screen::Detail(id) => match self.movie(id) {
                Some(movie) => ui::detail::view(movie, &self.posters, &self.cache),
                // The listing was replaced and the id is gone.
                None => self.listing_view(),
            },
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn listing_view(&self) -> Element<Message> {
        ui::movies::view(self.now_showing.state(), &self.posters, &self.cache)
    }

    /// Enter Loading and issue the request for the now-showing page.
    fn fetch_listing(&mut self) -> Task<Message> {
        let token = self.now_showing.begin();
        let request = api::fetch_now_showing(self.client.clone(), self.config.movies_url());
        Task::perform(request, move |result| Message::MoviesFetched(token, result))
    }

    /// Start background downloads for every movie whose poster is a
    /// remote URL. Bundled posters render straight from disk; manifest
    /// misses are logged once here and stay on the placeholder.
    fn queue_poster_downloads(&mut self, movies: &[Movie]) -> Task<Message> {
        self.cache.clear();
        let mut downloads = Vec::new();
        for movie in movies {
            match poster_source(&self.posters, movie) {
                PosterSource::Remote(url) => {
                    let id = movie.id;
                    self.cache.mark_loading(id);
                    let download = posters::download_poster(self.client.clone(), url);
                    downloads.push(Task::perform(download, move |result| {
                        Message::PosterFetched(id, result)
                    }));
                }
                PosterSource::Placeholder => {
                    if let Some(file) = &movie.poster_file {
                        eprintln!("⚠️  Poster not in the bundle: {} ({})", file, movie.name);
                    }
                }
                PosterSource::Bundled(_) => {}
            }
        }
        Task::batch(downloads)
    }

    fn movie(&self, id: i64) -> Option<&Movie> {
        match self.now_showing.state() {
            FetchState::Success(movies) => movies.iter().find(|movie| movie.id == id),
            _ => None,
        }
    }
}

fn main() -> iced::Result {
    iced::application("Marquee", Marquee::update, Marquee::view)
        .theme(Marquee::theme)
        .centered()
        .run_with(Marquee::new)
}

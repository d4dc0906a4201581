//! Bundled poster manifest
//!
//! The poster directory is scanned once at startup into a manifest
//! keyed by bare filename. Lookups against the manifest return an
//! explicit miss instead of failing at render time, and the caller
//! selects the placeholder path deterministically.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::api::Movie;

/// Manifest of bundled poster files, keyed by filename.
#[derive(Debug, Default)]
pub struct PosterLibrary {
    entries: HashMap<String, PathBuf>,
}

impl PosterLibrary {
    /// Scan a directory tree for image files.
    ///
    /// Only files whose extension names a known image format are
    /// admitted. A missing directory yields an empty manifest so the
    /// application still runs, with every poster on the placeholder path.
    pub fn scan(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let mut entries = HashMap::new();

        if !dir.is_dir() {
            eprintln!("⚠️  Poster directory not found: {}", dir.display());
            return PosterLibrary { entries };
        }

        for entry in WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if image::ImageFormat::from_path(path).is_err() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                entries.insert(name.to_string(), path.to_path_buf());
            }
        }

        PosterLibrary { entries }
    }

    /// Look up a poster by bare filename. A miss is an explicit `None`.
    pub fn resolve(&self, filename: &str) -> Option<&Path> {
        self.entries.get(filename).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where a movie's poster should come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterSource {
    /// A bundled file resolved through the manifest.
    Bundled(PathBuf),
    /// A remote URL, to be downloaded into the poster cache.
    Remote(String),
    /// No usable image reference; show the text placeholder.
    Placeholder,
}

/// Decide the poster source for one movie.
///
/// A poster file that fails to resolve falls back to the placeholder,
/// not to the remote URL: a record that names a bundled file is trusted
/// to mean that file.
pub fn poster_source(library: &PosterLibrary, movie: &Movie) -> PosterSource {
    match &movie.poster_file {
        Some(file) => match library.resolve(file) {
            Some(path) => PosterSource::Bundled(path.to_path_buf()),
            None => PosterSource::Placeholder,
        },
        None => match &movie.poster_url {
            Some(url) => PosterSource::Remote(url.clone()),
            None => PosterSource::Placeholder,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AgeRating;
    use std::fs;

    fn movie() -> Movie {
        Movie {
            id: 1,
            slug: "the-last-reel".to_string(),
            name: "The Last Reel".to_string(),
            age_rating: AgeRating::T13,
            duration: 128,
            release_date: None,
            description: None,
            poster_file: None,
            poster_url: None,
        }
    }

    #[test]
    fn scan_admits_only_image_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("the-last-reel.jpg"), b"jpg").unwrap();
        fs::write(dir.path().join("paper-lanterns.png"), b"png").unwrap();
        fs::write(dir.path().join("notes.txt"), b"not a poster").unwrap();

        let library = PosterLibrary::scan(dir.path());
        assert_eq!(library.len(), 2);
        assert!(library.resolve("the-last-reel.jpg").is_some());
        assert!(library.resolve("paper-lanterns.png").is_some());
        assert!(library.resolve("notes.txt").is_none());
    }

    #[test]
    fn missing_directory_yields_an_empty_manifest() {
        let library = PosterLibrary::scan("/definitely/not/here");
        assert!(library.is_empty());
        assert!(library.resolve("anything.jpg").is_none());
    }

    #[test]
    fn bundled_file_wins_when_it_resolves() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("the-last-reel.jpg"), b"jpg").unwrap();
        let library = PosterLibrary::scan(dir.path());

        let movie = Movie {
            poster_file: Some("the-last-reel.jpg".to_string()),
            poster_url: Some("https://img.example.com/x.jpg".to_string()),
            ..movie()
        };
        match poster_source(&library, &movie) {
            PosterSource::Bundled(path) => {
                assert_eq!(path, dir.path().join("the-last-reel.jpg"));
            }
            other => panic!("expected Bundled, got {:?}", other),
        }
    }

    #[test]
    fn unresolvable_file_falls_back_to_placeholder_not_url() {
        let library = PosterLibrary::default();
        let movie = Movie {
            poster_file: Some("gone.jpg".to_string()),
            poster_url: Some("https://img.example.com/x.jpg".to_string()),
            ..movie()
        };
        assert_eq!(poster_source(&library, &movie), PosterSource::Placeholder);
    }

    #[test]
    fn url_is_used_only_without_a_poster_file() {
        let library = PosterLibrary::default();
        let movie = Movie {
            poster_url: Some("https://img.example.com/x.jpg".to_string()),
            ..movie()
        };
        assert_eq!(
            poster_source(&library, &movie),
            PosterSource::Remote("https://img.example.com/x.jpg".to_string())
        );
    }

    #[test]
    fn no_reference_at_all_is_the_placeholder() {
        let library = PosterLibrary::default();
        assert_eq!(poster_source(&library, &movie()), PosterSource::Placeholder);
    }
}

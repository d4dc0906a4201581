//! Small platform helpers

/// Hand a URI to the platform's default opener.
pub async fn open_system_uri(uri: String) -> Result<(), String> {
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = tokio::process::Command::new("open");
        c.arg(&uri);
        c
    };

    #[cfg(target_os = "linux")]
    let mut cmd = {
        let mut c = tokio::process::Command::new("xdg-open");
        c.arg(&uri);
        c
    };

    #[cfg(target_os = "windows")]
    let mut cmd = {
        let mut c = tokio::process::Command::new("cmd");
        c.arg("/C").arg("start").arg("").arg(&uri);
        c
    };

    let status = cmd
        .status()
        .await
        .map_err(|err| format!("could not launch system opener: {}", err))?;
    if !status.success() {
        return Err(format!("system opener exited with {:?}", status.code()));
    }
    Ok(())
}

//! Font provisioning.
//!
//! The label font is kept next to the program. If the file is already there
//! nothing touches the network. Otherwise it is downloaded once; a failed
//! download is logged and the caller carries on without it.

use crate::errors::IconError;
use crate::net::Fetcher;
use crate::render::fonts::validate_font_bytes;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Result of making sure the font file is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontAsset {
    /// The file was already present; no request was made.
    Cached(PathBuf),
    /// The file was fetched and written during this call.
    Downloaded(PathBuf),
    /// The file is absent and could not be fetched.
    Missing,
}

impl FontAsset {
    /// Path of the font file, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FontAsset::Cached(path) | FontAsset::Downloaded(path) => Some(path),
            FontAsset::Missing => None,
        }
    }
}

/// Makes sure a font file exists at `path`, downloading it from `url` if it does not.
/// Never fails: any problem is logged and reported as [`FontAsset::Missing`].
pub async fn ensure_font<F: Fetcher>(path: &Path, url: &str, fetcher: &F) -> FontAsset {
    // Anything already at the path counts as present; whether it is usable is decided at load time
    if path.exists() {
        log::debug!("Font already present at {}", path.display());
        return FontAsset::Cached(path.to_path_buf());
    }

    log::info!("Downloading font...");
    match download(path, url, fetcher).await {
        Ok(()) => FontAsset::Downloaded(path.to_path_buf()),
        Err(e) => {
            log::warn!("Font download failed: {e}");
            FontAsset::Missing
        }
    }
}

async fn download<F: Fetcher>(path: &Path, url: &str, fetcher: &F) -> Result<(), IconError> {
    let url = Url::parse(url)?;
    let response = fetcher.fetch(&url).await?;

    if !response.is_success() {
        return Err(IconError::HttpStatus {
            status: response.status,
            url: response.url.to_string(),
        });
    }

    // Error pages and captive portals answer 200 too
    validate_font_bytes(&response.body)?;

    write_atomically(path, &response.body)?;
    log::debug!("Wrote {} bytes to {}", response.body.len(), path.display());
    Ok(())
}

/// Writes into a temporary file next to `path` and renames it into place, so an interrupted
/// write never leaves a partial file behind at `path`.
fn write_atomically(path: &Path, data: &[u8]) -> Result<(), IconError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| IconError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::net::Response;
    use crate::render::fonts::TEST_FONT;
    use http::HeaderMap;
    use std::cell::Cell;

    /// Serves a fixed answer and counts how often it was asked.
    pub(crate) struct StubFetcher {
        pub calls: Cell<usize>,
        answer: Result<(u16, Vec<u8>), String>,
    }

    impl StubFetcher {
        pub fn ok(status: u16, body: Vec<u8>) -> Self {
            Self {
                calls: Cell::new(0),
                answer: Ok((status, body)),
            }
        }

        pub fn failing(msg: &str) -> Self {
            Self {
                calls: Cell::new(0),
                answer: Err(msg.to_string()),
            }
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<Response, IconError> {
            self.calls.set(self.calls.get() + 1);
            match &self.answer {
                Ok((status, body)) => Ok(Response {
                    url: url.clone(),
                    status: *status,
                    status_text: String::new(),
                    headers: HeaderMap::new(),
                    body: body.clone(),
                }),
                Err(msg) => Err(IconError::Network(msg.clone())),
            }
        }
    }

    const URL: &str = "https://fonts.example/NanumGothic-Bold.ttf";

    #[tokio::test]
    async fn present_file_makes_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"whatever is there").unwrap();

        let fetcher = StubFetcher::failing("must not be called");
        let asset = ensure_font(&path, URL, &fetcher).await;

        assert_eq!(asset, FontAsset::Cached(path.clone()));
        assert_eq!(fetcher.calls.get(), 0);
        // cached files are used as-is, never rewritten
        assert_eq!(std::fs::read(&path).unwrap(), b"whatever is there");
    }

    #[tokio::test]
    async fn directory_in_the_way_still_counts_as_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::create_dir(&path).unwrap();

        let fetcher = StubFetcher::failing("must not be called");
        assert_eq!(ensure_font(&path, URL, &fetcher).await, FontAsset::Cached(path.clone()));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[tokio::test]
    async fn served_font_is_downloaded_then_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = StubFetcher::ok(200, TEST_FONT.to_vec());
        assert_eq!(ensure_font(&path, URL, &fetcher).await, FontAsset::Downloaded(path.clone()));
        assert_eq!(fetcher.calls.get(), 1);
        assert_eq!(std::fs::read(&path).unwrap(), TEST_FONT);
        // only the font itself, no temp file
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);

        let again = StubFetcher::ok(200, TEST_FONT.to_vec());
        assert_eq!(ensure_font(&path, URL, &again).await, FontAsset::Cached(path.clone()));
        assert_eq!(again.calls.get(), 0);
    }

    #[tokio::test]
    async fn http_client_failure_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = crate::net::HttpFetcher::new("bad\nagent");
        assert_eq!(ensure_font(&path, URL, &fetcher).await, FontAsset::Missing);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn network_failure_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = StubFetcher::failing("connection refused");
        let asset = ensure_font(&path, URL, &fetcher).await;

        assert_eq!(asset, FontAsset::Missing);
        assert_eq!(asset.path(), None);
        assert_eq!(fetcher.calls.get(), 1);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn error_status_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = StubFetcher::ok(404, b"Not Found".to_vec());
        assert_eq!(ensure_font(&path, URL, &fetcher).await, FontAsset::Missing);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn non_font_body_is_not_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = StubFetcher::ok(200, b"<html>sign in to continue</html>".to_vec());
        assert_eq!(ensure_font(&path, URL, &fetcher).await, FontAsset::Missing);
        assert!(!path.exists());
        // no temp file left behind either
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn invalid_url_reports_missing_without_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");

        let fetcher = StubFetcher::failing("must not be called");
        assert_eq!(ensure_font(&path, "not a url", &fetcher).await, FontAsset::Missing);
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[test]
    fn atomic_write_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font.ttf");
        std::fs::write(&path, b"old").unwrap();

        write_atomically(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn atomic_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("font.ttf");
        assert!(matches!(write_atomically(&path, b"x"), Err(IconError::Io(_))));
    }
}

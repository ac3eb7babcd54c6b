#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid font: {0}")]
    InvalidFont(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Renderer error: {0}")]
    Renderer(String),
}

impl From<reqwest::Error> for IconError {
    fn from(e: reqwest::Error) -> Self {
        IconError::Network(e.to_string())
    }
}

impl From<url::ParseError> for IconError {
    fn from(e: url::ParseError) -> Self {
        IconError::Network(format!("invalid url: {e}"))
    }
}

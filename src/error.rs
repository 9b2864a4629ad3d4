use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuidError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("No investor named '{0}'")]
    UnknownInvestor(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuidError>;

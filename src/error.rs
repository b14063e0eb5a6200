use thiserror::Error;

#[derive(Error, Debug)]
pub enum StylegenError {
    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Css(#[from] cssgen::CssGenError),

    #[error("A logger was already installed for this process")]
    LoggerInstalled,
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, StylegenError>;

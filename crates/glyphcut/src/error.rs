use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid font data: {0}")]
    InvalidFont(String),
    #[error("unknown character: {0:?}")]
    UnknownChar(char),
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, FontError>;

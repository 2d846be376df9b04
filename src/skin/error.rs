//! Error type for skin operations

use thiserror::Error;

/// Errors raised while parsing identifiers, decoding images or loading config
#[derive(Debug, Error)]
pub enum SkinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid color '{0}' (expected #rrggbb)")]
    InvalidColor(String),
    #[error("unknown body part '{0}'")]
    UnknownPart(String),
    #[error("unknown face orientation '{0}'")]
    UnknownOrientation(String),
    #[error("unknown layer '{0}'")]
    UnknownLayer(String),
    #[error("not an image: {0}")]
    NotAnImage(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),
    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] ron::Error),
}

use thiserror::Error;

/// Failures while mounting an animation onto the page.
///
/// None of these are shown to the visitor; the frontend logs them and leaves
/// the affected component unrendered.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
    #[error("dom call failed: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;

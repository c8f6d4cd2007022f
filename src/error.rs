use thiserror::Error;

/// Failures raised while wiring page behaviors.
///
/// `MissingElement` is the expected outcome on pages that do not carry a
/// given piece of markup; callers treat it as "nothing to do".
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` has an unexpected type")]
    WrongElementType(&'static str),
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl SiteError {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            SiteError::MissingElement(_) | SiteError::WrongElementType(_)
        )
    }
}

use thiserror::Error;

/// Failures talking to the detection service.
///
/// A region with no detector configured is not an error — see
/// [`crate::DetectorClient::list_detector`].
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("detection service transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("detection service returned {status}: {message}")]
    Api { status: u16, message: String },
}

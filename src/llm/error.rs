use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the inference server.
///
/// `Connection` and `Http` come out of a single upstream attempt and are
/// subject to the retry budget. `Shape` is raised while extracting the reply
/// from an already-successful response, so it is never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("connection to inference server failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("inference server returned HTTP {status}")]
    Http { status: StatusCode },

    #[error("malformed completion response: no choices[0].message.content")]
    Shape,
}

use crate::model::ValidationErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::{io, net::SocketAddr};
use thiserror::Error;

/// Errors that can be returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested error percentage is outside `0..=100`.
    #[error("Error percentage must be between 0 and 100")]
    InvalidErrorPercent(i32),

    /// The requested status code cannot be put on an HTTP status line.
    #[error("Status code {0} cannot be used as an HTTP status")]
    UnrepresentableStatus(i32),

    #[error("cannot bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl Error {
    /// HTTP status used when the error is sent to a client.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidErrorPercent(_) => StatusCode::BAD_REQUEST,
            Error::UnrepresentableStatus(_) | Error::Bind { .. } | Error::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ValidationErrorResponse::new(self.to_string()))).into_response()
    }
}

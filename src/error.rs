use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("failed to fetch item {id}")]
  ItemFetch {
    id: u64,
    #[source]
    source: anyhow::Error,
  },
  #[error("story ids are unavailable")]
  SourceUnavailable(#[source] anyhow::Error),
  #[error("the parameter n must be greater than 0")]
  Validation,
}

impl Error {
  /// The error followed by each of its causes, separated by `: `.
  pub(crate) fn message(&self) -> String {
    let mut message = self.to_string();

    let mut cause = std::error::Error::source(self);

    while let Some(error) = cause {
      message.push_str(": ");
      message.push_str(&error.to_string());
      cause = error.source();
    }

    message
  }

  pub(crate) fn status(&self) -> StatusCode {
    match self {
      Self::ItemFetch { .. } | Self::SourceUnavailable(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
      Self::Validation => StatusCode::BAD_REQUEST,
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = self.status();

    let message = self.message();

    if status.is_server_error() {
      error!(%status, error = %message, "request failed");
    } else {
      debug!(%status, error = %message, "request rejected");
    }

    (status, message).into_response()
  }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};

/// Error returned by the HTTP handlers. The root cause is only logged and never exposed to the
/// client.
pub struct Error {
    root_cause: anyhow::Error,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(json!({ "message": "Internal server error" }))
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.root_cause, f)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.root_cause, f)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error { root_cause: err }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use actix_web::{body::MessageBody, ResponseError};
    use anyhow::anyhow;
    use insta::assert_snapshot;
    use std::str::from_utf8;

    #[test]
    fn hides_root_cause_from_response() -> anyhow::Result<()> {
        let error = Error::from(anyhow!("Store is unreachable."));
        assert_eq!(error.to_string(), "Store is unreachable.");

        let response = error.error_response();
        assert_eq!(response.status(), 500);

        let body = response.into_body().try_into_bytes().unwrap();
        assert_snapshot!(from_utf8(&body)?, @r###"{"message":"Internal server error"}"###);

        Ok(())
    }
}

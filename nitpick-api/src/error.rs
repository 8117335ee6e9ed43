use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde_json::json;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Entity {0} not found")]
    NotFound(Uuid),

    #[error("Transient I/O failure: {0}")]
    TransientIo(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::TransientIo(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::NotFound(u) => json!({
                "message": "entity not found",
                "type": "not-found",
                "uuid": u,
            }),
            Error::TransientIo(msg) => json!({
                "message": msg,
                "type": "transient-io",
            }),
            Error::Validation(msg) => json!({
                "message": msg,
                "type": "validation",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "not-found" => Error::NotFound(
                    data.get("uuid")
                        .and_then(|uuid| uuid.as_str())
                        .and_then(|uuid| Uuid::from_str(uuid).ok())
                        .ok_or_else(|| anyhow!("error is a not-found without a proper uuid"))?,
                ),
                "transient-io" => Error::TransientIo(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "validation" => Error::Validation(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .ok_or_else(|| anyhow!("validation error without a message"))?,
                )),
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}

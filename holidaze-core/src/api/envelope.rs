//! Response envelope decoding.
//!
//! Success payloads arrive as `{"data": ...}`, failures as
//! `{"errors": [{"message": ...}], ...}`. The HTTP status decides which
//! shape to expect.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{HolidazeError, HolidazeResult};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorItem>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    message: String,
}

/// Decode a response body given its HTTP status.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> HolidazeResult<T> {
    if !(200..300).contains(&status) {
        return Err(decode_error(status, body));
    }

    serde_json::from_slice::<Envelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| HolidazeError::Payload(e.to_string()))
}

/// Check a response that carries no payload (e.g. 204 on delete).
pub fn expect_success(status: u16, body: &[u8]) -> HolidazeResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(decode_error(status, body))
    }
}

const FORBIDDEN_MESSAGE: &str = "You do not have permission to do that.";

fn decode_error(status: u16, body: &[u8]) -> HolidazeError {
    let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();

    let message = envelope
        .errors
        .into_iter()
        .map(|e| e.message)
        .find(|m| !m.trim().is_empty())
        .or(envelope.message.filter(|m| !m.trim().is_empty()));

    match (status, message) {
        (403, Some(message)) => HolidazeError::Forbidden(message),
        (403, None) => HolidazeError::Forbidden(FORBIDDEN_MESSAGE.into()),
        (_, Some(message)) => HolidazeError::Api { status, message },
        (_, None) => HolidazeError::Status(status),
    }
}

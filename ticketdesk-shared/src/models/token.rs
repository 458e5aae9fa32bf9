//! Bearer token payload decoding.
//!
//! Tokens are three dot-separated base64url segments
//! (`header.payload.signature`). Only the payload is read here; the
//! signature is never verified on the client.

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde::Serialize;
use serde_json::Value;

use super::errors::TokenError;

/// Accepts payloads with or without trailing `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Claims the dashboard reads from a token payload.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub role: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

impl TokenClaims {
    /// Pick `role` and `userId` out of a decoded payload.
    ///
    /// Strings are taken as-is and numbers become their decimal text. Any
    /// other shape, or a payload that is not an object, leaves the claim
    /// unset.
    fn from_payload(payload: &Value) -> Self {
        Self {
            role: claim_text(payload.get("role")),
            user_id: claim_text(payload.get("userId")),
        }
    }
}

fn claim_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Decode the claims carried in the payload segment of `token`.
///
/// # Errors
///
/// Returns a [`TokenError`] when the payload segment is missing, is not
/// base64, is not UTF-8, is not JSON, or is JSON `null`.
pub fn decode_token_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::MissingPayload)?;
    // Standard-alphabet payloads show up from hand-built tokens.
    let normalized: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = PAYLOAD_ENGINE.decode(normalized)?;
    let text = String::from_utf8(bytes)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Null => Err(TokenError::NullPayload),
        payload => Ok(TokenClaims::from_payload(&payload)),
    }
}

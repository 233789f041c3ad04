//! `userId` claim lookup in unverified JWTs.
//!
//! Only the payload segment is read. The header and signature are
//! ignored, so tokens without `alg` or without a signature still work.
use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::error::{FixtureError, FixtureResult};

/// Claim holding the user id
pub const USER_ID_CLAIM: &str = "userId";

/// Failures while reading a token payload
#[derive(Debug, thiserror::Error)]
pub enum TokenError
{
    #[error("payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a JSON object: {0}")]
    Payload(#[from] serde_json::Error),
}

const INDIFFERENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// Base64url first, then the standard alphabet; padding optional for both
const ENGINES: [GeneralPurpose; 2] = [
    GeneralPurpose::new(&alphabet::URL_SAFE, INDIFFERENT),
    GeneralPurpose::new(&alphabet::STANDARD, INDIFFERENT),
];

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError>
{
    let [url_safe, standard] = &ENGINES;
    Ok(url_safe
        .decode(segment)
        .or_else(|_| standard.decode(segment))?)
}

/// Decode the second dot-separated segment of `token` and return its `userId` claim
pub fn user_id_claim(token: &str) -> FixtureResult<Option<String>>
{
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| FixtureError::InvalidArgument("token has no payload segment".to_string()))?;

    let bytes = decode_segment(payload)?;
    let claims: Map<String, Value> = serde_json::from_slice(&bytes).map_err(TokenError::from)?;
    let claim = claims
        .get(USER_ID_CLAIM)
        .and_then(render_claim);

    debug!(found = claim.is_some(), "userId claim lookup");
    Ok(claim)
}

fn render_claim(value: &Value) -> Option<String>
{
    match value
    {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}


#[cfg(test)]
mod tests
{
    use base64::Engine;
    use serde_json::json;

    use super::{
        test_tokens::{sign, unsigned},
        *,
    };

    #[test]
    fn string_claim_is_returned_verbatim()
    {
        let token = sign(&json!({ "userId": "42", "sub": "ada" }));
        assert_eq!(user_id_claim(&token).unwrap(), Some("42".to_string()));
    }

    #[test]
    fn numeric_claim_is_stringified()
    {
        let token = sign(&json!({ "userId": 7 }));
        assert_eq!(user_id_claim(&token).unwrap(), Some("7".to_string()));
    }

    #[test]
    fn missing_or_null_claim_is_none()
    {
        assert_eq!(user_id_claim(&sign(&json!({ "sub": "x" }))).unwrap(), None);
        assert_eq!(user_id_claim(&sign(&json!({ "userId": null }))).unwrap(), None);
    }

    #[test]
    fn expired_token_is_still_inspected()
    {
        let token = sign(&json!({ "userId": "1", "exp": 1 }));
        assert_eq!(user_id_claim(&token).unwrap(), Some("1".to_string()));
    }

    #[test]
    fn header_without_alg_is_ignored()
    {
        let token = format!("{}.sig", unsigned(&json!({ "typ": "JWT" }), &json!({ "userId": "5" })));
        assert_eq!(user_id_claim(&token).unwrap(), Some("5".to_string()));
    }

    #[test]
    fn two_segments_are_enough()
    {
        let token = unsigned(&json!({ "alg": "HS256" }), &json!({ "userId": "5" }));
        assert_eq!(user_id_claim(&token).unwrap(), Some("5".to_string()));
    }

    #[test]
    fn padded_standard_base64_payload_is_accepted()
    {
        let payload = base64::engine::general_purpose::STANDARD.encode(r#"{"userId":"abc"}"#);
        assert!(payload.ends_with('='));
        assert_eq!(user_id_claim(&format!("h.{payload}.s")).unwrap(), Some("abc".to_string()));
    }

    #[test]
    fn non_object_payload_is_a_token_error()
    {
        let token = unsigned(&json!({}), &json!([1, 2]));
        assert!(matches!(user_id_claim(&token), Err(FixtureError::Token(TokenError::Payload(_)))));
    }

    #[test]
    fn missing_payload_segment_is_rejected()
    {
        assert!(matches!(user_id_claim("opaque"), Err(FixtureError::InvalidArgument(_))));
    }

    #[test]
    fn garbage_is_a_token_error()
    {
        let err = user_id_claim("a.b.c").unwrap_err();
        assert!(matches!(err, FixtureError::Token(TokenError::Base64(_))));
    }
}

//! Encoding and claim-shape helpers shared by the signer

use crate::api::claims::ClaimSet;
use crate::api::claims::parser::json_type_name;
use crate::error::{TokenError, TokenResult};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::Value;

/// Base64 URL-safe encoding without padding (RFC 7515)
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Check the JSON types of the registered claims (RFC 7519 section 4.1).
///
/// Values of unregistered claims are not inspected.
pub(crate) fn validate_registered_claims(claims: &ClaimSet) -> TokenResult<()> {
    for claim in ["iss", "sub", "jti"] {
        if let Some(value) = claims.get(claim)
            && !value.is_string()
        {
            return Err(wrong_type(claim, "a string", value));
        }
    }

    for claim in ["exp", "nbf", "iat"] {
        if let Some(value) = claims.get(claim)
            && !value.is_number()
        {
            return Err(wrong_type(claim, "a number", value));
        }
    }

    if let Some(aud) = claims.get("aud") {
        let valid = match aud {
            Value::String(_) => true,
            Value::Array(items) => items.iter().all(Value::is_string),
            _ => false,
        };
        if !valid {
            return Err(wrong_type("aud", "a string or an array of strings", aud));
        }
    }

    Ok(())
}

fn wrong_type(claim: &str, expected: &str, found: &Value) -> TokenError {
    TokenError::Claims(format!(
        "The {claim} claim must be {expected}, found {}",
        json_type_name(found)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn claims(value: Value) -> ClaimSet {
        let map: Map<String, Value> = serde_json::from_value(value).unwrap();
        ClaimSet::from(map)
    }

    #[test]
    fn test_url_safe_without_padding() {
        assert_eq!(base64_url_encode(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn test_well_typed_registered_claims() {
        let set = claims(json!({
            "iss": "https://issuer.test",
            "sub": "alice",
            "aud": ["a", "b"],
            "exp": 10,
            "iat": 1.5,
            "custom": {"nested": [1, null]}
        }));
        assert!(validate_registered_claims(&set).is_ok());
    }

    #[test]
    fn test_numeric_date_must_be_number() {
        let err = validate_registered_claims(&claims(json!({"exp": "tomorrow"}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid claims: The exp claim must be a number, found string"
        );
    }

    #[test]
    fn test_audience_items_must_be_strings() {
        let err = validate_registered_claims(&claims(json!({"aud": ["a", 1]}))).unwrap_err();
        assert!(matches!(err, TokenError::Claims(_)));
    }

    #[test]
    fn test_subject_must_be_string() {
        assert!(validate_registered_claims(&claims(json!({"sub": {"id": 1}}))).is_err());
    }
}

//! Claim set layers and their merge

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validity window applied to every issued token, in seconds
pub const TOKEN_LIFETIME_SECS: i64 = 300;

/// Expiration claim
pub const EXP: &str = "exp";
/// Issued-at claim
pub const IAT: &str = "iat";
/// Authentication time claim
pub const AUTH_TIME: &str = "auth_time";

/// Final, immutable set of claims carried by a token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Map<String, Value>);

impl ClaimSet {
    /// Value of a claim
    #[inline]
    #[must_use]
    pub fn get(&self, claim: &str) -> Option<&Value> {
        self.0.get(claim)
    }

    /// Number of claims
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no claims
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Claims as a JSON object value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Time-derived claims, all computed from a single clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingClaims {
    /// `iat`
    pub issued_at: i64,
    /// `auth_time`
    pub auth_time: i64,
    /// `exp`
    pub expires_at: i64,
}

impl TimingClaims {
    /// Timing claims for a token issued at `now`.
    ///
    /// # Errors
    /// Returns [`TokenError::Claims`] if `exp` would not fit in an `i64`.
    #[inline]
    pub fn at(now: i64) -> TokenResult<Self> {
        let expires_at = now.checked_add(TOKEN_LIFETIME_SECS).ok_or_else(|| {
            TokenError::Claims(format!("Clock reading {now} leaves no room for the exp claim"))
        })?;
        Ok(Self {
            issued_at: now,
            auth_time: now,
            expires_at,
        })
    }

    fn entries(self) -> [(&'static str, i64); 3] {
        [
            (EXP, self.expires_at),
            (IAT, self.issued_at),
            (AUTH_TIME, self.auth_time),
        ]
    }
}

/// Merge the three claim layers into a new claim set.
///
/// Layers apply in order with last write winning: `base`, then `timing`, then
/// `overrides`. Inputs are left untouched.
#[must_use]
pub fn merge(
    base: &Map<String, Value>,
    timing: TimingClaims,
    overrides: &Map<String, Value>,
) -> ClaimSet {
    let mut claims = base.clone();
    for (name, value) in timing.entries() {
        claims.insert(name.to_string(), Value::from(value));
    }
    for (name, value) in overrides {
        claims.insert(name.clone(), value.clone());
    }
    ClaimSet(claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_timing_overwrites_base() {
        let base = object(json!({"sub": "alice", "exp": 1, "iat": 2, "auth_time": 3}));
        let claims = merge(&base, TimingClaims::at(1_000).unwrap(), &Map::new());

        assert_eq!(claims.get("sub"), Some(&json!("alice")));
        assert_eq!(claims.get(EXP), Some(&json!(1_300)));
        assert_eq!(claims.get(IAT), Some(&json!(1_000)));
        assert_eq!(claims.get(AUTH_TIME), Some(&json!(1_000)));
        assert_eq!(claims.len(), 4);
    }

    #[test]
    fn test_overrides_win_over_timing_and_base() {
        let base = object(json!({"sub": "alice", "groups": ["user"]}));
        let overrides = object(json!({"sub": "bob", "exp": "never", "extra": true}));
        let claims = merge(&base, TimingClaims::at(1_000).unwrap(), &overrides);

        assert_eq!(claims.get("sub"), Some(&json!("bob")));
        assert_eq!(claims.get(EXP), Some(&json!("never")));
        assert_eq!(claims.get(IAT), Some(&json!(1_000)));
        assert_eq!(claims.get("groups"), Some(&json!(["user"])));
        assert_eq!(claims.get("extra"), Some(&json!(true)));
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = object(json!({"sub": "alice"}));
        let overrides = object(json!({"iss": "https://issuer.test"}));
        let _ = merge(&base, TimingClaims::at(5).unwrap(), &overrides);
        assert_eq!(base.len(), 1);
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_claim_set_serializes_as_object() {
        let timing = TimingClaims::at(10).unwrap();
        let claims = merge(&object(json!({"sub": "alice"})), timing, &Map::new());
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, json!({"sub": "alice", "exp": 310, "iat": 10, "auth_time": 10}));
        assert_eq!(claims.to_value(), json);
    }

    #[test]
    fn test_timing_rejects_clock_at_end_of_range() {
        assert!(matches!(TimingClaims::at(i64::MAX), Err(TokenError::Claims(_))));
        assert!(matches!(
            TimingClaims::at(i64::MAX - TOKEN_LIFETIME_SECS),
            Ok(TimingClaims { expires_at: i64::MAX, .. })
        ));
    }

    fn claim_map() -> impl Strategy<Value = Map<String, Value>> {
        prop::collection::btree_map(
            prop_oneof![
                Just("exp".to_string()),
                Just("iat".to_string()),
                Just("auth_time".to_string()),
                "[a-z]{1,6}",
            ],
            prop_oneof![
                any::<i64>().prop_map(Value::from),
                "[a-zA-Z0-9 ]{0,12}".prop_map(Value::from),
                any::<bool>().prop_map(Value::from),
            ],
            0..8,
        )
        .prop_map(|entries| entries.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_timing_claims_hold_without_overrides(
            base in claim_map(),
            now in 0i64..4_000_000_000,
        ) {
            let claims = merge(&base, TimingClaims::at(now).unwrap(), &Map::new());
            let iat = claims.get(IAT).and_then(Value::as_i64).unwrap();
            prop_assert_eq!(iat, now);
            prop_assert_eq!(claims.get(EXP).and_then(Value::as_i64), Some(iat + TOKEN_LIFETIME_SECS));
            prop_assert_eq!(claims.get(AUTH_TIME).and_then(Value::as_i64), Some(iat));
        }

        #[test]
        fn prop_overrides_always_win(
            base in claim_map(),
            overrides in claim_map(),
            now in 0i64..4_000_000_000,
        ) {
            let claims = merge(&base, TimingClaims::at(now).unwrap(), &overrides);
            for (name, value) in &overrides {
                prop_assert_eq!(claims.get(name), Some(value));
            }
            for (name, value) in &base {
                let timing = [EXP, IAT, AUTH_TIME].contains(&name.as_str());
                if !overrides.contains_key(name) && !timing {
                    prop_assert_eq!(claims.get(name), Some(value));
                }
            }
        }
    }
}

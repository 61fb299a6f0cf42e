use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// - `sub`: User ID
/// - `username`: User's login
/// - `role`: Role name (`admin`, `teacher` or `student`)
/// - `exp` / `iat`: Unix timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Numeric user id carried in `sub`, if it parses.
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            username: "jdoe".to_string(),
            role: "student".to_string(),
            exp: 1_234_567_890,
            iat: 1_234_567_800,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&claims("7")).unwrap();
        assert!(serialized.contains(r#""sub":"7""#));
        assert!(serialized.contains(r#""username":"jdoe""#));
        assert!(serialized.contains(r#""role":"student""#));
    }

    #[test]
    fn test_user_id() {
        assert_eq!(claims("7").user_id(), Some(7));
        assert_eq!(claims("abc").user_id(), None);
    }
}

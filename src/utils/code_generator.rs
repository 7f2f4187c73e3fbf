//! Short identifier generation.
//!
//! A short identifier has the form `{user_name}-{link_type}-{token}`, where
//! the token is drawn from the URL-safe base64 alphabet.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 9;

/// Generates a cryptographically secure random token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character token.
///
/// # Errors
///
/// Returns an error if the system random number generator is unavailable.
pub fn generate_token() -> Result<String, getrandom::Error> {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer)?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Builds the public short identifier from its parts.
///
/// ```ignore
/// assert_eq!(compose_short_id("alice", "promo", "x1Y2"), "alice-promo-x1Y2");
/// ```
pub fn compose_short_id(user_name: &str, link_type: &str, token: &str) -> String {
    format!("{}-{}-{}", user_name, link_type, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_token_has_correct_length() {
        let token = generate_token().unwrap();
        assert_eq!(token.len(), 12);
    }

    #[test]
    fn test_generate_token_url_safe_characters() {
        let token = generate_token().unwrap();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!token.contains('='));
    }

    #[test]
    fn test_generate_token_produces_unique_tokens() {
        let tokens: HashSet<String> = (0..1000).map(|_| generate_token().unwrap()).collect();

        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_compose_short_id() {
        assert_eq!(
            compose_short_id("alice", "promo", "AbC-_9"),
            "alice-promo-AbC-_9"
        );
    }

    #[test]
    fn test_compose_short_id_keeps_prefix() {
        let token = generate_token().unwrap();
        let id = compose_short_id("bob", "social", &token);

        assert!(id.starts_with("bob-social-"));
        assert_eq!(id.strip_prefix("bob-social-"), Some(token.as_str()));
    }
}

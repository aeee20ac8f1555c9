//! Teams outgoing webhook signature verification.
//!
//! Teams signs each request with HMAC-SHA256 over the raw body, keyed by the
//! base64-decoded security token shown when the webhook is created. The
//! base64 digest arrives in the `Authorization` header as `HMAC <digest>`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Scheme prefix Teams puts in front of the digest.
const HMAC_SCHEME: &str = "HMAC ";

/// Verify a Teams webhook signature.
///
/// # Arguments
///
/// * `body` - The raw request body, exactly as received
/// * `authorization` - The `Authorization` header value, if any
/// * `secret` - The base64-encoded shared secret, if configured
///
/// # Returns
///
/// `true` only if both inputs are present and the digest matches. Any
/// missing or malformed input yields `false`.
pub fn verify_teams_signature(body: &[u8], authorization: Option<&str>, secret: Option<&str>) -> bool {
    let (signature, secret) = match (authorization, secret) {
        (Some(sig), Some(key)) if !sig.trim().is_empty() && !key.trim().is_empty() => {
            (sig.trim(), key.trim())
        }
        (sig, key) => {
            warn!(
                has_signature = sig.is_some_and(|s| !s.trim().is_empty()),
                has_secret = key.is_some_and(|k| !k.trim().is_empty()),
                "teams_signature_missing_fields"
            );
            return false;
        }
    };

    let signature = signature.strip_prefix(HMAC_SCHEME).unwrap_or(signature);

    let Ok(provided) = STANDARD.decode(signature) else {
        warn!(signature_length = signature.len(), "teams_signature_invalid_base64");
        return false;
    };

    let Ok(key) = STANDARD.decode(secret) else {
        warn!("teams_secret_invalid_base64");
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(&key) {
        Ok(m) => m,
        Err(_) => {
            warn!("teams_signature_invalid_key");
            return false;
        }
    };

    mac.update(body);

    // verify_slice compares in constant time
    let valid = mac.verify_slice(&provided).is_ok();

    if !valid {
        warn!(
            body_length = body.len(),
            signature_length = provided.len(),
            "teams_signature_mismatch"
        );
    }

    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "c2hhcmVkLXRlYW1zLXNlY3JldA=="; // "shared-teams-secret"

    fn sign(body: &[u8], secret_b64: &str) -> String {
        let key = STANDARD.decode(secret_b64).unwrap();
        let mut mac = HmacSha256::new_from_slice(&key).unwrap();
        mac.update(body);
        STANDARD.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_verify_signature_valid() {
        let body = br#"{"text":"<at>Weather</at> Helsinki,FI"}"#;
        let signature = sign(body, SECRET);

        assert!(verify_teams_signature(body, Some(&signature), Some(SECRET)));
    }

    #[test]
    fn test_verify_signature_with_hmac_scheme() {
        let body = br#"{"text":"<at>Weather</at> Oslo,NO"}"#;
        let header = format!("HMAC {}", sign(body, SECRET));

        assert!(verify_teams_signature(body, Some(&header), Some(SECRET)));
    }

    #[test]
    fn test_verify_signature_body_bit_flip() {
        let body = br#"{"text":"<at>Weather</at> Helsinki,FI"}"#.to_vec();
        let signature = sign(&body, SECRET);

        let mut tampered = body.clone();
        tampered[10] ^= 0x01;

        assert!(!verify_teams_signature(&tampered, Some(&signature), Some(SECRET)));
    }

    #[test]
    fn test_verify_signature_signature_bit_flip() {
        let body = br#"{"text":"<at>Weather</at> Helsinki,FI"}"#;
        let key = STANDARD.decode(SECRET).unwrap();
        let mut mac = HmacSha256::new_from_slice(&key).unwrap();
        mac.update(body);
        let mut digest = mac.finalize().into_bytes().to_vec();
        digest[0] ^= 0x80;
        let signature = STANDARD.encode(digest);

        assert!(!verify_teams_signature(body, Some(&signature), Some(SECRET)));
    }

    #[test]
    fn test_verify_signature_wrong_secret() {
        let body = b"{}";
        let signature = sign(body, "b3RoZXItc2VjcmV0");

        assert!(!verify_teams_signature(body, Some(&signature), Some(SECRET)));
    }

    #[test]
    fn test_verify_signature_missing_fields() {
        let body = b"{}";
        let signature = sign(body, SECRET);

        assert!(!verify_teams_signature(body, None, Some(SECRET)));
        assert!(!verify_teams_signature(body, Some(""), Some(SECRET)));
        assert!(!verify_teams_signature(body, Some(&signature), None));
        assert!(!verify_teams_signature(body, Some(&signature), Some("  ")));
    }

    #[test]
    fn test_verify_signature_invalid_base64() {
        let body = b"{}";
        assert!(!verify_teams_signature(body, Some("not base64!"), Some(SECRET)));
        assert!(!verify_teams_signature(body, Some(&sign(body, SECRET)), Some("%%%")));
    }
}

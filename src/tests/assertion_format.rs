#[cfg(test)]
mod tests {
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;
    use serde_json::Value;
    use sha2::Sha256;

    use crate::auth::assertion::sign_assertion;
    use crate::auth::claims::{JwtHeader, TokenClaims};
    use crate::auth::minter::TokenMinter;
    use crate::helpers::time::now_u64;
    use crate::tests::common::*;

    const AUDIENCE: &str = "https://oauth2.googleapis.com/token";

    fn split(assertion: &str) -> Vec<&str> {
        assertion.split('.').collect()
    }

    #[test]
    fn assertion_has_three_decodable_segments() {
        let claims = TokenClaims::new(TEST_ISSUER, TEST_SCOPE, AUDIENCE, 1_750_000_000);
        let assertion = sign_assertion(&test_credential(), &claims).unwrap();
        let parts = split(assertion.as_str());
        assert_eq!(parts.len(), 3);

        let header: JwtHeader = serde_json::from_slice(&decode_segment(parts[0])).unwrap();
        assert_eq!(header, JwtHeader::default());

        let payload: TokenClaims = serde_json::from_slice(&decode_segment(parts[1])).unwrap();
        assert_eq!(payload, claims);

        // signature bytes are raw, the segment itself is ascii
        assert!(String::from_utf8(parts[2].as_bytes().to_vec()).is_ok());
        assert_eq!(decode_segment(parts[2]).len(), 256);
    }

    #[test]
    fn payload_uses_registered_claim_names() {
        let claims = TokenClaims::new(TEST_ISSUER, TEST_SCOPE, AUDIENCE, 100);
        let assertion = sign_assertion(&test_credential(), &claims).unwrap();
        let payload: Value = serde_json::from_slice(&decode_segment(split(assertion.as_str())[1])).unwrap();

        assert_eq!(payload["iss"], TEST_ISSUER);
        assert_eq!(payload["scope"], TEST_SCOPE);
        assert_eq!(payload["aud"], AUDIENCE);
        assert_eq!(payload["iat"], 100);
        assert_eq!(payload["exp"], 3700);
    }

    #[test]
    fn signature_verifies_with_public_key() {
        let claims = TokenClaims::new(TEST_ISSUER, TEST_SCOPE, AUDIENCE, now_u64());
        let assertion = sign_assertion(&test_credential(), &claims).unwrap();

        let verifying_key = VerifyingKey::<Sha256>::new(test_key().to_public_key());
        let signature = Signature::try_from(decode_segment(assertion.signature_segment()).as_slice()).unwrap();

        assert!(verifying_key
            .verify(assertion.signing_input().as_bytes(), &signature)
            .is_ok());
    }

    #[test]
    fn signature_rejects_tampered_payload() {
        let claims = TokenClaims::new(TEST_ISSUER, TEST_SCOPE, AUDIENCE, now_u64());
        let assertion = sign_assertion(&test_credential(), &claims).unwrap();

        let forged = TokenClaims::new("attacker@example.com", TEST_SCOPE, AUDIENCE, claims.issued_at);
        let forged_input = format!(
            "{}.{}",
            split(assertion.as_str())[0],
            crate::auth::assertion::base64url_encode(serde_json::to_vec(&forged).unwrap())
        );

        let verifying_key = VerifyingKey::<Sha256>::new(test_key().to_public_key());
        let signature = Signature::try_from(decode_segment(assertion.signature_segment()).as_slice()).unwrap();
        assert!(verifying_key.verify(forged_input.as_bytes(), &signature).is_err());
    }

    #[test]
    fn fresh_assertion_is_valid_for_one_hour() {
        let before = now_u64();
        let assertion = TokenMinter::assertion(&test_credential(), TEST_SCOPE, AUDIENCE).unwrap();
        let after = now_u64();

        let payload: TokenClaims = serde_json::from_slice(&decode_segment(split(assertion.as_str())[1])).unwrap();
        assert_eq!(payload.expires_at - payload.issued_at, 3600);
        assert!(payload.issued_at >= before && payload.issued_at <= after);
        assert_eq!(payload.issuer, TEST_ISSUER);
    }

    #[test]
    fn segments_are_unpadded_base64url() {
        // vary the payload length so every padding remainder is exercised
        for extra in 0..4 {
            let scope = format!("{}{}", TEST_SCOPE, "x".repeat(extra));
            let claims = TokenClaims::new(TEST_ISSUER, &scope, AUDIENCE, now_u64());
            let assertion = sign_assertion(&test_credential(), &claims).unwrap();
            for part in split(assertion.as_str()) {
                assert!(!part.contains('+'), "{}", part);
                assert!(!part.contains('/'), "{}", part);
                assert!(!part.contains('='), "{}", part);
            }
        }
    }

    #[test]
    fn pkcs1v15_signing_is_deterministic() {
        let claims = TokenClaims::new(TEST_ISSUER, TEST_SCOPE, AUDIENCE, 42);
        let first = sign_assertion(&test_credential(), &claims).unwrap();
        let second = sign_assertion(&test_credential(), &claims).unwrap();
        assert_eq!(first, second);
    }
}

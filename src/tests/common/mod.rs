// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::OnceLock;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use reqwest::Client;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;

use crate::auth::credential::ServiceAccountCredential;

pub const TEST_ISSUER: &str = "rsvp-writer@wedding-site.iam.gserviceaccount.com";
pub const TEST_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// base64url that accepts both padded and unpadded input
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

static TEST_KEY: OnceLock<RsaPrivateKey> = OnceLock::new();

/// One 2048-bit key per test binary; generation is slow.
pub fn test_key() -> &'static RsaPrivateKey {
    TEST_KEY.get_or_init(|| {
        let mut rng = rand::thread_rng();
        RsaPrivateKey::new(&mut rng, 2048).expect("rsa key generation")
    })
}

pub fn test_private_key_pem() -> String {
    test_key()
        .to_pkcs8_pem(LineEnding::LF)
        .expect("pkcs8 pem")
        .to_string()
}

pub fn test_credential() -> ServiceAccountCredential {
    ServiceAccountCredential::new(TEST_ISSUER, test_private_key_pem())
}

/// Same key, body cut short so it no longer decodes.
pub fn truncated_credential() -> ServiceAccountCredential {
    let pem = test_private_key_pem();
    let lines: Vec<&str> = pem.lines().collect();
    let truncated = format!(
        "{}\n{}\n{}\n",
        lines[0],
        &lines[1][..lines[1].len() - 3],
        lines[lines.len() - 1]
    );
    ServiceAccountCredential::new(TEST_ISSUER, truncated)
}

pub fn decode_segment(segment: &str) -> Vec<u8> {
    URL_SAFE_LENIENT
        .decode(segment)
        .expect("segment is base64url")
}

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

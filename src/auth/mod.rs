//! Service-account token minting.
//!
//! Signs an RS256 bearer assertion with a service-account key and exchanges
//! it at an OAuth token endpoint for a short-lived access token.

pub mod assertion;
pub mod claims;
pub mod credential;
pub mod error;
pub mod minter;

pub use assertion::{sign_assertion, SignedAssertion};
pub use claims::{JwtHeader, TokenClaims};
pub use credential::ServiceAccountCredential;
pub use error::MintError;
pub use minter::{AccessToken, TokenMinter};

//! # RSVP Relay Library
//!
//! Receives RSVP form submissions, mints a Google service-account access
//! token (signed RS256 assertion exchanged at the OAuth token endpoint)
//! and appends each submission as a spreadsheet row.
//!
//! Modules:
//! - `auth` — credential, assertion signing, token exchange
//! - `sheets` — append-row client for the spreadsheet API
//! - `rsvp` — submission model and relay flow
//! - `config` — service configuration, env expansion, validation
//! - `server` — HTTP surface for submissions and metrics

pub mod auth;
pub mod config;
pub mod helpers;
pub mod observability;
pub mod rsvp;
pub mod server;
pub mod sheets;
pub mod tests;
pub mod utils;


pub use crate::auth::{AccessToken, MintError, ServiceAccountCredential, TokenMinter};
pub use crate::config::service::ServiceConfig;

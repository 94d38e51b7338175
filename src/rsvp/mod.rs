//! RSVP form relay: required-field check, token mint, row append.

pub mod notify;
pub mod relay;
pub mod submission;

pub use relay::{RelayError, RsvpRelay};
pub use submission::RsvpSubmission;

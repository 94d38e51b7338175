use anyhow::Result;
use tracing::debug;

use crate::rsvp::submission::RsvpSubmission;

/// Guest confirmation hook, run after the row is stored.
///
/// No mail transport is wired; sending always succeeds.
pub async fn send_confirmation(submission: &RsvpSubmission) -> Result<()> {
    debug!(
        "confirmation skipped for '{}': no mail transport configured",
        submission.name.as_deref().unwrap_or_default()
    );
    Ok(())
}

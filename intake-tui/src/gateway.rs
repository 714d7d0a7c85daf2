//! Simulated submission gateway.
//!
//! Stands in for the network call that would create the account. It
//! always succeeds after a fixed delay; the only observable output is
//! the submitted record in the diagnostic log.

use std::time::Duration;

use log::info;

use crate::account::InvestmentDetails;

/// How long the simulated network call takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(5);

/// Submit an account application. Cannot fail.
pub async fn submit_application(details: InvestmentDetails) {
    tokio::time::sleep(SUBMIT_DELAY).await;

    match serde_json::to_string_pretty(&details) {
        Ok(json) => info!("account application submitted: {json}"),
        Err(err) => info!("account application submitted ({err})"),
    }
}

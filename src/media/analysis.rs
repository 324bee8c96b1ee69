/// Simulated image analysis
///
/// There is no real inference: "analysis" is a fixed delay after which the
/// session loads its sample report. The future resolves to the ticket it was
/// scheduled with so the session can tell current runs from stale ones.

use std::time::Duration;

use crate::state::Ticket;

pub async fn simulate_analysis(ticket: Ticket, delay: Duration) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}

use contracts::domain::tickets::TicketCard;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the ticket catalog from the backend.
pub async fn fetch_tickets() -> Result<Vec<TicketCard>, String> {
    let response = Request::get(&api_url("/api/tickets"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Ticket request failed: {}", response.status()));
    }

    response
        .json::<Vec<TicketCard>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

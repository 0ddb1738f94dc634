use axum::Json;
use contracts::domain::tickets::{catalog, TicketCard};

/// GET /api/tickets
pub async fn list_all() -> Json<Vec<TicketCard>> {
    Json(catalog())
}

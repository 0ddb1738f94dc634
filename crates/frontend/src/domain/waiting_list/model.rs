use contracts::domain::waiting_list::SignupForm;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send one submission to the waiting-list endpoint.
///
/// The widget only distinguishes ok from not-ok; response bodies are never
/// inspected.
pub async fn submit(form: &SignupForm) -> Result<(), String> {
    let response = Request::post(&api_url("/api/waiting-list"))
        .json(form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Submission failed: {}", response.status()));
    }

    Ok(())
}

use super::{dto::EventoResponse, model::Event};
use lazy_static::lazy_static;
use reqwest::Client;
use serde_json::json;
use std::fmt::Display;
use tracing::{error, info};

lazy_static! {
    static ref REST_CLIENT: Client = Client::new();
}

pub struct EventosAPI {
    client: Client,
    base_url: String,
}

impl EventosAPI {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: REST_CLIENT.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /**
    Returns every event the backend holds, in the backend's order
    */
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_events(&self) -> Result<Vec<Event>, APIError> {
        info!("Getting all events");

        let json_response = self
            .client
            .get(format!("{}/eventos", self.base_url))
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {:?}", e);
                APIError::LoadFailure
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Backend answered with an error status: {:?}", e);
                APIError::LoadFailure
            })?
            .text()
            .await
            .map_err(|e| {
                error!("Failed reading the response body: {:?}", e);
                APIError::LoadFailure
            })?;
        let parsed_response = serde_json::from_str::<Vec<EventoResponse>>(&json_response);

        match parsed_response {
            Ok(parsed_response) => Ok(parsed_response
                .iter()
                .map(EventoResponse::to_model)
                .collect()),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(APIError::LoadFailure)
            }
        }
    }

    /**
    Flips the event's status to inactivo server-side (soft delete).
    The record itself is never removed.
    */
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn deactivate_event(&self, id: &str) -> Result<(), APIError> {
        info!("Deactivating event");

        self.client
            .patch(format!("{}/eventos/{}", self.base_url, id))
            .json(&json!({ "estado": "inactivo" }))
            .send()
            .await
            .map_err(|e| {
                error!("Request failed: {:?}", e);
                APIError::UpdateFailure
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Backend answered with an error status: {:?}", e);
                APIError::UpdateFailure
            })?;

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum APIError {
    LoadFailure,
    UpdateFailure,
}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            APIError::LoadFailure => write!(f, "could not load events"),
            APIError::UpdateFailure => write!(f, "could not update the event"),
        }
    }
}

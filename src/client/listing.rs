// src/client/listing.rs

use crate::{
    client::{ApiClient, ClientError},
    models::{
        case::Case,
        customer::Customer,
        document::Document,
        envelope::{CaseListing, CustomerListing, DocumentListing, Envelope},
    },
};

/// Rotas de mesma origem (`/api/cases`, `/api/customers`, `/api/documents`).
#[derive(Debug, Clone)]
pub struct ListingClient {
    api: ApiClient,
}

impl ListingClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_all_customers(&self) -> Result<Vec<Customer>, ClientError> {
        let envelope: Envelope<CustomerListing> = self.api.get("/api/customers", &[]).await?;
        Ok(unwrap_envelope(envelope)?.customers)
    }

    pub async fn get_all_cases(&self) -> Result<Vec<Case>, ClientError> {
        let envelope: Envelope<CaseListing> = self.api.get("/api/cases", &[]).await?;
        Ok(unwrap_envelope(envelope)?.cases)
    }

    pub async fn get_all_documents(&self) -> Result<Vec<Document>, ClientError> {
        let envelope: Envelope<DocumentListing> = self.api.get("/api/documents", &[]).await?;
        Ok(unwrap_envelope(envelope)?.documents)
    }
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, ClientError> {
    envelope.into_result().map_err(ClientError::Envelope)
}

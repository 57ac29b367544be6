// src/client/booking.rs

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    client::{ApiClient, ClientError},
    models::appointment::{
        Appointment, AvailabilityResponse, CreateAppointmentRequest, CreateAppointmentResponse,
        SearchAppointmentsParams, SearchAppointmentsResponse, ServiceHealth,
    },
};

/// Serviço externo de agendamentos (fonte única dos Termine).
#[derive(Debug, Clone)]
pub struct BookingClient {
    api: ApiClient,
}

impl BookingClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn search_appointments(
        &self,
        params: &SearchAppointmentsParams,
    ) -> Result<SearchAppointmentsResponse, ClientError> {
        self.api
            .get("/api/appointments/search", &params.to_query())
            .await
    }

    pub async fn check_availability(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<AvailabilityResponse, ClientError> {
        let query = [
            ("startDate", start.format("%Y-%m-%d").to_string()),
            ("endDate", end.format("%Y-%m-%d").to_string()),
        ];
        self.api.get("/api/availability/check", &query).await
    }

    /// Valida localmente antes de enviar; nada sai se o payload for inválido.
    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> Result<CreateAppointmentResponse, ClientError> {
        request.validate()?;
        self.api.post("/api/appointments/create", request).await
    }

    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>, ClientError> {
        let response = self
            .search_appointments(&SearchAppointmentsParams::default())
            .await?;
        Ok(response.appointments)
    }

    pub async fn get_today_appointments(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<Appointment>, ClientError> {
        let response = self
            .search_appointments(&SearchAppointmentsParams::for_day(today))
            .await?;
        Ok(response.appointments)
    }

    pub async fn check_health(&self) -> Result<ServiceHealth, ClientError> {
        self.api.get("/", &[]).await
    }
}

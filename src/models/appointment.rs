// src/models/appointment.rs

//! Tipos da API externa de agendamentos (Termine). Nada aqui é persistido
//! localmente; os formatos seguem o serviço externo (camelCase nos payloads).

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

use crate::models::labels::label_registry;

// --- ENUMS ---

label_registry! {
    AppointmentStatus {
        Scheduled => "scheduled", "Geplant", Default;
        Confirmed => "confirmed", "Bestätigt", Success;
        InProgress => "in_progress", "In Bearbeitung", Warning;
        Completed => "completed", "Abgeschlossen", Success;
        Cancelled => "cancelled", "Storniert", Destructive;
        NoShow => "no_show", "Nicht erschienen", Destructive;
    }
}

label_registry! {
    DamageType {
        Unfallschaden => "Unfallschaden", "Unfallschaden", Default;
        Leasingrueckgabe => "Leasingrückgabe", "Leasingrückgabe", Default;
        Fahrzeugbewertung => "Fahrzeugbewertung", "Fahrzeugbewertung", Default;
        Beweissicherung => "Beweissicherung", "Beweissicherung", Default;
        Sonstiges => "Sonstiges", "Sonstiges", Default;
    }
}

label_registry! {
    LocationType {
        VorOrt => "vor_ort", "Vor Ort", Default;
        Werkstatt => "werkstatt", "Werkstatt", Secondary;
        Buero => "buero", "Büro", Secondary;
    }
}

// --- TERMIN ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub appointment_number: String,

    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub case_id: Option<i64>,

    // Mantém o offset enviado pelo serviço: "hoje" é o dia nesse fuso
    pub scheduled_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub end_at: Option<DateTime<FixedOffset>>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default = "default_location_type")]
    pub location_type: LocationType,

    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub damage_type: DamageType,

    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub google_calendar_event_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_location_type() -> LocationType {
    LocationType::VorOrt
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// --- BUSCA ---

/// Filtros de `GET /api/appointments/search`. Campos vazios não são enviados.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchAppointmentsParams {
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub appointment_number: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SearchAppointmentsParams {
    /// Só o dia informado (startDate = endDate).
    pub fn for_day(day: NaiveDate) -> Self {
        Self {
            start_date: Some(day),
            end_date: Some(day),
            ..Self::default()
        }
    }

    /// Pares da query string, na ordem da API e sem os valores vazios.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("customerEmail", self.customer_email.clone()),
            ("customerPhone", self.customer_phone.clone()),
            ("appointmentNumber", self.appointment_number.clone()),
            ("status", self.status.clone()),
        ];
        let dates = [
            ("startDate", self.start_date.map(|d| d.format("%Y-%m-%d").to_string())),
            ("endDate", self.end_date.map(|d| d.format("%Y-%m-%d").to_string())),
        ];

        text.into_iter()
            .chain(dates)
            .filter_map(|(key, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (key, v)))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchAppointmentsResponse {
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

// --- DISPONIBILIDADE ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: String,
    pub end: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub success: bool,
    pub period: AvailabilityPeriod,
    #[serde(default)]
    pub available_slots: Vec<DayAvailability>,
}

// --- CRIAÇÃO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_time_range"))]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, message = "Name ist erforderlich."))]
    pub customer_name: String,

    #[validate(email(message = "Ungültige E-Mail-Adresse."))]
    pub customer_email: String,

    #[validate(length(min = 1, message = "Telefonnummer ist erforderlich."))]
    pub customer_phone: String,

    pub scheduled_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,

    #[validate(length(min = 1, message = "Ort ist erforderlich."))]
    pub location: String,

    pub damage_type: DamageType,
}

fn validate_time_range(request: &CreateAppointmentRequest) -> Result<(), ValidationError> {
    if request.end_at <= request.scheduled_at {
        let mut err = ValidationError::new("time_range");
        err.message = Some("Das Ende muss nach dem Beginn liegen.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentResponse {
    pub success: bool,
    #[serde(default)]
    pub appointment: Option<Appointment>,
    #[serde(default)]
    pub appointment_number: Option<String>,
    #[serde(default)]
    pub google_calendar_event_id: Option<String>,
}

/// Resposta de `GET /` do serviço externo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    pub version: String,
}

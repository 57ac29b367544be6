// src/services/dashboard_service.rs

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{
    appointment::{Appointment, AppointmentStatus},
    dashboard::DashboardStats,
};

/// Quantos Termine a visão geral lista abaixo dos cards.
pub const RECENT_APPOINTMENTS: usize = 5;

#[derive(Clone, Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Cards do topo. "Hoje" é a data de `scheduled_at` no offset em que o
    /// serviço a enviou.
    pub fn summarize(&self, appointments: &[Appointment], today: NaiveDate) -> DashboardStats {
        let today_appointments = appointments
            .iter()
            .filter(|a| a.scheduled_at.date_naive() == today)
            .count();

        let upcoming_appointments = appointments
            .iter()
            .filter(|a| {
                matches!(
                    a.status,
                    AppointmentStatus::Scheduled | AppointmentStatus::Confirmed
                )
            })
            .count();

        let completed_appointments = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count();

        // Termine sem customer_id não contam como cliente
        let total_customers = appointments
            .iter()
            .filter_map(|a| a.customer_id)
            .collect::<HashSet<_>>()
            .len();

        DashboardStats {
            total_appointments: appointments.len(),
            today_appointments,
            upcoming_appointments,
            completed_appointments,
            total_customers,
        }
    }

    pub fn recent<'a>(&self, appointments: &'a [Appointment]) -> &'a [Appointment] {
        &appointments[..appointments.len().min(RECENT_APPOINTMENTS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::{DamageType, LocationType};
    use chrono::DateTime;

    fn appointment(id: i64, at: &str, status: AppointmentStatus, customer: Option<i64>) -> Appointment {
        Appointment {
            id,
            appointment_number: format!("T-2025-{id:03}"),
            customer_id: customer,
            case_id: None,
            scheduled_at: DateTime::parse_from_rfc3339(at).unwrap(),
            end_at: None,
            location: "Bielefeld".into(),
            location_type: LocationType::VorOrt,
            status,
            damage_type: DamageType::Unfallschaden,
            notes: None,
            google_calendar_event_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn counts_today_upcoming_completed_and_distinct_customers() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let list = vec![
            appointment(1, "2025-03-07T09:00:00Z", AppointmentStatus::Confirmed, Some(10)),
            appointment(2, "2025-03-08T09:00:00Z", AppointmentStatus::Scheduled, Some(10)),
            appointment(3, "2025-03-01T09:00:00Z", AppointmentStatus::Completed, Some(11)),
            appointment(4, "2025-03-02T09:00:00Z", AppointmentStatus::Cancelled, None),
        ];

        let stats = DashboardService::new().summarize(&list, today);
        assert_eq!(
            stats,
            DashboardStats {
                total_appointments: 4,
                today_appointments: 1,
                upcoming_appointments: 2,
                completed_appointments: 1,
                total_customers: 2,
            }
        );
    }

    #[test]
    fn today_uses_the_offset_sent_by_the_service() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        let list = vec![
            // 2025-03-06T23:30Z em UTC, mas dia 7 no horário alemão
            appointment(1, "2025-03-07T00:30:00+01:00", AppointmentStatus::Scheduled, None),
            // 2025-03-07T22:30Z em UTC, mas já dia 8 no offset enviado
            appointment(2, "2025-03-08T00:30:00+02:00", AppointmentStatus::Scheduled, None),
        ];

        let stats = DashboardService::new().summarize(&list, today);
        assert_eq!(stats.today_appointments, 1);
    }

    #[test]
    fn recent_is_capped_at_five() {
        let list: Vec<_> = (1..=7)
            .map(|i| appointment(i, "2025-03-07T09:00:00Z", AppointmentStatus::Scheduled, None))
            .collect();
        let service = DashboardService::new();
        assert_eq!(service.recent(&list).len(), 5);
        assert_eq!(service.recent(&list[..2]).len(), 2);
    }
}

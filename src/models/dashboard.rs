// src/models/dashboard.rs

use serde::Serialize;

// Os Cards do Topo da visão geral
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_appointments: usize,
    pub today_appointments: usize,    // scheduled_at cai no dia de hoje (offset do serviço)
    pub upcoming_appointments: usize, // scheduled ou confirmed
    pub completed_appointments: usize,
    pub total_customers: usize,       // customer_id distintos entre os termine
}

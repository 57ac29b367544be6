pub mod case_service;
pub use case_service::CaseService;
pub mod customer_service;
pub use customer_service::CustomerService;
pub mod document_service;
pub use document_service::DocumentService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;

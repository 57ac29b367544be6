pub mod pool;
pub use pool::{connect_pool, DatabaseSettings, Lease, LeaseTracker};

pub mod case_repo;
pub use case_repo::{CaseRepository, CaseRow};
pub mod customer_repo;
pub use customer_repo::{CustomerRepository, CustomerRow};
pub mod document_repo;
pub use document_repo::{DocumentRepository, DocumentRow};

pub mod store;
pub use store::{PgRecordStore, PoolStatus, RecordStore};

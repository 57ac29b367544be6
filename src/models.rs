pub mod labels;

pub mod appointment;
pub mod case;
pub mod customer;
pub mod dashboard;
pub mod document;
pub mod envelope;

pub use labels::{BadgeVariant, Labeled};

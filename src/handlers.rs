pub mod cases;
pub mod customers;
pub mod documents;
pub mod health;
pub mod pages;

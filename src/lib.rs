pub mod client;
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod formatters;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

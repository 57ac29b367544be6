pub mod filter;
pub mod pages;
pub mod render;
pub mod state;

pub use filter::{CategoryFilter, ListQuery, Searchable};
pub use pages::{dashboard_page, list_page, DashboardPage, ListPage};
pub use render::PageRenderer;
pub use state::ViewState;

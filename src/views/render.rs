// src/views/render.rs

use handlebars::Handlebars;
use serde::Serialize;

use crate::{
    common::error::AppError,
    views::pages::{DashboardPage, ListPage},
};

const LIST: &str = "list";
const DASHBOARD: &str = "dashboard";

/// Templates embutidos no binário; registrados uma vez no startup.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let mut registry = Handlebars::new();

        registry.register_partial("header", include_str!("../../templates/header.hbs"))?;
        registry.register_partial("footer", include_str!("../../templates/footer.hbs"))?;
        registry.register_partial("cell", include_str!("../../templates/cell.hbs"))?;
        registry.register_template_string(LIST, include_str!("../../templates/list.hbs"))?;
        registry.register_template_string(DASHBOARD, include_str!("../../templates/dashboard.hbs"))?;

        Ok(Self { registry })
    }

    pub fn render_list(&self, page: &ListPage) -> Result<String, AppError> {
        self.render(LIST, page)
    }

    pub fn render_dashboard(&self, page: &DashboardPage) -> Result<String, AppError> {
        self.render(DASHBOARD, page)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::InternalServerError(anyhow::anyhow!("Template '{name}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::customer::Customer,
        views::{pages::list_page, state::ViewState},
    };
    use chrono::Utc;

    fn customer(number: &str, name: &str) -> Customer {
        Customer {
            id: 1,
            customer_number: number.into(),
            name: name.into(),
            email: "max@example.de".into(),
            phone: "0521123456".into(),
            case_count: 2,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn renders_table_rows_with_links() {
        let renderer = PageRenderer::new().unwrap();
        let state = ViewState::Ready(vec![customer("k-2025-001", "Max Mustermann")]);
        let html = renderer
            .render_list(&list_page(&state, "", None, |_| true, Utc::now()))
            .unwrap();

        assert!(html.contains("<h1>Kunden</h1>"));
        assert!(html.contains("Alle Kunden (1)"));
        assert!(html.contains("K-2025-001"));
        assert!(html.contains("Max Mustermann"));
        assert!(html.contains("mailto:max@example.de"));
        assert!(html.contains("Version "));
    }

    #[test]
    fn escapes_user_content() {
        let renderer = PageRenderer::new().unwrap();
        let state = ViewState::Ready(vec![customer("K-1", "<script>alert(1)</script>")]);
        let html = renderer
            .render_list(&list_page(&state, "", None, |_| true, Utc::now()))
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

// src/views/filter.rs

//! Projeção das listas: busca textual + filtro de categoria (select).

use std::fmt;

use serde::Deserialize;

use crate::models::{
    appointment::Appointment,
    case::{Case, CaseStatus},
    customer::Customer,
    document::{Document, DocumentType},
};

/// Valor do select que desliga o filtro.
pub const ALL: &str = "all";

/// Query string das páginas de lista (`?q=...&status=...&typ=...`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub typ: Option<String>,
}

impl ListQuery {
    pub fn term(&self) -> &str {
        self.q.as_deref().map(str::trim).unwrap_or_default()
    }
}

pub trait Searchable {
    /// Campos considerados pela busca.
    fn search_fields(&self) -> Vec<&str>;

    /// Substring sem diferenciar maiúsculas. Termo vazio casa com tudo.
    fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&term))
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.appointment_number.as_str(),
            self.location.as_str(),
            self.damage_type.as_str(),
        ]
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.customer_number.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
        ]
    }
}

impl Searchable for Case {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.case_number.as_str(),
            self.vehicle_make.as_str(),
            self.vehicle_model.as_str(),
            self.license_plate.as_str(),
        ]
    }
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.filename.as_str()];
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        fields
    }
}

/// Entidades com select de categoria.
pub trait Categorized {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;
    fn parse_category(raw: &str) -> Option<Self::Category>;
}

impl Categorized for Case {
    type Category = CaseStatus;

    fn category(&self) -> &CaseStatus {
        &self.status
    }

    fn parse_category(raw: &str) -> Option<CaseStatus> {
        CaseStatus::parse(raw)
    }
}

impl Categorized for Document {
    type Category = DocumentType;

    fn category(&self) -> &DocumentType {
        &self.document_type
    }

    fn parse_category(raw: &str) -> Option<DocumentType> {
        DocumentType::parse(raw)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
    // valor desconhecido: não casa com nada
    Unmatched(String),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn from_param(raw: Option<&str>, parse: impl Fn(&str) -> Option<C>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(ALL) => CategoryFilter::All,
            Some(value) => parse(value)
                .map(CategoryFilter::Only)
                .unwrap_or_else(|| CategoryFilter::Unmatched(value.to_string())),
        }
    }

    pub fn matches(&self, value: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == value,
            CategoryFilter::Unmatched(_) => false,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Valor a marcar como selecionado no select.
    pub fn selected(&self) -> String
    where
        C: fmt::Display,
    {
        match self {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Only(c) => c.to_string(),
            CategoryFilter::Unmatched(raw) => raw.clone(),
        }
    }
}

/// Linhas visíveis: `rows.filter(busca).filter(categoria)`.
pub fn visible<'a, T, F>(rows: &'a [T], term: &str, keep: F) -> Vec<&'a T>
where
    T: Searchable,
    F: Fn(&T) -> bool,
{
    rows.iter()
        .filter(|row| row.matches_search(term))
        .filter(|row| keep(*row))
        .collect()
}

/// Projeção completa para entidades com categoria.
pub fn visible_in_category<'a, T>(
    rows: &'a [T],
    term: &str,
    filter: &CategoryFilter<T::Category>,
) -> Vec<&'a T>
where
    T: Searchable + Categorized,
{
    visible(rows, term, |row| filter.matches(row.category()))
}

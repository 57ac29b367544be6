// src/views/pages.rs

//! Modelos serializáveis das páginas (contexto dos templates handlebars).

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    formatters::{
        format_appointment_number, format_currency, format_customer_number, format_day,
        format_file_size, format_phone, format_timestamp, relative_time, truncate,
    },
    models::{
        appointment::Appointment,
        case::Case,
        customer::Customer,
        dashboard::DashboardStats,
        document::Document,
        labels::Labeled,
    },
    views::{
        filter::{CategoryFilter, Searchable, ALL},
        state::ViewState,
    },
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const NAV: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/termine", "Termine"),
    ("/kunden", "Kunden"),
    ("/faelle", "Fälle"),
    ("/dokumente", "Dokumente"),
];

const DESCRIPTION_PREVIEW: usize = 60;

// =============================================================================
//  LAYOUT
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub version: &'static str,
    pub nav: Vec<NavItem>,
}

impl Layout {
    pub fn new(active_path: &str, title: &str) -> Self {
        let nav = NAV
            .iter()
            .map(|&(href, label)| NavItem {
                href,
                label,
                active: href == active_path,
            })
            .collect();

        Self {
            title: title.to_string(),
            version: VERSION,
            nav,
        }
    }
}

// =============================================================================
//  BLOCOS
// =============================================================================

#[derive(Debug, Clone, Default, Serialize)]
pub struct Cell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    // tooltip (ex.: "vor 3 Tagen")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Self::text(text).with_class("font-medium")
    }

    pub fn badge<L: Labeled>(value: &L) -> Self {
        Self {
            text: value.label().into_owned(),
            badge: Some(value.badge().css_class()),
            ..Self::default()
        }
    }

    pub fn link(text: impl Into<String>, href: String) -> Self {
        Self {
            href: Some(href),
            ..Self::text(text)
        }
    }

    pub fn timestamp(at: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            hint: Some(relative_time(at, now)),
            ..Self::text(format_timestamp(&at)).with_class("muted")
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: &'static str,
    pub text: String,
}

impl Notice {
    pub fn loading() -> Self {
        Self {
            kind: "loading",
            text: "Lädt...".to_string(),
        }
    }

    pub fn error(text: String) -> Self {
        Self { kind: "error", text }
    }

    pub fn empty(text: String) -> Self {
        Self { kind: "empty", text }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Select {
    pub name: &'static str,
    pub options: Vec<SelectOption>,
    #[serde(skip)]
    pub active: bool,
}

impl Select {
    /// Select com a opção "all" seguida das variantes conhecidas.
    pub fn new<C>(name: &'static str, all_label: &str, filter: &CategoryFilter<C>, variants: Vec<C>) -> Self
    where
        C: Labeled + PartialEq + fmt::Display,
    {
        let selected = filter.selected();

        let mut options = vec![SelectOption {
            value: ALL.to_string(),
            label: all_label.to_string(),
            selected: selected == ALL,
        }];
        options.extend(variants.into_iter().map(|variant| {
            let value = variant.to_string();
            SelectOption {
                selected: value == selected,
                label: variant.label().into_owned(),
                value,
            }
        }));

        Self {
            name,
            options,
            active: filter.is_active(),
        }
    }
}

// =============================================================================
//  LISTAS
// =============================================================================

/// O que muda de uma lista para outra: textos, colunas e células.
pub trait ListEntity: Searchable {
    /// Plural usado no título, no cartão e nas mensagens ("Fälle").
    const NOUN: &'static str;
    const PATH: &'static str;
    const SUBTITLE: &'static str;
    const PLACEHOLDER: &'static str;
    const HEADERS: &'static [&'static str];

    fn cells(&self, now: DateTime<Utc>) -> Vec<Cell>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub layout: Layout,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub path: &'static str,
    pub placeholder: &'static str,
    pub term: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,
    pub card_title: String,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// Monta a página de lista a partir do estado. `keep` é o filtro de
/// categoria já resolvido (sempre `true` para listas só com busca).
pub fn list_page<T, F>(
    state: &ViewState<T>,
    term: &str,
    select: Option<Select>,
    keep: F,
    now: DateTime<Utc>,
) -> ListPage
where
    T: ListEntity,
    F: Fn(&T) -> bool,
{
    let visible = crate::views::filter::visible(state.rows(), term, keep);
    let filtering = !term.is_empty() || select.as_ref().is_some_and(|s| s.active);

    let notice = match state {
        ViewState::Loading => Some(Notice::loading()),
        ViewState::Failed { message } => Some(Notice::error(format!(
            "{} konnten nicht geladen werden: {}",
            T::NOUN,
            message
        ))),
        _ if visible.is_empty() => Some(Notice::empty(empty_message(T::NOUN, filtering))),
        _ => None,
    };

    ListPage {
        layout: Layout::new(T::PATH, T::NOUN),
        heading: T::NOUN,
        subtitle: T::SUBTITLE,
        path: T::PATH,
        placeholder: T::PLACEHOLDER,
        term: term.to_string(),
        select,
        card_title: format!("Alle {} ({})", T::NOUN, visible.len()),
        headers: T::HEADERS,
        rows: visible.iter().map(|row| row.cells(now)).collect(),
        notice,
    }
}

/// "Keine Fälle gefunden" com busca/filtro ativo, senão "Keine Fälle vorhanden".
pub fn empty_message(noun: &str, filtering: bool) -> String {
    if filtering {
        format!("Keine {noun} gefunden")
    } else {
        format!("Keine {noun} vorhanden")
    }
}

impl ListEntity for Appointment {
    const NOUN: &'static str = "Termine";
    const PATH: &'static str = "/termine";
    const SUBTITLE: &'static str = "Verwalten Sie alle Termine";
    const PLACEHOLDER: &'static str = "Suche nach Termin-Nummer, Ort oder Schadensart...";
    const HEADERS: &'static [&'static str] = &["Termin-Nr", "Datum & Zeit", "Ort", "Schadensart", "Status"];

    fn cells(&self, now: DateTime<Utc>) -> Vec<Cell> {
        appointment_cells(self, now)
    }
}

fn appointment_cells(apt: &Appointment, now: DateTime<Utc>) -> Vec<Cell> {
    let location = if apt.location.is_empty() {
        apt.location_type.label().into_owned()
    } else {
        format!("{} ({})", apt.location, apt.location_type.label())
    };

    vec![
        Cell::strong(format_appointment_number(&apt.appointment_number)),
        Cell::timestamp(apt.scheduled_at.with_timezone(&Utc), now),
        Cell::text(location).with_class("muted"),
        Cell::text(apt.damage_type.label()).with_class("muted"),
        Cell::badge(&apt.status),
    ]
}

impl ListEntity for Customer {
    const NOUN: &'static str = "Kunden";
    const PATH: &'static str = "/kunden";
    const SUBTITLE: &'static str = "Verwalten Sie alle Kunden";
    const PLACEHOLDER: &'static str = "Suche nach Kunden-Nummer, Name, E-Mail oder Telefon...";
    const HEADERS: &'static [&'static str] = &["Kunden-Nr", "Name", "E-Mail", "Telefon", "Fälle", "Erstellt am"];

    fn cells(&self, now: DateTime<Utc>) -> Vec<Cell> {
        vec![
            Cell::strong(format_customer_number(&self.customer_number)),
            Cell::text(&self.name),
            if self.email.is_empty() {
                Cell::text("-").with_class("muted")
            } else {
                Cell::link(&self.email, format!("mailto:{}", self.email))
            },
            if self.phone.is_empty() {
                Cell::text("-").with_class("muted")
            } else {
                Cell::link(format_phone(&self.phone), format!("tel:{}", self.phone))
            },
            Cell::text(self.case_count.to_string()),
            Cell::timestamp(self.created_at, now),
        ]
    }
}

impl ListEntity for Case {
    const NOUN: &'static str = "Fälle";
    const PATH: &'static str = "/faelle";
    const SUBTITLE: &'static str = "Verwalten Sie alle Schadensfälle";
    const PLACEHOLDER: &'static str = "Suche nach Fall-Nummer, Fahrzeug oder Kennzeichen...";
    const HEADERS: &'static [&'static str] = &[
        "Fall-Nr",
        "Kunde",
        "Fahrzeug",
        "Kennzeichen",
        "Schadensart",
        "Schadenssumme",
        "Status",
        "Erstellt am",
    ];

    fn cells(&self, now: DateTime<Utc>) -> Vec<Cell> {
        let customer = self
            .customer_id
            .map(|id| format!("#{id}"))
            .unwrap_or_else(|| "N/A".to_string());
        let vehicle = format!("{} {}", self.vehicle_make, self.vehicle_model);

        vec![
            Cell::strong(&self.case_number),
            Cell::text(customer),
            Cell::text(vehicle.trim_end()),
            Cell::text(&self.license_plate).with_class("mono"),
            Cell::text(&self.damage_type).with_class("muted"),
            Cell::text(
                self.estimated_damage_cost
                    .map(format_currency)
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::badge(&self.status),
            Cell::timestamp(self.created_at, now),
        ]
    }
}

impl ListEntity for Document {
    const NOUN: &'static str = "Dokumente";
    const PATH: &'static str = "/dokumente";
    const SUBTITLE: &'static str = "Verwalten Sie alle Dokumente";
    const PLACEHOLDER: &'static str = "Suche nach Dateiname oder Beschreibung...";
    const HEADERS: &'static [&'static str] = &["Dateiname", "Typ", "Beschreibung", "Größe", "Hochgeladen am"];

    fn cells(&self, now: DateTime<Utc>) -> Vec<Cell> {
        let description = match &self.description {
            Some(text) => Cell {
                hint: Some(text.clone()),
                ..Cell::text(truncate(text, DESCRIPTION_PREVIEW)).with_class("muted")
            },
            None => Cell::text("Keine Beschreibung").with_class("placeholder"),
        };

        vec![
            Cell::strong(&self.filename),
            Cell::badge(&self.document_type),
            description,
            Cell::text(format_file_size(self.file_size)).with_class("muted"),
            Cell::timestamp(self.uploaded_at, now),
        ]
    }
}

// =============================================================================
//  DASHBOARD
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub tone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPage {
    pub layout: Layout,
    pub today: String,
    pub stats: Vec<StatCard>,
    pub headers: &'static [&'static str],
    pub rows: Vec<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

pub fn dashboard_page(
    state: &ViewState<Appointment>,
    stats: &DashboardStats,
    recent: &[Appointment],
    today: NaiveDate,
    now: DateTime<Utc>,
) -> DashboardPage {
    let notice = match state {
        ViewState::Loading => Some(Notice::loading()),
        ViewState::Failed { message } => Some(Notice::error(format!(
            "Termine konnten nicht geladen werden: {message}"
        ))),
        _ if recent.is_empty() => Some(Notice::empty(empty_message("Termine", false))),
        _ => None,
    };

    DashboardPage {
        layout: Layout::new("/", "Dashboard"),
        today: format_day(&today),
        stats: vec![
            StatCard {
                title: "Termine heute",
                value: stats.today_appointments,
                tone: "blue",
            },
            StatCard {
                title: "Bevorstehend",
                value: stats.upcoming_appointments,
                tone: "yellow",
            },
            StatCard {
                title: "Abgeschlossen",
                value: stats.completed_appointments,
                tone: "green",
            },
            StatCard {
                title: "Kunden gesamt",
                value: stats.total_customers,
                tone: "purple",
            },
        ],
        headers: Appointment::HEADERS,
        rows: recent.iter().map(|apt| appointment_cells(apt, now)).collect(),
        notice,
    }
}

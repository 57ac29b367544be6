// src/formatters.rs

//! Formatação para exibição (padrão alemão): datas, moeda, telefone, tamanhos.
//!
//! Todas as funções são puras. As que recebem texto cru devolvem o próprio
//! texto quando não conseguem interpretá-lo.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

// =============================================================================
//  DATAS
// =============================================================================

/// Interpreta um timestamp ISO-8601 (com ou sem fuso, ou só a data).
/// Sem fuso explícito, o horário é tratado como UTC.
pub fn parse_iso(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    let utc = FixedOffset::east_opt(0)?;
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return utc.from_local_datetime(&naive).single();
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| utc.from_local_datetime(&naive).single())
}

/// `2025-03-07T10:15:00Z` -> `07.03.2025`
pub fn format_date(raw: &str) -> String {
    format_date_with(raw, DATE_FORMAT)
}

/// Igual a [`format_date`], com um padrão `strftime` próprio.
pub fn format_date_with(raw: &str, pattern: &str) -> String {
    match parse_iso(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

/// `2025-03-07T10:15:00Z` -> `07.03.2025 10:15 Uhr`
pub fn format_date_time(raw: &str) -> String {
    match parse_iso(raw) {
        Some(dt) => format_timestamp(&dt),
        None => raw.to_string(),
    }
}

pub fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("{} Uhr", dt.format(DATE_TIME_FORMAT))
}

pub fn format_day(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Distância relativa em alemão ("vor 3 Tagen", "in etwa 2 Stunden").
pub fn format_relative_time(raw: &str, now: DateTime<Utc>) -> String {
    match parse_iso(raw) {
        Some(dt) => relative_time(dt.with_timezone(&Utc), now),
        None => raw.to_string(),
    }
}

pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (at - now).num_seconds();
    let distance = describe_distance(seconds.unsigned_abs());
    if seconds < 0 {
        format!("vor {distance}")
    } else {
        format!("in {distance}")
    }
}

// Limiares iguais aos do date-fns (formatDistance), já no dativo
// porque sempre usamos com "vor"/"in".
fn describe_distance(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round() as u64;

    match minutes {
        0 => "weniger als 1 Minute".to_string(),
        1 => "1 Minute".to_string(),
        2..45 => format!("{minutes} Minuten"),
        45..90 => "etwa 1 Stunde".to_string(),
        90..1440 => format!("etwa {} Stunden", (minutes as f64 / 60.0).round() as u64),
        1440..2520 => "1 Tag".to_string(),
        2520..43200 => format!("{} Tagen", (minutes as f64 / 1440.0).round() as u64),
        43200..86400 => {
            let months = (minutes as f64 / 43200.0).round() as u64;
            if months <= 1 {
                "etwa 1 Monat".to_string()
            } else {
                format!("etwa {months} Monaten")
            }
        }
        _ => {
            let months = minutes / 43200;
            if months < 12 {
                format!("{months} Monaten")
            } else {
                let years = months / 12;
                if years == 1 {
                    "etwa 1 Jahr".to_string()
                } else {
                    format!("etwa {years} Jahren")
                }
            }
        }
    }
}

// =============================================================================
//  MOEDA
// =============================================================================

/// `1234.5` -> `1.234,50 €` (com espaço não separável antes do símbolo)
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{}{},{}\u{a0}€",
        if negative { "-" } else { "" },
        group_thousands(int_part),
        frac_part
    )
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

// =============================================================================
//  TELEFONE E NÚMEROS
// =============================================================================

/// Formata números alemães:
/// - celular internacional `49...` -> `+49 151 2345678`
/// - fixo local `0...` -> `0521 123456`
///
/// Qualquer outro formato volta como veio.
pub fn format_phone(phone: &str) -> String {
    let cleaned: String = phone.chars().filter(char::is_ascii_digit).collect();

    if cleaned.starts_with("49") && cleaned.len() >= 11 {
        return format!("+49 {} {}", &cleaned[2..5], &cleaned[5..]);
    }

    if cleaned.starts_with('0') && cleaned.len() >= 7 {
        return format!("{} {}", &cleaned[..4], &cleaned[4..]);
    }

    phone.to_string()
}

/// `k-2025-001` -> `K-2025-001`
pub fn format_customer_number(number: &str) -> String {
    number.to_uppercase()
}

/// `t-2025-001` -> `T-2025-001`
pub fn format_appointment_number(number: &str) -> String {
    number.to_uppercase()
}

pub fn format_file_size(bytes: i64) -> String {
    let bytes = bytes.max(0);
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < 1024 * 1024 {
        return format!("{:.1} KB", bytes as f64 / 1024.0);
    }
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Corta o texto em `length` caracteres, acrescentando `...`.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let head: String = text.chars().take(length).collect();
    format!("{head}...")
}

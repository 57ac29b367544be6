// src/models/labels.rs

//! Registro único enum -> rótulo (alemão) -> badge.
//!
//! Cada domínio fechado (status do caso, tipo de documento...) é declarado uma
//! vez com `label_registry!`, e todas as telas usam o mesmo registro.
//! Valores desconhecidos nunca quebram a desserialização: ficam em
//! `Other(String)` e são exibidos como vieram.

use std::borrow::Cow;

use serde::Serialize;

/// Rótulo exibido quando o valor veio vazio.
pub const UNKNOWN_LABEL: &str = "Unbekannt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Success,
    Warning,
    Destructive,
    Secondary,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Secondary => "badge badge-secondary",
        }
    }
}

pub trait Labeled {
    fn label(&self) -> Cow<'_, str>;

    fn badge(&self) -> BadgeVariant {
        BadgeVariant::Default
    }

    /// `false` para valores fora do domínio.
    fn is_known(&self) -> bool;
}

macro_rules! label_registry {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $variant:ident => $wire:literal, $label:literal, $badge:ident
                $(, aliases [$($alias:literal),* $(,)?])?
            );+ $(;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "Option<String>", into = "String")]
        pub enum $name {
            $( $variant, )+
            /// Valor fora do domínio conhecido, preservado como veio.
            Other(String),
        }

        impl $name {
            /// Variantes conhecidas, na ordem do registro.
            pub fn variants() -> Vec<$name> {
                vec![ $( $name::$variant, )+ ]
            }

            pub fn parse(raw: &str) -> Option<$name> {
                match raw.trim() {
                    $( $wire $($( | $alias )*)? => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Valor canônico enviado/recebido pela API.
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                $name::parse(&raw).unwrap_or($name::Other(raw))
            }
        }

        // `null` do serviço vira valor vazio (rótulo "Unbekannt")
        impl From<Option<String>> for $name {
            fn from(raw: Option<String>) -> Self {
                raw.map($name::from).unwrap_or_default()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::Other(String::new())
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $name::parse(raw).unwrap_or_else(|| $name::Other(raw.to_string()))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::models::labels::Labeled for $name {
            fn label(&self) -> std::borrow::Cow<'_, str> {
                match self {
                    $( $name::$variant => std::borrow::Cow::Borrowed($label), )+
                    $name::Other(raw) if raw.trim().is_empty() => {
                        std::borrow::Cow::Borrowed($crate::models::labels::UNKNOWN_LABEL)
                    }
                    $name::Other(raw) => std::borrow::Cow::Borrowed(raw.as_str()),
                }
            }

            fn badge(&self) -> $crate::models::labels::BadgeVariant {
                match self {
                    $( $name::$variant => $crate::models::labels::BadgeVariant::$badge, )+
                    $name::Other(_) => $crate::models::labels::BadgeVariant::Default,
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Other(_))
            }
        }
    };
}

pub(crate) use label_registry;

// ============================================================
// Layer 2 — Messages
// ============================================================
// All user-facing wording in one place, per language.
// English is the default; Ukrainian matches the phrasing the
// exercise was originally written with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::dimension::Dimension;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "uk" | "ua" | "ukrainian" => Ok(Language::Uk),
            other => Err(format!("Unknown language: {other}. Use 'en' or 'uk'")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Language::En => "en",
            Language::Uk => "uk",
        })
    }
}

impl Language {
    pub fn choose_size(self) -> &'static str {
        match self {
            Language::En => "Choose the vector system type (2 or 3):",
            Language::Uk => "Оберіть тип системи векторів (2 або 3):",
        }
    }

    /// Prompt for vector `index`, e.g. "vector A (a1 a2)"
    pub fn enter_vector(self, index: usize, dimension: Dimension) -> String {
        let label = Dimension::label(index);
        let lower = label.to_ascii_lowercase();
        let placeholders: Vec<String> =
            (1..=dimension.len()).map(|k| format!("{lower}{k}")).collect();
        let placeholders = placeholders.join(" ");
        match self {
            Language::En => format!("Enter the coordinates of vector {label} ({placeholders}):"),
            Language::Uk => format!("Введіть координати вектора {label} ({placeholders}):"),
        }
    }

    pub fn try_again(self, reason: &str) -> String {
        match self {
            Language::En => format!("Invalid input: {reason}. Try again."),
            Language::Uk => format!("Некоректне введення: {reason}. Спробуйте ще раз."),
        }
    }

    pub fn entered_vectors(self) -> &'static str {
        match self {
            Language::En => "Entered vectors:",
            Language::Uk => "Введені вектори:",
        }
    }

    pub fn verdict(self, independent: bool) -> &'static str {
        match (self, independent) {
            (Language::En, true)  => "The vector system is linearly independent.",
            (Language::En, false) => "The vector system is not linearly independent.",
            (Language::Uk, true)  => "Система векторів є лінійно незалежною.",
            (Language::Uk, false) => "Система векторів не є лінійно незалежною.",
        }
    }
}

//! Closed value sets used by selection controls and validators.
//!
//! Every set exposes its members in render order. The "no selection" option is
//! rendered with an empty value, which no member ever has.

use serde::{Deserialize, Serialize};

/// Value and label of the "no selection" option.
pub const PLACEHOLDER_VALUE: &str = "";
pub const PLACEHOLDER_LABEL: &str = "Seleccione una opción";

pub trait Choice: Sized + Copy + 'static {
    /// Members in render order.
    const ALL: &'static [Self];

    /// Stored and submitted value.
    fn value(self) -> &'static str;

    /// Human readable label.
    fn label(self) -> &'static str;

    /// Exact match against [`Choice::value`].
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.value() == raw)
    }

    fn options() -> Vec<ChoiceOption> {
        Self::ALL
            .iter()
            .map(|c| ChoiceOption {
                value: c.value(),
                label: c.label(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    pub fn placeholder() -> Self {
        Self {
            value: PLACEHOLDER_VALUE,
            label: PLACEHOLDER_LABEL,
        }
    }
}

// ============================================================================
// City
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum City {
    #[serde(rename = "Berisso")]
    #[sqlx(rename = "Berisso")]
    Berisso,
    #[serde(rename = "Ensenada")]
    #[sqlx(rename = "Ensenada")]
    Ensenada,
    #[serde(rename = "La Plata")]
    #[sqlx(rename = "La Plata")]
    LaPlata,
}

impl Choice for City {
    const ALL: &'static [Self] = &[City::Berisso, City::Ensenada, City::LaPlata];

    fn value(self) -> &'static str {
        match self {
            City::Berisso => "Berisso",
            City::Ensenada => "Ensenada",
            City::LaPlata => "La Plata",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

// ============================================================================
// Breed
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum Breed {
    Dog,
    Cat,
    Bird,
}

impl Choice for Breed {
    const ALL: &'static [Self] = &[Breed::Dog, Breed::Cat, Breed::Bird];

    fn value(self) -> &'static str {
        match self {
            Breed::Dog => "Dog",
            Breed::Cat => "Cat",
            Breed::Bird => "Bird",
        }
    }

    fn label(self) -> &'static str {
        self.value()
    }
}

// ============================================================================
// Specialty
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Specialty {
    General,
    Dentista,
}

impl Choice for Specialty {
    const ALL: &'static [Self] = &[Specialty::General, Specialty::Dentista];

    fn value(self) -> &'static str {
        match self {
            Specialty::General => "general",
            Specialty::Dentista => "dentista",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Specialty::General => "General",
            Specialty::Dentista => "Dentista",
        }
    }
}

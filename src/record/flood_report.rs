//! Flood report record and its category enums.

use chrono::NaiveDateTime;

/// A citizen-submitted flood report. Append-only; the reporter CPF is not
/// required to exist in the user registry.
#[derive(Debug, Clone)]
pub struct FloodReport {
    pub reporter_name: String,
    pub reporter_cpf: String,
    pub cep: String,
    pub address: String,
    pub rain_intensity: RainIntensity,
    pub flood_level: FloodLevel,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainIntensity {
    Weak,
    Medium,
    Strong,
}

impl RainIntensity {
    /// Parses user input, accepting accented and unaccented forms.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "fraca" => Some(Self::Weak),
            "media" | "média" => Some(Self::Medium),
            "forte" => Some(Self::Strong),
            _ => None,
        }
    }

    /// Canonical form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weak => "fraca",
            Self::Medium => "média",
            Self::Strong => "forte",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloodLevel {
    High,
    Medium,
    Low,
}

impl FloodLevel {
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "alto" => Some(Self::High),
            "medio" | "médio" => Some(Self::Medium),
            "baixo" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "alto",
            Self::Medium => "médio",
            Self::Low => "baixo",
        }
    }
}

// -- Tests -------------------------------------------------------------------

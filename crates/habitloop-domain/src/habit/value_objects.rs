use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// Closed color palette a habit can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitColor {
    Blue,
    Green,
    Purple,
    Orange,
    Red,
    Pink,
    Indigo,
    Teal,
}

impl HabitColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitColor::Blue => "blue",
            HabitColor::Green => "green",
            HabitColor::Purple => "purple",
            HabitColor::Orange => "orange",
            HabitColor::Red => "red",
            HabitColor::Pink => "pink",
            HabitColor::Indigo => "indigo",
            HabitColor::Teal => "teal",
        }
    }

    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "blue" => Ok(HabitColor::Blue),
            "green" => Ok(HabitColor::Green),
            "purple" => Ok(HabitColor::Purple),
            "orange" => Ok(HabitColor::Orange),
            "red" => Ok(HabitColor::Red),
            "pink" => Ok(HabitColor::Pink),
            "indigo" => Ok(HabitColor::Indigo),
            "teal" => Ok(HabitColor::Teal),
            _ => Err(DomainError::InvalidInput(format!(
                "Unknown habit color: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for HabitColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

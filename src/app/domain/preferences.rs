use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
        }
    }

    pub fn all() -> &'static [Language] {
        &[Self::De, Self::En]
    }

    /// Lenient parse for persisted values: anything unknown becomes German.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" => Ok(Self::De),
            "en" => Ok(Self::En),
            _ => Err(AppError::InvalidSetting {
                key: "language".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Unknown names resolve to the default (dark).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == Self::Dark
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: (25, 25, 25),
                surface: (35, 35, 35),
                text: (220, 220, 220),
                muted_text: (150, 150, 150),
                accent: (70, 70, 100),
                active: (60, 60, 60),
                error: (220, 90, 90),
            },
            Self::Light => Palette {
                background: (240, 240, 240),
                surface: (255, 255, 255),
                text: (0, 0, 0),
                muted_text: (100, 100, 100),
                accent: (173, 216, 230),
                active: (200, 200, 200),
                error: (180, 30, 30),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Rgb = (u8, u8, u8);

/// Colors a theme applies to the whole view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted_text: Rgb,
    pub accent: Rgb,
    /// Highlight of the active navigation marker.
    pub active: Rgb,
    pub error: Rgb,
}

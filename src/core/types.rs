//! Common types used across the application

use crate::core::{Error, Result};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported target languages for translation.
///
/// The discriminants are the persisted ordinals and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLanguage {
    English = 0,
    French = 1,
    German = 2,
    Italian = 3,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 4] = [
        TargetLanguage::English,
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Italian,
    ];

    /// Ordinal used for persistence
    pub fn ordinal(self) -> i64 {
        self as i64
    }

    /// Parse a persisted ordinal
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        match ordinal {
            0 => Ok(TargetLanguage::English),
            1 => Ok(TargetLanguage::French),
            2 => Ok(TargetLanguage::German),
            3 => Ok(TargetLanguage::Italian),
            other => Err(Error::InvalidLanguage(other)),
        }
    }

    /// Display name in the language itself
    pub fn display_name(self) -> &'static str {
        match self {
            TargetLanguage::English => "English",
            TargetLanguage::French => "Fran\u{00E7}ais",
            TargetLanguage::German => "Deutsch",
            TargetLanguage::Italian => "Italiano",
        }
    }

    /// Flag emoji for UI labels
    pub fn flag(self) -> &'static str {
        match self {
            TargetLanguage::English => "\u{1F1EC}\u{1F1E7}",
            TargetLanguage::French => "\u{1F1EB}\u{1F1F7}",
            TargetLanguage::German => "\u{1F1E9}\u{1F1EA}",
            TargetLanguage::Italian => "\u{1F1EE}\u{1F1F9}",
        }
    }

    /// ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::English => "en",
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Italian => "it",
        }
    }

    /// Locale passed to speech backends (`ll-CC`)
    pub fn tts_locale(self) -> &'static str {
        match self {
            TargetLanguage::English => "en-US",
            TargetLanguage::French => "fr-FR",
            TargetLanguage::German => "de-DE",
            TargetLanguage::Italian => "it-IT",
        }
    }

    /// Target language code expected by the remote translation provider
    pub fn remote_code(self) -> &'static str {
        match self {
            TargetLanguage::English => "EN",
            TargetLanguage::French => "FR",
            TargetLanguage::German => "DE",
            TargetLanguage::Italian => "IT",
        }
    }

    /// Parse a user-supplied name or code ("fr", "French", "français")
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| {
            needle == lang.code()
                || needle == lang.display_name().to_lowercase()
                || needle == format!("{:?}", lang).to_lowercase()
        })
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        TargetLanguage::Italian
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// 2D point in screen/canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f32,
    pub y: f32,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Screen-space rectangle of a detection
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Anchor point used to place panels relative to the detection
    pub fn position(&self) -> ScreenPosition {
        ScreenPosition::new(self.x, self.y)
    }
}

/// RGBA overlay colour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
}

/// One scored label attached to a detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    pub category: String,
    pub confidence: f32,
}

impl Categorization {
    pub fn new(category: &str, confidence: f32) -> Self {
        Self {
            category: category.to_string(),
            confidence,
        }
    }
}

/// A single detection produced by the external detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub rect: ScreenRect,
    pub categorizations: Vec<Categorization>,
}

impl Detection {
    pub fn new(rect: ScreenRect, categorizations: Vec<Categorization>) -> Self {
        Self { rect, categorizations }
    }

    /// Highest-confidence categorization at or above `threshold`
    pub fn best_categorization(&self, threshold: f32) -> Option<&Categorization> {
        self.categorizations
            .iter()
            .filter(|c| c.confidence >= threshold)
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
    }
}

/// Snapshot of a focused object, captured when focus happens
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedObjectData {
    pub category: String,
    /// Resolved at focus time, not re-resolved on language changes
    pub translation: String,
    pub confidence: f32,
    pub screen_position: ScreenPosition,
    pub detection_time: DateTime<Local>,
}

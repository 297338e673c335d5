//! Core module - Configuration, events, errors and common types

mod config;
mod error;
mod events;
mod types;

pub use config::{Config, DetectionConfig, FilePreferenceStore, MemoryPreferenceStore, MenuConfig, PreferenceStore, SpeechConfig, TranslationConfig};
pub use error::{Error, Result};
pub use events::{ListenerId, Observers};
pub use types::{Categorization, Color, DetectedObjectData, Detection, ScreenPosition, ScreenRect, TargetLanguage};

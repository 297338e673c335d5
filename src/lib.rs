//! LinguaAR library
//!
//! Offline vocabulary translation and object focus handling for the AR
//! language-learning app, usable headless in tests and tools.

pub mod core;
pub mod detection;
pub mod focus;
pub mod i18n;
pub mod menu;
pub mod overlay;
pub mod translate;
pub mod tts;

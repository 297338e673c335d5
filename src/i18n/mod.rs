//! Internationalization module
//!
//! Offline translation of detector object categories into the supported
//! target languages, plus the persisted language preference and the example
//! sentence database shown for a focused object.

mod catalog;
mod sentences;
mod settings;

pub use sentences::{SentenceDatabase, SentenceExample, WordExamples};
pub use settings::{LanguageSettings, LANGUAGE_PREFERENCE_KEY};

use crate::core::{Error, Result, TargetLanguage};
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};

/// Translations of one category into every supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLanguageText {
    pub english: String,
    pub french: String,
    pub german: String,
    pub italian: String,
}

impl MultiLanguageText {
    pub fn get(&self, language: TargetLanguage) -> &str {
        match language {
            TargetLanguage::English => &self.english,
            TargetLanguage::French => &self.french,
            TargetLanguage::German => &self.german,
            TargetLanguage::Italian => &self.italian,
        }
    }
}

/// A curated category with its translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationEntry {
    pub category: String,
    pub translations: MultiLanguageText,
}

/// Summary produced by [`TranslationTable::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub total: usize,
    pub empty: usize,
    pub duplicates: usize,
}

/// Category -> per-language display string
///
/// Entries are kept in insertion order; lookups go through an index that is
/// built on first use and stays valid until [`clear_index`](Self::clear_index)
/// or [`clear`](Self::clear). An unset index means dirty.
#[derive(Debug, Default)]
pub struct TranslationTable {
    entries: Vec<TranslationEntry>,
    index: OnceCell<HashMap<String, usize>>,
}

impl TranslationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the built-in catalog
    pub fn builtin() -> Self {
        let mut table = Self::new();
        catalog::populate(&mut table);
        table.rebuild_index();
        log::info!("[TranslationTable] Loaded {} built-in translations", table.len());
        table
    }

    /// Wrap a raw entry list as-is; empty or duplicate categories are skipped
    /// when the index is built, first occurrence wins
    pub fn from_entries(entries: Vec<TranslationEntry>) -> Self {
        Self {
            entries,
            index: OnceCell::new(),
        }
    }

    /// Parse a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<TranslationEntry> =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Translation of `category`, or a label derived from the identifier
    pub fn lookup(&self, category: &str, language: TargetLanguage) -> String {
        match self.index().get(category) {
            Some(&position) => self.entries[position].translations.get(language).to_string(),
            None => {
                log::warn!("[TranslationTable] No translation found for '{}', using original name", category);
                format_category(category)
            }
        }
    }

    pub fn has(&self, category: &str) -> bool {
        self.index().contains_key(category)
    }

    pub fn all_categories(&self) -> HashSet<&str> {
        self.index().keys().map(String::as_str).collect()
    }

    /// Indexed categories in ordinal order
    pub fn sorted_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.all_categories().into_iter().collect();
        categories.sort_unstable();
        categories
    }

    /// Add one entry. Returns false, leaving the table untouched, if the
    /// category is empty or already present.
    pub fn insert(&mut self, category: &str, english: &str, french: &str, german: &str, italian: &str) -> bool {
        if category.is_empty() {
            log::warn!("[TranslationTable] Ignoring entry with empty category");
            return false;
        }

        if self.index().contains_key(category) {
            log::warn!("[TranslationTable] Duplicate entry for '{}', skipping", category);
            return false;
        }

        let position = self.entries.len();
        self.entries.push(TranslationEntry {
            category: category.to_string(),
            translations: MultiLanguageText {
                english: english.to_string(),
                french: french.to_string(),
                german: german.to_string(),
                italian: italian.to_string(),
            },
        });

        if let Some(index) = self.index.get_mut() {
            index.insert(category.to_string(), position);
        }

        true
    }

    /// Force a fresh index over the current entries
    pub fn rebuild_index(&mut self) {
        self.index = OnceCell::new();
        self.index();
    }

    /// Mark the index dirty; the next lookup rebuilds it
    pub fn clear_index(&mut self) {
        self.index = OnceCell::new();
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.clear_index();
    }

    pub fn is_index_dirty(&self) -> bool {
        self.index.get().is_none()
    }

    /// Number of indexed categories
    pub fn len(&self) -> usize {
        self.index().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count empty and duplicate categories in the raw entry list
    pub fn validate(&self) -> ValidationReport {
        let mut seen = HashSet::new();
        let mut report = ValidationReport {
            total: self.entries.len(),
            empty: 0,
            duplicates: 0,
        };

        for entry in &self.entries {
            if entry.category.is_empty() {
                report.empty += 1;
            } else if !seen.insert(entry.category.as_str()) {
                log::warn!("[TranslationTable] Duplicate: {}", entry.category);
                report.duplicates += 1;
            }
        }

        log::info!(
            "[TranslationTable] Validation complete: {} total, {} empty, {} duplicates",
            report.total,
            report.empty,
            report.duplicates
        );
        report
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            let mut index = HashMap::with_capacity(self.entries.len());
            for (position, entry) in self.entries.iter().enumerate() {
                if entry.category.is_empty() {
                    continue;
                }
                if index.contains_key(&entry.category) {
                    log::warn!("[TranslationTable] Duplicate entry for '{}', skipping", entry.category);
                    continue;
                }
                index.insert(entry.category.clone(), position);
            }
            log::debug!("[TranslationTable] Indexed {} translations", index.len());
            index
        })
    }
}

/// Human-readable label from a raw identifier: underscores become spaces and
/// the first character is uppercased
pub fn format_category(category: &str) -> String {
    let spaced = category.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        // Characters without a single-character uppercase form ("ß") stay as they are
        Some(first) => {
            let mut upper = first.to_uppercase();
            let first = match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => first,
            };
            std::iter::once(first).chain(chars).collect()
        }
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert("cat", "Cat", "Chat", "Katze", "Gatto");
        table.insert("traffic_light", "Traffic Light", "Feu de circulation", "Ampel", "Semaforo");
        table.rebuild_index();
        table
    }

    #[test]
    fn test_lookup_every_language() {
        let table = cat_table();
        assert_eq!(table.lookup("cat", TargetLanguage::English), "Cat");
        assert_eq!(table.lookup("cat", TargetLanguage::French), "Chat");
        assert_eq!(table.lookup("cat", TargetLanguage::German), "Katze");
        assert_eq!(table.lookup("cat", TargetLanguage::Italian), "Gatto");
    }

    #[test]
    fn test_fallback_ignores_language() {
        let table = cat_table();
        for lang in TargetLanguage::ALL {
            assert_eq!(table.lookup("dog", lang), "Dog");
            assert_eq!(table.lookup("fire_hydrant", lang), "Fire hydrant");
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = cat_table();
        assert!(table.has("cat"));
        assert!(!table.has("Cat"));
        assert_eq!(table.lookup("CAT", TargetLanguage::Italian), "CAT");
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut table = cat_table();
        assert!(!table.insert("cat", "Kitty", "Minou", "Mieze", "Micio"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("cat", TargetLanguage::Italian), "Gatto");
        assert_eq!(table.validate().duplicates, 0);
    }

    #[test]
    fn test_lazy_index_and_clear() {
        let mut table = TranslationTable::new();
        table.insert("chair", "Chair", "Chaise", "Stuhl", "Sedia");
        assert!(!table.is_index_dirty());

        table.clear_index();
        assert!(table.is_index_dirty());
        assert_eq!(table.lookup("chair", TargetLanguage::German), "Stuhl");
        assert!(!table.is_index_dirty());

        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.lookup("chair", TargetLanguage::German), "Chair");
    }

    #[test]
    fn test_raw_entries_first_wins() {
        let json = r#"[
            {"category": "cup", "translations": {"english": "Cup", "french": "Tasse", "german": "Tasse", "italian": "Tazza"}},
            {"category": "", "translations": {"english": "", "french": "", "german": "", "italian": ""}},
            {"category": "cup", "translations": {"english": "Mug", "french": "Mug", "german": "Becher", "italian": "Boccale"}}
        ]"#;
        let table = TranslationTable::from_json(json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("cup", TargetLanguage::Italian), "Tazza");
        assert_eq!(
            table.validate(),
            ValidationReport { total: 3, empty: 1, duplicates: 1 }
        );
    }

    #[test]
    fn test_builtin_catalog() {
        let table = TranslationTable::builtin();
        assert_eq!(table.len(), 206);
        assert_eq!(table.validate().duplicates, 0);
        assert_eq!(table.lookup("traffic_light", TargetLanguage::German), "Ampel");
        assert_eq!(table.lookup("chair", TargetLanguage::Italian), "Sedia");

        let sorted = table.sorted_categories();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(table.all_categories().len(), 206);
    }

    #[test]
    fn test_format_category() {
        assert_eq!(format_category("traffic_light"), "Traffic light");
        assert_eq!(format_category("ice_cream_cone"), "Ice cream cone");
        assert_eq!(format_category(""), "");
        assert_eq!(format_category("_x"), " x");
        assert_eq!(format_category("éclair"), "Éclair");
        assert_eq!(format_category("ßtraße"), "ßtraße");
    }
}

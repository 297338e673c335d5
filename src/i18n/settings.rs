//! Process-wide target language preference

use crate::core::{ListenerId, Observers, PreferenceStore, TargetLanguage};

/// Preference key holding the language ordinal
pub const LANGUAGE_PREFERENCE_KEY: &str = "target_language";

/// Currently selected target language, persisted on every change
pub struct LanguageSettings {
    current: TargetLanguage,
    store: Box<dyn PreferenceStore>,
    observers: Observers<TargetLanguage>,
}

impl LanguageSettings {
    /// Initialize from the stored preference, defaulting to Italian
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let current = match store.get_int(LANGUAGE_PREFERENCE_KEY) {
            Some(ordinal) => TargetLanguage::from_ordinal(ordinal).unwrap_or_else(|e| {
                log::warn!("[LanguageSettings] Ignoring stored preference: {}", e);
                TargetLanguage::default()
            }),
            None => TargetLanguage::default(),
        };

        log::info!("[LanguageSettings] Initialized with language: {}", current);

        Self {
            current,
            store,
            observers: Observers::new(),
        }
    }

    pub fn current(&self) -> TargetLanguage {
        self.current
    }

    /// Change the language. Setting the current value again does nothing;
    /// otherwise the ordinal is persisted and subscribers are notified once.
    /// Returns whether the language changed.
    pub fn set_language(&mut self, language: TargetLanguage) -> bool {
        if self.current == language {
            return false;
        }

        self.current = language;

        if let Err(e) = self.store.set_int(LANGUAGE_PREFERENCE_KEY, language.ordinal()) {
            log::error!("[LanguageSettings] Failed to persist language preference: {}", e);
        }

        log::info!("[LanguageSettings] Language changed to: {}", language);
        self.observers.notify(&language);
        true
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TargetLanguage) + 'static,
    {
        self.observers.add(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.observers.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryPreferenceStore, Result};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store that records every write
    struct RecordingStore {
        writes: Rc<RefCell<Vec<(String, i64)>>>,
        initial: Option<i64>,
    }

    impl PreferenceStore for RecordingStore {
        fn get_int(&self, key: &str) -> Option<i64> {
            if key == LANGUAGE_PREFERENCE_KEY {
                self.writes.borrow().last().map(|(_, v)| *v).or(self.initial)
            } else {
                None
            }
        }

        fn set_int(&mut self, key: &str, value: i64) -> Result<()> {
            self.writes.borrow_mut().push((key.to_string(), value));
            Ok(())
        }
    }

    #[test]
    fn test_defaults_to_italian() {
        let settings = LanguageSettings::load(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(settings.current(), TargetLanguage::Italian);
    }

    #[test]
    fn test_loads_stored_ordinal() {
        let mut store = MemoryPreferenceStore::new();
        store.set_int(LANGUAGE_PREFERENCE_KEY, 2).unwrap();
        let settings = LanguageSettings::load(Box::new(store));
        assert_eq!(settings.current(), TargetLanguage::German);
    }

    #[test]
    fn test_invalid_stored_ordinal_falls_back() {
        let mut store = MemoryPreferenceStore::new();
        store.set_int(LANGUAGE_PREFERENCE_KEY, 42).unwrap();
        let settings = LanguageSettings::load(Box::new(store));
        assert_eq!(settings.current(), TargetLanguage::Italian);
    }

    #[test]
    fn test_change_persists_and_notifies_once() {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let store = RecordingStore { writes: writes.clone(), initial: None };
        let mut settings = LanguageSettings::load(Box::new(store));

        let notified = Rc::new(RefCell::new(Vec::new()));
        let sink = notified.clone();
        settings.subscribe(move |lang| sink.borrow_mut().push(*lang));

        assert!(settings.set_language(TargetLanguage::French));
        assert_eq!(*writes.borrow(), vec![(LANGUAGE_PREFERENCE_KEY.to_string(), 1)]);
        assert_eq!(*notified.borrow(), vec![TargetLanguage::French]);

        assert!(!settings.set_language(TargetLanguage::French));
        assert_eq!(writes.borrow().len(), 1);
        assert_eq!(notified.borrow().len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut settings = LanguageSettings::load(Box::new(MemoryPreferenceStore::new()));
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let id = settings.subscribe(move |_| *counter.borrow_mut() += 1);

        settings.set_language(TargetLanguage::English);
        assert!(settings.unsubscribe(id));
        settings.set_language(TargetLanguage::German);

        assert_eq!(*count.borrow(), 1);
    }
}

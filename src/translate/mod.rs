//! Translation sources for detected categories
//!
//! Two sources exist: the offline [`TranslationTable`] and the legacy remote
//! provider. Precedence is fixed: the offline table answers whenever it is
//! enabled, the remote provider is used only when offline translation is
//! disabled and a remote client has an API key, otherwise nothing is shown.

mod remote;

pub use remote::{parse_response, RemoteTranslator};

use crate::core::{TargetLanguage, TranslationConfig};
use crate::i18n::TranslationTable;

/// How a category's display string will be obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Available immediately
    Ready(String),
    /// Must be requested from the remote provider
    Remote,
    /// No source configured
    Unavailable,
}

pub struct TranslationService {
    offline: Option<TranslationTable>,
    remote: Option<RemoteTranslator>,
}

impl TranslationService {
    pub fn new(offline: Option<TranslationTable>, remote: Option<RemoteTranslator>) -> Self {
        Self { offline, remote }
    }

    /// Build the sources enabled in `config`
    pub fn from_config(config: &TranslationConfig, table: TranslationTable, runtime: Option<tokio::runtime::Handle>) -> Self {
        let offline = config.offline_enabled.then_some(table);
        let remote = match runtime {
            Some(handle) if config.remote_enabled => {
                let remote = RemoteTranslator::new(config, handle);
                if !remote.is_configured() {
                    log::warn!("[TranslationService] Remote translation enabled without an API key, ignoring it");
                }
                Some(remote).filter(RemoteTranslator::is_configured)
            }
            _ => None,
        };

        if offline.is_none() && remote.is_some() {
            log::warn!("[TranslationService] Offline table disabled, using legacy remote translation");
        }

        Self::new(offline, remote)
    }

    pub fn resolve(&self, category: &str, language: TargetLanguage) -> Resolution {
        if let Some(table) = &self.offline {
            return Resolution::Ready(table.lookup(category, language));
        }

        if self.remote.as_ref().is_some_and(RemoteTranslator::is_configured) {
            return Resolution::Remote;
        }

        Resolution::Unavailable
    }

    pub fn table(&self) -> Option<&TranslationTable> {
        self.offline.as_ref()
    }

    pub fn remote(&self) -> Option<&RemoteTranslator> {
        self.remote.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TranslationTable {
        let mut table = TranslationTable::new();
        table.insert("cat", "Cat", "Chat", "Katze", "Gatto");
        table
    }

    #[test]
    fn test_offline_table_wins() {
        let service = TranslationService::new(Some(table()), None);
        assert_eq!(service.resolve("cat", TargetLanguage::French), Resolution::Ready("Chat".into()));
        assert_eq!(service.resolve("dog", TargetLanguage::French), Resolution::Ready("Dog".into()));
    }

    #[test]
    fn test_no_source_unavailable() {
        let service = TranslationService::new(None, None);
        assert_eq!(service.resolve("cat", TargetLanguage::Italian), Resolution::Unavailable);
    }

    #[test]
    fn test_remote_only_when_offline_disabled() {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let config = TranslationConfig {
            offline_enabled: false,
            remote_enabled: true,
            api_key: "key".into(),
            ..Default::default()
        };

        let service = TranslationService::from_config(&config, table(), Some(runtime.handle().clone()));
        assert_eq!(service.resolve("cat", TargetLanguage::German), Resolution::Remote);

        let both = TranslationConfig { offline_enabled: true, ..config };
        let service = TranslationService::from_config(&both, table(), Some(runtime.handle().clone()));
        assert_eq!(service.resolve("cat", TargetLanguage::German), Resolution::Ready("Katze".into()));
    }

    #[test]
    fn test_remote_without_key_unavailable() {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let config = TranslationConfig {
            offline_enabled: false,
            remote_enabled: true,
            api_key: "  ".into(),
            ..Default::default()
        };

        let service = TranslationService::from_config(&config, table(), Some(runtime.handle().clone()));
        assert!(service.remote().is_none());
        assert_eq!(service.resolve("cat", TargetLanguage::German), Resolution::Unavailable);

        let unkeyed = RemoteTranslator::new(&config, runtime.handle().clone());
        let service = TranslationService::new(None, Some(unkeyed));
        assert_eq!(service.resolve("cat", TargetLanguage::German), Resolution::Unavailable);
    }
}

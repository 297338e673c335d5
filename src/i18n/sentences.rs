//! Example sentences for vocabulary words

use crate::core::{Error, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::HashMap;

const BUNDLED_SENTENCES: &str = include_str!("../../data/example_sentences.json");

fn default_source() -> String { "Tatoeba".to_string() }

/// One sentence pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceExample {
    pub english_sentence: String,
    pub translated_sentence: String,
    /// Attribution
    #[serde(default = "default_source")]
    pub source: String,
}

impl SentenceExample {
    pub fn new(english: &str, translated: &str) -> Self {
        Self {
            english_sentence: english.to_string(),
            translated_sentence: translated.to_string(),
            source: default_source(),
        }
    }
}

/// Sentences attached to one object category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordExamples {
    pub object_class: String,
    #[serde(default)]
    pub examples: Vec<SentenceExample>,
}

/// Category -> example sentences
#[derive(Debug, Default)]
pub struct SentenceDatabase {
    words: Vec<WordExamples>,
    index: OnceCell<HashMap<String, usize>>,
}

impl SentenceDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample sentences shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SENTENCES)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let words: Vec<WordExamples> =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Ok(Self {
            words,
            index: OnceCell::new(),
        })
    }

    /// Examples for `category`; empty when none are known
    pub fn examples(&self, category: &str) -> &[SentenceExample] {
        self.index()
            .get(category)
            .map(|&position| self.words[position].examples.as_slice())
            .unwrap_or(&[])
    }

    pub fn has_examples(&self, category: &str) -> bool {
        !self.examples(category).is_empty()
    }

    pub fn random_example(&self, category: &str) -> Option<&SentenceExample> {
        self.examples(category).choose(&mut rand::thread_rng())
    }

    /// Append sentences to a category, creating it if needed
    pub fn add_examples(&mut self, category: &str, examples: Vec<SentenceExample>) {
        match self.words.iter_mut().find(|w| w.object_class == category) {
            Some(existing) => existing.examples.extend(examples),
            None => self.words.push(WordExamples {
                object_class: category.to_string(),
                examples,
            }),
        }
        self.clear_index();
    }

    pub fn clear_index(&mut self) {
        self.index = OnceCell::new();
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            // Later duplicates replace earlier ones
            let index: HashMap<String, usize> = self
                .words
                .iter()
                .enumerate()
                .filter(|(_, w)| !w.object_class.is_empty())
                .map(|(position, w)| (w.object_class.clone(), position))
                .collect();
            log::debug!("[SentenceDatabase] Cached examples for {} words", index.len());
            index
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_sentences() {
        let db = SentenceDatabase::bundled().unwrap();
        assert!(db.has_examples("chair"));
        assert_eq!(db.examples("cat").len(), 2);
        assert_eq!(db.examples("cat")[0].source, "Tatoeba");
        assert!(!db.has_examples("zebra"));
        assert!(db.examples("zebra").is_empty());
    }

    #[test]
    fn test_random_example_comes_from_category() {
        let db = SentenceDatabase::bundled().unwrap();
        let example = db.random_example("dog").unwrap();
        assert!(db.examples("dog").contains(example));
        assert!(db.random_example("zebra").is_none());
    }

    #[test]
    fn test_add_examples_appends() {
        let mut db = SentenceDatabase::new();
        db.add_examples("book", vec![SentenceExample::new("I read a book.", "Leggo un libro.")]);
        assert_eq!(db.examples("book").len(), 1);

        db.add_examples("book", vec![SentenceExample::new("The book is red.", "Il libro è rosso.")]);
        assert_eq!(db.examples("book").len(), 2);
    }

    #[test]
    fn test_empty_list_has_no_examples() {
        let db = SentenceDatabase::from_json(r#"[{"object_class": "lamp"}]"#).unwrap();
        assert!(!db.has_examples("lamp"));
    }
}

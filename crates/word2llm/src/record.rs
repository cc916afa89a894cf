//! Core record types for word2llm.
//!
//! This module defines the fundamental data structures for representing
//! saved study sessions: the words studied, the generated article, and the
//! optional translation and comprehension questions.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The generated reading material attached to a learning record.
///
/// Two schema generations coexist in stored data: older records carry
/// `record_id`/`passage_needs`/`passage_type`, newer ones carry
/// `article_type`/`difficulty_level`/`tone_style`/`topic`/
/// `sentence_complexity`. Both generations share `word_count` and the full
/// `article` text. Absent fields are omitted on serialization so records
/// round-trip unchanged regardless of generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-side record id (older schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,

    /// Numeric passage-needs preset (older schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_needs: Option<i64>,

    /// Numeric passage-type preset (older schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passage_type: Option<i64>,

    /// Article genre (newer schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_type: Option<String>,

    /// Reading difficulty (newer schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,

    /// Writing tone (newer schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_style: Option<String>,

    /// Subject matter (newer schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// Sentence complexity (newer schema).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence_complexity: Option<String>,

    /// Word count of the generated text.
    pub word_count: i64,

    /// The full article text.
    pub article: String,

    /// Warning raised during generation (e.g. too many input words).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl Article {
    /// Create an article carrying only the always-present fields.
    #[must_use]
    pub fn new(text: impl Into<String>, word_count: i64) -> Self {
        Self {
            record_id: None,
            passage_needs: None,
            passage_type: None,
            article_type: None,
            difficulty_level: None,
            tone_style: None,
            topic: None,
            sentence_complexity: None,
            word_count,
            article: text.into(),
            alert: None,
        }
    }
}

/// One explained word within a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePoint {
    /// The word being explained.
    pub word: String,
    /// The explanation text.
    pub explanation: String,
}

/// Full-text translation of the article plus per-word language points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// The translated article text.
    pub translation: String,
    /// Explained words.
    pub language_points: Vec<LanguagePoint>,
}

/// A saved study session.
///
/// Records are ordered by `timestamp` descending in the store. The `words`
/// ordering matters only for display; content identity treats them as an
/// unordered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecord {
    /// Opaque unique identifier.
    pub id: String,

    /// Creation/update time in epoch milliseconds. Sole sort key.
    pub timestamp: i64,

    /// The words this session studied, in display order.
    pub words: Vec<String>,

    /// The generated reading material.
    pub article: Article,

    /// Translation and language points, if generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Translation>,

    /// Comprehension questions; schema is not enforced at this layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<serde_json::Value>>,
}

impl LearningRecord {
    /// Create a new record with the given id, words, and article,
    /// timestamped now.
    #[must_use]
    pub fn new(id: impl Into<String>, words: Vec<String>, article: Article) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().timestamp_millis(),
            words,
            article,
            translation: None,
            questions: None,
        }
    }

    /// Check whether this record and `other` describe the same logical
    /// study session.
    ///
    /// Two records match when their article texts are identical and their
    /// word lists are equal as unordered sets, regardless of assigned id
    /// or timestamp.
    #[must_use]
    pub fn same_content(&self, other: &Self) -> bool {
        self.article.article == other.article.article && words_match(&self.words, &other.words)
    }

    /// Check whether this record carries any comprehension questions.
    #[must_use]
    pub fn has_questions(&self) -> bool {
        self.questions.as_ref().is_some_and(|q| !q.is_empty())
    }
}

/// Compare two word lists as unordered sets via sorted-clone equality.
fn words_match(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted: Vec<&String> = a.iter().collect();
    let mut b_sorted: Vec<&String> = b.iter().collect();
    a_sorted.sort();
    b_sorted.sort();
    a_sorted == b_sorted
}

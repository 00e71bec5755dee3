//! Records flowing through the cLang-8 pipeline.

/// A Lang-8 raw corpus entry.
///
/// `sentences` holds every learner sentence of the journal entry, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    journal_id: i64,
    sentence_id: i64,
    sentences: Vec<String>,
}

impl RawRecord {
    pub fn new(journal_id: i64, sentence_id: i64, sentences: Vec<String>) -> Self {
        Self {
            journal_id,
            sentence_id,
            sentences,
        }
    }

    /// `(journal_id, sentence_id)` key shared with cLang-8 targets.
    pub fn key(&self) -> (i64, i64) {
        (self.journal_id, self.sentence_id)
    }

    pub fn journal_id(&self) -> i64 {
        self.journal_id
    }

    pub fn sentence_id(&self) -> i64 {
        self.sentence_id
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }
}

/// A single cLang-8 target, as read from a targets file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    pub journal_id: i64,
    pub sentence_id: i64,
    pub sentence_number: usize,
    pub target: String,
}

/// Learner sentence and its correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub source: String,
    pub target: String,
}

impl AlignedPair {
    pub fn new(source: String, target: String) -> Self {
        Self { source, target }
    }
}

/// [AlignedPair] whose texts are space-joined tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedPair {
    pub source: String,
    pub target: String,
}

/// Anything that can be written as a source/target line.
pub trait SourceTarget {
    fn source(&self) -> &str;
    fn target(&self) -> &str;
}

impl SourceTarget for AlignedPair {
    fn source(&self) -> &str {
        &self.source
    }
    fn target(&self) -> &str {
        &self.target
    }
}

impl SourceTarget for TokenizedPair {
    fn source(&self) -> &str {
        &self.source
    }
    fn target(&self) -> &str {
        &self.target
    }
}

//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    UnknownLang(String),
    /// A targets line that does not hold five tab-separated fields,
    /// whose ids are not integers or whose sentence number is negative.
    MalformedTarget {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    /// A target pointing at a sentence the raw record does not have.
    SentenceOutOfRange {
        journal_id: i64,
        sentence_id: i64,
        position: usize,
        nb_sentences: usize,
    },
    Tokenizer(String),
    ProgressTemplate(indicatif::style::TemplateError),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::UnknownLang(lang) => write!(f, "Unsupported language: {}", lang),
            Error::MalformedTarget { path, line, reason } => {
                write!(f, "malformed target at {:?}:{}: {}", path, line, reason)
            }
            Error::SentenceOutOfRange {
                journal_id,
                sentence_id,
                position,
                nb_sentences,
            } => write!(
                f,
                "sentence number {} out of range for Lang-8 record ({}, {}) holding {} sentences",
                position, journal_id, sentence_id, nb_sentences
            ),
            Error::Tokenizer(msg) => write!(f, "tokenizer error: {}", msg),
            Error::ProgressTemplate(e) => write!(f, "progress bar template error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<indicatif::style::TemplateError> for Error {
    fn from(e: indicatif::style::TemplateError) -> Error {
        Error::ProgressTemplate(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

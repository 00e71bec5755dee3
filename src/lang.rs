//! Languages cLang-8 targets are available for.
//!
//! Each language is bound to the tokenizer model the reference
//! dataset was tokenized with, which also names the output files.
use std::{fmt, str::FromStr};

use crate::error::Error;

/// Languages of the cLang-8 targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    De,
    Ru,
}

impl Lang {
    /// Every supported language, in no particular order.
    pub const ALL: [Lang; 3] = [Lang::En, Lang::De, Lang::Ru];

    /// ISO 639-1 code, as used in cLang-8 file names.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Ru => "ru",
        }
    }

    /// Name of the tokenizer model the language is segmented with.
    pub fn model_name(&self) -> &'static str {
        match self {
            Lang::En => "en_core_web_sm",
            Lang::De => "de_core_news_sm",
            Lang::Ru => "ru_core_news_sm",
        }
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "en" => Ok(Lang::En),
            "de" => Ok(Lang::De),
            "ru" => Ok(Lang::Ru),
            other => Err(Error::UnknownLang(other.to_string())),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

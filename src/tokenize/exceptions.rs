//! Per-language tokenizer exceptions.
use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::lang::Lang;

lazy_static! {
    /// English abbreviations that keep their trailing period.
    static ref EN_ABBREVIATIONS: HashSet<&'static str> = [
        "a.m.", "p.m.", "e.g.", "i.e.", "etc.", "vs.", "approx.", "mr.", "mrs.", "ms.", "dr.",
        "prof.", "st.", "jr.", "sr.", "u.s.", "u.k.", "jan.", "feb.", "aug.", "sept.", "oct.",
        "nov.", "dec.",
    ]
    .into_iter()
    .collect();

    /// German abbreviations that keep their trailing period.
    static ref DE_ABBREVIATIONS: HashSet<&'static str> = [
        "z.b.", "d.h.", "u.a.", "usw.", "bzw.", "ca.", "nr.", "dr.", "str.", "vgl.", "evtl.",
        "z.t.", "mio.", "mrd.", "jh.", "etc.", "inkl.", "ggf.", "u.u.", "s.", "hr.", "fr.",
    ]
    .into_iter()
    .collect();

    /// Russian abbreviations that keep their trailing period.
    static ref RU_ABBREVIATIONS: HashSet<&'static str> = [
        "т.е.", "т.д.", "т.п.", "т.к.", "г.", "гг.", "др.", "пр.", "см.", "стр.", "руб.",
        "тыс.", "млн.", "млрд.", "им.", "ул.", "д.", "т.н.",
    ]
    .into_iter()
    .collect();
}

/// English clitics split off their host word (`don't` → `do n't`).
///
/// Both ASCII and typographic apostrophes are listed.
pub const EN_SUFFIX_CLITICS: [&str; 14] = [
    "n't", "'s", "'re", "'ve", "'ll", "'d", "'m", "n’t", "’s", "’re", "’ve", "’ll", "’d", "’m",
];

/// Lowercased abbreviations of `lang`.
pub fn abbreviations(lang: Lang) -> &'static HashSet<&'static str> {
    match lang {
        Lang::En => &EN_ABBREVIATIONS,
        Lang::De => &DE_ABBREVIATIONS,
        Lang::Ru => &RU_ABBREVIATIONS,
    }
}

/// Clitics split off words, if `lang` has any.
pub fn suffix_clitics(lang: Lang) -> &'static [&'static str] {
    match lang {
        Lang::En => &EN_SUFFIX_CLITICS,
        Lang::De | Lang::Ru => &[],
    }
}

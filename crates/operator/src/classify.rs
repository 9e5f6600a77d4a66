//! Operator classification: legal entity, natural person, or undetermined.

use serde::{Deserialize, Serialize};

use crate::extract::{normalize_spaces, strip_phones, strip_quotes};
use crate::lexicon::{
    contains_any, LEXICON, SURNAME_SUFFIXES_CYR, SURNAME_SUFFIXES_LAT,
};
use crate::translit::{apply_leet_cyr, apply_leet_lat, cyr_to_lat};

/// Kind of the operator behind a flight notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    /// Юридическое лицо: a company, agency or other organization.
    #[serde(rename = "Юр. лицо")]
    LegalEntity,
    /// Физическое лицо: an individual or sole proprietor.
    #[serde(rename = "Физ. лицо")]
    NaturalPerson,
    #[default]
    #[serde(rename = "Не определено")]
    Undetermined,
}

impl OperatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::LegalEntity => "Юр. лицо",
            OperatorKind::NaturalPerson => "Физ. лицо",
            OperatorKind::Undetermined => "Не определено",
        }
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three match branches prepared from one operator string.
struct Prepared {
    /// Phone- and quote-stripped uppercase text, original script.
    raw: String,
    /// Leet digits folded into Cyrillic letters.
    cyr: String,
    /// Leet digits folded into Latin, Cyrillic transliterated.
    lat: String,
}

fn prepare(operator: &str) -> Prepared {
    let stripped = strip_quotes(&strip_phones(operator));
    let raw = normalize_spaces(&stripped).to_uppercase();
    let cyr = apply_leet_cyr(&raw);
    let lat = cyr_to_lat(&apply_leet_lat(&raw));
    Prepared { raw, cyr, lat }
}

/// Counts consecutive word pairs that look like a surname + given name or
/// a name + patronymic. A pair counts when the first word carries a known
/// surname suffix or the second ends like a patronymic; the pair then
/// consumes both words.
fn count_fio_pairs(
    words: &[&str],
    surname_suffixes: &[&str],
    patronymic_suffixes: &[&str],
) -> usize {
    if words.len() < 2 {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + 1 < words.len() {
        let first = words[i];
        let second = words[i + 1];
        let surname = surname_suffixes.iter().any(|suffix| first.ends_with(suffix));
        let patronymic = patronymic_suffixes
            .iter()
            .any(|suffix| second.ends_with(suffix));
        if surname || patronymic {
            count += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    count
}

fn fio_count(prepared: &Prepared) -> usize {
    let cyr_words: Vec<&str> = LEXICON
        .cyr_word
        .find_iter(&prepared.cyr)
        .map(|m| m.as_str())
        .collect();
    let lat_words: Vec<&str> = LEXICON
        .lat_word
        .find_iter(&prepared.lat)
        .map(|m| m.as_str())
        .collect();
    count_fio_pairs(&cyr_words, SURNAME_SUFFIXES_CYR, &["ИЧ", "ВИЧ"])
        + count_fio_pairs(&lat_words, SURNAME_SUFFIXES_LAT, &["ICH", "VICH"])
}

fn looks_like_agency_lat(lat: &str) -> bool {
    contains_any(lat, &LEXICON.agency_lat) || LEXICON.mvd.is_match(lat)
}

/// Classifies a free-form operator string.
///
/// Rules are checked in order, first match wins:
/// 1. sole-proprietor / citizen markers → natural person;
/// 2. agency vocabulary or corporate legal forms → legal entity;
/// 3. at least one FIO pair in either script → natural person;
/// 4. Latin organization hints → legal entity;
/// 5. otherwise undetermined.
pub fn classify(operator: &str) -> OperatorKind {
    if operator.trim().is_empty() {
        return OperatorKind::Undetermined;
    }

    let prepared = prepare(operator);

    if LEXICON.ip_prefix.is_match(&prepared.raw)
        || contains_any(&prepared.cyr, &LEXICON.citizen)
        || prepared.cyr.contains("ЧАСТНОЕ ЛИЦО")
        || contains_any(&prepared.lat, &LEXICON.individual)
    {
        return OperatorKind::NaturalPerson;
    }

    if contains_any(&prepared.cyr, &LEXICON.agency_cyr)
        || looks_like_agency_lat(&prepared.lat)
        || contains_any(&prepared.cyr, &LEXICON.legal_forms)
        || contains_any(&prepared.lat, &LEXICON.legal_forms)
    {
        return OperatorKind::LegalEntity;
    }

    if fio_count(&prepared) >= 1 {
        return OperatorKind::NaturalPerson;
    }

    if contains_any(&prepared.lat, &LEXICON.org_hints) {
        return OperatorKind::LegalEntity;
    }

    OperatorKind::Undetermined
}

//! Compiled pattern tables shared by extraction and classification.
//!
//! Every regular expression used by this crate is compiled exactly once
//! into the [`LEXICON`] singleton; the tables themselves are immutable for
//! the lifetime of the process.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keys that terminate an `OPR/` clause inside an SHR telegram.
pub(crate) const NEXT_KEYS: &[&str] = &[
    "REG", "TYP", "RMK", "DOF", "EET", "SID", "DEP", "DEST", "NAV", "CODE", "PBN", "COM", "DAT",
    "SUR", "PER", "ORGN", "EOBT", "SEL", "RVR", "ALTN", "ALT", "RALT", "TALT", "STS", "OPR",
];

/// Cyrillic agency vocabulary that marks a state body (a legal entity).
pub(crate) const AGENCY_WORDS_CYR: &[&str] = &[
    "АДМИНИСТРАЦИЯ",
    "ДЕПАРТАМЕНТ",
    "МИНИСТЕРСТВО",
    "УПРАВЛЕНИЕ",
    "ГЛАВНОЕ УПРАВЛЕНИЕ",
    "ГУ",
    "УМВД",
    "ГУВД",
    "МЧС",
    "МВД",
    "ФСИН",
    "ФСБ",
    "РОСГВАРДИЯ",
    "РОСАВИАЦИЯ",
    "РОСТРАНСНАДЗОР",
    "ЦУКС",
    "ПРАВИТЕЛЬСТВО",
    "ГОСУДАРСТВЕННОЕ",
    "РЕСПУБЛИКИ",
    "ОБЛАСТИ",
    "ГОРОДА",
];

/// Transliterated / leet agency vocabulary.
pub(crate) const AGENCY_WORDS_LAT: &[&str] = &[
    "ROSGVARDI",
    "UPRAVLENI",
    "MINISTERSTV",
    "DEPARTAMENT",
    "ADMINISTRAT",
    "MCHS",
    "M4S",
    "M4C",
    "MVD",
    "MWD",
    "FSB",
    "FSIN",
    "GUVD",
    "UMVD",
];

/// Corporate legal-form tokens, both scripts plus the common leet mirrors.
pub(crate) const LEGAL_FORM_TOKENS: &[&str] = &[
    "ООО", "OOO", "АО", "AO", "ПАО", "ЗАО", "3AO", "ОАО", "OAO", "ФГУП", "ГУП", "МУП", "ЧУП",
    "СПАО", "НАО", "HAO", "АНО", "AHO", "НКО", "HKO", "ФОНД", "СРО", "CPO", "ТОО", "TOO", "ПК",
    "СКО", "CKO", "АОЗТ", "AO3T", "LLC", "LTD", "INC", "JSC", "PJSC", "GMBH", "AG", "PLC",
];

/// Latin words that usually belong to an organization name.
pub(crate) const ORG_HINTS_LAT: &[&str] = &[
    "COMPANY",
    "CO",
    "CORP",
    "CORPORATION",
    "GROUP",
    "HOLDING",
    "MEDIA",
    "STUDIO",
    "PRODUCTION",
    "SERVICES",
    "AERO",
    "AIR",
    "AVIATION",
    "UAV",
    "DRONE",
    "TECH",
    "TECHNOLOG",
    "LAB",
    "CENTER",
    "CENTRE",
    "UNIVERSIT",
    "INSTITUT",
    "INSTITUTE",
    "ACADEM",
    "AKADEMI",
    "AGENCY",
];

/// Cyrillic surname suffixes used for FIO-pair detection.
pub(crate) const SURNAME_SUFFIXES_CYR: &[&str] = &[
    "ОВ", "ЕВ", "ЁВ", "ИН", "ЫН", "ИЙ", "ЫЙ", "АЯ", "ЕНКО", "ЕНЬКО", "УК", "ЮК", "СКИЙ", "ЦКИЙ",
    "КИН", "ЧУК", "ЕЦ", "АН", "ЯН", "ЯНЦ", "АДЗЕ", "ШВИЛИ", "ИДЗЕ", "ИЧ", "ОВА", "ЕВА", "ИНА",
    "ЫНА", "СКАЯ", "ЦКАЯ",
];

/// Latin / transliterated surname suffixes.
pub(crate) const SURNAME_SUFFIXES_LAT: &[&str] = &[
    "OV", "EV", "YEV", "IN", "YN", "IY", "YY", "AYA", "ENKO", "UK", "YUK", "SKIY", "SKY", "TSKIY",
    "CKIY", "KIN", "CHUK", "ETS", "AN", "YAN", "IADZE", "ADZE", "SHVILI", "IDZE", "ICH", "OVA",
    "EVA", "INA", "YNA", "SKAYA", "CKAYA",
];

/// Word-character class shared by all token-boundary patterns.
const WORD_CHARS: &str = "A-Za-zА-Яа-яЁё0-9";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// Token with non-word (or string edge) boundaries on both sides.
fn token_regex(token: &str) -> Regex {
    compile(&format!(
        "(?:^|[^{WORD_CHARS}]){}(?:$|[^{WORD_CHARS}])",
        regex::escape(token)
    ))
}

fn token_table(tokens: &[&str]) -> Vec<Regex> {
    tokens.iter().map(|token| token_regex(token)).collect()
}

pub(crate) struct Lexicon {
    pub(crate) opr: Regex,
    pub(crate) next_key: Regex,
    pub(crate) spaces: Regex,
    pub(crate) phones: Regex,
    pub(crate) quotes: Regex,
    pub(crate) leading_punct: Regex,
    pub(crate) trailing_delims: Regex,
    pub(crate) ip_prefix: Regex,
    pub(crate) mvd: Regex,
    pub(crate) cyr_word: Regex,
    pub(crate) lat_word: Regex,
    pub(crate) agency_cyr: Vec<Regex>,
    pub(crate) agency_lat: Vec<Regex>,
    pub(crate) legal_forms: Vec<Regex>,
    pub(crate) org_hints: Vec<Regex>,
    pub(crate) citizen: Vec<Regex>,
    pub(crate) individual: Vec<Regex>,
}

pub(crate) static LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    opr: compile("OPR/+"),
    next_key: compile(&format!(
        r"\s*(?:\d+\s+)?(?:{})(?:/|\b)",
        NEXT_KEYS.join("|")
    )),
    spaces: compile(r"[ \t\r\n]+"),
    phones: compile(r"\+?\d[\d\-\s()]{6,}"),
    quotes: compile("[«»\"“”'`]+"),
    leading_punct: compile(r"^[/\-]+\s*"),
    trailing_delims: compile(r"[/\-.,;]+$"),
    ip_prefix: compile(r"^\s*ИП(?:\s|\.|$)"),
    mvd: compile(r"(?:^|[^A-Za-z0-9])M[VW]D(?:$|[^A-Za-z0-9])"),
    cyr_word: compile(r"[А-ЯЁ]+(?:-[А-ЯЁ]+)?"),
    lat_word: compile(r"[A-Z]+(?:-[A-Z]+)?"),
    agency_cyr: token_table(AGENCY_WORDS_CYR),
    agency_lat: token_table(AGENCY_WORDS_LAT),
    legal_forms: token_table(LEGAL_FORM_TOKENS),
    org_hints: token_table(ORG_HINTS_LAT),
    citizen: token_table(&["ГРАЖДАНИН"]),
    individual: token_table(&["INDIVIDUAL", "PRIVATE PERSON"]),
});

/// True when any of the pre-compiled token patterns matches `text`.
pub(crate) fn contains_any(text: &str, table: &[Regex]) -> bool {
    table.iter().any(|token| token.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_boundaries_reject_substrings() {
        let ooo = token_regex("OOO");
        assert!(ooo.is_match("OOO ROMASHKA"));
        assert!(ooo.is_match("ZAKAZ OOO"));
        assert!(!ooo.is_match("WOOOD"));
        assert!(!ooo.is_match("OOO1"));
    }

    #[test]
    fn cyrillic_letters_count_as_word_characters() {
        let gu = token_regex("ГУ");
        assert!(gu.is_match("ГУ МЧС РОССИИ"));
        assert!(!gu.is_match("ГУВД"));
    }

    #[test]
    fn mvd_pattern_accepts_both_spellings() {
        assert!(LEXICON.mvd.is_match("GU MVD ROSSII"));
        assert!(LEXICON.mvd.is_match("MWD"));
        assert!(!LEXICON.mvd.is_match("MVDA"));
        assert!(!LEXICON.mvd.is_match("UMVD"));
    }
}

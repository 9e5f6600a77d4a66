//! Pre-compiled extraction patterns for the telegram grammar.
//! Compiled once at first use; read-only afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

pub(crate) static AIRCRAFT_INDEX: Lazy<Regex> = Lazy::new(|| compile(r"SHR-([A-Z0-9]+)"));
pub(crate) static TYPE_COUNT: Lazy<Regex> = Lazy::new(|| compile(r"TYP/([0-9]+)"));
pub(crate) static AIRCRAFT_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"TYP/\d*([A-Z]+)"));
pub(crate) static DEP_COORD: Lazy<Regex> = Lazy::new(|| compile(r"DEP/([0-9]+[NS][0-9]+[EW])"));
pub(crate) static DEST_COORD: Lazy<Regex> = Lazy::new(|| compile(r"DEST/([0-9]+[NS][0-9]+[EW])"));
pub(crate) static DOF: Lazy<Regex> = Lazy::new(|| compile(r"DOF/([0-9]+)"));
pub(crate) static SID: Lazy<Regex> = Lazy::new(|| compile(r"SID/([0-9]+)"));
pub(crate) static FIELD_LINE: Lazy<Regex> = Lazy::new(|| compile(r"^-\w{4}(\d{4})"));
pub(crate) static ADD_DATE: Lazy<Regex> = Lazy::new(|| compile(r"-ADD ([0-9]+)"));
pub(crate) static ATD_TIME: Lazy<Regex> = Lazy::new(|| compile(r"-ATD ([0-9]+)"));
pub(crate) static ADEPZ_COORD: Lazy<Regex> =
    Lazy::new(|| compile(r"-ADEPZ ([0-9]+[NS][0-9]+[EW])"));
pub(crate) static ADA_DATE: Lazy<Regex> = Lazy::new(|| compile(r"-ADA ([0-9]+)"));
pub(crate) static ATA_TIME: Lazy<Regex> = Lazy::new(|| compile(r"-ATA ([0-9]+)"));
pub(crate) static ADARRZ_COORD: Lazy<Regex> =
    Lazy::new(|| compile(r"-ADARRZ ([0-9]+[NS][0-9]+[EW])"));

/// First capture of the first match, when non-empty.
pub(crate) fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str())
        .filter(|value| !value.is_empty())
}

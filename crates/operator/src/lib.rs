//! Operator identity extraction and classification.
//!
//! SHR telegrams carry a free-form `OPR/` clause naming the operator of the
//! flight: anything from `ООО "АЭРОСЪЕМКА"` to `ИП ИВАНОВ И.И.` to
//! transliterated or leet-mangled variants (`OOO AER0TECH`, `GU M4S`).
//! This crate isolates that clause and decides whether the operator is a
//! legal entity, a natural person, or cannot be determined.
//!
//! The pipeline is:
//!
//! 1. [`extract_opr`]: uppercase the telegram, locate `OPR/`, cut the
//!    clause at the next recognized telegram key, normalize punctuation;
//! 2. [`classify`]: strip phone numbers and quotes, build a Cyrillic and
//!    a transliterated Latin match branch (folding the common digit-leet
//!    substitutions first), and run the ordered rule list.
//!
//! Classification never fails: unknown input maps to
//! [`OperatorKind::Undetermined`]. All pattern tables are compiled once at
//! first use and shared across threads.

mod classify;
mod extract;
mod lexicon;
mod translit;

pub use classify::{classify, OperatorKind};
pub use extract::extract_opr;

use extract::display_form;

/// Extracts the `OPR/` clause and classifies it in one step.
///
/// Returns the display form of the operator (quote variants removed, phone
/// numbers kept) together with its classification. A telegram without an
/// `OPR/` clause yields an empty operator and
/// [`OperatorKind::Undetermined`].
pub fn extract_and_classify(raw_text: &str) -> (String, OperatorKind) {
    match extract_opr(raw_text) {
        Some(clause) => {
            let kind = classify(&clause);
            (display_form(&clause), kind)
        }
        None => (String::new(), OperatorKind::Undetermined),
    }
}

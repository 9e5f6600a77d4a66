//! Isolation of the `OPR/` clause from a raw SHR telegram.

use crate::lexicon::LEXICON;

/// Collapses whitespace runs to single spaces and trims the edges.
pub(crate) fn normalize_spaces(text: &str) -> String {
    LEXICON.spaces.replace_all(text, " ").trim().to_string()
}

/// Removes phone-like digit runs.
pub(crate) fn strip_phones(text: &str) -> String {
    LEXICON.phones.replace_all(text, " ").into_owned()
}

/// Removes every quote variant.
pub(crate) fn strip_quotes(text: &str) -> String {
    LEXICON.quotes.replace_all(text, " ").into_owned()
}

fn strip_leading_punct(text: &str) -> String {
    LEXICON.leading_punct.replace(text, "").into_owned()
}

fn strip_trailing_delims(text: &str) -> String {
    LEXICON.trailing_delims.replace(text, "").trim().to_string()
}

/// Extracts the operator clause from a raw SHR telegram.
///
/// The text is uppercased, the first `OPR/` marker located (extra slashes
/// tolerated), and the clause cut at the next recognized telegram key.
/// Whitespace is collapsed and leading/trailing punctuation removed.
/// Returns `None` when the telegram carries no `OPR/` clause.
pub fn extract_opr(raw_text: &str) -> Option<String> {
    let text = raw_text.trim().to_uppercase();
    if text.is_empty() {
        return None;
    }

    let marker = LEXICON.opr.find(&text)?;
    let tail = &text[marker.end()..];
    let clause = match LEXICON.next_key.find(tail) {
        Some(key) => &tail[..key.start()],
        None => tail,
    };

    let clause = normalize_spaces(clause);
    let clause = strip_leading_punct(&clause);
    let clause = strip_trailing_delims(&clause);
    if clause.is_empty() {
        None
    } else {
        Some(clause)
    }
}

/// Display form of an extracted clause: quotes removed, phone numbers kept.
pub(crate) fn display_form(clause: &str) -> String {
    strip_trailing_delims(&normalize_spaces(&strip_quotes(clause)))
}

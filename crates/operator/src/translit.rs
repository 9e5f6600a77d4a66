//! Leet substitutions and Cyrillic-to-Latin transliteration.

/// Digit-to-Cyrillic substitutions applied before the Cyrillic match pass.
pub(crate) fn apply_leet_cyr(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '3' => 'З',
            '4' => 'Ч',
            '0' => 'О',
            other => other,
        })
        .collect()
}

/// Digit-to-Latin substitutions applied before transliteration.
pub(crate) fn apply_leet_lat(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '0' => out.push('O'),
            '3' => out.push('Z'),
            '4' => out.push_str("CH"),
            other => out.push(other),
        }
    }
    out
}

/// Uppercases and transliterates Cyrillic letters into their Latin forms.
/// Non-Cyrillic characters pass through unchanged.
pub(crate) fn cyr_to_lat(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.to_uppercase().chars() {
        match ch {
            'А' => out.push('A'),
            'Б' => out.push('B'),
            'В' => out.push('V'),
            'Г' => out.push('G'),
            'Д' => out.push('D'),
            'Е' => out.push('E'),
            'Ё' => out.push_str("YO"),
            'Ж' => out.push_str("ZH"),
            'З' => out.push('Z'),
            'И' => out.push('I'),
            'Й' => out.push('Y'),
            'К' => out.push('K'),
            'Л' => out.push('L'),
            'М' => out.push('M'),
            'Н' => out.push('N'),
            'О' => out.push('O'),
            'П' => out.push('P'),
            'Р' => out.push('R'),
            'С' => out.push('S'),
            'Т' => out.push('T'),
            'У' => out.push('U'),
            'Ф' => out.push('F'),
            'Х' => out.push_str("KH"),
            'Ц' => out.push_str("TS"),
            'Ч' => out.push_str("CH"),
            'Ш' => out.push_str("SH"),
            'Щ' => out.push_str("SHCH"),
            'Ъ' | 'Ь' => {}
            'Ы' => out.push('Y'),
            'Э' => out.push('E'),
            'Ю' => out.push_str("YU"),
            'Я' => out.push_str("YA"),
            other => out.push(other),
        }
    }
    out
}

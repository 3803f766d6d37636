/// Decode uploaded bytes as ISO-8859-1 the way browsers do, which is the
/// windows-1252 superset: 0x80..=0x9F map to the typographic characters
/// below, every other byte maps to the code point of the same value.
/// Never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| decode_byte(byte)).collect()
}

const C1_MAPPING: [char; 32] = [
    '\u{20AC}', '\u{0081}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{008D}', '\u{017D}', '\u{008F}',
    '\u{0090}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{009D}', '\u{017E}', '\u{0178}',
];

fn decode_byte(byte: u8) -> char {
    match byte {
        0x80..=0x9F => C1_MAPPING[usize::from(byte - 0x80)],
        _ => char::from(byte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_accented_latin1_bytes() {
        // "José,joão@x.com" as ISO-8859-1
        let bytes = b"Jos\xE9,jo\xE3o@x.com";
        assert_eq!(decode_latin1(bytes), "José,joão@x.com");
    }

    #[test]
    fn ascii_is_unchanged() {
        assert_eq!(decode_latin1(b"name,email,phone\r\n"), "name,email,phone\r\n");
    }

    #[test]
    fn c1_range_uses_windows_1252_characters() {
        assert_eq!(decode_latin1(b"\x80\x96\x9F"), "€–Ÿ");
    }

    #[test]
    fn utf8_input_is_not_treated_as_utf8() {
        // "é" in UTF-8 is two bytes, which decode to two characters
        assert_eq!(decode_latin1("é".as_bytes()), "Ã©");
    }
}

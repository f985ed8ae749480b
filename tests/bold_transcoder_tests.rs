use ecp_codec::{BoldTranscoder, DEFAULT_DELIMITERS, DEFAULT_KEYWORD_PAIRS};

#[cfg(test)]
mod bold_transcoder_tests {
    use super::*;

    const FULL_PLAIN_ALPHABET: &str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    #[test]
    fn test_involution_over_full_alphabet() {
        let transcoder = BoldTranscoder::new();

        let styled = transcoder.to_styled(FULL_PLAIN_ALPHABET);
        assert_ne!(styled, FULL_PLAIN_ALPHABET);
        assert_eq!(transcoder.to_plain(&styled), FULL_PLAIN_ALPHABET);
    }

    #[test]
    fn test_styled_output_contains_no_plain_alphanumerics() {
        let transcoder = BoldTranscoder::new();

        let styled = transcoder.to_styled(FULL_PLAIN_ALPHABET);
        assert!(styled.chars().all(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_known_glyph_mapping() {
        let transcoder = BoldTranscoder::new();

        assert_eq!(transcoder.to_styled("a"), "𝗮");
        assert_eq!(transcoder.to_styled("Z"), "𝗭");
        assert_eq!(transcoder.to_styled("0"), "𝟬");
        assert_eq!(transcoder.to_plain("𝟵"), "9");
    }

    #[test]
    fn test_characters_outside_table_pass_through() {
        let transcoder = BoldTranscoder::new();

        assert_eq!(transcoder.to_styled("_"), "_");
        assert_eq!(transcoder.to_plain("_"), "_");
        assert_eq!(transcoder.to_styled("café"), "𝗰𝗮𝗳é");
        assert_eq!(transcoder.to_plain("𝗰𝗮𝗳é"), "café");
    }

    #[test]
    fn test_separators_survive_styling_round_trip() {
        let transcoder = BoldTranscoder::new();

        let token = "sell_Strange_Shotgun";
        let styled = transcoder.to_styled(token);

        assert!(styled.contains('_'));
        assert_eq!(transcoder.to_plain(&styled), token);
    }

    #[test]
    fn test_delimiters_and_keywords_are_plain_ascii_or_apostrophe() {
        // The bold table only covers alphanumerics; delimiter and keyword
        // tables must not contain glyphs the transcoder would rewrite
        // asymmetrically.
        let transcoder = BoldTranscoder::new();

        for &delimiter in DEFAULT_DELIMITERS {
            let s = delimiter.to_string();
            assert_eq!(transcoder.to_styled(&s), s);
        }

        for (long_form, short_form) in DEFAULT_KEYWORD_PAIRS {
            assert_eq!(transcoder.to_plain(long_form), *long_form);
            assert_eq!(transcoder.to_plain(short_form), *short_form);
        }
    }
}

use proptest::prelude::*;
use text_analyser_core::{analyze, count_characters, count_lines, count_words, is_word_separator};

proptest! {
    #[test]
    fn test_char_count_matches_unicode_length(
        content in "\\PC{0,500}"
    ) {
        prop_assert_eq!(count_characters(&content), content.chars().count());
    }

    #[test]
    fn test_line_count_follows_newlines(
        content in "[a-z \\t\\n]{0,300}"
    ) {
        let lines = count_lines(&content);
        if content.is_empty() {
            prop_assert_eq!(lines, 0);
        } else {
            let newlines = content.matches('\n').count();
            let tail = usize::from(!content.ends_with('\n'));
            prop_assert_eq!(lines, newlines + tail);
        }
    }

    #[test]
    fn test_line_count_zero_only_for_empty(
        content in "\\PC{0,200}"
    ) {
        prop_assert_eq!(count_lines(&content) == 0, content.is_empty());
    }

    #[test]
    fn test_word_count_zero_only_for_blank(
        content in "[a-z \\t\\r\\n\\-\\x1c-\\x1f]{0,200}"
    ) {
        let blank = content.trim_matches(is_word_separator).is_empty();
        prop_assert_eq!(count_words(&content) == 0, blank);
    }

    #[test]
    fn test_words_never_exceed_characters(
        content in "\\PC{0,300}"
    ) {
        let report = analyze(&content);
        prop_assert!(report.words <= report.characters);
    }

    #[test]
    fn test_analyze_is_pure(
        content in "\\PC{0,300}"
    ) {
        prop_assert_eq!(analyze(&content), analyze(&content));
    }
}

const PARAGRAPH_BREAK: &str = "\n\n";

/// Splits summary text into paragraphs on each literal blank-line break.
///
/// Segments are returned untrimmed, and empty leading or trailing segments
/// are kept, so the result always has one more entry than there are breaks.
#[must_use]
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_paragraphs() {
        assert_eq!(
            split_paragraphs("Paragraph one.\n\nParagraph two."),
            vec!["Paragraph one.", "Paragraph two."]
        );
    }

    #[test]
    fn no_break_yields_single_paragraph() {
        assert_eq!(split_paragraphs("This is a test summary."), vec!["This is a test summary."]);
        assert_eq!(split_paragraphs(""), vec![""]);
    }

    #[test]
    fn single_newline_is_not_a_break() {
        assert_eq!(split_paragraphs("line one\nline two"), vec!["line one\nline two"]);
    }

    #[test]
    fn leading_and_trailing_breaks_keep_empty_paragraphs() {
        assert_eq!(split_paragraphs("\n\nbody\n\n"), vec!["", "body", ""]);
    }

    #[test]
    fn length_is_break_count_plus_one() {
        for text in ["a", "a\n\nb", "a\n\nb\n\nc", "\n\n\n\n", "x\n\n\ny"] {
            let breaks = text.matches(PARAGRAPH_BREAK).count();
            assert_eq!(split_paragraphs(text).len(), breaks + 1, "text: {text:?}");
        }
    }
}

use crate::video::Highlight;

/// A run of summary text, either highlighted or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSegment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Splits `text` into alternating plain and highlighted runs.
///
/// Offsets count Unicode scalar values. Highlights may arrive in any order;
/// they are sorted here. Spans that are empty, start past the end of the
/// text, or overlap an earlier span are dropped, and an `end` past the text
/// is clamped. Concatenating the segment texts always reproduces `text`.
#[must_use]
pub fn segment_highlights<'a>(text: &'a str, highlights: &[Highlight]) -> Vec<HighlightSegment<'a>> {
    let byte_offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = byte_offsets.len() - 1;

    let mut sorted: Vec<Highlight> = highlights.to_vec();
    sorted.sort_by_key(|h| (h.start, h.end));

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;
    for highlight in sorted {
        let end = highlight.end.min(char_len);
        if highlight.start < cursor || highlight.start >= end {
            continue;
        }
        if highlight.start > cursor {
            segments.push(HighlightSegment {
                text: &text[byte_offsets[cursor]..byte_offsets[highlight.start]],
                highlighted: false,
            });
        }
        segments.push(HighlightSegment {
            text: &text[byte_offsets[highlight.start]..byte_offsets[end]],
            highlighted: true,
        });
        cursor = end;
    }

    if cursor < char_len {
        segments.push(HighlightSegment {
            text: &text[byte_offsets[cursor]..],
            highlighted: false,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(start: usize, end: usize) -> Highlight {
        Highlight { start, end }
    }

    fn joined(segments: &[HighlightSegment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn no_highlights_yields_one_plain_segment() {
        let segments = segment_highlights("plain text", &[]);
        assert_eq!(
            segments,
            vec![HighlightSegment {
                text: "plain text",
                highlighted: false
            }]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(segment_highlights("", &[h(0, 3)]).is_empty());
    }

    #[test]
    fn unsorted_highlights_are_ordered() {
        let text = "alpha beta gamma";
        let segments = segment_highlights(text, &[h(11, 16), h(0, 5)]);
        let marked: Vec<&str> = segments.iter().filter(|s| s.highlighted).map(|s| s.text).collect();
        assert_eq!(marked, vec!["alpha", "gamma"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn overlapping_highlight_is_dropped() {
        let text = "0123456789";
        let segments = segment_highlights(text, &[h(2, 6), h(4, 8)]);
        let marked: Vec<&str> = segments.iter().filter(|s| s.highlighted).map(|s| s.text).collect();
        assert_eq!(marked, vec!["2345"]);
        assert_eq!(joined(&segments), text);
    }

    #[test]
    fn adjacent_highlights_are_kept() {
        let segments = segment_highlights("abcdef", &[h(3, 6), h(0, 3)]);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.highlighted));
    }

    #[test]
    fn end_past_text_is_clamped_and_start_past_text_dropped() {
        let text = "short";
        let segments = segment_highlights(text, &[h(2, 99), h(40, 50)]);
        assert_eq!(
            segments,
            vec![
                HighlightSegment { text: "sh", highlighted: false },
                HighlightSegment { text: "ort", highlighted: true },
            ]
        );
    }

    #[test]
    fn empty_highlight_is_dropped() {
        let segments = segment_highlights("abc", &[h(1, 1)]);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].highlighted);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let text = "café – naïve";
        let segments = segment_highlights(text, &[h(7, 12)]);
        assert_eq!(segments[1].text, "naïve");
        assert_eq!(joined(&segments), text);
    }
}

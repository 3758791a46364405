//! Applying merged spans to the original text.
//!
//! The highlighter walks the merged span set left to right and cuts the
//! original-case text into an alternating run of plain and highlighted
//! segments. Concatenating the segments in order reproduces the input text
//! exactly, for every input. The render layer depends on that round-trip
//! to display nothing more and nothing less than the field itself.

use crate::matcher::find_matches;
use crate::spans::{merge_spans, MergedSpans};
use crate::types::Segment;

/// Highlight every term occurrence in `text`.
///
/// The common case is no active search: an empty term list returns the whole
/// text as one plain segment without invoking the matcher or merger.
pub fn highlight(text: &str, terms: &[String]) -> Vec<Segment> {
    if terms.is_empty() {
        return vec![Segment::plain(text)];
    }
    let spans = merge_spans(find_matches(text, terms));
    apply_spans(text, &spans)
}

/// Cut `text` at the boundaries of an already-merged span set.
///
/// Spans use character offsets; offsets past the end of the text clamp
/// rather than panic.
pub fn apply_spans(text: &str, spans: &MergedSpans) -> Vec<Segment> {
    if spans.is_empty() {
        return vec![Segment::plain(text)];
    }
    crate::contracts::check_merged_spans(spans.as_slice());

    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0usize;

    for span in spans {
        let end = span.end.min(chars.len());
        let start = span.start.min(end);
        if start > cursor {
            segments.push(Segment::plain(collect(&chars[cursor..start])));
        }
        if end > start {
            segments.push(Segment::highlighted(collect(&chars[start..end])));
        }
        cursor = cursor.max(end);
    }

    if cursor < chars.len() {
        segments.push(Segment::plain(collect(&chars[cursor..])));
    }

    crate::contracts::check_round_trip(text, &segments);
    segments
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentKind;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    fn rejoin(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn empty_query_is_single_plain_segment() {
        let segments = highlight("Water Treatment Plant", &[]);
        assert_eq!(segments, vec![Segment::plain("Water Treatment Plant")]);
    }

    #[test]
    fn no_match_is_single_plain_segment() {
        let segments = highlight("Water Treatment Plant", &terms(&["zzz"]));
        assert_eq!(segments, vec![Segment::plain("Water Treatment Plant")]);
    }

    #[test]
    fn case_insensitive_highlight_preserves_original_casing() {
        let segments = highlight("Water Treatment Plant", &terms(&["water", "plant"]));
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("Water"),
                Segment::plain(" Treatment "),
                Segment::highlighted("Plant"),
            ]
        );
    }

    #[test]
    fn leading_plain_segment_only_when_nonempty() {
        let segments = highlight("water rights", &terms(&["water"]));
        assert_eq!(segments[0].kind, SegmentKind::Highlighted);
        assert_eq!(segments[0].text, "water");
        assert_eq!(segments[1], Segment::plain(" rights"));
    }

    #[test]
    fn overlapping_terms_highlight_once() {
        let segments = highlight("water", &terms(&["wat", "water"]));
        assert_eq!(segments, vec![Segment::highlighted("water")]);
    }

    #[test]
    fn round_trip_with_multibyte_chars() {
        let text = "Énergie solaire — dès 2024";
        let segments = highlight(text, &terms(&["solaire", "2024"]));
        assert_eq!(rejoin(&segments), text);
        assert_eq!(segments.iter().filter(|s| s.is_highlighted()).count(), 2);
    }

    #[test]
    fn empty_text() {
        assert_eq!(highlight("", &terms(&["x"])), vec![Segment::plain("")]);
        assert_eq!(highlight("", &[]), vec![Segment::plain("")]);
    }

    #[test]
    fn out_of_range_spans_clamp() {
        let spans = merge_spans(vec![crate::types::MatchSpan::new(3, 99)]);
        let segments = apply_spans("hello", &spans);
        assert_eq!(
            segments,
            vec![Segment::plain("hel"), Segment::highlighted("lo")]
        );
    }
}

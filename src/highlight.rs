//! Splitting matched text into highlighted and plain runs.

use std::collections::HashSet;
use std::iter::once;

/// A run of characters that are either all matched or all unmatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text of the run
    pub text: &'a str,
    /// Whether the run is part of the match
    pub highlighted: bool,
}

/// Splits the characters `from..to` of `text` into maximal highlighted / plain runs.
///
/// `matches` holds character indices, as returned by the matchers. Ranges past
/// the end of `text` are clamped, empty ranges yield no segment.
///
/// ```
/// use protosearch::highlight::{Segment, highlight_segments};
///
/// let segments = highlight_segments("DOM.enable", &[0, 1, 2], 0, 10);
/// assert_eq!(segments[0], Segment { text: "DOM", highlighted: true });
/// assert_eq!(segments[1], Segment { text: ".enable", highlighted: false });
/// ```
pub fn highlight_segments<'a>(text: &'a str, matches: &[usize], from: usize, to: usize) -> Vec<Segment<'a>> {
    let offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).chain(once(text.len())).collect();
    let char_len = offsets.len() - 1;
    let to = to.min(char_len);
    let from = from.min(to);

    let mut segments = Vec::new();
    if from == to {
        return segments;
    }

    let mut push = |start: usize, end: usize, highlighted: bool| {
        if start != end {
            segments.push(Segment {
                text: &text[offsets[start]..offsets[end]],
                highlighted,
            });
        }
    };

    if matches.is_empty() {
        push(from, to, false);
    } else {
        let matched: HashSet<usize> = matches.iter().copied().collect();
        let mut inside_match = false;
        let mut current = from;
        for idx in from..to {
            let is_match = matched.contains(&idx);
            if inside_match != is_match {
                push(current, idx, inside_match);
                inside_match = is_match;
                current = idx;
            }
        }
        push(current, to, inside_match);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.highlighted {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_no_matches() {
        assert_eq!(render(&highlight_segments("Page.reload", &[], 0, 11)), "Page.reload");
        assert_eq!(highlight_segments("Page.reload", &[], 0, 11).len(), 1);
    }

    #[test]
    fn test_runs() {
        assert_eq!(
            render(&highlight_segments("setBreakpoint", &[0, 2, 3], 0, 13)),
            "[s]e[tB]reakpoint"
        );
        assert_eq!(render(&highlight_segments("abc", &[0, 1, 2], 0, 3)), "[abc]");
    }

    #[test]
    fn test_sub_range() {
        let text = "DOM.enable";
        assert_eq!(render(&highlight_segments(text, &[0, 4, 5], 0, 4)), "[D]OM.");
        assert_eq!(render(&highlight_segments(text, &[0, 4, 5], 4, 10)), "[en]able");
    }

    #[test]
    fn test_clamped_and_empty_ranges() {
        assert!(highlight_segments("abc", &[0], 2, 2).is_empty());
        assert!(highlight_segments("abc", &[0], 5, 9).is_empty());
        assert_eq!(render(&highlight_segments("abc", &[2], 1, 99)), "b[c]");
        assert!(highlight_segments("", &[], 0, 0).is_empty());
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(render(&highlight_segments("Hello, 世界", &[0, 7], 0, 9)), "[H]ello, [世]界");
    }
}

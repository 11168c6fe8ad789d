//! Map reported issues back onto the assessed document
//!
//! Every occurrence of an issue's text becomes a flagged segment carrying the
//! issue's suggestion. Everything between occurrences stays plain. Matching
//! is exact: whitespace and case are not normalized, and an issue whose text
//! does not occur simply flags nothing.
//!
//! Issues with an empty `non_compliant_text` are left out of matching. An
//! empty marker would match between every pair of characters and split the
//! document into empty flagged chunks.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};
use shared_types::{ComplianceIssue, Segment};
use tracing::warn;

/// Characters that must be escaped to match literally inside a pattern
const PATTERN_METACHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escape pattern metacharacters so `text` matches only itself when used
/// inside a regular expression
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if PATTERN_METACHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Partition `content` into plain and flagged segments.
///
/// Issues sharing the same text produce a single marker; the suggestion of
/// the first such issue is used. When markers overlap, the leftmost match
/// wins and among matches starting at the same position the earlier issue
/// wins. Empty chunks between adjacent matches are kept, so the segment
/// texts concatenate back to `content`.
pub fn highlight(content: &str, issues: &[ComplianceIssue]) -> Vec<Segment> {
    let mut marker_texts: Vec<&str> = Vec::new();
    let mut suggestions: HashMap<&str, &str> = HashMap::new();

    for issue in issues {
        let text = issue.non_compliant_text.as_str();
        if text.is_empty() || suggestions.contains_key(text) {
            continue;
        }
        marker_texts.push(text);
        suggestions.insert(text, issue.suggestion.as_str());
    }

    if marker_texts.is_empty() {
        return vec![plain(content)];
    }

    let spans: Vec<(usize, usize)> = match AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(&marker_texts)
    {
        Ok(ac) => ac
            .find_iter(content)
            .map(|m| (m.start(), m.end()))
            .collect(),
        Err(err) => {
            warn!("Could not build highlight automaton, scanning literally: {}", err);
            scan_leftmost_first(content, &marker_texts)
        }
    };

    let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
    let mut last = 0;
    for (start, end) in spans {
        segments.push(plain(&content[last..start]));
        segments.push(classify(&content[start..end], &suggestions));
        last = end;
    }
    segments.push(plain(&content[last..]));

    segments
}

/// Non-overlapping leftmost-first matches found with plain substring search
fn scan_leftmost_first(content: &str, markers: &[&str]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < content.len() {
        let mut best: Option<(usize, usize)> = None;
        for marker in markers {
            if let Some(offset) = content[pos..].find(marker) {
                let start = pos + offset;
                // Strictly earlier only: ties keep the earlier marker
                if best.map_or(true, |(s, _)| start < s) {
                    best = Some((start, start + marker.len()));
                }
            }
        }
        match best {
            Some(span) => {
                spans.push(span);
                pos = span.1;
            }
            None => break,
        }
    }

    spans
}

/// Rebuild the document text from its segments
pub fn reassemble(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

fn plain(text: &str) -> Segment {
    Segment::Plain {
        text: text.to_string(),
    }
}

fn classify(chunk: &str, suggestions: &HashMap<&str, &str>) -> Segment {
    match suggestions.get(chunk) {
        Some(suggestion) => Segment::Flagged {
            text: chunk.to_string(),
            suggestion: suggestion.to_string(),
        },
        None => plain(chunk),
    }
}

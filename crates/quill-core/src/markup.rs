use quill_types::Segment;
use regex::Regex;

const MARKER: &str = "**";

/// Strip `**` marker pairs from the raw model text, collecting the
/// enclosed terms left to right. Duplicates are kept, one entry per
/// occurrence, surface form untouched. An unmatched opener is left in
/// place verbatim.
pub fn extract_flagged(raw: &str) -> (String, Vec<String>) {
    let mut display = String::with_capacity(raw.len());
    let mut terms = Vec::new();
    let mut rest = raw;

    loop {
        let Some(open) = rest.find(MARKER) else {
            display.push_str(rest);
            break;
        };
        let after_open = &rest[open + MARKER.len()..];
        let Some(close) = after_open.find(MARKER) else {
            display.push_str(rest);
            break;
        };

        display.push_str(&rest[..open]);
        let term = &after_open[..close];
        display.push_str(term);
        terms.push(term.to_string());
        rest = &after_open[close + MARKER.len()..];
    }

    (display, terms)
}

/// Split display text into structured fragments: every whole-word
/// occurrence of each distinct term becomes a Flagged segment. Word
/// boundaries keep partial-word matches (cat in category) out; when
/// matches overlap the earlier one wins.
pub fn segment(display: &str, terms: &[String]) -> Vec<Segment> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut seen: Vec<&str> = Vec::new();

    for term in terms {
        if term.is_empty() || seen.contains(&term.as_str()) {
            continue;
        }
        seen.push(term);

        let Ok(pattern) = Regex::new(&format!(r"\b{}\b", regex::escape(term))) else {
            continue;
        };
        for found in pattern.find_iter(display) {
            ranges.push((found.start(), found.end()));
        }
    }

    ranges.sort_unstable();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(Segment::Plain(display[cursor..start].to_string()));
        }
        segments.push(Segment::Flagged(display[start..end].to_string()));
        cursor = end;
    }
    if cursor < display.len() {
        segments.push(Segment::Plain(display[cursor..].to_string()));
    }

    segments
}

/// Marker-free text for the clipboard: term text retained, flagging dropped.
pub fn plain_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::text).collect()
}

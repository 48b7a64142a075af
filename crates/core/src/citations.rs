//! Overview citation markers: splits overview text into plain runs, `[n]`
//! citation badges, and line breaks. Display only; the stored overview is
//! never rewritten.

use regex::Regex;
use std::sync::OnceLock;

static CITATION: OnceLock<Regex> = OnceLock::new();

fn citation_regex() -> &'static Regex {
    CITATION.get_or_init(|| Regex::new(r"\[([0-9]+)\]").expect("valid citation regex"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverviewFragment {
    Text(String),
    /// Digits of an `[n]` marker, kept as text so very long numbers survive.
    Citation(String),
    LineBreak,
}

fn push_text(out: &mut Vec<OverviewFragment>, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(OverviewFragment::LineBreak);
        }
        if !line.is_empty() {
            out.push(OverviewFragment::Text(line.to_string()));
        }
    }
}

/// Split `overview` into display fragments.
pub fn overview_fragments(overview: &str) -> Vec<OverviewFragment> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in citation_regex().captures_iter(overview) {
        let (Some(whole), Some(num)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut out, &overview[last..whole.start()]);
        out.push(OverviewFragment::Citation(num.as_str().to_string()));
        last = whole.end();
    }
    push_text(&mut out, &overview[last..]);
    out
}

/// Reassemble fragments for a plain-text surface. `badge` formats each
/// citation number.
pub fn render_plain(fragments: &[OverviewFragment], badge: impl Fn(&str) -> String) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            OverviewFragment::Text(t) => out.push_str(t),
            OverviewFragment::Citation(n) => out.push_str(&badge(n)),
            OverviewFragment::LineBreak => out.push('\n'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use OverviewFragment::*;

    #[test]
    fn markers_become_badges_and_text_is_preserved() {
        let frags = overview_fragments("Plastic affects soil [1] and roots [2].");
        assert_eq!(
            frags,
            vec![
                Text("Plastic affects soil ".into()),
                Citation("1".into()),
                Text(" and roots ".into()),
                Citation("2".into()),
                Text(".".into()),
            ]
        );
    }

    #[test]
    fn line_breaks_are_kept() {
        let frags = overview_fragments("First [3]\n\nSecond");
        assert_eq!(
            frags,
            vec![
                Text("First ".into()),
                Citation("3".into()),
                LineBreak,
                LineBreak,
                Text("Second".into()),
            ]
        );
    }

    #[test]
    fn non_numeric_brackets_are_plain_text() {
        let text = "See [a] and [] and [1a].";
        assert_eq!(overview_fragments(text), vec![Text(text.into())]);
    }

    #[test]
    fn plain_render_round_trips_input() {
        let text = "A [1][2]\nB [10] end";
        let frags = overview_fragments(text);
        assert_eq!(render_plain(&frags, |n| format!("[{n}]")), text);
        let numbers: Vec<&str> = frags
            .iter()
            .filter_map(|f| match f {
                Citation(n) => Some(n.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec!["1", "2", "10"]);
    }

    #[test]
    fn empty_overview_has_no_fragments() {
        assert!(overview_fragments("").is_empty());
    }
}

//! Turning backend responses into display data: source formatting with
//! placeholder defaults, abstract previews, and subject list normalization.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{DocumentRecord, SearchResponse, SearchResults, Source, SubjectsField};

pub const UNKNOWN_TITLE: &str = "[Unknown Title]";
pub const UNKNOWN_AUTHOR: &str = "[Unknown Author]";
pub const UNKNOWN_YEAR: &str = "[Unknown Year]";
pub const UNKNOWN_UNIVERSITY: &str = "[Unknown University]";
pub const NO_ABSTRACT: &str = "Abstract not available.";
pub const DEFAULT_DEGREE: &str = "Thesis";
pub const DEFAULT_SUBJECT: &str = "Research";
pub const NO_OVERVIEW: &str = "No overview available.";

/// Sentences shown in the inline abstract preview.
pub const PREVIEW_SENTENCES: usize = 3;

static SENTENCE_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn sentence_boundary() -> &'static Regex {
    SENTENCE_BOUNDARY.get_or_init(|| Regex::new(r"\.\s+").expect("valid sentence regex"))
}

// ---------------------------------------------------------------------------
// Response formatting
// ---------------------------------------------------------------------------

/// Empty strings count as missing, same as absent fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Format one backend document. `id` is its 1-based display position.
pub fn format_source(id: usize, doc: DocumentRecord) -> Source {
    let subjects = match doc.subjects {
        Some(SubjectsField::Text(s)) if s.is_empty() => None,
        other => other,
    };
    Source {
        id,
        title: non_empty(doc.title).unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        author: non_empty(doc.author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        year: doc
            .publication_year
            .and_then(|y| y.as_text())
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
        abstract_text: non_empty(doc.abstract_text).unwrap_or_else(|| NO_ABSTRACT.to_string()),
        full_text_path: doc.file.unwrap_or_default(),
        degree: non_empty(doc.degree).unwrap_or_else(|| DEFAULT_DEGREE.to_string()),
        subjects: subjects.unwrap_or_else(|| SubjectsField::List(vec![DEFAULT_SUBJECT.to_string()])),
        school: non_empty(doc.university).unwrap_or_else(|| UNKNOWN_UNIVERSITY.to_string()),
        call_no: non_empty(doc.call_no),
    }
}

/// Build the result set for `query` from a successful `/search` response.
pub fn format_response(query: &str, response: SearchResponse) -> SearchResults {
    let sources = response
        .documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| format_source(i + 1, doc))
        .collect();
    SearchResults {
        query: query.to_string(),
        overview: non_empty(response.overview).unwrap_or_else(|| NO_OVERVIEW.to_string()),
        sources,
        related_questions: response.related_questions.unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Abstract preview
// ---------------------------------------------------------------------------

/// Split on "period followed by whitespace". The period stays with its
/// sentence; the whitespace run is dropped. Text without such a boundary is a
/// single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in sentence_boundary().find_iter(text) {
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// First three sentences joined by single spaces, with `" ..."` appended only
/// when the abstract had more than three.
pub fn abstract_preview(abstract_text: &str) -> String {
    let sentences = split_sentences(abstract_text.trim_end());
    let mut preview = sentences
        .iter()
        .take(PREVIEW_SENTENCES)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if sentences.len() > PREVIEW_SENTENCES {
        preview.push_str(" ...");
    }
    preview
}

// ---------------------------------------------------------------------------
// Subjects
// ---------------------------------------------------------------------------

/// Normalize a subjects field into trimmed, non-empty entries.
pub fn normalize_subjects(subjects: Option<&SubjectsField>) -> Vec<String> {
    let clean = |s: &str| {
        let t = s.trim();
        (!t.is_empty()).then(|| t.to_string())
    };
    match subjects {
        Some(SubjectsField::List(items)) => items.iter().filter_map(|s| clean(s.as_str())).collect(),
        Some(SubjectsField::Text(text)) => text.split(',').filter_map(clean).collect(),
        None => Vec::new(),
    }
}

/// Subjects as display lines; `["N/A"]` when there are none.
pub fn subjects_display(subjects: Option<&SubjectsField>) -> Vec<String> {
    let list = normalize_subjects(subjects);
    if list.is_empty() {
        vec!["N/A".to_string()]
    } else {
        list
    }
}

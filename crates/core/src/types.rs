//! Core types shared across LitPath: search filters, backend status, the
//! request/response wire shapes of the search backend, and the formatted
//! result set the view renders.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Sentinel subject meaning "no subject filter".
pub const ALL_SUBJECTS: &str = "All subjects";

/// Subjects offered in the subject dropdown, in display order.
pub const SUBJECTS: &[&str] = &[
    ALL_SUBJECTS,
    "Agriculture",
    "Anthropology",
    "Applied Sciences",
    "Architecture",
    "Arts and Humanities",
    "Biological Sciences",
    "Business",
    "Chemistry",
    "Communication and Media",
    "Computer Science",
    "Cultural Studies",
    "Economics",
    "Education",
    "Engineering",
    "Environmental Science",
    "Geography",
    "History",
    "Law",
    "Library and Information Science",
    "Linguistics",
    "Literature",
    "Mathematics",
    "Medicine and Health Sciences",
    "Philosophy",
    "Physics",
    "Political Science",
    "Psychology",
    "Social Sciences",
    "Sociology",
];

/// Publication date filter. Serializes to the labels the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateFilter {
    #[default]
    #[serde(rename = "All dates")]
    AllDates,
    #[serde(rename = "Last year")]
    LastYear,
    #[serde(rename = "Last 3 years")]
    LastThreeYears,
    #[serde(rename = "Custom date range")]
    Custom,
}

impl DateFilter {
    pub const ALL: [DateFilter; 4] = [
        DateFilter::AllDates,
        DateFilter::LastYear,
        DateFilter::LastThreeYears,
        DateFilter::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateFilter::AllDates => "All dates",
            DateFilter::LastYear => "Last year",
            DateFilter::LastThreeYears => "Last 3 years",
            DateFilter::Custom => "Custom date range",
        }
    }

    /// Parse a dropdown label. Case-insensitive so the CLI can accept
    /// `--date "last year"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current filter selection. Years are kept as the raw strings the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub subject: String,
    pub date: DateFilter,
    pub from_year: String,
    pub to_year: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            subject: ALL_SUBJECTS.to_string(),
            date: DateFilter::AllDates,
            from_year: String::new(),
            to_year: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Backend health
// ---------------------------------------------------------------------------

/// Result of the `/health` probe. Tagged by the `status` field on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BackendStatus {
    Healthy {
        #[serde(default)]
        total_documents: u64,
        #[serde(default)]
        total_chunks: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        total_txt_files: Option<u64>,
    },
    Error {
        #[serde(default)]
        message: String,
    },
}

impl BackendStatus {
    pub fn error(message: impl Into<String>) -> Self {
        BackendStatus::Error { message: message.into() }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, BackendStatus::Healthy { .. })
    }

    /// One-line banner shown above the search view.
    pub fn banner(&self) -> String {
        match self {
            BackendStatus::Healthy { total_documents, total_chunks, .. } => format!(
                "\u{2713} Backend connected - {total_documents} documents, {total_chunks} chunks indexed"
            ),
            BackendStatus::Error { message } => format!("\u{26A0} {message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types: POST /search
// ---------------------------------------------------------------------------

/// Body of `POST {base}/search`. `None` fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub question: String,
    pub subject: Option<String>,
    pub date_filter: DateFilter,
    pub from_year: Option<String>,
    pub to_year: Option<String>,
}

impl SearchRequest {
    /// Build the payload from the current filters. The subject is dropped for
    /// "All subjects"; years are only sent for a custom date range.
    pub fn from_filters(question: &str, filters: &Filters) -> Self {
        let custom = filters.date == DateFilter::Custom;
        Self {
            question: question.to_string(),
            subject: (filters.subject != ALL_SUBJECTS).then(|| filters.subject.clone()),
            date_filter: filters.date,
            from_year: custom.then(|| filters.from_year.clone()),
            to_year: custom.then(|| filters.to_year.clone()),
        }
    }
}

/// Successful `/search` response. Every field is optional; missing pieces are
/// defaulted during formatting.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub related_questions: Option<Vec<String>>,
}

/// One retrieved document as the backend sends it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub publication_year: Option<YearField>,
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub call_no: Option<String>,
    #[serde(default)]
    pub subjects: Option<SubjectsField>,
    #[serde(default)]
    pub university: Option<String>,
}

/// Publication years arrive either as text or as a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum YearField {
    Number(i64),
    Text(String),
}

impl YearField {
    /// Text form, or `None` when empty.
    pub fn as_text(&self) -> Option<String> {
        match self {
            YearField::Number(n) => Some(n.to_string()),
            YearField::Text(s) if s.is_empty() => None,
            YearField::Text(s) => Some(s.clone()),
        }
    }
}

/// Subjects arrive as a JSON array or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectsField {
    List(Vec<String>),
    Text(String),
}

/// Error body carried by non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Formatted results
// ---------------------------------------------------------------------------

/// A document ready for display. `id` is the 1-based position in the result
/// list, not a backend identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: usize,
    pub title: String,
    pub author: String,
    pub year: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub full_text_path: String,
    pub degree: String,
    pub subjects: SubjectsField,
    pub school: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_no: Option<String>,
}

/// One completed search. Replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub overview: String,
    pub sources: Vec<Source>,
    pub related_questions: Vec<String>,
}

impl SearchResults {
    pub fn source(&self, id: usize) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }
}

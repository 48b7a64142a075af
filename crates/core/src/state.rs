//! The research-search view as an explicit state container.
//!
//! All interactive state lives in [`ViewState`]. It only changes through
//! [`ViewState::apply`], which takes an [`Action`] and may hand back an
//! [`Effect`] (network work) for the caller to run. The result of that work
//! comes back in as another action. Rendering reads the state through
//! accessors and never mutates it.

use tracing::debug;

use crate::error::ViewError;
use crate::events::PointerDown;
use crate::types::{BackendStatus, DateFilter, Filters, SearchRequest, SearchResults, Source, SUBJECTS};

/// Prompts offered on the landing screen.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "How does plastic pollution affect plant growth in farmland?",
    "Find research about sleep quality among teenagers",
    "How does remote work impact employee productivity?",
    "Find recent research about how vitamin D deficiency impact overall health",
];

/// Highest value of the feedback rating.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Subject,
    Date,
}

/// Which screen the view is on. Derived from the state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No results yet and nothing pending.
    Idle,
    /// A search request is in flight.
    Loading,
    /// A result set is shown.
    Results,
    /// The last attempt failed; still on the pre-results screen.
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetQuery(String),
    SetSubject(String),
    SetDateFilter(DateFilter),
    SetFromYear(String),
    SetToYear(String),
    ToggleDropdown(Dropdown),
    PointerDown(PointerDown),
    HealthChecked(BackendStatus),
    /// Search for the current query.
    Submit,
    /// Replace the query with `question` and search for it (example and
    /// related questions).
    AskQuestion(String),
    SearchSucceeded(SearchResults),
    SearchFailed(String),
    SelectSource(usize),
    ClearSelection,
    OpenOverlay,
    CloseOverlay,
    SetRating(u8),
    NewChat,
}

/// Work the caller must perform on the state's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CheckHealth,
    Search(SearchRequest),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    query: String,
    filters: Filters,
    subject_open: bool,
    date_open: bool,
    backend: Option<BackendStatus>,
    results: Option<SearchResults>,
    selected: Option<usize>,
    overlay_open: bool,
    rating: u8,
    loading: bool,
    error: Option<ViewError>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state plus the health check to run once on mount.
    pub fn mount() -> (Self, Effect) {
        (Self::new(), Effect::CheckHealth)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        match dropdown {
            Dropdown::Subject => self.subject_open,
            Dropdown::Date => self.date_open,
        }
    }

    pub fn backend(&self) -> Option<&BackendStatus> {
        self.backend.as_ref()
    }

    pub fn results(&self) -> Option<&SearchResults> {
        self.results.as_ref()
    }

    pub fn selected_source(&self) -> Option<&Source> {
        let id = self.selected?;
        self.results.as_ref()?.source(id)
    }

    /// The overlay is only shown while a source is selected.
    pub fn overlay_open(&self) -> bool {
        self.overlay_open && self.selected_source().is_some()
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.results.is_some() {
            Phase::Results
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Idle
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn apply(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::SetQuery(query) => self.query = query,
            Action::SetSubject(subject) => {
                if SUBJECTS.contains(&subject.as_str()) {
                    self.filters.subject = subject;
                } else {
                    debug!(subject = subject.as_str(), "Ignoring unknown subject");
                }
                self.subject_open = false;
            }
            Action::SetDateFilter(date) => {
                self.filters.date = date;
                self.date_open = false;
            }
            Action::SetFromYear(year) => self.filters.from_year = year,
            Action::SetToYear(year) => self.filters.to_year = year,
            Action::ToggleDropdown(Dropdown::Subject) => self.subject_open = !self.subject_open,
            Action::ToggleDropdown(Dropdown::Date) => self.date_open = !self.date_open,
            Action::PointerDown(event) => {
                if event.inside != Some(Dropdown::Subject) {
                    self.subject_open = false;
                }
                if event.inside != Some(Dropdown::Date) {
                    self.date_open = false;
                }
            }
            Action::HealthChecked(status) => self.backend = Some(status),
            Action::Submit => {
                let question = self.query.clone();
                return self.submit(question);
            }
            Action::AskQuestion(question) => {
                self.query = question.clone();
                return self.submit(question);
            }
            Action::SearchSucceeded(results) => {
                debug!(sources = results.sources.len(), "Search succeeded");
                self.loading = false;
                // A selection belongs to the result set it was made on.
                self.selected = None;
                self.overlay_open = false;
                self.results = Some(results);
            }
            Action::SearchFailed(message) => {
                self.loading = false;
                self.error = Some(ViewError::SearchFailed(message));
            }
            Action::SelectSource(id) => {
                if self.results.as_ref().and_then(|r| r.source(id)).is_some() {
                    self.selected = Some(id);
                } else {
                    debug!(id, "Ignoring selection of unknown source");
                }
            }
            Action::ClearSelection => {
                self.selected = None;
                self.overlay_open = false;
            }
            Action::OpenOverlay => {
                if self.selected.is_some() {
                    self.overlay_open = true;
                }
            }
            Action::CloseOverlay => self.overlay_open = false,
            Action::SetRating(rating) => self.rating = rating.min(MAX_RATING),
            Action::NewChat => {
                // Backend status survives: it describes the server, not the chat.
                let backend = self.backend.take();
                *self = Self { backend, ..Self::default() };
            }
        }
        None
    }

    fn submit(&mut self, question: String) -> Option<Effect> {
        if question.trim().is_empty() {
            self.error = Some(ViewError::EmptyQuery);
            return None;
        }
        if !self.backend.as_ref().is_some_and(BackendStatus::is_healthy) {
            self.error = Some(ViewError::BackendUnavailable);
            return None;
        }
        debug!(question = question.as_str(), "Submitting search");
        self.loading = true;
        self.error = None;
        self.results = None;
        self.selected = None;
        self.overlay_open = false;
        Some(Effect::Search(SearchRequest::from_filters(&question, &self.filters)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_response;
    use crate::types::{DocumentRecord, SearchResponse, ALL_SUBJECTS};

    fn healthy() -> BackendStatus {
        BackendStatus::Healthy {
            total_documents: 3,
            total_chunks: 90,
            total_txt_files: None,
        }
    }

    fn ready() -> ViewState {
        let mut state = ViewState::new();
        state.apply(Action::HealthChecked(healthy()));
        state
    }

    fn results(query: &str, n: usize) -> SearchResults {
        let response = SearchResponse {
            overview: Some("Soil [1].".into()),
            documents: (0..n)
                .map(|i| DocumentRecord {
                    title: Some(format!("Thesis {i}")),
                    ..Default::default()
                })
                .collect(),
            related_questions: Some(vec!["What about roots?".into()]),
        };
        format_response(query, response)
    }

    #[test]
    fn mount_requests_health_check() {
        let (state, effect) = ViewState::mount();
        assert_eq!(effect, Effect::CheckHealth);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.backend().is_none());
    }

    #[test]
    fn healthy_submit_issues_one_search_with_filter_payload() {
        let mut state = ready();
        state.apply(Action::SetQuery("rice yields".into()));
        state.apply(Action::SetSubject("Agriculture".into()));
        state.apply(Action::SetDateFilter(DateFilter::Custom));
        state.apply(Action::SetFromYear("2015".into()));
        state.apply(Action::SetToYear("2020".into()));

        let effect = state.apply(Action::Submit);
        assert_eq!(
            effect,
            Some(Effect::Search(SearchRequest {
                question: "rice yields".into(),
                subject: Some("Agriculture".into()),
                date_filter: DateFilter::Custom,
                from_year: Some("2015".into()),
                to_year: Some("2020".into()),
            }))
        );
        assert_eq!(state.phase(), Phase::Loading);
        assert!(state.error().is_none());
    }

    #[test]
    fn blank_query_sets_validation_error_without_effect() {
        for query in ["", "   ", "\t\n"] {
            let mut state = ready();
            state.apply(Action::SetQuery(query.into()));
            assert_eq!(state.apply(Action::Submit), None);
            assert_eq!(state.error(), Some(&ViewError::EmptyQuery));
            assert!(!state.is_loading());
        }
    }

    #[test]
    fn blank_query_keeps_existing_results() {
        let mut state = ready();
        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 2)));
        state.apply(Action::SetQuery(" ".into()));
        assert_eq!(state.apply(Action::Submit), None);
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.error(), Some(&ViewError::EmptyQuery));
    }

    #[test]
    fn submit_without_healthy_backend_is_rejected() {
        let mut unknown = ViewState::new();
        unknown.apply(Action::SetQuery("q".into()));
        assert_eq!(unknown.apply(Action::Submit), None);
        assert_eq!(unknown.error(), Some(&ViewError::BackendUnavailable));

        let mut down = ViewState::new();
        down.apply(Action::HealthChecked(BackendStatus::error("Cannot connect to backend")));
        down.apply(Action::SetQuery("q".into()));
        assert_eq!(down.apply(Action::Submit), None);
        assert_eq!(down.error(), Some(&ViewError::BackendUnavailable));
        assert_eq!(down.phase(), Phase::Error);
    }

    #[test]
    fn success_enters_results_and_failure_enters_error() {
        let mut state = ready();
        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 2)));
        assert_eq!(state.phase(), Phase::Results);
        assert_eq!(state.results().map(|r| r.sources.len()), Some(2));

        state.apply(Action::Submit);
        assert!(state.results().is_none(), "submit clears prior results");
        state.apply(Action::SearchFailed("index not loaded".into()));
        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("Search failed: index not loaded")
        );
    }

    #[test]
    fn submit_clears_selection_and_overlay() {
        let mut state = ready();
        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 2)));
        state.apply(Action::SelectSource(2));
        state.apply(Action::OpenOverlay);
        assert!(state.overlay_open());

        state.apply(Action::Submit);
        assert!(state.selected_source().is_none());
        assert!(!state.overlay_open());
    }

    #[test]
    fn later_response_overwrites_earlier_one() {
        let mut state = ready();
        state.apply(Action::AskQuestion("first".into()));
        state.apply(Action::AskQuestion("second".into()));
        state.apply(Action::SearchSucceeded(results("second", 1)));
        state.apply(Action::SearchSucceeded(results("first", 3)));
        assert_eq!(state.results().map(|r| r.query.as_str()), Some("first"));
    }

    #[test]
    fn late_response_clears_selection_from_previous_results() {
        let mut state = ready();
        state.apply(Action::AskQuestion("A".into()));
        state.apply(Action::AskQuestion("B".into()));
        state.apply(Action::SearchSucceeded(results("A", 2)));
        state.apply(Action::SelectSource(2));
        state.apply(Action::OpenOverlay);
        assert!(state.overlay_open());

        state.apply(Action::SearchSucceeded(results("B", 2)));
        assert_eq!(state.results().map(|r| r.query.as_str()), Some("B"));
        assert!(state.selected_source().is_none());
        assert!(!state.overlay_open());
    }

    #[test]
    fn ask_question_replaces_query_and_searches() {
        let mut state = ready();
        let effect = state.apply(Action::AskQuestion(EXAMPLE_QUESTIONS[0].into()));
        assert_eq!(state.query(), EXAMPLE_QUESTIONS[0]);
        match effect {
            Some(Effect::Search(req)) => assert_eq!(req.question, EXAMPLE_QUESTIONS[0]),
            other => panic!("expected search effect, got {other:?}"),
        }
    }

    #[test]
    fn selection_must_reference_a_current_source() {
        let mut state = ready();
        state.apply(Action::SelectSource(1));
        assert!(state.selected_source().is_none());

        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 2)));
        state.apply(Action::SelectSource(7));
        assert!(state.selected_source().is_none());
        state.apply(Action::SelectSource(2));
        assert_eq!(state.selected_source().map(|s| s.title.as_str()), Some("Thesis 1"));
    }

    #[test]
    fn overlay_requires_selection() {
        let mut state = ready();
        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 1)));
        state.apply(Action::OpenOverlay);
        assert!(!state.overlay_open());

        state.apply(Action::SelectSource(1));
        state.apply(Action::OpenOverlay);
        assert!(state.overlay_open());
        state.apply(Action::ClearSelection);
        assert!(!state.overlay_open());
    }

    #[test]
    fn new_chat_resets_everything_but_backend_status() {
        let mut state = ready();
        state.apply(Action::SetQuery("q".into()));
        state.apply(Action::SetSubject("Physics".into()));
        state.apply(Action::SetDateFilter(DateFilter::LastYear));
        state.apply(Action::Submit);
        state.apply(Action::SearchSucceeded(results("q", 2)));
        state.apply(Action::SelectSource(1));
        state.apply(Action::OpenOverlay);
        state.apply(Action::SetRating(4));
        state.apply(Action::ToggleDropdown(Dropdown::Subject));

        assert_eq!(state.apply(Action::NewChat), None);
        assert_eq!(state.query(), "");
        assert_eq!(state.filters(), &Filters::default());
        assert_eq!(state.filters().subject, ALL_SUBJECTS);
        assert!(state.results().is_none());
        assert!(state.selected_source().is_none());
        assert!(!state.overlay_open());
        assert!(state.error().is_none());
        assert_eq!(state.rating(), 0);
        assert!(!state.is_open(Dropdown::Subject));
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.backend(), Some(&healthy()));
    }

    #[test]
    fn pointer_down_outside_closes_dropdowns() {
        let mut state = ViewState::new();
        state.apply(Action::ToggleDropdown(Dropdown::Subject));
        state.apply(Action::ToggleDropdown(Dropdown::Date));

        state.apply(Action::PointerDown(PointerDown { inside: Some(Dropdown::Subject) }));
        assert!(state.is_open(Dropdown::Subject));
        assert!(!state.is_open(Dropdown::Date));

        state.apply(Action::PointerDown(PointerDown { inside: None }));
        assert!(!state.is_open(Dropdown::Subject));
    }

    #[test]
    fn picking_options_closes_their_dropdown() {
        let mut state = ViewState::new();
        state.apply(Action::ToggleDropdown(Dropdown::Subject));
        state.apply(Action::SetSubject("Law".into()));
        assert!(!state.is_open(Dropdown::Subject));
        assert_eq!(state.filters().subject, "Law");

        state.apply(Action::SetSubject("Astrology".into()));
        assert_eq!(state.filters().subject, "Law");
    }

    #[test]
    fn rating_is_capped() {
        let mut state = ViewState::new();
        state.apply(Action::SetRating(9));
        assert_eq!(state.rating(), MAX_RATING);
    }
}

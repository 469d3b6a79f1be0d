// TUI application state
//
// Owns the passenger view, the interactive components and the overlay state
// (modal, toast). Fetches run in spawned tasks and report back through the
// outcome channel; App applies them on the UI task, so nothing here is shared.

use super::clipboard;
use super::components::{ClassChart, PassengerTable, SearchBar, Toast};
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive, RenderContext};
use crate::client::PassengerClient;
use crate::error::FetchError;
use crate::logging::LogBuffer;
use crate::model::Passenger;
use crate::view::{FetchRequest, PassengerView};
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

/// Panels that can hold keyboard focus, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Button,
    Chart,
    Table,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Button,
            Focus::Button => Focus::Chart,
            Focus::Chart => Focus::Table,
            Focus::Table => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Table,
            Focus::Button => Focus::Search,
            Focus::Chart => Focus::Button,
            Focus::Table => Focus::Chart,
        }
    }
}

/// Result of a spawned fetch, sent back to the UI loop
#[derive(Debug)]
pub enum FetchOutcome {
    Search {
        id: u64,
        result: Result<Vec<Passenger>, FetchError>,
    },
    Detail {
        passenger_id: i64,
        result: Result<Passenger, FetchError>,
    },
}

/// Short toast text for a failed search; the full error goes to the log
fn search_failure_message(error: &FetchError) -> String {
    if error.is_transport() {
        "✗ Cannot reach the passenger API".to_string()
    } else if let Some(status) = error.status() {
        format!("✗ API returned {}", status)
    } else {
        format!("✗ Search failed: {}", error)
    }
}

/// Main application state for the TUI
pub struct App {
    pub view: PassengerView,
    client: PassengerClient,
    outcome_tx: mpsc::Sender<FetchOutcome>,

    pub theme: Theme,
    pub focused: Focus,

    pub search_bar: SearchBar,
    pub chart: ClassChart,
    pub table: PassengerTable,

    pub modal: Option<Modal>,
    /// Record shown in the detail modal
    pub detail: Option<Passenger>,
    pub toast: Option<Toast>,

    input_handler: InputHandler,
    pub log_buffer: LogBuffer,

    pub should_quit: bool,
    animation_frame: usize,
}

impl App {
    pub fn new(
        client: PassengerClient,
        theme: Theme,
        log_buffer: LogBuffer,
        outcome_tx: mpsc::Sender<FetchOutcome>,
    ) -> Self {
        Self {
            view: PassengerView::new(),
            client,
            outcome_tx,
            theme,
            focused: Focus::default(),
            search_bar: SearchBar::new(),
            chart: ClassChart::new(),
            table: PassengerTable::new(),
            modal: None,
            detail: None,
            toast: None,
            input_handler: InputHandler::default(),
            log_buffer,
            should_quit: false,
            animation_frame: 0,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Fetching
    // ─────────────────────────────────────────────────────────────────────

    /// Confirm the text in the search input and fetch matching passengers
    pub fn submit_search(&mut self) {
        let request = self.view.on_search(self.search_bar.value());
        tracing::info!(id = request.id, search = %request.search, "Searching passengers");
        self.spawn_search(request);
    }

    fn spawn_search(&self, request: FetchRequest) {
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_passengers(&request.search).await;
            let outcome = FetchOutcome::Search {
                id: request.id,
                result,
            };
            if tx.send(outcome).await.is_err() {
                tracing::debug!(id = request.id, "UI closed before search completed");
            }
        });
    }

    fn spawn_detail(&self, passenger_id: i64) {
        let client = self.client.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = client.fetch_passenger(passenger_id).await;
            let outcome = FetchOutcome::Detail {
                passenger_id,
                result,
            };
            if tx.send(outcome).await.is_err() {
                tracing::debug!(passenger_id, "UI closed before detail fetch completed");
            }
        });
    }

    /// Apply a finished fetch to the view
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Search { id, result } => match result {
                Ok(passengers) => {
                    let count = passengers.len();
                    if self.view.on_fetch_success(id, passengers) {
                        self.table.reset(count);
                        let skipped = self.view.breakdown().skipped;
                        tracing::info!(id, count, skipped, "Loaded passengers");
                    }
                }
                Err(e) => {
                    if self.view.on_fetch_error(id, &e) {
                        tracing::warn!(id, error = %e, "Search failed");
                        self.show_error(search_failure_message(&e));
                    }
                }
            },
            FetchOutcome::Detail {
                passenger_id,
                result,
            } => self.apply_detail(passenger_id, result),
        }
    }

    fn apply_detail(&mut self, passenger_id: i64, result: Result<Passenger, FetchError>) {
        if self.modal.as_ref().and_then(Modal::passenger_id) != Some(passenger_id) {
            tracing::debug!(passenger_id, "Detail modal closed, dropping refresh");
            return;
        }

        let failure = match result {
            // Only the modal's copy changes; the table and chart keep showing
            // the last search result
            Ok(passenger) => {
                self.detail = Some(passenger);
                None
            }
            Err(e) => {
                tracing::warn!(passenger_id, error = %e, "Passenger refresh failed");
                self.show_error(format!("✗ Refresh failed: {}", e));
                Some(e.to_string())
            }
        };

        if let Some(Modal::Detail { loading, error, .. }) = self.modal.as_mut() {
            *loading = false;
            *error = failure;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Detail modal
    // ─────────────────────────────────────────────────────────────────────

    /// Open the selected table row in the detail modal and refresh it
    pub fn open_detail(&mut self) {
        let Some(passenger) = self
            .table
            .selected()
            .and_then(|idx| self.view.passengers().get(idx))
            .cloned()
        else {
            return;
        };

        let id = passenger.passenger_id;
        self.detail = Some(passenger);
        self.modal = Some(Modal::detail(id));
        self.spawn_detail(id);
    }

    pub fn refresh_detail(&mut self) {
        if let Some(Modal::Detail {
            passenger_id,
            loading,
            error,
        }) = self.modal.as_mut()
        {
            *loading = true;
            *error = None;
            let id = *passenger_id;
            self.spawn_detail(id);
        }
    }

    pub fn copy_detail(&mut self) {
        let Some(passenger) = self.detail.as_ref() else {
            return;
        };
        match clipboard::copy_passenger(passenger) {
            Ok(()) => self.show_toast("✓ Copied passenger JSON"),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard copy failed");
                self.show_error("✗ Failed to copy");
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.detail = None;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus and input
    // ─────────────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn is_focused(&self, target: Focus) -> bool {
        self.focused == target
    }

    /// Route a key to the focused component
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        let rows = self.view.passengers().len();
        match self.focused {
            Focus::Search => self.search_bar.handle_key(key, rows),
            Focus::Chart => self.chart.handle_key(key, rows),
            Focus::Table => self.table.handle_key(key, rows),
            Focus::Button => Handled::No,
        }
    }

    /// Key hints for the status bar
    pub fn focus_hint(&self) -> &'static str {
        match self.focused {
            Focus::Search => self.search_bar.focus_hint(),
            Focus::Button => "Enter/Space:search  Tab:next",
            Focus::Chart => self.chart.focus_hint(),
            Focus::Table => self.table.focus_hint(),
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.kind.next().theme();
        self.show_toast(format!("Theme: {}", self.theme.kind.name()));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::error(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn animation_frame(&self) -> usize {
        self.animation_frame
    }

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.theme, self.focused, self.animation_frame, &self.view)
    }

    pub fn spinner_char(&self) -> char {
        self.render_context().spinner_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::view::FetchStatus;
    use crossterm::event::KeyModifiers;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn app_for(base_url: String) -> (App, mpsc::Receiver<FetchOutcome>) {
        let client = PassengerClient::new(&ClientConfig {
            base_url,
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let (tx, rx) = mpsc::channel(8);
        (App::new(client, Theme::dark(), LogBuffer::new(), tx), rx)
    }

    fn passenger(id: i64, p_class: i64, sex: &str) -> Passenger {
        serde_json::from_value(json!({
            "passenger_id": id, "p_class": p_class, "name": format!("P{id}"), "sex": sex
        }))
        .unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Search;
        for expected in [Focus::Button, Focus::Chart, Focus::Table, Focus::Search] {
            focus = focus.next();
            assert_eq!(focus, expected);
        }
        assert_eq!(Focus::Search.prev(), Focus::Table);
    }

    #[test]
    fn test_search_failure_message() {
        let err = FetchError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert_eq!(search_failure_message(&err), "✗ API returned 502 Bad Gateway");

        let decode: FetchError = serde_json::from_str::<Vec<Passenger>>("{")
            .unwrap_err()
            .into();
        let message = search_failure_message(&decode);
        assert!(message.starts_with("✗ Search failed: malformed response body"));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_reported() {
        let (mut app, mut rx) = app_for("http://127.0.0.1:9".into());
        app.submit_search();
        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome);

        assert!(matches!(app.view.status(), FetchStatus::Failed { .. }));
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✗ Cannot reach the passenger API")
        );
    }

    #[tokio::test]
    async fn test_search_round_trip_updates_table_and_chart() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/passengers/")
                    .query_param("search_value", "Smith");
                then.status(200).json_body(json!([
                    {"passenger_id": 1, "p_class": 1, "name": "Smith, Mr. James", "sex": "male"},
                    {"passenger_id": 2, "p_class": 3, "name": "Smith, Miss. Marion", "sex": "female"}
                ]));
            })
            .await;

        let (mut app, mut rx) = app_for(server.base_url());
        type_text(&mut app, "Smith");
        app.submit_search();
        assert!(app.view.is_fetching());

        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome);

        mock.assert_async().await;
        assert_eq!(app.view.passengers().len(), 2);
        assert_eq!(app.view.search(), "Smith");
        assert_eq!(app.table.selected(), Some(0));
        let buckets = &app.view.breakdown().buckets;
        assert_eq!((buckets[0].male, buckets[0].female), (1, 0));
        assert_eq!((buckets[2].male, buckets[2].female), (0, 1));
    }

    #[test]
    fn test_failed_search_keeps_rows_and_shows_toast() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9".into());

        let first = app.view.on_search("");
        app.apply_outcome(FetchOutcome::Search {
            id: first.id,
            result: Ok(vec![passenger(1, 1, "male")]),
        });

        let second = app.view.on_search("Smith");
        app.apply_outcome(FetchOutcome::Search {
            id: second.id,
            result: Err(FetchError::NotFound(0)),
        });

        assert_eq!(app.view.passengers().len(), 1);
        assert!(matches!(app.view.status(), FetchStatus::Failed { .. }));
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_stale_search_outcome_is_ignored() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9".into());

        let slow = app.view.on_search("A");
        let fast = app.view.on_search("B");
        app.apply_outcome(FetchOutcome::Search {
            id: fast.id,
            result: Ok(vec![passenger(2, 2, "female")]),
        });
        app.apply_outcome(FetchOutcome::Search {
            id: slow.id,
            result: Ok(vec![passenger(1, 1, "male"), passenger(3, 3, "male")]),
        });

        assert_eq!(app.view.passengers().len(), 1);
        assert_eq!(app.view.passengers()[0].passenger_id, 2);
    }

    #[tokio::test]
    async fn test_initial_search_is_empty() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/passengers/")
                    .query_param("search_value", "");
                then.status(200).json_body(json!([]));
            })
            .await;

        let (mut app, mut rx) = app_for(server.base_url());
        app.submit_search();
        assert_eq!(
            app.view.status(),
            &FetchStatus::Fetching {
                search: String::new()
            }
        );

        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome);

        mock.assert_async().await;
        assert_eq!(app.view.status(), &FetchStatus::Loaded { count: 0 });
        assert!(app.view.passengers().is_empty());
        assert_eq!(app.table.selected(), None);
        let buckets = &app.view.breakdown().buckets;
        assert_eq!(
            buckets.map(|b| (b.p_class, b.male, b.female)),
            [(1, 0, 0), (2, 0, 0), (3, 0, 0)]
        );
    }

    #[tokio::test]
    async fn test_detail_refresh_leaves_table_and_chart_alone() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/passengers/1");
                then.status(200).json_body(json!({
                    "passenger_id": 1, "p_class": 2, "name": "Updated", "sex": "female"
                }));
            })
            .await;

        let (mut app, mut rx) = app_for(server.base_url());
        let request = app.view.on_search("");
        app.apply_outcome(FetchOutcome::Search {
            id: request.id,
            result: Ok(vec![passenger(1, 1, "male")]),
        });
        let rows_before = app.view.passengers().to_vec();
        let chart_before = app.view.breakdown().clone();

        app.open_detail();
        assert_eq!(app.modal, Some(Modal::detail(1)));

        let outcome = rx.recv().await.unwrap();
        app.apply_outcome(outcome);

        assert_eq!(
            app.modal,
            Some(Modal::Detail {
                passenger_id: 1,
                loading: false,
                error: None
            })
        );
        assert_eq!(app.detail.as_ref().map(|p| p.name.as_str()), Some("Updated"));
        assert_eq!(app.view.passengers(), rows_before.as_slice());
        assert_eq!(app.view.breakdown(), &chart_before);
    }

    #[test]
    fn test_detail_outcome_after_close_is_dropped() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9".into());
        app.apply_outcome(FetchOutcome::Detail {
            passenger_id: 4,
            result: Err(FetchError::NotFound(4)),
        });
        assert!(app.modal.is_none());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_open_detail_without_rows_is_noop() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9".into());
        app.open_detail();
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_toggle_theme() {
        let (mut app, _rx) = app_for("http://127.0.0.1:9".into());
        app.toggle_theme();
        assert_eq!(app.theme.kind, ThemeKind::Light);
        assert_eq!(app.toast.as_ref().map(|t| t.message.as_str()), Some("Theme: light"));
    }
}

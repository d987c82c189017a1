//! End-to-end session lifecycle: upload, analysis, render, reset.

use bivista::config::Config;
use bivista::data::{AnalysisResults, Chart, ChartBuilder, DashboardResults, DataProcessor, Table};
use bivista::page::{self, Page, PageConfig};
use bivista::state::{MessageKind, ProcessingStatus, SessionStore};
use bivista::theme::Theme;
use bivista::upload::UploadPolicy;
use bivista::widgets;

/// Minimal in-process data processor standing in for the real collaborator.
#[derive(Default)]
struct StubProcessor {
    data: Option<Table>,
}

impl DataProcessor for StubProcessor {
    fn load_dataframe(&mut self, data: Table, _label: &str) -> bool {
        if data.columns.is_empty() {
            return false;
        }
        self.data = Some(data);
        true
    }

    fn data(&self) -> Option<&Table> {
        self.data.as_ref()
    }
}

struct StubVisualizer;

impl ChartBuilder for StubVisualizer {
    fn build_chart(&self, _data: &Table, column: &str, title: &str) -> Chart {
        Chart {
            title: title.to_string(),
            chart_type: "bar".to_string(),
            columns_used: vec![column.to_string()],
        }
    }
}

fn sample_table() -> Table {
    Table::new(
        vec!["region".into(), "revenue".into()],
        vec![
            vec!["north".into(), "1200".into()],
            vec!["south".into(), "800".into()],
            vec!["east".into(), "950".into()],
        ],
    )
}

// Walks a session through the full happy path the page re-runs on every
// interaction: initialize, load data, run analysis, render, clear.
#[test]
fn full_session_lifecycle() {
    let mut sessions = SessionStore::new();
    let session_id = "lifecycle";
    sessions.initialize(session_id);

    // Upload passes policy and loads through the processor seam.
    let policy = UploadPolicy::default();
    let kind = policy.validate("sales.csv", 4096).expect("admissible upload");
    assert_eq!(format!("{kind:?}"), "Csv");

    let mut processor = StubProcessor::default();
    assert!(processor.load_dataframe(sample_table(), "sales"));

    let state = sessions.get_mut(session_id).expect("initialized");
    state.current_data = processor.data().cloned();
    state.original_data = processor.data().cloned();
    state.data_loaded = true;
    state.uploaded_filename = Some("sales.csv".to_string());
    state.add_message("Data loaded successfully", MessageKind::Success);

    // Analysis run.
    state.set_processing_status(ProcessingStatus::Running);
    let chart = StubVisualizer.build_chart(
        state.current_data.as_ref().expect("data"),
        "revenue",
        "Revenue by region",
    );
    state.dashboard_results = Some(DashboardResults {
        charts: vec![chart],
        data_shape: (3, 2),
    });
    state.analysis_results = Some(AnalysisResults {
        quality_score: 92.0,
        missing_data_percentage: 0.0,
        duplicate_percentage: 0.0,
        recommendations: vec!["consider a date column for trend charts".into()],
    });
    state.set_processing_status(ProcessingStatus::Done);
    state.analysis_history.push("sales".to_string());

    // Render the page exactly as the server handler composes it.
    let mut body = Page::new();
    body.push(page::header_section(state));
    body.push(widgets::status_messages(state));
    body.push(page::overview_section(state));
    body.push(page::analysis_section(state));
    body.push(page::dashboard_section(state));
    let html = body.render(&PageConfig::default(), state.selected_theme);

    assert!(html.contains("Data loaded successfully"));
    assert!(html.contains("Total Rows"));
    assert!(html.contains("Excellent"));
    assert!(html.contains("Revenue by region"));
    assert!(html.contains("chart-container"));

    // Reload: initialize again must not disturb anything.
    sessions.initialize(session_id);
    let state = sessions.get(session_id).expect("still present");
    assert!(state.data_loaded);
    assert_eq!(state.processing_status, ProcessingStatus::Done);
    assert_eq!(state.analysis_history, vec!["sales".to_string()]);

    // Clearing analysis keeps the loaded data but drops computed results.
    let state = sessions.get_mut(session_id).expect("present");
    state.clear_analysis_state();
    assert!(state.analysis_results.is_none());
    assert!(state.dashboard_results.is_none());
    assert_eq!(state.processing_status, ProcessingStatus::Idle);
    assert!(state.error_messages.is_empty());
    assert!(state.data_loaded);
    assert!(state.current_data.is_some());
}

// Rejected uploads follow the message-queue convention: the error becomes a
// banner string, never a panic or structured failure.
#[test]
fn rejected_upload_becomes_error_banner() {
    let mut sessions = SessionStore::new();
    let state = sessions.initialize("rejects");

    let policy = UploadPolicy { max_file_size_mb: 1 };
    let err = policy
        .validate("huge.csv", 10 * 1024 * 1024)
        .expect_err("over the ceiling");
    state.add_message(err.to_string(), MessageKind::Error);

    let html = widgets::status_messages(state);
    assert!(html.contains("error-message"));
    assert!(html.contains("exceeding the 1 MB limit"));
}

// Config-driven session defaults: an unknown configured theme degrades to
// business on first render.
#[test]
fn configured_theme_falls_back_on_miss() {
    let mut config = Config::default();
    config.display.theme = "midnight".to_string();

    let mut sessions = SessionStore::new();
    let state = sessions.initialize("fallback");
    state.selected_theme = Theme::from_name(&config.display.theme);
    assert_eq!(state.selected_theme, Theme::Business);
}

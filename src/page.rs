//! Page configuration and document assembly.
//!
//! The page builder plays the role of the host framework's render surface:
//! sections push markup fragments, and `render` wraps them in a complete
//! themed document.

use crate::state::SessionState;
use crate::theme::{self, Theme};
use crate::widgets::{self, BoxKind, Feature};
use std::fmt::Write as _;

/// Fixed page-level settings applied on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub icon: String,
    /// Wide layout stretches the content column to the viewport.
    pub wide_layout: bool,
    pub sidebar_expanded: bool,
}

impl Default for PageConfig {
    fn default() -> PageConfig {
        PageConfig {
            title: "BI Assistant - Smart Data Analysis".to_string(),
            icon: "📊".to_string(),
            wide_layout: true,
            sidebar_expanded: true,
        }
    }
}

/// Column layout constants used when sections arrange content.
pub mod layout {
    pub const SINGLE_COLUMN_WIDTH: u32 = 800;
    pub const SIDEBAR_WIDTH: u32 = 300;
    pub const TWO_COLUMN_RATIO: [u32; 2] = [1, 1];
    pub const THREE_COLUMN_RATIO: [u32; 3] = [1, 1, 1];
}

/// Accumulates body fragments for one page render.
#[derive(Debug, Clone, Default)]
pub struct Page {
    fragments: Vec<String>,
}

impl Page {
    pub fn new() -> Page {
        Page::default()
    }

    /// Append a pre-rendered markup fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Wrap the accumulated fragments into a full themed HTML document.
    pub fn render(&self, config: &PageConfig, theme: Theme) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{}\n</head>\n",
            widgets::escape_html(&config.title),
            theme::stylesheet(theme),
        );
        let body_class = if config.wide_layout { "wide" } else { "narrow" };
        let _ = write!(html, "<body class=\"{body_class}\">\n");
        for fragment in &self.fragments {
            html.push_str(fragment);
            html.push('\n');
        }
        html.push_str("</body>\n</html>\n");
        html
    }
}

/// Top-of-page header plus the AI availability banner.
pub fn header_section(state: &SessionState) -> String {
    let mut html = String::from(
        "<h1 class=\"main-header\">BI Assistant</h1>\
         <p class=\"tagline\">Smart Business Intelligence with AI-Powered Insights</p>",
    );
    if state.ai_enabled {
        html.push_str(&widgets::info_box(
            "AI Features Enabled - Full analytics available",
            BoxKind::Success,
            None,
        ));
    } else {
        html.push_str(&widgets::info_box(
            "Basic Mode - Configure an API key to unlock AI features",
            BoxKind::Info,
            None,
        ));
    }
    html
}

/// Welcome screen shown before any data is loaded.
pub fn welcome_section(state: &SessionState) -> String {
    let mut features = vec![
        Feature::new(
            "Data Analysis",
            "Automatic cleaning, statistical summaries, and quality assessment",
        ),
        Feature::new(
            "Smart Visualizations",
            "Interactive dashboards with business chart templates",
        ),
    ];
    if state.ai_enabled {
        features.push(Feature::new(
            "AI Insights (Enabled)",
            "Natural language explanations and business recommendations",
        ));
    } else {
        features.push(Feature::new(
            "AI Insights (Disabled)",
            "Add an API key to unlock natural language insights",
        ));
    }
    features.push(Feature::new(
        "Industry Focus",
        "Sales, financial, operational, and marketing analysis",
    ));

    format!(
        "<h2 class=\"sub-header\">Welcome to BI Assistant</h2>\
         <p>Upload a CSV or Excel file from the sidebar to get started.</p>{}",
        widgets::feature_grid(&features, 2)
    )
}

/// Data overview metrics and preview for a loaded session.
pub fn overview_section(state: &SessionState) -> String {
    let Some(data) = &state.current_data else {
        return widgets::info_box("No data loaded", BoxKind::Info, None);
    };

    let mut html = String::from("<h2 class=\"sub-header\">Data Overview</h2>");
    html.push_str(&widgets::metric_card(
        "Total Rows",
        &format_count(data.row_count()),
        None,
        None,
    ));
    html.push_str(&widgets::metric_card(
        "Columns",
        &data.column_count().to_string(),
        None,
        None,
    ));
    html.push_str(&widgets::metric_card(
        "Missing Data",
        &format!("{:.1}%", data.missing_percentage()),
        None,
        None,
    ));
    if let Some(filename) = &state.uploaded_filename {
        html.push_str(&widgets::metric_card("Source File", filename, None, None));
    }

    html.push_str(&widgets::expandable_section(
        "Data Preview",
        &preview_table(data, state.data_preview_rows),
        true,
    ));
    html
}

/// Quality summary for completed analysis, if present.
pub fn analysis_section(state: &SessionState) -> String {
    let Some(results) = &state.analysis_results else {
        return widgets::info_box("Run analysis to see detailed insights", BoxKind::Info, None);
    };

    let mut html = String::from("<h2 class=\"sub-header\">Analysis Results</h2>");
    html.push_str(&widgets::quality_badge(results.quality_score));
    html.push_str(&widgets::metric_card(
        "Missing Data %",
        &format!("{:.1}%", results.missing_data_percentage),
        None,
        None,
    ));
    html.push_str(&widgets::metric_card(
        "Duplicate Rows %",
        &format!("{:.1}%", results.duplicate_percentage),
        None,
        None,
    ));
    if !results.recommendations.is_empty() {
        html.push_str("<div class=\"insight-box\"><h4>Recommendations</h4><ul>");
        for rec in &results.recommendations {
            let _ = write!(html, "<li>{}</li>", widgets::escape_html(rec));
        }
        html.push_str("</ul></div>");
    }
    html
}

/// Generated-charts summary for a completed dashboard run, if present.
///
/// Chart construction belongs to the visualizer collaborator; this section
/// renders titles and metadata only, arranged by the session's layout.
pub fn dashboard_section(state: &SessionState) -> String {
    let Some(dashboard) = &state.dashboard_results else {
        return widgets::info_box(
            "Generate visualizations to see the dashboard",
            BoxKind::Info,
            None,
        );
    };

    let (rows, columns) = dashboard.data_shape;
    let mut html = String::from("<h2 class=\"sub-header\">Interactive Dashboard</h2>");
    let _ = write!(
        html,
        "<p class=\"chart-meta\"><em>Generated {} charts for {} records across {} columns</em></p>",
        dashboard.total_charts(),
        format_count(rows),
        columns,
    );
    for row in dashboard.charts.chunks(state.dashboard_layout.columns()) {
        html.push_str("<div class=\"chart-row\">");
        for chart in row {
            let _ = write!(
                html,
                "<div class=\"chart-container\"><h4>{}</h4><p class=\"chart-meta\">Type: {} | Columns: {}</p></div>",
                widgets::escape_html(&chart.title),
                widgets::escape_html(&chart.chart_type),
                widgets::escape_html(&chart.columns_used.join(", ")),
            );
        }
        html.push_str("</div>");
    }
    html
}

fn preview_table(data: &crate::data::Table, limit: usize) -> String {
    let mut html = String::from("<table class=\"dataframe\"><thead><tr>");
    for column in &data.columns {
        let _ = write!(html, "<th>{}</th>", widgets::escape_html(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in data.preview(limit) {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", widgets::escape_html(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn format_count(count: usize) -> String {
    // Thousands separators for row counts, matching the metric formatting
    // used across the page.
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

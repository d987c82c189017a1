//! HTML fragment helpers for dashboard components.
//!
//! Every helper is a pure formatting function: it reads session state or
//! direct arguments and returns a markup fragment. No helper holds state of
//! its own.

use crate::state::SessionState;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use std::fmt::Write as _;

/// Styled box flavors matching the stylesheet's `*-message` classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Success,
    Warning,
    Error,
    Info,
}

impl BoxKind {
    fn css_class(self) -> &'static str {
        match self {
            BoxKind::Success => "success-message",
            BoxKind::Warning => "warning-message",
            BoxKind::Error => "error-message",
            BoxKind::Info => "info-message",
        }
    }
}

/// Quality tiers reported by [`quality_badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityTier {
    Excellent,
    Good,
    NeedsAttention,
}

impl QualityTier {
    /// Tier for a 0..=100 quality score. Boundaries are inclusive on the
    /// upper tier: 80 is excellent, 60 is good.
    pub fn for_score(score: f64) -> QualityTier {
        if score >= 80.0 {
            QualityTier::Excellent
        } else if score >= 60.0 {
            QualityTier::Good
        } else {
            QualityTier::NeedsAttention
        }
    }

    fn label(self) -> &'static str {
        match self {
            QualityTier::Excellent => "Excellent",
            QualityTier::Good => "Good",
            QualityTier::NeedsAttention => "Needs Attention",
        }
    }

    fn box_kind(self) -> BoxKind {
        match self {
            QualityTier::Excellent => BoxKind::Success,
            QualityTier::Good => BoxKind::Warning,
            QualityTier::NeedsAttention => BoxKind::Error,
        }
    }
}

/// One card in a feature grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Feature {
        Feature {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Escape user-supplied text for safe interpolation into markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the session's queued messages as banners, errors first.
pub fn status_messages(state: &SessionState) -> String {
    let mut html = String::new();
    for error in &state.error_messages {
        html.push_str(&info_box(error, BoxKind::Error, None));
    }
    for success in &state.success_messages {
        html.push_str(&info_box(success, BoxKind::Success, None));
    }
    html
}

/// A labeled metric with optional delta and hover help.
pub fn metric_card(
    title: &str,
    value: &str,
    delta: Option<&str>,
    help_text: Option<&str>,
) -> String {
    let mut html = String::new();
    let title_attr = help_text
        .map(|help| format!(" title=\"{}\"", escape_html(help)))
        .unwrap_or_default();
    let _ = write!(
        html,
        "<div class=\"metric-card\"{title_attr}><div class=\"metric-label\">{}</div><div class=\"metric-value\">{}</div>",
        escape_html(title),
        escape_html(value),
    );
    if let Some(delta) = delta {
        let _ = write!(
            html,
            "<div class=\"metric-delta\">{}</div>",
            escape_html(delta)
        );
    }
    html.push_str("</div>");
    html
}

/// A styled information box with an optional bold title line.
pub fn info_box(content: &str, kind: BoxKind, title: Option<&str>) -> String {
    let body = match title {
        Some(title) => format!(
            "<strong>{}</strong><p>{}</p>",
            escape_html(title),
            escape_html(content)
        ),
        None => escape_html(content),
    };
    format!("<div class=\"{}\">{body}</div>", kind.css_class())
}

/// A horizontal progress bar with an optional caption.
///
/// `fraction` is clamped to `0.0..=1.0`.
pub fn progress_indicator(fraction: f64, text: &str) -> String {
    let pct = (fraction.clamp(0.0, 1.0) * 100.0).round() as u32;
    let mut html = format!(
        "<div class=\"progress-track\"><div class=\"progress-fill\" style=\"width: {pct}%\"></div></div>"
    );
    if !text.is_empty() {
        let _ = write!(
            html,
            "<p class=\"progress-text\">{}</p>",
            escape_html(text)
        );
    }
    html
}

/// A grid of feature cards, `columns` cards per row.
pub fn feature_grid(features: &[Feature], columns: usize) -> String {
    let columns = columns.max(1);
    let mut html = String::new();
    for row in features.chunks(columns) {
        html.push_str("<div class=\"feature-row\">");
        for feature in row {
            let _ = write!(
                html,
                "<div class=\"feature-card\"><h4>{}</h4><p>{}</p></div>",
                escape_html(&feature.title),
                escape_html(&feature.description),
            );
        }
        html.push_str("</div>");
    }
    html
}

/// A download link carrying its payload inline as a base64 data URI.
pub fn download_button(data: &[u8], filename: &str, mime_type: &str, label: &str) -> String {
    let payload = B64.encode(data);
    format!(
        "<a class=\"download-button\" download=\"{name}\" href=\"data:{mime};base64,{payload}\" title=\"Download {name}\">{label}</a>",
        name = escape_html(filename),
        mime = escape_html(mime_type),
        label = escape_html(label),
    )
}

/// A data-quality banner colored by score tier.
pub fn quality_badge(score: f64) -> String {
    let tier = QualityTier::for_score(score);
    info_box(
        &format!("Data Quality: {score:.0}/100 - {}", tier.label()),
        tier.box_kind(),
        None,
    )
}

/// A collapsible section rendered as a `<details>` block.
pub fn expandable_section(title: &str, body: &str, expanded: bool) -> String {
    let open = if expanded { " open" } else { "" };
    format!(
        "<details{open}><summary>{}</summary>{body}</details>",
        escape_html(title),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MessageKind;

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<b>\"x\" & 'y'</b>"),
            "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;"
        );
    }

    // Ensures queued errors render before successes, in insertion order.
    #[test]
    fn status_messages_render_errors_then_successes() {
        let mut state = SessionState::default();
        state.add_message("failed to parse row 7", MessageKind::Error);
        state.add_message("loaded sales.csv", MessageKind::Success);

        let html = status_messages(&state);
        let error_at = html.find("failed to parse row 7").expect("error shown");
        let success_at = html.find("loaded sales.csv").expect("success shown");
        assert!(error_at < success_at);
        assert!(html.contains("error-message"));
        assert!(html.contains("success-message"));
    }

    #[test]
    fn metric_card_includes_delta_and_help_when_given() {
        let html = metric_card("Total Rows", "1,204", Some("+56"), Some("rows after cleaning"));
        assert!(html.contains("Total Rows"));
        assert!(html.contains("1,204"));
        assert!(html.contains("+56"));
        assert!(html.contains("title=\"rows after cleaning\""));

        let plain = metric_card("Columns", "8", None, None);
        assert!(!plain.contains("metric-delta"));
        assert!(!plain.contains("title="));
    }

    #[test]
    fn info_box_class_follows_kind() {
        assert!(info_box("ok", BoxKind::Success, None).contains("success-message"));
        assert!(info_box("careful", BoxKind::Warning, None).contains("warning-message"));
        let titled = info_box("body", BoxKind::Info, Some("Heads up"));
        assert!(titled.contains("<strong>Heads up</strong>"));
    }

    // Ensures the bar width is clamped into the displayable range.
    #[test]
    fn progress_indicator_clamps_fraction() {
        assert!(progress_indicator(0.42, "").contains("width: 42%"));
        assert!(progress_indicator(1.7, "").contains("width: 100%"));
        assert!(progress_indicator(-0.3, "").contains("width: 0%"));
        assert!(progress_indicator(0.5, "halfway").contains("halfway"));
    }

    #[test]
    fn feature_grid_chunks_by_columns() {
        let features = vec![
            Feature::new("Analysis", "automatic data cleaning"),
            Feature::new("Charts", "interactive dashboards"),
            Feature::new("Export", "JSON and CSV reports"),
        ];
        let html = feature_grid(&features, 2);
        assert_eq!(html.matches("feature-row").count(), 2);
        assert_eq!(html.matches("feature-card").count(), 3);
    }

    #[test]
    fn download_button_embeds_base64_payload() {
        let html = download_button(b"a,b\n1,2\n", "export.csv", "text/csv", "Download CSV");
        assert!(html.contains("download=\"export.csv\""));
        assert!(html.contains("data:text/csv;base64,"));
        assert!(html.contains(&B64.encode(b"a,b\n1,2\n")));
    }

    // Ensures tier thresholds are inclusive on the upper tier: 85 and 80 are
    // excellent, 65 and 60 are good, anything below is needs-attention.
    #[test]
    fn quality_badge_thresholds() {
        assert_eq!(QualityTier::for_score(85.0), QualityTier::Excellent);
        assert_eq!(QualityTier::for_score(80.0), QualityTier::Excellent);
        assert_eq!(QualityTier::for_score(65.0), QualityTier::Good);
        assert_eq!(QualityTier::for_score(60.0), QualityTier::Good);
        assert_eq!(QualityTier::for_score(40.0), QualityTier::NeedsAttention);

        assert!(quality_badge(85.0).contains("Excellent"));
        assert!(quality_badge(65.0).contains("Good"));
        assert!(quality_badge(40.0).contains("Needs Attention"));
    }

    #[test]
    fn expandable_section_honors_expanded_flag() {
        assert!(expandable_section("Preview", "<p>rows</p>", true).starts_with("<details open>"));
        assert!(expandable_section("Preview", "<p>rows</p>", false).starts_with("<details>"));
    }
}

//! Dashboard theme system.
//!
//! All page styling resolves through this module so a single theme selection
//! drives the stylesheet, the chart option set, and the plotting-library
//! style name consistently.

use serde::Serialize;

/// Closed set of dashboard themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Business,
    Executive,
    Presentation,
}

impl Theme {
    /// Stable theme names in selector order.
    pub const ALL: [Theme; 3] = [Theme::Business, Theme::Executive, Theme::Presentation];

    /// Resolve a theme by name.
    ///
    /// Unknown names fall back to `Business`. This is the intended
    /// default-on-miss policy: theme selection must never fail a render.
    pub fn from_name(name: &str) -> Theme {
        match name.trim().to_ascii_lowercase().as_str() {
            "executive" => Theme::Executive,
            "presentation" => Theme::Presentation,
            _ => Theme::Business,
        }
    }

    /// User-facing theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Business => "business",
            Theme::Executive => "executive",
            Theme::Presentation => "presentation",
        }
    }

    /// Four-token color palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Business => Palette {
                primary: "#1f77b4",
                secondary: "#ff7f0e",
                background: "#ffffff",
                text: "#262730",
            },
            Theme::Executive => Palette {
                primary: "#2e4057",
                secondary: "#048a81",
                background: "#f8f9fa",
                text: "#212529",
            },
            Theme::Presentation => Palette {
                primary: "#6c5ce7",
                secondary: "#fd79a8",
                background: "#dfe6e9",
                text: "#2d3436",
            },
        }
    }

    /// Plotting-library style name mapped from this theme.
    pub fn plotly_theme(self) -> &'static str {
        match self {
            Theme::Business => "plotly",
            Theme::Executive => "plotly_white",
            Theme::Presentation => "presentation",
        }
    }
}

/// Color tokens substituted into the page stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

/// Chart renderer options serialized into the page for the plotting library.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartConfig {
    pub responsive: bool,
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    pub displaylogo: bool,
    #[serde(rename = "modeBarButtonsToRemove")]
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    #[serde(rename = "toImageButtonOptions")]
    pub to_image_button_options: ImageExportOptions,
}

/// PNG export options attached to the chart mode bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageExportOptions {
    pub format: &'static str,
    pub filename: &'static str,
    pub height: u32,
    pub width: u32,
    pub scale: u32,
}

/// Chart option set for a theme.
///
/// The options are currently theme-independent, but the lookup goes through
/// the theme so per-theme overrides stay a local change.
pub fn chart_config(_theme: Theme) -> ChartConfig {
    ChartConfig {
        responsive: true,
        display_mode_bar: true,
        displaylogo: false,
        mode_bar_buttons_to_remove: vec![
            "pan2d",
            "lasso2d",
            "select2d",
            "autoScale2d",
            "hoverClosestCartesian",
            "hoverCompareCartesian",
            "toggleSpikelines",
        ],
        to_image_button_options: ImageExportOptions {
            format: "png",
            filename: "bi_assistant_chart",
            height: 600,
            width: 800,
            scale: 2,
        },
    }
}

/// Full `<style>` block for a theme with the four color tokens substituted.
pub fn stylesheet(theme: Theme) -> String {
    let palette = theme.palette();
    format!(
        r#"<style>
    :root {{
        --primary-color: {primary};
        --secondary-color: {secondary};
        --background-color: {background};
        --text-color: {text};
    }}

    body {{
        background: var(--background-color);
        color: var(--text-color);
        font-family: "Source Sans Pro", sans-serif;
        margin: 0;
    }}

    .main-header {{
        font-size: 3rem;
        font-weight: bold;
        color: var(--primary-color);
        text-align: center;
        margin-bottom: 2rem;
        text-shadow: 2px 2px 4px rgba(0,0,0,0.1);
    }}

    .sub-header {{
        font-size: 1.8rem;
        color: var(--text-color);
        margin: 1.5rem 0;
        border-bottom: 2px solid var(--primary-color);
        padding-bottom: 0.5rem;
    }}

    .metric-card {{
        background: linear-gradient(135deg, #ffffff 0%, #f8f9fa 100%);
        padding: 1.5rem;
        border-radius: 10px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        border-left: 4px solid var(--primary-color);
        margin: 1rem 0;
        transition: transform 0.2s ease-in-out;
    }}

    .metric-card:hover {{
        transform: translateY(-2px);
        box-shadow: 0 6px 12px rgba(0, 0, 0, 0.15);
    }}

    .insight-box {{
        background: linear-gradient(135deg, #f0f2f6 0%, #e3e8f0 100%);
        padding: 1.5rem;
        border-radius: 10px;
        border-left: 4px solid var(--primary-color);
        margin: 1rem 0;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}

    .insight-box h4 {{
        color: var(--primary-color);
        margin-top: 0;
    }}

    .success-message {{
        background: linear-gradient(135deg, #d4edda 0%, #c3e6cb 100%);
        color: #155724;
        padding: 1rem;
        border-radius: 8px;
        border: 1px solid #c3e6cb;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}

    .warning-message {{
        background: linear-gradient(135deg, #fff3cd 0%, #ffeaa7 100%);
        color: #856404;
        padding: 1rem;
        border-radius: 8px;
        border: 1px solid #ffeaa7;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}

    .error-message {{
        background: linear-gradient(135deg, #f8d7da 0%, #f5c6cb 100%);
        color: #721c24;
        padding: 1rem;
        border-radius: 8px;
        border: 1px solid #f5c6cb;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}

    .info-message {{
        background: linear-gradient(135deg, #d1ecf1 0%, #bee5eb 100%);
        color: #0c5460;
        padding: 1rem;
        border-radius: 8px;
        border: 1px solid #bee5eb;
        box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}

    .sidebar-header {{
        background: var(--primary-color);
        color: white;
        padding: 1rem;
        border-radius: 8px;
        margin-bottom: 1rem;
        text-align: center;
        font-weight: bold;
    }}

    button, .download-button {{
        background: linear-gradient(135deg, var(--primary-color) 0%, var(--secondary-color) 100%);
        color: white;
        border: none;
        border-radius: 8px;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        transition: all 0.3s ease;
        box-shadow: 0 2px 4px rgba(0,0,0,0.2);
        text-decoration: none;
        display: inline-block;
    }}

    button:hover, .download-button:hover {{
        transform: translateY(-1px);
        box-shadow: 0 4px 8px rgba(0,0,0,0.3);
    }}

    .chart-container {{
        background: white;
        padding: 1rem;
        border-radius: 10px;
        box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        margin: 1rem 0;
    }}

    .chart-row {{
        display: flex;
        gap: 1rem;
    }}

    .chart-row > .chart-container {{
        flex: 1;
    }}

    .chart-meta {{
        color: #666;
    }}

    .dataframe {{
        border: 1px solid #e0e0e0;
        border-radius: 8px;
        overflow: hidden;
    }}

    .progress-track {{
        background: #e9ecef;
        border-radius: 8px;
        height: 0.75rem;
        overflow: hidden;
    }}

    .progress-fill {{
        background: var(--primary-color);
        height: 100%;
    }}

    .progress-text {{
        font-weight: 600;
        color: var(--primary-color);
        margin: 0.5rem 0;
    }}

    .feature-card {{
        background: white;
        padding: 1.5rem;
        border-radius: 10px;
        box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        margin: 1rem 0;
        border-top: 3px solid var(--primary-color);
    }}

    .feature-card h4 {{
        color: var(--primary-color);
        margin-top: 0;
    }}

    .feature-row {{
        display: flex;
        gap: 1rem;
    }}

    .feature-row > .feature-card {{
        flex: 1;
    }}

    .footer {{
        text-align: center;
        padding: 2rem 0;
        color: #666;
        border-top: 1px solid #e0e0e0;
        margin-top: 3rem;
    }}
</style>"#,
        primary = palette.primary,
        secondary = palette.secondary,
        background = palette.background,
        text = palette.text,
    )
}

//! Collaborator seams for the data and visualization engines.
//!
//! The presentation layer never implements analysis or charting itself: it
//! talks to a data processor and a chart builder through the narrow traits
//! below and stores their opaque results in session state.

use serde::{Deserialize, Serialize};

/// Flat tabular data handle exchanged with the collaborators.
///
/// Cells are kept as strings: the presentation layer only counts, previews,
/// and formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column names in display order.
    pub columns: Vec<String>,
    /// Row-major cell values; empty string marks a missing cell.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Table {
        Table { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// First `limit` rows, for the data-preview expander.
    pub fn preview(&self, limit: usize) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(limit)]
    }

    /// Percentage of empty cells across the whole table.
    pub fn missing_percentage(&self) -> f64 {
        let total = self.row_count() * self.column_count();
        if total == 0 {
            return 0.0;
        }
        let missing = self
            .rows
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count();
        missing as f64 / total as f64 * 100.0
    }
}

/// Opaque chart handle returned by the visualizer collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart title shown above the rendered figure.
    pub title: String,
    /// Collaborator-defined chart kind (`bar`, `line`, ...).
    pub chart_type: String,
    /// Columns the chart was built from.
    pub columns_used: Vec<String>,
}

/// Analysis output stored under the `analysis_results` state field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResults {
    /// Overall data-quality score on a 0..=100 scale.
    pub quality_score: f64,
    pub missing_data_percentage: f64,
    pub duplicate_percentage: f64,
    /// Human-readable follow-up suggestions from the analyzer.
    pub recommendations: Vec<String>,
}

/// Dashboard output stored under the `dashboard_results` state field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardResults {
    pub charts: Vec<Chart>,
    /// Row/column shape of the data the dashboard was built from.
    pub data_shape: (usize, usize),
}

impl DashboardResults {
    pub fn total_charts(&self) -> usize {
        self.charts.len()
    }
}

/// Data processor collaborator: loads tabular data and owns the live copy.
pub trait DataProcessor {
    /// Load a table under a label; returns false when the processor rejects it.
    fn load_dataframe(&mut self, data: Table, label: &str) -> bool;

    /// Currently loaded data, if any.
    fn data(&self) -> Option<&Table>;
}

/// Visualizer collaborator: builds one chart handle per request.
pub trait ChartBuilder {
    fn build_chart(&self, data: &Table, column: &str, title: &str) -> Chart;
}

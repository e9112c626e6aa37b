use thiserror::Error;

/// Failures the chart page can run into.
///
/// Only [`ChartError::Parse`] and [`ChartError::Render`] reach the user, as
/// the inline error message in the chart container. The rest are logged.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The data island does not hold a valid chart payload
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// `Plotly.newPlot` threw, or its arguments could not be converted
    #[error("{0}")]
    Render(String),

    /// `Plotly.relayout` threw while updating shapes or size
    #[error("Relayout error: {0}")]
    Relayout(String),
}

//! Export services: chart images, the JSON results document and the PDF
//! report, plus platform delivery (download / save / clipboard).

mod delivery;
pub mod json;
pub mod pdf;
pub mod raster;

pub use delivery::{copy_to_clipboard, download_bytes};

use thiserror::Error;
use tracing::{info, warn};

use crate::charts::{self, ChartKind};
use crate::core::dataset::Dataset;
use crate::core::error::DashboardError;
use crate::core::platform;
use crate::view::DashboardView;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Chart not available for export")]
    ChartUnavailable,

    #[error("Failed to serialise results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("Unable to render chart: {0}")]
    Render(String),

    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Download failed: {0}")]
    Delivery(String),

    #[error("Export I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

/// Chart markup for `kind` in the view's theme, or `None` before an analysis.
pub fn chart_svg(kind: ChartKind, view: &DashboardView) -> Option<String> {
    let palette = view.theme.chart_palette();
    match kind {
        ChartKind::Traffic => view
            .traffic
            .map(|split| charts::traffic_donut_svg(split, palette)),
        ChartKind::Models if view.models.is_empty() => None,
        ChartKind::Models => Some(charts::model_bars_svg(&view.models, palette)),
    }
}

/// Render one chart to PNG and hand it to the platform.
pub async fn export_chart(kind: ChartKind, view: DashboardView) -> Result<String, ExportError> {
    let svg = chart_svg(kind, &view).ok_or(ExportError::ChartUnavailable)?;
    let (width, height) = kind.size();
    // 2x for a crisp image
    let image = raster::rasterize_svg(&svg, width * 2, height * 2).await?;
    let png = image.to_png()?;
    let filename = kind.export_filename();
    let delivery = download_bytes(filename, "image/png", png).await?;
    info!(filename, "chart exported");
    Ok(match delivery {
        Some(path) => format!("Chart saved to {path}"),
        None => format!("Chart exported as {filename}"),
    })
}

/// Serialise the rendered results and deliver them as a JSON file.
pub async fn export_results(dataset: Dataset, view: DashboardView) -> Result<String, ExportError> {
    let document = json::ExportDocument::new(&dataset.name, &view, platform::now())?;
    let payload = document.to_json_pretty()?;
    if let Err(err) = copy_to_clipboard(payload.clone()).await {
        warn!(%err, "results not copied to clipboard");
    }
    let filename = json::results_filename(platform::unix_millis());
    let delivery = download_bytes(&filename, "application/json", payload.into_bytes()).await?;
    info!(%filename, "results exported");
    Ok(match delivery {
        Some(path) => format!("Results saved to {path}"),
        None => "Results exported as JSON".to_string(),
    })
}

/// Build the PDF report, rasterising both charts first. A chart that fails
/// to render becomes a placeholder inside the report.
pub async fn export_report(dataset: Dataset, view: DashboardView) -> Result<String, ExportError> {
    let (traffic, models) = futures::future::join(
        render_for_report(ChartKind::Traffic, &view),
        render_for_report(ChartKind::Models, &view),
    )
    .await;

    let millis = platform::unix_millis();
    let input = pdf::ReportInput {
        view: &view,
        dataset: &dataset,
        generated_at: platform::now(),
        report_millis: millis,
        traffic_chart: traffic,
        model_chart: models,
    };
    let bytes = pdf::build_report(&input);
    let filename = pdf::report_filename(millis);
    let delivery = download_bytes(&filename, "application/pdf", bytes).await?;
    info!(%filename, "report generated");
    Ok(match delivery {
        Some(path) => format!("Report saved to {path}"),
        None => format!("Report \"{filename}\" generated successfully"),
    })
}

async fn render_for_report(
    kind: ChartKind,
    view: &DashboardView,
) -> Result<raster::RasterImage, ExportError> {
    let svg = chart_svg(kind, view).ok_or(ExportError::ChartUnavailable)?;
    let (width, height) = kind.size();
    let result = raster::rasterize_svg(&svg, width, height).await;
    if let Err(err) = &result {
        warn!(?kind, %err, "chart omitted from report");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn charts_are_unavailable_before_analysis() {
        let mut state = AppState::default();
        state.load_sample();
        let view = DashboardView::project(&state);
        assert!(chart_svg(ChartKind::Traffic, &view).is_none());
        assert!(chart_svg(ChartKind::Models, &view).is_none());

        let ticket = state.begin_analysis().unwrap();
        state.complete_analysis(ticket);
        let view = DashboardView::project(&state);
        assert!(chart_svg(ChartKind::Traffic, &view).is_some());
        assert!(chart_svg(ChartKind::Models, &view).is_some());
    }
}

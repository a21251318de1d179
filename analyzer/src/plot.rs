use crate::error::AnalyzerError;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};
use loadtest_report::{create_chart, report::AnalysisReport, ChartKind, ChartStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

pub fn plot_chart(
    report: &AnalysisReport,
    output_directory: &Path,
    kind: ChartKind,
    style: &ChartStyle,
) -> Result<PathBuf, AnalyzerError> {
    let data_processing_start = Instant::now();
    let chart = create_chart(report, kind, style);
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    let chart_path = save_chart(&chart, kind.file_name(), output_directory, style)?;
    let chart_render_time = chart_render_start.elapsed();

    info!(
        "Generated {} chart at: {} ({} runs, data processing: {:.2?}, chart render: {:.2?})",
        kind,
        chart_path.display(),
        report.runs.len(),
        data_processing_time,
        chart_render_time
    );
    Ok(chart_path)
}

fn save_chart(
    chart: &Chart,
    file_name: &str,
    output_directory: &Path,
    style: &ChartStyle,
) -> Result<PathBuf, AnalyzerError> {
    let full_output_path = output_directory.join(format!("{}.html", file_name));
    let theme = if style.dark_theme {
        Theme::Dark
    } else {
        Theme::Default
    };

    let mut renderer = HtmlRenderer::new(file_name, style.width, style.height).theme(theme);
    renderer
        .save(chart, &full_output_path)
        .map_err(|e| AnalyzerError::CannotWriteArtifact {
            artifact: format!("{}.html", file_name),
            reason: format!("Failed to save HTML plot: {:?}", e),
        })?;
    Ok(full_output_path)
}

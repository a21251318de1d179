use crate::comparison::EndpointHeatmap;
use crate::plotting::chart::ReportChart;
use crate::plotting::{chart_kind::ChartKind, style::ChartStyle};
use crate::report::AnalysisReport;
use charming::{
    component::{Axis, Grid, VisualMap},
    element::{AxisType, Emphasis, ItemStyle, Label, Orient, SplitArea, Tooltip},
    series::Heatmap,
    Chart,
};

pub(crate) fn create(report: &AnalysisReport, style: &ChartStyle) -> Chart {
    let heatmap = EndpointHeatmap::from_runs(&report.runs);
    let max_value = heatmap.max_value().max(1.0);

    let chart = ReportChart::new(
        &report.title(ChartKind::EndpointHeatmap),
        &report.subtext(),
        style,
    )
    .build();

    chart
        .tooltip(Tooltip::new().position("top"))
        .grid(Grid::new().left("18%").right("8%").top("16%").bottom("16%"))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Run")
                .data(heatmap.runs.clone())
                .split_area(SplitArea::new().show(true)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Endpoint")
                .data(heatmap.axis_labels())
                .split_area(SplitArea::new().show(true)),
        )
        .visual_map(
            VisualMap::new()
                .min(0.0)
                .max(max_value)
                .calculable(true)
                .orient(Orient::Horizontal)
                .left("center")
                .bottom("4%"),
        )
        .series(
            Heatmap::new()
                .name("Average Time (ms)")
                .label(Label::new().show(true))
                .emphasis(
                    Emphasis::new().item_style(
                        ItemStyle::new()
                            .shadow_blur(10)
                            .shadow_color("rgba(0, 0, 0, 0.5)"),
                    ),
                )
                .data(heatmap.as_charming_points()),
        )
}

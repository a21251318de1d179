use super::style::ChartStyle;
use charming::{
    component::{
        Axis, DataView, Feature, Grid, Legend, LegendSelectedMode, LegendType, Restore,
        SaveAsImage, Title, Toolbox,
    },
    element::{
        AreaStyle, AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, ItemStyle,
        Label, LabelPosition, LineStyle, LineStyleType, NameLocation, Orient, SplitLine, Symbol,
        TextAlign, TextStyle, Tooltip,
    },
    series::{Bar, Line},
    Chart,
};

pub struct ReportChart {
    pub inner: Chart,
    panels: usize,
}

const AXIS_TEXT_SIZE: u32 = 14;
const PANEL_TITLE_SIZE: u32 = 15;

/// Direction in which the run categories are laid out inside a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs on the X axis, values grow upwards.
    Vertical,
    /// Runs on the Y axis, values grow to the right.
    Horizontal,
}

/// Position of a panel (a grid with its own pair of axes) inside the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    left: String,
    top: String,
    width: String,
    height: String,
}

impl PanelLayout {
    /// A panel taking the whole drawing area below the chart title.
    pub fn full() -> Self {
        Self {
            left: "7%".to_owned(),
            top: "16%".to_owned(),
            width: "76%".to_owned(),
            height: "72%".to_owned(),
        }
    }

    /// Cell `(row, col)` of a `rows x cols` grid below the chart title.
    pub fn cell(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let (area_left, area_top, area_width, area_height) = (5.0, 14.0, 90.0, 82.0);
        let cell_width = area_width / cols as f64;
        let cell_height = area_height / rows as f64;
        Self {
            left: format!("{:.1}%", area_left + col as f64 * cell_width + cell_width * 0.08),
            top: format!("{:.1}%", area_top + row as f64 * cell_height + cell_height * 0.18),
            width: format!("{:.1}%", cell_width * 0.84),
            height: format!("{:.1}%", cell_height * 0.62),
        }
    }

    /// A cell spanning `span` columns starting at `col`.
    pub fn wide_cell(row: usize, col: usize, span: usize, rows: usize, cols: usize) -> Self {
        let first = Self::cell(row, col, rows, cols);
        let cell_width = 90.0 / cols as f64;
        Self {
            width: format!("{:.1}%", cell_width * span as f64 - cell_width * 0.16),
            ..first
        }
    }
}

/// One grid of a chart: its title, placement and axes.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: Option<String>,
    pub layout: PanelLayout,
    pub orientation: Orientation,
    pub categories: Vec<String>,
    pub value_label: String,
    pub log_scale: bool,
}

impl Panel {
    pub fn new(layout: PanelLayout, categories: Vec<String>, value_label: &str) -> Self {
        Self {
            title: None,
            layout,
            orientation: Orientation::Vertical,
            categories,
            value_label: value_label.to_owned(),
            log_scale: false,
        }
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_owned());
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }
}

impl ReportChart {
    /// Create a new `ReportChart` with default title, tooltip, legend and toolbox.
    pub fn new(title: &str, subtext: &str, style: &ChartStyle) -> Self {
        let chart = Chart::new()
            .title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("1%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(12))
                    .padding(10)
                    .item_gap(10)
                    .item_width(25)
                    .item_height(14)
                    .type_(LegendType::Scroll),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = match style.background_color() {
            Some(color) => chart.background_color(color),
            None => chart,
        };

        Self {
            inner: chart,
            panels: 0,
        }
    }

    /// Number of panels added so far; the next panel gets this index.
    pub fn panel_count(&self) -> usize {
        self.panels
    }

    /// Add a grid with a category axis (the runs) and a value axis.
    ///
    /// Panels are indexed in insertion order, series refer to them by index.
    pub fn with_panel(mut self, panel: Panel) -> Self {
        let index = self.panels as f64;
        let layout = &panel.layout;

        if let Some(title) = &panel.title {
            let title_top = shift_percent(&layout.top, -4.0);
            self.inner = self.inner.title(
                Title::new()
                    .text(title.as_str())
                    .text_style(TextStyle::new().font_size(PANEL_TITLE_SIZE))
                    .left(layout.left.as_str())
                    .top(title_top.as_str()),
            );
        }

        self.inner = self.inner.grid(
            Grid::new()
                .left(layout.left.as_str())
                .top(layout.top.as_str())
                .width(layout.width.as_str())
                .height(layout.height.as_str()),
        );

        let category_axis = Axis::new()
            .type_(AxisType::Category)
            .grid_index(index)
            .data(panel.categories.clone())
            .split_line(SplitLine::new().show(false));

        let value_axis = Axis::new()
            .type_(if panel.log_scale {
                AxisType::Log
            } else {
                AxisType::Value
            })
            .grid_index(index)
            .name(panel.value_label.as_str())
            .name_location(NameLocation::End)
            .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
            .name_gap(15)
            .axis_label(AxisLabel::new())
            .split_line(SplitLine::new().show(true));

        self.inner = match panel.orientation {
            Orientation::Vertical => self.inner.x_axis(category_axis).y_axis(value_axis),
            Orientation::Horizontal => self.inner.x_axis(value_axis).y_axis(category_axis),
        };

        self.panels += 1;
        self
    }

    /// Add a bar series to panel `panel`.
    ///
    /// Series sharing the same `stack` name are drawn on top of each other.
    pub fn add_bar_series(
        mut self,
        panel: usize,
        name: &str,
        data: Vec<f64>,
        color: Option<&str>,
        stack: Option<&str>,
    ) -> Self {
        let mut bar = Bar::new()
            .name(name)
            .data(data)
            .x_axis_index(panel as f64)
            .y_axis_index(panel as f64)
            .emphasis(Emphasis::new());

        if let Some(color) = color {
            bar = bar.item_style(ItemStyle::new().color(color));
        }
        if let Some(stack) = stack {
            bar = bar.stack(stack);
        } else {
            bar = bar.label(Label::new().show(true).position(LabelPosition::Top));
        }

        self.inner = self.inner.series(bar);
        self
    }

    /// Add a line series with markers to panel `panel`, optionally with a filled area.
    pub fn add_line_series(
        mut self,
        panel: usize,
        name: &str,
        data: Vec<f64>,
        symbol: Symbol,
        color: &str,
        filled: bool,
    ) -> Self {
        let mut line = Line::new()
            .name(name)
            .data(data)
            .symbol(symbol)
            .symbol_size(10.0)
            .x_axis_index(panel as f64)
            .y_axis_index(panel as f64)
            .line_style(LineStyle::new().width(3.0))
            .item_style(ItemStyle::new().color(color));

        if filled {
            line = line.area_style(AreaStyle::new().opacity(0.25));
        }

        self.inner = self.inner.series(line);
        self
    }

    /// Add a dashed horizontal reference line at `value` across `points` categories.
    pub fn add_threshold_line(
        mut self,
        panel: usize,
        name: &str,
        value: f64,
        points: usize,
        color: &str,
    ) -> Self {
        let line = Line::new()
            .name(name)
            .data(vec![value; points])
            .show_symbol(false)
            .x_axis_index(panel as f64)
            .y_axis_index(panel as f64)
            .line_style(
                LineStyle::new()
                    .width(2.0)
                    .type_(LineStyleType::Dashed)
                    .opacity(0.6),
            )
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(line);
        self
    }

    pub fn build(self) -> Chart {
        self.inner
    }
}

fn shift_percent(value: &str, delta: f64) -> String {
    let number = value
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or_default();
    format!("{:.1}%", (number + delta).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_lay_out_cells_row_by_row() {
        let first = PanelLayout::cell(0, 0, 2, 2);
        let right = PanelLayout::cell(0, 1, 2, 2);
        let below = PanelLayout::cell(1, 0, 2, 2);

        assert_eq!(first.left, "8.6%");
        assert_eq!(right.left, "53.6%");
        assert_eq!(first.top, "21.4%");
        assert_eq!(below.top, "62.4%");
        assert_eq!(first.width, "37.8%");
    }

    #[test]
    fn should_widen_spanning_cells() {
        let cell = PanelLayout::wide_cell(1, 1, 2, 3, 3);
        assert_eq!(cell.left, PanelLayout::cell(1, 1, 3, 3).left);
        assert_eq!(cell.width, "55.2%");
    }

    #[test]
    fn should_shift_percentages() {
        assert_eq!(shift_percent("16%", -4.0), "12.0%");
        assert_eq!(shift_percent("2%", -4.0), "0.0%");
    }
}

use std::sync::Arc;

use eframe::egui::{self, Color32};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints};

use crate::config::{DASHBOARD, PLOT_CONFIG};
use crate::models::{ChartSeries, PriceChart};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;

/// Close-price line; axis ticks and the hover tooltip show `DD.MM.YYYY`.
pub fn show_price_chart(ui: &mut egui::Ui, chart: &PriceChart) {
    let labels: Arc<Vec<String>> = Arc::new(chart.labels.clone());
    let hover_chart = chart.clone();

    let plot = Plot::new("price_history_plot")
        .height(DASHBOARD.chart_height)
        .custom_x_axes(vec![create_date_axis(Arc::clone(&labels))])
        .custom_y_axes(vec![create_price_axis()])
        .label_formatter(move |_name, value| {
            let date = hover_chart.label_at(value.x).unwrap_or_default();
            format!("{}\n{}", date, format_price(value.y))
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false);

    plot.show(ui, |plot_ui| {
        if let Some((lo, hi)) = chart.y_range {
            plot_ui.set_plot_bounds_y(lo..=hi);
        }

        let line = Line::new(
            chart.series.name.clone(),
            PlotPoints::new(chart.series.points.clone()),
        )
        .color(PLOT_CONFIG.price_line_color)
        .width(PLOT_CONFIG.price_line_width);
        plot_ui.line(line);
    });
}

/// One line per metric field, shared x axis = run number within the window.
pub fn show_metric_chart(ui: &mut egui::Ui, id: &str, series: &[ChartSeries]) {
    let legend = Legend::default().position(Corner::RightTop);

    Plot::new(id)
        .height(DASHBOARD.chart_height)
        .legend(legend)
        .custom_x_axes(vec![create_run_axis()])
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{} #{:.0}\n{:.4}", name, value.x, value.y)
            }
        })
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for s in series {
                let line = Line::new(s.name.clone(), PlotPoints::new(s.points.clone()))
                    .color(series_color(s))
                    .width(PLOT_CONFIG.metric_line_width);
                plot_ui.line(line);
            }
        });
}

fn series_color(series: &ChartSeries) -> Color32 {
    series
        .field
        .and_then(|field| PLOT_CONFIG.metric_colors.get(field.color_index()))
        .copied()
        .unwrap_or(PLOT_CONFIG.price_line_color)
}

fn create_date_axis(labels: Arc<Vec<String>>) -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis_date)
        .formatter(move |grid_mark, _range| {
            let value = grid_mark.value;
            if value.fract() != 0.0 || value < 0.0 {
                return String::new();
            }
            labels.get(value as usize).cloned().unwrap_or_default()
        })
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis_close)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Left)
}

fn create_run_axis() -> AxisHints<'static> {
    AxisHints::new_x()
        .label(UI_TEXT.plot_x_axis_run)
        .formatter(|grid_mark, _range| {
            if grid_mark.value.fract() == 0.0 && grid_mark.value >= 1.0 {
                format!("{:.0}", grid_mark.value)
            } else {
                String::new()
            }
        })
}

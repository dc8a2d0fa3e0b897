use eframe::egui::{
    Button, CentralPanel, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, TextEdit,
    TopBottomPanel, Ui, Window,
};

use crate::engine::ThresholdNotice;
use crate::models::{Direction, MetricHistory, MetricRecord, ProductionMetrics, ValidationResult};
use crate::pages::{ActivePage, DashboardPage, HomePage, Route};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::{show_metric_chart, show_price_chart};
use crate::ui::utils::{format_metric, format_price, section_heading, spaced_separator};

use super::app::ForecastDashboardApp;

impl ForecastDashboardApp {
    pub(super) fn render_nav_panel(&mut self, ctx: &Context) {
        let nav_frame = Frame::new()
            .fill(UI_CONFIG.colors.nav_panel)
            .inner_margin(Margin::symmetric(8, 6));
        let current = self.route();

        TopBottomPanel::top("nav_panel")
            .frame(nav_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();
                    for (route, text) in [
                        (Route::Home, UI_TEXT.nav_home),
                        (Route::Dashboard, UI_TEXT.nav_dashboard),
                    ] {
                        if ui.selectable_label(current == route, text).clicked() {
                            self.pending_route = Some(route);
                        }
                    }

                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            if self.page.is_loading() {
                                ui.spinner();
                            }
                        },
                    );
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match &mut self.page {
                    ActivePage::Home(page) => render_home(ui, page),
                    ActivePage::Dashboard(page) => render_dashboard(ui, page),
                    ActivePage::NotFound(path) => {
                        if render_not_found(ui, path) {
                            self.pending_route = Some(Route::Home);
                        }
                    }
                });
            });
    }

    /// Modal acknowledgment of the last threshold submit.
    pub(super) fn render_threshold_notice(&mut self, ctx: &Context) {
        let ActivePage::Dashboard(page) = &mut self.page else {
            return;
        };
        let Some(notice) = page.threshold().notice().cloned() else {
            return;
        };

        let mut dismissed = false;
        Window::new(UI_TEXT.notice_title)
            .collapsible(false)
            .resizable(false)
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match &notice {
                    ThresholdNotice::Saved(value) => {
                        ui.label(format!("{} {}", UI_TEXT.notice_saved, value));
                    }
                    ThresholdNotice::Failed(error) => {
                        ui.label(UI_TEXT.notice_failed);
                        ui.label_error(error);
                    }
                }
                ui.add_space(6.0);
                if ui.button(UI_TEXT.button_ok).clicked()
                    || ui.input(|i| i.key_pressed(Key::Escape))
                {
                    dismissed = true;
                }
            });

        if dismissed {
            page.dismiss_threshold_notice();
        }
    }
}

fn render_home(ui: &mut Ui, page: &HomePage) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(RichText::new(UI_TEXT.home_header).color(UI_CONFIG.colors.heading));
    });

    section_heading(ui, UI_TEXT.section_prediction);
    ui.horizontal(|ui| {
        ui.fetch_section(page.direction(), UI_TEXT.loading_prediction, |ui, direction| {
            render_direction(ui, *direction);
        });
        ui.separator();
        ui.fetch_section(page.price(), UI_TEXT.loading_prediction, |ui, price| {
            ui.metric(
                UI_TEXT.label_predicted_close,
                &format_price(*price),
                UI_CONFIG.colors.price,
            );
        });
    });

    spaced_separator(ui);

    section_heading(ui, UI_TEXT.section_price_history);
    ui.fetch_section(page.prices(), UI_TEXT.loading_prices, |ui, prices| {
        if prices.is_empty() {
            ui.label_subdued(UI_TEXT.label_no_entries);
        } else if let Some(chart) = page.price_chart() {
            show_price_chart(ui, chart);
        }
    });
}

fn render_direction(ui: &mut Ui, direction: Direction) {
    let color = if direction.is_up() {
        UI_CONFIG.colors.direction_up
    } else {
        UI_CONFIG.colors.direction_down
    };
    ui.metric(
        UI_TEXT.label_direction,
        &format!("{} {}", direction.arrow(), direction),
        color,
    );
}

fn render_dashboard(ui: &mut Ui, page: &mut DashboardPage) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.heading(RichText::new(UI_TEXT.dashboard_header).color(UI_CONFIG.colors.heading));
    });

    section_heading(ui, UI_TEXT.section_validation);
    ui.fetch_section(page.validation(), UI_TEXT.loading_validation, render_validation);

    spaced_separator(ui);

    section_heading(ui, UI_TEXT.section_threshold);
    render_threshold(ui, page);

    spaced_separator(ui);

    section_heading(
        ui,
        format!(
            "{} (last {})",
            UI_TEXT.section_model_quality,
            page.settings().metric_window
        ),
    );
    let charts = page.charts();
    ui.fetch_section(page.history(), UI_TEXT.loading_metrics, |ui, history| {
        let Some(charts) = charts else {
            return;
        };
        ui.label_subheader(UI_TEXT.subsection_classification);
        if charts.classification.is_empty() {
            ui.label_subdued(UI_TEXT.label_no_entries);
        } else {
            show_metric_chart(ui, "classification_metrics_plot", &charts.classification);
        }
        ui.add_space(6.0);
        ui.label_subheader(UI_TEXT.subsection_regression);
        if charts.regression.is_empty() {
            ui.label_subdued(UI_TEXT.label_no_entries);
        } else {
            show_metric_chart(ui, "regression_metrics_plot", &charts.regression);
        }
        ui.add_space(6.0);
        render_history_tables(ui, history);
    });

    spaced_separator(ui);

    section_heading(ui, UI_TEXT.section_production);
    ui.fetch_section(
        page.production(),
        UI_TEXT.loading_metrics,
        |ui, production: &ProductionMetrics| {
            metric_table(ui, "production_metrics_grid", &production.classification);
        },
    );
}

fn render_validation(ui: &mut Ui, result: &ValidationResult) {
    let (status, color) = if result.success {
        (UI_TEXT.label_passed, UI_CONFIG.colors.validation_passed)
    } else {
        (UI_TEXT.label_failed, UI_CONFIG.colors.validation_failed)
    };
    ui.horizontal(|ui| {
        ui.metric(UI_TEXT.label_last_run, &result.display_date(), UI_CONFIG.colors.label);
        ui.separator();
        ui.label(RichText::new(status).strong().color(color));
    });
    for message in &result.messages {
        ui.label_subdued(format!("• {}", message));
    }
}

fn render_threshold(ui: &mut Ui, page: &mut DashboardPage) {
    let threshold = page.threshold();
    let submitting = threshold.is_submitting();
    let can_submit = threshold.can_submit();
    let mut input = threshold.display_value();

    if threshold.load_state().is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label_subdued(UI_TEXT.loading_threshold);
        });
    } else if let Some(error) = threshold.load_state().error() {
        ui.label_warning(format!("⚠ {}", error));
    }

    let mut submit = false;
    ui.horizontal(|ui| {
        ui.label_subdued(format!("{}:", UI_TEXT.label_threshold));
        let response = ui.add_enabled(
            !submitting,
            TextEdit::singleline(&mut input).desired_width(UI_CONFIG.threshold_input_width),
        );
        if response.changed() {
            page.edit_threshold(input.clone());
        }
        if can_submit && response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            submit = true;
        }

        if ui
            .add_enabled(can_submit, Button::new(UI_TEXT.button_update))
            .clicked()
        {
            submit = true;
        }
        if submitting {
            ui.spinner();
        }
    });

    if submit {
        page.submit_threshold();
    }
}

fn render_history_tables(ui: &mut Ui, history: &MetricHistory) {
    ui.collapsing(UI_TEXT.subsection_classification, |ui| {
        metric_table(ui, "classification_history_grid", &history.classification);
    });
    ui.collapsing(UI_TEXT.subsection_regression, |ui| {
        metric_table(ui, "regression_history_grid", &history.regression);
    });
}

/// One row per record, one column per field of the record's family.
fn metric_table<R: MetricRecord>(ui: &mut Ui, id: &str, records: &[R]) {
    if records.is_empty() {
        ui.label_subdued(UI_TEXT.label_no_entries);
        return;
    }

    Grid::new(id).striped(true).show(ui, |ui| {
        ui.add_sized(
            [UI_CONFIG.table_label_width, 0.0],
            eframe::egui::Label::new(RichText::new("#").small()),
        );
        for field in R::FIELDS {
            ui.label_subdued(field.to_string());
        }
        ui.end_row();

        for (idx, record) in records.iter().enumerate() {
            ui.label_subdued((idx + 1).to_string());
            for &field in R::FIELDS {
                ui.label(format_metric(record.value(field)));
            }
            ui.end_row();
        }
    });
}

/// Returns true when the user asked to go home.
fn render_not_found(ui: &mut Ui, path: &str) -> bool {
    let mut go_home = false;
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.heading(UI_TEXT.not_found_header);
        ui.add_space(6.0);
        ui.label_subdued(path.to_string());
        ui.add_space(12.0);
        if ui.link(UI_TEXT.nav_home).clicked() {
            go_home = true;
        }
    });
    go_home
}


use eframe::egui::{Color32, RichText, Ui};

use crate::engine::FetchState;
use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Last run:").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a "Label: Value" pair with consistent spacing and styling.
    /// The label is subdued, the value is colored.
    fn metric(&mut self, label: &str, value: &str, color: Color32);

    /// Renders a sub-section header using the configured global color.
    fn label_subheader(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a warning/info message (Yellow/Gold).
    fn label_warning(&mut self, text: impl Into<String>);

    /// Spinner while loading, the error while failed, `add_contents` once the data is in.
    fn fetch_section<T>(
        &mut self,
        state: &FetchState<T>,
        loading_text: &str,
        add_contents: impl FnOnce(&mut Ui, &T),
    );
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subsection_heading));
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(Color32::from_rgb(255, 100, 100)));
    }

    fn label_warning(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::from_rgb(255, 215, 0)));
    }

    fn fetch_section<T>(
        &mut self,
        state: &FetchState<T>,
        loading_text: &str,
        add_contents: impl FnOnce(&mut Ui, &T),
    ) {
        match state {
            FetchState::Idle => {}
            FetchState::Loading => {
                self.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(loading_text);
                });
            }
            FetchState::Error(message) => self.label_error(format!("⚠ {}", message)),
            FetchState::Success(data) => add_contents(self, data),
        }
    }
}

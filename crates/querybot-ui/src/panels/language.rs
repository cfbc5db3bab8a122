//! Language selector — combo box over the supported answer languages.

use egui::{self, RichText};
use querybot_types::language::Language;
use crate::theme::TEXT_SECONDARY;

/// Render the selector. Returns true when the selection changed; the caller
/// persists the new preference.
pub fn language_selector(ui: &mut egui::Ui, language: &mut Language) -> bool {
    let mut changed = false;

    ui.label(RichText::new("🌐").color(TEXT_SECONDARY));
    egui::ComboBox::from_id_salt("language_selector")
        .selected_text(language.label())
        .show_ui(ui, |ui| {
            for l in Language::all() {
                if ui.selectable_value(language, *l, l.label()).changed() {
                    changed = true;
                }
            }
        });

    changed
}

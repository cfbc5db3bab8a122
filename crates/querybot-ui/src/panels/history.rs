//! History sidebar — one row per session, delete per row, clear-all footer.

use egui::{self, RichText, ScrollArea};
use querybot_core::session_store::SessionStore;
use querybot_types::language::Translations;
use crate::theme::*;

pub enum HistoryAction {
    /// A session row was clicked
    Select(String),
    /// A row's delete button was clicked
    Delete(String),
    /// The "new chat" control was clicked
    NewChat,
    /// The clear-history footer was clicked
    ClearAll,
}

/// Render the session sidebar. Returns an action for the caller to apply.
pub fn history_panel(
    ui: &mut egui::Ui,
    store: &SessionStore,
    t: &Translations,
) -> Option<HistoryAction> {
    let mut action = None;

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new(t.chat_history).color(TEXT_PRIMARY));
        });

        if ui
            .add(
                egui::Button::new(RichText::new(t.new_chat).color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            )
            .clicked()
        {
            action = Some(HistoryAction::NewChat);
        }

        ui.separator();

        let footer_height = 40.0;
        ScrollArea::vertical()
            .max_height(ui.available_height() - footer_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for session in store.sessions() {
                    let is_active = store.active_id() == Some(session.id.as_str());
                    let label = session.title().unwrap_or(t.new_chat);
                    let label = truncate(label, 28);

                    ui.horizontal(|ui| {
                        let row = ui.selectable_label(
                            is_active,
                            RichText::new(label).color(if is_active {
                                TEXT_PRIMARY
                            } else {
                                TEXT_SECONDARY
                            }),
                        );
                        if row.clicked() && !is_active {
                            action = Some(HistoryAction::Select(session.id.clone()));
                        }

                        if ui
                            .small_button(RichText::new("🗑").color(TEXT_SECONDARY))
                            .clicked()
                        {
                            action = Some(HistoryAction::Delete(session.id.clone()));
                        }
                    });
                }
            });

        ui.separator();
        if ui
            .add(
                egui::Button::new(RichText::new(t.clear_history).color(ERROR))
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING),
            )
            .clicked()
        {
            action = Some(HistoryAction::ClearAll);
        }
    });

    action
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut)
}

//! Chat panel — conversation messages, document chip, and input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use querybot_types::language::Translations;
use querybot_types::message::{ChatMessage, Role};
use crate::state::ChatView;
use crate::theme::*;

/// What the app should do after rendering the chat panel
pub enum ChatAction {
    /// The user submitted a query
    Submit { query: String },
    /// The user clicked the attach control
    AttachFile,
    /// The user removed the attached document
    RemoveDocument,
}

/// Render the chat panel. Returns an action for the caller to dispatch.
pub fn chat_panel(
    ui: &mut egui::Ui,
    view: &mut ChatView,
    t: &Translations,
) -> Option<ChatAction> {
    let mut action = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Header
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(t.bot_at_your_service)
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if view.pending {
                            ui.label(RichText::new(t.thinking).color(WARNING).small());
                        }
                    });
                });

                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 76.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if view.chat.messages.is_empty() && !view.pending {
                            ui.add_space(24.0);
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    RichText::new(t.start_conversation)
                                        .color(TEXT_SECONDARY),
                                );
                            });
                        }

                        for message in &view.chat.messages {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if view.pending {
                            egui::Frame::default()
                                .fill(BG_SECONDARY)
                                .corner_radius(PANEL_ROUNDING)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.label(
                                        RichText::new(t.thinking).color(TEXT_SECONDARY),
                                    );
                                });
                        }
                    });

                ui.add_space(4.0);

                // Attached document chip
                if let Some(doc) = view.attached.clone() {
                    ui.horizontal(|ui| {
                        egui::Frame::default()
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!("📎 {}", doc.name))
                                        .color(TEXT_PRIMARY)
                                        .small(),
                                );
                                if ui
                                    .small_button(RichText::new("✕").color(ERROR))
                                    .clicked()
                                {
                                    action = Some(ChatAction::RemoveDocument);
                                }
                            });
                    });
                }

                // Input row
                ui.horizontal(|ui| {
                    let attach_btn = ui.add_enabled(
                        view.can_attach(),
                        egui::Button::new(RichText::new("📎").color(TEXT_PRIMARY))
                            .fill(BG_SURFACE)
                            .corner_radius(PANEL_ROUNDING),
                    );
                    if attach_btn.on_hover_text(t.attach_file).clicked() {
                        action = Some(ChatAction::AttachFile);
                    }

                    let input = egui::TextEdit::singleline(&mut view.input_text)
                        .hint_text(t.input_placeholder)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = view.can_submit();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && view.can_submit())
                        || send_btn.clicked()
                    {
                        action = Some(ChatAction::Submit {
                            query: view.take_input(),
                        });
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (label, label_color, bg) = match message.role {
        Role::User => ("You", ACCENT, BG_SECONDARY),
        Role::Assistant => ("Query Bot", SUCCESS, BG_SURFACE),
    };

    egui::Frame::default()
        .fill(bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(label).color(label_color).strong().small());
            ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
        });
}

//! Main egui application — composes all panels and drives submit cycles.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use querybot_core::engine::{QueryEngine, SubmitInput};
use querybot_core::event_bus::EventBus;
use querybot_core::ports::KvStore;
use querybot_core::prefs;
use querybot_core::session_store::SessionStore;
use querybot_platform::files;
use querybot_platform::flows::FlowClient;
use querybot_platform::storage::auto_detect_storage;
use querybot_types::event::ChatEvent;
use querybot_types::language::Language;
use querybot_ui::panels::{chat_panel, history_panel, language_selector, ChatAction, HistoryAction};
use querybot_ui::state::{sync_from_bus, ChatView};
use querybot_ui::theme;

/// Genkit dev server default; override by serving the flows under the
/// app's own origin.
const DEFAULT_FLOW_BASE: &str = "http://localhost:3400";

/// The main application state
pub struct QueryBotApp {
    storage: Rc<dyn KvStore>,
    store: SessionStore,
    view: ChatView,
    engine: Rc<QueryEngine>,
    event_bus: EventBus,
    language: Language,
    toast: Option<String>,
    first_frame: bool,
}

impl QueryBotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let storage = auto_detect_storage();
        let store = SessionStore::load(storage.clone());
        let view = ChatView::new(&store);
        let language = prefs::load_language(storage.as_ref());
        let engine = Rc::new(QueryEngine::new(Rc::new(FlowClient::new(
            DEFAULT_FLOW_BASE,
        ))));

        Self {
            storage,
            store,
            view,
            engine,
            event_bus: EventBus::new(),
            language,
            toast: None,
            first_frame: true,
        }
    }

    /// Run one submit cycle off-frame; the result comes back over the bus.
    fn dispatch_submit(&self, query: String, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let bus = self.event_bus.clone();
        let ctx = ctx.clone();
        let target = self.view.active_id.clone();
        let previous = self.view.chat.clone();
        let input = SubmitInput {
            query,
            file_data_uri: self.view.attached.as_ref().map(|d| d.data_uri.clone()),
            file_name: self.view.attached.as_ref().map(|d| d.name.clone()),
            language: self.language,
        };

        bus.emit(ChatEvent::TurnStart {
            target: target.clone(),
        });
        wasm_bindgen_futures::spawn_local(async move {
            let state = engine.submit(&previous, input).await;
            bus.emit(ChatEvent::TurnComplete { target, state });
            ctx.request_repaint();
        });
    }

    fn apply_history_action(&mut self, action: HistoryAction) {
        match action {
            HistoryAction::Select(id) => {
                self.store.set_active(&id);
                self.view.seed_from(self.store.active());
            }
            HistoryAction::Delete(id) => {
                self.store.delete_session(&id);
                // Deleting the active session moved the selection
                if self.view.active_id.as_deref() != self.store.active_id() {
                    self.view.seed_from(self.store.active());
                }
            }
            HistoryAction::NewChat => {
                self.store.create_session(Vec::new(), None);
                self.view.seed_from(self.store.active());
            }
            HistoryAction::ClearAll => {
                self.store.clear_all();
                self.view.seed_from(self.store.active());
            }
        }
    }

    fn apply_chat_action(&mut self, action: ChatAction, ctx: &egui::Context) {
        match action {
            ChatAction::Submit { query } => self.dispatch_submit(query, ctx),
            ChatAction::AttachFile => {
                if let Err(e) = files::pick_document(self.event_bus.clone()) {
                    log::warn!("File picker failed: {}", e);
                    self.event_bus.emit(ChatEvent::Notice {
                        message: format!("Could not open the file picker. {}", e),
                    });
                }
            }
            ChatAction::RemoveDocument => self.view.remove_document(&mut self.store),
        }
    }
}

impl eframe::App for QueryBotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Fold bus events into the view
        if sync_from_bus(&mut self.view, &self.event_bus, &mut self.store) {
            ctx.request_repaint();
        }
        if let Some(message) = self.view.take_toast() {
            self.toast = Some(message);
        }
        if self.view.pending {
            ctx.request_repaint();
        }

        let t = self.language.translations();

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(t.title)
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if language_selector(ui, &mut self.language) {
                        prefs::save_language(self.storage.as_ref(), self.language);
                    }
                });
            });
        });

        // ── Toast bar ────────────────────────────────────────
        if let Some(message) = self.toast.clone() {
            TopBottomPanel::bottom("toast_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&message).color(theme::ERROR));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            self.toast = None;
                        }
                    });
                });
            });
        }

        // ── History sidebar ──────────────────────────────────
        SidePanel::left("history_panel")
            .min_width(200.0)
            .max_width(280.0)
            .show(ctx, |ui| {
                if let Some(action) = history_panel(ui, &self.store, t) {
                    self.apply_history_action(action);
                }
            });

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = chat_panel(ui, &mut self.view, t) {
                self.apply_chat_action(action, ctx);
            }
        });
    }
}

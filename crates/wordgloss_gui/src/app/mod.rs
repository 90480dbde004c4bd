//! Native egui app shell for WordGloss.

mod cards;
mod pointer;
mod style;
mod surface;
#[cfg(test)]
mod tests;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use eframe::egui;
use std::time::{Duration, Instant};
use surface::LayoutTable;
use tracing::{debug, info};
use wordgloss_core::config::env_flag_enabled;
use wordgloss_core::{
    word_tokens, Config, Document, GestureMachine, HighlightId, HighlightRegistry, SpanSelection,
    WordToken,
};

const STATUS_TTL: Duration = Duration::from_secs(5);
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(200);
/// Default initial window size for native startup.
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 700.0];
/// Minimum enforced window size to keep reading surface and cards usable.
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

struct StatusMessage {
    text: String,
    at: Instant,
}

/// Native egui application shell.
///
/// Owns the UI state and communicates with the background worker via
/// channels so the `update` loop never blocks on network or disk I/O.
pub(crate) struct GlossApp {
    backend: BackendHandle,
    document: Option<Document>,
    tokens: Vec<WordToken>,
    layout: LayoutTable,
    gesture: GestureMachine,
    registry: HighlightRegistry,
    paste_draft: String,
    paste_open: bool,
    status: Option<StatusMessage>,
    load_in_flight: bool,
    gesture_trace_enabled: bool,
}

impl GlossApp {
    pub(crate) fn new(config: Config) -> Self {
        Self::with_backend(spawn_backend(config))
    }

    fn with_backend(backend: BackendHandle) -> Self {
        Self {
            backend,
            document: None,
            tokens: Vec::new(),
            layout: LayoutTable::default(),
            gesture: GestureMachine::default(),
            registry: HighlightRegistry::default(),
            paste_draft: String::new(),
            paste_open: false,
            status: None,
            load_in_flight: false,
            gesture_trace_enabled: env_flag_enabled("WORDGLOSS_GESTURE_TRACE"),
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            at: Instant::now(),
        });
    }

    /// Apply one backend event to app state.
    fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::ExplanationReady { id, body } => {
                if !self.registry.resolve(id, Ok(body)) {
                    debug!(id = id.0, "explanation for dismissed highlight discarded");
                }
            }
            CoreEvent::ExplanationFailed { id, message } => {
                if !self.registry.resolve(id, Err(message)) {
                    debug!(id = id.0, "failure for dismissed highlight discarded");
                }
            }
            CoreEvent::DocumentLoaded { document } => {
                self.load_in_flight = false;
                self.install_document(document);
            }
            CoreEvent::LoadFailed { message } => {
                self.load_in_flight = false;
                self.set_status(message);
            }
        }
    }

    /// Replace the current document.
    ///
    /// Highlights and any in-progress gesture are invalidated
    /// unconditionally; token indices from the old document are meaningless
    /// against the new one.
    fn install_document(&mut self, document: Document) {
        self.gesture.cancel();
        self.registry.clear();
        self.tokens = word_tokens(&document);
        self.layout = LayoutTable::for_tokens(&self.tokens);
        info!(
            title = %document.title,
            words = self.tokens.len(),
            rich = document.rich,
            "document installed"
        );
        self.set_status(format!(
            "Loaded \"{}\" ({} words)",
            document.title,
            self.tokens.len()
        ));
        self.document = Some(document);
    }

    /// Commit a resolved gesture and kick off its explanation fetch.
    ///
    /// The registry owns dedup; a rejected duplicate sends nothing.
    fn commit_selection(&mut self, selection: SpanSelection) {
        let SpanSelection {
            text,
            token_indices,
        } = selection;
        if let Some(id) = self.registry.commit(text.clone(), token_indices) {
            let _ = self.backend.cmd_tx.send(CoreCmd::Explain { id, text });
        }
    }

    fn dismiss(&mut self, id: HighlightId) {
        self.registry.remove(id);
    }

    /// Hand a file path to the worker and mark the load as outstanding.
    ///
    /// The flag keeps the frame loop polling so the reply is applied even
    /// when the user generates no further input.
    fn request_document(&mut self, path: std::path::PathBuf) {
        self.load_in_flight = true;
        let _ = self.backend.cmd_tx.send(CoreCmd::LoadFile { path });
    }

    /// Whether the worker may still deliver events without user input.
    fn awaiting_backend(&self) -> bool {
        self.load_in_flight || self.registry.any_pending() || self.gesture.is_armed()
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| status.at.elapsed() > STATUS_TTL)
        {
            self.status = None;
        }
        ui.horizontal(|ui| {
            if ui.button("Open file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Text", &["txt", "md", "markdown"])
                    .pick_file()
                {
                    self.request_document(path);
                }
            }
            if ui.button("Paste text").clicked() {
                self.paste_open = true;
            }
            if let Some(document) = &self.document {
                ui.separator();
                ui.strong(&document.title);
            }
            if let Some(status) = &self.status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&status.text);
                });
            }
        });
    }

    fn render_paste_window(&mut self, ctx: &egui::Context) {
        let mut open = self.paste_open;
        let mut submitted = false;
        egui::Window::new("Paste text")
            .open(&mut open)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.paste_draft)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY)
                        .hint_text("Paste or type the text to read"),
                );
                if ui.button("Read").clicked() {
                    submitted = true;
                }
            });
        self.paste_open = open;
        if submitted {
            let text = std::mem::take(&mut self.paste_draft);
            if !text.trim().is_empty() {
                self.install_document(Document::new("Pasted text", text));
            }
            self.paste_open = false;
        }
    }
}

impl eframe::App for GlossApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_backend_events();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.render_top_bar(ui));
        egui::SidePanel::right("cards_panel")
            .default_width(320.0)
            .show(ctx, |ui| self.render_cards_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_reading_surface(ui));
        if self.paste_open {
            self.render_paste_window(ctx);
        }

        // Fetches and file loads resolve off-frame; keep polling until they land.
        if self.awaiting_backend() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}

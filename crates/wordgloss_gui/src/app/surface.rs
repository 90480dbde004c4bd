//! Reading surface: word-wrapped rendering, layout capture, gesture wiring.

use super::pointer::pointer_signals;
use super::style::{
    HIGHLIGHT_BG, HIGHLIGHT_TEXT, INK_COLOR, INK_STROKE_WIDTH, READING_FONT_SIZE, WORD_GAP,
};
use super::GlossApp;
use eframe::egui::{self, RichText};
use std::collections::HashSet;
use tracing::trace;
use wordgloss_core::{Token, TokenBox, TokenSurface, WordToken};

fn to_token_box(rect: egui::Rect) -> TokenBox {
    TokenBox::new(rect.min.x, rect.max.x, rect.min.y, rect.max.y)
}

#[derive(Debug)]
struct LayoutEntry {
    index: usize,
    text: String,
    bbox: Option<TokenBox>,
}

/// Per-frame record of where each word token was painted.
///
/// This is the live surface behind the snapshot contract: rebuilt from the
/// actual render every frame and read fresh at each gesture endpoint, never
/// cached across frames or content reloads. Words that were not painted
/// this frame (scrolled out, collapsed) simply have no box.
#[derive(Debug, Default)]
pub(crate) struct LayoutTable {
    entries: Vec<LayoutEntry>,
    bounds: Option<TokenBox>,
}

impl LayoutTable {
    pub(crate) fn for_tokens(tokens: &[WordToken]) -> Self {
        Self {
            entries: tokens
                .iter()
                .map(|token| LayoutEntry {
                    index: token.index,
                    text: token.text.clone(),
                    bbox: None,
                })
                .collect(),
            bounds: None,
        }
    }

    /// Forget last frame's geometry before repainting.
    pub(crate) fn begin_frame(&mut self) {
        for entry in &mut self.entries {
            entry.bbox = None;
        }
        self.bounds = None;
    }

    pub(crate) fn set_bounds(&mut self, rect: egui::Rect) {
        self.bounds = Some(to_token_box(rect));
    }

    /// Record the painted rect for a token, addressed by its explicit index.
    ///
    /// Indices are dense, so positional lookup is the hot path; the scan
    /// fallback keeps the explicit-index addressing authoritative.
    pub(crate) fn record(&mut self, index: usize, rect: egui::Rect) {
        match self.entries.get_mut(index) {
            Some(entry) if entry.index == index => entry.bbox = Some(to_token_box(rect)),
            _ => {
                if let Some(entry) = self.entries.iter_mut().find(|entry| entry.index == index) {
                    entry.bbox = Some(to_token_box(rect));
                }
            }
        }
    }
}

impl TokenSurface for LayoutTable {
    fn snapshot_tokens(&self) -> Vec<Token> {
        self.entries
            .iter()
            .filter_map(|entry| {
                let bbox = entry.bbox?;
                if bbox.is_zero_area() {
                    return None;
                }
                Some(Token {
                    index: entry.index,
                    text: entry.text.clone(),
                    bbox,
                })
            })
            .collect()
    }

    fn surface_bounds(&self) -> Option<TokenBox> {
        self.bounds
    }
}

impl GlossApp {
    /// Render the document word-by-word, capturing per-word geometry.
    pub(super) fn render_reading_surface(&mut self, ui: &mut egui::Ui) {
        let Some(document) = &self.document else {
            ui.centered_and_justified(|ui| {
                ui.weak("Open a file or paste text to start reading.");
            });
            return;
        };
        let title = document.title.clone();

        self.layout.begin_frame();
        let highlighted: HashSet<usize> = self
            .registry
            .iter()
            .flat_map(|highlight| highlight.token_indices.iter().copied())
            .collect();

        let output = egui::ScrollArea::vertical()
            .id_salt("reading_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.heading(title);
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing.x = WORD_GAP;
                    for position in 0..self.tokens.len() {
                        let index = self.tokens[position].index;
                        let mut word =
                            RichText::new(self.tokens[position].text.clone()).size(READING_FONT_SIZE);
                        if highlighted.contains(&index) {
                            word = word.color(HIGHLIGHT_TEXT).background_color(HIGHLIGHT_BG);
                        }
                        let response = ui.add(egui::Label::new(word).selectable(false));
                        self.layout.record(index, response.rect);
                    }
                });
            });
        self.layout.set_bounds(output.inner_rect);

        self.handle_pointer(ui.ctx());
        self.paint_ink(ui.ctx());
    }

    /// Route this frame's pointer input through the gesture machine.
    ///
    /// Moves and releases read global pointer state rather than the surface
    /// response, so a drag that leaves and re-enters the surface is never
    /// lost mid-gesture.
    fn handle_pointer(&mut self, ctx: &egui::Context) {
        let (signals, latest_pos, released) = ctx.input(|input| {
            (
                pointer_signals(&input.events),
                input.pointer.latest_pos(),
                input.pointer.primary_released(),
            )
        });

        if signals.cancel {
            self.gesture.cancel();
            return;
        }
        if let Some(press) = signals.press {
            let armed = self.gesture.pointer_down(
                &self.layout,
                press.class,
                press.bypass_modifier,
                press.pos.x,
                press.pos.y,
            );
            if self.gesture_trace_enabled {
                trace!(armed, class = ?press.class, x = press.pos.x, y = press.pos.y, "pointer press");
            }
        }
        if self.gesture.is_armed() {
            if let Some(pos) = latest_pos {
                self.gesture.pointer_move(pos.x);
            }
            if released {
                if let Some(selection) = self.gesture.pointer_up(&self.layout) {
                    self.commit_selection(selection);
                }
            }
        }
    }

    /// Paint the sweep affordance while a gesture is armed.
    fn paint_ink(&self, ctx: &egui::Context) {
        let Some(ink) = self.gesture.ink() else {
            return;
        };
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("gesture_ink"),
        ));
        if ink.max_x - ink.min_x < 1.0 {
            painter.circle_filled(egui::pos2(ink.min_x, ink.line_y), INK_STROKE_WIDTH, INK_COLOR);
        } else {
            painter.line_segment(
                [
                    egui::pos2(ink.min_x, ink.line_y),
                    egui::pos2(ink.max_x, ink.line_y),
                ],
                egui::Stroke::new(INK_STROKE_WIDTH, INK_COLOR),
            );
        }
    }
}

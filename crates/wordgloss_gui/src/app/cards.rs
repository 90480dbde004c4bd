//! Highlight card panel, shown in document order.

use super::style::CARD_ERROR_COLOR;
use super::GlossApp;
use eframe::egui::{self, RichText};
use wordgloss_core::{Explanation, HighlightId};

impl GlossApp {
    pub(super) fn render_cards_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Highlights");
        ui.add_space(4.0);
        if self.registry.is_empty() {
            ui.weak("Sweep across words to add a highlight.");
            return;
        }

        let mut dismissed: Option<HighlightId> = None;
        egui::ScrollArea::vertical()
            .id_salt("cards_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for highlight in self.registry.iter() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&highlight.text).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("x").clicked() {
                                        dismissed = Some(highlight.id);
                                    }
                                    ui.weak(highlight.created_at.format("%H:%M").to_string());
                                },
                            );
                        });
                        match &highlight.explanation {
                            Explanation::Pending => {
                                ui.horizontal(|ui| {
                                    ui.spinner();
                                    ui.weak("Fetching explanation...");
                                });
                            }
                            Explanation::Ready(body) => {
                                ui.label(body);
                            }
                            Explanation::Failed(message) => {
                                ui.colored_label(CARD_ERROR_COLOR, message);
                            }
                        }
                    });
                    ui.add_space(6.0);
                }
            });

        if let Some(id) = dismissed {
            self.dismiss(id);
        }
    }
}

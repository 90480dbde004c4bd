//! Shared colors and sizing for the reading surface and highlight cards.

use eframe::egui::Color32;

pub(crate) const READING_FONT_SIZE: f32 = 18.0;
pub(crate) const WORD_GAP: f32 = 6.0;
pub(crate) const HIGHLIGHT_BG: Color32 = Color32::from_rgb(255, 236, 160);
pub(crate) const HIGHLIGHT_TEXT: Color32 = Color32::from_rgb(40, 35, 10);
pub(crate) const INK_COLOR: Color32 = Color32::from_rgba_premultiplied(80, 140, 255, 160);
pub(crate) const INK_STROKE_WIDTH: f32 = 3.0;
pub(crate) const CARD_ERROR_COLOR: Color32 = Color32::from_rgb(205, 92, 92);

//! Pointer-event classification for the reading surface.
//!
//! egui synthesizes pointer-button events for touch contacts, so a raw touch
//! event in the same frame reclassifies the press. Stylus contacts are the
//! touch events that report pressure; bare fingers do not.

use eframe::egui;
use wordgloss_core::PointerClass;

/// A press candidate extracted from this frame's raw events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PressSignal {
    pub class: PointerClass,
    pub pos: egui::Pos2,
    /// Whether the native-selection bypass modifier (shift) was held.
    pub bypass_modifier: bool,
}

/// Press/cancel signals for one frame of raw input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerSignals {
    pub press: Option<PressSignal>,
    pub cancel: bool,
}

/// Scan a frame's raw events for a gesture-relevant press or cancellation.
///
/// # Returns
/// The classified primary press (touch classification wins over the
/// synthesized mouse press for the same contact) and whether any contact
/// was cancelled by the platform.
pub(crate) fn pointer_signals(events: &[egui::Event]) -> PointerSignals {
    let mut press: Option<PressSignal> = None;
    let mut cancel = false;
    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers,
            } => {
                if press.is_none() {
                    press = Some(PressSignal {
                        class: PointerClass::Mouse,
                        pos: *pos,
                        bypass_modifier: modifiers.shift,
                    });
                }
            }
            egui::Event::Touch {
                phase: egui::TouchPhase::Start,
                pos,
                force,
                ..
            } => {
                let class = if force.is_some_and(|force| force > 0.0) {
                    PointerClass::Pen
                } else {
                    PointerClass::Touch
                };
                press = Some(PressSignal {
                    class,
                    pos: *pos,
                    bypass_modifier: false,
                });
            }
            egui::Event::Touch {
                phase: egui::TouchPhase::Cancel,
                ..
            } => {
                cancel = true;
            }
            _ => {}
        }
    }
    PointerSignals { press, cancel }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_press(shift: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(10.0, 20.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers {
                shift,
                ..egui::Modifiers::NONE
            },
        }
    }

    fn touch(phase: egui::TouchPhase, force: Option<f32>) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(0),
            id: egui::TouchId(1),
            phase,
            pos: egui::pos2(10.0, 20.0),
            force,
        }
    }

    #[test]
    fn mouse_press_carries_bypass_modifier() {
        let signals = pointer_signals(&[mouse_press(true)]);
        let press = signals.press.expect("press");
        assert_eq!(press.class, PointerClass::Mouse);
        assert!(press.bypass_modifier);
        assert!(!signals.cancel);
    }

    #[test]
    fn pressured_touch_classifies_as_pen() {
        let signals = pointer_signals(&[touch(egui::TouchPhase::Start, Some(0.4))]);
        assert_eq!(signals.press.map(|p| p.class), Some(PointerClass::Pen));
    }

    #[test]
    fn pressureless_touch_classifies_as_touch() {
        let signals = pointer_signals(&[touch(egui::TouchPhase::Start, None)]);
        assert_eq!(signals.press.map(|p| p.class), Some(PointerClass::Touch));
        let zero = pointer_signals(&[touch(egui::TouchPhase::Start, Some(0.0))]);
        assert_eq!(zero.press.map(|p| p.class), Some(PointerClass::Touch));
    }

    #[test]
    fn touch_reclassifies_synthesized_mouse_press() {
        let signals = pointer_signals(&[
            mouse_press(false),
            touch(egui::TouchPhase::Start, Some(0.8)),
        ]);
        assert_eq!(signals.press.map(|p| p.class), Some(PointerClass::Pen));
    }

    #[test]
    fn release_and_secondary_buttons_are_ignored() {
        let release = egui::Event::PointerButton {
            pos: egui::pos2(0.0, 0.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        let secondary = egui::Event::PointerButton {
            pos: egui::pos2(0.0, 0.0),
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        let signals = pointer_signals(&[release, secondary]);
        assert_eq!(signals.press, None);
    }

    #[test]
    fn touch_cancel_flags_cancellation() {
        let signals = pointer_signals(&[touch(egui::TouchPhase::Cancel, None)]);
        assert!(signals.cancel);
        assert_eq!(signals.press, None);
    }
}

//! Headless app tests exercising gesture, registry, and document flows.

use super::*;
use crate::backend::{BackendHandle, CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use wordgloss_core::{PointerClass, TokenSurface};


struct TestHarness {
    app: GlossApp,
    cmd_rx: Receiver<CoreCmd>,
    evt_tx: Sender<CoreEvent>,
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();
    let app = GlossApp::with_backend(BackendHandle::from_test_channels(cmd_tx, evt_rx));
    TestHarness {
        app,
        cmd_rx,
        evt_tx,
    }
}

fn fox_document() -> Document {
    Document::with_mode("Fox", "The quick brown fox jumps".to_string(), false)
}

/// Paint a one-line layout for the five fox tokens at y = 95..105.
fn lay_out_fox_line(app: &mut GlossApp) {
    let spans: [(f32, f32); 5] = [
        (0.0, 8.0),
        (12.0, 40.0),
        (45.0, 80.0),
        (85.0, 118.0),
        (125.0, 160.0),
    ];
    app.layout.begin_frame();
    for (index, (left, right)) in spans.iter().enumerate() {
        app.layout.record(
            index,
            egui::Rect::from_min_max(egui::pos2(*left, 95.0), egui::pos2(*right, 105.0)),
        );
    }
    app.layout.set_bounds(egui::Rect::from_min_max(
        egui::pos2(0.0, 0.0),
        egui::pos2(400.0, 300.0),
    ));
}

/// Drive a full mouse sweep through the gesture machine and commit the
/// result, mirroring the surface's release path.
fn sweep(app: &mut GlossApp, start_x: f32, end_x: f32) {
    assert!(app
        .gesture
        .pointer_down(&app.layout, PointerClass::Mouse, false, start_x, 100.0));
    app.gesture.pointer_move(end_x);
    if let Some(selection) = app.gesture.pointer_up(&app.layout) {
        app.commit_selection(selection);
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outbound command")
}

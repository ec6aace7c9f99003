use super::state::FileOperationResult;
use super::*;
use crate::constants::{AUTO_CLEAR_DURATION, BUTTON_REGIONS};
use crate::roster::RosterStore;
use crate::types::{ButtonLabel, DrawState, GroupLabel, RosterEntry};
use crate::viewport::ViewportMapper;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;

const SCREEN: egui::Vec2 = egui::vec2(1360.0, 765.0);

fn app_with_players(count: i64) -> DrawApp {
    let roster = RosterStore::from_entries(
        (1..=count)
            .map(|id| RosterEntry::new(format!("Player {id}"), id))
            .collect(),
    );
    DrawApp::new(
        roster,
        StdRng::seed_from_u64(11),
        PathBuf::from("does-not-exist/background.png"),
    )
}

/// Run a single headless egui frame at `time` seconds with the given events.
fn run_frame(ctx: &egui::Context, app: &mut DrawApp, time: f64, events: Vec<egui::Event>) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN));
    raw.time = Some(time);
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        app.poll_timers(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                app.draw_board(ui);
            });
    });
}

/// Hover, press and release the primary button at `pos`.
fn click(ctx: &egui::Context, app: &mut DrawApp, time: f64, pos: egui::Pos2) {
    run_frame(ctx, app, time, vec![egui::Event::PointerMoved(pos)]);
    run_frame(
        ctx,
        app,
        time,
        vec![
            egui::Event::PointerMoved(pos),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            },
        ],
    );
    run_frame(
        ctx,
        app,
        time,
        vec![egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        }],
    );
}

/// Screen position of a button's center for the test window size.
fn button_pos(label: ButtonLabel) -> egui::Pos2 {
    let mut mapper = ViewportMapper::default();
    mapper.update_viewport(SCREEN.x, SCREEN.y);
    let (_, rect) = BUTTON_REGIONS
        .into_iter()
        .find(|(candidate, _)| *candidate == label)
        .unwrap();
    let center = mapper.map_rect(rect).center();
    egui::pos2(center.x, center.y)
}

#[test]
fn clicking_two_button_draws_pairs() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();

    click(&ctx, &mut app, 0.0, button_pos(ButtonLabel::Two));

    assert_eq!(app.controller.state(), DrawState::Showing);
    for label in GroupLabel::ALL {
        assert_eq!(app.controller.assignment()[label].len(), 2);
    }
    assert!(app.dialog.is_none());
}

#[test]
fn clicking_three_button_draws_triples() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();

    click(&ctx, &mut app, 0.0, button_pos(ButtonLabel::Three));

    assert_eq!(app.controller.assignment().group_size(), 3);
}

#[test]
fn clicking_outside_buttons_does_nothing() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();

    click(&ctx, &mut app, 0.0, egui::pos2(20.0, 20.0));

    assert_eq!(app.controller.state(), DrawState::Idle);
    assert!(app.controller.assignment().is_empty());
}

#[test]
fn board_tracks_window_size() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();

    run_frame(&ctx, &mut app, 0.0, Vec::new());

    assert_eq!(app.controller.mapper().viewport_size(), (SCREEN.x, SCREEN.y));
}

#[test]
fn small_roster_shows_error_dialog_and_keeps_board() {
    let mut app = app_with_players(10);
    let ctx = egui::Context::default();

    click(&ctx, &mut app, 0.0, button_pos(ButtonLabel::Two));
    let shown = app.controller.assignment().clone();
    assert_eq!(shown.group_size(), 2);

    click(&ctx, &mut app, 1.0, button_pos(ButtonLabel::Three));

    let dialog = app.dialog.clone().expect("insufficient roster should open a dialog");
    assert_eq!(dialog.title, "Draw failed");
    assert!(dialog.message.contains("12"));
    assert_eq!(app.controller.assignment(), &shown);
}

#[test]
fn presses_are_ignored_while_dialog_is_open() {
    let mut app = app_with_players(20);
    app.dialog = Some(ErrorDialog {
        title: "Draw failed".into(),
        message: "test".into(),
    });
    let ctx = egui::Context::default();

    click(&ctx, &mut app, 0.0, button_pos(ButtonLabel::Two));

    assert_eq!(app.controller.state(), DrawState::Idle);
}

#[test]
fn board_clears_after_auto_clear_duration() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();
    let clear_after = AUTO_CLEAR_DURATION.as_secs_f64();

    click(&ctx, &mut app, 5.0, button_pos(ButtonLabel::Two));
    assert_eq!(app.controller.state(), DrawState::Showing);

    run_frame(&ctx, &mut app, 5.0 + clear_after - 1.0, Vec::new());
    assert_eq!(app.controller.state(), DrawState::Showing);

    run_frame(&ctx, &mut app, 5.0 + clear_after, Vec::new());
    assert_eq!(app.controller.state(), DrawState::Idle);
    assert!(app.controller.assignment().is_empty());
}

#[test]
fn redraw_restarts_auto_clear() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();
    let clear_after = AUTO_CLEAR_DURATION.as_secs_f64();

    click(&ctx, &mut app, 0.0, button_pos(ButtonLabel::Two));
    click(&ctx, &mut app, 100.0, button_pos(ButtonLabel::Three));

    run_frame(&ctx, &mut app, clear_after + 1.0, Vec::new());
    assert_eq!(app.controller.state(), DrawState::Showing);
    assert_eq!(app.controller.assignment().group_size(), 3);

    run_frame(&ctx, &mut app, 100.0 + clear_after, Vec::new());
    assert_eq!(app.controller.state(), DrawState::Idle);
}

#[test]
fn chosen_roster_file_replaces_roster() {
    let mut app = app_with_players(20);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for id in 1..=9 {
        writeln!(file, "Reloaded {id},{}", 100 + id).unwrap();
    }
    file.flush().unwrap();

    app.file.dialog_open = true;
    app.file
        .file_operation_sender
        .send(FileOperationResult::RosterChosen(file.path().to_path_buf()))
        .unwrap();
    app.handle_pending_operations();

    assert!(!app.file.dialog_open);
    assert_eq!(app.controller.roster().count(), 9);
    assert_eq!(app.controller.roster().id_pool()[0], 101);
    assert_eq!(app.file.roster_path.as_deref(), Some(file.path()));
}

#[test]
fn failed_reload_keeps_roster_and_reports() {
    let mut app = app_with_players(20);
    let dir = tempfile::tempdir().unwrap();

    app.reload_roster(&dir.path().join("missing.csv"));

    assert_eq!(app.controller.roster().count(), 20);
    let dialog = app.dialog.expect("reload failure should open a dialog");
    assert_eq!(dialog.title, "Roster reload failed");
    assert!(dialog.message.contains("20 players"));
}

#[test]
fn cancelled_picker_changes_nothing() {
    let mut app = app_with_players(20);
    app.file.dialog_open = true;
    app.file
        .file_operation_sender
        .send(FileOperationResult::Cancelled)
        .unwrap();

    app.handle_pending_operations();

    assert!(!app.file.dialog_open);
    assert_eq!(app.controller.roster().count(), 20);
    assert!(app.dialog.is_none());
}

#[test]
fn missing_background_is_tolerated() {
    let mut app = app_with_players(20);
    let ctx = egui::Context::default();

    run_frame(&ctx, &mut app, 0.0, Vec::new());
    run_frame(&ctx, &mut app, 0.1, Vec::new());

    assert!(app.background.attempted);
    assert!(app.background.texture.is_none());
}

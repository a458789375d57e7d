//! Snapshot tests for the palette and help overlays.
//!
//! Terminal sizes are chosen so the centered overlays split evenly.

mod helpers;

use helpers::{TuiHarness, ctrl_key, down_key, key, type_text};

#[test]
fn snapshot_palette_browse_with_selection() {
    let mut harness = TuiHarness::new(100, 30);
    harness.app.handle_key(ctrl_key('k'));
    harness.app.handle_key(down_key());
    harness.app.handle_key(down_key());

    insta::assert_snapshot!(harness.render());
}

#[test]
fn snapshot_palette_no_results() {
    let mut harness = TuiHarness::new(100, 30);
    harness.app.handle_key(ctrl_key('k'));
    type_text(&mut harness.app, "@@@");

    insta::assert_snapshot!(harness.render());
}

#[test]
fn snapshot_help_overlay() {
    let mut harness = TuiHarness::new(100, 40);
    harness.app.handle_key(key('?'));

    insta::assert_snapshot!(harness.render());
}

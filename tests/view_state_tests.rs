//! Library-level tests driving the page controllers the way the binary does,
//! without going through the CLI.

use aegisops::fixtures::{FixtureStore, Severity, ThreatType};
use aegisops::incident::resolve_incident;
use aegisops::pages::{PoliciesPage, ThreatsPage};
use aegisops::state::Drawer;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn filter_and_drawer_are_independent_axes() {
    let store = FixtureStore::builtin();
    let mut page = ThreatsPage::new(&store);

    page.set_severity(Some(Severity::Critical));
    assert_eq!(page.visible().len(), 2);

    // Select a High threat while the table shows only Critical rows.
    assert!(page.select("THR-2026-0890"));
    assert_eq!(page.visible().len(), 2);
    let selected = page.drawer.selected().unwrap();
    assert_eq!(selected.severity, Severity::High);

    // Clearing the filter leaves the selection in place.
    page.set_severity(None);
    assert_eq!(page.visible().len(), 10);
    assert!(page.drawer.is_open());
}

#[test]
fn filters_narrow_conjunctively_and_preserve_fixture_order() {
    let store = FixtureStore::builtin();
    let mut page = ThreatsPage::new(&store);

    page.set_kind(Some(ThreatType::Injection));
    let ids: Vec<&str> = page.visible().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["THR-2026-0891", "THR-2026-0886"]);

    page.set_severity(Some(Severity::Critical));
    assert_eq!(page.visible().len(), 2);

    page.set_kind(Some(ThreatType::Jailbreak));
    assert!(page.visible().is_empty());
}

#[test]
fn drawer_replaces_selection_atomically() {
    let store = FixtureStore::builtin();
    let mut page = ThreatsPage::new(&store);

    assert!(page.select("THR-2026-0891"));
    assert!(page.select("THR-2026-0884"));
    assert_eq!(page.drawer.selected().unwrap().id, "THR-2026-0884");

    page.close_drawer();
    assert_eq!(page.drawer, Drawer::Closed);
}

#[test]
fn toggles_drive_previews_without_touching_fixtures() {
    let store = FixtureStore::builtin();
    let mut page = PoliciesPage::new(&store);
    let mut rng = StdRng::seed_from_u64(9);

    assert_eq!(page.counter(), "7 / 8 active");

    // Disable a live policy: the preview collapses to zero but the fixture
    // row still says enabled.
    page.toggle("POL-001");
    assert!(page.select("POL-001"));
    let preview = page.preview("POL-001", &mut rng).unwrap();
    assert_eq!(preview.blocked_events, 0);
    assert!(store.policy("POL-001").unwrap().enabled);

    page.toggle("POL-001");
    let preview = page.preview("POL-001", &mut rng).unwrap();
    assert!((100..600).contains(&preview.blocked_events));
    assert_eq!(page.counter(), "7 / 8 active");
}

#[test]
fn incident_resolution_prefers_hand_authored_records() {
    let store = FixtureStore::builtin();

    let authored = resolve_incident(&store, "THR-2026-0891").unwrap();
    assert_eq!(authored.timeline.len(), 7);

    let synthesized = resolve_incident(&store, "THR-2026-0889").unwrap();
    assert_eq!(synthesized.timeline.len(), 3);
    assert!(synthesized
        .narrative
        .ends_with("Further investigation is required to determine the full scope and impact of this incident."));

    assert!(resolve_incident(&store, "THR-0000-0000").is_none());
}

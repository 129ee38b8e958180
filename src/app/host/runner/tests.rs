use super::*;
use crate::app::host::{HostEvent, MemoryHost};
use crate::app::MenuAction;
use crate::core::{ArrowCategory, ArrowDescriptor, ArrowError, ArrowStyle, FeatureId};
use approx::assert_relative_eq;
use glam::DVec2;

fn runner() -> ArrowRunner<MemoryHost> {
    ArrowRunner::new(ArrowToolState::default(), MemoryHost::new())
}

fn anchor(x: f64, y: f64) -> ArrowIntent {
    ArrowIntent::AnchorPlaced {
        point: DVec2::new(x, y),
    }
}

fn menu(action: MenuAction) -> ArrowIntent {
    ArrowIntent::MenuActionChosen { action }
}

fn activate(descriptor: ArrowDescriptor) -> ArrowIntent {
    ArrowIntent::ToolActivated { descriptor }
}

async fn dispatch_all(runner: &mut ArrowRunner<MemoryHost>, intents: Vec<ArrowIntent>) {
    for intent in intents {
        runner
            .dispatch(intent)
            .await
            .expect("Schritt ohne Fehler erwartet");
    }
}

fn count_events(host: &MemoryHost, pred: impl Fn(&HostEvent) -> bool) -> usize {
    host.journal().iter().filter(|e| pred(e)).count()
}

// ═══════════════════════════════════════════════════════════════════
// Konstruktionsablauf
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn dimension_creates_two_features_then_modifies_with_offset() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::OneDash)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
        ],
    )
    .await;

    assert_eq!(r.host().feature_count(), 2);
    let ids = r.state().session.as_ref().expect("Sitzung erwartet").object_ids;
    assert_eq!(ids.occupied().count(), 2);

    dispatch_all(&mut r, vec![anchor(5.0, 3.0)]).await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_relative_eq!(session.offset, 3.0, epsilon = 1e-9);
    assert_eq!(r.host().feature_count(), 2);
    assert_eq!(
        count_events(r.host(), |e| matches!(e, HostEvent::Modified(_))),
        2
    );
}

#[tokio::test]
async fn cancel_deletes_features_of_current_shape() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            anchor(0.0, 0.0),
            anchor(0.0, 10.0),
            menu(MenuAction::Cancel),
        ],
    )
    .await;

    assert_eq!(r.host().feature_count(), 0);
    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert!(!session.has_anchors());
    assert!(session.object_ids.is_empty());
    assert!(r.state().ledger.is_empty());
}

#[tokio::test]
async fn finish_keeps_features_and_ledger_collects_both_shapes() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::LandHook)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
            menu(MenuAction::Finish),
            anchor(0.0, 20.0),
            anchor(10.0, 20.0),
        ],
    )
    .await;

    assert_eq!(r.host().feature_count(), 4);
    assert_eq!(r.host().selection().len(), 4);
    assert_eq!(r.state().ledger.len(), 4);

    dispatch_all(&mut r, vec![menu(MenuAction::Cancel)]).await;

    // Nur die Features der laufenden Form werden gelöscht
    assert_eq!(r.host().feature_count(), 2);
    assert_eq!(r.state().ledger.len(), 2);
}

#[tokio::test]
async fn host_selection_cleared_restarts_ledger() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
            menu(MenuAction::Finish),
            ArrowIntent::HostSelectionChanged { selected_count: 0 },
            anchor(0.0, 5.0),
            anchor(10.0, 5.0),
        ],
    )
    .await;

    assert_eq!(r.host().feature_count(), 4);
    assert_eq!(r.host().selection(), &[FeatureId(3), FeatureId(4)]);
}

#[tokio::test]
async fn select_new_arrows_off_clears_host_selection() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            menu(MenuAction::ToggleSelectNewArrows),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
        ],
    )
    .await;

    assert!(r.host().selection().is_empty());
    assert!(r.host().journal().contains(&HostEvent::SelectionCleared));
    assert!(r.state().ledger.is_empty());
}

// ═══════════════════════════════════════════════════════════════════
// Folge-Intents: Kartenmaßstab und Rückfrage
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn first_anchor_takes_scale_from_host_map_scale() {
    let mut r = ArrowRunner::new(
        ArrowToolState::default(),
        MemoryHost::new().with_map_scale(2400.0),
    );
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::TwoDashes)),
            anchor(0.0, 0.0),
        ],
    )
    .await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_relative_eq!(session.scale, 2.0);
}

#[tokio::test]
async fn unknown_map_scale_keeps_default_scale() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::TwoDashes)),
            anchor(0.0, 0.0),
        ],
    )
    .await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_relative_eq!(session.scale, 1.0);
}

#[tokio::test]
async fn next_shape_restarts_at_default_scale_without_map_scale() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
            menu(MenuAction::Longer),
            menu(MenuAction::Finish),
            anchor(20.0, 0.0),
        ],
    )
    .await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.anchor_count(), 1);
    assert_relative_eq!(session.scale, 1.0);
}

#[tokio::test]
async fn declined_style_change_keeps_shape() {
    let mut r = runner();
    r.host_mut().answer_next_confirm(false);
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::single(ArrowStyle::Straight)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
            menu(MenuAction::ChangeStyle {
                style: ArrowStyle::Zigzag,
            }),
        ],
    )
    .await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.descriptor().style, ArrowStyle::Straight);
    assert_eq!(session.anchor_count(), 2);
    assert_eq!(r.host().feature_count(), 1);
}

#[tokio::test]
async fn confirmed_style_change_discards_shape() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::single(ArrowStyle::Straight)),
            anchor(0.0, 0.0),
            anchor(10.0, 0.0),
            menu(MenuAction::ChangeStyle {
                style: ArrowStyle::RoadTic,
            }),
        ],
    )
    .await;

    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.descriptor().category, ArrowCategory::RoadTic);
    assert!(!session.has_anchors());
    assert_eq!(r.host().feature_count(), 0);
}

#[tokio::test]
async fn style_change_without_anchors_needs_no_confirmation() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::single(ArrowStyle::Straight)),
            menu(MenuAction::ChangeStyle {
                style: ArrowStyle::Leader,
            }),
        ],
    )
    .await;

    assert_eq!(
        count_events(r.host(), |e| matches!(e, HostEvent::Confirmed { .. })),
        0
    );
    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.descriptor().style, ArrowStyle::Leader);
}

// ═══════════════════════════════════════════════════════════════════
// Fehlerfälle
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn host_failure_aborts_remaining_requests() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            anchor(0.0, 0.0),
        ],
    )
    .await;
    r.host_mut().fail_next("create");

    let result = r.dispatch(anchor(10.0, 0.0)).await;

    match result {
        Err(ArrowError::HostOperationFailed { operation, .. }) => assert_eq!(operation, "create"),
        other => panic!("Unerwartetes Ergebnis: {other:?}"),
    }
    assert_eq!(r.host().feature_count(), 0);
    assert!(r.host().selection().is_empty());
    assert_eq!(r.host().reported_errors().len(), 1);
}

#[tokio::test]
async fn degenerate_anchors_report_geometry_error_without_host_edits() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::NoDashes)),
            anchor(3.0, 3.0),
        ],
    )
    .await;

    let result = r.dispatch(anchor(3.0, 3.0)).await;

    assert!(matches!(
        result,
        Err(ArrowError::GeometryConstructionError { .. })
    ));
    assert_eq!(r.host().feature_count(), 0);
    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.anchor_count(), 1);
    assert!(!session.offset_mode());

    r.dispatch(anchor(13.0, 3.0))
        .await
        .expect("Gültiger Klick nach Fehler erwartet");

    assert_eq!(r.host().feature_count(), 2);
    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.anchors(), &[DVec2::new(3.0, 3.0), DVec2::new(13.0, 3.0)]);
    assert!(session.offset_mode());
}

#[tokio::test]
async fn straight_arrow_recovers_after_double_click_on_start_point() {
    let mut r = runner();
    dispatch_all(
        &mut r,
        vec![
            activate(ArrowDescriptor::template(ArrowCategory::Straight)),
            anchor(0.0, 0.0),
        ],
    )
    .await;

    assert!(r.dispatch(anchor(0.0, 0.0)).await.is_err());
    r.dispatch(anchor(10.0, 0.0))
        .await
        .expect("Gültiger Klick nach Fehler erwartet");

    assert_eq!(r.host().feature_count(), 2);
    let session = r.state().session.as_ref().expect("Sitzung erwartet");
    assert_eq!(session.anchors(), &[DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)]);
}

// ═══════════════════════════════════════════════════════════════════
// Kanal und Reset-Überholung
// ═══════════════════════════════════════════════════════════════════

#[test]
fn supersede_drops_anchors_queued_before_reset() {
    let mut queue: VecDeque<ArrowIntent> = VecDeque::from(vec![
        anchor(0.0, 0.0),
        menu(MenuAction::Longer),
        menu(MenuAction::ToggleSelectNewArrows),
        menu(MenuAction::Cancel),
        anchor(1.0, 1.0),
    ]);

    let dropped = supersede_before_reset(&mut queue);

    assert_eq!(dropped, 2);
    assert_eq!(
        Vec::from(queue),
        vec![
            menu(MenuAction::ToggleSelectNewArrows),
            menu(MenuAction::Cancel),
            anchor(1.0, 1.0),
        ]
    );
}

#[test]
fn supersede_without_reset_keeps_queue() {
    let mut queue = VecDeque::from(vec![anchor(0.0, 0.0), anchor(1.0, 0.0)]);

    assert_eq!(supersede_before_reset(&mut queue), 0);
    assert_eq!(queue.len(), 2);
}

#[tokio::test]
async fn run_drains_channel_and_skips_superseded_anchors() {
    let (handle, receiver) = intent_channel(16);
    handle
        .send(activate(ArrowDescriptor::template(ArrowCategory::Straight)))
        .await
        .expect("Senden erwartet");
    for intent in [
        anchor(0.0, 0.0),
        anchor(10.0, 0.0),
        menu(MenuAction::Cancel),
        anchor(2.0, 2.0),
    ] {
        handle.try_send(intent).expect("Senden erwartet");
    }
    drop(handle);

    let (state, host) = runner().run(receiver).await;

    assert_eq!(host.feature_count(), 0);
    assert_eq!(
        count_events(&host, |e| matches!(e, HostEvent::Created(_))),
        0
    );
    assert_eq!(state.anchor_count(), 1);
}

use super::*;
use crate::core::{ArrowStyle, Segment};
use crate::xml::StaticTemplateSource;
use approx::assert_relative_eq;
use glam::DVec2;
use std::f64::consts::FRAC_PI_3;

const EPS: f64 = 1e-9;

fn params() -> ArrowParams {
    ArrowParams {
        scale: 1.0,
        offset: 0.0,
        zigzag_width: 5.0,
        zigzag_curve: 5.0,
        zigzag_position: 10.0,
        flip_arrows: false,
        switch_arrowheads: false,
    }
}

/// Store mit einem einzigen Template-Element.
fn store_with(name: &str, segments: &[&str]) -> TemplateStore {
    let records: String = segments
        .iter()
        .map(|points| format!(r#"<segment points="{points}"/>"#))
        .collect();
    let xml = format!(
        r#"<arrowDefs><arrowDef><{name}><segments count="{}">{records}</segments></{name}></arrowDef></arrowDefs>"#,
        segments.len()
    );
    TemplateStore::new(Box::new(StaticTemplateSource::new(xml)))
}

fn assert_point(actual: DVec2, expected: DVec2) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
}

fn straight() -> ArrowDescriptor {
    ArrowDescriptor::template(ArrowCategory::Straight)
}

// ═══════════════════════════════════════════════════════════════════
// Template-Anpassung
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_straight_along_x_keeps_template() {
    let store = store_with("straight", &["0,0,5,2"]);
    let anchors = [DVec2::ZERO, DVec2::new(10.0, 0.0)];

    let geometry =
        build_arrow_geometry(&straight(), &anchors, &params(), &store).expect("Geometrie erwartet");

    assert_eq!(geometry.first.len(), 1);
    assert_point(geometry.first.segments()[0].start(), DVec2::ZERO);
    assert_point(geometry.first.segments()[0].end(), DVec2::new(5.0, 2.0));

    let second = geometry.second.expect("rechter Pfeil erwartet");
    assert_point(second.segments()[0].start(), DVec2::new(10.0, 0.0));
    assert_point(second.segments()[0].end(), DVec2::new(5.0, 2.0));
}

#[test]
fn test_straight_along_y_rotates_template() {
    let store = store_with("straight", &["0,0,5,2"]);
    let anchors = [DVec2::ZERO, DVec2::new(0.0, 10.0)];

    let geometry =
        build_arrow_geometry(&straight(), &anchors, &params(), &store).expect("Geometrie erwartet");

    assert_point(geometry.first.segments()[0].end(), DVec2::new(-2.0, 5.0));
}

#[test]
fn test_first_points_pinned_to_anchors() {
    let store = TemplateStore::embedded();
    let anchors = [DVec2::new(-3.5, 7.25), DVec2::new(12.0, -4.0)];
    let categories = [
        ArrowCategory::Straight,
        ArrowCategory::LandHook,
        ArrowCategory::NoDashes,
        ArrowCategory::FourDashes,
    ];

    for category in categories {
        for scale in [0.1, 1.0, 8.0] {
            let p = ArrowParams { scale, ..params() };
            let geometry =
                build_arrow_geometry(&ArrowDescriptor::template(category), &anchors, &p, &store)
                    .unwrap_or_else(|e| panic!("{category:?}: {e}"));
            assert_point(geometry.first.first_point().expect("Start"), anchors[0]);
            let second = geometry.second.expect("rechter Pfeil erwartet");
            assert_point(second.first_point().expect("Start"), anchors[1]);
        }
    }
}

#[test]
fn test_rotating_anchor_pair_rotates_geometry() {
    let store = TemplateStore::embedded();
    let a = DVec2::new(3.0, 4.0);
    let b = DVec2::new(13.0, 4.0);
    let b_rotated = a + DVec2::from_angle(FRAC_PI_3).rotate(b - a);
    let descriptor = ArrowDescriptor::template(ArrowCategory::LandHook);

    let base = build_arrow_geometry(&descriptor, &[a, b], &params(), &store)
        .expect("Geometrie erwartet");
    let turned = build_arrow_geometry(&descriptor, &[a, b_rotated], &params(), &store)
        .expect("Geometrie erwartet");

    let expected = base.first.rotated_about(a, FRAC_PI_3);
    for (actual, wanted) in turned.first.vertices().iter().zip(expected.vertices()) {
        assert_point(*actual, wanted);
    }
}

#[test]
fn test_template_size_independent_of_anchor_distance() {
    let store = store_with("straight", &["0,0,0,10"]);
    let near = build_arrow_geometry(
        &straight(),
        &[DVec2::ZERO, DVec2::new(5.0, 0.0)],
        &params(),
        &store,
    )
    .expect("Geometrie erwartet");
    let far = build_arrow_geometry(
        &straight(),
        &[DVec2::ZERO, DVec2::new(50.0, 0.0)],
        &params(),
        &store,
    )
    .expect("Geometrie erwartet");

    assert_relative_eq!(near.first.approx_length(), far.first.approx_length(), epsilon = EPS);
}

#[test]
fn test_offset_doubling_doubles_template_heights() {
    let store = store_with("straight", &["0,1,0,4", "0,4,1,8"]);
    let anchors = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(5.0, 8.0)];

    let at = |offset: f64| {
        let p = ArrowParams { offset, ..params() };
        build_arrow_geometry(&straight(), &anchors, &p, &store)
            .expect("Geometrie erwartet")
            .first
            .vertices()
    };

    // Faktor 1: unverändert (um erstes Start-Y = 1 nach unten verschoben)
    let normal = at(8.0);
    assert_point(normal[1], DVec2::new(0.0, 3.0));
    assert_point(normal[2], DVec2::new(1.0, 7.0));

    // Faktor 2: alle Y außer dem ersten Start-Y verdoppelt
    let doubled = at(16.0);
    assert_point(doubled[0], DVec2::ZERO);
    assert_point(doubled[1], DVec2::new(0.0, 7.0));
    assert_point(doubled[2], DVec2::new(1.0, 15.0));
}

#[test]
fn test_offset_reaches_offset_line_with_scale() {
    let store = store_with("curved0", &["0,0,0,5", "0,5,2,10"]);
    let anchors = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(4.0, -6.0)];
    let p = ArrowParams {
        scale: 4.0,
        offset: signed_offset(anchors[0], anchors[1], anchors[2]),
        ..params()
    };

    let geometry = build_arrow_geometry(
        &ArrowDescriptor::template(ArrowCategory::NoDashes),
        &anchors,
        &p,
        &store,
    )
    .expect("Geometrie erwartet");

    let end = geometry.first.last_point().expect("Ende");
    assert_relative_eq!(end.y, -6.0, epsilon = EPS);
}

#[test]
fn test_land_hook_right_arrow_inverts_last_y() {
    let store = store_with("landHook", &["0,0,0,6", "0,6,2,8"]);
    let geometry = build_arrow_geometry(
        &ArrowDescriptor::template(ArrowCategory::LandHook),
        &[DVec2::ZERO, DVec2::new(10.0, 0.0)],
        &params(),
        &store,
    )
    .expect("Geometrie erwartet");

    let second = geometry.second.expect("rechter Pfeil erwartet");
    assert_point(second.segments()[0].end(), DVec2::new(10.0, 6.0));
    assert_point(second.segments()[1].end(), DVec2::new(8.0, -8.0));
}

#[test]
fn test_flip_turns_straight_arrows_around() {
    let store = store_with("straight", &["0,0,5,2"]);
    let p = ArrowParams {
        flip_arrows: true,
        ..params()
    };
    let geometry = build_arrow_geometry(
        &straight(),
        &[DVec2::ZERO, DVec2::new(10.0, 0.0)],
        &p,
        &store,
    )
    .expect("Geometrie erwartet");

    assert_point(geometry.first.segments()[0].end(), DVec2::new(-5.0, -2.0));
    let second = geometry.second.expect("rechter Pfeil erwartet");
    assert_point(second.segments()[0].end(), DVec2::new(15.0, -2.0));
}

#[test]
fn test_switch_arrowheads_reverses_vertices() {
    let store = TemplateStore::embedded();
    let anchors = [DVec2::ZERO, DVec2::new(8.0, 3.0)];
    let descriptor = ArrowDescriptor::template(ArrowCategory::TwoDashes);

    let normal = build_arrow_geometry(&descriptor, &anchors, &params(), &store)
        .expect("Geometrie erwartet");
    let switched = build_arrow_geometry(
        &descriptor,
        &anchors,
        &ArrowParams {
            switch_arrowheads: true,
            ..params()
        },
        &store,
    )
    .expect("Geometrie erwartet");

    let mut expected = normal.first.vertices();
    expected.reverse();
    assert_eq!(switched.first.vertices(), expected);
    assert_eq!(switched.first.reversed(), normal.first);
}

#[test]
fn test_road_tic_has_single_polyline() {
    let geometry = build_arrow_geometry(
        &ArrowDescriptor::single(ArrowStyle::RoadTic),
        &[DVec2::ZERO, DVec2::new(0.0, 5.0)],
        &params(),
        &TemplateStore::embedded(),
    )
    .expect("Geometrie erwartet");

    assert!(geometry.second.is_none());
    assert_eq!(geometry.slots().count(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Fehlerfälle
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_identical_anchors_fail() {
    let result = build_arrow_geometry(
        &straight(),
        &[DVec2::ONE, DVec2::ONE],
        &params(),
        &TemplateStore::embedded(),
    );
    assert!(matches!(
        result,
        Err(ArrowError::GeometryConstructionError { .. })
    ));
}

#[test]
fn test_single_anchor_fails() {
    let result = build_arrow_geometry(
        &ArrowDescriptor::single(ArrowStyle::Zigzag),
        &[DVec2::ONE],
        &params(),
        &TemplateStore::embedded(),
    );
    assert!(matches!(
        result,
        Err(ArrowError::GeometryConstructionError { .. })
    ));
}

#[test]
fn test_zero_scale_fails() {
    let p = ArrowParams {
        scale: 0.0,
        ..params()
    };
    let result = build_arrow_geometry(
        &straight(),
        &[DVec2::ZERO, DVec2::X],
        &p,
        &TemplateStore::embedded(),
    );
    assert!(matches!(
        result,
        Err(ArrowError::GeometryConstructionError { .. })
    ));
}

#[test]
fn test_offset_with_flat_template_fails() {
    let store = store_with("straight", &["0,0,5,0"]);
    let result = build_arrow_geometry(
        &straight(),
        &[DVec2::ZERO, DVec2::X, DVec2::ONE],
        &ArrowParams {
            offset: 2.0,
            ..params()
        },
        &store,
    );
    assert!(matches!(
        result,
        Err(ArrowError::GeometryConstructionError { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════
// Zickzack und Einzelpfeile
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_zigzag_spans_anchor_pair() {
    let a = DVec2::new(2.0, -1.0);
    let b = DVec2::new(-10.0, 14.0);
    let line = build_zigzag(&[a, b], &params()).expect("Zickzack erwartet");

    assert_eq!(line.len(), 3);
    assert!(matches!(line.segments()[1], Segment::CubicBezier { .. }));
    assert_point(line.first_point().expect("Start"), a);
    assert_point(line.last_point().expect("Ende"), b);
}

#[test]
fn test_zigzag_scales_with_anchor_distance() {
    let near = build_zigzag(&[DVec2::ZERO, DVec2::new(20.0, 0.0)], &params())
        .expect("Zickzack erwartet")
        .densified(16);
    let far = build_zigzag(&[DVec2::ZERO, DVec2::new(60.0, 0.0)], &params())
        .expect("Zickzack erwartet")
        .densified(16);

    for (n, f) in near.iter().zip(&far) {
        assert_point(*f, *n * 3.0);
    }
}

#[test]
fn test_zigzag_negative_curve_behaves_like_zero() {
    let negative = ArrowParams {
        zigzag_curve: -3.0,
        ..params()
    };
    let zero = ArrowParams {
        zigzag_curve: 0.0,
        ..params()
    };
    assert_eq!(zigzag_template(&negative), zigzag_template(&zero));
}

#[test]
fn test_zigzag_flip_mirrors_offset() {
    let flipped = zigzag_template(&ArrowParams {
        flip_arrows: true,
        ..params()
    });
    assert_eq!(flipped.last_point(), Some(DVec2::new(20.0, -5.0)));
}

#[test]
fn test_leader_uses_all_three_anchors() {
    let anchors = [DVec2::ZERO, DVec2::new(5.0, 5.0), DVec2::new(10.0, 5.0)];
    let geometry = build_arrow_geometry(
        &ArrowDescriptor::single(ArrowStyle::Leader),
        &anchors,
        &params(),
        &TemplateStore::embedded(),
    )
    .expect("Geometrie erwartet");
    assert_eq!(geometry.first.vertices(), anchors.to_vec());

    let straight = build_arrow_geometry(
        &ArrowDescriptor::single(ArrowStyle::Straight),
        &anchors,
        &ArrowParams {
            switch_arrowheads: true,
            ..params()
        },
        &TemplateStore::embedded(),
    )
    .expect("Geometrie erwartet");
    assert_eq!(straight.first.vertices(), vec![anchors[1], anchors[0]]);
}

#[test]
fn test_signed_offset_sides() {
    let a = DVec2::ZERO;
    let b = DVec2::new(10.0, 0.0);
    assert_relative_eq!(signed_offset(a, b, DVec2::new(4.0, 3.0)), 3.0, epsilon = EPS);
    assert_relative_eq!(signed_offset(a, b, DVec2::new(4.0, -3.0)), -3.0, epsilon = EPS);
    // Vor A: tangential verlängert
    assert_relative_eq!(signed_offset(a, b, DVec2::new(-5.0, 2.0)), 2.0, epsilon = EPS);
    // Hinter B: Abstand zu B
    assert_relative_eq!(signed_offset(a, b, DVec2::new(13.0, 4.0)), 5.0, epsilon = EPS);
}

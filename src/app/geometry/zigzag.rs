//! Zickzack-Einzelpfeil: Gerade, Bézier-Versatz, Gerade.

use super::{bearing, reference_pair, ArrowParams};
use crate::core::{ArrowResult, Polyline, Segment};
use crate::shared::options::ZIGZAG_REFERENCE_LENGTH;
use glam::DVec2;

/// Zickzack im Template-Raum auf der Referenzstrecke (0,0)→(20, ±Breite).
///
/// Negative Krümmung wird hier auf 0 begrenzt.
pub fn zigzag_template(params: &ArrowParams) -> Polyline {
    let sign = if params.flip_arrows { -1.0 } else { 1.0 };
    let curve = params.zigzag_curve.max(0.0);
    let width = params.zigzag_width * sign;
    let position = params.zigzag_position;

    let p1 = DVec2::ZERO;
    let p2 = DVec2::new(position, 0.0);
    let p3 = DVec2::new(position, width);
    let p4 = DVec2::new(ZIGZAG_REFERENCE_LENGTH, width);

    Polyline::new(vec![
        Segment::Line { from: p1, to: p2 },
        Segment::CubicBezier {
            from: p2,
            ctrl1: DVec2::new(p2.x + curve, p2.y),
            ctrl2: DVec2::new(p3.x - curve, p3.y),
            to: p3,
        },
        Segment::Line { from: p3, to: p4 },
    ])
}

/// Legt den Zickzack so auf die Anker, dass er auf A beginnt und auf B endet.
pub fn build_zigzag(anchors: &[DVec2], params: &ArrowParams) -> ArrowResult<Polyline> {
    let (a, b) = reference_pair(anchors)?;

    let template = zigzag_template(params);
    let start = DVec2::ZERO;
    let end = template.last_point().unwrap_or(start);

    let rotation = bearing(a, b) - bearing(start, end);
    let scale = a.distance(b) / start.distance(end);

    let fitted = template
        .rotated_about(start, rotation)
        .scaled_about(start, scale)
        .translated(a - start);

    Ok(if params.switch_arrowheads {
        fitted.reversed()
    } else {
        fitted
    })
}

//! Symmetrische Zwei-Pfeil-Konstruktion aus einem Datei-Template.

use super::{bearing, reference_pair, ArrowGeometry, ArrowParams, DEGENERATE_LENGTH};
use crate::core::{ArrowCategory, ArrowError, ArrowResult, Polyline, Segment};
use crate::xml::TemplateDefinition;
use glam::DVec2;
use std::f64::consts::PI;

/// Passt ein Template an die Anker an.
///
/// Linker Pfeil beginnt auf `anchors[0]`, der an X gespiegelte rechte Pfeil
/// auf `anchors[1]`. Mit drei Ankern wird die Template-Höhe so gestreckt,
/// dass das letzte Segment genau auf dem Offset endet.
pub fn fit_template(
    category: ArrowCategory,
    template: &TemplateDefinition,
    anchors: &[DVec2],
    params: &ArrowParams,
) -> ArrowResult<ArrowGeometry> {
    let (a, b) = reference_pair(anchors)?;
    if !(params.scale > 0.0 && params.scale.is_finite()) {
        return Err(ArrowError::geometry(format!(
            "Maßstab muss positiv sein, ist {}",
            params.scale
        )));
    }
    let Some(last) = template.segments.last() else {
        return Err(ArrowError::geometry(format!(
            "Template '{}' enthält keine Segmente",
            template.name
        )));
    };

    let y_factor = if anchors.len() >= 3 {
        if last.to.y.abs() < DEGENERATE_LENGTH {
            return Err(ArrowError::geometry(format!(
                "Template '{}' endet auf Y = 0, Offset nicht skalierbar",
                template.name
            )));
        }
        params.offset / last.to.y / params.scale
    } else {
        1.0
    };

    let left = stretched_template(template, y_factor);
    let angle = bearing(a, b);

    let mut first = place(&left, angle, params.scale, a);
    let mut second = (category != ArrowCategory::RoadTic).then(|| {
        let right = mirrored(&left, category == ArrowCategory::LandHook);
        place(&right, angle, params.scale, b)
    });

    if params.flip_arrows && category == ArrowCategory::Straight {
        first = turned_around(&first);
        second = second.as_ref().map(turned_around);
    }

    if params.switch_arrowheads {
        first = first.reversed();
        second = second.as_ref().map(Polyline::reversed);
    }

    Ok(ArrowGeometry { first, second })
}

/// Template-Polylinie; alle Y außer dem ersten Start-Y werden mit `y_factor` gestreckt.
fn stretched_template(template: &TemplateDefinition, y_factor: f64) -> Polyline {
    let segments = template
        .segments
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let from_y = if index == 0 { s.from.y } else { s.from.y * y_factor };
            Segment::Line {
                from: DVec2::new(s.from.x, from_y),
                to: DVec2::new(s.to.x, s.to.y * y_factor),
            }
        })
        .collect();
    Polyline::new(segments)
}

/// Spiegelung an der Y-Achse; bei Landhaken zusätzlich End-Y des letzten Segments negiert.
fn mirrored(left: &Polyline, invert_last_to_y: bool) -> Polyline {
    let count = left.len();
    let segments = left
        .segments()
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let from = segment.start();
            let to = segment.end();
            let to_y = if invert_last_to_y && index + 1 == count {
                -to.y
            } else {
                to.y
            };
            Segment::Line {
                from: DVec2::new(-from.x, from.y),
                to: DVec2::new(-to.x, to_y),
            }
        })
        .collect();
    Polyline::new(segments)
}

/// Rotation → Skalierung → Translation des ersten Punkts auf `target`.
fn place(line: &Polyline, angle: f64, scale: f64, target: DVec2) -> Polyline {
    let origin = line.first_point().unwrap_or(DVec2::ZERO);
    let rotated = line.rotated_about(origin, angle);
    let scaled = rotated.scaled_about(origin, scale);
    scaled.translated(target - origin)
}

/// 180°-Drehung um den eigenen ersten Punkt.
fn turned_around(line: &Polyline) -> Polyline {
    let origin = line.first_point().unwrap_or(DVec2::ZERO);
    line.rotated_about(origin, PI)
}

//! Gerader Einzelpfeil und Führungslinie: die Anker sind die Stützpunkte.

use super::{reference_pair, ArrowParams};
use crate::core::{ArrowResult, ArrowStyle, Polyline};
use glam::DVec2;

pub(super) fn build_single(
    style: ArrowStyle,
    anchors: &[DVec2],
    params: &ArrowParams,
) -> ArrowResult<Polyline> {
    reference_pair(anchors)?;

    let vertices = match style {
        ArrowStyle::Leader => &anchors[..anchors.len().min(3)],
        _ => &anchors[..2],
    };
    let line = Polyline::from_vertices(vertices);

    Ok(if params.switch_arrowheads {
        line.reversed()
    } else {
        line
    })
}

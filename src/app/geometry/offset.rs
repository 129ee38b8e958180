//! Vorzeichenbehafteter Abstand des Offset-Ankers zur Basislinie.

use super::DEGENERATE_LENGTH;
use glam::DVec2;

/// Abstand von `p` zur Strecke A→B, über A hinaus tangential verlängert.
///
/// Jenseits von B zählt der Abstand zu B. Positiv links von A→B, negativ rechts.
pub fn signed_offset(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    let direction = b - a;
    let length_sq = direction.length_squared();
    if length_sq < DEGENERATE_LENGTH * DEGENERATE_LENGTH {
        return a.distance(p);
    }

    let t = ((p - a).dot(direction) / length_sq).min(1.0);
    let nearest = a + direction * t;
    let distance = p.distance(nearest);

    if direction.perp_dot(p - a) < 0.0 {
        -distance
    } else {
        distance
    }
}

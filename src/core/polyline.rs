//! Polylinie aus geraden und kubischen Bézier-Segmenten.

use glam::{DAffine2, DVec2};
use serde::{Deserialize, Serialize};

/// Einzelnes Segment einer Polylinie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Gerade Strecke
    Line { from: DVec2, to: DVec2 },
    /// Kubische Bézier-Kurve mit zwei Steuerpunkten
    CubicBezier {
        from: DVec2,
        ctrl1: DVec2,
        ctrl2: DVec2,
        to: DVec2,
    },
}

impl Segment {
    /// Startpunkt des Segments.
    pub fn start(&self) -> DVec2 {
        match self {
            Self::Line { from, .. } | Self::CubicBezier { from, .. } => *from,
        }
    }

    /// Endpunkt des Segments.
    pub fn end(&self) -> DVec2 {
        match self {
            Self::Line { to, .. } | Self::CubicBezier { to, .. } => *to,
        }
    }

    /// Wendet eine affine Transformation auf alle Punkte an (inkl. Steuerpunkte).
    pub fn transformed(&self, affine: &DAffine2) -> Self {
        match *self {
            Self::Line { from, to } => Self::Line {
                from: affine.transform_point2(from),
                to: affine.transform_point2(to),
            },
            Self::CubicBezier {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Self::CubicBezier {
                from: affine.transform_point2(from),
                ctrl1: affine.transform_point2(ctrl1),
                ctrl2: affine.transform_point2(ctrl2),
                to: affine.transform_point2(to),
            },
        }
    }

    /// Segment mit umgekehrter Laufrichtung.
    pub fn reversed(&self) -> Self {
        match *self {
            Self::Line { from, to } => Self::Line { from: to, to: from },
            Self::CubicBezier {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Self::CubicBezier {
                from: to,
                ctrl1: ctrl2,
                ctrl2: ctrl1,
                to: from,
            },
        }
    }

    /// Punkt bei Parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        match *self {
            Self::Line { from, to } => from.lerp(to, t),
            Self::CubicBezier {
                from,
                ctrl1,
                ctrl2,
                to,
            } => cubic_bezier(from, ctrl1, ctrl2, to, t),
        }
    }
}

/// Kubische Bézier-Kurve: B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    p0 * (inv2 * inv) + p1 * (3.0 * inv2 * t) + p2 * (3.0 * inv * t2) + p3 * (t2 * t)
}

/// Geordnete Folge von Segmenten; Ergebnis der Geometrie-Engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    segments: Vec<Segment>,
}

impl Polyline {
    /// Erstellt eine Polylinie aus Segmenten.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Verbindet aufeinanderfolgende Punkte mit geraden Segmenten.
    pub fn from_vertices(points: &[DVec2]) -> Self {
        let segments = points
            .windows(2)
            .map(|pair| Segment::Line {
                from: pair[0],
                to: pair[1],
            })
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Anzahl der Segmente.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn first_point(&self) -> Option<DVec2> {
        self.segments.first().map(Segment::start)
    }

    pub fn last_point(&self) -> Option<DVec2> {
        self.segments.last().map(Segment::end)
    }

    /// Stützpunkte: Start des ersten Segments, danach jedes Segment-Ende.
    ///
    /// Steuerpunkte von Bézier-Segmenten zählen nicht als Stützpunkte.
    pub fn vertices(&self) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        if let Some(first) = self.segments.first() {
            points.push(first.start());
        }
        points.extend(self.segments.iter().map(Segment::end));
        points
    }

    /// Wendet eine affine Transformation auf die gesamte Polylinie an.
    pub fn transformed(&self, affine: &DAffine2) -> Self {
        Self {
            segments: self.segments.iter().map(|s| s.transformed(affine)).collect(),
        }
    }

    /// Rotation um `pivot` (Radiant, gegen den Uhrzeigersinn).
    pub fn rotated_about(&self, pivot: DVec2, angle: f64) -> Self {
        let affine = DAffine2::from_translation(pivot)
            * DAffine2::from_angle(angle)
            * DAffine2::from_translation(-pivot);
        self.transformed(&affine)
    }

    /// Uniforme Skalierung um `pivot`.
    pub fn scaled_about(&self, pivot: DVec2, factor: f64) -> Self {
        let affine = DAffine2::from_translation(pivot)
            * DAffine2::from_scale(DVec2::splat(factor))
            * DAffine2::from_translation(-pivot);
        self.transformed(&affine)
    }

    pub fn translated(&self, delta: DVec2) -> Self {
        self.transformed(&DAffine2::from_translation(delta))
    }

    /// Umgekehrte Punktreihenfolge (Pfeilspitzen tauschen).
    pub fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(Segment::reversed).collect(),
        }
    }

    /// Abtastung als Punktliste; Bézier-Segmente mit `samples_per_curve` Schritten.
    pub fn densified(&self, samples_per_curve: usize) -> Vec<DVec2> {
        let samples = samples_per_curve.max(1);
        let mut points = Vec::new();
        if let Some(first) = self.first_point() {
            points.push(first);
        }
        for segment in &self.segments {
            match segment {
                Segment::Line { to, .. } => points.push(*to),
                Segment::CubicBezier { .. } => {
                    points.extend((1..=samples).map(|i| segment.point_at(i as f64 / samples as f64)));
                }
            }
        }
        points
    }

    /// Approximierte Länge (Bézier über 64 Abtastschritte).
    pub fn approx_length(&self) -> f64 {
        self.densified(64)
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }
}

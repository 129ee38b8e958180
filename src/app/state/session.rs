//! Konstruktions-Sitzung: Anker, Formparameter und Objekt-ID-Slots einer Form.

use crate::app::geometry::ArrowParams;
use crate::core::{ArrowDescriptor, CategoryProfile, ObjectIdSlots};
use crate::shared::ArrowOptions;
use glam::DVec2;

/// Wie ein neuer Klick verarbeitet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPlacement {
    /// Anker anhängen
    Append,
    /// Endanker an `index` ersetzen ("Endpunkt ziehen")
    ReplaceEndPoint { index: usize },
    /// Offset-Anker (Index 2) ersetzen
    ReplaceOffsetAnchor,
    /// Obergrenze erreicht, kein Modus aktiv
    Ignore,
}

/// Zustand der Form, die gerade konstruiert wird.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionSession {
    descriptor: ArrowDescriptor,
    anchors: Vec<DVec2>,
    pub scale: f64,
    /// Vorzeichenbehafteter Abstand des Offset-Ankers
    pub offset: f64,
    pub zigzag_width: f64,
    pub zigzag_curve: f64,
    pub zigzag_position: f64,
    pub flip_arrows: bool,
    pub switch_arrowheads: bool,
    pub select_new_arrows: bool,
    update_end_point: bool,
    update_offset: bool,
    pub object_ids: ObjectIdSlots,
}

impl ConstructionSession {
    /// Neue Sitzung mit Startwerten aus den Optionen.
    pub fn new(descriptor: ArrowDescriptor, options: &ArrowOptions) -> Self {
        Self {
            descriptor,
            anchors: Vec::with_capacity(3),
            scale: options.default_scale,
            offset: 0.0,
            zigzag_width: options.zigzag_width,
            zigzag_curve: options.zigzag_curve,
            zigzag_position: options.zigzag_position,
            flip_arrows: options.flip_arrows,
            switch_arrowheads: options.switch_arrowheads,
            select_new_arrows: options.select_new_arrows,
            update_end_point: false,
            update_offset: false,
            object_ids: ObjectIdSlots::default(),
        }
    }

    pub fn descriptor(&self) -> ArrowDescriptor {
        self.descriptor
    }

    /// Ersetzt den Deskriptor als Ganzes.
    pub fn replace_descriptor(&mut self, descriptor: ArrowDescriptor) {
        self.descriptor = descriptor;
    }

    pub fn profile(&self) -> CategoryProfile {
        self.descriptor.profile()
    }

    pub fn anchors(&self) -> &[DVec2] {
        &self.anchors
    }

    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    pub fn has_anchors(&self) -> bool {
        !self.anchors.is_empty()
    }

    // ── Modi ────────────────────────────────────────────────────

    pub fn update_end_point(&self) -> bool {
        self.update_end_point
    }

    pub fn update_offset(&self) -> bool {
        self.update_offset
    }

    /// Offset-Modus ist nur bei Kategorien mit Offset-Anker wirksam.
    pub fn offset_mode(&self) -> bool {
        self.update_offset && self.profile().supports_offset()
    }

    /// Endpunkt-Modus umschalten; der Offset-Modus nimmt den Gegenwert an.
    pub fn toggle_update_end_point(&mut self) {
        self.update_end_point = !self.update_end_point;
        self.update_offset = !self.update_end_point;
    }

    /// Offset-Modus umschalten; der Endpunkt-Modus nimmt den Gegenwert an.
    pub fn toggle_update_offset(&mut self) {
        self.update_offset = !self.update_offset;
        self.update_end_point = !self.update_offset;
    }

    pub fn enter_offset_mode(&mut self) {
        self.update_offset = true;
        self.update_end_point = false;
    }

    pub fn clear_update_modes(&mut self) {
        self.update_end_point = false;
        self.update_offset = false;
    }

    // ── Anker ───────────────────────────────────────────────────

    /// Aktuelle Anker-Obergrenze (abhängig vom Offset-Modus).
    pub fn anchor_cap(&self) -> usize {
        self.profile().max_anchors(self.offset_mode())
    }

    /// Index des Endankers: bei Templates der zweite Basisanker, sonst der letzte.
    pub fn end_anchor_index(&self) -> usize {
        if self.descriptor.is_template_based() {
            1
        } else {
            self.anchors.len().saturating_sub(1)
        }
    }

    /// Entscheidet, was ein weiterer Klick bewirkt.
    pub fn classify_anchor(&self) -> AnchorPlacement {
        let count = self.anchors.len();
        if count >= 2 && self.update_end_point {
            AnchorPlacement::ReplaceEndPoint {
                index: self.end_anchor_index(),
            }
        } else if count < self.anchor_cap() {
            AnchorPlacement::Append
        } else if count == 3 && self.offset_mode() {
            AnchorPlacement::ReplaceOffsetAnchor
        } else {
            AnchorPlacement::Ignore
        }
    }

    /// Übernimmt den Punkt gemäß Klassifizierung.
    pub fn apply_placement(&mut self, placement: AnchorPlacement, point: DVec2) {
        match placement {
            AnchorPlacement::Append => self.anchors.push(point),
            AnchorPlacement::ReplaceEndPoint { index } => {
                if let Some(anchor) = self.anchors.get_mut(index) {
                    *anchor = point;
                }
            }
            AnchorPlacement::ReplaceOffsetAnchor => {
                if let Some(anchor) = self.anchors.get_mut(2) {
                    *anchor = point;
                }
            }
            AnchorPlacement::Ignore => {}
        }
    }

    /// Form verwerfen: Anker, Modi und Slots zurücksetzen. Parameter bleiben.
    pub fn clear_shape(&mut self) {
        self.anchors.clear();
        self.clear_update_modes();
        self.object_ids.clear();
        self.offset = 0.0;
    }

    /// Geometrie kann erst ab zwei Ankern entstehen.
    pub fn has_geometry(&self) -> bool {
        self.anchors.len() >= 2
    }

    /// Formparameter für die Geometrie-Engine.
    pub fn params(&self) -> ArrowParams {
        ArrowParams {
            scale: self.scale,
            offset: self.offset,
            zigzag_width: self.zigzag_width,
            zigzag_curve: self.zigzag_curve,
            zigzag_position: self.zigzag_position,
            flip_arrows: self.flip_arrows,
            switch_arrowheads: self.switch_arrowheads,
        }
    }
}

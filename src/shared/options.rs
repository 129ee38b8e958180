//! Zentrale Konfiguration der Pfeil-Werkzeuge.
//!
//! `ArrowOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Maßstab ─────────────────────────────────────────────────────────

/// Standard-Pfeilmaßstab, solange weder Menü noch Karte einen liefern.
pub const ARROW_SCALE_DEFAULT: f64 = 1.0;
/// Kartenmaßstab / Divisor = Pfeilmaßstab (1:1200 → 1.0).
pub const MAP_SCALE_DIVISOR: f64 = 1200.0;
/// Faktor für "Kürzer".
pub const SHORTER_FACTOR: f64 = 0.9;
/// Faktor für "Länger".
pub const LONGER_FACTOR: f64 = 1.2;

// ── Zickzack ────────────────────────────────────────────────────────

/// Standard-Breite des Zickzack-Versatzes.
pub const ZIGZAG_WIDTH_DEFAULT: f64 = 5.0;
/// Standard-Stärke der Bézier-Krümmung.
pub const ZIGZAG_CURVE_DEFAULT: f64 = 5.0;
/// Standard-Position des Versatzes entlang der Referenzlänge 20.
pub const ZIGZAG_POSITION_DEFAULT: f64 = 10.0;
/// Untergrenze der Zickzack-Breite.
pub const ZIGZAG_WIDTH_MIN: f64 = 1.0;
/// Grenzen der Zickzack-Position.
pub const ZIGZAG_POSITION_MIN: f64 = 1.0;
pub const ZIGZAG_POSITION_MAX: f64 = 19.0;
/// Schrittweite für Position (Richtung Start/Ende).
pub const ZIGZAG_POSITION_STEP: f64 = 2.5;
/// Länge der Zickzack-Referenzstrecke im Template-Raum.
pub const ZIGZAG_REFERENCE_LENGTH: f64 = 20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `map_arrow_tools.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowOptions {
    /// Template-Bibliothek; `None` = eingebettete Standard-Bibliothek
    #[serde(default)]
    pub template_file: Option<PathBuf>,
    /// Datei mit den im Projekt erlaubten Maßstäben (eine Ganzzahl pro Zeile)
    #[serde(default)]
    pub required_scales_file: Option<PathBuf>,

    // ── Maßstab ─────────────────────────────────────────────────
    /// Pfeilmaßstab beim Aktivieren eines Werkzeugs
    pub default_scale: f64,
    /// Divisor für den vom Host gemeldeten Kartenmaßstab
    #[serde(default = "default_map_scale_divisor")]
    pub map_scale_divisor: f64,

    // ── Zickzack ────────────────────────────────────────────────
    pub zigzag_width: f64,
    pub zigzag_curve: f64,
    pub zigzag_position: f64,

    // ── Verhalten ───────────────────────────────────────────────
    /// Neu erzeugte Pfeile selektieren
    pub select_new_arrows: bool,
    /// Pfeile beim Aktivieren gespiegelt konstruieren
    #[serde(default)]
    pub flip_arrows: bool,
    /// Pfeilspitzen beim Aktivieren getauscht
    #[serde(default)]
    pub switch_arrowheads: bool,
    /// Anker als temporäre Diagnosepunkte anzeigen (Entwicklung)
    #[serde(default)]
    pub show_diagnostic_points: bool,
}

impl Default for ArrowOptions {
    fn default() -> Self {
        Self {
            template_file: None,
            required_scales_file: None,
            default_scale: ARROW_SCALE_DEFAULT,
            map_scale_divisor: MAP_SCALE_DIVISOR,
            zigzag_width: ZIGZAG_WIDTH_DEFAULT,
            zigzag_curve: ZIGZAG_CURVE_DEFAULT,
            zigzag_position: ZIGZAG_POSITION_DEFAULT,
            select_new_arrows: true,
            flip_arrows: false,
            switch_arrowheads: false,
            show_diagnostic_points: false,
        }
    }
}

fn default_map_scale_divisor() -> f64 {
    MAP_SCALE_DIVISOR
}

impl ArrowOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("map-arrow-tools"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_arrow_tools.toml")
    }

    /// Pfeilmaßstab aus einem Kartenmaßstab (z.B. 1200 → 1.0).
    pub fn arrow_scale_for_map_scale(&self, map_scale: f64) -> f64 {
        map_scale / self.map_scale_divisor
    }
}

//! Maßstabsleiter des Kontextmenüs und projektbezogene Pflicht-Maßstäbe.

use crate::core::{ArrowError, ArrowResult};
use std::path::Path;

/// Eintrag der Maßstabsleiter: Menüwert → Pfeilmaßstab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep {
    /// Menüwert (z.B. 100 für "1:100"), 0 = nicht gesetzt
    pub menu_value: u32,
    pub arrow_scale: f64,
}

impl ScaleStep {
    /// Menü-Beschriftung.
    pub fn label(&self) -> String {
        if self.menu_value == 0 {
            "Maßstab nicht gesetzt".to_string()
        } else {
            format!("Maßstab 1:{}", self.menu_value)
        }
    }
}

/// Feste Maßstabsleiter in Menü-Reihenfolge.
pub const SCALE_LADDER: [ScaleStep; 12] = [
    ScaleStep { menu_value: 0, arrow_scale: 0.0 },
    ScaleStep { menu_value: 10, arrow_scale: 0.1 },
    ScaleStep { menu_value: 20, arrow_scale: 0.2 },
    ScaleStep { menu_value: 30, arrow_scale: 0.3 },
    ScaleStep { menu_value: 40, arrow_scale: 0.4 },
    ScaleStep { menu_value: 50, arrow_scale: 0.5 },
    ScaleStep { menu_value: 100, arrow_scale: 1.0 },
    ScaleStep { menu_value: 200, arrow_scale: 2.0 },
    ScaleStep { menu_value: 400, arrow_scale: 4.0 },
    ScaleStep { menu_value: 800, arrow_scale: 8.0 },
    ScaleStep { menu_value: 1000, arrow_scale: 10.0 },
    ScaleStep { menu_value: 2000, arrow_scale: 20.0 },
];

/// Sucht den Leiter-Eintrag zu einem Menüwert.
pub fn scale_step(menu_value: u32) -> Option<ScaleStep> {
    SCALE_LADDER
        .iter()
        .copied()
        .find(|step| step.menu_value == menu_value)
}

/// Leiter-Einträge, die das Menü anbieten darf.
///
/// Der Eintrag 0 wird nie angeboten; eine Pflichtliste filtert die übrigen.
pub fn offered_steps(required: Option<&RequiredScales>) -> impl Iterator<Item = ScaleStep> + '_ {
    SCALE_LADDER
        .iter()
        .copied()
        .filter(|step| step.menu_value != 0)
        .filter(move |step| required.is_none_or(|r| r.contains(step.menu_value)))
}

/// Ganzzahlige Menü-Maßstäbe, die im Projekt erlaubt sind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredScales {
    values: Vec<i64>,
}

impl RequiredScales {
    /// Jede getrimmte Zeile muss eine Ganzzahl sein, sonst ist die ganze Liste ungültig.
    pub fn parse_lines<I, S>(lines: I) -> ArrowResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let value = line.as_ref().trim();
                value
                    .parse::<i64>()
                    .map_err(|_| ArrowError::RequiredScalesFileInvalid {
                        line: index + 1,
                        value: value.to_string(),
                    })
            })
            .collect::<ArrowResult<Vec<i64>>>()?;
        Ok(Self { values })
    }

    /// Liest die Datei; fehlt sie, gibt es keine Einschränkung (`None`).
    pub fn load_from_file(path: &Path) -> ArrowResult<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let scales = Self::parse_lines(content.lines())?;
                log::info!(
                    "{} Pflicht-Maßstäbe geladen aus: {}",
                    scales.values.len(),
                    path.display()
                );
                Ok(Some(scales))
            }
            Err(e) => {
                log::info!(
                    "Keine Pflicht-Maßstäbe ({}): alle Maßstäbe werden angeboten",
                    e
                );
                Ok(None)
            }
        }
    }

    pub fn contains(&self, menu_value: u32) -> bool {
        self.values.contains(&i64::from(menu_value))
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

//! Geteilte Konfiguration: Laufzeit-Optionen und Maßstabsleiter.

pub mod options;
pub mod scales;

pub use options::ArrowOptions;
pub use scales::{offered_steps, scale_step, RequiredScales, ScaleStep, SCALE_LADDER};

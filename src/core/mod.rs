//! Core-Domänentypen: Pfeil-Deskriptor, Polylinien, Feature-Handles, Fehler.

pub mod arrow;
pub mod error;
pub mod feature;
pub mod polyline;

pub use arrow::{ArrowCategory, ArrowDescriptor, ArrowStyle, CategoryProfile, MenuSet};
pub use arrow::OffsetRefinement;
pub use error::{ArrowError, ArrowResult};
pub use feature::{ArrowSlot, FeatureId, ObjectIdSlots};
pub use polyline::{cubic_bezier, Polyline, Segment};

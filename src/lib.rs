//! Map Arrow Tools Library.
//! Konstruktion von Pfeil-Annotationen (Bemaßung, Landhaken, Einzelpfeile) für GIS-Hosts.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;
pub mod xml;

pub use app::{
    ArrowCommand, ArrowController, ArrowHost, ArrowIntent, ArrowRunner, ArrowToolState,
    HostRequest, MemoryHost, MenuAction,
};
pub use core::{
    ArrowCategory, ArrowDescriptor, ArrowError, ArrowResult, ArrowStyle, FeatureId, Polyline,
    Segment,
};
pub use shared::{ArrowOptions, RequiredScales};
pub use xml::{parse_arrow_templates, TemplateStore};

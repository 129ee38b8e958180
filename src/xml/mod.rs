//! XML-Template-Bibliothek: Parser und Template-Store.

pub mod parser;
pub mod store;

pub use parser::{parse_arrow_templates, TemplateDefinition, TemplateLibrary, TemplateSegment};
pub use store::{
    FileTemplateSource, StaticTemplateSource, TemplateSource, TemplateStore, DEFAULT_TEMPLATE_XML,
};

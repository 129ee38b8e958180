//! Template-Store: liefert Templates pro Kategorie aus einer Textquelle.
//!
//! Die Quelle wird bei jedem Aufruf neu gelesen; es gibt keinen Cache.

use super::parser::{parse_arrow_templates, TemplateDefinition};
use crate::core::{ArrowCategory, ArrowError, ArrowResult};
use anyhow::Context;
use std::path::PathBuf;

/// Eingebettete Standard-Bibliothek.
pub const DEFAULT_TEMPLATE_XML: &str = include_str!("../../resources/arrow_templates.xml");

/// Liefert den XML-Text der Template-Bibliothek.
pub trait TemplateSource: Send {
    fn read_template(&self) -> anyhow::Result<String>;

    /// Beschreibung der Quelle für Logs.
    fn describe(&self) -> String;
}

/// Template-Datei im Dateisystem.
#[derive(Debug, Clone)]
pub struct FileTemplateSource {
    pub path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateSource for FileTemplateSource {
    fn read_template(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(&self.path)
            .with_context(|| format!("Template-Datei nicht lesbar: {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Template-Text im Speicher (eingebettet oder in Tests).
#[derive(Debug, Clone)]
pub struct StaticTemplateSource {
    content: String,
}

impl StaticTemplateSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Default for StaticTemplateSource {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE_XML)
    }
}

impl TemplateSource for StaticTemplateSource {
    fn read_template(&self) -> anyhow::Result<String> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        "<eingebettet>".to_string()
    }
}

/// Zugriff auf Templates nach (Kategorie, gespiegelt).
pub struct TemplateStore {
    source: Box<dyn TemplateSource>,
}

impl TemplateStore {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// Store über der eingebetteten Standard-Bibliothek.
    pub fn embedded() -> Self {
        Self::new(Box::new(StaticTemplateSource::default()))
    }

    /// Store über einer Template-Datei.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileTemplateSource::new(path)))
    }

    /// Lädt das Template für eine Kategorie.
    ///
    /// `flipped` wählt bei Landhaken die gespiegelte Variante. Eine abweichende
    /// Segmentanzahl wird nur protokolliert; die gelesenen Segmente gelten.
    pub fn load_template(
        &self,
        category: ArrowCategory,
        flipped: bool,
    ) -> ArrowResult<TemplateDefinition> {
        let name = category
            .template_name(flipped)
            .ok_or_else(|| ArrowError::TemplateNotFound {
                name: format!("{category:?}"),
            })?;

        let content = self
            .source
            .read_template()
            .map_err(|e| ArrowError::parse(format!("{e:#}")))?;
        let library = parse_arrow_templates(&content)?;

        let definition = library
            .get(name)
            .cloned()
            .ok_or_else(|| ArrowError::TemplateNotFound {
                name: name.to_string(),
            })?;

        if let Some(fault) = definition.integrity_fault() {
            log::warn!("{} (Quelle: {})", fault, self.source.describe());
        }

        Ok(definition)
    }
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("source", &self.source.describe())
            .finish()
    }
}

//! Parser für die XML-Template-Bibliothek der Pfeile.
//!
//! Format:
//! ```xml
//! <arrowDefs><arrowDef>
//!   <straight><segments count="1"><segment points="0,0,0,10"/></segments></straight>
//! </arrowDef></arrowDefs>
//! ```

use crate::core::{ArrowError, ArrowResult, Polyline, Segment};
use anyhow::{bail, Context, Result};
use glam::DVec2;
use indexmap::IndexMap;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Gerades Template-Segment im normierten Template-Raum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSegment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Benannte, geordnete Segmentliste eines Templates.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDefinition {
    pub name: String,
    /// Im `count`-Attribut deklarierte Segmentanzahl
    pub declared_count: usize,
    pub segments: Vec<TemplateSegment>,
}

impl TemplateDefinition {
    /// Liefert `TemplateDataMismatch`, wenn Deklaration und Datensätze abweichen.
    pub fn integrity_fault(&self) -> Option<ArrowError> {
        (self.declared_count != self.segments.len()).then(|| ArrowError::TemplateDataMismatch {
            name: self.name.clone(),
            declared: self.declared_count,
            found: self.segments.len(),
        })
    }

    /// Template als Polylinie aus geraden Segmenten.
    pub fn to_polyline(&self) -> Polyline {
        Polyline::new(
            self.segments
                .iter()
                .map(|s| Segment::Line {
                    from: s.from,
                    to: s.to,
                })
                .collect(),
        )
    }
}

/// Alle Templates einer Quelle, in Dokument-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: IndexMap<String, TemplateDefinition>,
}

impl TemplateLibrary {
    pub fn get(&self, name: &str) -> Option<&TemplateDefinition> {
        self.templates.get(name)
    }

    /// Template-Namen in Dokument-Reihenfolge.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Parsed die Template-Bibliothek aus einem XML-String.
pub fn parse_arrow_templates(xml_content: &str) -> ArrowResult<TemplateLibrary> {
    parse_library(xml_content).map_err(|e| ArrowError::parse(format!("{e:#}")))
}

/// Arbeitszustand für das aktuell gelesene Template-Element.
struct PendingTemplate {
    name: String,
    declared_count: usize,
    segments: Vec<TemplateSegment>,
}

fn parse_library(xml_content: &str) -> Result<TemplateLibrary> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut library = TemplateLibrary::default();
    let mut in_arrow_def = false;
    let mut current: Option<PendingTemplate> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let decoder = reader.decoder();
                let tag = decoder.decode(e.name().as_ref())?.into_owned();
                if tag == "arrowDef" {
                    in_arrow_def = true;
                } else if in_arrow_def && current.is_none() {
                    current = Some(PendingTemplate {
                        name: tag,
                        declared_count: 0,
                        segments: Vec::new(),
                    });
                } else if let Some(pending) = current.as_mut() {
                    read_record(&tag, e, decoder, pending)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let decoder = reader.decoder();
                let tag = decoder.decode(e.name().as_ref())?.into_owned();
                if let Some(pending) = current.as_mut() {
                    read_record(&tag, e, decoder, pending)?;
                } else if in_arrow_def {
                    // Template ohne Segmente, z.B. <roadTic/>
                    insert_template(
                        &mut library,
                        PendingTemplate {
                            name: tag,
                            declared_count: 0,
                            segments: Vec::new(),
                        },
                    );
                }
            }
            Ok(Event::End(ref e)) => {
                let tag = reader.decoder().decode(e.name().as_ref())?.into_owned();
                if tag == "arrowDef" {
                    in_arrow_def = false;
                } else if current.as_ref().is_some_and(|p| p.name == tag) {
                    if let Some(pending) = current.take() {
                        insert_template(&mut library, pending);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!(
                "XML-Fehler an Position {}: {}",
                reader.buffer_position(),
                e
            ),
            _ => {}
        }
        buffer.clear();
    }

    if let Some(pending) = current {
        bail!("Template '{}' nicht abgeschlossen", pending.name);
    }

    log::debug!("{} Pfeil-Templates gelesen", library.len());
    Ok(library)
}

fn insert_template(library: &mut TemplateLibrary, pending: PendingTemplate) {
    let definition = TemplateDefinition {
        name: pending.name,
        declared_count: pending.declared_count,
        segments: pending.segments,
    };
    if let Some(previous) = library
        .templates
        .insert(definition.name.clone(), definition)
    {
        log::warn!(
            "Template '{}' mehrfach definiert, letzte Definition gilt",
            previous.name
        );
    }
}

/// Verarbeitet `<segments count>` und `<segment points>` innerhalb eines Templates.
fn read_record(
    tag: &str,
    element: &BytesStart,
    decoder: Decoder,
    pending: &mut PendingTemplate,
) -> Result<()> {
    match tag {
        "segments" => {
            if let Some(count) = attribute_value(element, decoder, "count")? {
                let count: usize = count.trim().parse().with_context(|| {
                    format!("Ungueltiges count-Attribut in '{}': '{}'", pending.name, count)
                })?;
                pending.declared_count += count;
            }
        }
        "segment" => {
            let points = attribute_value(element, decoder, "points")?.with_context(|| {
                format!("Segment ohne points-Attribut in '{}'", pending.name)
            })?;
            let segment = parse_segment_points(&points)
                .with_context(|| format!("Ungueltiges Segment in '{}'", pending.name))?;
            pending.segments.push(segment);
        }
        _ => {}
    }
    Ok(())
}

fn attribute_value(element: &BytesStart, decoder: Decoder, key: &str) -> Result<Option<String>> {
    for attr in element.attributes().with_checks(false) {
        let attr = attr?;
        if decoder.decode(attr.key.as_ref())? == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Parsed `"fromX,fromY,toX,toY"`.
pub fn parse_segment_points(value: &str) -> Result<TemplateSegment> {
    let numbers = value
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .with_context(|| format!("Keine Zahl: '{}'", part))
        })
        .collect::<Result<Vec<f64>>>()?;

    let [from_x, from_y, to_x, to_y] = numbers[..] else {
        bail!(
            "Erwartet 4 Werte (fromX,fromY,toX,toY), gefunden {}: '{}'",
            numbers.len(),
            value
        );
    };

    Ok(TemplateSegment {
        from: DVec2::new(from_x, from_y),
        to: DVec2::new(to_x, to_y),
    })
}

#[cfg(test)]
mod tests;

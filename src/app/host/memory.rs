//! In-Memory-Host für Replay und Tests.

use super::ArrowHost;
use crate::core::{ArrowDescriptor, ArrowError, FeatureId, Polyline};
use anyhow::{anyhow, bail};
use glam::DVec2;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;

/// Ein im Host gespeichertes Pfeil-Feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredFeature {
    pub id: FeatureId,
    pub descriptor: ArrowDescriptor,
    pub geometry: Polyline,
}

/// Protokolleintrag einer Host-Operation.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Created(FeatureId),
    Modified(FeatureId),
    Deleted(FeatureId),
    SelectionSet(Vec<FeatureId>),
    SelectionCleared,
    Confirmed { message: String, answer: bool },
    MapScaleQueried(DVec2),
    DiagnosticPoint(DVec2),
    DiagnosticPointsCleared,
    ErrorReported(String),
}

/// Host ohne GIS: hält Features, Selektion und ein Journal im Speicher.
#[derive(Debug)]
pub struct MemoryHost {
    next_id: u64,
    features: IndexMap<FeatureId, StoredFeature>,
    selection: Vec<FeatureId>,
    journal: Vec<HostEvent>,
    confirm_answers: VecDeque<bool>,
    default_confirm: bool,
    map_scale: Option<f64>,
    fail_operation: Option<String>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            features: IndexMap::new(),
            selection: Vec::new(),
            journal: Vec::new(),
            confirm_answers: VecDeque::new(),
            default_confirm: true,
            map_scale: None,
            fail_operation: None,
        }
    }

    /// Kartenmaßstab, den `map_scale_at` überall liefert.
    pub fn with_map_scale(mut self, map_scale: f64) -> Self {
        self.map_scale = Some(map_scale);
        self
    }

    /// Antwort auf Rückfragen, wenn keine vorgegebene mehr ansteht.
    pub fn with_default_confirm(mut self, answer: bool) -> Self {
        self.default_confirm = answer;
        self
    }

    /// Legt die Antwort auf die nächste Rückfrage fest.
    pub fn answer_next_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// Lässt die nächste Operation dieses Namens scheitern ("create", "modify", ...).
    pub fn fail_next(&mut self, operation: &str) {
        self.fail_operation = Some(operation.to_string());
    }

    pub fn feature(&self, id: FeatureId) -> Option<&StoredFeature> {
        self.features.get(&id)
    }

    /// Alle Features in Erzeugungsreihenfolge.
    pub fn features(&self) -> impl Iterator<Item = &StoredFeature> {
        self.features.values()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn selection(&self) -> &[FeatureId] {
        &self.selection
    }

    pub fn journal(&self) -> &[HostEvent] {
        &self.journal
    }

    /// Gemeldete Fehlertexte.
    pub fn reported_errors(&self) -> Vec<&str> {
        self.journal
            .iter()
            .filter_map(|event| match event {
                HostEvent::ErrorReported(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    fn check_failure(&mut self, operation: &str) -> anyhow::Result<()> {
        if self.fail_operation.as_deref() == Some(operation) {
            self.fail_operation = None;
            bail!("Host verweigert '{operation}'");
        }
        Ok(())
    }
}

impl ArrowHost for MemoryHost {
    async fn create_feature(
        &mut self,
        descriptor: &ArrowDescriptor,
        geometry: &Polyline,
    ) -> anyhow::Result<FeatureId> {
        self.check_failure("create")?;
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        self.features.insert(
            id,
            StoredFeature {
                id,
                descriptor: *descriptor,
                geometry: geometry.clone(),
            },
        );
        self.journal.push(HostEvent::Created(id));
        Ok(id)
    }

    async fn modify_feature(
        &mut self,
        feature: FeatureId,
        geometry: &Polyline,
    ) -> anyhow::Result<()> {
        self.check_failure("modify")?;
        let stored = self
            .features
            .get_mut(&feature)
            .ok_or_else(|| anyhow!("Feature {feature} existiert nicht"))?;
        stored.geometry = geometry.clone();
        self.journal.push(HostEvent::Modified(feature));
        Ok(())
    }

    async fn delete_feature(&mut self, feature: FeatureId) -> anyhow::Result<()> {
        self.check_failure("delete")?;
        if self.features.shift_remove(&feature).is_none() {
            bail!("Feature {feature} existiert nicht");
        }
        self.selection.retain(|id| *id != feature);
        self.journal.push(HostEvent::Deleted(feature));
        Ok(())
    }

    async fn set_selection(&mut self, features: &[FeatureId]) -> anyhow::Result<()> {
        self.check_failure("select")?;
        self.selection = features.to_vec();
        self.journal.push(HostEvent::SelectionSet(features.to_vec()));
        Ok(())
    }

    async fn clear_selection(&mut self) -> anyhow::Result<()> {
        self.check_failure("select")?;
        self.selection.clear();
        self.journal.push(HostEvent::SelectionCleared);
        Ok(())
    }

    async fn confirm(&mut self, message: &str) -> bool {
        let answer = self
            .confirm_answers
            .pop_front()
            .unwrap_or(self.default_confirm);
        self.journal.push(HostEvent::Confirmed {
            message: message.to_string(),
            answer,
        });
        answer
    }

    async fn map_scale_at(&mut self, at: DVec2) -> anyhow::Result<Option<f64>> {
        self.journal.push(HostEvent::MapScaleQueried(at));
        Ok(self.map_scale)
    }

    async fn show_diagnostic_point(&mut self, at: DVec2) -> anyhow::Result<()> {
        self.journal.push(HostEvent::DiagnosticPoint(at));
        Ok(())
    }

    async fn clear_diagnostic_points(&mut self) -> anyhow::Result<()> {
        self.journal.push(HostEvent::DiagnosticPointsCleared);
        Ok(())
    }

    fn report_error(&mut self, error: &ArrowError) {
        log::warn!("{}", error);
        self.journal.push(HostEvent::ErrorReported(error.to_string()));
    }
}

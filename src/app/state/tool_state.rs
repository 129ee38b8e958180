//! Werkzeug-Zustand — zentrale Datenhaltung einer Editier-Sitzung.

use super::{ConstructionSession, SessionSelectionLedger};
use crate::app::host::HostRequest;
use crate::app::CommandLog;
use crate::shared::{ArrowOptions, RequiredScales};
use crate::xml::TemplateStore;
use std::collections::VecDeque;

/// Besitzt die (höchstens eine) Konstruktions-Sitzung und alles, was sie überdauert.
#[derive(Debug)]
pub struct ArrowToolState {
    /// Laufende Konstruktion; `None` wenn kein Werkzeug aktiv ist
    pub session: Option<ConstructionSession>,
    /// In dieser Editier-Sitzung erzeugte Pfeile
    pub ledger: SessionSelectionLedger,
    /// Erlaubte Menü-Maßstäbe; `None` = alle anbieten
    pub required_scales: Option<RequiredScales>,
    pub options: ArrowOptions,
    pub templates: TemplateStore,
    pub command_log: CommandLog,
    /// Host-Anfragen in Ausführungsreihenfolge
    pub outbox: VecDeque<HostRequest>,
}

impl ArrowToolState {
    /// Zustand mit Template-Quelle aus den Optionen.
    pub fn new(options: ArrowOptions) -> Self {
        let templates = match &options.template_file {
            Some(path) => TemplateStore::from_file(path),
            None => TemplateStore::embedded(),
        };
        Self::with_templates(options, templates)
    }

    /// Zustand mit explizitem Template-Store.
    pub fn with_templates(options: ArrowOptions, templates: TemplateStore) -> Self {
        Self {
            session: None,
            ledger: SessionSelectionLedger::new(),
            required_scales: None,
            options,
            templates,
            command_log: CommandLog::new(),
            outbox: VecDeque::new(),
        }
    }

    /// Hängt eine Host-Anfrage an die Outbox an.
    pub fn push_request(&mut self, request: HostRequest) {
        self.outbox.push_back(request);
    }

    /// Entnimmt alle ausstehenden Host-Anfragen in Reihenfolge.
    pub fn take_requests(&mut self) -> Vec<HostRequest> {
        self.outbox.drain(..).collect()
    }

    /// Anzahl gesetzter Anker der laufenden Form (0 ohne Sitzung).
    pub fn anchor_count(&self) -> usize {
        self.session
            .as_ref()
            .map_or(0, ConstructionSession::anchor_count)
    }
}

impl Default for ArrowToolState {
    fn default() -> Self {
        Self::with_templates(ArrowOptions::default(), TemplateStore::embedded())
    }
}

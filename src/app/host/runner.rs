//! Serieller Runner: ein Intent nach dem anderen, jede Host-Anfrage abgewartet.

use super::{ArrowHost, HostRequest};
use crate::app::{ArrowController, ArrowIntent, ArrowToolState};
use crate::core::{ArrowError, ArrowResult};
use std::collections::VecDeque;
use tokio::sync::mpsc;

/// Führt Intents gegen einen Host aus.
///
/// Einziger Schreiber des `ArrowToolState`: Folge-Intents (Rückfrage-Antwort,
/// Kartenmaßstab) werden vor dem nächsten Intent verarbeitet.
pub struct ArrowRunner<H: ArrowHost> {
    state: ArrowToolState,
    controller: ArrowController,
    host: H,
    follow_ups: VecDeque<ArrowIntent>,
}

impl<H: ArrowHost> ArrowRunner<H> {
    pub fn new(state: ArrowToolState, host: H) -> Self {
        Self {
            state,
            controller: ArrowController::new(),
            host,
            follow_ups: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &ArrowToolState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_parts(self) -> (ArrowToolState, H) {
        (self.state, self.host)
    }

    /// Verarbeitet einen Intent inklusive aller Folge-Intents.
    ///
    /// Fehler werden dem Host gemeldet; zurückgegeben wird der erste.
    pub async fn dispatch(&mut self, intent: ArrowIntent) -> ArrowResult<()> {
        self.follow_ups.push_back(intent);
        let mut first_error = None;

        while let Some(next) = self.follow_ups.pop_front() {
            if let Err(error) = self.process(next).await {
                log::error!("Schritt abgebrochen: {}", error);
                self.host.report_error(&error);
                first_error.get_or_insert(error);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    /// Liest Intents aus dem Kanal bis dieser geschlossen wird.
    ///
    /// Vor einem bereits wartenden Reset werden überholte Anker und
    /// Geometrie-Aktionen verworfen.
    pub async fn run(mut self, mut receiver: mpsc::Receiver<ArrowIntent>) -> (ArrowToolState, H) {
        let mut queue = VecDeque::new();
        loop {
            if queue.is_empty() {
                match receiver.recv().await {
                    Some(intent) => queue.push_back(intent),
                    None => break,
                }
            }
            while let Ok(intent) = receiver.try_recv() {
                queue.push_back(intent);
            }

            let dropped = supersede_before_reset(&mut queue);
            if dropped > 0 {
                log::debug!("{} Intents durch Reset überholt", dropped);
            }

            if let Some(intent) = queue.pop_front() {
                // Fehler sind bereits gemeldet
                let _ = self.dispatch(intent).await;
            }
        }

        log::info!("Intent-Kanal geschlossen, Runner beendet");
        self.into_parts()
    }

    async fn process(&mut self, intent: ArrowIntent) -> ArrowResult<()> {
        if let Err(error) = self.controller.handle_intent(&mut self.state, intent) {
            let dropped = self.state.take_requests();
            if !dropped.is_empty() {
                log::debug!("{} Host-Anfragen verworfen", dropped.len());
            }
            return Err(error);
        }

        let requests = self.state.take_requests();
        let total = requests.len();
        for (index, request) in requests.into_iter().enumerate() {
            if let Err(error) = self.execute(request).await {
                log::debug!(
                    "Host-Fehler bei Anfrage {}/{}, Rest verworfen",
                    index + 1,
                    total
                );
                return Err(error);
            }
        }

        Ok(())
    }

    async fn execute(&mut self, request: HostRequest) -> ArrowResult<()> {
        match request {
            HostRequest::Create {
                slot,
                descriptor,
                geometry,
            } => {
                let id = self
                    .host
                    .create_feature(&descriptor, &geometry)
                    .await
                    .map_err(|e| ArrowError::host("create", &e))?;
                log::debug!("Feature {} für Slot {} angelegt", id, slot.number());
                if let Some(session) = self.state.session.as_mut() {
                    session.object_ids.set(slot, Some(id));
                }
            }
            HostRequest::Modify { slot, geometry } => {
                let feature = self
                    .state
                    .session
                    .as_ref()
                    .and_then(|s| s.object_ids.get(slot))
                    .ok_or_else(|| ArrowError::HostOperationFailed {
                        operation: "modify".to_string(),
                        message: format!("Slot {} hat kein Feature", slot.number()),
                    })?;
                self.host
                    .modify_feature(feature, &geometry)
                    .await
                    .map_err(|e| ArrowError::host("modify", &e))?;
            }
            HostRequest::Delete { slot, feature } => {
                self.host
                    .delete_feature(feature)
                    .await
                    .map_err(|e| ArrowError::host("delete", &e))?;
                self.state.ledger.remove(feature);
                log::debug!("Feature {} aus Slot {} gelöscht", feature, slot.number());
            }
            HostRequest::SyncSelection => self.sync_selection().await?,
            HostRequest::ResolveMapScale { at } => match self.host.map_scale_at(at).await {
                Ok(Some(map_scale)) => {
                    self.follow_ups
                        .push_front(ArrowIntent::MapScaleResolved { map_scale });
                }
                Ok(None) => log::debug!("Host kennt keinen Kartenmaßstab bei {:?}", at),
                Err(e) => log::warn!("Kartenmaßstab nicht ermittelbar: {e:#}"),
            },
            HostRequest::Confirm {
                message,
                on_confirm,
            } => {
                if self.host.confirm(&message).await {
                    self.follow_ups.push_front(on_confirm);
                } else {
                    log::info!("Rückfrage abgelehnt: {}", message);
                }
            }
            HostRequest::ShowDiagnosticPoint { at } => {
                if let Err(e) = self.host.show_diagnostic_point(at).await {
                    log::warn!("Diagnosepunkt nicht darstellbar: {e:#}");
                }
            }
            HostRequest::ClearDiagnosticPoints => {
                if let Err(e) = self.host.clear_diagnostic_points().await {
                    log::warn!("Diagnosepunkte nicht entfernbar: {e:#}");
                }
            }
        }

        Ok(())
    }

    async fn sync_selection(&mut self) -> ArrowResult<()> {
        let Some(session) = self.state.session.as_ref() else {
            return Ok(());
        };

        if session.select_new_arrows {
            let created: Vec<_> = session.object_ids.occupied().map(|(_, id)| id).collect();
            self.state.ledger.extend(created);
            let ids = self.state.ledger.ids();
            self.host
                .set_selection(&ids)
                .await
                .map_err(|e| ArrowError::host("select", &e))
        } else {
            self.host
                .clear_selection()
                .await
                .map_err(|e| ArrowError::host("select", &e))
        }
    }
}

/// Entfernt Intents, die ein später wartender Reset überflüssig macht.
///
/// Liefert die Anzahl verworfener Intents.
pub fn supersede_before_reset(queue: &mut VecDeque<ArrowIntent>) -> usize {
    let Some(last_reset) = queue.iter().rposition(ArrowIntent::is_reset) else {
        return 0;
    };

    let before = queue.len();
    let mut index = 0;
    queue.retain(|intent| {
        let keep = index >= last_reset || !intent.is_superseded_by_reset();
        index += 1;
        keep
    });
    before - queue.len()
}

/// Sendeseite des Intent-Kanals für UI-Shells.
#[derive(Debug, Clone)]
pub struct ArrowHandle {
    sender: mpsc::Sender<ArrowIntent>,
}

impl ArrowHandle {
    /// Reiht einen Intent ein (wartet bei vollem Kanal).
    pub async fn send(&self, intent: ArrowIntent) -> anyhow::Result<()> {
        self.sender
            .send(intent)
            .await
            .map_err(|_| anyhow::anyhow!("Runner ist beendet"))
    }

    /// Reiht einen Intent ohne Warten ein.
    pub fn try_send(&self, intent: ArrowIntent) -> anyhow::Result<()> {
        self.sender
            .try_send(intent)
            .map_err(|e| anyhow::anyhow!("Intent nicht eingereiht: {e}"))
    }
}

/// Erstellt Handle und Empfänger für `ArrowRunner::run`.
pub fn intent_channel(capacity: usize) -> (ArrowHandle, mpsc::Receiver<ArrowIntent>) {
    let (sender, receiver) = mpsc::channel(capacity);
    (ArrowHandle { sender }, receiver)
}

#[cfg(test)]
mod tests;

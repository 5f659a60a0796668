//! The device-probe loop.
//!
//! Walks candidate indices in order, opens each one, and records the identity
//! of every device that is present and openable. Only one handle is alive at
//! a time: it is dropped at the end of each iteration.

use std::ops::ControlFlow;

use super::device::{CameraBackend, CameraHandle};
use super::known;
use super::types::{ProbeOutcome, ProbeRecord};
use crate::indices::CandidateIndices;

/// Progress of a running probe.
#[derive(Debug)]
pub enum ProbeEvent<'a> {
    /// About to open this index
    Attempt(u32),
    /// Index finished and its handle released
    Finished(&'a ProbeRecord),
}

/// Probes candidate indices through a [`CameraBackend`].
#[derive(Debug)]
pub struct Prober<B> {
    backend: B,
}

impl<B: CameraBackend> Prober<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Probe every index and collect one record per index, in input order.
    pub fn probe(&self, indices: &CandidateIndices) -> Vec<ProbeRecord> {
        self.probe_with(indices, |_| ControlFlow::Continue(()))
    }

    /// Probe every index, reporting progress to `on_event` as it happens.
    ///
    /// Returning `ControlFlow::Break` from `on_event` stops the scan: after an
    /// `Attempt` the index is not opened, after a `Finished` no further index
    /// is tried. The records gathered so far are returned.
    pub fn probe_with<F>(&self, indices: &CandidateIndices, mut on_event: F) -> Vec<ProbeRecord>
    where
        F: FnMut(ProbeEvent<'_>) -> ControlFlow<()>,
    {
        let mut records = Vec::with_capacity(indices.len());
        for index in indices.iter() {
            if on_event(ProbeEvent::Attempt(index)).is_break() {
                log::debug!("Scan stopped before camera {}", index);
                break;
            }
            let record = self.probe_one(index);
            let flow = on_event(ProbeEvent::Finished(&record));
            records.push(record);
            if flow.is_break() {
                log::debug!("Scan stopped after camera {}", index);
                break;
            }
        }
        records
    }

    /// Probe a single index. The handle is released before this returns.
    pub fn probe_one(&self, index: u32) -> ProbeRecord {
        let handle = self.backend.open(index);

        let outcome = if !handle.is_open() {
            log::debug!("Camera {} not present or not openable, skipping", index);
            ProbeOutcome::Skipped
        } else {
            match handle.identity() {
                Ok(identity) => {
                    if let Some(device) = known::lookup(identity) {
                        log::info!("Camera {} recognized as {}", index, device.name);
                    }
                    ProbeOutcome::Reported(identity)
                }
                Err(e) => {
                    log::warn!("Camera {} opened but identity query failed: {}", index, e);
                    ProbeOutcome::Failed(e)
                }
            }
        };

        drop(handle);
        ProbeRecord { index, outcome }
    }
}

//! Handoff of recognition results from worker threads to the UI thread
//!
//! Recognizers run off-thread and push whole region batches. The UI
//! thread drains the channel and applies the newest batch to its
//! `OverlayState`, which never sees another thread.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::domain::TextRegion;

use super::state::OverlayState;

/// Create a connected sender/receiver pair
pub fn region_channel() -> (RegionSender, RegionReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (RegionSender { tx }, RegionReceiver { rx })
}

/// Producer side, cloneable and `Send`
#[derive(Clone, Debug)]
pub struct RegionSender {
    tx: Sender<Vec<TextRegion>>,
}

impl RegionSender {
    /// Queue a complete batch of recognition results
    ///
    /// Returns false once the receiving side is gone.
    pub fn send(&self, regions: Vec<TextRegion>) -> bool {
        match self.tx.send(regions) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("Region receiver dropped, discarding recognition results");
                false
            }
        }
    }
}

/// Consumer side, owned by the UI thread
#[derive(Debug)]
pub struct RegionReceiver {
    rx: Receiver<Vec<TextRegion>>,
}

impl RegionReceiver {
    /// Apply the newest pending batch, skipping any older ones
    ///
    /// Returns true if a batch was applied.
    pub fn apply_latest(&self, state: &mut OverlayState) -> bool {
        let mut latest = None;
        let mut skipped = 0usize;
        loop {
            match self.rx.try_recv() {
                Ok(batch) => {
                    if latest.replace(batch).is_some() {
                        skipped += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} superseded region batches", skipped);
        }

        match latest {
            Some(regions) => {
                state.set_regions(regions);
                true
            }
            None => false,
        }
    }

    /// Block until a batch arrives, then apply it and anything newer
    ///
    /// Returns false if every sender is gone and nothing was pending.
    pub fn wait_and_apply(&self, state: &mut OverlayState) -> bool {
        match self.rx.recv() {
            Ok(batch) => {
                state.set_regions(batch);
                self.apply_latest(state);
                true
            }
            Err(_) => false,
        }
    }
}

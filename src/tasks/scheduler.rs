//! Tick scheduler backed by tokio timers

use std::{collections::HashMap, time::Duration};

use tokio::{sync::mpsc, task::JoinHandle, time::sleep};
use tracing::{debug, warn};

use crate::timer::{Scheduler, TickHandle};

/// Schedules ticks as sleeping tokio tasks that report back on a channel.
///
/// Must be used from inside a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    next_id: u64,
    tick_tx: mpsc::UnboundedSender<TickHandle>,
    pending: HashMap<TickHandle, JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new(tick_tx: mpsc::UnboundedSender<TickHandle>) -> Self {
        Self {
            next_id: 0,
            tick_tx,
            pending: HashMap::new(),
        }
    }

    /// Number of ticks whose sleep has not finished yet
    pub fn pending_count(&self) -> usize {
        self.pending.values().filter(|task| !task.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) -> TickHandle {
        self.pending.retain(|_, task| !task.is_finished());

        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        let tick_tx = self.tick_tx.clone();

        let task = tokio::spawn(async move {
            sleep(delay).await;
            if tick_tx.send(handle).is_err() {
                warn!("Tick {:?} fired after the timer task stopped", handle);
            }
        });
        self.pending.insert(handle, task);
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some(task) = self.pending.remove(&handle) {
            task.abort();
            debug!("Cancelled tick {:?}", handle);
        }
    }
}

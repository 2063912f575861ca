//! Timer background task
//!
//! Owns the [`Pomodoro`] controller. User actions arrive on a command channel,
//! ticks arrive from the scheduler, and both are handled one at a time. After
//! every change a fresh [`TimerSnapshot`] is published on a watch channel.

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::scheduler::TokioScheduler;
use crate::{
    display::ClockFace,
    error::{Result, TimerError},
    state::TimerSnapshot,
    timer::{Action, EngineStatus, Pomodoro, TickOutcome},
};

const COMMAND_BUFFER: usize = 32;

/// Result of applying an action
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    pub action: Action,
    /// Engine status before the action was applied
    pub previous: EngineStatus,
    pub applied: bool,
    pub snapshot: TimerSnapshot,
}

#[derive(Debug)]
pub(crate) struct TimerCommand {
    action: Action,
    reply: oneshot::Sender<CommandOutcome>,
}

/// Cloneable handle to the running timer task
#[derive(Debug, Clone)]
pub struct TimerHandle {
    commands: mpsc::Sender<TimerCommand>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerHandle {
    /// Send an action to the timer task and wait for its outcome
    pub async fn apply(&self, action: Action) -> Result<CommandOutcome> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(TimerCommand { action, reply })
            .await
            .map_err(|_| TimerError::TaskUnavailable)?;
        outcome
            .await
            .map_err(|_| TimerError::ReplyDropped(action.as_str()))
    }

    /// Latest published snapshot
    pub fn current(&self) -> TimerSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawn the timer task on the current runtime
pub fn spawn_timer_task() -> TimerHandle {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (snapshot_tx, snapshot_rx) = watch::channel(TimerSnapshot::new());

    tokio::spawn(async move {
        timer_task(command_rx, snapshot_tx).await;
    });

    TimerHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    }
}

/// Drive the controller until every [`TimerHandle`] has been dropped
pub(crate) async fn timer_task(
    mut commands: mpsc::Receiver<TimerCommand>,
    snapshots: watch::Sender<TimerSnapshot>,
) {
    info!("Starting timer task");

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut pomodoro = Pomodoro::new(TokioScheduler::new(tick_tx), ClockFace::new());
    snapshots.send_replace(TimerSnapshot::capture(&pomodoro));

    loop {
        tokio::select! {
            Some(handle) = tick_rx.recv() => {
                match pomodoro.tick(handle) {
                    TickOutcome::Stale => continue,
                    TickOutcome::Finished => {
                        debug!("Phase finished, now at repetition {}", pomodoro.tracker().repetition());
                    }
                    TickOutcome::Continued => {}
                }
                snapshots.send_replace(TimerSnapshot::capture(&pomodoro));
            }

            command = commands.recv() => {
                let Some(TimerCommand { action, reply }) = command else {
                    info!("All timer handles dropped, stopping timer task");
                    break;
                };

                let previous = pomodoro.engine().status();
                let applied = pomodoro.apply(action);
                if !applied {
                    debug!("Action {} ignored while {:?}", action.as_str(), pomodoro.engine().status());
                }

                let snapshot = TimerSnapshot::capture(&pomodoro);
                snapshots.send_replace(snapshot.clone());

                if reply.send(CommandOutcome { action, previous, applied, snapshot }).is_err() {
                    warn!("Caller went away before the {} reply", action.as_str());
                }
            }
        }
    }

    pomodoro.reset();
}

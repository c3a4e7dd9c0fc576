//! Background execution of a [`Plan`].

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use super::plan::Plan;
use super::types::LoadPlan;
use crate::error::Error;
use crate::partition::Stage1Checkpoint;

/// Message posted by a [`PlanWorker`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanMessage {
    /// The selection is known; splitting has not finished yet.
    Stage1(Stage1Checkpoint),
    /// The run is over. Always the last message.
    Finished(Result<LoadPlan, Error>),
}

/// A plan running on its own thread.
///
/// Posts one [`PlanMessage::Stage1`] followed by one
/// [`PlanMessage::Finished`], unless the run fails before the selection is
/// known, in which case only `Finished` arrives. Dropping the worker detaches
/// the thread; it runs to completion and its messages are discarded.
///
/// # Examples
///
/// ```
/// use u_partition::boundary::{Plan, PlanWorker};
///
/// let plan = Plan::from_columns(&[30], &[10], &[1], &[100, 100], None).unwrap();
/// let result = PlanWorker::spawn(plan).wait().unwrap();
/// assert_eq!(result.counts, vec![20]);
/// ```
pub struct PlanWorker {
    receiver: Receiver<PlanMessage>,
    handle: JoinHandle<()>,
}

impl PlanWorker {
    pub fn spawn(plan: Plan) -> Self {
        let (sender, receiver) = mpsc::channel();
        let handle = thread::spawn(move || {
            let stage1 = sender.clone();
            let result = plan.run_with_checkpoint(|checkpoint| {
                // The receiver may already be gone.
                let _ = stage1.send(PlanMessage::Stage1(checkpoint.clone()));
            });
            let _ = sender.send(PlanMessage::Finished(result));
        });
        Self { receiver, handle }
    }

    /// Blocks for the next message. `None` once the worker is done.
    pub fn recv(&self) -> Option<PlanMessage> {
        self.receiver.recv().ok()
    }

    /// Returns the next message if one is waiting.
    pub fn try_recv(&self) -> Option<PlanMessage> {
        match self.receiver.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the run is over, skipping progress messages.
    ///
    /// # Errors
    ///
    /// The run's own error, or [`Error::WorkerStopped`] if the thread died
    /// without posting a result.
    pub fn wait(self) -> Result<LoadPlan, Error> {
        let outcome = loop {
            match self.receiver.recv() {
                Ok(PlanMessage::Finished(result)) => break result,
                Ok(PlanMessage::Stage1(_)) => continue,
                Err(_) => break Err(Error::WorkerStopped),
            }
        };
        let _ = self.handle.join();
        outcome
    }
}

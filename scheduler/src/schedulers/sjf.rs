use crate::{Algorithm, Process, Scheduler, Timeline};

use super::run_to_completion;

/// Non-preemptive shortest job first.
///
/// Whenever the CPU is free, the arrived process with the smallest burst
/// runs to completion.
#[derive(Debug, Default)]
pub struct ShortestJobFirst;

impl ShortestJobFirst {
    pub fn new() -> Self {
        ShortestJobFirst
    }
}

impl Scheduler for ShortestJobFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestJobFirst
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        run_to_completion(processes, Process::burst)
    }
}

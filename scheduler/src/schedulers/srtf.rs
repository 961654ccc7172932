use crate::{Algorithm, Process, Scheduler, Timeline};

use super::run_unit_steps;

/// Preemptive shortest job first.
///
/// Every time unit goes to the arrived process with the least remaining
/// work, so a shorter arrival preempts the running process.
#[derive(Debug, Default)]
pub struct ShortestRemainingTimeFirst;

impl ShortestRemainingTimeFirst {
    pub fn new() -> Self {
        ShortestRemainingTimeFirst
    }
}

impl Scheduler for ShortestRemainingTimeFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestRemainingTimeFirst
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        run_unit_steps(processes, Process::remaining)
    }
}

use crate::{Algorithm, Process, Scheduler, Timeline};

use super::{run_to_completion, run_unit_steps};

/// Non-preemptive priority scheduling.
///
/// Whenever the CPU is free, the arrived process with the lowest priority
/// value runs to completion.
#[derive(Debug, Default)]
pub struct PriorityNonPreemptive;

impl PriorityNonPreemptive {
    pub fn new() -> Self {
        PriorityNonPreemptive
    }
}

impl Scheduler for PriorityNonPreemptive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityNonPreemptive
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        run_to_completion(processes, Process::priority)
    }
}

/// Preemptive priority scheduling.
///
/// Every time unit goes to the arrived process with the lowest priority
/// value. Priorities are static, there is no aging.
#[derive(Debug, Default)]
pub struct PriorityPreemptive;

impl PriorityPreemptive {
    pub fn new() -> Self {
        PriorityPreemptive
    }
}

impl Scheduler for PriorityPreemptive {
    fn algorithm(&self) -> Algorithm {
        Algorithm::PriorityPreemptive
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        run_unit_steps(processes, Process::priority)
    }
}

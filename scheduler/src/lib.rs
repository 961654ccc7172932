//! A CPU scheduling simulation library.
//!
//! This library provides the process model, the scheduling policies
//! and the comparison of their runs.
//!

use std::num::NonZeroUsize;

mod scheduler;
pub use crate::scheduler::{Algorithm, Metrics, Pid, Process, RoundRobinMode, Scheduler};

mod timeline;
pub use crate::timeline::{Slice, Timeline};

mod workload;
pub use crate::workload::{ProcessInput, Workload, WorkloadError, NEUTRAL_PRIORITY};

pub mod comparator;
pub use crate::comparator::Averages;

mod schedulers;
pub use schedulers::{
    FirstComeFirstServed, PriorityNonPreemptive, PriorityPreemptive, RoundRobin,
    ShortestJobFirst, ShortestRemainingTimeFirst,
};

/// Returns a structure that implements the `Scheduler` trait with a first come, first served policy
pub fn fcfs() -> impl Scheduler {
    FirstComeFirstServed::new()
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive shortest job first policy
pub fn sjf() -> impl Scheduler {
    ShortestJobFirst::new()
}

/// Returns a structure that implements the `Scheduler` trait with a shortest remaining time first policy
pub fn srtf() -> impl Scheduler {
    ShortestRemainingTimeFirst::new()
}

/// Returns a structure that implements the `Scheduler` trait with a round robin policy
///
/// * `quantum` - the time units a process can run before it is preempted
/// * `mode` - whether the turns follow the input order on every pass
///            ([`RoundRobinMode::Sweep`]) or a FIFO ready queue
///            ([`RoundRobinMode::Queue`])
pub fn round_robin(quantum: NonZeroUsize, mode: RoundRobinMode) -> impl Scheduler {
    RoundRobin::new(quantum, mode)
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive priority policy
pub fn priority_non_preemptive() -> impl Scheduler {
    PriorityNonPreemptive::new()
}

/// Returns a structure that implements the `Scheduler` trait with a preemptive priority policy
pub fn priority_preemptive() -> impl Scheduler {
    PriorityPreemptive::new()
}

/// Returns the scheduler that simulates `algorithm`.
pub fn scheduler_for(algorithm: Algorithm) -> Box<dyn Scheduler> {
    match algorithm {
        Algorithm::FirstComeFirstServed => Box::new(fcfs()),
        Algorithm::ShortestJobFirst => Box::new(sjf()),
        Algorithm::ShortestRemainingTimeFirst => Box::new(srtf()),
        Algorithm::RoundRobin { quantum, mode } => Box::new(round_robin(quantum, mode)),
        Algorithm::PriorityNonPreemptive => Box::new(priority_non_preemptive()),
        Algorithm::PriorityPreemptive => Box::new(priority_preemptive()),
    }
}

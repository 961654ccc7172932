use std::error::Error;
use std::fmt::Display;
use std::num::NonZeroUsize;

use crate::{Pid, Process};

/// The priority given to every process when priorities are not used.
pub const NEUTRAL_PRIORITY: i32 = 0;

/// A process as described by the operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessInput {
    pub arrival: usize,
    pub burst: usize,
    pub priority: Option<i32>,
}

impl ProcessInput {
    pub fn new(arrival: usize, burst: usize) -> ProcessInput {
        ProcessInput {
            arrival,
            burst,
            priority: None,
        }
    }

    pub fn with_priority(arrival: usize, burst: usize, priority: i32) -> ProcessInput {
        ProcessInput {
            arrival,
            burst,
            priority: Some(priority),
        }
    }
}

/// The reasons a set of inputs cannot be simulated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WorkloadError {
    /// There are no processes to simulate.
    Empty,

    /// The process does not need the CPU at all.
    ZeroBurst { pid: Pid },

    /// Priorities are in use but the process has none.
    MissingPriority { pid: Pid },

    /// The process could finish past the largest representable instant.
    Overflow { pid: Pid },
}

impl Display for WorkloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkloadError::Empty => write!(f, "there are no processes to schedule"),
            WorkloadError::ZeroBurst { pid } => {
                write!(f, "process {} has a burst time of 0", pid)
            }
            WorkloadError::MissingPriority { pid } => {
                write!(f, "process {} has no priority", pid)
            }
            WorkloadError::Overflow { pid } => {
                write!(f, "process {} would finish past the end of time", pid)
            }
        }
    }
}

impl Error for WorkloadError {}

/// The pristine set of processes every run starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    processes: Vec<Process>,
    with_priority: bool,
}

impl Workload {
    /// Validates the inputs and assigns PIDs in input order.
    ///
    /// * `with_priority` - whether the priorities are meaningful. When it is
    ///                     `false` every process gets [`NEUTRAL_PRIORITY`] and
    ///                     the priority algorithms are not applicable.
    pub fn new<I>(inputs: I, with_priority: bool) -> Result<Workload, WorkloadError>
    where
        I: IntoIterator<Item = ProcessInput>,
    {
        let processes = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let pid = Pid::from_index(index);
                let burst = NonZeroUsize::new(input.burst).ok_or(WorkloadError::ZeroBurst { pid })?;
                let priority = match (with_priority, input.priority) {
                    (true, Some(priority)) => priority,
                    (true, None) => return Err(WorkloadError::MissingPriority { pid }),
                    (false, _) => NEUTRAL_PRIORITY,
                };
                Ok(Process::new(pid, input.arrival, burst, priority))
            })
            .collect::<Result<Vec<Process>, WorkloadError>>()?;

        if processes.is_empty() {
            return Err(WorkloadError::Empty);
        }

        // No run can end later than the last arrival plus the total work.
        let mut work: usize = 0;
        for process in &processes {
            work = work
                .checked_add(process.burst())
                .ok_or(WorkloadError::Overflow { pid: process.pid() })?;
        }
        for process in &processes {
            process
                .arrival()
                .checked_add(work)
                .ok_or(WorkloadError::Overflow { pid: process.pid() })?;
        }

        log::debug!(
            "workload of {} processes, priorities {}",
            processes.len(),
            if with_priority { "enabled" } else { "disabled" }
        );

        Ok(Workload {
            processes,
            with_priority,
        })
    }

    pub fn with_priority(&self) -> bool {
        self.with_priority
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Returns a fresh copy of the processes, in the state they had before any run.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }
}

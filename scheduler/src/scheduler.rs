use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use crate::Timeline;

/// The PID of a process
///
/// The PID cannot be 0, PIDs start from 1 and follow the input order.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(NonZeroUsize);

impl Pid {
    /// Returns the PID of the process found at `index` in the input.
    pub fn from_index(index: usize) -> Pid {
        Pid(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0.get() == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// How the round robin policy picks the next process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RoundRobinMode {
    /// Sweep the processes in input order on every pass, dispatching each
    /// process that has arrived. Processes arriving in the middle of a pass
    /// are only served once the sweep reaches their index.
    #[default]
    Sweep,

    /// Classic FIFO ready queue. Processes are admitted in arrival order and
    /// a preempted process goes back to the tail of the queue, behind the
    /// processes that arrived during its slice.
    Queue,
}

impl Display for RoundRobinMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundRobinMode::Sweep => write!(f, "sweep"),
            RoundRobinMode::Queue => write!(f, "queue"),
        }
    }
}

/// The scheduling policies that can be simulated.
///
/// The declaration order is the evaluation order used when comparing runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    FirstComeFirstServed,
    ShortestJobFirst,
    ShortestRemainingTimeFirst,
    RoundRobin {
        quantum: NonZeroUsize,
        mode: RoundRobinMode,
    },
    PriorityNonPreemptive,
    PriorityPreemptive,
}

impl Algorithm {
    /// Position of the algorithm in the fixed evaluation order.
    pub fn rank(&self) -> usize {
        match self {
            Algorithm::FirstComeFirstServed => 0,
            Algorithm::ShortestJobFirst => 1,
            Algorithm::ShortestRemainingTimeFirst => 2,
            Algorithm::RoundRobin { .. } => 3,
            Algorithm::PriorityNonPreemptive => 4,
            Algorithm::PriorityPreemptive => 5,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Algorithm::FirstComeFirstServed => "FCFS",
            Algorithm::ShortestJobFirst => "SJF",
            Algorithm::ShortestRemainingTimeFirst => "SJRF",
            Algorithm::RoundRobin { .. } => "RR",
            Algorithm::PriorityNonPreemptive => "Priority-NP",
            Algorithm::PriorityPreemptive => "Priority-P",
        }
    }

    /// Whether the algorithm only makes sense when processes carry a priority.
    pub fn needs_priority(&self) -> bool {
        matches!(
            self,
            Algorithm::PriorityNonPreemptive | Algorithm::PriorityPreemptive
        )
    }
}

/// The alternate form (`{:#}`) appends the abbreviation to the
/// shortest job policies and FCFS, the way the final verdict prints them.
impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::FirstComeFirstServed => write!(f, "First-Come, First-Served")?,
            Algorithm::ShortestJobFirst => write!(f, "Shortest Job First")?,
            Algorithm::ShortestRemainingTimeFirst => write!(f, "Shortest Job Remaining First")?,
            Algorithm::RoundRobin {
                quantum,
                mode: RoundRobinMode::Sweep,
            } => write!(f, "Round Robin (Quantum = {})", quantum)?,
            Algorithm::RoundRobin {
                quantum,
                mode: RoundRobinMode::Queue,
            } => write!(f, "Round Robin, FIFO queue (Quantum = {})", quantum)?,
            Algorithm::PriorityNonPreemptive => write!(f, "Priority Scheduling (Non-Preemptive)")?,
            Algorithm::PriorityPreemptive => write!(f, "Priority Scheduling (Preemptive)")?,
        }
        if f.alternate() && self.rank() < 3 {
            write!(f, " ({})", self.abbreviation())?;
        }
        Ok(())
    }
}

/// The timing metrics of a process that has finished.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Metrics {
    /// The instant the process finished.
    pub completion: usize,

    /// Time from arrival to completion.
    pub turnaround: usize,

    /// Time spent ready but not running.
    pub waiting: usize,

    /// Time from arrival to the first dispatch.
    pub response: usize,
}

impl Metrics {
    /// Derives the metrics of a process from the instant it was first
    /// dispatched and the instant it finished.
    ///
    /// ## Panics
    ///
    /// Panics if the instants cannot belong to a valid schedule, that is if the
    /// process started before arriving or finished sooner than its burst allows.
    /// Both indicate a bug in the scheduling algorithm.
    pub fn derive(arrival: usize, burst: NonZeroUsize, start: usize, completion: usize) -> Metrics {
        assert!(
            start >= arrival,
            "process started at {start} before arriving at {arrival}"
        );
        assert!(
            completion >= arrival + burst.get(),
            "process arriving at {arrival} with burst {burst} completed at {completion}"
        );

        let turnaround = completion - arrival;
        Metrics {
            completion,
            turnaround,
            waiting: turnaround - burst.get(),
            response: start - arrival,
        }
    }
}

/// One simulated process.
///
/// The arrival, burst and priority never change. The remaining fields
/// hold the state of the run that is currently simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pid: Pid,
    arrival: usize,
    burst: NonZeroUsize,
    priority: i32,

    remaining: usize,
    start: Option<usize>,
    metrics: Option<Metrics>,
}

impl Process {
    pub fn new(pid: Pid, arrival: usize, burst: NonZeroUsize, priority: i32) -> Process {
        Process {
            pid,
            arrival,
            burst,
            priority,
            remaining: burst.get(),
            start: None,
            metrics: None,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival(&self) -> usize {
        self.arrival
    }

    pub fn burst(&self) -> usize {
        self.burst.get()
    }

    /// Lower values mean higher priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// The instant of the first dispatch, if the process was dispatched.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// The metrics of the process, once it has completed.
    pub fn metrics(&self) -> Option<Metrics> {
        self.metrics
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0 && self.metrics.is_some()
    }

    /// A process is eligible if it has arrived by `clock` and still needs the CPU.
    pub fn is_eligible(&self, clock: usize) -> bool {
        self.arrival <= clock && self.remaining > 0
    }

    /// Restores the process to the state it had before any run.
    pub fn reset(&mut self) {
        self.remaining = self.burst.get();
        self.start = None;
        self.metrics = None;
    }

    /// Hands the CPU to the process at `clock`.
    ///
    /// Only the first dispatch is recorded as the start of the process.
    pub fn dispatch(&mut self, clock: usize) {
        if self.start.is_none() {
            self.start = Some(clock);
        }
    }

    /// Runs the process for at most `units` and returns how long it ran.
    pub fn execute(&mut self, units: usize) -> usize {
        let ran = units.min(self.remaining);
        self.remaining -= ran;
        ran
    }

    /// Marks the process as finished at `clock` and derives its metrics.
    ///
    /// ## Panics
    ///
    /// Panics if the process still has work left or was never dispatched.
    pub fn complete(&mut self, clock: usize) -> Metrics {
        assert_eq!(
            self.remaining, 0,
            "process {} completed with {} units left",
            self.pid, self.remaining
        );
        let Some(start) = self.start else {
            panic!("process {} completed without being dispatched", self.pid);
        };

        let metrics = Metrics::derive(self.arrival, self.burst, start, clock);
        self.metrics = Some(metrics);
        metrics
    }
}

/// The trait that any scheduling policy has to implement.
pub trait Scheduler: Send {
    /// Returns the algorithm simulated by the scheduler.
    fn algorithm(&self) -> Algorithm;

    /// Simulates a full run over `processes`, which have to be freshly reset.
    ///
    /// When the function returns every process has completed. The returned
    /// [`Timeline`] lists the CPU slices handed out during the run.
    fn schedule(&mut self, processes: &mut [Process]) -> Timeline;
}

//! A scheduling simulation driver
//!
//! This is used for running the policies from the [`scheduler`] crate
//! over a [`Workload`] and comparing their results.

use std::fmt::Display;
use std::num::NonZeroUsize;
use std::{panic, thread};

use scheduler::{
    comparator, scheduler_for, Algorithm, Averages, Process, RoundRobinMode, Scheduler, Timeline,
    Workload,
};

/// The round robin quantum used when none is configured.
pub const DEFAULT_QUANTUM: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(quantum) => quantum,
    None => panic!("the default quantum is not zero"),
};

/// How the [`Processor`] runs the simulations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// The round robin quantum.
    pub quantum: NonZeroUsize,

    /// The round robin variant.
    pub round_robin: RoundRobinMode,

    /// Run every algorithm on its own thread. The results are the same.
    pub parallel: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            quantum: DEFAULT_QUANTUM,
            round_robin: RoundRobinMode::default(),
            parallel: false,
        }
    }
}

/// The outcome of simulating one algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The simulated algorithm.
    pub algorithm: Algorithm,

    /// The processes, in input order, with their metrics.
    pub processes: Vec<Process>,

    /// The CPU slices handed out during the run.
    pub timeline: Timeline,

    /// The mean metrics of the processes.
    pub averages: Averages,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} Results:", self.algorithm)?;
        writeln!(f, "-----------------------------------------------------")?;
        writeln!(
            f,
            "ID\tArrival\tBurst\tPriority\tCompletion\tWaiting\tTurnaround\tResponse"
        )?;
        for process in &self.processes {
            writeln!(f, "{}", Row(process))?;
        }
        writeln!(f, "Timeline: {}", self.timeline)?;
        writeln!(f)?;
        write!(f, "{}", self.averages)
    }
}

/// One line of the results table.
struct Row<'a>(&'a Process);

impl Display for Row<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let process = self.0;
        write!(
            f,
            "{}\t{}\t{}\t{}",
            process.pid(),
            process.arrival(),
            process.burst(),
            process.priority()
        )?;
        match process.metrics() {
            Some(metrics) => write!(
                f,
                "\t\t{}\t\t{}\t\t{}\t\t{}",
                metrics.completion, metrics.waiting, metrics.turnaround, metrics.response
            ),
            None => write!(f, "\t\t-\t\t-\t\t-\t\t-"),
        }
    }
}

/// The reports of every algorithm applicable to a workload.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    reports: Vec<Report>,
}

impl Simulation {
    /// The reports, in evaluation order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn report(&self, algorithm: Algorithm) -> Option<&Report> {
        self.reports
            .iter()
            .find(|report| report.algorithm == algorithm)
    }

    /// The report of the algorithm with the smallest average turnaround time.
    pub fn best(&self) -> Option<&Report> {
        let best = comparator::best(
            self.reports
                .iter()
                .map(|report| (report.algorithm, report.averages)),
        )?;
        log::debug!("best algorithm: {}", best);
        self.report(best)
    }
}

impl Display for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}", report)?;
            writeln!(f)?;
        }
        match self.best() {
            Some(best) => write!(
                f,
                "Based on the average turnaround time, the best algorithm is: {:#}",
                best.algorithm
            ),
            None => write!(f, "No algorithm was simulated"),
        }
    }
}

/// The scheduling simulator.
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Processor {
        Processor { config }
    }

    /// Returns the algorithms applicable to `workload`, in evaluation order.
    ///
    /// The priority algorithms are only applicable when the workload has priorities.
    pub fn algorithms(&self, workload: &Workload) -> Vec<Algorithm> {
        [
            Algorithm::FirstComeFirstServed,
            Algorithm::ShortestJobFirst,
            Algorithm::ShortestRemainingTimeFirst,
            Algorithm::RoundRobin {
                quantum: self.config.quantum,
                mode: self.config.round_robin,
            },
            Algorithm::PriorityNonPreemptive,
            Algorithm::PriorityPreemptive,
        ]
        .into_iter()
        .filter(|algorithm| workload.with_priority() || !algorithm.needs_priority())
        .collect()
    }

    /// Simulates every applicable algorithm, each from a pristine copy of `workload`.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{Processor, ProcessorConfig};
    /// use scheduler::{ProcessInput, Workload};
    ///
    /// let workload = Workload::new(
    ///     [
    ///         ProcessInput::new(0, 5),
    ///         ProcessInput::new(1, 3),
    ///         ProcessInput::new(2, 8),
    ///     ],
    ///     false,
    /// )
    /// .unwrap();
    ///
    /// let simulation = Processor::new(ProcessorConfig::default()).run(&workload);
    /// assert_eq!(simulation.reports().len(), 4);
    /// println!("{}", simulation);
    /// ```
    pub fn run(&self, workload: &Workload) -> Simulation {
        let algorithms = self.algorithms(workload);

        let reports: Vec<Report> = if self.config.parallel {
            thread::scope(|s| {
                let handles = algorithms
                    .iter()
                    .map(|&algorithm| {
                        s.spawn(move || run_one(workload, scheduler_for(algorithm).as_mut()))
                    })
                    .collect::<Vec<_>>();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or_else(|err| panic::resume_unwind(err)))
                    .collect()
            })
        } else {
            algorithms
                .iter()
                .map(|&algorithm| run_one(workload, scheduler_for(algorithm).as_mut()))
                .collect()
        };

        Simulation { reports }
    }
}

/// Simulates a single run of `scheduler` over a pristine copy of `workload`.
///
/// ## Panics
///
/// Panics if the scheduler returns before every process completed or if
/// it handed out more or less CPU time than the processes needed.
pub fn run_one(workload: &Workload, scheduler: &mut dyn Scheduler) -> Report {
    let algorithm = scheduler.algorithm();
    let mut processes = workload.snapshot();

    let timeline = scheduler.schedule(&mut processes);
    verify(algorithm, &processes, &timeline);

    let averages = Averages::of(&processes);
    log::info!(
        "{}: average turnaround {:.2}, waiting {:.2}, response {:.2}",
        algorithm,
        averages.turnaround,
        averages.waiting,
        averages.response
    );

    Report {
        algorithm,
        processes,
        timeline,
        averages,
    }
}

fn verify(algorithm: Algorithm, processes: &[Process], timeline: &Timeline) {
    for process in processes {
        assert!(
            process.is_complete(),
            "{} left process {} with {} units remaining",
            algorithm,
            process.pid(),
            process.remaining()
        );
    }

    let work = processes.iter().map(Process::burst).sum::<usize>();
    assert_eq!(
        timeline.busy_time(),
        work,
        "{} handed out {} units of CPU time for {} units of work",
        algorithm,
        timeline.busy_time(),
        work
    );
}

/// Format a [`Simulation`] to a [`String`].
///
/// * `simulation` - the simulation returned by the [`Processor`].
pub fn format_reports(simulation: &Simulation) -> String {
    format!("{}\n", simulation)
}

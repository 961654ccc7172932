//! The scheduling policies.
//!
//! Every policy lives in its own file and is exported here. The
//! selection loops shared by the shortest job and priority policies
//! are implemented at the bottom of this module.

mod fcfs;
pub use fcfs::FirstComeFirstServed;

mod sjf;
pub use sjf::ShortestJobFirst;

mod srtf;
pub use srtf::ShortestRemainingTimeFirst;

mod round_robin;
pub use round_robin::RoundRobin;

mod priority;
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};

use crate::{Process, Timeline};

/// Returns the index of the eligible process with the smallest `key`.
///
/// Ties go to the lowest index, which is the input order.
fn select<K, F>(processes: &[Process], clock: usize, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    processes
        .iter()
        .enumerate()
        .filter(|&(_, process)| process.is_eligible(clock))
        .min_by_key(|&(_, process)| key(process))
        .map(|(index, _)| index)
}

/// Returns the instant the CPU stops idling, the next arrival of a process
/// that still needs the CPU.
///
/// ## Panics
///
/// Panics if no process is pending, which means the caller kept
/// simulating after every process completed.
fn idle_until(processes: &[Process], clock: usize) -> usize {
    let next = processes
        .iter()
        .filter(|process| process.remaining() > 0 && process.arrival() > clock)
        .map(Process::arrival)
        .min();

    let Some(next) = next else {
        panic!("CPU idle at {clock} with no pending arrivals");
    };
    log::trace!("idle from {clock} to {next}");
    next
}

/// Repeatedly dispatches the eligible process with the smallest `key`
/// and runs it to completion.
fn run_to_completion<K, F>(processes: &mut [Process], key: F) -> Timeline
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let Some(index) = select(processes, clock, &key) else {
            clock = idle_until(processes, clock);
            continue;
        };

        let process = &mut processes[index];
        process.dispatch(clock);
        let ran = process.execute(process.remaining());
        log::trace!("{clock}: run {} for {ran}", process.pid());
        timeline.push(process.pid(), clock, ran);

        clock += ran;
        process.complete(clock);
        log::debug!("{clock}: process {} completed", process.pid());
        completed += 1;
    }

    timeline
}

/// Runs the eligible process with the smallest `key` one time unit at a
/// time, so a process that becomes better preempts the running one.
fn run_unit_steps<K, F>(processes: &mut [Process], key: F) -> Timeline
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut completed = 0;

    while completed < processes.len() {
        let Some(index) = select(processes, clock, &key) else {
            clock = idle_until(processes, clock);
            continue;
        };

        let process = &mut processes[index];
        process.dispatch(clock);
        process.execute(1);
        log::trace!("{clock}: run {} for 1", process.pid());
        timeline.extend(process.pid(), clock, 1);

        clock += 1;
        if process.remaining() == 0 {
            process.complete(clock);
            log::debug!("{clock}: process {} completed", process.pid());
            completed += 1;
        }
    }

    timeline
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Pid, ProcessInput, Scheduler, Workload};

    /// Builds processes from `(arrival, burst, priority)` tuples.
    pub(crate) fn processes(specs: &[(usize, usize, i32)]) -> Vec<Process> {
        let inputs = specs
            .iter()
            .map(|&(arrival, burst, priority)| ProcessInput::with_priority(arrival, burst, priority));
        Workload::new(inputs, true).unwrap().snapshot()
    }

    /// Runs `scheduler` and returns the completion time of every process.
    pub(crate) fn completions(scheduler: &mut dyn Scheduler, processes: &mut [Process]) -> Vec<usize> {
        scheduler.schedule(processes);
        processes
            .iter()
            .map(|process| process.metrics().unwrap().completion)
            .collect()
    }

    #[test]
    fn select_prefers_lowest_index_on_ties() {
        let processes = processes(&[(0, 3, 0), (0, 3, 0), (0, 2, 0)]);
        assert_eq!(select(&processes, 0, |process| process.burst()), Some(2));
        assert_eq!(select(&processes, 0, |process| process.priority()), Some(0));
    }

    #[test]
    fn select_ignores_processes_that_have_not_arrived() {
        let processes = processes(&[(0, 5, 0), (3, 1, 0)]);
        assert_eq!(select(&processes, 2, |process| process.burst()), Some(0));
        assert_eq!(select(&processes, 3, |process| process.burst()), Some(1));
    }

    #[test]
    fn idle_jumps_to_next_arrival() {
        let processes = processes(&[(4, 1, 0), (9, 1, 0)]);
        assert_eq!(idle_until(&processes, 0), 4);
        assert_eq!(idle_until(&processes, 4), 9);
    }

    #[test]
    fn unit_steps_merge_contiguous_service() {
        let mut processes = processes(&[(0, 3, 0)]);
        let timeline = run_unit_steps(&mut processes, |process| process.remaining());

        assert_eq!(timeline.slices().len(), 1);
        assert_eq!(timeline.service_of(Pid::from_index(0)), 3);
        assert_eq!(timeline.busy_time(), 3);
    }
}

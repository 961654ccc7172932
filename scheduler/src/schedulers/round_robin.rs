use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::{Algorithm, Process, RoundRobinMode, Scheduler, Timeline};

use super::idle_until;

/// Round robin with a fixed quantum.
///
/// A dispatched process runs for at most `quantum` time units before the
/// CPU moves on. The order in which processes take turns is given by the
/// [`RoundRobinMode`].
#[derive(Debug)]
pub struct RoundRobin {
    quantum: NonZeroUsize,
    mode: RoundRobinMode,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroUsize, mode: RoundRobinMode) -> Self {
        RoundRobin { quantum, mode }
    }

    /// Runs `process` for one quantum at `clock` and returns the new clock.
    fn run_slice(&self, process: &mut Process, clock: usize, timeline: &mut Timeline) -> usize {
        process.dispatch(clock);
        let ran = process.execute(self.quantum.get());
        log::trace!("{clock}: run {} for {ran}", process.pid());
        timeline.push(process.pid(), clock, ran);

        let clock = clock + ran;
        if process.remaining() == 0 {
            process.complete(clock);
            log::debug!("{clock}: process {} completed", process.pid());
        }
        clock
    }

    fn sweep(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = 0;

        while processes.iter().any(|process| process.remaining() > 0) {
            let mut dispatched = false;
            for process in processes.iter_mut() {
                if process.is_eligible(clock) {
                    clock = self.run_slice(process, clock, &mut timeline);
                    dispatched = true;
                }
            }

            if !dispatched {
                clock = idle_until(processes, clock);
            }
        }

        timeline
    }

    fn queue(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = 0;

        let mut arrivals = (0..processes.len()).collect::<VecDeque<usize>>();
        arrivals
            .make_contiguous()
            .sort_by_key(|&index| processes[index].arrival());
        let mut ready_queue = VecDeque::new();

        admit(processes, &mut arrivals, &mut ready_queue, clock);
        while !ready_queue.is_empty() || !arrivals.is_empty() {
            let Some(index) = ready_queue.pop_front() else {
                clock = idle_until(processes, clock);
                admit(processes, &mut arrivals, &mut ready_queue, clock);
                continue;
            };

            clock = self.run_slice(&mut processes[index], clock, &mut timeline);

            // arrivals during the slice queue up ahead of the preempted process
            admit(processes, &mut arrivals, &mut ready_queue, clock);
            if processes[index].remaining() > 0 {
                ready_queue.push_back(index);
            }
        }

        timeline
    }
}

/// Moves the processes that have arrived by `clock` to the ready queue.
fn admit(
    processes: &[Process],
    arrivals: &mut VecDeque<usize>,
    ready_queue: &mut VecDeque<usize>,
    clock: usize,
) {
    while let Some(&index) = arrivals.front() {
        if processes[index].arrival() > clock {
            break;
        }
        ready_queue.push_back(index);
        arrivals.pop_front();
    }
}

impl Scheduler for RoundRobin {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin {
            quantum: self.quantum,
            mode: self.mode,
        }
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        match self.mode {
            RoundRobinMode::Sweep => self.sweep(processes),
            RoundRobinMode::Queue => self.queue(processes),
        }
    }
}

use crate::{Algorithm, Process, Scheduler, Timeline};

/// Runs the processes to completion in input order.
///
/// The input is expected to be ordered by arrival. It is not sorted, a
/// process listed before an earlier arrival is still served first.
#[derive(Debug, Default)]
pub struct FirstComeFirstServed;

impl FirstComeFirstServed {
    pub fn new() -> Self {
        FirstComeFirstServed
    }
}

impl Scheduler for FirstComeFirstServed {
    fn algorithm(&self) -> Algorithm {
        Algorithm::FirstComeFirstServed
    }

    fn schedule(&mut self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock = 0;

        for process in processes.iter_mut() {
            clock = clock.max(process.arrival());
            process.dispatch(clock);
            let ran = process.execute(process.remaining());
            log::trace!("{clock}: run {} for {ran}", process.pid());
            timeline.push(process.pid(), clock, ran);

            clock += ran;
            process.complete(clock);
            log::debug!("{clock}: process {} completed", process.pid());
        }

        timeline
    }
}

use std::fmt::Display;

use crate::{Algorithm, Process};

/// The mean metrics of one run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Averages {
    pub turnaround: f64,
    pub waiting: f64,
    pub response: f64,
}

impl Averages {
    /// Averages the metrics of completed processes.
    ///
    /// ## Panics
    ///
    /// Panics if `processes` is empty or if a process has not completed.
    pub fn of(processes: &[Process]) -> Averages {
        assert!(!processes.is_empty(), "cannot average an empty run");

        let (mut turnaround, mut waiting, mut response) = (0.0, 0.0, 0.0);
        for process in processes {
            let Some(metrics) = process.metrics() else {
                panic!("process {} has not completed", process.pid());
            };
            turnaround += metrics.turnaround as f64;
            waiting += metrics.waiting as f64;
            response += metrics.response as f64;
        }

        let count = processes.len() as f64;
        Averages {
            turnaround: turnaround / count,
            waiting: waiting / count,
            response: response / count,
        }
    }
}

impl Display for Averages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Average Turnaround Time: {:.2}", self.turnaround)?;
        writeln!(f, "Average Waiting Time: {:.2}", self.waiting)?;
        write!(f, "Average Response Time: {:.2}", self.response)
    }
}

/// Picks the algorithm with the smallest average turnaround time.
///
/// Candidates are considered in the fixed evaluation order given by
/// [`Algorithm::rank`], whatever order they come in, and an exact tie goes
/// to the algorithm that comes first. Returns [`None`] without candidates.
pub fn best<I>(candidates: I) -> Option<Algorithm>
where
    I: IntoIterator<Item = (Algorithm, Averages)>,
{
    let mut candidates = candidates.into_iter().collect::<Vec<(Algorithm, Averages)>>();
    candidates.sort_by_key(|(algorithm, _)| algorithm.rank());

    let mut best: Option<(Algorithm, f64)> = None;
    for (algorithm, averages) in candidates {
        match best {
            Some((_, turnaround)) if averages.turnaround >= turnaround => {}
            _ => best = Some((algorithm, averages.turnaround)),
        }
    }

    best.map(|(algorithm, _)| algorithm)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::{Pid, RoundRobinMode};

    fn averages(turnaround: f64) -> Averages {
        Averages {
            turnaround,
            waiting: 0.0,
            response: 0.0,
        }
    }

    #[test]
    fn averages_of_completed_processes() {
        let mut processes = vec![
            Process::new(Pid::from_index(0), 0, NonZeroUsize::new(2).unwrap(), 0),
            Process::new(Pid::from_index(1), 1, NonZeroUsize::new(2).unwrap(), 0),
        ];
        processes[0].dispatch(0);
        processes[0].execute(2);
        processes[0].complete(2);
        processes[1].dispatch(2);
        processes[1].execute(2);
        processes[1].complete(4);

        let averages = Averages::of(&processes);
        assert_eq!(averages.turnaround, 2.5);
        assert_eq!(averages.waiting, 0.5);
        assert_eq!(averages.response, 0.5);
    }

    #[test]
    fn smallest_turnaround_wins() {
        let winner = best([
            (Algorithm::FirstComeFirstServed, averages(8.0)),
            (Algorithm::ShortestRemainingTimeFirst, averages(6.5)),
            (Algorithm::ShortestJobFirst, averages(7.0)),
        ]);
        assert_eq!(winner, Some(Algorithm::ShortestRemainingTimeFirst));
    }

    #[test]
    fn ties_go_to_evaluation_order() {
        let round_robin = Algorithm::RoundRobin {
            quantum: NonZeroUsize::new(2).unwrap(),
            mode: RoundRobinMode::Sweep,
        };
        let winner = best([
            (Algorithm::PriorityPreemptive, averages(4.0)),
            (round_robin, averages(4.0)),
            (Algorithm::PriorityNonPreemptive, averages(4.0)),
        ]);
        assert_eq!(winner, Some(round_robin));
    }

    #[test]
    fn no_candidates() {
        assert_eq!(best(Vec::new()), None);
    }
}

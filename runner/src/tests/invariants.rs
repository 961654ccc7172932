use std::num::NonZeroUsize;

use processor::{run_one, Processor, ProcessorConfig, Report};
use scheduler::{scheduler_for, Algorithm, RoundRobinMode, Workload};

use super::workload_with_priority;

fn workloads() -> Vec<Workload> {
    let specs: [Vec<(usize, usize, i32)>; 6] = [
        vec![(0, 5, 0), (1, 3, 0), (2, 8, 0)],
        vec![(0, 4, 2), (1, 3, 1), (2, 1, 3)],
        vec![(0, 2, 1), (6, 3, 0), (7, 1, 2), (20, 4, 1)],
        vec![(0, 3, 1), (0, 3, 1), (0, 3, 1), (0, 3, 1)],
        vec![(5, 2, 3), (3, 6, -2), (0, 1, 0), (1, 9, 4), (2, 4, -2)],
        vec![(2, 1, 0), (2, 7, 1), (3, 2, -1), (4, 5, 0), (4, 1, 2), (9, 3, 1)],
    ];
    specs
        .iter()
        .map(|specs| workload_with_priority(specs))
        .collect()
}

fn algorithms() -> Vec<Algorithm> {
    let mut algorithms = vec![
        Algorithm::FirstComeFirstServed,
        Algorithm::ShortestJobFirst,
        Algorithm::ShortestRemainingTimeFirst,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];
    for quantum in 1..=4 {
        for mode in [RoundRobinMode::Sweep, RoundRobinMode::Queue] {
            algorithms.push(Algorithm::RoundRobin {
                quantum: NonZeroUsize::new(quantum).unwrap(),
                mode,
            });
        }
    }
    algorithms
}

fn reports() -> Vec<Report> {
    let mut reports = Vec::new();
    for workload in workloads() {
        for algorithm in algorithms() {
            reports.push(run_one(&workload, scheduler_for(algorithm).as_mut()));
        }
    }
    reports
}

#[test]
pub fn metrics_are_consistent() {
    for report in reports() {
        for process in &report.processes {
            let metrics = process.metrics().unwrap();
            let start = process.start().unwrap();

            assert_eq!(process.remaining(), 0, "{}", report.algorithm);
            assert_eq!(
                metrics.completion,
                metrics.waiting + process.burst() + process.arrival(),
                "{}",
                report.algorithm
            );
            assert_eq!(metrics.turnaround, metrics.waiting + process.burst());
            assert_eq!(metrics.response, start - process.arrival());
            assert!(metrics.turnaround >= process.burst());
        }
    }
}

#[test]
pub fn no_burst_time_is_lost() {
    for report in reports() {
        let work = report
            .processes
            .iter()
            .map(|process| process.burst())
            .sum::<usize>();
        assert_eq!(report.timeline.busy_time(), work, "{}", report.algorithm);

        for process in &report.processes {
            assert_eq!(
                report.timeline.service_of(process.pid()),
                process.burst(),
                "{}",
                report.algorithm
            );
        }
    }
}

#[test]
pub fn slices_do_not_overlap() {
    for report in reports() {
        let slices = report.timeline.slices();
        for pair in slices.windows(2) {
            assert!(pair[0].end <= pair[1].start, "{}", report.algorithm);
        }

        for slice in slices {
            assert!(!slice.is_empty(), "{}", report.algorithm);
            let process = &report.processes[slice.pid.get() - 1];
            assert!(slice.start >= process.arrival(), "{}", report.algorithm);
        }
    }
}

#[test]
pub fn start_is_the_first_dispatch() {
    for report in reports() {
        for process in &report.processes {
            let first = report
                .timeline
                .slices()
                .iter()
                .find(|slice| slice.pid == process.pid())
                .unwrap();
            assert_eq!(process.start(), Some(first.start), "{}", report.algorithm);

            let last = report
                .timeline
                .slices()
                .iter()
                .rev()
                .find(|slice| slice.pid == process.pid())
                .unwrap();
            assert_eq!(
                process.metrics().unwrap().completion,
                last.end,
                "{}",
                report.algorithm
            );
        }
    }
}

#[test]
pub fn round_robin_respects_the_quantum() {
    for report in reports() {
        if let Algorithm::RoundRobin { quantum, .. } = report.algorithm {
            assert!(report
                .timeline
                .slices()
                .iter()
                .all(|slice| slice.len() <= quantum.get()));
        }
    }
}

#[test]
pub fn single_process_never_waits() {
    let workload = workload_with_priority(&[(7, 5, 3)]);
    for algorithm in algorithms() {
        let report = run_one(&workload, scheduler_for(algorithm).as_mut());
        let metrics = report.processes[0].metrics().unwrap();

        assert_eq!(metrics.waiting, 0, "{}", algorithm);
        assert_eq!(metrics.response, 0, "{}", algorithm);
        assert_eq!(metrics.completion, 12, "{}", algorithm);
    }
}

#[test]
pub fn fcfs_is_deterministic() {
    for workload in workloads() {
        let first = run_one(&workload, &mut scheduler::fcfs());
        let second = run_one(&workload, &mut scheduler::fcfs());
        assert_eq!(first, second);
    }
}

#[test]
pub fn parallel_matches_sequential() {
    for workload in workloads() {
        for round_robin in [RoundRobinMode::Sweep, RoundRobinMode::Queue] {
            let config = ProcessorConfig {
                round_robin,
                ..ProcessorConfig::default()
            };
            let sequential = Processor::new(config).run(&workload);
            let parallel = Processor::new(ProcessorConfig {
                parallel: true,
                ..config
            })
            .run(&workload);

            assert_eq!(sequential, parallel);
            assert_eq!(sequential.reports().len(), 6);
        }
    }
}

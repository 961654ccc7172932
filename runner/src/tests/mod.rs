use std::env;
use std::fs;
use std::num::NonZeroUsize;

use processor::{format_reports, Processor, ProcessorConfig, Simulation};
use scheduler::{ProcessInput, RoundRobinMode, Workload};

mod invariants;

fn write_output(folder: &str, name: &str, output: &str) {
    let (quantum, mode) = arguments();
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(
        format!("../outputs/{folder}/{name}___{quantum}_{mode}.log"),
        output,
    )
    .unwrap();
}

fn read_output(folder: &str, name: &str) -> String {
    let (quantum, mode) = arguments();
    fs::read_to_string(format!(
        "../outputs/{folder}/{name}___{quantum}_{mode}.log"
    ))
    .unwrap()
}

fn run(folder: &str, name: &str, simulation: &Simulation) {
    let output = format_reports(simulation);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_output(folder, name, &output);
    } else {
        let reference = read_output(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn arguments() -> (NonZeroUsize, RoundRobinMode) {
    let quantum = env::var("QUANTUM")
        .unwrap_or("2".to_string())
        .parse::<NonZeroUsize>()
        .unwrap();
    let mode = match env::var("ROUND_ROBIN").as_deref() {
        Ok("queue") => RoundRobinMode::Queue,
        _ => RoundRobinMode::Sweep,
    };
    (quantum, mode)
}

fn processor() -> Processor {
    let (quantum, round_robin) = arguments();

    println!("Quantum {quantum}\nRound robin {round_robin}");
    Processor::new(ProcessorConfig {
        quantum,
        round_robin,
        ..ProcessorConfig::default()
    })
}

fn workload(specs: &[(usize, usize)]) -> Workload {
    Workload::new(
        specs
            .iter()
            .map(|&(arrival, burst)| ProcessInput::new(arrival, burst)),
        false,
    )
    .unwrap()
}

fn workload_with_priority(specs: &[(usize, usize, i32)]) -> Workload {
    Workload::new(
        specs
            .iter()
            .map(|&(arrival, burst, priority)| ProcessInput::with_priority(arrival, burst, priority)),
        true,
    )
    .unwrap()
}

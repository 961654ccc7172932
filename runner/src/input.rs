use std::collections::VecDeque;
use std::error::Error;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use scheduler::{ProcessInput, Workload, WorkloadError};

/// The reasons the operator input cannot be used.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),

    /// The input ended while `expected` was still missing.
    UnexpectedEnd { expected: &'static str },

    /// `token` is not a valid `expected`.
    Malformed {
        expected: &'static str,
        token: String,
    },

    /// The answer to the priority question is neither yes nor no.
    Answer(String),

    Workload(WorkloadError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "cannot read input: {}", err),
            InputError::UnexpectedEnd { expected } => {
                write!(f, "input ended while reading the {}", expected)
            }
            InputError::Malformed { expected, token } => {
                write!(f, "{:?} is not a valid {}", token, expected)
            }
            InputError::Answer(answer) => write!(f, "expected y or n, got {:?}", answer),
            InputError::Workload(err) => write!(f, "{}", err),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            InputError::Workload(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<WorkloadError> for InputError {
    fn from(err: WorkloadError) -> Self {
        InputError::Workload(err)
    }
}

/// Whitespace separated tokens, read a line at a time so that prompts
/// show up before the operator answers them.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<String, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(InputError::UnexpectedEnd { expected });
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, InputError> {
        let token = self.next_token(expected)?;
        token
            .parse()
            .map_err(|_| InputError::Malformed { expected, token })
    }
}

/// Reads the workload the way the operator types it: the number of
/// processes, whether they have priorities (`y`/`n`), then the arrival and
/// burst time of every process, each followed by its priority if requested.
///
/// * `input` - where the answers are read from
/// * `prompt` - where the questions are written to
pub fn read_workload<R, W>(input: R, prompt: &mut W) -> Result<Workload, InputError>
where
    R: BufRead,
    W: Write,
{
    let mut tokens = Tokens::new(input);

    write!(prompt, "Enter the number of processes: ")?;
    prompt.flush()?;
    let count = tokens.next::<usize>("number of processes")?;

    write!(prompt, "Do processes have priority? (y/n): ")?;
    prompt.flush()?;
    let answer = tokens.next_token("priority answer")?;
    let with_priority = match answer.as_str() {
        "y" | "Y" => true,
        "n" | "N" => false,
        _ => return Err(InputError::Answer(answer)),
    };

    let mut inputs = Vec::new();
    for id in 1..=count {
        write!(
            prompt,
            "Enter Arrival Time and Burst Time for Process {}: ",
            id
        )?;
        prompt.flush()?;
        let arrival = tokens.next::<usize>("arrival time")?;
        let burst = tokens.next::<usize>("burst time")?;

        let priority = if with_priority {
            write!(prompt, "Enter Priority for Process {}: ", id)?;
            prompt.flush()?;
            Some(tokens.next::<i32>("priority")?)
        } else {
            None
        };

        inputs.push(ProcessInput {
            arrival,
            burst,
            priority,
        });
    }

    log::debug!("read {} processes", inputs.len());
    Ok(Workload::new(inputs, with_priority)?)
}

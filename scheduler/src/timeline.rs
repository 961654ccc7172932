use std::fmt::Display;

use crate::Pid;

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub start: usize,
    pub end: usize,
}

impl Slice {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{} P{}]", self.start, self.end, self.pid)
    }
}

/// The CPU slices handed out during one run, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Timeline {
        Timeline::default()
    }

    /// Records a new dispatch of `pid` for `units` starting at `start`.
    pub fn push(&mut self, pid: Pid, start: usize, units: usize) {
        self.slices.push(Slice {
            pid,
            start,
            end: start + units,
        });
    }

    /// Like [`Timeline::push`], but merges the units into the last slice when
    /// the same process keeps running without interruption.
    pub fn extend(&mut self, pid: Pid, start: usize, units: usize) {
        match self.slices.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end += units,
            _ => self.push(pid, start, units),
        }
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> usize {
        self.slices.iter().map(Slice::len).sum()
    }

    /// Total service a single process received.
    pub fn service_of(&self, pid: Pid) -> usize {
        self.slices
            .iter()
            .filter(|slice| slice.pid == pid)
            .map(Slice::len)
            .sum()
    }
}

impl Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut slices = self.slices.iter();
        if let Some(first) = slices.next() {
            write!(f, "{}", first)?;
        }
        for slice in slices {
            write!(f, " {}", slice)?;
        }
        Ok(())
    }
}

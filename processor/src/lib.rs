//! A processor simulation library
//!
//! This is used for simulating the scheduling algorithms from the
//! [`scheduler`] crate on one or more processors, tick by tick.

use std::fmt::{self, Display};

use scheduler::{Algorithm, Pid, Process, ProcessState};

mod engine;
mod error;
mod workload;

pub use engine::Processor;
pub use error::{Result, SimulationError};
pub use workload::{ProcessSpec, SimulationConfig, Workload, DEFAULT_INPUT};

/// A single state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Log {
    /// The simulation time of the transition.
    pub tick: usize,

    /// The process that changed state.
    pub pid: Pid,

    /// The state the process moved to.
    pub state: ProcessState,

    /// The execution time the process still needs.
    pub remaining: usize,

    /// The 1-based index of the processor involved, if any.
    pub processor: Option<usize>,
}

impl Log {
    fn new(tick: usize, process: &dyn Process, processor: Option<usize>) -> Log {
        Log {
            tick,
            pid: process.pid(),
            state: process.state(),
            remaining: process.remaining(),
            processor,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:P{} -> {} ({})",
            self.tick, self.pid, self.state, self.remaining
        )?;
        if let Some(processor) = self.processor {
            write!(f, " {processor}")?;
        }
        Ok(())
    }
}

/// Format the [`Processor`]'s logs to a [`String`], one transition per line.
///
/// * `logs` - the logs returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, Processor, Workload};
/// use scheduler::Algorithm;
///
/// let workload = Workload::parse("1 2|1|1|0 1").unwrap();
/// let logs = Processor::run(workload, Algorithm::Fifo).unwrap();
///
/// print!("{}", format_logs(&logs));
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for log in logs {
        // Writing into a String cannot fail.
        let _ = fmt::write(&mut s, format_args!("{log}\n"));
    }
    s
}

/// Parse `input` and run it to completion with `algorithm`.
///
/// ## Example
///
/// ```rust
/// use processor::{simulate, DEFAULT_INPUT};
/// use scheduler::Algorithm;
///
/// let logs = simulate(DEFAULT_INPUT, Algorithm::RoundRobin).unwrap();
/// assert_eq!(logs.first().unwrap().to_string(), "00:P0 -> created (5)");
/// ```
pub fn simulate(input: &str, algorithm: Algorithm) -> Result<Vec<Log>> {
    Processor::run(Workload::parse(input)?, algorithm)
}

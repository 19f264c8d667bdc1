//! A scheduler library.
//!
//! This library provides the process records, the process queue and the
//! scheduling policies used by the [`processor`] simulator.
//!
//! [`processor`]: ../processor/index.html

mod queue;
mod scheduler;
mod schedulers;

pub use crate::queue::ProcessQueue;
pub use crate::scheduler::{Block, Pcb, Pid, Process, ProcessState};
pub use crate::schedulers::{Algorithm, Fifo, Policy, RoundRobin, Sjf, Srt, UnknownAlgorithm};

/// Pick the next process to run from `ready` with the given algorithm.
///
/// * `algorithm` - the scheduling algorithm
/// * `ready` - the ready queue, the selected record is removed from it
/// * `quantum` - the Round-Robin quantum, ignored by the current policies
/// * `now` - the current simulation time, ignored by the current policies
///
/// Returns `None` if `ready` is empty.
pub fn select(
    algorithm: Algorithm,
    ready: &mut ProcessQueue,
    quantum: usize,
    now: usize,
) -> Option<Pcb> {
    algorithm.select(ready, quantum, now)
}

use crate::schedulers::{Policy, Sjf};
use crate::{Pcb, ProcessQueue};

/// Shortest remaining time.
///
/// Selection is the same as [`Sjf`]. The simulator additionally preempts
/// running processes that are longer than the shortest ready one whenever
/// new processes arrive.
pub struct Srt;

impl Policy for Srt {
    fn select(&self, ready: &mut ProcessQueue, quantum: usize, now: usize) -> Option<Pcb> {
        Sjf.select(ready, quantum, now)
    }

    fn name(&self) -> &'static str {
        "SRT"
    }
}

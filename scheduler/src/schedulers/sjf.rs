use crate::schedulers::Policy;
use crate::{Pcb, ProcessQueue};

/// Shortest job first.
///
/// Picks the record with the least remaining time, the earliest one on
/// ties. A running process is never preempted.
pub struct Sjf;

impl Policy for Sjf {
    fn select(&self, ready: &mut ProcessQueue, _quantum: usize, _now: usize) -> Option<Pcb> {
        ready.take_shortest()
    }

    fn name(&self) -> &'static str {
        "SJF"
    }
}

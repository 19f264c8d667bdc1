use crate::schedulers::Policy;
use crate::{Pcb, ProcessQueue};

/// First come, first served: the longest waiting record runs next.
pub struct Fifo;

impl Policy for Fifo {
    fn select(&self, ready: &mut ProcessQueue, _quantum: usize, _now: usize) -> Option<Pcb> {
        ready.pop()
    }

    fn name(&self) -> &'static str {
        "FIFO"
    }
}

use crate::schedulers::Policy;
use crate::{Pcb, ProcessQueue};

/// Round-Robin.
///
/// Always hands out the head of the ready queue. Quantum expiry is
/// enforced by the simulator, which puts the expired process back at
/// the tail.
pub struct RoundRobin;

impl Policy for RoundRobin {
    fn select(&self, ready: &mut ProcessQueue, _quantum: usize, _now: usize) -> Option<Pcb> {
        ready.pop()
    }

    fn name(&self) -> &'static str {
        "RR"
    }
}

//! The scheduling policies.
//!
//! Every policy only picks a record out of the ready queue. Preemption
//! (quantum expiry, shorter arrivals) is enacted by the simulator, which
//! asks the [`Algorithm`] whether it applies.

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::{Pcb, ProcessQueue};

mod fifo;
pub use fifo::Fifo;

mod sjf;
pub use sjf::Sjf;

mod round_robin;
pub use round_robin::RoundRobin;

mod srt;
pub use srt::Srt;

/// The trait that every scheduling policy implements.
pub trait Policy {
    /// Remove and return the record that should run next.
    ///
    /// * `ready` - the ready queue
    /// * `quantum` - the configured Round-Robin quantum
    /// * `now` - the current simulation time
    ///
    /// Returns `None` when the ready queue is empty.
    fn select(&self, ready: &mut ProcessQueue, quantum: usize, now: usize) -> Option<Pcb>;

    /// Short name of the policy.
    fn name(&self) -> &'static str;
}

/// The scheduling algorithms the simulator supports.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// First come, first served.
    Fifo,
    /// Shortest job first, non preemptive.
    Sjf,
    /// Round-Robin with a fixed quantum.
    #[default]
    RoundRobin,
    /// Shortest remaining time, preempts on arrival.
    Srt,
}

/// Returned when a token does not name any [`Algorithm`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheduling algorithm `{0}` (expected one of fifo, sjf, rr, srt)")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fifo,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Srt,
    ];

    /// Resolve an optional command line token.
    ///
    /// A missing token selects Round-Robin. An unknown token also selects
    /// Round-Robin, after emitting a warning.
    pub fn from_token(token: Option<&str>) -> Algorithm {
        match token.map(str::parse::<Algorithm>) {
            None => Algorithm::default(),
            Some(Ok(algorithm)) => algorithm,
            Some(Err(err)) => {
                warn!("{err}, falling back to {}", Algorithm::default());
                Algorithm::default()
            }
        }
    }

    fn policy(self) -> &'static dyn Policy {
        match self {
            Algorithm::Fifo => &Fifo,
            Algorithm::Sjf => &Sjf,
            Algorithm::RoundRobin => &RoundRobin,
            Algorithm::Srt => &Srt,
        }
    }

    /// Pick the next record from `ready` with this algorithm's policy.
    pub fn select(self, ready: &mut ProcessQueue, quantum: usize, now: usize) -> Option<Pcb> {
        self.policy().select(ready, quantum, now)
    }

    /// Running processes lose their processor once they used up the quantum.
    pub fn preempts_on_quantum(self) -> bool {
        self == Algorithm::RoundRobin
    }

    /// Running processes lose their processor when a shorter one arrives.
    pub fn preempts_on_arrival(self) -> bool {
        self == Algorithm::Srt
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Algorithm::Fifo),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" => Ok(Algorithm::RoundRobin),
            "srt" => Ok(Algorithm::Srt),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.policy().name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pid, Process};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn queue(remaining: &[usize]) -> ProcessQueue {
        let mut queue = ProcessQueue::new();
        for (pid, remaining) in remaining.iter().enumerate() {
            queue.push(Pcb::new(Pid::new(pid), *remaining, None));
        }
        queue
    }

    fn pids(queue: &ProcessQueue) -> Vec<usize> {
        queue.iter().map(|pcb| pcb.pid().get()).collect()
    }

    #[test]
    fn tokens() {
        assert_eq!("fifo".parse::<Algorithm>(), Ok(Algorithm::Fifo));
        assert_eq!("SJF".parse::<Algorithm>(), Ok(Algorithm::Sjf));
        assert_eq!("rr".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("srt".parse::<Algorithm>(), Ok(Algorithm::Srt));
        assert_eq!(
            "lottery".parse::<Algorithm>(),
            Err(UnknownAlgorithm("lottery".to_string()))
        );
    }

    #[test]
    fn fallback_is_round_robin() {
        assert_eq!(Algorithm::from_token(None), Algorithm::RoundRobin);
        assert_eq!(Algorithm::from_token(Some("edf")), Algorithm::RoundRobin);
        assert_eq!(Algorithm::from_token(Some("srt")), Algorithm::Srt);
    }

    #[test]
    fn names() {
        let names: Vec<String> = Algorithm::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["FIFO", "SJF", "RR", "SRT"]);
    }

    #[test]
    fn preemption_flags() {
        assert!(Algorithm::RoundRobin.preempts_on_quantum());
        assert!(!Algorithm::Srt.preempts_on_quantum());
        assert!(Algorithm::Srt.preempts_on_arrival());
        assert!(!Algorithm::Sjf.preempts_on_arrival());
        assert!(!Algorithm::Fifo.preempts_on_arrival());
    }

    #[test]
    fn empty_ready_queue() {
        for algorithm in Algorithm::ALL {
            assert!(algorithm.select(&mut ProcessQueue::new(), 2, 0).is_none());
        }
    }

    proptest! {
        #[test]
        fn shortest_policies_take_global_minimum(
            remaining in prop::collection::vec(0usize..20, 1..12),
            shortest_first in any::<bool>(),
        ) {
            let algorithm = if shortest_first { Algorithm::Sjf } else { Algorithm::Srt };
            let mut ready = queue(&remaining);
            let selected = algorithm.select(&mut ready, 2, 0).unwrap();

            let minimum = *remaining.iter().min().unwrap();
            let first = remaining.iter().position(|r| *r == minimum).unwrap();
            prop_assert_eq!(selected.remaining(), minimum);
            prop_assert_eq!(selected.pid().get(), first);

            let expected: Vec<usize> = (0..remaining.len()).filter(|pid| *pid != first).collect();
            prop_assert_eq!(pids(&ready), expected);
        }

        #[test]
        fn head_policies_pop(
            remaining in prop::collection::vec(0usize..20, 1..12),
            quantum in 1usize..5,
            round_robin in any::<bool>(),
        ) {
            let algorithm = if round_robin { Algorithm::RoundRobin } else { Algorithm::Fifo };
            let mut ready = queue(&remaining);
            let mut reference = queue(&remaining);

            let selected = algorithm.select(&mut ready, quantum, 7).unwrap();
            let popped = reference.pop().unwrap();
            prop_assert_eq!(selected, popped);
            prop_assert_eq!(pids(&ready), pids(&reference));
        }
    }
}

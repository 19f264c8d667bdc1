use std::fmt::{self, Display};
use std::ops::Add;

/// The PID of a process
///
/// PIDs start from 0 and are handed out in arrival order.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl PartialEq<usize> for Pid {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<usize> for Pid {
    type Output = Pid;

    fn add(self, rhs: usize) -> Self::Output {
        Pid::new(self.0 + rhs)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has just arrived.
    Created,

    /// The process waits in the ready queue for its first dispatch.
    Ready,

    /// The process holds a processor slot.
    Running,

    /// The process has no execution time left. Terminal.
    Finished,

    /// The process waits for its I/O block to elapse.
    Blocked,

    /// Reserved, no transition leads here.
    SuspendedBlocked,

    /// The process was preempted or unblocked and sits in the ready queue again.
    SuspendedReady,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessState::Created => write!(f, "created"),
            ProcessState::Ready => write!(f, "ready"),
            ProcessState::Running => write!(f, "executing"),
            ProcessState::Finished => write!(f, "finished"),
            ProcessState::Blocked => write!(f, "blocked"),
            ProcessState::SuspendedBlocked => write!(f, "suspended, blocked"),
            ProcessState::SuspendedReady => write!(f, "suspended, ready"),
        }
    }
}

/// An I/O block a process performs once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The simulation time at which the running process blocks.
    pub moment: usize,

    /// The number of ticks the process stays blocked.
    pub duration: usize,
}

impl Block {
    pub fn new(moment: usize, duration: usize) -> Block {
        Block { moment, duration }
    }
}

/// The trait that gives a read-only view of a process.
///
/// The transition log uses it to snapshot a record without
/// taking ownership of it.
pub trait Process {
    /// Return the PID of the process.
    fn pid(&self) -> Pid;

    /// Return the state of the process.
    fn state(&self) -> ProcessState;

    /// Returns the execution time the process still needs.
    fn remaining(&self) -> usize;
}

/// The Process Control Block (PCB).
///
/// A PCB is owned by exactly one queue or processor slot at a time,
/// which is why it is not `Clone`.
#[derive(Debug, PartialEq, Eq)]
pub struct Pcb {
    pid: Pid,
    state: ProcessState,
    remaining: usize,
    block: Option<Block>,
    quantum_used: usize,
}

impl Pcb {
    pub fn new(pid: Pid, execution_time: usize, block: Option<Block>) -> Self {
        Pcb {
            pid,
            state: ProcessState::Created,
            remaining: execution_time,
            block,
            quantum_used: 0,
        }
    }

    pub fn set_state(&mut self, state: ProcessState) {
        self.state = state;
    }

    pub fn block(&self) -> Option<Block> {
        self.block
    }

    pub fn quantum_used(&self) -> usize {
        self.quantum_used
    }

    /// Consume one unit of execution time on the current processor.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        self.quantum_used += 1;
    }

    pub fn reset_quantum(&mut self) {
        self.quantum_used = 0;
    }

    /// Returns `true` when the process has to block at simulation time `now`.
    pub fn blocks_at(&self, now: usize) -> bool {
        self.block.map_or(false, |block| block.moment == now)
    }

    /// The simulation time from which a blocked process may return to the ready queue.
    pub fn unblock_at(&self) -> Option<usize> {
        self.block.map(|block| block.moment.saturating_add(block.duration))
    }
}

impl Process for Pcb {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn state(&self) -> ProcessState {
        self.state
    }

    fn remaining(&self) -> usize {
        self.remaining
    }
}

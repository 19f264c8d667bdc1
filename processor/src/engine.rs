use std::collections::VecDeque;

use scheduler::{Algorithm, Pcb, Pid, Process, ProcessQueue, ProcessState};
use tracing::{debug, info, trace};

use crate::error::{Result, SimulationError};
use crate::workload::{ProcessSpec, SimulationConfig, Workload};
use crate::Log;

/// The processor simulator.
///
/// Every call to [`Processor::step`] advances the simulation by one tick:
///
/// 1. processes whose arrival time has come are created and made ready,
/// 2. with SRT, running processes longer than the shortest ready one are preempted,
/// 3. idle processors get the process chosen by the scheduling algorithm,
/// 4. running processes finish, block or execute one unit (and may expire their quantum),
/// 5. blocked processes whose block has elapsed go back to the ready queue,
/// 6. finished processes are retired,
/// 7. the clock advances.
pub struct Processor {
    algorithm: Algorithm,
    config: SimulationConfig,
    clock: usize,
    next_pid: Pid,
    arrivals: VecDeque<ProcessSpec>,
    created: ProcessQueue,
    ready: ProcessQueue,
    blocked: ProcessQueue,
    finished: ProcessQueue,
    slots: Vec<Option<Pcb>>,
    finished_count: usize,
    logs: Vec<Log>,
}

impl Processor {
    /// Prepare a simulation of `workload` scheduled by `algorithm`.
    pub fn new(workload: Workload, algorithm: Algorithm) -> Result<Processor> {
        let Workload { config, processes } = workload;

        let mut arrivals = VecDeque::new();
        arrivals
            .try_reserve_exact(processes.len())
            .map_err(|err| SimulationError::allocation("arrival schedule", err))?;
        arrivals.extend(processes);

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(config.processors)
            .map_err(|err| SimulationError::allocation("processor slots", err))?;
        slots.resize_with(config.processors, || None);

        Ok(Processor {
            algorithm,
            config,
            clock: 0,
            next_pid: Pid::new(0),
            arrivals,
            created: ProcessQueue::new(),
            ready: ProcessQueue::new(),
            blocked: ProcessQueue::new(),
            finished: ProcessQueue::new(),
            slots,
            finished_count: 0,
            logs: vec![],
        })
    }

    /// Run `workload` until all the declared processes have finished.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::{format_logs, Processor, Workload};
    /// use scheduler::Algorithm;
    ///
    /// let workload = Workload::parse("1 2|1|2|0 3|0 2").unwrap();
    /// let logs = Processor::run(workload, Algorithm::Fifo).unwrap();
    /// assert_eq!(logs.last().unwrap().to_string(), "06:P1 -> finished (0) 1");
    /// ```
    pub fn run(workload: Workload, algorithm: Algorithm) -> Result<Vec<Log>> {
        let mut processor = Processor::new(workload, algorithm)?;
        info!(
            %algorithm,
            processors = processor.config.processors,
            processes = processor.config.process_count,
            quantum = processor.config.quantum,
            "starting simulation"
        );

        while !processor.is_done() {
            processor.step();
        }

        info!(ticks = processor.clock, "all processes finished");
        Ok(processor.logs)
    }

    /// Run a single tick and return the transitions it produced.
    pub fn step(&mut self) -> &[Log] {
        let first = self.logs.len();
        trace!(tick = self.clock, "tick");

        let arrived = self.admit_arrivals();
        if arrived && self.algorithm.preempts_on_arrival() {
            self.preempt_longer();
        }
        self.dispatch();
        self.execute();
        self.unblock();
        self.retire();
        self.clock += 1;

        &self.logs[first..]
    }

    /// Returns `true` once the declared number of processes has finished.
    pub fn is_done(&self) -> bool {
        self.finished_count >= self.config.process_count
    }

    /// The current simulation time.
    pub fn clock(&self) -> usize {
        self.clock
    }

    pub fn ready(&self) -> &ProcessQueue {
        &self.ready
    }

    pub fn blocked(&self) -> &ProcessQueue {
        &self.blocked
    }

    /// The processor slots, `None` marks an idle processor.
    pub fn slots(&self) -> &[Option<Pcb>] {
        &self.slots
    }

    pub fn finished_count(&self) -> usize {
        self.finished_count
    }

    /// Number of processes created so far.
    pub fn created_count(&self) -> usize {
        self.next_pid.get()
    }

    fn log(&mut self, pcb: &Pcb, slot: Option<usize>) {
        let processor = slot.map(|index| index + 1);
        debug!(
            tick = self.clock,
            pid = %pcb.pid(),
            state = %pcb.state(),
            remaining = pcb.remaining(),
            processor,
            "transition"
        );
        self.logs.push(Log::new(self.clock, pcb, processor));
    }

    fn admit_arrivals(&mut self) -> bool {
        while let Some(spec) = self.arrivals.front().copied() {
            if spec.arrival != self.clock {
                break;
            }
            self.arrivals.pop_front();

            let pcb = Pcb::new(self.next_pid, spec.execution, spec.block);
            self.next_pid = self.next_pid + 1;
            self.log(&pcb, None);
            self.created.push(pcb);
        }

        let mut arrived = false;
        while let Some(mut pcb) = self.created.pop() {
            arrived = true;
            pcb.set_state(ProcessState::Ready);
            self.log(&pcb, None);
            self.ready.push(pcb);
        }
        arrived
    }

    fn preempt_longer(&mut self) {
        let Some(shortest) = self.ready.shortest_remaining() else {
            return;
        };

        for index in 0..self.slots.len() {
            let Some(mut pcb) = self.slots[index].take_if(|pcb| pcb.remaining() > shortest) else {
                continue;
            };
            pcb.set_state(ProcessState::SuspendedReady);
            pcb.reset_quantum();
            self.log(&pcb, None);
            self.ready.push(pcb);
        }
    }

    fn dispatch(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].is_some() {
                continue;
            }
            let selected = scheduler::select(
                self.algorithm,
                &mut self.ready,
                self.config.quantum,
                self.clock,
            );
            let Some(mut pcb) = selected else {
                break;
            };
            pcb.set_state(ProcessState::Running);
            self.log(&pcb, Some(index));
            self.slots[index] = Some(pcb);
        }
    }

    fn execute(&mut self) {
        for index in 0..self.slots.len() {
            let Some(mut pcb) = self.slots[index].take() else {
                continue;
            };

            if pcb.remaining() == 0 {
                pcb.set_state(ProcessState::Finished);
                pcb.reset_quantum();
                self.log(&pcb, Some(index));
                self.finished.push(pcb);
                continue;
            }

            if pcb.blocks_at(self.clock) {
                pcb.set_state(ProcessState::Blocked);
                pcb.reset_quantum();
                self.log(&pcb, Some(index));
                self.blocked.push(pcb);
                continue;
            }

            pcb.tick();
            if self.algorithm.preempts_on_quantum() && pcb.quantum_used() >= self.config.quantum {
                pcb.set_state(ProcessState::SuspendedReady);
                pcb.reset_quantum();
                self.log(&pcb, None);
                self.ready.push(pcb);
                continue;
            }

            self.slots[index] = Some(pcb);
        }
    }

    fn unblock(&mut self) {
        let now = self.clock;
        let unblocked = self
            .blocked
            .remove_where(|pcb| pcb.unblock_at().map_or(true, |at| at <= now));

        for mut pcb in unblocked {
            pcb.set_state(ProcessState::SuspendedReady);
            self.log(&pcb, None);
            self.ready.push(pcb);
        }
    }

    fn retire(&mut self) {
        for pcb in self.finished.drain() {
            trace!(pid = %pcb.pid(), "retired");
            self.finished_count += 1;
        }
    }
}

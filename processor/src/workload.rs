//! The workload description.
//!
//! A workload is a single string of `|` separated records:
//!
//! ```text
//! <memory_size> <quantum> | <processors> | <process_count> | <arrival> <execution> [<moment>b<duration>] | ...
//! ```
//!
//! For example `2 5|1|3|0 5 1b3|0 5 4b10|0 6` describes one processor,
//! a quantum of 5 and three processes arriving at time 0. The first one
//! blocks at time 1 for 3 ticks, the second one at time 4 for 10 ticks.

use std::str::FromStr;

use scheduler::Block;

use crate::error::{Result, SimulationError};

/// The workload used when none is given.
pub const DEFAULT_INPUT: &str = "2 2|2|3|0 5|1 3|2 4";

const HEADER_RECORDS: usize = 3;

/// The simulation parameters read from the workload header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Reserved, no scheduling decision uses it.
    pub memory_size: usize,

    /// Ticks a process may run before Round-Robin preempts it.
    pub quantum: usize,

    /// Number of processor slots.
    pub processors: usize,

    /// Number of processes that have to finish before the simulation stops.
    pub process_count: usize,
}

/// One process arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub arrival: usize,
    pub execution: usize,
    pub block: Option<Block>,
}

/// A parsed workload: the configuration and the arrivals sorted by time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub config: SimulationConfig,
    pub processes: Vec<ProcessSpec>,
}

fn number(record: usize, name: &str, field: Option<&str>) -> Result<usize> {
    let field = field.ok_or_else(|| SimulationError::parse(record, format!("missing {name}")))?;
    field.parse::<usize>().map_err(|err| {
        SimulationError::parse(record, format!("{name} `{field}` is not a valid number: {err}"))
    })
}

fn no_trailing<'a>(record: usize, mut fields: impl Iterator<Item = &'a str>) -> Result<()> {
    match fields.next() {
        Some(field) => Err(SimulationError::parse(
            record,
            format!("unexpected field `{field}`"),
        )),
        None => Ok(()),
    }
}

fn parse_block(record: usize, field: &str) -> Result<Block> {
    let (moment, duration) = field.split_once('b').ok_or_else(|| {
        SimulationError::parse(
            record,
            format!("block `{field}` must look like <moment>b<duration>"),
        )
    })?;
    let moment = number(record, "block moment", Some(moment))?;
    let duration = number(record, "block duration", Some(duration))?;
    if moment.checked_add(duration).is_none() {
        return Err(SimulationError::parse(
            record,
            format!("block `{field}` ends past the last representable tick"),
        ));
    }
    Ok(Block::new(moment, duration))
}

fn parse_process(record: usize, line: &str) -> Result<ProcessSpec> {
    let mut fields = line.split_whitespace();
    let arrival = number(record, "arrival time", fields.next())?;
    let execution = number(record, "execution time", fields.next())?;
    let block = fields
        .next()
        .map(|field| parse_block(record, field))
        .transpose()?;
    no_trailing(record, fields)?;

    Ok(ProcessSpec {
        arrival,
        execution,
        block,
    })
}

impl Workload {
    /// Parse a workload description.
    ///
    /// Besides malformed numbers, this rejects descriptions the simulation
    /// could never finish: fewer process records than declared, arrival
    /// times that go back in time and processes without any processor.
    pub fn parse(input: &str) -> Result<Workload> {
        let records: Vec<&str> = input.split('|').map(str::trim).collect();
        let header = |index: usize| records.get(index).copied().filter(|r| !r.is_empty());

        let mut fields = header(0).unwrap_or_default().split_whitespace();
        let memory_size = number(0, "memory size", fields.next())?;
        let quantum = number(0, "quantum", fields.next())?;
        no_trailing(0, fields)?;

        let mut fields = header(1).unwrap_or_default().split_whitespace();
        let processors = number(1, "processor count", fields.next())?;
        no_trailing(1, fields)?;

        let mut fields = header(2).unwrap_or_default().split_whitespace();
        let process_count = number(2, "process count", fields.next())?;
        no_trailing(2, fields)?;

        if processors == 0 && process_count > 0 {
            return Err(SimulationError::parse(
                1,
                "at least one processor is required to run processes",
            ));
        }

        let mut processes: Vec<ProcessSpec> = Vec::new();
        for (record, line) in records.iter().enumerate().skip(HEADER_RECORDS) {
            if line.is_empty() {
                continue;
            }
            let process = parse_process(record, line)?;
            if let Some(previous) = processes.last() {
                if process.arrival < previous.arrival {
                    return Err(SimulationError::parse(
                        record,
                        format!(
                            "arrival time {} is earlier than the previous arrival {}",
                            process.arrival, previous.arrival
                        ),
                    ));
                }
            }
            processes.push(process);
        }

        if processes.len() < process_count {
            return Err(SimulationError::parse(
                HEADER_RECORDS + processes.len(),
                format!(
                    "expected {process_count} process records, found {}",
                    processes.len()
                ),
            ));
        }

        Ok(Workload {
            config: SimulationConfig {
                memory_size,
                quantum,
                processors,
                process_count,
            },
            processes,
        })
    }
}

impl FromStr for Workload {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        Workload::parse(s)
    }
}

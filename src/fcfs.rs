//! # Motor FCFS
//!
//! First-Come First-Served: cada proceso se ejecuta completo, sin
//! interrupciones, en el orden en que aparece en la entrada.

use log::{debug, trace};

use crate::error::{InvalidInput, SchedulerError};
use crate::process::{validate_processes, Process, Ticks};
use crate::schedule::{ExecutionSlice, ProcessOutcome, Schedule};
use crate::scheduler::SchedulingAlgorithm;

/// Ejecuta la simulación FCFS en una sola pasada lineal.
///
/// Se espera que `processes` esté ordenado por llegada, pero el motor no
/// reordena la entrada: si el siguiente proceso todavía no llegó, la CPU
/// queda ociosa hasta su llegada.
///
/// # Arguments
///
/// * `processes` - Procesos en orden de llegada
///
/// # Returns
///
/// La línea de tiempo con un intervalo por proceso y su resultado, o
/// `SchedulerError::InvalidInput` si la lista está vacía, algún proceso
/// tiene ráfaga cero o el reloj desbordaría.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{fcfs::run_fcfs, Process};
///
/// let processes = vec![Process::new(1, 0, 5, 1), Process::new(2, 1, 3, 1)];
/// let schedule = run_fcfs(&processes).unwrap();
/// assert_eq!(schedule.waiting_time(2), Some(4));
/// ```
pub fn run_fcfs(processes: &[Process]) -> Result<Schedule, SchedulerError> {
    validate_processes(processes)?;

    let algorithm = SchedulingAlgorithm::fcfs();
    let mut clock: Ticks = 0;
    let mut timeline = Vec::with_capacity(processes.len());
    let mut outcomes = Vec::with_capacity(processes.len());

    for process in processes {
        // CPU ociosa hasta la llegada
        if clock < process.arrival_time {
            trace!("FCFS: CPU ociosa de {} a {}", clock, process.arrival_time);
            clock = process.arrival_time;
        }

        let end = clock
            .checked_add(algorithm.calculate_quantum(process.burst_time))
            .ok_or(InvalidInput::TimeOverflow)?;
        trace!("FCFS: {} ejecuta de {} a {}", process, clock, end);
        timeline.push(ExecutionSlice::new(process.id, clock, end));
        outcomes.push(ProcessOutcome {
            process_id: process.id,
            waiting_time: clock - process.arrival_time,
            first_start: clock,
            completion_time: end,
        });
        clock = end;
    }

    debug!(
        "FCFS completado: {} procesos, makespan {}",
        processes.len(),
        clock
    );

    Ok(Schedule::new(timeline, outcomes))
}

//! # Motor Round Robin
//!
//! Planificación preemptiva con quantum fijo. Los procesos se atienden en
//! rondas desde una cola FIFO; cada despacho ejecuta como máximo un quantum
//! y, si el proceso no terminó, lo devuelve al final de la cola.
//!
//! El estado mutable de la simulación vive en un arreglo propiedad del motor,
//! indexado por la posición del proceso en la entrada. La cola guarda esos
//! índices, nunca copias de los procesos.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{InvalidInput, SchedulerError};
use crate::process::{validate_processes, Process, ProcessStatus, Ticks};
use crate::schedule::{ExecutionSlice, ProcessOutcome, Schedule};
use crate::scheduler::SchedulingAlgorithm;

/// Índice de un proceso dentro del arreglo de estado de una ejecución.
type Slot = usize;

/// Estado de un proceso durante una única ejecución del motor.
#[derive(Debug)]
struct RunState {
    status: ProcessStatus,
    /// Tiempo de CPU que aún necesita
    remaining_burst_time: Ticks,
    /// Reloj en la llegada o al final del último despacho
    last_observed_time: Ticks,
    /// Espera acumulada en todas las visitas a la cola
    waiting_time: Ticks,
    /// Inicio del primer despacho, si ya ocurrió
    first_start: Option<Ticks>,
}

impl RunState {
    fn new(process: &Process) -> Self {
        Self {
            status: ProcessStatus::Waiting,
            remaining_burst_time: process.burst_time,
            last_observed_time: process.arrival_time,
            waiting_time: 0,
            first_start: None,
        }
    }
}

/// Ejecuta la simulación Round Robin.
///
/// La cola se siembra con todos los procesos en el orden de la entrada y no
/// se vuelve a ordenar. Cuando el proceso al frente aún no ha llegado, el
/// reloj avanza hasta su llegada en lugar de ejecutarlo antes de tiempo.
///
/// # Arguments
///
/// * `processes` - Procesos en orden de llegada
/// * `quantum` - Tiempo máximo de ejecución continua por despacho
///
/// # Returns
///
/// La línea de tiempo completa (posiblemente varios intervalos por proceso)
/// y el resultado de cada proceso, o `SchedulerError::InvalidInput` si el
/// quantum es cero, la lista está vacía, hay ráfagas en cero o el reloj
/// desbordaría.
///
/// # Examples
///
/// ```rust
/// use cpu_scheduling_simulator::{round_robin::run_round_robin, Process};
///
/// let processes = vec![Process::new(1, 0, 3, 1), Process::new(2, 0, 2, 1)];
/// let schedule = run_round_robin(&processes, 2).unwrap();
/// assert_eq!(schedule.gantt_chart(), "| P1(0-2) | P2(2-4) | P1(4-5) |");
/// ```
pub fn run_round_robin(
    processes: &[Process],
    quantum: Ticks,
) -> Result<Schedule, SchedulerError> {
    if quantum == 0 {
        return Err(InvalidInput::ZeroQuantum.into());
    }
    validate_processes(processes)?;

    let algorithm = SchedulingAlgorithm::round_robin(quantum);
    let mut states: Vec<RunState> = processes.iter().map(RunState::new).collect();
    let mut queue: VecDeque<Slot> = (0..processes.len()).collect();
    let mut timeline = Vec::new();
    let mut clock: Ticks = 0;

    while let Some(slot) = queue.pop_front() {
        let process = &processes[slot];
        let state = &mut states[slot];
        debug_assert_eq!(
            state.status,
            ProcessStatus::Waiting,
            "Only waiting processes may sit in the queue"
        );

        if clock < process.arrival_time {
            trace!("RR: CPU ociosa de {} a {}", clock, process.arrival_time);
            clock = process.arrival_time;
        }

        if clock > state.last_observed_time {
            state.waiting_time += clock - state.last_observed_time;
        }

        state.status = ProcessStatus::Running;
        let executed = algorithm.calculate_quantum(state.remaining_burst_time);
        let end = clock
            .checked_add(executed)
            .ok_or(InvalidInput::TimeOverflow)?;
        timeline.push(ExecutionSlice::new(process.id, clock, end));
        if state.first_start.is_none() {
            state.first_start = Some(clock);
        }
        trace!(
            "RR: {} ejecuta de {} a {} (restante: {})",
            process,
            clock,
            end,
            state.remaining_burst_time - executed
        );

        state.remaining_burst_time -= executed;
        clock = end;
        state.last_observed_time = clock;

        if state.remaining_burst_time > 0 {
            state.status = ProcessStatus::Waiting;
            queue.push_back(slot);
        } else {
            state.status = ProcessStatus::Completed;
            trace!("RR: {} completado en {}", process, clock);
        }
    }

    debug!(
        "Round Robin completado: {} procesos, {} intervalos, makespan {}",
        processes.len(),
        timeline.len(),
        clock
    );

    // Un proceso completado fue despachado al menos una vez y su último
    // despacho fijó `last_observed_time` en su finalización
    let outcomes = processes
        .iter()
        .zip(&states)
        .map(|(process, state)| {
            debug_assert_eq!(state.status, ProcessStatus::Completed);
            ProcessOutcome {
                process_id: process.id,
                waiting_time: state.waiting_time,
                first_start: state.first_start.unwrap_or(process.arrival_time),
                completion_time: state.last_observed_time,
            }
        })
        .collect();

    Ok(Schedule::new(timeline, outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcfs::run_fcfs;

    fn reference_workload() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 1),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 1, 1),
        ]
    }

    #[test]
    fn test_round_robin_reference_workload() {
        let schedule = run_round_robin(&reference_workload(), 2).unwrap();

        assert_eq!(
            schedule.timeline,
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 2, 4),
                ExecutionSlice::new(3, 4, 5),
                ExecutionSlice::new(1, 5, 7),
                ExecutionSlice::new(2, 7, 8),
                ExecutionSlice::new(1, 8, 9),
            ]
        );
        assert_eq!(schedule.waiting_time(1), Some(4));
        assert_eq!(schedule.waiting_time(2), Some(4));
        assert_eq!(schedule.waiting_time(3), Some(2));
        assert_eq!(schedule.completion_time(3), Some(5));
    }

    #[test]
    fn test_round_robin_conserves_burst_time() {
        let processes = vec![
            Process::new(1, 0, 13, 1),
            Process::new(2, 1, 7, 1),
            Process::new(3, 2, 1, 1),
            Process::new(4, 3, 22, 1),
        ];
        let schedule = run_round_robin(&processes, 3).unwrap();

        for process in &processes {
            assert_eq!(schedule.executed_time(process.id), process.burst_time);
        }
        assert!(schedule.is_monotonic());
        assert!(schedule.timeline.iter().all(|slice| slice.duration() <= 3));
    }

    #[test]
    fn test_large_quantum_matches_fcfs() {
        let processes = reference_workload();
        let rr = run_round_robin(&processes, 5).unwrap();
        let fcfs = run_fcfs(&processes).unwrap();

        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_round_robin_idles_for_late_front_process() {
        // El frente de la cola aún no llegó: el reloj salta a su llegada
        let processes = vec![Process::new(1, 0, 4, 1), Process::new(2, 10, 2, 1)];
        let schedule = run_round_robin(&processes, 2).unwrap();

        assert_eq!(
            schedule.timeline,
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 10, 12),
                ExecutionSlice::new(1, 12, 14),
            ]
        );
        assert_eq!(schedule.waiting_time(1), Some(10));
        assert_eq!(schedule.waiting_time(2), Some(0));
    }

    #[test]
    fn test_round_robin_quantum_of_one() {
        let processes = vec![Process::new(1, 0, 2, 1), Process::new(2, 0, 2, 1)];
        let schedule = run_round_robin(&processes, 1).unwrap();

        assert_eq!(schedule.gantt_chart(), "| P1(0-1) | P2(1-2) | P1(2-3) | P2(3-4) |");
        assert_eq!(schedule.waiting_time(1), Some(1));
        assert_eq!(schedule.waiting_time(2), Some(2));
    }

    #[test]
    fn test_round_robin_rejects_invalid_input() {
        assert_eq!(
            run_round_robin(&reference_workload(), 0),
            Err(SchedulerError::InvalidInput(InvalidInput::ZeroQuantum))
        );
        assert_eq!(
            run_round_robin(&[], 2),
            Err(SchedulerError::InvalidInput(InvalidInput::EmptyProcessList))
        );
        assert!(run_round_robin(&[Process::new(1, 0, 0, 1)], 2).is_err());
    }

    #[test]
    fn test_round_robin_rejects_clock_overflow() {
        assert_eq!(
            run_round_robin(&[Process::new(1, Ticks::MAX, 1, 1)], 2),
            Err(SchedulerError::InvalidInput(InvalidInput::TimeOverflow))
        );

        // El desborde ocurre en una ronda posterior, tras varios intervalos
        let processes = vec![
            Process::new(1, Ticks::MAX - 4, 3, 1),
            Process::new(2, 0, 3, 1),
        ];
        assert_eq!(
            run_round_robin(&processes, 2),
            Err(SchedulerError::InvalidInput(InvalidInput::TimeOverflow))
        );

        let schedule = run_round_robin(&[Process::new(1, Ticks::MAX - 3, 3, 1)], 2).unwrap();
        assert_eq!(schedule.makespan(), Ticks::MAX);
    }

    #[test]
    fn test_round_robin_duplicate_ids_keep_separate_outcomes() {
        let processes = vec![Process::new(1, 0, 5, 1), Process::new(1, 0, 3, 1)];
        let schedule = run_round_robin(&processes, 2).unwrap();

        assert_eq!(
            schedule.gantt_chart(),
            "| P1(0-2) | P1(2-4) | P1(4-6) | P1(6-7) | P1(7-8) |"
        );
        let first = schedule.outcomes[0];
        assert_eq!((first.first_start, first.completion_time, first.waiting_time), (0, 8, 3));
        let second = schedule.outcomes[1];
        assert_eq!((second.first_start, second.completion_time, second.waiting_time), (2, 7, 4));
    }
}

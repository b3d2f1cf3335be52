//! # Módulo de Línea de Tiempo
//!
//! Resultado de una ejecución de cualquiera de los motores: la secuencia
//! ordenada de intervalos de ejecución (diagrama de Gantt) y, por cada
//! proceso de la entrada, su espera acumulada, su primer despacho y su
//! finalización.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::process::{ProcessId, Ticks};

/// Intervalo semiabierto `[start, end)` durante el cual un proceso ocupó la CPU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Proceso que se ejecutó
    pub process_id: ProcessId,
    /// Instante de inicio
    pub start: Ticks,
    /// Instante de fin (exclusivo)
    pub end: Ticks,
}

impl ExecutionSlice {
    pub fn new(process_id: ProcessId, start: Ticks, end: Ticks) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Duración del intervalo.
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl fmt::Display for ExecutionSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}({}-{})", self.process_id, self.start, self.end)
    }
}

/// Resultado de un proceso de la entrada.
///
/// El motor lo registra por posición, no por identificador, así que dos
/// procesos con el mismo id conservan resultados separados.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub process_id: ProcessId,
    /// Tiempo total en la cola sin ejecutarse
    pub waiting_time: Ticks,
    /// Inicio de su primer intervalo
    pub first_start: Ticks,
    /// Fin de su último intervalo
    pub completion_time: Ticks,
}

/// Línea de tiempo y resultados por proceso producidos por un motor.
///
/// Los resultados se conservan en el orden de la entrada. Los huecos
/// entre intervalos consecutivos representan tiempo ocioso de la CPU.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Intervalos de ejecución en orden cronológico
    pub timeline: Vec<ExecutionSlice>,
    /// Resultado por proceso, en el orden de la entrada
    pub outcomes: Vec<ProcessOutcome>,
}

impl Schedule {
    pub fn new(timeline: Vec<ExecutionSlice>, outcomes: Vec<ProcessOutcome>) -> Self {
        let schedule = Self { timeline, outcomes };
        debug_assert!(
            schedule.is_monotonic(),
            "Timeline intervals must not overlap"
        );
        schedule
    }

    /// Verifica que cada intervalo empiece después de que termine el anterior
    /// y que ninguno tenga duración negativa.
    pub fn is_monotonic(&self) -> bool {
        self.timeline.iter().all(|slice| slice.start <= slice.end)
            && self
                .timeline
                .windows(2)
                .all(|pair| pair[1].start >= pair[0].end)
    }

    /// Resultado del proceso indicado.
    ///
    /// Con identificadores duplicados devuelve el del primero en la entrada;
    /// `outcomes` conserva todos.
    pub fn outcome(&self, process_id: ProcessId) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|o| o.process_id == process_id)
    }

    /// Tiempo de espera del proceso indicado.
    pub fn waiting_time(&self, process_id: ProcessId) -> Option<Ticks> {
        self.outcome(process_id).map(|o| o.waiting_time)
    }

    /// Suma de los tiempos de espera de todos los procesos.
    pub fn total_waiting_time(&self) -> Ticks {
        self.outcomes.iter().map(|o| o.waiting_time).sum()
    }

    /// Intervalos del proceso indicado, en orden cronológico.
    pub fn slices_for(&self, process_id: ProcessId) -> impl Iterator<Item = &ExecutionSlice> {
        self.timeline
            .iter()
            .filter(move |slice| slice.process_id == process_id)
    }

    /// Tiempo total de CPU recibido por un proceso.
    pub fn executed_time(&self, process_id: ProcessId) -> Ticks {
        self.slices_for(process_id).map(ExecutionSlice::duration).sum()
    }

    /// Primer instante en que el proceso ocupó la CPU.
    pub fn first_start(&self, process_id: ProcessId) -> Option<Ticks> {
        self.outcome(process_id).map(|o| o.first_start)
    }

    /// Instante en que el proceso terminó su último intervalo.
    pub fn completion_time(&self, process_id: ProcessId) -> Option<Ticks> {
        self.outcome(process_id).map(|o| o.completion_time)
    }

    /// Instante en que termina el último intervalo.
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map(|slice| slice.end).unwrap_or(0)
    }

    /// Tiempo que la CPU estuvo ociosa entre 0 y el makespan.
    pub fn idle_time(&self) -> Ticks {
        let busy: Ticks = self.timeline.iter().map(ExecutionSlice::duration).sum();
        self.makespan() - busy
    }

    /// Representación textual del diagrama de Gantt: `| P1(0-5) | P2(5-8) |`.
    pub fn gantt_chart(&self) -> String {
        let mut chart = String::from("|");
        for slice in &self.timeline {
            chart.push_str(&format!(" {} |", slice));
        }
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::new(
            vec![
                ExecutionSlice::new(1, 0, 2),
                ExecutionSlice::new(2, 4, 6),
                ExecutionSlice::new(1, 6, 9),
            ],
            vec![
                ProcessOutcome {
                    process_id: 1,
                    waiting_time: 4,
                    first_start: 0,
                    completion_time: 9,
                },
                ProcessOutcome {
                    process_id: 2,
                    waiting_time: 1,
                    first_start: 4,
                    completion_time: 6,
                },
            ],
        )
    }

    #[test]
    fn test_schedule_queries() {
        let schedule = sample();
        assert_eq!(schedule.executed_time(1), 5);
        assert_eq!(schedule.first_start(1), Some(0));
        assert_eq!(schedule.completion_time(1), Some(9));
        assert_eq!(schedule.waiting_time(2), Some(1));
        assert_eq!(schedule.waiting_time(7), None);
        assert_eq!(schedule.completion_time(7), None);
        assert_eq!(schedule.total_waiting_time(), 5);
        assert_eq!(schedule.makespan(), 9);
        assert_eq!(schedule.idle_time(), 2);
    }

    #[test]
    fn test_gantt_chart() {
        assert_eq!(sample().gantt_chart(), "| P1(0-2) | P2(4-6) | P1(6-9) |");
        assert_eq!(Schedule::default().gantt_chart(), "|");
    }

    #[test]
    fn test_overlap_detection() {
        let schedule = Schedule {
            timeline: vec![ExecutionSlice::new(1, 0, 3), ExecutionSlice::new(2, 2, 4)],
            outcomes: Vec::new(),
        };
        assert!(!schedule.is_monotonic());
    }
}

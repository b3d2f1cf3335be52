//! # Módulo de Algoritmos de Planificación
//!
//! Este módulo define los algoritmos de scheduling disponibles y los conecta
//! con su motor de simulación correspondiente.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::fcfs::run_fcfs;
use crate::process::{Process, Ticks};
use crate::round_robin::run_round_robin;
use crate::schedule::Schedule;

/// Algoritmos de planificación disponibles.
///
/// - FCFS garantiza que los procesos se ejecuten en orden de llegada
/// - Round Robin reparte la CPU en rondas de un quantum fijo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingAlgorithm {
    /// First-Come First-Served: ejecución no preemptiva en orden de llegada.
    ///
    /// Cada proceso se ejecuta completamente antes de tomar el siguiente.
    /// Es simple pero puede causar esperas largas si un proceso con ráfaga
    /// grande llega primero.
    Fcfs,

    /// Round Robin: ejecución preemptiva con quantum fijo.
    ///
    /// Cada proceso recibe como máximo un quantum antes de ser interrumpido
    /// (si no ha terminado) y volver al final de la cola.
    RoundRobin {
        /// Tiempo máximo de ejecución continua por despacho
        quantum: Ticks,
    },
}

impl SchedulingAlgorithm {
    /// Crea un nuevo algoritmo FCFS.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// let algorithm = SchedulingAlgorithm::fcfs();
    /// assert_eq!(algorithm.quantum(), None);
    /// ```
    pub fn fcfs() -> Self {
        Self::Fcfs
    }

    /// Crea un nuevo algoritmo Round Robin con el quantum especificado.
    ///
    /// El quantum no se valida aquí; un quantum cero se rechaza al planificar.
    ///
    /// # Arguments
    ///
    /// * `quantum` - Tiempo máximo de ejecución continua por despacho
    pub fn round_robin(quantum: Ticks) -> Self {
        Self::RoundRobin { quantum }
    }

    /// Calcula cuánto tiempo se ejecutará un proceso en su próximo despacho.
    ///
    /// Ambos motores toman de aquí la duración de cada intervalo.
    ///
    /// # Arguments
    ///
    /// * `remaining_time` - Tiempo de ráfaga restante del proceso
    ///
    /// # Returns
    ///
    /// El tiempo restante completo para FCFS, o `min(quantum, restante)`
    /// para Round Robin
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::SchedulingAlgorithm;
    ///
    /// assert_eq!(SchedulingAlgorithm::fcfs().calculate_quantum(7), 7);
    /// assert_eq!(SchedulingAlgorithm::round_robin(3).calculate_quantum(7), 3);
    /// ```
    pub fn calculate_quantum(&self, remaining_time: Ticks) -> Ticks {
        match self {
            Self::Fcfs => remaining_time,
            Self::RoundRobin { quantum } => remaining_time.min(*quantum),
        }
    }

    /// Obtiene el quantum configurado para Round Robin, `None` para FCFS.
    pub fn quantum(&self) -> Option<Ticks> {
        match self {
            Self::Fcfs => None,
            Self::RoundRobin { quantum } => Some(*quantum),
        }
    }

    /// Obtiene una descripción textual del algoritmo.
    pub fn description(&self) -> String {
        match self {
            Self::Fcfs => "First-Come First-Served (no preemptivo)".to_string(),
            Self::RoundRobin { quantum } => {
                format!("Round Robin preemptivo (quantum: {})", quantum)
            }
        }
    }

    /// Ejecuta el motor correspondiente sobre la lista de procesos.
    ///
    /// # Arguments
    ///
    /// * `processes` - Procesos ordenados por llegada
    ///
    /// # Returns
    ///
    /// La línea de tiempo y los tiempos de espera, o el error de validación
    /// si la entrada no cumple las precondiciones
    pub fn schedule(&self, processes: &[Process]) -> Result<Schedule, SchedulerError> {
        match self {
            Self::Fcfs => run_fcfs(processes),
            Self::RoundRobin { quantum } => run_round_robin(processes, *quantum),
        }
    }
}

impl fmt::Display for SchedulingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "Round Robin (quantum {})", quantum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidInput;

    #[test]
    fn test_fcfs_creation() {
        let algorithm = SchedulingAlgorithm::fcfs();
        assert_eq!(algorithm, SchedulingAlgorithm::Fcfs);
        assert_eq!(algorithm.quantum(), None);
    }

    #[test]
    fn test_round_robin_creation() {
        let algorithm = SchedulingAlgorithm::round_robin(4);

        match algorithm {
            SchedulingAlgorithm::RoundRobin { quantum } => assert_eq!(quantum, 4),
            _ => panic!("Expected RoundRobin variant"),
        }

        assert_eq!(algorithm.quantum(), Some(4));
    }

    #[test]
    fn test_quantum_calculation() {
        // FCFS devuelve todo el tiempo restante
        assert_eq!(SchedulingAlgorithm::fcfs().calculate_quantum(8), 8);

        // Round Robin devuelve min(restante, quantum)
        assert_eq!(SchedulingAlgorithm::round_robin(3).calculate_quantum(8), 3);
        assert_eq!(SchedulingAlgorithm::round_robin(10).calculate_quantum(8), 8);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SchedulingAlgorithm::fcfs()), "FCFS");
        assert_eq!(
            format!("{}", SchedulingAlgorithm::round_robin(2)),
            "Round Robin (quantum 2)"
        );
        assert!(SchedulingAlgorithm::round_robin(2)
            .description()
            .contains("Round Robin"));
    }

    #[test]
    fn test_schedule_dispatches_to_engine() {
        let processes = vec![Process::new(1, 0, 3, 1), Process::new(2, 0, 3, 1)];

        let fcfs = SchedulingAlgorithm::fcfs().schedule(&processes).unwrap();
        assert_eq!(fcfs.timeline.len(), 2);

        let rr = SchedulingAlgorithm::round_robin(1)
            .schedule(&processes)
            .unwrap();
        assert_eq!(rr.timeline.len(), 6);

        assert_eq!(
            SchedulingAlgorithm::round_robin(0).schedule(&processes),
            Err(SchedulerError::InvalidInput(InvalidInput::ZeroQuantum))
        );
    }
}

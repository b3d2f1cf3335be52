//! # Módulo de Procesos
//!
//! Este módulo define el modelo de datos de un proceso planificable: una
//! descripción estática e inmutable de la unidad de trabajo. El estado mutable
//! de cada simulación vive en el motor que la ejecuta, nunca aquí.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Unidad de tiempo discreta de la simulación.
pub type Ticks = u64;

/// Identificador de un proceso (1-indexado en la herramienta interactiva).
pub type ProcessId = usize;

/// Representa un proceso sintético listo para ser planificado.
///
/// La prioridad se registra para los reportes pero ninguno de los
/// algoritmos la utiliza para ordenar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Identificador estable del proceso
    pub id: ProcessId,
    /// Instante de llegada a la cola de listos
    pub arrival_time: Ticks,
    /// Tiempo total de CPU requerido (debe ser mayor que 0)
    pub burst_time: Ticks,
    /// Prioridad informativa
    pub priority: u32,
}

impl Process {
    /// Crea un nuevo proceso.
    ///
    /// # Arguments
    ///
    /// * `id` - Identificador del proceso
    /// * `arrival_time` - Instante de llegada
    /// * `burst_time` - Tiempo de ráfaga total
    /// * `priority` - Prioridad informativa
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::Process;
    ///
    /// let process = Process::new(1, 0, 5, 3);
    /// assert_eq!(process.name(), "P1");
    /// assert_eq!(process.burst_time, 5);
    /// ```
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks, priority: u32) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority,
        }
    }

    /// Nombre legible del proceso, usado en el diagrama de Gantt.
    pub fn name(&self) -> String {
        format!("P{}", self.id)
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.id)
    }
}

/// Estado de un proceso dentro de una ejecución de Round Robin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProcessStatus {
    /// En la cola, esperando a ser despachado
    Waiting,
    /// Ocupando la CPU
    Running,
    /// Terminó su ráfaga; nunca vuelve a la cola
    Completed,
}

/// Verifica las precondiciones comunes a ambos motores.
///
/// Rechaza listas vacías y procesos con ráfaga cero. Las llegadas
/// desordenadas y los identificadores duplicados se aceptan.
pub fn validate_processes(processes: &[Process]) -> Result<(), InvalidInput> {
    if processes.is_empty() {
        return Err(InvalidInput::EmptyProcessList);
    }

    if let Some(process) = processes.iter().find(|p| p.burst_time == 0) {
        return Err(InvalidInput::ZeroBurstTime {
            process_id: process.id,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_creation() {
        let process = Process::new(2, 1, 3, 4);
        assert_eq!(process.id, 2);
        assert_eq!(process.arrival_time, 1);
        assert_eq!(process.burst_time, 3);
        assert_eq!(process.priority, 4);
        assert_eq!(format!("{}", process), "P2");
    }

    #[test]
    fn test_validate_processes() {
        assert_eq!(validate_processes(&[]), Err(InvalidInput::EmptyProcessList));

        let processes = vec![Process::new(1, 0, 2, 1), Process::new(2, 1, 0, 1)];
        assert_eq!(
            validate_processes(&processes),
            Err(InvalidInput::ZeroBurstTime { process_id: 2 })
        );

        // Llegadas desordenadas e ids duplicados son válidos
        let processes = vec![Process::new(1, 5, 2, 1), Process::new(1, 0, 1, 1)];
        assert!(validate_processes(&processes).is_ok());
    }
}

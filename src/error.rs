//! # Módulo de Errores
//!
//! Errores que pueden devolver los motores de simulación. Casi todos son
//! violaciones de precondiciones detectadas antes de simular; el desborde
//! del reloj se detecta durante la simulación. En ningún caso se entrega
//! una línea de tiempo parcial.

use std::error::Error;
use std::fmt;

use crate::process::ProcessId;

/// Motivo concreto por el que una entrada fue rechazada.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// La lista de procesos está vacía (el promedio de espera no está definido)
    EmptyProcessList,
    /// Un proceso declara un tiempo de ráfaga igual a cero
    ZeroBurstTime {
        /// Identificador del proceso inválido
        process_id: ProcessId,
    },
    /// El quantum de Round Robin es cero
    ZeroQuantum,
    /// El reloj de la simulación superaría el máximo representable en `Ticks`
    TimeOverflow,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProcessList => write!(f, "la lista de procesos está vacía"),
            Self::ZeroBurstTime { process_id } => {
                write!(f, "el proceso P{} tiene tiempo de ráfaga 0", process_id)
            }
            Self::ZeroQuantum => write!(f, "el quantum debe ser mayor que 0"),
            Self::TimeOverflow => {
                write!(f, "los tiempos de llegada y ráfaga exceden el reloj de la simulación")
            }
        }
    }
}

/// Error devuelto por los motores de planificación.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchedulerError {
    /// La entrada no cumple las precondiciones del algoritmo
    InvalidInput(InvalidInput),
}

impl SchedulerError {
    /// Indica si el error corresponde a una entrada inválida.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(reason) => write!(f, "entrada inválida: {}", reason),
        }
    }
}

impl Error for SchedulerError {}

impl From<InvalidInput> for SchedulerError {
    fn from(reason: InvalidInput) -> Self {
        Self::InvalidInput(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SchedulerError::from(InvalidInput::ZeroBurstTime { process_id: 3 });
        assert_eq!(
            format!("{}", err),
            "entrada inválida: el proceso P3 tiene tiempo de ráfaga 0"
        );
        assert!(err.is_invalid_input());

        let err = SchedulerError::from(InvalidInput::ZeroQuantum);
        assert!(err.to_string().contains("quantum"));

        let err = SchedulerError::from(InvalidInput::TimeOverflow);
        assert!(err.to_string().contains("exceden"));
    }
}

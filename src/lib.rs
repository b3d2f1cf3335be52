//! # Simulador de Planificación de CPU
//!
//! Esta biblioteca simula la planificación de un conjunto pequeño de procesos
//! sintéticos sobre una única CPU, calculando los tiempos de espera de cada
//! proceso y la línea de tiempo de ejecución (diagrama de Gantt) para dos
//! políticas: FCFS (First-Come First-Served) y Round Robin con quantum
//! configurable.
//!
//! ## Características principales
//!
//! - **Motor determinista**: los algoritmos son funciones puras de su entrada;
//!   dos ejecuciones con la misma entrada producen exactamente el mismo resultado.
//! - **Algoritmos de scheduling**: FCFS no preemptivo y Round Robin preemptivo
//!   con reencolado FIFO estricto.
//! - **Métricas**: espera, respuesta, finalización y turnaround por proceso,
//!   más promedios, reportes de texto, CSV y JSON.
//! - **Entrada inyectable**: el generador aleatorio y el lector interactivo
//!   reciben su fuente (`Rng`, `BufRead`) como parámetro.
//!
//! ## Estructura del proyecto
//!
//! - `process`: Modelo de datos de un proceso
//! - `schedule`: Línea de tiempo y tiempos de espera producidos por un motor
//! - `fcfs` / `round_robin`: Los dos motores de simulación
//! - `scheduler`: Selección del algoritmo de planificación
//! - `metrics`: Cálculo de métricas y generación de reportes
//! - `generator`: Generación de cargas de trabajo aleatorias
//! - `input` / `session`: Captura interactiva de datos
//! - `simulation`: Orquestador que une todo lo anterior

pub mod error;
pub mod fcfs;
pub mod generator;
pub mod input;
pub mod metrics;
pub mod process;
pub mod round_robin;
pub mod schedule;
pub mod scheduler;
pub mod session;
pub mod simulation;

// Re-exportar las estructuras principales para facilitar su uso
pub use error::{InvalidInput, SchedulerError};
pub use generator::ProcessGenerator;
pub use metrics::{MetricsCalculator, ProcessMetrics, SimulationMetrics};
pub use process::{Process, ProcessId, Ticks};
pub use schedule::{ExecutionSlice, ProcessOutcome, Schedule};
pub use scheduler::SchedulingAlgorithm;
pub use session::InteractiveSession;
pub use simulation::Simulation;

/// Configuración por defecto del simulador
pub mod config {
    use super::{Process, Ticks};

    /// Número mínimo de procesos que acepta una sesión interactiva
    pub const MIN_PROCESSES: usize = 2;

    /// Número máximo de procesos por ejecución (límite práctico de la interfaz)
    pub const MAX_PROCESSES: usize = 15;

    /// Rango de tiempos de ráfaga aceptados y generados
    pub const MIN_BURST_TIME: Ticks = 1;
    pub const MAX_BURST_TIME: Ticks = 100;

    /// Rango de prioridades generadas (se registran pero no se usan)
    pub const MIN_PRIORITY: u32 = 1;
    pub const MAX_PRIORITY: u32 = 5;

    /// Quantum por defecto para Round Robin
    pub const DEFAULT_QUANTUM: Ticks = 2;

    /// Quantum máximo aceptado en modo interactivo
    pub const MAX_QUANTUM: Ticks = 100;

    /// Carga de trabajo de referencia: P1(0, 5), P2(1, 3), P3(2, 1)
    pub fn default_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 1),
            Process::new(2, 1, 3, 1),
            Process::new(3, 2, 1, 1),
        ]
    }
}

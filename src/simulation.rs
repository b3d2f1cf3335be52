//! # Módulo de Simulación Principal
//!
//! Este módulo coordina una ejecución completa: prepara la lista de procesos,
//! la entrega al motor del algoritmo elegido y calcula las métricas finales.

use log::info;

use crate::config;
use crate::error::SchedulerError;
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::Process;
use crate::scheduler::SchedulingAlgorithm;

/// Orquestador de una simulación de planificación.
///
/// La `Simulation` es dueña de la lista de procesos de entrada; cada llamada
/// a `run` crea su propio estado de simulación, por lo que ejecutar varias
/// veces produce siempre el mismo resultado.
pub struct Simulation {
    /// Procesos de entrada
    processes: Vec<Process>,
    /// Algoritmo de scheduling a utilizar
    algorithm: SchedulingAlgorithm,
    /// Calculadora de métricas para generar reportes
    metrics_calculator: MetricsCalculator,
}

impl Simulation {
    /// Crea una nueva simulación con la carga de trabajo por defecto.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Algoritmo de scheduling a utilizar
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cpu_scheduling_simulator::{Simulation, SchedulingAlgorithm};
    ///
    /// let simulation = Simulation::new(SchedulingAlgorithm::fcfs());
    /// let metrics = simulation.run().unwrap();
    /// assert_eq!(metrics.processes.len(), 3);
    /// ```
    pub fn new(algorithm: SchedulingAlgorithm) -> Self {
        Self::with_processes(config::default_processes(), algorithm)
    }

    /// Crea una simulación con una lista de procesos personalizada.
    ///
    /// # Arguments
    ///
    /// * `processes` - Procesos a planificar, en cualquier orden
    /// * `algorithm` - Algoritmo de scheduling a utilizar
    pub fn with_processes(processes: Vec<Process>, algorithm: SchedulingAlgorithm) -> Self {
        Self {
            processes,
            algorithm,
            metrics_calculator: MetricsCalculator::new(),
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn algorithm(&self) -> SchedulingAlgorithm {
        self.algorithm
    }

    /// Ejecuta la simulación completa y retorna las métricas resultantes.
    ///
    /// Los procesos se ordenan por llegada de forma estable (los empates
    /// conservan el orden de entrada) antes de entregarlos al motor.
    ///
    /// # Returns
    ///
    /// `SimulationMetrics` con los resultados, o `SchedulerError` si la
    /// entrada es inválida (lista vacía, ráfaga o quantum en cero)
    pub fn run(&self) -> Result<SimulationMetrics, SchedulerError> {
        info!(
            "Simulación {} con {} procesos",
            self.algorithm,
            self.processes.len()
        );

        let ordered = self.ordered_processes();
        let schedule = self.algorithm.schedule(&ordered)?;
        let metrics = self
            .metrics_calculator
            .calculate(&ordered, &schedule, self.algorithm);

        info!(
            "Simulación completada: makespan {}, espera promedio {:.2}",
            metrics.makespan, metrics.average_waiting_time
        );

        Ok(metrics)
    }

    /// Genera un reporte detallado de los resultados.
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> String {
        self.metrics_calculator.generate_report(metrics)
    }

    /// Genera un reporte en formato CSV.
    pub fn generate_csv_report(&self, metrics: &SimulationMetrics) -> String {
        self.metrics_calculator.generate_csv_report(metrics)
    }

    /// Genera un reporte en formato JSON.
    pub fn generate_json_report(&self, metrics: &SimulationMetrics) -> serde_json::Result<String> {
        self.metrics_calculator.generate_json_report(metrics)
    }

    /// Copia de los procesos ordenada por llegada.
    fn ordered_processes(&self) -> Vec<Process> {
        let mut ordered = self.processes.clone();
        ordered.sort_by_key(|process| process.arrival_time);
        ordered
    }
}

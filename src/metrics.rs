//! # Módulo de Métricas y Reportes
//!
//! Este módulo calcula las métricas derivadas de una ejecución (promedios,
//! turnaround, utilización) a partir de la salida del motor y genera los
//! reportes en texto, CSV y JSON.

use average::{Estimate, Mean};
use serde::Serialize;

use crate::process::{Process, ProcessId, Ticks};
use crate::schedule::{ProcessOutcome, Schedule};
use crate::scheduler::SchedulingAlgorithm;

/// Métricas individuales de un proceso en la simulación.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessMetrics {
    /// ID del proceso
    pub process_id: ProcessId,
    /// Instante de llegada
    pub arrival_time: Ticks,
    /// Tiempo de ráfaga total
    pub burst_time: Ticks,
    /// Prioridad informativa
    pub priority: u32,
    /// Tiempo total en la cola sin ejecutarse
    pub waiting_time: Ticks,
    /// Tiempo desde la llegada hasta el primer despacho
    pub response_time: Ticks,
    /// Instante en que terminó su último intervalo
    pub completion_time: Ticks,
    /// Tiempo desde la llegada hasta la finalización
    pub turnaround_time: Ticks,
}

/// Métricas agregadas de toda la simulación.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationMetrics {
    /// Algoritmo utilizado
    pub algorithm: SchedulingAlgorithm,
    /// Métricas individuales, en el orden en que se planificaron los procesos
    pub processes: Vec<ProcessMetrics>,
    /// Línea de tiempo producida por el motor
    pub schedule: Schedule,
    /// Tiempo promedio de espera
    pub average_waiting_time: f64,
    /// Tiempo promedio de turnaround
    pub average_turnaround_time: f64,
    /// Tiempo promedio de respuesta
    pub average_response_time: f64,
    /// Instante en que termina el último intervalo
    pub makespan: Ticks,
    /// Tiempo total con la CPU ociosa
    pub idle_time: Ticks,
    /// Porcentaje del makespan con la CPU ocupada
    pub cpu_utilization: f64,
}

/// Calculadora de métricas para la simulación.
///
/// El promedio de espera se calcula aquí y no en los motores: los motores
/// solo entregan el resultado de cada proceso.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Crea una nueva instancia del calculador de métricas.
    pub fn new() -> Self {
        Self
    }

    /// Calcula las métricas de un proceso a partir de su resultado.
    ///
    /// # Arguments
    ///
    /// * `process` - Proceso de entrada
    /// * `outcome` - Resultado que el motor registró en la misma posición
    pub fn calculate_process_metrics(
        &self,
        process: &Process,
        outcome: &ProcessOutcome,
    ) -> ProcessMetrics {
        ProcessMetrics {
            process_id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            waiting_time: outcome.waiting_time,
            response_time: outcome.first_start.saturating_sub(process.arrival_time),
            completion_time: outcome.completion_time,
            turnaround_time: outcome.completion_time.saturating_sub(process.arrival_time),
        }
    }

    /// Calcula las métricas agregadas de una ejecución.
    ///
    /// # Arguments
    ///
    /// * `processes` - Procesos en el orden en que se entregaron al motor
    /// * `schedule` - Resultado del motor para esos procesos
    /// * `algorithm` - Algoritmo que produjo el resultado
    ///
    /// # Returns
    ///
    /// `SimulationMetrics` con todas las estadísticas agregadas
    pub fn calculate(
        &self,
        processes: &[Process],
        schedule: &Schedule,
        algorithm: SchedulingAlgorithm,
    ) -> SimulationMetrics {
        let process_metrics: Vec<ProcessMetrics> = processes
            .iter()
            .zip(&schedule.outcomes)
            .map(|(process, outcome)| self.calculate_process_metrics(process, outcome))
            .collect();

        let average_waiting_time = average(process_metrics.iter().map(|m| m.waiting_time));
        let average_turnaround_time =
            average(process_metrics.iter().map(|m| m.turnaround_time));
        let average_response_time = average(process_metrics.iter().map(|m| m.response_time));

        let makespan = schedule.makespan();
        let idle_time = schedule.idle_time();
        let cpu_utilization = if makespan > 0 {
            (makespan - idle_time) as f64 / makespan as f64 * 100.0
        } else {
            0.0
        };

        SimulationMetrics {
            algorithm,
            processes: process_metrics,
            schedule: schedule.clone(),
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            makespan,
            idle_time,
            cpu_utilization,
        }
    }

    /// Tabla de procesos de entrada (proceso, llegada, ráfaga, prioridad).
    pub fn format_process_table(processes: &[Process]) -> String {
        let mut table = String::new();
        table.push_str(&format!(
            "{:<8} {:<8} {:<7} {:<9}\n",
            "Proceso", "Llegada", "Ráfaga", "Prioridad"
        ));
        table.push_str(&format!(
            "{:<8} {:<8} {:<7} {:<9}\n",
            "-------", "-------", "------", "---------"
        ));
        for process in processes {
            table.push_str(&format!(
                "{:<8} {:<8} {:<7} {:<9}\n",
                process.name(),
                process.arrival_time,
                process.burst_time,
                process.priority
            ));
        }
        table
    }

    /// Genera un reporte detallado de los resultados de la simulación.
    ///
    /// Incluye el diagrama de Gantt, la espera de cada proceso, la tabla de
    /// métricas y las estadísticas resumidas.
    pub fn generate_report(&self, metrics: &SimulationMetrics) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "\n=== REPORTE DE RESULTADOS ({}) ===\n",
            metrics.algorithm
        ));

        report.push_str("\nDiagrama de Gantt (inicio en cero):\n");
        report.push_str(&metrics.schedule.gantt_chart());
        report.push('\n');

        report.push_str("\nTiempos de espera:\n");
        for process in &metrics.processes {
            report.push_str(&format!(
                "Tiempo de espera del proceso P{} = {}\n",
                process.process_id, process.waiting_time
            ));
        }

        report.push_str(&format!(
            "\n{:^8} {:^8} {:^8} {:^8} {:^10} {:^11} {:^10}\n",
            "Proceso", "Llegada", "Ráfaga", "Espera", "Respuesta", "Finaliza", "Turnaround"
        ));
        report.push_str(&format!("{}\n", "-".repeat(69)));
        for process in &metrics.processes {
            report.push_str(&format!(
                "{:^8} {:^8} {:^8} {:^8} {:^10} {:^11} {:^10}\n",
                format!("P{}", process.process_id),
                process.arrival_time,
                process.burst_time,
                process.waiting_time,
                process.response_time,
                process.completion_time,
                process.turnaround_time
            ));
        }

        report.push_str("\n=== ESTADÍSTICAS RESUMIDAS ===\n");
        report.push_str(&format!("Procesos planificados: {}\n", metrics.processes.len()));
        report.push_str(&format!(
            "Tiempo promedio de espera: {:.2} ms\n",
            metrics.average_waiting_time
        ));
        report.push_str(&format!(
            "Tiempo promedio de turnaround: {:.2} ms\n",
            metrics.average_turnaround_time
        ));
        report.push_str(&format!(
            "Tiempo promedio de respuesta: {:.2} ms\n",
            metrics.average_response_time
        ));
        report.push_str(&format!("Makespan: {}\n", metrics.makespan));
        report.push_str(&format!("Tiempo ocioso de CPU: {}\n", metrics.idle_time));
        report.push_str(&format!(
            "Utilización de CPU: {:.2}%\n",
            metrics.cpu_utilization
        ));

        report
    }

    /// Genera un reporte resumido en formato CSV, una fila por proceso.
    pub fn generate_csv_report(&self, metrics: &SimulationMetrics) -> String {
        let mut csv = String::new();

        csv.push_str("ProcessID,ArrivalTime,BurstTime,Priority,WaitingTime,ResponseTime,CompletionTime,Turnaround\n");

        for process in &metrics.processes {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                process.process_id,
                process.arrival_time,
                process.burst_time,
                process.priority,
                process.waiting_time,
                process.response_time,
                process.completion_time,
                process.turnaround_time
            ));
        }

        csv
    }

    /// Serializa las métricas completas a JSON.
    pub fn generate_json_report(&self, metrics: &SimulationMetrics) -> serde_json::Result<String> {
        serde_json::to_string_pretty(metrics)
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn average(values: impl Iterator<Item = Ticks>) -> f64 {
    values.map(|value| value as f64).collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcfs::run_fcfs;
    use crate::round_robin::run_round_robin;

    fn reference_workload() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5, 2),
            Process::new(2, 1, 3, 4),
            Process::new(3, 2, 1, 1),
        ]
    }

    #[test]
    fn test_fcfs_metrics() {
        let processes = reference_workload();
        let schedule = run_fcfs(&processes).unwrap();
        let metrics =
            MetricsCalculator::new().calculate(&processes, &schedule, SchedulingAlgorithm::fcfs());

        assert!((metrics.average_waiting_time - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(metrics.processes[1].completion_time, 8);
        assert_eq!(metrics.processes[1].turnaround_time, 7);
        assert_eq!(metrics.processes[2].response_time, 6);
        assert_eq!(metrics.makespan, 9);
        assert_eq!(metrics.idle_time, 0);
        assert!((metrics.cpu_utilization - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_robin_response_differs_from_waiting() {
        let processes = reference_workload();
        let schedule = run_round_robin(&processes, 2).unwrap();
        let metrics = MetricsCalculator::new().calculate(
            &processes,
            &schedule,
            SchedulingAlgorithm::round_robin(2),
        );

        let p1 = &metrics.processes[0];
        assert_eq!(p1.response_time, 0);
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(p1.turnaround_time, p1.waiting_time + p1.burst_time);
    }

    #[test]
    fn test_duplicate_ids_are_measured_by_position() {
        let processes = vec![Process::new(1, 0, 5, 1), Process::new(1, 0, 3, 1)];
        let schedule = run_fcfs(&processes).unwrap();
        let metrics =
            MetricsCalculator::new().calculate(&processes, &schedule, SchedulingAlgorithm::fcfs());

        let first = &metrics.processes[0];
        assert_eq!(first.completion_time, 5);
        assert_eq!(first.turnaround_time, 5);
        assert_eq!(first.response_time, 0);

        let second = &metrics.processes[1];
        assert_eq!(second.response_time, 5);
        assert_eq!(second.completion_time, 8);
        assert_eq!(second.turnaround_time, 8);
        assert!((metrics.average_turnaround_time - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_report_generation() {
        let processes = reference_workload();
        let schedule = run_fcfs(&processes).unwrap();
        let calculator = MetricsCalculator::default();
        let metrics = calculator.calculate(&processes, &schedule, SchedulingAlgorithm::fcfs());

        let report = calculator.generate_report(&metrics);
        assert!(report.contains("| P1(0-5) | P2(5-8) | P3(8-9) |"));
        assert!(report.contains("Tiempo de espera del proceso P3 = 6"));
        assert!(report.contains("Tiempo promedio de espera: 3.33 ms"));

        let csv = calculator.generate_csv_report(&metrics);
        assert_eq!(csv.lines().count(), 4);
        assert!(csv.lines().nth(2).unwrap().starts_with("2,1,3,4,4,"));

        let json = calculator.generate_json_report(&metrics).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["processes"][2]["waiting_time"], 6);
        assert_eq!(value["schedule"]["timeline"][0]["end"], 5);
    }

    #[test]
    fn test_process_table() {
        let table = MetricsCalculator::format_process_table(&reference_workload());
        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().nth(2).unwrap().starts_with("P1"));
    }
}

//! Ejemplo básico de uso del simulador de planificación de CPU

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};

use cpu_scheduling_simulator::{
    config, MetricsCalculator, ProcessGenerator, SchedulingAlgorithm, Simulation,
};

fn main() -> Result<()> {
    println!("=== Ejemplo: Uso Básico del Simulador ===\n");

    let mut generator = ProcessGenerator::new(StdRng::seed_from_u64(2025));
    let processes = generator.random_processes(6);
    println!("{}", MetricsCalculator::format_process_table(&processes));

    // Ejecutar simulación con FCFS
    println!("1. Ejecutando simulación con FCFS...");
    let fcfs_simulation = Simulation::with_processes(processes.clone(), SchedulingAlgorithm::fcfs());
    let fcfs_metrics = fcfs_simulation.run()?;
    println!("{}", fcfs_simulation.generate_report(&fcfs_metrics));

    // Ejecutar simulación con Round Robin
    let quantum = config::DEFAULT_QUANTUM * 5;
    println!("\n2. Ejecutando simulación con Round Robin (quantum {})...", quantum);
    let rr_simulation =
        Simulation::with_processes(processes, SchedulingAlgorithm::round_robin(quantum));
    let rr_metrics = rr_simulation.run()?;
    println!("{}", rr_simulation.generate_report(&rr_metrics));

    // Comparación de resultados
    println!("\n=== Comparación de Algoritmos ===");
    println!("| Métrica                    | FCFS      | Round Robin |");
    println!("|----------------------------|-----------|-------------|");
    println!(
        "| Tiempo promedio de espera  | {:>9.2} | {:>11.2} |",
        fcfs_metrics.average_waiting_time, rr_metrics.average_waiting_time
    );
    println!(
        "| Tiempo promedio turnaround | {:>9.2} | {:>11.2} |",
        fcfs_metrics.average_turnaround_time, rr_metrics.average_turnaround_time
    );
    println!(
        "| Tiempo promedio respuesta  | {:>9.2} | {:>11.2} |",
        fcfs_metrics.average_response_time, rr_metrics.average_response_time
    );
    println!(
        "| Intervalos en el Gantt     | {:>9} | {:>11} |",
        fcfs_metrics.schedule.timeline.len(),
        rr_metrics.schedule.timeline.len()
    );

    println!("\n--- CSV Round Robin ---");
    print!("{}", rr_simulation.generate_csv_report(&rr_metrics));

    Ok(())
}

//! # Módulo de Sesión Interactiva
//!
//! Ciclo interactivo de la herramienta: pide los procesos, deja elegir el
//! algoritmo, muestra el reporte y pregunta si se desea repetir. Cada
//! iteración parte de una lista de procesos nueva.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use rand::Rng;

use crate::config;
use crate::generator::ProcessGenerator;
use crate::input::InputReader;
use crate::metrics::{MetricsCalculator, SimulationMetrics};
use crate::process::{Process, Ticks};
use crate::scheduler::SchedulingAlgorithm;
use crate::simulation::Simulation;

/// Sesión interactiva con lector, escritor y fuente aleatoria inyectados.
pub struct InteractiveSession<R: BufRead, W: Write, G: Rng> {
    input: InputReader<R, W>,
    generator: ProcessGenerator<G>,
}

impl<R: BufRead, W: Write, G: Rng> InteractiveSession<R, W, G> {
    pub fn new(reader: R, writer: W, rng: G) -> Self {
        Self {
            input: InputReader::new(reader, writer),
            generator: ProcessGenerator::new(rng),
        }
    }

    /// Ejecuta simulaciones hasta que el usuario decida salir.
    ///
    /// # Returns
    ///
    /// El número de simulaciones que llegaron a mostrar un reporte
    pub fn run(&mut self) -> Result<usize> {
        let mut completed = 0;

        loop {
            if self.run_once()?.is_some() {
                completed += 1;
            }

            let choice = self.input.read_optional_line(
                "\nPresione Y para continuar o cualquier tecla y ENTER para salir de la simulación: ",
            )?;
            match choice {
                Some(choice) if choice.eq_ignore_ascii_case("y") => continue,
                _ => break,
            }
        }

        info!("Sesión finalizada tras {} simulaciones", completed);
        Ok(completed)
    }

    /// Ejecuta una única simulación interactiva.
    ///
    /// # Returns
    ///
    /// Las métricas de la simulación, o `None` si se eligió una opción de
    /// algoritmo inválida
    pub fn run_once(&mut self) -> Result<Option<SimulationMetrics>> {
        writeln!(self.input.writer(), "\t\tPLANIFICACIÓN DE CPU")?;
        writeln!(self.input.writer(), "\t\t====================")?;

        let processes = self.read_processes()?;
        write!(
            self.input.writer(),
            "\n{}",
            MetricsCalculator::format_process_table(&processes)
        )?;

        let algorithm = match self.read_algorithm()? {
            Some(algorithm) => algorithm,
            None => {
                writeln!(self.input.writer(), "Opción inválida.")?;
                return Ok(None);
            }
        };

        let simulation = Simulation::with_processes(processes, algorithm);
        let metrics = simulation
            .run()
            .with_context(|| format!("La simulación {} falló", algorithm))?;
        write!(self.input.writer(), "{}", simulation.generate_report(&metrics))?;

        Ok(Some(metrics))
    }

    /// Pide la cantidad de procesos y sus ráfagas (aleatorias o manuales).
    fn read_processes(&mut self) -> Result<Vec<Process>> {
        let count = self.input.read_int_in_range(
            &format!(
                "Ingrese el número de procesos (máx {}): ",
                config::MAX_PROCESSES
            ),
            config::MIN_PROCESSES as i64,
            config::MAX_PROCESSES as i64,
        )? as usize;

        let mode = self.input.read_line(
            "Ingrese 'R' para ráfagas aleatorias o 'C' para ráfagas personalizadas: ",
        )?;

        if !mode.eq_ignore_ascii_case("c") {
            debug!("Generando {} procesos aleatorios", count);
            return Ok(self.generator.random_processes(count));
        }

        let mut bursts = Vec::with_capacity(count);
        for index in 0..count {
            let burst = self.input.read_int_in_range(
                &format!("Ingrese el tiempo de ráfaga del proceso P{}: ", index + 1),
                config::MIN_BURST_TIME as i64,
                config::MAX_BURST_TIME as i64,
            )?;
            bursts.push(burst as Ticks);
        }

        Ok(self.generator.with_bursts(&bursts))
    }

    /// Muestra el menú de algoritmos y lee la elección (y el quantum si aplica).
    fn read_algorithm(&mut self) -> Result<Option<SchedulingAlgorithm>> {
        writeln!(self.input.writer(), "\nAlgoritmos de planificación de CPU")?;
        writeln!(self.input.writer(), "==================================")?;
        writeln!(self.input.writer(), "1. FCFS")?;
        writeln!(self.input.writer(), "2. Round Robin")?;

        let choice = self
            .input
            .read_line("\nSeleccione un algoritmo ingresando su número: ")?;

        match choice.as_str() {
            "1" => Ok(Some(SchedulingAlgorithm::fcfs())),
            "2" => {
                let quantum = self.input.read_int_in_range(
                    "Ingrese el quantum de tiempo: ",
                    1,
                    config::MAX_QUANTUM as i64,
                )?;
                Ok(Some(SchedulingAlgorithm::round_robin(quantum as Ticks)))
            }
            _ => Ok(None),
        }
    }
}

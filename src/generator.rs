//! # Módulo de Generación de Cargas de Trabajo
//!
//! Construye listas de procesos sintéticos. La fuente de aleatoriedad se
//! inyecta, de modo que una semilla fija reproduce exactamente la misma carga.

use anyhow::{bail, Result};
use rand::Rng;

use crate::config;
use crate::process::{Process, Ticks};

/// Generador de procesos con fuente aleatoria inyectada.
///
/// Los tiempos de llegada se asignan por posición: el proceso *k* llega en
/// el instante *k - 1*.
///
/// # Examples
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use cpu_scheduling_simulator::ProcessGenerator;
///
/// let mut generator = ProcessGenerator::new(StdRng::seed_from_u64(7));
/// let processes = generator.random_processes(4);
/// assert_eq!(processes.len(), 4);
/// assert_eq!(processes[3].arrival_time, 3);
/// ```
pub struct ProcessGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> ProcessGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Genera `count` procesos con ráfaga y prioridad aleatorias.
    pub fn random_processes(&mut self, count: usize) -> Vec<Process> {
        (0..count)
            .map(|index| {
                let burst_time = self
                    .rng
                    .random_range(config::MIN_BURST_TIME..=config::MAX_BURST_TIME);
                let priority = self.random_priority();
                Process::new(index + 1, index as Ticks, burst_time, priority)
            })
            .collect()
    }

    /// Crea un proceso por cada ráfaga indicada, con prioridad aleatoria.
    pub fn with_bursts(&mut self, bursts: &[Ticks]) -> Vec<Process> {
        bursts
            .iter()
            .enumerate()
            .map(|(index, &burst_time)| {
                let priority = self.random_priority();
                Process::new(index + 1, index as Ticks, burst_time, priority)
            })
            .collect()
    }

    /// Crea procesos con llegadas explícitas en lugar de llegadas por posición.
    ///
    /// # Errors
    ///
    /// Falla si las dos listas no tienen la misma longitud.
    pub fn with_arrivals_and_bursts(
        &mut self,
        arrivals: &[Ticks],
        bursts: &[Ticks],
    ) -> Result<Vec<Process>> {
        if arrivals.len() != bursts.len() {
            bail!(
                "se indicaron {} llegadas pero {} ráfagas",
                arrivals.len(),
                bursts.len()
            );
        }

        Ok(arrivals
            .iter()
            .zip(bursts)
            .enumerate()
            .map(|(index, (&arrival_time, &burst_time))| {
                let priority = self.random_priority();
                Process::new(index + 1, arrival_time, burst_time, priority)
            })
            .collect())
    }

    /// Prioridad aleatoria en el rango configurado.
    pub fn random_priority(&mut self) -> u32 {
        self.rng
            .random_range(config::MIN_PRIORITY..=config::MAX_PRIORITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_processes_within_bounds() {
        let mut generator = ProcessGenerator::new(StdRng::seed_from_u64(42));
        let processes = generator.random_processes(config::MAX_PROCESSES);

        assert_eq!(processes.len(), config::MAX_PROCESSES);
        for (index, process) in processes.iter().enumerate() {
            assert_eq!(process.id, index + 1);
            assert_eq!(process.arrival_time, index as Ticks);
            assert!((config::MIN_BURST_TIME..=config::MAX_BURST_TIME).contains(&process.burst_time));
            assert!((config::MIN_PRIORITY..=config::MAX_PRIORITY).contains(&process.priority));
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let first = ProcessGenerator::new(StdRng::seed_from_u64(9)).random_processes(6);
        let second = ProcessGenerator::new(StdRng::seed_from_u64(9)).random_processes(6);
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_bursts() {
        let mut generator = ProcessGenerator::new(StdRng::seed_from_u64(1));
        let processes = generator.with_bursts(&[5, 3, 1]);

        let bursts: Vec<Ticks> = processes.iter().map(|p| p.burst_time).collect();
        let arrivals: Vec<Ticks> = processes.iter().map(|p| p.arrival_time).collect();
        assert_eq!(bursts, vec![5, 3, 1]);
        assert_eq!(arrivals, vec![0, 1, 2]);
    }

    #[test]
    fn test_with_arrivals_and_bursts() {
        let mut generator = ProcessGenerator::new(StdRng::seed_from_u64(1));
        let processes = generator.with_arrivals_and_bursts(&[4, 0], &[2, 6]).unwrap();
        assert_eq!(processes[0].arrival_time, 4);
        assert_eq!(processes[1].burst_time, 6);

        assert!(generator.with_arrivals_and_bursts(&[0], &[1, 2]).is_err());
    }
}

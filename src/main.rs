use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use cpu_scheduling_simulator::{
    config, InteractiveSession, Process, ProcessGenerator, SchedulingAlgorithm, Simulation, Ticks,
};

/// Algoritmo seleccionable desde la línea de comandos.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmArg {
    Fcfs,
    Rr,
}

/// Formato de salida del reporte.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

/// Simulador de planificación de CPU (FCFS y Round Robin).
///
/// Sin --algorithm se inicia la sesión interactiva.
#[derive(Debug, Parser)]
#[clap(name = "cpu-scheduling-simulator", version)]
struct Opts {
    /// Algoritmo a simular. Si se omite, se usa el modo interactivo.
    #[clap(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,

    /// Quantum de tiempo para Round Robin.
    #[clap(short, long, default_value_t = config::DEFAULT_QUANTUM)]
    quantum: Ticks,

    /// Número de procesos aleatorios cuando no se indican ráfagas.
    #[clap(short = 'n', long, default_value = "5")]
    count: usize,

    /// Ráfagas explícitas separadas por comas (ej: 5,3,1).
    #[clap(short, long, value_delimiter = ',')]
    bursts: Vec<Ticks>,

    /// Llegadas explícitas separadas por comas; requiere --bursts.
    #[clap(long, value_delimiter = ',')]
    arrivals: Vec<Ticks>,

    /// Semilla para reproducir una carga aleatoria.
    #[clap(short, long)]
    seed: Option<u64>,

    /// Formato del reporte.
    #[clap(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Habilita logs detallados. Repetir para más detalle.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn build_processes(opts: &Opts, generator: &mut ProcessGenerator<StdRng>) -> Result<Vec<Process>> {
    if !opts.arrivals.is_empty() {
        if opts.bursts.is_empty() {
            bail!("--arrivals requiere --bursts");
        }
        return generator.with_arrivals_and_bursts(&opts.arrivals, &opts.bursts);
    }

    if !opts.bursts.is_empty() {
        return Ok(generator.with_bursts(&opts.bursts));
    }

    if opts.count == 0 || opts.count > config::MAX_PROCESSES {
        bail!(
            "El número de procesos debe estar entre 1 y {} (se indicó {})",
            config::MAX_PROCESSES,
            opts.count
        );
    }
    Ok(generator.random_processes(opts.count))
}

fn run_batch(opts: &Opts, algorithm: AlgorithmArg, rng: StdRng) -> Result<()> {
    let mut generator = ProcessGenerator::new(rng);
    let processes = build_processes(opts, &mut generator)?;
    debug!("Procesos: {:?}", processes);

    let algorithm = match algorithm {
        AlgorithmArg::Fcfs => SchedulingAlgorithm::fcfs(),
        AlgorithmArg::Rr => SchedulingAlgorithm::round_robin(opts.quantum),
    };

    let simulation = Simulation::with_processes(processes, algorithm);
    let metrics = simulation
        .run()
        .with_context(|| format!("La simulación {} falló", algorithm))?;

    let report = match opts.format {
        OutputFormat::Text => simulation.generate_report(&metrics),
        OutputFormat::Csv => simulation.generate_csv_report(&metrics),
        OutputFormat::Json => simulation
            .generate_json_report(&metrics)
            .context("No se pudo serializar el reporte")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", report)?;
    Ok(())
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let llv = match opts.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    let mut lcfg = simplelog::ConfigBuilder::new();
    lcfg.set_time_level(simplelog::LevelFilter::Error)
        .set_location_level(simplelog::LevelFilter::Off)
        .set_target_level(simplelog::LevelFilter::Off)
        .set_thread_level(simplelog::LevelFilter::Off);
    simplelog::TermLogger::init(
        llv,
        lcfg.build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match opts.algorithm {
        Some(algorithm) => run_batch(&opts, algorithm, rng),
        None => {
            info!("Iniciando sesión interactiva");
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            InteractiveSession::new(stdin, stdout, rng).run()?;
            Ok(())
        }
    }
}

//! Game of Life CLI - Run simulations from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use gol_engine::{Grid, Renderer, SimulationConfig, SimulationController, Tick};

/// Renderer that draws small grids to stdout and summarizes large ones.
struct TextRenderer {
    draw_cells: bool,
}

impl TextRenderer {
    fn new(config: &SimulationConfig) -> Self {
        // A 100x100 default grid does not fit a terminal; fall back to a
        // one-line summary above this size.
        Self {
            draw_cells: config.width <= 80 && config.height <= 40,
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, grid: &Grid) {
        println!(
            "generation {}: {} live / {} cells",
            grid.generation(),
            grid.population(),
            grid.len()
        );
        if self.draw_cells {
            for y in 0..grid.height() {
                let row: String = (0..grid.width())
                    .map(|x| if grid.get(x, y).unwrap_or(false) { '#' } else { '.' })
                    .collect();
                println!("{}", row);
            }
            println!();
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        eprintln!("Usage: {} [config.json] [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file (default: built-in)");
        eprintln!("  generations  Number of generations to run (default: 50)");
        eprintln!();
        eprintln!("An example configuration is printed with --example.");
        std::process::exit(1);
    }

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    let (config, generations) = if args.len() > 1 {
        let config_path = PathBuf::from(&args[1]);
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        let config: SimulationConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        });
        let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);
        (config, generations)
    } else {
        (SimulationConfig::default(), 50)
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    println!("Game of Life Simulation");
    println!("=======================");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Interval: {} ms", config.interval_ms);
    println!("Initial life probability: {}", config.life_probability);
    println!("Generations: {}", generations);
    println!();

    let mut sim = SimulationController::new(&config).unwrap_or_else(|e| {
        eprintln!("Error creating simulation: {}", e);
        std::process::exit(1);
    });
    let mut renderer = TextRenderer::new(&config);

    let start = Instant::now();
    sim.start(Instant::now());

    loop {
        if let Some(deadline) = sim.next_wake() {
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }

        match sim.tick(Instant::now(), &mut renderer) {
            Tick::Stepped => {
                if sim.grid().generation() >= generations {
                    sim.stop();
                }
            }
            Tick::Stopped | Tick::Idle => break,
            Tick::Rendered | Tick::Pending => {}
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!(
        "Ran {} generations in {:.2}s ({} cells still alive)",
        sim.grid().generation(),
        elapsed.as_secs_f32(),
        sim.grid().population()
    );
}

fn print_example_config() {
    let config = SimulationConfig::default();

    println!("Example configuration (config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}

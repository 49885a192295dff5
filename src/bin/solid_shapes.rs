// Prints the total area of a set of shapes.
//
//   solid_shapes                 Rectangle(4, 5) and Circle(3)
//   solid_shapes scene.toml      shapes listed in a TOML or JSON scene file
//
// Diagnostics go to stderr; set RUST_LOG=debug to see each area.

use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use solid_shapes::{AreaCalculator, AreaPrinter, Result, Scene};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(scene_path: Option<PathBuf>) -> Result<()> {
    let scene = match scene_path {
        Some(path) => Scene::load(&path)?,
        None => Scene::demo(),
    };

    let shapes = scene.into_shapes();
    let calculator = AreaCalculator::new(&shapes);
    let printer = AreaPrinter::new(&calculator);
    printer.print()
}

fn main() {
    init_tracing();

    let scene_path = env::args_os().nth(1).map(PathBuf::from);
    if let Err(err) = run(scene_path) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

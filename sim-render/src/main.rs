//! Renders the attractor basin image to a PNG file.
//!
//! Usage: `attractor-render [OUTPUT] [RESOLUTION_MULTIPLIER] [PRECISION_MULTIPLIER]`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod sink;

use anyhow::Context;
use log::info;
use sim_core::{
    config::{Config, THREADS_PER_CPU_THREAD},
    phases,
};
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "output.png";

/// Startup options read from the command line.
#[derive(Debug)]
struct Options {
    output: PathBuf,
    resolution: f32,
    precision: f32,
}

impl Options {
    fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let output = args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let resolution = parse_multiplier(args.next(), "resolution multiplier")?;
        let precision = parse_multiplier(args.next(), "precision multiplier")?;

        Ok(Self {
            output,
            resolution,
            precision,
        })
    }
}

fn parse_multiplier(arg: Option<String>, what: &str) -> anyhow::Result<f32> {
    let Some(arg) = arg else {
        return Ok(1.0);
    };
    let value: f32 = arg
        .parse()
        .with_context(|| format!("invalid {what} '{arg}'"))?;
    anyhow::ensure!(
        value.is_finite() && value > 0.0,
        "{what} must be positive, got {value}"
    );
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let options = Options::from_args(std::env::args().skip(1))?;

    let mut cfg = Config::scaled(options.resolution, options.precision);
    cfg.workers = num_cpus::get() * THREADS_PER_CPU_THREAD;
    anyhow::ensure!(
        cfg.width > 0 && cfg.height > 0,
        "resolution multiplier {} leaves an empty image",
        options.resolution
    );

    info!("resolution multiplier: {}", options.resolution);
    info!("precision multiplier: {}", options.precision);
    info!("image: {}x{}", cfg.width, cfg.height);
    info!("iterations: {}", cfg.iterations);
    info!("iteration duration: {}", cfg.iteration_duration);
    info!("distance threshold: {}", cfg.distance_threshold);
    info!("workers: {}", cfg.workers);
    info!("attractors: {:?}", cfg.attractor_set().points);

    let rendered = phases::render_image(&cfg);
    println!(
        "Your calculations took {:.2} seconds to run.",
        rendered.elapsed.as_secs_f64()
    );

    sink::save_png(&options.output, &rendered.image)
        .with_context(|| format!("failed to write {}", options.output.display()))?;
    info!("wrote {}", options.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = Options::from_args(args(&[])).unwrap();

        assert_eq!(options.output, PathBuf::from("output.png"));
        assert_eq!(options.resolution, 1.0);
        assert_eq!(options.precision, 1.0);
    }

    #[test]
    fn positional_arguments_override_defaults() {
        let options = Options::from_args(args(&["basins.png", "0.5", "2"])).unwrap();

        assert_eq!(options.output, PathBuf::from("basins.png"));
        assert_eq!(options.resolution, 0.5);
        assert_eq!(options.precision, 2.0);
    }

    #[test]
    fn rejects_non_positive_or_garbage_multipliers() {
        assert!(Options::from_args(args(&["a.png", "0"])).is_err());
        assert!(Options::from_args(args(&["a.png", "-1"])).is_err());
        assert!(Options::from_args(args(&["a.png", "1", "fast"])).is_err());
        assert!(Options::from_args(args(&["a.png", "NaN"])).is_err());
    }
}

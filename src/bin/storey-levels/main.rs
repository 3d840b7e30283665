//! storey-levels CLI - print section-cut heights of IFC building models.

use std::env;
use std::process;

use storey_levels::levels::{SectionLevels, DEFAULT_OFFSET_HEIGHT, DEFAULT_SCREEN_SIZE_CO};
use storey_levels::StepModel;
use tracing_subscriber::EnvFilter;

const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Verbosity, mapped onto a tracing filter unless RUST_LOG is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    Normal,
    Debug,
    Trace,
}

impl Verbosity {
    fn filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "off",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

#[derive(Debug)]
struct Options {
    file: String,
    offset: f64,
    camera: bool,
    storeys: bool,
    json: bool,
    verbosity: Verbosity,
}

enum Command {
    Run(Options),
    Help,
    Version,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let opts = match parse_args(&args) {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            print_help();
            return;
        }
        Ok(Command::Version) => {
            println!(
                "storey-levels {} (built {})",
                env!("CARGO_PKG_VERSION"),
                env!("STOREY_LEVELS_BUILD_DATE")
            );
            return;
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: storey-levels [OPTIONS] <file.ifc>");
            eprintln!("Try 'storey-levels --help' for more information.");
            process::exit(EXIT_USAGE);
        }
    };

    init_tracing(opts.verbosity);
    run(&opts);
}

fn print_help() {
    println!("storey-levels - section-cut heights from IFC building storeys");
    println!();
    println!("USAGE:");
    println!("    storey-levels [OPTIONS] <file.ifc>");
    println!();
    println!("Prints one section height (storey elevation + offset) per line,");
    println!("in the order the storeys appear in the model.");
    println!();
    println!("OPTIONS:");
    println!("    -o, --offset <h>   Section height above each floor (default {})", DEFAULT_OFFSET_HEIGHT);
    println!("    -c, --camera       Also print the estimated camera Z");
    println!("    -s, --storeys      Print id, name, elevation and height per storey");
    println!("    -j, --json         Print a JSON report instead of plain heights");
    println!("    -v, --verbose      Show debug output");
    println!("    -vv, --trace       Show trace output (very verbose)");
    println!("    -q, --quiet        Suppress all log output");
    println!("    -V, --version      Show version");
    println!("    -h, --help         Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    storey-levels tower.ifc              # 0.9, 3.9, 6.9, ...");
    println!("    storey-levels -o 1.2 -c tower.ifc    # Custom cut height plus camera Z");
    println!("    storey-levels --json tower.ifc       # Full report");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG           Overrides the log filter (e.g. storey_levels=trace)");
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut file = None;
    let mut offset = DEFAULT_OFFSET_HEIGHT;
    let mut camera = false;
    let mut storeys = false;
    let mut json = false;
    let mut verbosity = Verbosity::Normal;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-v" | "--verbose" => verbosity = Verbosity::Debug,
            "-vv" | "--trace" => verbosity = Verbosity::Trace,
            "-q" | "--quiet" => verbosity = Verbosity::Quiet,
            "-c" | "--camera" => camera = true,
            "-s" | "--storeys" => storeys = true,
            "-j" | "--json" => json = true,
            "-o" | "--offset" => {
                let value = iter.next().ok_or_else(|| format!("{} requires a value", arg))?;
                offset = parse_offset(value)?;
            }
            s if s.starts_with("--offset=") => offset = parse_offset(&s["--offset=".len()..])?,
            s if s.starts_with('-') && s.len() > 1 && s.parse::<f64>().is_err() => {
                return Err(format!("unknown option {}", s));
            }
            s => {
                if file.is_some() {
                    return Err(format!("unexpected argument {}", s));
                }
                file = Some(s.to_string());
            }
        }
    }

    let file = file.ok_or_else(|| "missing file argument".to_string())?;
    Ok(Command::Run(Options { file, offset, camera, storeys, json, verbosity }))
}

fn parse_offset(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("invalid offset '{}'", value))
}

fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(opts: &Options) {
    tracing::info!("Opening model: {}", opts.file);

    let model = match StepModel::open(&opts.file) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Failed to open {}: {}", opts.file, e);
            process::exit(EXIT_FAILURE);
        }
    };
    tracing::debug!(
        "{} entities, schema {}",
        model.len(),
        model.header().primary_schema().unwrap_or("unknown")
    );
    for (type_name, count) in model.type_counts() {
        tracing::trace!("{:>8}  {}", count, type_name);
    }

    let levels = match SectionLevels::from_model(&model, opts.offset, DEFAULT_SCREEN_SIZE_CO) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Invalid model {}: {}", opts.file, e);
            process::exit(EXIT_FAILURE);
        }
    };
    if levels.is_empty() {
        tracing::warn!("{} has no building storeys", opts.file);
    }

    if opts.json {
        let report = serde_json::json!({
            "file": opts.file,
            "schema": model.header().primary_schema(),
            "levels": levels,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                process::exit(EXIT_FAILURE);
            }
        }
        return;
    }

    if opts.storeys {
        for (storey, height) in levels.storeys.iter().zip(&levels.section_heights) {
            println!(
                "#{}\t{}\t{}\t{}",
                storey.id,
                storey.name.as_deref().unwrap_or("-"),
                storey.elevation,
                height
            );
        }
    } else {
        for height in &levels.section_heights {
            println!("{}", height);
        }
    }

    if opts.camera {
        println!("camera_z={}", levels.camera_z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        match parse_args(&args(&["tower.ifc"])) {
            Ok(Command::Run(opts)) => {
                assert_eq!(opts.file, "tower.ifc");
                assert_eq!(opts.offset, DEFAULT_OFFSET_HEIGHT);
                assert!(!opts.camera && !opts.json && !opts.storeys);
                assert_eq!(opts.verbosity, Verbosity::Normal);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_options() {
        match parse_args(&args(&["-v", "--offset", "-0.5", "-c", "-j", "a.ifc"])) {
            Ok(Command::Run(opts)) => {
                assert_eq!(opts.offset, -0.5);
                assert!(opts.camera && opts.json);
                assert_eq!(opts.verbosity, Verbosity::Debug);
            }
            _ => panic!("expected run command"),
        }
        match parse_args(&args(&["--offset=1.25", "a.ifc"])) {
            Ok(Command::Run(opts)) => assert_eq!(opts.offset, 1.25),
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["-q"])).is_err());
        assert!(parse_args(&args(&["--offset"])).is_err());
        assert!(parse_args(&args(&["-o", "high", "a.ifc"])).is_err());
        assert!(parse_args(&args(&["--bogus", "a.ifc"])).is_err());
        assert!(parse_args(&args(&["a.ifc", "b.ifc"])).is_err());
        assert!(matches!(parse_args(&args(&["a.ifc", "-h"])), Ok(Command::Help)));
    }
}

use clap::{Parser, ValueEnum};
use modulemap_core::{Generator, GeneratorConfig, ImportStrategy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modulemap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Regenerate the static module map for the plugin playground")]
#[command(long_about = "Reads the host application's package configuration to find its \
    singleton packages, adds the configured extra packages, removes the ignored ones, \
    and writes a sorted TypeScript module map. Entries are rendered either as dynamic \
    import() expressions (lazy, the default) or as static import * as bindings (eager).\n\n\
    The output file is fully overwritten on every run; nothing is written if reading \
    the package configuration fails.")]
pub struct Args {
    /// Package configuration file holding the singleton package list
    #[arg(default_value = "package.json")]
    pub registry: PathBuf,

    /// Output file for the generated map
    #[arg(short, long, default_value = "src/modules.ts")]
    pub output: PathBuf,

    /// Import strategy for the rendered map
    #[arg(long, value_enum, default_value_t = StrategyArg::Lazy)]
    pub strategy: StrategyArg,

    /// Additional package to force into the map (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub extra: Vec<String>,

    /// Additional package to keep out of the map (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Print the generated source to stdout instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    Lazy,
    Eager,
}

impl From<StrategyArg> for ImportStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Lazy => ImportStrategy::Lazy,
            StrategyArg::Eager => ImportStrategy::Eager,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = GeneratorConfig::new(args.registry)
        .with_output_path(args.output.clone())
        .with_strategy(args.strategy.into())
        .with_extra_modules(args.extra)
        .with_ignored_modules(args.ignore);

    let generator = Generator::new(config);
    let map = generator.generate()?;

    println!("Creating module map against host version {}", map.registry_version);

    if args.stdout {
        print!("{}", map.source);
    } else {
        generator.write(&map)?;
        if args.verbose {
            eprintln!(
                "Wrote {} entries to: {}",
                map.names.len(),
                args.output.display()
            );
        }
    }

    Ok(())
}

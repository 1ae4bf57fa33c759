//! Command-line front end: generate a random duplex and report on it, run
//! the JSON API demonstration, or open the 3-D helix viewer.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use duplex::{
    demo,
    launch::{self, LaunchOptions},
    options::Options,
    sequence::{self, stats, text, Duplex},
    viewer::{self, Availability, Viewer},
    DuplexError,
};
use rand::{rngs::StdRng, SeedableRng};

/// Width of the composition bar chart, in cells.
const CHART_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "duplex", version)]
#[command(about = "Random DNA duplex generator and double-helix viewer", long_about = None)]
struct Cli {
    /// TOML options preset (forwarded to the viewer)
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random duplex and print its statistics and text helix
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Also open the 3-D viewer
        #[arg(long)]
        view: bool,
    },

    /// Call the demonstration JSON APIs and print the transcript
    ApiDemo,

    /// Generate a random duplex and open it in the 3-D viewer
    View {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Run the viewer window in this process
    #[command(hide = true)]
    Viewer {
        /// Primary strand, 5' to 3'
        #[arg(long)]
        primary: String,

        /// Complementary strand
        #[arg(long)]
        complement: String,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Number of base pairs
    #[arg(short, long, default_value_t = sequence::DEFAULT_LENGTH, value_parser = parse_length)]
    length: usize,

    /// Seed for a reproducible duplex
    #[arg(short, long)]
    seed: Option<u64>,
}

impl SourceArgs {
    fn duplex(&self) -> Duplex {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Duplex::generate(self.length, &mut rng)
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|e| format!("{e}"))?;
    let range = sequence::LENGTH_RANGE;
    if range.contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "length must be between {} and {}",
            range.start(),
            range.end()
        ))
    }
}

fn report(duplex: &Duplex) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{}",
        stats::statistics_text(duplex.primary(), stats::RANDOM_SOURCE)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", stats::composition_chart(duplex.primary(), CHART_WIDTH))?;
    writeln!(out)?;
    write!(out, "{}", text::text_helix(duplex, text::DEFAULT_BASES_PER_LINE))?;
    writeln!(out, "{}", text::legend_text())?;
    out.flush()
}

/// Launch the viewer if this host can run it. An unavailable backend is
/// reported, not an error.
fn open_viewer(
    duplex: &Duplex,
    options_path: Option<PathBuf>,
) -> Result<(), DuplexError> {
    // Reject a broken preset here rather than in a detached process.
    if let Some(path) = &options_path {
        let _ = Options::load(path)?;
    }
    match viewer::probe() {
        Availability::Unavailable { reason } => {
            log::warn!("3-D viewer unavailable: {reason}");
            Ok(())
        }
        Availability::Available { adapter } => {
            log::debug!("opening viewer on {adapter}");
            let launch = LaunchOptions {
                options_path,
                ..LaunchOptions::default()
            };
            let _child = launch::spawn_viewer(duplex, &launch)?;
            Ok(())
        }
    }
}

fn run(cli: Cli) -> Result<(), DuplexError> {
    match cli.command {
        Commands::Generate { source, view } => {
            let duplex = source.duplex();
            report(&duplex)?;
            if view {
                open_viewer(&duplex, cli.options)?;
            }
            Ok(())
        }
        Commands::ApiDemo => {
            let transcript = demo::run();
            let mut out = io::stdout().lock();
            write!(out, "{transcript}")?;
            Ok(())
        }
        Commands::View { source } => open_viewer(&source.duplex(), cli.options),
        Commands::Viewer {
            primary,
            complement,
        } => {
            let options = match &cli.options {
                Some(path) => Options::load(path)?,
                None => Options::default(),
            };
            let duplex = Duplex::new(primary.parse()?, complement.parse()?)?;
            Viewer::builder()
                .with_duplex(duplex)
                .with_options(options)
                .build()
                .run()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

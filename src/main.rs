use anyhow::{Context, Result};
use clap::Parser;
use sylva_lib::app::App;
use sylva_lib::model::config::AppConfig;
use sylva_lib::model::metrics::init_logging;
use tokio::io::BufReader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks (headless mode)
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Print a report every N ticks (headless mode, 0 = only at the end)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// RNG seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Emit reports as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Interactive,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)
        .with_context(|| format!("loading configuration from {}", args.config))?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        fingerprint = %config.fingerprint(),
        seed = ?config.world.seed,
        population = config.world.initial_population,
        "Configuration loaded"
    );

    let mut app = App::new(config);

    match args.mode {
        Mode::Headless => {
            app.run_headless(args.ticks, args.report_every, args.json)?;
        }
        Mode::Interactive => {
            println!("Commands: start, pause, reset, speed <1-9>, step, stats, quit");
            println!("{}", app.status_line());
            let stdin = BufReader::new(tokio::io::stdin());
            app.run_interactive(stdin, tokio::io::stdout(), args.json)
                .await?;
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use mxid::{Generator, GeneratorConfig, StateMatch};
use mxid_cli::commands;
use mxid_cli::error::{Error, Result};
use mxid_cli::output::{self, OutputFormat};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mxid",
    about = "Generate and verify Mexican CURP and RFC identifiers",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true)]
    debug: bool,

    /// Output format (json or text)
    #[arg(long, global = true, env = "MXID_FORMAT", default_value = "json")]
    format: String,

    /// Birth-state matching mode (exact or contains)
    #[arg(long, global = true, env = "MXID_STATE_MATCH", default_value = "contains")]
    state_match: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CURP and RFC for one person
    Generate(commands::generate::IdentityArgs),
    /// Generate only the CURP
    Curp(commands::generate::IdentityArgs),
    /// Generate only the RFC
    Rfc(commands::generate::RfcArgs),
    /// Resolve a birth state to its code, or list all codes
    State(commands::state::StateArgs),
    /// Check a CURP or RFC
    Verify(commands::verify::VerifyArgs),
    /// Generate identifiers for every identity in a JSON file
    Batch(commands::batch::BatchArgs),
}

fn main() {
    let cli = Cli::parse();

    let format = cli.format.parse::<OutputFormat>().unwrap_or_else(|_| {
        let fallback = OutputFormat::default();
        eprintln!("Warning: unknown format '{}', using {}", cli.format, fallback);
        fallback
    });

    // Initialize logging to stderr
    let level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("mxid_cli={},mxid={}", level, level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();

    if let Err(e) = run(&cli, format) {
        output::print_error(format, &e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, format: OutputFormat) -> Result<()> {
    let state_match = cli
        .state_match
        .parse::<StateMatch>()
        .map_err(Error::configuration)?;
    let generator = Generator::new(GeneratorConfig::default().with_state_match(state_match));
    debug!("Using state match mode: {}", state_match);

    match cli.command {
        Commands::Generate(ref args) => commands::generate::handle_generate(args, format, &generator),
        Commands::Curp(ref args) => commands::generate::handle_curp(args, format, &generator),
        Commands::Rfc(ref args) => commands::generate::handle_rfc(args, format, &generator),
        Commands::State(ref args) => commands::state::handle(args, format, state_match),
        Commands::Verify(ref args) => commands::verify::handle(args, format),
        Commands::Batch(ref args) => commands::batch::handle(args, format, &generator),
    }
}

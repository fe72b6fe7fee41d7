use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{generate::GenerateSubcommands, geocode::GeocodeArgs, route::RouteArgs};

mod generate;
mod geocode;
mod parsers;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sequence today's confirmed stops into a route
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Resolve addresses with the simulated geocoder
    Geocode {
        #[command(flatten)]
        args: GeocodeArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args).await?,
        Commands::Geocode { args } => geocode::run(args).await?,
        Commands::Generate { commands } => generate::run(commands)?,
    }

    Ok(())
}

use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Args, ValueEnum};
use comfy_table::Table;
use ruta_optimizer::{
    json::types::{JsonRoute, JsonRouteRequest},
    problem::{geo_point::GeoPoint, kmh::Kmh},
    solver::{
        route::Route,
        route_params::{RouteParams, Threads},
    },
};
use tracing::info;

use crate::parsers;

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args)]
pub struct RouteArgs {
    /// The route request file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Departure point as "lat,lng", overrides the start of the input file
    #[arg(long, env = "RUTA_START", value_parser = parsers::parse_geo_point)]
    start: Option<GeoPoint>,

    /// Average speed in km/h used for the ETAs
    #[arg(long, env = "RUTA_AVERAGE_SPEED_KMH", value_parser = parsers::parse_speed, default_value = "30")]
    speed: f64,

    /// Threads for the nearest stop scan, 0 uses all cores
    #[arg(long, default_value_t = 1)]
    threads: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

fn load_request(path: &PathBuf) -> anyhow::Result<JsonRouteRequest> {
    let f = File::open(path)?;
    let content: JsonRouteRequest = serde_json::from_reader(BufReader::new(f))?;
    Ok(content)
}

fn scan_threads(threads: usize) -> Threads {
    match threads {
        0 => Threads::Auto,
        1 => Threads::Single,
        n => Threads::Multi(n),
    }
}

fn render_table(route: &Route<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Stop", "Leg (km)", "Total (km)", "ETA"]);

    for stop in route {
        table.add_row(vec![
            stop.order.to_string(),
            stop.id().to_owned(),
            format!("{:.2}", stop.distance.value()),
            format!("{:.2}", stop.cumulative_distance.value()),
            stop.eta.to_string(),
        ]);
    }

    table
}

/// Elapsed time of the whole route, `0m` when there is nothing to visit.
fn total_eta_label(route: &Route<'_>) -> String {
    if route.is_empty() {
        String::from("0m")
    } else {
        route.total_eta().to_string()
    }
}

pub async fn run(args: RouteArgs) -> anyhow::Result<()> {
    let content = load_request(&args.input)?;
    let client = content.geocoding_client();
    let mut request = content.build_request(&client).await?;

    if let Some(start) = args.start {
        request.start = start;
    }

    let params = RouteParams {
        average_speed: Kmh::new(args.speed),
        scan_threads: scan_threads(args.threads),
        ..RouteParams::default()
    };

    let route = request.route(&params)?;

    if route.is_empty() {
        info!("No confirmed stops for today");
    }

    match args.format {
        OutputFormat::Table => {
            println!("{}", render_table(&route));
            println!("Total distance: {:.1} km", route.total_distance().value());
            println!("Estimated duration: {}", total_eta_label(&route));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonRoute::from(&route))?);
        }
    }

    info!(
        "Finished: stops = {}, distance = {:.1}, eta = {}",
        route.len(),
        route.total_distance(),
        route.total_eta()
    );

    Ok(())
}

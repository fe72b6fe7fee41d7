use clap::Args;
use comfy_table::Table;
use ruta_geocoding::{geocoder::Geocoder, simulated::SimulatedGeocoder};
use tracing::info;

#[derive(Args)]
pub struct GeocodeArgs {
    /// Addresses to resolve
    #[arg(required = true)]
    addresses: Vec<String>,

    /// Seed of the simulated geocoder
    #[arg(long, env = "RUTA_GEOCODER_SEED")]
    seed: Option<u64>,
}

pub async fn run(args: GeocodeArgs) -> anyhow::Result<()> {
    let geocoder = match args.seed {
        Some(seed) => SimulatedGeocoder::with_seed(seed),
        None => SimulatedGeocoder::default(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Address", "Lat", "Lng"]);

    for address in &args.addresses {
        let point = geocoder.geocode(address).await?;
        table.add_row(vec![
            address.clone(),
            format!("{:.6}", point.y()),
            format!("{:.6}", point.x()),
        ]);
    }

    info!("Geocoded {} addresses", args.addresses.len());
    println!("{table}");

    Ok(())
}

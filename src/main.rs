use chrono::Utc;
use clap::Parser;
use commodity_pricer::{
    config::Config, find_best_price, transport::HttpTransport, Constraints, Inara, PadSize,
};
use log::error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Commodity name, e.g. "Alexandrite"
    commodity: String,
    /// Star system distances are measured from
    system: String,
    #[arg(long, default_value_t = u32::MAX)]
    max_distance: u32,
    /// Smallest landing pad required (S, M or L)
    #[arg(long, default_value = "S")]
    pad: PadSize,
    #[arg(long, default_value_t = 0)]
    quantity: u64,
    /// Print the station as json
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let transport = match HttpTransport::new(&config) {
        Ok(transport) => transport,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let inara = Inara::new(transport, &config.base_url);
    let constraints = Constraints {
        max_distance: args.max_distance,
        min_pad: args.pad,
        min_quantity: args.quantity,
    };

    let Some(best) = find_best_price(&inara, &args.commodity, &args.system, &constraints).await
    else {
        println!("no matching station");
        return;
    };

    if args.json {
        match serde_json::to_string_pretty(&best) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize station: {:?}", e),
        }
        return;
    }

    println!(
        "{} (updated {}, {})",
        best,
        best.updated,
        best.updated_at(Utc::now()).format("%Y-%m-%d %H:%M UTC")
    );
}

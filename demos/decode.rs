use tracing_subscriber::EnvFilter;
use vinparse::*;

fn main() {
    // RUST_LOG=vinparse=trace shows every decoding step
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let vins = if args.is_empty() {
        vec!["WBA8H8108JA857577".to_owned(), "1M8GDM9AXKP042788".to_owned()]
    } else {
        args
    };

    for raw in &vins {
        match get_info(raw) {
            Ok(vin) => {
                println!("{vin}");
                println!("  Region:       {}", vin.region_name());
                println!("  Country:      {}", vin.country());
                println!("  Manufacturer: {}", vin.manufacturer());
                println!("  WMI/VDS/VIS:  {} {} {}", vin.wmi(), vin.vds(), vin.vis());
                println!("  Small maker:  {}", vin.is_small_manufacturer());
                println!("  Model years:  {:?}", vin.model_years());
            }
            Err(e) => println!("{raw}: {e}"),
        }
    }
}

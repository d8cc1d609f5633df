use image_harvester::{Harvest, HarvestConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let harvest = Harvest::new(HarvestConfig::default());

    let report = harvest.run();

    println!("{}", report.summary());
}

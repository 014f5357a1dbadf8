use tracing_subscriber;
use tracing::info;
use clap::Parser;
use traffic_light_rust::{Result, CountdownLatch, TrafficLight};
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// number of observers waiting to cross
    #[clap(short, long)]
    #[clap(default_value_t = 4)]
    observers: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let options = Options::parse();
    info!("starting simulation with {} observers", options.observers);

    let light = TrafficLight::new();
    light.start_simulation();

    let crossed = CountdownLatch::new(options.observers);
    for i in 0..options.observers {
        let light = light.clone();
        let crossed = crossed.clone();
        thread::spawn(move || {
            light.wait_for_green();
            info!("observer {} saw green and crossed", i);
            crossed.count_down();
        });
    }

    while crossed.count() > 0 {
        thread::sleep(Duration::from_secs(1));
        info!("light is {:?}, {} observers still waiting", light.get_current_phase(), crossed.count());
    }
    info!("all observers crossed");

    Ok(())
}

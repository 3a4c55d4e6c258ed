//! Minimal end-to-end run: default configuration, per-tick census on stdout.
//!
//! ```sh
//! cargo run --example quickstart
//! RUST_LOG=trophic_engine=debug cargo run --example quickstart
//! ```

use trophic_engine::{SimConfig, TickDriver};
use trophic_obs::ConsoleObserver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut driver = TickDriver::new(SimConfig::default())?;
    let mut observer = ConsoleObserver::with_grid();
    driver.run(&mut observer)?;

    println!("final: {}", driver.census());
    Ok(())
}

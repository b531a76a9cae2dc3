//! Random-map pathfinding demo.
//!
//! Run: cargo run --bin gridstar -- 70 1234 0 0 19 9 20 10

use clap::Parser;
use gridstar_demos::{DemoArgs, run};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = DemoArgs::parse();
    match run(&args) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

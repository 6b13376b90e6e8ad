use std::process;

use clap::Parser;

mod config;
mod keymap;
mod run;

use config::{Args, Config};

fn main() {
    env_logger::init();

    let config = Config::from(Args::parse());
    log::debug!("{:?}", config);

    if let Err(e) = run::run(&config) {
        log::error!("{:#}", e);
        process::exit(1);
    }
}

#![forbid(unsafe_code)]

mod cli;
mod command_classify;
mod command_scan;
mod command_table;
mod config;
mod error;
mod tables;

fn main() {
    env_logger::init();
    if let Err(err) = cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

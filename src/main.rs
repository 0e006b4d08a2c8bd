use std::process;

use bytesize_fmt::args::Args;
use bytesize_fmt::config::Config;
use clap::Parser;

fn main() {
    let args = Args::parse();

    // bind arguments to a Config struct
    let config = Config::build(&args).unwrap_or_else(|err| {
        eprintln!("Could not parse arguments: {err}");
        process::exit(1);
    });

    let default_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match bytesize_fmt::run(&config) {
        Ok(line) => println!("{line}"),
        Err(e) => {
            eprintln!("Fatal Error: {e}");
            process::exit(1);
        }
    }
}

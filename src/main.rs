// src/main.rs
use mensa_scrape::{cli, config::Config, runner};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let params = cli::parse()?;
    let config = Config::load(params.config_path.as_deref())?;
    let reply = runner::run(&params, &config)?;
    println!("{reply}");
    Ok(())
}

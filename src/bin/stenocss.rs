use clap::Parser;

use stenocss::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    run(Cli::parse())
}

use clap::Parser;
use proximap::app::viewdata::{app, CliArgs};

fn main() {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = CliArgs::parse();
    match run_proximap(&args) {
        Ok(_) => {}
        Err(e) => log::error!("{e}"),
    }
}

fn run_proximap(args: &CliArgs) -> Result<(), String> {
    log::info!("starting app at {}", chrono::Local::now().to_rfc3339());
    app::run(args)
}

use meowl_chess::GameConfig;
use meowl_chess::visualization::run_interactive_terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::from_args(std::env::args().skip(1));
    log::info!("Meowl Chess - terminal");

    if let Err(e) = run_interactive_terminal(config) {
        log::error!("terminal session failed: {e}");
        std::process::exit(1);
    }
}

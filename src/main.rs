use urlwait::cli::Cli;
use urlwait::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("urlwait error: {:#}", err);
        std::process::exit(1);
    }
}

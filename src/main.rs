use birthday_rolodex::prelude::{AppError, run_app};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    // Logs go to stderr, stdout belongs to the REPL
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run_app()
}

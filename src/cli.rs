use crate::checker;
use crate::config;
use crate::probe::CurlTransport;
use crate::retry::RetryPolicy;
use anyhow::Result;
use clap::Parser;
use std::time::Duration;

/// CLI for the urlwait reachability checker.
///
/// Every argument can come from the environment instead (`INPUT_URL` etc.,
/// the usual CI action contract), so a workflow step can run the binary with
/// no arguments at all.
#[derive(Debug, Parser)]
#[command(name = "urlwait")]
#[command(about = "Poll a URL until it answers HTTP 200 or the retry budget runs out", long_about = None)]
pub struct Cli {
    /// Target URL to poll.
    #[arg(env = "INPUT_URL")]
    pub url: String,

    /// Maximum number of failed attempts before giving up.
    #[arg(long, env = "INPUT_MAX_ATTEMPTS", default_value_t = 5)]
    pub max_attempts: u32,

    /// Pause between attempts, in seconds.
    #[arg(long, env = "INPUT_DELAY", default_value_t = 5)]
    pub delay: u64,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let policy = RetryPolicy {
            max_attempts: cli.max_attempts,
            delay: Duration::from_secs(cli.delay),
        };
        let mut transport = CurlTransport::new(&cfg);

        checker::check_reachable(&cli.url, &policy, &mut transport)?;
        println!("URL {} is reachable", cli.url);
        Ok(())
    }
}

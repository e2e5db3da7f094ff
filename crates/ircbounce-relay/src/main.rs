//! ircbounce-inspect
//!
//! Usage: `ircbounce-inspect [CONFIG.yaml|-] [INPUT.jsonl]`
//! - Reads JSON envelopes line by line (stdin when no input is given)
//! - Writes each decoded envelope back out in normalized form
//! - Logs to stderr; `RUST_LOG` overrides `log.filter`

use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use ircbounce_core::error::{BounceError, Result};
use ircbounce_relay::{config, inspect};

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let cfg_path = args.next();
    let input = args.next();

    let cfg = match cfg_path.as_deref() {
        None | Some("-") => Ok(config::RelayConfig::default()),
        Some(path) => config::load_from_file(path),
    };
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("config load failed: {e}");
            std::process::exit(2);
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cfg, input.as_deref()).await {
        tracing::error!(code = e.client_code().as_str(), error = %e, "ircbounce-inspect failed");
        std::process::exit(1);
    }
}

async fn run(cfg: &config::RelayConfig, input: Option<&str>) -> Result<()> {
    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match input {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|e| BounceError::Internal(format!("open {path} failed: {e}")))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };

    tracing::info!(max_frame_bytes = cfg.codec.max_frame_bytes, "ircbounce-inspect starting");
    let stats = inspect::normalize(reader, tokio::io::stdout(), &cfg.codec).await?;
    tracing::info!(
        decoded = stats.decoded,
        passed_through = stats.passed_through,
        rejected = stats.rejected,
        "done"
    );
    Ok(())
}

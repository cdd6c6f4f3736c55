use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use quill_config::Config;
use quill_core::pipeline::{Corrector, Outcome};
use quill_corrector::CorrectionModel;
use quill_corrector::gemini::{GeminiCorrector, SamplingParams};
use tokio::signal;

mod controller;
mod events;
mod io;
mod profile;
mod state;
mod status;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(version, about = "Real-time text correction and translation assistant")]
struct Args {
    /// Profile to load
    #[arg(short, long, default_value = "main")]
    profile: String,

    /// Create a new profile cloned from main, then exit
    #[arg(long)]
    new_profile: Option<String>,

    /// Correct a single text and exit
    #[arg(long)]
    once: Option<String>,

    /// Probe the provider and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    if let Some(name) = args.new_profile {
        let path = profile::add_profile_from_default(&name)?;
        println!("created profile at {}", path.display());
        return Ok(());
    }

    profile::init_user_config()?;
    let mut config = profile::load_user_profile(&args.profile)?;
    config.apply_env();

    let model = build_model(&config)?;
    tracing::info!("using provider {}", model.metadata().name);

    if args.check {
        model.check().await?;
        println!("provider reachable");
        return Ok(());
    }

    if let Some(text) = args.once {
        return run_once(&config, model, &text).await;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(model);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task exited"),
                Some(Ok(Err(e))) => tracing::error!("task failed: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    tracing::info!("corrections: {}", state.status.summary());
    Ok(())
}

fn build_model(config: &Config) -> anyhow::Result<Arc<dyn CorrectionModel>> {
    let provider = &config.provider;
    let model = GeminiCorrector::new(
        provider.api_key.clone(),
        provider.api_url.clone(),
        SamplingParams {
            temperature: provider.temperature,
            top_p: provider.top_p,
            top_k: provider.top_k,
        },
        provider.timeout_secs.map(Duration::from_secs),
    )?;

    Ok(Arc::new(model))
}

/// Single correction, printed to stdout. Used by `--once`.
async fn run_once(config: &Config, model: Arc<dyn CorrectionModel>, text: &str) -> anyhow::Result<()> {
    let corrector = Corrector::new(
        model,
        Duration::from_millis(config.corrector.quiet_ms),
        events::thresholds_from(&config.corrector),
    );

    match corrector.submit(text).await {
        Outcome::Done(result) | Outcome::Degraded(result) => {
            println!("{}", result.corrected_text);
            if result.is_translated {
                println!("[translated to English]");
            }
            if !result.untranslatable_words.is_empty() {
                println!("unsure about: {}", result.untranslatable_words.join(", "));
            }
        }
        Outcome::Superseded => {}
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if atty::is(atty::Stream::Stderr) {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

use std::sync::Arc;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use promptsmith::llm::config::{DEFAULT_API_URL, DEFAULT_MODEL};
use promptsmith::server::{self, AppState, ServerConfig};
use promptsmith::{ChatCompletionsClient, LLMConfig, PromptPipeline};

/// Analyze a prompt, recommend a model for it and rewrite it with more detail
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OpenAI-compatible API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    llm_url: String,

    /// API key sent as a bearer token
    #[arg(long, global = true, env = "GOOGLE_API_KEY", hide_env_values = true)]
    llm_key: Option<String>,

    /// Model used for analysis and enhancement
    #[arg(long, global = true, default_value = DEFAULT_MODEL)]
    llm_model: String,

    /// Sampling temperature
    #[arg(long, global = true, default_value_t = 0.4)]
    temperature: f64,

    /// Request timeout for LLM calls, in seconds
    #[arg(long, global = true, default_value_t = 120)]
    llm_timeout: u64,

    /// Log level (debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one prompt through analysis, model selection and enhancement, printing JSON
    Run {
        /// The prompt to process
        prompt: String,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = server::config::DEFAULT_HOST)]
        host: String,

        #[arg(long, default_value_t = server::config::DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level)?;

    let llm_config = setup_llm_config(&args)?;
    let client = ChatCompletionsClient::new(llm_config).context("Failed to create LLM client")?;
    let pipeline = PromptPipeline::new(Arc::new(client));

    match args.command {
        Command::Run { prompt } => run_prompt(&pipeline, &prompt).await,
        Command::Serve { host, port } => {
            let config = ServerConfig::new(host, port);
            server::serve(&config, AppState::new(pipeline)).await
        }
    }
}

fn setup_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_names(false)
        .with_ansi(true)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .with_level(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

fn setup_llm_config(args: &Args) -> Result<LLMConfig> {
    let config = LLMConfig::new(
        args.llm_url.clone(),
        args.llm_key.clone(),
        args.llm_model.clone(),
    )
    .with_temperature(args.temperature)
    .with_timeout_secs(args.llm_timeout);

    config.validate().map_err(anyhow::Error::msg).context("Invalid LLM config")?;

    if config.api_key.is_none() {
        warn!("No LLM API key set (--llm-key or GOOGLE_API_KEY); requests go out unauthenticated");
    }
    info!("Using model {} at {}", config.model_type, config.api_url);

    Ok(config)
}

async fn run_prompt(pipeline: &PromptPipeline, prompt: &str) -> Result<()> {
    let report = pipeline.process(prompt).await;
    let output = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{}", output);
    Ok(())
}

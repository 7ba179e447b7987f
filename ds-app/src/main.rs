//! dschat: send one conversation to DeepSeek and print the reply.

mod config;

use clap::Parser;
use ds_llm::{ChatClient, ChatMessage};
use tracing_subscriber::EnvFilter;

const DEFAULT_SYSTEM: &str =
    "You are a helpful translator. Translate the user sentence to Spanish.";
const DEFAULT_MESSAGE: &str = "I love programming.";

#[derive(Debug, Parser)]
#[command(name = "dschat", version, about = "Single-turn DeepSeek chat completion")]
struct Cli {
    /// System instruction sent as the first message.
    #[arg(long, default_value = DEFAULT_SYSTEM)]
    system: String,

    /// User message to complete.
    #[arg(default_value = DEFAULT_MESSAGE)]
    message: String,

    /// Model identifier; overrides DEEPSEEK_MODEL.
    #[arg(long)]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = config::Config::from_env()?;
    let model = cli.model.as_deref().unwrap_or(&config.model);

    let client = ChatClient::new(&config.api_key, model)?;
    let messages = [
        ChatMessage::system(cli.system),
        ChatMessage::user(cli.message),
    ];

    let result = client.complete(&messages)?;
    if let Some(usage) = &result.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "completion usage"
        );
    }
    println!("{}", result.text());

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dschat=info,ds_llm=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}

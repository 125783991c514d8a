//! A simple program demonstrating one tool-calling round trip against
//! an OpenAI-compatible endpoint.

#[macro_use]
extern crate tracing;

use std::env;
use std::process::ExitCode;

use calc_agent::OrchestratorBuilder;
use calc_agent::tools::CalculatorTool;
use calc_agent_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use owo_colors::OwoColorize;

const DEMO_PROMPTS: [&str; 2] = [
    "Hi, I need to calculate what is 42 multiplied by 19.5?",
    "Hi, how are you?",
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // The credential may also live in a local untracked `.env` file.
    dotenvy::dotenv().ok();

    let Ok(api_key) = env::var("OPENAI_API_KEY") else {
        println!("Cannot construct the API client.");
        println!("Make sure the OPENAI_API_KEY environment variable is set.");
        return ExitCode::from(1);
    };

    let mut config = OpenAIConfigBuilder::with_api_key(api_key);
    if let Ok(model) = env::var("OPENAI_MODEL") {
        config = config.with_model(model);
    }
    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        config = config.with_base_url(base_url);
    }
    let provider = OpenAIProvider::new(config.build());

    let orchestrator = OrchestratorBuilder::with_model_provider(provider)
        .with_tool(CalculatorTool::new())
        .build();

    for prompt in DEMO_PROMPTS {
        println!("{} {prompt}", "User:".bright_cyan());
        match orchestrator.run(prompt).await {
            Ok(outcome) => {
                println!(
                    "{} {}",
                    "Assistant:".bright_green(),
                    outcome.answer.bright_white()
                );
            }
            Err(err) => {
                error!("conversation run failed: {err}");
                println!("The conversation run failed: {err}");
            }
        }
        println!();
    }

    ExitCode::SUCCESS
}

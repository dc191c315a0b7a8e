use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ytsum_client::{ApiError, SummarizerClient};
use ytsum_core::present::{extract_video_id, LengthPercent, LengthSlider, SubmittedUrl, UrlInput};
use ytsum_core::QaConversation;

mod history;
mod render;

use history::HistoryCommands;

#[derive(Debug, Parser)]
#[command(name = "ytsum-cli")]
#[command(about = "Summarize YouTube videos and review their rhetoric")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize a video
    Summarize {
        /// Video URL
        url: String,
        /// Summary length as a percentage of the transcript (10-50, step 5)
        #[arg(long, value_parser = parse_length)]
        length: Option<LengthPercent>,
        /// Also run the fallacy analysis
        #[arg(long)]
        fallacies: bool,
    },
    /// Analyze a video for rhetorical fallacies
    Fallacies {
        /// Video URL
        url: String,
    },
    /// Browse and manage saved videos
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Ask a follow-up question about a saved video
    Ask {
        /// Video id or URL
        video: String,
        question: String,
    },
}

/// Parses `--length` the way the slider interprets raw input.
fn parse_length(raw: &str) -> Result<LengthPercent, String> {
    LengthSlider::default()
        .on_input(raw)
        .ok_or_else(|| format!("expected a whole number, got \"{raw}\""))
}

/// Passes `raw` through the URL input gate.
fn gate_url(raw: &str) -> anyhow::Result<SubmittedUrl> {
    let mut input = UrlInput::new();
    input.set_value(raw);
    input
        .submit()
        .ok_or_else(|| anyhow::anyhow!("a video URL is required"))
}

/// Accepts either a bare video id or any recognised YouTube URL.
fn resolve_video_id(raw: &str) -> String {
    let trimmed = raw.trim();
    extract_video_id(trimmed).unwrap_or_else(|_| trimmed.to_string())
}

async fn run_summarize(
    client: &SummarizerClient,
    url: &SubmittedUrl,
    length: Option<LengthPercent>,
    with_fallacies: bool,
) -> anyhow::Result<()> {
    let slider = LengthSlider::new(length.unwrap_or_default(), false);
    tracing::info!(url = %url, length = %slider.value_label(), "summarizing");

    if !with_fallacies {
        let result = client.summarize(url, length).await?;
        println!("{}\n\n{}", slider.caption(), render::summary(&result));
        return Ok(());
    }

    let (summary, analysis) = tokio::join!(
        client.summarize(url, length),
        client.analyze_fallacies(url)
    );
    // Print whichever half succeeded before reporting the first failure.
    if let Ok(result) = &summary {
        println!("{}\n\n{}", slider.caption(), render::summary(result));
    }
    if let Ok(result) = &analysis {
        println!("\n{}", render::fallacies(result));
    }
    summary?;
    analysis?;
    Ok(())
}

async fn run_ask(client: &SummarizerClient, video: &str, question: &str) -> anyhow::Result<()> {
    let video_id = resolve_video_id(video);
    let record = client.fetch_history_item(&video_id).await?;

    let mut conversation = QaConversation::from_history(record.qa_history.clone());
    let request = conversation.request(&record.transcript, question, Some(&record.video_id));
    let answer = client.ask_question(&request).await?;
    conversation.record(question, &answer);

    tracing::debug!(turns = conversation.messages().len(), "question answered");
    println!("{answer}");
    Ok(())
}

async fn run(
    client: &SummarizerClient,
    history_limit: u32,
    command: Commands,
) -> anyhow::Result<()> {
    match command {
        Commands::Summarize {
            url,
            length,
            fallacies,
        } => run_summarize(client, &gate_url(&url)?, length, fallacies).await,
        Commands::Fallacies { url } => {
            let result = client.analyze_fallacies(&gate_url(&url)?).await?;
            println!("{}", render::fallacies(&result));
            Ok(())
        }
        Commands::History { command } => {
            history::run_history(client, history_limit, &command).await
        }
        Commands::Ask { video, question } => run_ask(client, &video, &question).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ytsum_core::load_client_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = SummarizerClient::new(&config)?;
    tracing::debug!(base_url = %client.base_url(), "client ready");

    if let Err(error) = run(&client, config.history_limit, cli.command).await {
        if let Some(api_error) = error.downcast_ref::<ApiError>() {
            eprintln!("{}", render::api_error(api_error));
            std::process::exit(1);
        }
        return Err(error);
    }
    Ok(())
}

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use meetscribe::audio::{AudioBuffer, encode_chunk};
use meetscribe::chunk;
use meetscribe::cli::{Cli, Commands};
use meetscribe::config::Config;
use meetscribe::diagnostics;
use meetscribe::llm::ChatClient;
use meetscribe::output::{self, ProgressReporter};
use meetscribe::pipeline::{FileSink, SequentialDriver, StdoutSink, TranscriptReport, TranscriptSink};
use meetscribe::stt::RemoteTranscriber;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            let Some(audio) = cli.audio.clone() else {
                Cli::command().print_help()?;
                return Ok(());
            };
            let config = load_config(&cli)?;
            run_transcribe(&config, &audio, cli.output.as_deref(), cli.quiet).await?;
        }
        Some(Commands::Summarize {
            audio,
            transcript,
            output,
        }) => {
            let config = load_config(&cli)?;
            let text =
                resolve_transcript(&config, audio.as_deref(), transcript.as_deref(), cli.quiet)
                    .await?;
            let chat = chat_client(&config)?;
            let summary = chat.summarize(&text).await?;
            emit_text(&summary, output.as_deref())?;
        }
        Some(Commands::Ask {
            question,
            audio,
            transcript,
        }) => {
            let config = load_config(&cli)?;
            let text =
                resolve_transcript(&config, audio.as_deref(), transcript.as_deref(), cli.quiet)
                    .await?;
            let chat = chat_client(&config)?;
            let answer = chat.ask(&text, question).await?;
            emit_text(&answer, None)?;
        }
        Some(Commands::Check) => {
            let config = load_config(&cli)?;
            let report = diagnostics::check_capabilities(&config);
            if !report.all_available() {
                std::process::exit(1);
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                *shell,
                &mut Cli::command(),
                "meetscribe",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

/// Load config from --config or the default path, apply env overrides,
/// then CLI flag overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&Config::default_path())?,
    };
    let mut config = config.with_env_overrides();

    if let Some(model) = &cli.model {
        config.api.transcription_model = model.clone();
    }
    if let Some(mb) = cli.max_chunk_mb {
        config.chunking.max_chunk_mb = mb;
    }

    Ok(config)
}

/// Run the full pipeline on one recording: load → plan → encode → drive.
async fn transcribe_file(config: &Config, audio: &Path, quiet: bool) -> Result<TranscriptReport> {
    diagnostics::ensure_ready(config)?;
    let api_key = Config::resolve_api_key()?;

    let buffer = AudioBuffer::from_path(audio)?;
    let plan = chunk::plan(
        buffer.duration_ms(),
        buffer.source_bytes(),
        config.max_chunk_bytes(),
    );
    output::announce_plan(plan.part_count(), quiet);

    let chunks = plan
        .ranges()
        .iter()
        .enumerate()
        .map(|(i, &range)| encode_chunk(&buffer, range, i))
        .collect::<meetscribe::Result<Vec<_>>>()?;

    let transcriber = RemoteTranscriber::new(
        &config.api.base_url,
        &config.api.transcription_model,
        &api_key,
    );
    let mut driver = SequentialDriver::new(transcriber);
    if let Some(delay) = config.pacing() {
        driver = driver.with_pacing(delay);
    }

    let mut reporter = ProgressReporter::new(chunks.len(), quiet);
    let report = driver.transcribe_all(chunks, &mut reporter).await;
    output::render_report_summary(&report, quiet);

    Ok(report)
}

async fn run_transcribe(
    config: &Config,
    audio: &Path,
    output_path: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let report = transcribe_file(config, audio, quiet).await?;

    let mut sink: Box<dyn TranscriptSink> = match output_path {
        Some(path) => Box::new(FileSink::new(path.to_path_buf())),
        None => Box::new(StdoutSink),
    };
    sink.write(&report)?;

    Ok(())
}

/// Obtain transcript text for summarize/ask: read a saved transcript, or
/// transcribe the given audio first.
async fn resolve_transcript(
    config: &Config,
    audio: Option<&Path>,
    transcript: Option<&Path>,
    quiet: bool,
) -> Result<String> {
    match (transcript, audio) {
        (Some(path), _) => Ok(fs::read_to_string(path)?),
        (None, Some(audio)) => Ok(transcribe_file(config, audio, quiet).await?.text),
        // clap enforces one of the two; this is a backstop
        (None, None) => bail!("provide an audio file or --transcript"),
    }
}

fn chat_client(config: &Config) -> Result<ChatClient> {
    config.validate()?;
    let api_key = Config::resolve_api_key()?;
    Ok(ChatClient::new(
        &config.api.base_url,
        &config.api.chat_model,
        &api_key,
    ))
}

fn emit_text(text: &str, output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

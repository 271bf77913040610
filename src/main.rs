//! beepie - note strings to frequency/pause pairs for buzzers.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use beepie::error::BeepError;
use beepie::output::{Destination, sanitize_filename};
use beepie::preview::{self, PreviewOptions};
use beepie::render::render_named;
use beepie::{NoteSequence, WaveformType};

/// Converts note strings like "^A B-C  D#" into (frequency, pause) pairs.
///
/// Letters A-G are notes. A caret before or a hash after a letter makes it
/// sharp. A dash right after a letter removes its pause, and every space
/// before the next letter adds 0.05 s to it.
///
/// Run without NOTES to be prompted for the notes, the format and the file.
#[derive(Parser)]
#[command(name = "beepie")]
#[command(about = "Note strings to frequency/pause pairs")]
#[command(version)]
struct Cli {
    /// Note string to convert
    notes: Option<String>,

    /// Output format: text, json, csv or source
    #[arg(short = 'f', long)]
    format: Option<String>,

    /// Write to this file instead of stdout (name is sanitized)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Also write a WAV preview to this file
    #[arg(long)]
    wav: Option<String>,

    /// Preview waveform: sine, square, triangle, sawtooth or noise
    #[arg(long, default_value = "square")]
    waveform: String,

    /// Seconds each tone sounds in the preview
    #[arg(long, default_value_t = 0.2)]
    tone_length: f32,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let interactive = cli.notes.is_none();
    let notes = match &cli.notes {
        Some(notes) => notes.clone(),
        None => prompt("Insert notes: ")?,
    };

    let format = match &cli.format {
        Some(format) => format.clone(),
        None if interactive => {
            let answer = prompt("Output format [text/json/csv/source] (text): ")?;
            if answer.trim().is_empty() { "text".to_string() } else { answer }
        }
        None => "text".to_string(),
    };

    let destination = match &cli.output {
        Some(name) => Destination::File(PathBuf::from(sanitize_filename(name))),
        None if interactive => Destination::from_user_input(&prompt("Save to file (empty prints here): ")?),
        None => Destination::Console,
    };
    debug!(?destination, format = %format, "output selected");

    let sequence = NoteSequence::parse(&notes);
    if sequence.is_empty() {
        warn!("no notes found in input (only uppercase A-G are recognized)");
    }
    debug!(notes = sequence.len(), total_pause = sequence.total_pause(), "parsed");
    let events = sequence.events();

    match render_named(events, &format) {
        Ok(rendered) => destination.write(&rendered)?,
        Err(e @ BeepError::UnknownFormat(_)) => {
            error!("{}", e);
            eprintln!("{}", e);
        }
        Err(e) => return Err(e.into()),
    }

    if let Some(wav) = &cli.wav {
        let waveform: WaveformType = cli.waveform.parse()?;
        let options = PreviewOptions::default()
            .with_waveform(waveform)
            .with_tone_length(cli.tone_length);
        let path = PathBuf::from(sanitize_filename(wav));
        preview::render_wav(events, &options, &path)
            .with_context(|| format!("writing preview to {}", path.display()))?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Prints `message` and reads one line from stdin, without the line ending.
/// End of input reads as an empty line.
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

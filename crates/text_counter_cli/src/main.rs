use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use text_counter::config::EnvConfig;
use text_counter::logging;
use text_counter_cli::app::{App, Outcome};

#[derive(Parser)]
#[command(name = "text-counter")]
#[command(about = "Count graphemes, weighted width, lines, and UTF-8/Shift_JIS bytes", long_about = None)]
#[command(version)]
struct Cli {
    /// File to measure (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Graphemes per line for the wrapped line count [env: TEXT_COUNTER_WRAP_WIDTH]
    #[arg(short, long)]
    wrap_width: Option<String>,

    /// Encoding measured for byte length; repeat for several [env: TEXT_COUNTER_ENCODINGS]
    #[arg(short, long = "encoding")]
    encodings: Vec<String>,

    /// Print the metrics as JSON instead of the readout
    #[arg(long)]
    json: bool,

    /// Only print the readout panel
    #[arg(long, conflicts_with = "json")]
    readouts_only: bool,

    /// Total output width in columns
    #[arg(long, default_value = "100")]
    width: usize,

    /// Monospace display preference (tabs expand to fixed columns)
    #[arg(long)]
    mono: bool,

    /// Count code points instead of grapheme clusters
    #[arg(long)]
    code_points: bool,

    /// Read stdin line by line and re-render after every change
    #[arg(short, long, conflicts_with_all = ["file", "json"])]
    interactive: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = EnvConfig::from_env();
    if let Err(err) = logging::init(&config) {
        eprintln!("text-counter: {err}; logging to stderr");
    }

    let mut app = App::new(&config);
    app.apply_overrides(cli.wrap_width, cli.encodings);
    if cli.code_points {
        app.use_code_points();
    }
    app.options.width = cli.width;
    app.options.mono = cli.mono;
    app.options.readouts_only = cli.readouts_only;

    if cli.interactive {
        return run_interactive(&mut app);
    }

    let text = match cli.file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    app.set_text(text);
    tracing::debug!(bytes = app.text.len(), "measuring input");

    let mut stdout = io::stdout().lock();
    if cli.json {
        let metrics = app.metrics();
        serde_json::to_writer_pretty(&mut stdout, &metrics).context("failed to encode JSON")?;
        writeln!(stdout)?;
    } else {
        print_lines(&mut stdout, &app.render())?;
    }
    Ok(())
}

fn run_interactive(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    print_lines(&mut stdout, &app.render())?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match app.on_input(&line) {
            Outcome::Render(lines) => print_lines(&mut stdout, &lines)?,
            Outcome::Message(message) => writeln!(stdout, "{message}")?,
            Outcome::Quit => break,
        }
    }
    Ok(())
}

fn print_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}

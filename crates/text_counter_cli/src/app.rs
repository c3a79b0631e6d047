//! Presentation state. The app owns every mutable input and re-measures on each change.

use text_counter::config::EnvConfig;
use text_counter::report::render_metrics;
use text_counter::{
    CodePointSegmenter, MeasureRequest, Measurer, ReportOptions, TextMetrics,
};

use crate::commands::{parse_slash_command, SlashCommand, HELP_TEXT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The inputs changed or a redraw was requested; print `lines`.
    Render(Vec<String>),
    /// Informational text for the user.
    Message(String),
    Quit,
}

pub struct App {
    measurer: Measurer,
    pub text: String,
    pub wrap_width: String,
    pub encodings: Vec<String>,
    pub options: ReportOptions,
}

impl App {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            measurer: Measurer::default(),
            text: String::new(),
            wrap_width: config.wrap_width.clone(),
            encodings: config.encodings.clone(),
            options: ReportOptions::default(),
        }
    }

    /// Command-line values take precedence over the environment. An empty encoding list keeps
    /// the configured encodings.
    pub fn apply_overrides(&mut self, wrap_width: Option<String>, encodings: Vec<String>) {
        if let Some(wrap_width) = wrap_width {
            self.wrap_width = wrap_width;
        }
        if !encodings.is_empty() {
            self.encodings = encodings;
        }
    }

    /// Counts code points instead of grapheme clusters.
    pub fn use_code_points(&mut self) {
        self.measurer = Measurer::default().with_segmenter(Box::new(CodePointSegmenter));
    }

    pub fn metrics(&self) -> TextMetrics {
        let encodings: Vec<&str> = self.encodings.iter().map(String::as_str).collect();
        let request = MeasureRequest::new(&self.text)
            .with_wrap_width(&self.wrap_width)
            .with_encodings(&encodings);
        self.measurer.measure(&request)
    }

    pub fn render(&self) -> Vec<String> {
        let metrics = self.metrics();
        render_metrics(&self.measurer, &self.text, &metrics, self.options)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn append_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// Handles one line of interactive input.
    pub fn on_input(&mut self, line: &str) -> Outcome {
        let Some(command) = parse_slash_command(line) else {
            self.append_line(line);
            return Outcome::Render(self.render());
        };

        match command {
            SlashCommand::Help => Outcome::Message(HELP_TEXT.to_string()),
            SlashCommand::Clear => {
                self.text.clear();
                Outcome::Render(self.render())
            }
            SlashCommand::Show => Outcome::Render(self.render()),
            SlashCommand::Quit => Outcome::Quit,
            SlashCommand::Mono => {
                self.options.mono = !self.options.mono;
                Outcome::Render(self.render())
            }
            SlashCommand::Wrap(value) => {
                self.wrap_width = value;
                Outcome::Render(self.render())
            }
            SlashCommand::Encodings(names) if names.is_empty() => {
                Outcome::Message("usage: /encoding <name>[,<name>...]".to_string())
            }
            SlashCommand::Encodings(names) => {
                self.encodings = names;
                Outcome::Render(self.render())
            }
            SlashCommand::Unknown(command) => {
                Outcome::Message(format!("unknown command {command}; try /help"))
            }
        }
    }
}

use crate::sink::AlertSink;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Logs alerts; optionally echoes them to stderr for interactive use.
#[derive(Debug, Clone, Default)]
pub struct TracingAlert {
    echo_stderr: bool,
}

impl TracingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stderr(mut self) -> Self {
        self.echo_stderr = true;
        self
    }
}

impl AlertSink for TracingAlert {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Info => tracing::info!(title, "{message}"),
            Severity::Warning => tracing::warn!(title, "{message}"),
            Severity::Error => tracing::error!(title, "{message}"),
        }

        if self.echo_stderr {
            let label = match severity {
                Severity::Info => "info".blue().to_string(),
                Severity::Warning => "warning".yellow().to_string(),
                Severity::Error => "error".red().to_string(),
            };
            eprintln!("{label}: {title}");
            eprintln!("  {message}");
        }
    }
}

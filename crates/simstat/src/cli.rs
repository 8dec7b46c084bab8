//! Command-line argument surface.

use std::path::PathBuf;

use clap::Parser;
use simstat_render::DEFAULT_WIDTH;

/// Simulation statistics viewer.
#[derive(Debug, Parser)]
#[command(
    name = "simstat",
    version,
    about = "Render a simulator statistics JSON file as a terminal table"
)]
pub struct Cli {
    /// Path to the statistics JSON file
    pub file: PathBuf,

    /// Total table width in columns (defaults to the terminal width,
    /// capped at 80)
    #[arg(long, value_parser = validate_width)]
    pub width: Option<usize>,
}

/// Reject widths that cannot hold even the table frame.
fn validate_width(s: &str) -> Result<usize, String> {
    let width: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if width < 5 {
        return Err("--width must be at least 5 columns".to_string());
    }
    Ok(width)
}

/// Current terminal width, or `None` if not attached to a terminal.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

impl Cli {
    /// Total table width: the explicit override wins; otherwise the terminal
    /// width, falling back to the default when unavailable and capped at the
    /// default maximum.
    pub fn table_width(&self) -> usize {
        match self.width {
            Some(width) => width,
            None => terminal_width().unwrap_or(DEFAULT_WIDTH).min(DEFAULT_WIDTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_argument() {
        let cli = Cli::parse_from(["simstat", "stats.json"]);
        assert_eq!(cli.file, PathBuf::from("stats.json"));
        assert_eq!(cli.width, None);
    }

    #[test]
    fn parses_width_override() {
        let cli = Cli::parse_from(["simstat", "stats.json", "--width", "120"]);
        assert_eq!(cli.width, Some(120));
        assert_eq!(cli.table_width(), 120);
    }

    #[test]
    fn rejects_unusable_width() {
        assert!(Cli::try_parse_from(["simstat", "s.json", "--width", "3"]).is_err());
        assert!(Cli::try_parse_from(["simstat", "s.json", "--width", "abc"]).is_err());
    }

    #[test]
    fn requires_file_argument() {
        assert!(Cli::try_parse_from(["simstat"]).is_err());
    }
}

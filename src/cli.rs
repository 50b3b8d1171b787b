//! Command-line interface for the `mancala` binary.

use clap::Parser;

/// Two-player Kalah on the terminal
#[derive(Parser, Debug)]
#[command(name = "mancala")]
#[command(about = "Play Kalah-style Mancala on the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Play a scripted game from comma-separated house numbers instead of
    /// reading stdin (e.g. `--moves 4,1,8`)
    #[arg(long, value_delimiter = ',')]
    pub moves: Option<Vec<usize>>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// The scripted moves as console input, one house number per line.
    pub fn script(&self) -> Option<String> {
        self.moves.as_ref().map(|moves| {
            moves
                .iter()
                .map(|m| format!("{}\n", m))
                .collect::<String>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        let cli = Cli::parse_from(["mancala", "--moves", "4,1,8"]);
        assert_eq!(cli.moves, Some(vec![4, 1, 8]));
        assert_eq!(cli.script().as_deref(), Some("4\n1\n8\n"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mancala"]);
        assert!(cli.moves.is_none());
        assert!(cli.script().is_none());
        assert_eq!(cli.log_level, "warn");
    }
}

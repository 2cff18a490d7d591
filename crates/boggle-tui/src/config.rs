use clap::Parser;

/// Route of the solve view in the Boggle web application
pub const DEFAULT_SOLVE_URL: &str = "http://127.0.0.1:8000/boggle/solve";

/// Command line options
#[derive(Debug, Clone, Parser)]
#[command(name = "boggle", version, about = "Edit a Boggle board and find its words")]
pub struct Args {
    /// URL of the solve service
    #[arg(long, env = "BOGGLE_SOLVE_URL", default_value = DEFAULT_SOLVE_URL)]
    pub solve_url: String,

    /// Starting board as 16 letters, row by row ('-' for an empty cell)
    #[arg(long)]
    pub board: Option<String>,

    /// Seed for the letter randomizer
    #[arg(long)]
    pub seed: Option<u64>,

    /// Solve the board once, print the result and exit
    #[arg(long)]
    pub once: bool,

    /// With --once, print the results panel as JSON
    #[arg(long, requires = "once")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["boggle"]).unwrap();
        assert_eq!(args.board, None);
        assert_eq!(args.seed, None);
        assert!(!args.once);
        assert!(!args.json);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "boggle",
            "--solve-url",
            "http://localhost:9000/solve",
            "--board",
            "ABCDEFGHIJKLMNOP",
            "--seed",
            "7",
            "--once",
            "--json",
        ])
        .unwrap();
        assert_eq!(args.solve_url, "http://localhost:9000/solve");
        assert_eq!(args.board.as_deref(), Some("ABCDEFGHIJKLMNOP"));
        assert_eq!(args.seed, Some(7));
        assert!(args.once && args.json);
    }

    #[test]
    fn test_json_requires_once() {
        assert!(Args::try_parse_from(["boggle", "--json"]).is_err());
    }
}

use clap::Parser;
use std::path::PathBuf;

/// Vocabulary Trainer CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the tab-separated vocabulary file
    #[arg(short = 'i', long = "input")]
    pub data_path: Option<String>,

    /// Launch the full-screen flashcard review instead of the menu
    #[arg(long)]
    pub review: bool,

    /// Restrict the flashcard review to one folder
    #[arg(long)]
    pub folder: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Where the word library lives: the `--input` override if given, else a
/// per-user data directory, else the working directory.
#[must_use]
pub fn resolve_data_path(cli: &Cli) -> PathBuf {
    if let Some(path) = &cli.data_path {
        return PathBuf::from(path);
    }
    match dirs::data_dir() {
        Some(dir) => dir.join("vocab-trainer").join("english_word.txt"),
        None => PathBuf::from("english_word.txt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_input_path_wins() {
        let cli = Cli {
            data_path: Some("/tmp/words.txt".to_string()),
            review: false,
            folder: None,
        };
        assert_eq!(resolve_data_path(&cli), PathBuf::from("/tmp/words.txt"));
    }

    #[test]
    fn test_default_path_ends_with_data_file_name() {
        let cli = Cli {
            data_path: None,
            review: false,
            folder: None,
        };
        let path = resolve_data_path(&cli);
        assert_eq!(path.file_name().unwrap(), "english_word.txt");
    }
}

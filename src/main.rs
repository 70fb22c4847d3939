use chrono::Utc;
use std::fs;
use std::io;

use vocab_trainer::cli::{parse_cli, resolve_data_path};
use vocab_trainer::store::{LoadOutcome, WordStore};
use vocab_trainer::{menu, shuffle, tui};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let path = resolve_data_path(&cli);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(e) = fs::create_dir_all(parent)
    {
        eprintln!("Failed to prepare '{}': {e}", parent.display());
        return;
    }

    let mut store = WordStore::new(&path);
    match store.load() {
        Ok(LoadOutcome::Loaded { words, folders }) => {
            println!("Loaded {words} words across {folders} folders.");
        }
        Ok(LoadOutcome::Missing) => {
            println!("No vocabulary file at '{}'. Starting fresh.", path.display());
        }
        Err(e) => {
            eprintln!("Failed to load vocabulary from '{}': {e}", path.display());
            return;
        }
    }

    // One time-based seed per process; everything downstream derives
    // its shuffle order from it.
    let seed = Utc::now().timestamp_millis() as u64;

    if cli.review {
        let scope = cli.folder.as_deref().map(str::to_ascii_lowercase);
        let indices = store.collect_by_folder(scope.as_deref());
        if indices.is_empty() {
            println!("No words to review.");
            return;
        }
        let order: Vec<usize> = shuffle::permute(indices.len(), seed)
            .into_iter()
            .map(|p| indices[p])
            .collect();
        if let Err(e) = tui::run_flashcards(&store, &order) {
            eprintln!("Flashcard review failed: {e}");
        }
        return;
    }

    let stdin = io::stdin();
    menu::run_menu(&mut store, stdin.lock(), seed);
}

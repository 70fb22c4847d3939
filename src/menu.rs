//! Interactive menu loop over standard input.
//!
//! All user text is sanitized here before it reaches the store: prompts
//! trim surrounding whitespace and reject field text containing the tab
//! separator used by the persisted format. The loop is generic over
//! `BufRead` so tests can drive it with a `Cursor`.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::io::BufRead;

use crate::error::VocabError;
use crate::ledger;
use crate::quiz::QuizSession;
use crate::shuffle;
use crate::store::WordStore;

enum FolderChoice {
    All,
    Folder(String),
    Back,
}

/// Run the numbered main menu until the user quits or input ends.
///
/// `seed` feeds the process-wide source of shuffle seeds, so a fixed
/// value makes every quiz order reproducible.
pub fn run_menu<R: BufRead>(store: &mut WordStore, mut reader: R, seed: u64) {
    let mut seeds = SmallRng::seed_from_u64(seed);

    loop {
        println!("\n===== Vocabulary Trainer =====");
        println!("1. Add words");
        println!("2. Flashcard review");
        println!("3. Take a quiz");
        println!("4. Error ledger");
        println!("5. Search words");
        println!("6. Delete a word");
        println!("7. Statistics");
        println!("8. Quit");
        println!("Choose 1-8:");

        let Some(choice) = read_line_trimmed(&mut reader) else {
            // End of input behaves like a graceful quit.
            persist_or_report(store);
            break;
        };

        match choice.as_str() {
            "1" => add_words(store, &mut reader),
            "2" => flashcard_review(store, &mut reader, seeds.next_u64()),
            "3" => take_quiz(store, &mut reader, seeds.next_u64()),
            "4" => error_ledger(store, &mut reader, seeds.next_u64()),
            "5" => search_words(store, &mut reader),
            "6" => delete_word(store, &mut reader),
            "7" => show_statistics(store),
            "8" => {
                persist_or_report(store);
                println!("Bye! Keep reviewing!");
                break;
            }
            _ => println!("[Error] Please enter a number from 1 to 8."),
        }
    }
}

/// Read one line, trimmed. `None` means end of input or a read failure.
fn read_line_trimmed<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            log::warn!("input read failed: {e}");
            None
        }
    }
}

fn persist_or_report(store: &WordStore) {
    // A failed save is reported but never kills the session; the
    // in-memory state stays intact for another try.
    if let Err(e) = store.persist() {
        println!("[Error] Failed to save '{}': {e}", store.path().display());
    }
}

fn choose_folder<R: BufRead>(store: &WordStore, reader: &mut R) -> FolderChoice {
    if store.is_empty() {
        println!("[Error] No words yet. Add some first.");
        return FolderChoice::Back;
    }

    loop {
        println!("\nChoose a folder:");
        for (i, folder) in store.folders().iter().enumerate() {
            println!("{}. {folder}", i + 1);
        }
        println!("99. All words");
        println!("0. Back");

        let Some(input) = read_line_trimmed(reader) else {
            return FolderChoice::Back;
        };
        match input.parse::<usize>() {
            Ok(0) => return FolderChoice::Back,
            Ok(99) => return FolderChoice::All,
            Ok(n) if (1..=store.folders().len()).contains(&n) => {
                return FolderChoice::Folder(store.folders()[n - 1].clone());
            }
            _ => println!("[Error] Invalid choice, try again."),
        }
    }
}

fn add_words<R: BufRead>(store: &mut WordStore, reader: &mut R) {
    println!("\n===== Add Words =====");
    println!("Changes are saved automatically.\n");

    let folder = loop {
        println!("Folder name:");
        match read_line_trimmed(reader) {
            None => return,
            Some(name) if name.is_empty() => println!("[Error] Folder name cannot be empty."),
            Some(name) if name.contains('\t') => {
                println!("[Error] Folder names cannot contain tabs.");
            }
            Some(name) => break name,
        }
    };

    println!("Enter: [english][Tab][chinese]  ('end' to stop)");
    loop {
        println!(">");
        let Some(line) = read_line_trimmed(reader) else {
            return;
        };
        if line.eq_ignore_ascii_case("end") {
            println!("Done adding words.");
            return;
        }

        // A tab is the preferred separator; fall back to the first run of
        // spaces so plain keyboards work too.
        let split = line
            .split_once('\t')
            .or_else(|| line.split_once(char::is_whitespace));
        let Some((english, chinese)) = split else {
            println!("[Error] Use the form: [english][Tab][chinese]");
            continue;
        };
        let (english, chinese) = (english.trim(), chinese.trim());
        if english.is_empty() || chinese.is_empty() {
            println!("[Error] Neither side can be empty.");
            continue;
        }
        if chinese.contains('\t') {
            println!("[Error] The meaning cannot contain tabs.");
            continue;
        }

        match store.add(&folder, english, chinese) {
            Ok(index) => {
                let entry = store.entry(index);
                println!(
                    "[Success] Added: {} - {} (folder: {})",
                    entry.english, entry.chinese, entry.folder
                );
                persist_or_report(store);
            }
            Err(e @ VocabError::Duplicate { .. }) => println!("[Warning] {e}"),
            Err(e) => {
                // Capacity errors end the flow; there is no room left.
                println!("[Error] {e}");
                return;
            }
        }
    }
}

fn flashcard_review<R: BufRead>(store: &WordStore, reader: &mut R, seed: u64) {
    println!("\n===== Flashcard Review =====");
    let scope = match choose_folder(store, reader) {
        FolderChoice::Back => return,
        FolderChoice::All => None,
        FolderChoice::Folder(name) => Some(name),
    };

    let indices = store.collect_by_folder(scope.as_deref());
    if indices.is_empty() {
        println!("No words to review.");
        return;
    }

    let total = indices.len();
    println!("\n{total} cards. Press Enter to reveal, 'q' to stop.");
    for (round, p) in shuffle::permute(total, seed).into_iter().enumerate() {
        let entry = store.entry(indices[p]);
        println!("\n[{}/{total}] English: {}", round + 1, entry.english);
        println!("Press Enter to reveal...");
        match read_line_trimmed(reader) {
            None => return,
            Some(input) if input.eq_ignore_ascii_case("q") => {
                println!("Leaving flashcard review.");
                return;
            }
            Some(_) => {}
        }
        println!("Chinese: {}", entry.chinese);
        if entry.error_count > 0 {
            println!("(missed {} times before)", entry.error_count);
        }
    }
}

fn take_quiz<R: BufRead>(store: &mut WordStore, reader: &mut R, seed: u64) {
    println!("\n===== Quiz =====");
    let scope = match choose_folder(store, reader) {
        FolderChoice::Back => return,
        FolderChoice::All => None,
        FolderChoice::Folder(name) => Some(name),
    };

    let indices = store.collect_by_folder(scope.as_deref());
    if indices.is_empty() {
        println!("No words to test.");
        return;
    }

    let order: Vec<usize> = shuffle::permute(indices.len(), seed)
        .into_iter()
        .map(|p| indices[p])
        .collect();
    match QuizSession::new(order) {
        Ok(session) => {
            run_session(store, reader, session);
            persist_or_report(store);
        }
        Err(e) => println!("[Error] {e}"),
    }
}

/// Drive a session round by round. Ending input abandons the session;
/// misses already recorded stay in the store either way.
fn run_session<R: BufRead>(store: &mut WordStore, reader: &mut R, mut session: QuizSession) {
    println!("\nStarting: {} questions.", session.total());

    while let Some(index) = session.current_index() {
        println!("\n{}. {}", session.position() + 1, store.entry(index).chinese);
        println!("Your answer:");
        let Some(answer) = read_line_trimmed(reader) else {
            println!("Quiz abandoned.");
            return;
        };

        match session.advance(store, &answer) {
            Ok(round) if round.correct => {
                println!("Correct! {}/{}", round.score, round.position);
            }
            Ok(round) => {
                let missed = store.entry(index).error_count;
                println!(
                    "Wrong, the answer is '{}' (missed {missed} times)",
                    round.expected
                );
                println!("{}/{}", round.score, round.position);
            }
            Err(e) => {
                println!("[Error] {e}");
                return;
            }
        }
    }

    let summary = session.summary();
    println!(
        "\nQuiz finished: {}/{} ({:.1}%)",
        summary.score,
        summary.total,
        summary.accuracy * 100.0
    );
    if summary.missed.is_empty() {
        println!("Perfect run!");
    } else {
        println!("Missed words:");
        for &index in &summary.missed {
            let entry = store.entry(index);
            println!("- {} ({})", entry.english, entry.chinese);
        }
    }
}

fn error_ledger<R: BufRead>(store: &mut WordStore, reader: &mut R, seed: u64) {
    let ranked = ledger::ranked_entries(store);
    if ranked.is_empty() {
        println!("\nNo misses recorded. Well done!");
        return;
    }

    println!("\n===== Error Ledger =====");
    println!("{:<6}{:<20}{:<25}{}", "Rank", "English", "Chinese", "Misses");
    for (rank, &index) in ranked.iter().enumerate() {
        let entry = store.entry(index);
        println!(
            "{:<6}{:<20}{:<25}{}",
            rank + 1,
            entry.english,
            entry.chinese,
            entry.error_count
        );
    }

    println!("\nRetest these words? (y/n)");
    match read_line_trimmed(reader) {
        Some(input) if input.eq_ignore_ascii_case("y") => match ledger::start_retest(store, seed) {
            Ok(session) => {
                run_session(store, reader, session);
                persist_or_report(store);
            }
            Err(e) => println!("[Error] {e}"),
        },
        _ => {}
    }
}

fn search_words<R: BufRead>(store: &WordStore, reader: &mut R) {
    println!("\n===== Search =====");
    loop {
        println!("Keyword, Chinese or English ('end' to stop):");
        let Some(keyword) = read_line_trimmed(reader) else {
            return;
        };
        if keyword.eq_ignore_ascii_case("end") {
            println!("Done searching.");
            return;
        }
        if keyword.is_empty() {
            continue;
        }

        let matches = store.search(&keyword);
        if matches.is_empty() {
            println!("No matches.");
            continue;
        }
        println!("Found {}:", matches.len());
        println!("{:<15}{:<20}{:<25}{}", "Folder", "English", "Chinese", "Misses");
        for index in matches {
            let entry = store.entry(index);
            println!(
                "{:<15}{:<20}{:<25}{}",
                entry.folder, entry.english, entry.chinese, entry.error_count
            );
        }
    }
}

fn delete_word<R: BufRead>(store: &mut WordStore, reader: &mut R) {
    println!("\n===== Delete a Word =====");
    println!("English word to delete ('end' to cancel):");
    let Some(word) = read_line_trimmed(reader) else {
        return;
    };
    if word.is_empty() || word.eq_ignore_ascii_case("end") {
        return;
    }

    let matches = store.find_by_english(&word);
    let index = match matches.len() {
        0 => {
            println!("[Error] {}", VocabError::NotFound(word));
            return;
        }
        1 => {
            let entry = store.entry(matches[0]);
            println!(
                "Delete {} - {} (folder: {})? (y/n)",
                entry.english, entry.chinese, entry.folder
            );
            match read_line_trimmed(reader) {
                Some(input) if input.eq_ignore_ascii_case("y") => matches[0],
                _ => {
                    println!("Kept.");
                    return;
                }
            }
        }
        _ => {
            println!("Several entries match:");
            for (i, &index) in matches.iter().enumerate() {
                let entry = store.entry(index);
                println!(
                    "{}. {} - {} (folder: {})",
                    i + 1,
                    entry.english,
                    entry.chinese,
                    entry.folder
                );
            }
            println!("Which one? (0 to cancel)");
            match read_line_trimmed(reader).and_then(|s| s.parse::<usize>().ok()) {
                Some(n) if (1..=matches.len()).contains(&n) => matches[n - 1],
                _ => {
                    println!("Kept.");
                    return;
                }
            }
        }
    };

    let removed = store.delete_by_index(index);
    persist_or_report(store);
    println!("[Success] Deleted: {} - {}", removed.english, removed.chinese);
}

fn show_statistics(store: &WordStore) {
    println!("\n===== Statistics =====");
    println!("Folders: {}", store.folders().len());
    println!("Words  : {}", store.len());
    let missed = store.entries().iter().filter(|e| e.error_count > 0).count();
    println!("Words with misses: {missed}");

    if !store.folders().is_empty() {
        println!("\nWords per folder:");
        for folder in store.folders() {
            let count = store
                .entries()
                .iter()
                .filter(|e| &e.folder == folder)
                .count();
            println!("  {folder}: {count}");
        }
    }
}

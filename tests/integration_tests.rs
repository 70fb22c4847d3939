// Integration tests for the vocab-trainer application
// These tests verify that all modules work together correctly

use std::fs;
use std::io::Cursor;
use vocab_trainer::*;

fn store_at(dir: &tempfile::TempDir) -> WordStore {
    WordStore::new(dir.path().join("english_word.txt"))
}

#[test]
fn test_end_to_end_add_quiz_persist_reload() {
    // Add words through the menu, fail a full quiz, then reload the file
    // from disk and check the misses survived the round trip.
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);

    let input = "1\nch1\napple\t蘋果\nbanana\t香蕉\nend\n3\n99\nx\nx\n8\n";
    run_menu(&mut store, Cursor::new(input), 7);

    let mut reloaded = store_at(&dir);
    assert!(matches!(
        reloaded.load().unwrap(),
        LoadOutcome::Loaded { words: 2, folders: 1 }
    ));
    for entry in reloaded.entries() {
        assert_eq!(entry.error_count, 1);
    }
}

#[test]
fn test_spec_scenario_duplicate_then_quiz() {
    // apple/banana seeded, duplicate apple rejected, cherry added, then a
    // quiz answered ["apple", "wrong", "cherry"] in storage order.
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    store.add("ch1", "apple", "蘋果").unwrap();
    store.add("ch1", "banana", "香蕉").unwrap();

    assert!(matches!(
        store.add("ch1", "apple", "蘋果"),
        Err(VocabError::Duplicate { .. })
    ));
    store.add("ch1", "cherry", "櫻桃").unwrap();
    assert_eq!(store.len(), 3);

    let mut session = QuizSession::new(vec![0, 1, 2]).unwrap();
    for answer in ["apple", "wrong", "cherry"] {
        session.advance(&mut store, answer).unwrap();
    }

    let summary = session.summary();
    assert_eq!(summary.score, 2);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.missed, vec![1]);
    assert_eq!(store.entry(1).error_count, 1);
}

#[test]
fn test_old_format_file_loads_with_zero_counts() {
    // Files written before miss tracking carry three fields per line.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("english_word.txt");
    fs::write(&path, "ch1\tapple\t蘋果\nch1\tbanana\t香蕉\t4\n").unwrap();

    let mut store = WordStore::new(&path);
    store.load().unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.entry(0).error_count, 0);
    assert_eq!(store.entry(1).error_count, 4);
    assert_eq!(store.folders(), ["ch1"]);
}

#[test]
fn test_malformed_lines_do_not_poison_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("english_word.txt");
    fs::write(
        &path,
        "garbage without tabs\nch1\tapple\t蘋果\t1\n\t\t\nch2\tbanana\t香蕉\n",
    )
    .unwrap();

    let mut store = WordStore::new(&path);
    store.load().unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_ledger_ranking_feeds_a_retest_session() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    store.add("ch1", "apple", "蘋果").unwrap();
    store.add("ch1", "banana", "香蕉").unwrap();
    store.add("ch1", "cherry", "櫻桃").unwrap();
    store.add("ch1", "durian", "榴槤").unwrap();

    // Counts [3, 0, 3, 1] -> ranked [0, 2, 3], banana excluded.
    for _ in 0..3 {
        store.increment_error(0);
        store.increment_error(2);
    }
    store.increment_error(3);
    assert_eq!(ranked_entries(&store), vec![0, 2, 3]);

    let mut session = start_retest(&store, 11).unwrap();
    assert_eq!(session.total(), 3);

    // Miss every retest round; only ledger entries take the hit.
    while session.state() != SessionState::Completed {
        session.advance(&mut store, "nope").unwrap();
    }
    assert_eq!(store.entry(0).error_count, 4);
    assert_eq!(store.entry(1).error_count, 0);
    assert_eq!(store.entry(2).error_count, 4);
    assert_eq!(store.entry(3).error_count, 2);
}

#[test]
fn test_shuffled_quiz_covers_every_selected_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    for i in 0..10 {
        store.add("ch1", &format!("word{i}"), "字").unwrap();
    }

    let indices = store.collect_by_folder(Some("ch1"));
    let order: Vec<usize> = permute(indices.len(), 3)
        .into_iter()
        .map(|p| indices[p])
        .collect();
    let mut session = QuizSession::new(order).unwrap();

    let mut seen = Vec::new();
    while let Some(index) = session.current_index() {
        seen.push(index);
        session.advance(&mut store, "wrong every time").unwrap();
    }
    seen.sort_unstable();
    assert_eq!(seen, indices);
}

#[test]
fn test_menu_delete_is_reflected_in_search_and_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    store.add("ch1", "apple", "蘋果").unwrap();
    store.add("ch1", "banana", "香蕉").unwrap();

    run_menu(&mut store, Cursor::new("6\napple\ny\n8\n"), 5);

    assert!(store.search("apple").is_empty());
    let data = fs::read_to_string(dir.path().join("english_word.txt")).unwrap();
    assert!(!data.contains("apple"));
    assert!(data.contains("banana"));
}

#[test]
fn test_swap_remove_keeps_remaining_entries_intact() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    store.add("ch1", "apple", "蘋果").unwrap();
    store.add("ch1", "banana", "香蕉").unwrap();
    store.add("ch2", "cherry", "櫻桃").unwrap();
    store.increment_error(2);

    let before = store.len();
    store.delete_by_index(1);

    assert_eq!(store.len(), before - 1);
    // The survivors keep their text and counts; cherry moved into the
    // vacated slot.
    let cherry = &store.entries()[store.find_by_english("cherry")[0]];
    assert_eq!(cherry.chinese, "櫻桃");
    assert_eq!(cherry.error_count, 1);
    assert_eq!(store.find_by_english("apple").len(), 1);
}

#[test]
fn test_abandoned_menu_quiz_still_saves_recorded_misses() {
    // Input ends mid-quiz: the session is abandoned, but quitting the
    // process still writes the misses that were already recorded.
    let dir = tempfile::tempdir().unwrap();
    let mut store = store_at(&dir);
    store.add("ch1", "apple", "蘋果").unwrap();
    store.add("ch1", "banana", "香蕉").unwrap();

    run_menu(&mut store, Cursor::new("3\n99\nx\n"), 2);

    let mut reloaded = store_at(&dir);
    reloaded.load().unwrap();
    let total_misses: u32 = reloaded.entries().iter().map(|e| e.error_count).sum();
    assert_eq!(total_misses, 1);
}

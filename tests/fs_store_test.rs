use shelf::error::ShelfError;
use shelf::index::DisplayIndex;
use shelf::model::NewBook;
use shelf::store::fs::FsBackend;
use shelf::store::library::{LoadOutcome, Store};
use shelf::store::LibraryBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("library.json");
    (dir, file)
}

fn leftover_tmp_files(dir: &std::path::Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count()
}

#[test]
fn test_first_run_seeds_and_persists() {
    let (dir, file) = setup();

    let (store, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Seeded);
    assert!(report.save_error.is_none());
    assert_eq!(store.len(), 10);
    assert!(file.exists());
    assert_eq!(leftover_tmp_files(dir.path()), 0);

    let (reopened, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Loaded { count: 10 });
    assert_eq!(reopened.books(), store.books());
}

#[test]
fn test_file_uses_four_space_indent() {
    let (_dir, file) = setup();
    let _ = Store::open(FsBackend::new(&file)).unwrap();

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.starts_with('['));
    assert!(content.contains("\n    {\n        \"title\""));
}

#[test]
fn test_add_survives_reopen() {
    let (_dir, file) = setup();
    let (mut store, _) = Store::open(FsBackend::new(&file)).unwrap();
    store
        .add(NewBook::new(
            "Rust in Action",
            "Tim McNamara",
            2021,
            "Rust",
            true,
        ))
        .unwrap();

    let (reopened, _) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(reopened.len(), 11);
    let last = reopened.books().last().unwrap();
    assert_eq!(last.title, "Rust in Action");
    assert_eq!(last.author, "Tim McNamara");
    assert_eq!(last.year, 2021);
    assert_eq!(last.genre, "Rust");
    assert!(last.read);
}

#[test]
fn test_remove_and_toggle_survive_reopen() {
    let (_dir, file) = setup();
    let (mut store, _) = Store::open(FsBackend::new(&file)).unwrap();

    let first = store.reference(DisplayIndex(1)).unwrap();
    let removed = store.remove(&[first]).unwrap();
    assert_eq!(removed[0].title, "Python Crash Course");

    let second = store.reference(DisplayIndex(1)).unwrap();
    store.toggle_read(&[second]).unwrap();

    let (reopened, _) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(reopened.len(), 9);
    assert_eq!(reopened.books()[0].title, "Fluent Python");
    assert!(reopened.books()[0].read);
}

#[test]
fn test_corrupt_file_is_kept_aside_and_reseeded() {
    let (dir, file) = setup();
    fs::write(&file, "{ this is not json").unwrap();

    let (store, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(store.len(), 10);

    let backup = match report.outcome {
        LoadOutcome::Recovered { backup, .. } => backup.expect("backup path"),
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert!(backup.exists());
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        "{ this is not json"
    );
    assert!(backup
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("library.json.corrupt-"));

    // The fresh file is valid again
    let (_, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Loaded { count: 10 });
    assert_eq!(leftover_tmp_files(dir.path()), 0);
}

#[test]
fn test_corrupt_file_discarded_when_not_kept() {
    let (dir, file) = setup();
    fs::write(&file, "[{\"title\": 12}]").unwrap();

    let mut store = Store::new(FsBackend::new(&file)).with_keep_corrupt(false);
    let report = store.load().unwrap();
    match report.outcome {
        LoadOutcome::Recovered { backup, .. } => assert!(backup.is_none()),
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(store.len(), 10);
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn test_missing_parent_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("nested").join("deeper").join("books.json");

    let (store, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert!(report.save_error.is_none());
    assert!(file.exists());
    assert_eq!(store.location(), file);
}

#[test]
fn test_empty_array_is_a_valid_empty_library() {
    let (_dir, file) = setup();
    fs::write(&file, "[]").unwrap();

    let (store, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Loaded { count: 0 });
    assert!(store.is_empty());
}

#[test]
fn test_unwritable_location_reports_unsaved() {
    let (dir, _) = setup();
    // A regular file where the parent directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();
    let file = blocker.join("library.json");

    let (mut store, report) = Store::open(FsBackend::new(&file)).unwrap();
    assert_eq!(report.outcome, LoadOutcome::Seeded);
    assert!(report.save_error.is_some());
    assert_eq!(store.len(), 10);

    let err = store
        .add(NewBook::new("Dune", "Frank Herbert", 1965, "Sci-Fi", false))
        .unwrap_err();
    assert!(matches!(err, ShelfError::Unsaved { .. }));
    // Memory keeps the change
    assert_eq!(store.len(), 11);
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a dir");
    assert_eq!(leftover_tmp_files(dir.path()), 0);
}

#[test]
fn test_directory_at_library_path_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let documents = dir.path().join("Documents");
    fs::create_dir(&documents).unwrap();
    fs::write(documents.join("thesis.txt"), "chapter one").unwrap();

    let backend = FsBackend::new(&documents);
    assert!(backend.quarantine().is_err());

    let mut store = Store::new(backend);
    assert!(store.load().is_err());
    assert!(store.is_empty());

    assert!(documents.is_dir());
    assert_eq!(
        fs::read_to_string(documents.join("thesis.txt")).unwrap(),
        "chapter one"
    );
    let siblings = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(siblings, 1);
}

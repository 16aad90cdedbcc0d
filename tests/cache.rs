// tests/cache.rs
//
// Read-through cache of normalized tables.
//
use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use staff_search::config::options::CacheOptions;
use staff_search::runner::load_staff;
use staff_search::store::{cache_path, content_id, load_table, save_table};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/staff.rtf")
}

fn copy_fixture(dir: &Path, name: &str) -> PathBuf {
    let input = dir.join(name);
    fs::copy(fixture(), &input).unwrap();
    input
}

#[test]
fn second_load_hits_the_cache_and_matches() {
    let tmp = tempfile::tempdir().unwrap();
    let input = copy_fixture(tmp.path(), "Coaching Candidates.rtf");
    let cache = CacheOptions { enabled: true, dir: tmp.path().join("csv") };

    let fresh = load_staff(&input, &cache).unwrap();
    assert!(fresh.cache_hit.is_none());

    let cached = load_staff(&input, &cache).unwrap();
    let hit = cached.cache_hit.expect("second load comes from the cache");
    assert!(hit.starts_with(tmp.path().join("csv")));

    assert_eq!(cached.table, fresh.table);
}

#[test]
fn cache_name_carries_stem_and_content_id() {
    let raw = fs::read(fixture()).unwrap();
    let path = cache_path(Path::new("out"), Path::new("in/Coaching Candidates.rtf"), &raw);

    let id = content_id(&raw);
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(
        path,
        PathBuf::from("out").join(format!("Coaching_Candidates_{id}_cleaned.csv"))
    );
}

#[test]
fn edited_export_gets_a_new_cache_file() {
    let tmp = tempfile::tempdir().unwrap();
    let input = copy_fixture(tmp.path(), "staff.rtf");
    let cache = CacheOptions { enabled: true, dir: tmp.path().to_path_buf() };

    load_staff(&input, &cache).unwrap();

    let mut text = fs::read_to_string(&input).unwrap();
    text = text.replace("Bruno Costa     ", "Bruno Costa Jr. ");
    fs::write(&input, &text).unwrap();

    let reloaded = load_staff(&input, &cache).unwrap();
    assert!(reloaded.cache_hit.is_none());
    assert_eq!(reloaded.table.record(1).unwrap().name(), "Bruno Costa Jr.");
}

#[test]
fn disabled_cache_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("csv");
    let cache = CacheOptions { enabled: false, dir: dir.clone() };

    let loaded = load_staff(&fixture(), &cache).unwrap();
    assert!(loaded.cache_hit.is_none());
    assert!(!dir.exists());
}

#[test]
fn cache_file_is_plain_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let table = load_staff(&fixture(), &CacheOptions::default()).unwrap().table;
    let path = tmp.path().join("t.csv");

    save_table(&path, &table).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Name,Att,Def,Men,Tec,TCo,Det,Dis,Mot,Fit"));
    assert!(lines.next().unwrap().starts_with("Aleksander Nowak,10,10,10"));

    assert_eq!(load_table(&path).unwrap(), table);
}

//! Edge case tests for hefty


use harness::{TestTree, run_hefty};

#[test]
fn test_empty_directory() {
    let tree = TestTree::new();

    let (stdout, _stderr, success) = run_hefty(tree.path(), &["."]);
    assert!(success, "empty directory is not an error");
    assert!(
        stdout.contains("Entries searched:    0"),
        "nothing visited: {stdout}"
    );
    assert!(stdout.contains("Top 0 total"), "empty ranking: {stdout}");
}

#[test]
fn test_top_exceeds_file_count() {
    let tree = TestTree::new();
    tree.add_file("a", 1);
    tree.add_file("b", 2);
    tree.add_file("c", 3);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &[".", "--top", "100"]);
    assert!(success);
    assert!(stdout.contains("Top 3 total"), "all files ranked: {stdout}");
}

#[test]
fn test_hidden_root_is_scanned() {
    let tree = TestTree::new();
    tree.add_file(".dotroot/inner", 42);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &[".dotroot"]);
    assert!(success, "hidden root itself is never pruned");
    assert!(stdout.contains("inner"), "root contents shown: {stdout}");
    assert!(
        stdout.contains("Hidden dirs skipped: 0"),
        "root not counted as skipped: {stdout}"
    );
}

#[test]
fn test_hidden_files_are_not_pruned() {
    // Only hidden *directories* are pruned; hidden files still rank.
    let tree = TestTree::new();
    tree.add_file(".env", 500);
    tree.add_file("readme", 10);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains(".env"), "hidden file ranked: {stdout}");
    assert!(
        stdout.contains("Hidden dirs skipped: 0"),
        "no directory skipped: {stdout}"
    );
}

#[test]
fn test_multiple_hidden_directories() {
    let tree = TestTree::new();
    tree.add_file("keep", 30);
    tree.add_file(".git/a", 100);
    tree.add_file(".cache/b", 200);
    tree.add_file("sub/.venv/c", 300);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &["."]);
    assert!(success);
    assert!(
        stdout.contains("Hidden dirs skipped: 3"),
        "nested hidden dirs skipped too: {stdout}"
    );
    assert!(!stdout.contains("/c"), "pruned content absent: {stdout}");
}

#[test]
fn test_deeply_nested_file_found() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/d/e/f/deep.bin", 9000);
    tree.add_file("shallow.bin", 10);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &["."]);
    assert!(success);
    let pos_deep = stdout.find("deep.bin").expect("deep file in output");
    let pos_shallow = stdout.find("shallow.bin").expect("shallow file in output");
    assert!(pos_deep < pos_shallow, "largest first: {stdout}");
}

#[test]
fn test_zero_byte_files_rank() {
    let tree = TestTree::new();
    tree.add_file("empty1", 0);
    tree.add_file("empty2", 0);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("empty1"), "zero-size files listed: {stdout}");
    assert!(stdout.contains("empty2"), "zero-size files listed: {stdout}");
}

#[test]
fn test_repeat_runs_agree() {
    let tree = TestTree::new();
    tree.add_file("a", 10);
    tree.add_file("sub/b", 30);
    tree.add_file(".skip/c", 99);

    let (first, _, ok1) = run_hefty(tree.path(), &[".", "--json"]);
    let (second, _, ok2) = run_hefty(tree.path(), &[".", "--json"]);
    assert!(ok1 && ok2);
    assert_eq!(first, second, "walks over an unchanged tree are idempotent");
}

#[test]
fn test_json_stats_exclude_pruned_descendants() {
    let tree = TestTree::new();
    tree.add_file("a", 10);
    tree.add_file(".hidden/big", 1_000_000);

    let (stdout, _stderr, success) = run_hefty(tree.path(), &[".", "--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    // a plus the .hidden directory entry itself
    assert_eq!(value["stats"]["entries_visited"], 2);
    assert_eq!(value["stats"]["directories_skipped"], 1);
    let cumulative = value["stats"]["cumulative_size"].as_u64().unwrap();
    assert!(
        cumulative < 1_000_000,
        "pruned bytes not accumulated: {cumulative}"
    );
}

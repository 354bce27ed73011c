use super::*;

#[test]
fn test_mock_snapshot_shape() {
    let snapshot = GitStatusSnapshot::mock();
    assert_eq!(snapshot.branch, "main");
    assert!(!snapshot.files.is_empty());
}

#[test]
fn test_glyphs() {
    assert_eq!(FileState::Modified.glyph(), 'M');
    assert_eq!(FileState::Added.glyph(), 'A');
    assert_eq!(FileState::Deleted.glyph(), 'D');
    assert_eq!(FileState::Untracked.glyph(), '?');
}

#[test]
fn test_panel_lines_pair_glyph_with_path() {
    let snapshot = GitStatusSnapshot::mock();
    let lines = snapshot.panel_lines();
    assert_eq!(lines.len(), snapshot.files.len());
    assert_eq!(lines[0], "M index.html");
    assert!(lines.contains(&"A scripts/app.js".to_string()));
    assert!(lines.contains(&"? notes.md".to_string()));
}

#[test]
fn test_summary_line() {
    let snapshot = GitStatusSnapshot::mock();
    let summary = snapshot.summary();
    assert!(summary.starts_with("main"));
    assert!(summary.contains("↑2"));
    assert!(!summary.contains("↓"));
    assert!(summary.contains("4 changes"));
}

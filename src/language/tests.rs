use super::*;

#[test]
fn test_common_extensions() {
    assert_eq!(Language::from_file_name("index.html"), Language::Html);
    assert_eq!(Language::from_file_name("style.css"), Language::Css);
    assert_eq!(Language::from_file_name("app.js"), Language::JavaScript);
    assert_eq!(Language::from_file_name("App.jsx"), Language::JavaScript);
    assert_eq!(Language::from_file_name("main.ts"), Language::TypeScript);
    assert_eq!(Language::from_file_name("App.tsx"), Language::TypeScript);
    assert_eq!(Language::from_file_name("script.py"), Language::Python);
}

#[test]
fn test_case_insensitive_extension() {
    assert_eq!(Language::from_file_name("INDEX.HTML"), Language::Html);
    assert_eq!(Language::from_file_name("Main.Ts"), Language::TypeScript);
}

#[test]
fn test_unknown_extension_falls_back_to_plain_text() {
    assert_eq!(Language::from_file_name("data.xyz"), Language::PlainText);
    assert_eq!(Language::from_file_name("notes.txt"), Language::PlainText);
}

#[test]
fn test_missing_extension_falls_back_to_plain_text() {
    assert_eq!(Language::from_file_name("Makefile"), Language::PlainText);
    assert_eq!(Language::from_file_name(""), Language::PlainText);
    // A leading dot with no stem is a hidden file, not an extension
    assert_eq!(Language::from_file_name(".gitignore"), Language::PlainText);
    // Trailing dot has an empty extension
    assert_eq!(Language::from_file_name("file."), Language::PlainText);
}

#[test]
fn test_multi_dot_names_use_last_extension() {
    assert_eq!(Language::from_file_name("app.test.js"), Language::JavaScript);
    assert_eq!(Language::from_file_name("styles.module.css"), Language::Css);
}

#[test]
fn test_display_names() {
    assert_eq!(Language::Html.display_name(), "HTML");
    assert_eq!(Language::Cpp.display_name(), "C++");
    assert_eq!(Language::PlainText.display_name(), "Plain Text");
}

//! Git status panel
//! A read-only snapshot for display; no version-control operations run
//! behind it.

/// State of a file relative to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Modified,
    Added,
    Deleted,
    Untracked,
}

impl FileState {
    /// Single-character glyph for the panel listing
    pub fn glyph(&self) -> char {
        match self {
            FileState::Modified => 'M',
            FileState::Added => 'A',
            FileState::Deleted => 'D',
            FileState::Untracked => '?',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitFileStatus {
    pub path: String,
    pub state: FileState,
}

/// The panel's entire data model: branch, divergence counts and per-file
/// states. Consumers only read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStatusSnapshot {
    pub branch: String,
    pub ahead: u32,
    pub behind: u32,
    pub files: Vec<GitFileStatus>,
}

impl GitStatusSnapshot {
    /// The static snapshot shown in the panel
    pub fn mock() -> Self {
        GitStatusSnapshot {
            branch: "main".to_string(),
            ahead: 2,
            behind: 0,
            files: vec![
                GitFileStatus {
                    path: "index.html".to_string(),
                    state: FileState::Modified,
                },
                GitFileStatus {
                    path: "styles/main.css".to_string(),
                    state: FileState::Modified,
                },
                GitFileStatus {
                    path: "scripts/app.js".to_string(),
                    state: FileState::Added,
                },
                GitFileStatus {
                    path: "notes.md".to_string(),
                    state: FileState::Untracked,
                },
            ],
        }
    }

    /// Per-file listing lines for the bottom panel, e.g. `M index.html`
    pub fn panel_lines(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| format!("{} {}", f.state.glyph(), f.path))
            .collect()
    }

    /// Panel summary line, e.g. `main ↑2 (4 changes)`
    pub fn summary(&self) -> String {
        let mut parts = vec![self.branch.clone()];
        if self.ahead > 0 {
            parts.push(format!("↑{}", self.ahead));
        }
        if self.behind > 0 {
            parts.push(format!("↓{}", self.behind));
        }
        parts.push(format!("({} changes)", self.files.len()));
        parts.join(" ")
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

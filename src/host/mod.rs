//! Editor host adapter
//! The boundary to the external text-editing widget and to the host
//! file-system dialogs. The core only registers providers and issues
//! commands against these contracts.

use crate::completion::{ProviderRegistry, Suggestion};
use crate::constants::ui::TRIGGER_SIGIL;
use crate::language::Language;
use crate::workspace::Workspace;
use std::collections::HashMap;
use std::path::PathBuf;

/// Tri-state result of a host file-system dialog or write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Success,
    Cancelled,
    Failed,
}

/// File-system collaborator. The dialogs themselves live in the host;
/// the core only consumes the tri-state result.
pub trait HostFs {
    fn write_file(&mut self, name: &str, contents: &str) -> DialogResult;
    fn create_folder(&mut self, name: &str) -> DialogResult;
    fn open_file_browser(&mut self) -> DialogResult;
}

/// In-memory session store; the default persistence model
pub struct SessionFs {
    files: HashMap<String, String>,
    folders: Vec<String>,
}

impl SessionFs {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            folders: Vec::new(),
        }
    }

    pub fn read_file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|s| s.as_str())
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }
}

impl HostFs for SessionFs {
    fn write_file(&mut self, name: &str, contents: &str) -> DialogResult {
        self.files.insert(name.to_string(), contents.to_string());
        DialogResult::Success
    }

    fn create_folder(&mut self, name: &str) -> DialogResult {
        self.folders.push(name.to_string());
        DialogResult::Success
    }

    fn open_file_browser(&mut self) -> DialogResult {
        // No native browser in the session store
        DialogResult::Cancelled
    }
}

impl Default for SessionFs {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes under a root directory on the real file system
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl HostFs for DiskFs {
    fn write_file(&mut self, name: &str, contents: &str) -> DialogResult {
        match std::fs::write(self.root.join(name), contents) {
            Ok(()) => DialogResult::Success,
            Err(_) => DialogResult::Failed,
        }
    }

    fn create_folder(&mut self, name: &str) -> DialogResult {
        match std::fs::create_dir_all(self.root.join(name)) {
            Ok(()) => DialogResult::Success,
            Err(_) => DialogResult::Failed,
        }
    }

    fn open_file_browser(&mut self) -> DialogResult {
        // No dialog surface in a headless host
        DialogResult::Cancelled
    }
}

/// Contract of the external text-editing widget. Cursor rendering,
/// highlighting and undo are the widget's own business; the core syncs
/// buffers and issues commands through this trait only.
pub trait EditorWidget {
    /// Current live buffer contents
    fn get_value(&self) -> String;

    /// Replace the live buffer (tab switch, close fallback)
    fn set_value(&mut self, text: &str);

    /// Force the suggestion widget open (Tab-key override)
    fn open_suggestion_widget(&mut self);

    /// Insert a literal tab character at the cursor
    fn insert_tab(&mut self);

    /// Show a message on the widget's status line
    fn set_status(&mut self, message: &str);
}

/// A plain in-process widget backing the default shell and the tests
pub struct BufferWidget {
    value: String,
    status: String,
    suggestion_openings: usize,
    tabs_inserted: usize,
}

impl BufferWidget {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            status: String::new(),
            suggestion_openings: 0,
            tabs_inserted: 0,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn suggestion_openings(&self) -> usize {
        self.suggestion_openings
    }

    pub fn tabs_inserted(&self) -> usize {
        self.tabs_inserted
    }
}

impl EditorWidget for BufferWidget {
    fn get_value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.value = text.to_string();
    }

    fn open_suggestion_widget(&mut self) {
        self.suggestion_openings += 1;
    }

    fn insert_tab(&mut self) {
        self.value.push('\t');
        self.tabs_inserted += 1;
    }

    fn set_status(&mut self, message: &str) {
        self.status = message.to_string();
    }
}

impl Default for BufferWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates workspace and completion state into widget calls
pub struct HostAdapter {
    registry: ProviderRegistry,
}

impl HostAdapter {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Whether `ch` should invoke the provider for this language
    pub fn is_trigger(&self, language: Language, ch: char) -> bool {
        self.registry.is_trigger(language, ch)
    }

    /// One completion request. Re-entrant: the host may call this on
    /// every keystroke matching a trigger character.
    pub fn provide_completion_items(
        &self,
        language: Language,
        line_text: &str,
        cursor_column: usize,
        line_number: usize,
    ) -> Vec<Suggestion> {
        self.registry
            .complete(language, line_text, cursor_column, line_number)
    }

    /// Tab-key override: when the current line is exactly the trigger
    /// sigil, open the suggestion widget instead of inserting a literal
    /// tab. Returns true when the override fired.
    pub fn handle_tab_key(&self, current_line: &str, widget: &mut dyn EditorWidget) -> bool {
        if current_line.trim() == TRIGGER_SIGIL.to_string() {
            widget.open_suggestion_widget();
            true
        } else {
            widget.insert_tab();
            false
        }
    }

    /// Load the active tab's content into the widget buffer; clears the
    /// buffer when no tabs remain
    pub fn sync_to_widget(&self, workspace: &Workspace, widget: &mut dyn EditorWidget) {
        match workspace.active_tab() {
            Some(tab) => widget.set_value(&tab.content),
            None => widget.set_value(""),
        }
    }
}

impl Default for HostAdapter {
    fn default() -> Self {
        Self::new(ProviderRegistry::with_defaults())
    }
}

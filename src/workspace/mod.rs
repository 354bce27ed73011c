//! Workspace model
//! Owns the ordered collection of open tabs, the active tab, and dirty state

use crate::constants::errors;
use crate::error::{ErrorType, LoftError, Result};
use crate::host::{DialogResult, HostFs};
use crate::language::Language;

mod confirm;
pub use confirm::DeleteConfirm;

/// A single open file in the workspace.
/// The `id` is unique within the workspace and doubles as the display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub content: String,
    pub language: Language,
    pub is_dirty: bool,
}

impl Tab {
    /// Create an empty, clean tab; language derived from the name's extension
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let language = Language::from_file_name(&id);
        Tab {
            id,
            content: String::new(),
            language,
            is_dirty: false,
        }
    }

    /// Create a tab with initial content (e.g. from an opened file)
    pub fn with_content(id: impl Into<String>, content: impl Into<String>) -> Self {
        let mut tab = Self::new(id);
        tab.content = content.into();
        tab
    }
}

/// Outcome of `create` when no name was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Tab was created and activated
    Created,
    /// Host must prompt for a file name and call `create` again
    NamePrompt,
}

/// Outcome of `close`/`delete`, telling the host what to load next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The closed tab was active; the named tab is now active and its
    /// content must be loaded into the editor buffer
    Activated(String),
    /// No tabs remain; the editor buffer must be cleared
    Emptied,
    /// An inactive tab was closed; the editor buffer is untouched
    ClosedInactive,
}

/// Manages the open tabs and the single active tab
pub struct Workspace {
    /// Open tabs in tab-bar order
    tabs: Vec<Tab>,
    /// Index of the active tab; meaningful only when `tabs` is non-empty
    active: usize,
    /// Pending delete confirmation, if any
    confirm: DeleteConfirm,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
            confirm: DeleteConfirm::new(),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Index of the tab with the given id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            None
        } else {
            Some(self.active)
        }
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_index().map(|i| &self.tabs[i])
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let idx = self.active_index()?;
        Some(&mut self.tabs[idx])
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_tab().map(|t| t.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Open a tab and activate it. If a tab with the same id is already
    /// open this is a duplicate and the existing tab is activated instead.
    /// Returns true when the tab was actually inserted.
    pub fn open(&mut self, tab: Tab) -> bool {
        if let Some(idx) = self.index_of(&tab.id) {
            self.active = idx;
            return false;
        }
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        true
    }

    /// Create a new empty tab. With no name, the host must run its name
    /// prompt and call again with a concrete name.
    pub fn create(&mut self, name: Option<&str>) -> Result<CreateOutcome> {
        let name = match name {
            None => return Ok(CreateOutcome::NamePrompt),
            Some(n) => n.trim(),
        };
        if name.is_empty() {
            return Err(LoftError::warning(
                ErrorType::Workspace,
                errors::EMPTY_NAME,
                "File name cannot be empty",
            ));
        }
        if self.index_of(name).is_some() {
            return Err(LoftError::warning(
                ErrorType::Workspace,
                errors::DUPLICATE_TAB,
                format!("{} is already open", name),
            ));
        }
        self.open(Tab::new(name));
        Ok(CreateOutcome::Created)
    }

    /// Activate the tab with the given id
    pub fn activate(&mut self, id: &str) -> Result<()> {
        match self.index_of(id) {
            Some(idx) => {
                self.active = idx;
                Ok(())
            }
            None => Err(LoftError::new(
                ErrorType::Workspace,
                errors::TAB_NOT_FOUND,
                format!("{} is not open", id),
            )),
        }
    }

    /// Record a keystroke mutation of the active tab's content
    pub fn update_active_content(&mut self, text: &str) -> Result<()> {
        let tab = self.active_tab_mut().ok_or_else(no_active_tab)?;
        if tab.content != text {
            tab.content = text.to_string();
            tab.is_dirty = true;
        }
        Ok(())
    }

    /// Copy the live editor buffer into the active tab and ask the host to
    /// persist it. The save is optimistic: content is kept even when the
    /// write fails, but the dirty flag is re-raised.
    pub fn save(&mut self, live_buffer: &str, fs: &mut dyn HostFs) -> Result<()> {
        let tab = self.active_tab_mut().ok_or_else(no_active_tab)?;
        tab.content = live_buffer.to_string();
        tab.is_dirty = false;

        let (id, content) = (tab.id.clone(), tab.content.clone());
        match fs.write_file(&id, &content) {
            DialogResult::Success => Ok(()),
            DialogResult::Cancelled => {
                // No write happened; the edit is still unsaved
                self.active_tab_mut().ok_or_else(no_active_tab)?.is_dirty = true;
                Ok(())
            }
            DialogResult::Failed => {
                self.active_tab_mut().ok_or_else(no_active_tab)?.is_dirty = true;
                Err(LoftError::new(
                    ErrorType::Io,
                    errors::SAVE_FAILED,
                    errors::MSG_SAVE_FAILED,
                ))
            }
        }
    }

    /// Atomically rename a tab. Because activity is tracked by index, the
    /// active-tab reference can never disagree with the renamed id.
    pub fn rename(&mut self, old_id: &str, new_id: &str) -> Result<()> {
        let new_id = new_id.trim();
        if new_id.is_empty() {
            return Err(LoftError::warning(
                ErrorType::Workspace,
                errors::EMPTY_NAME,
                "File name cannot be empty",
            ));
        }
        if new_id != old_id && self.index_of(new_id).is_some() {
            return Err(LoftError::warning(
                ErrorType::Workspace,
                errors::RENAME_CONFLICT,
                errors::MSG_RENAME_CONFLICT,
            ));
        }
        let idx = self.index_of(old_id).ok_or_else(|| {
            LoftError::new(
                ErrorType::Workspace,
                errors::TAB_NOT_FOUND,
                format!("{} is not open", old_id),
            )
        })?;
        let tab = &mut self.tabs[idx];
        tab.id = new_id.to_string();
        tab.language = Language::from_file_name(new_id);
        Ok(())
    }

    /// Close a tab. When the active tab is closed and others remain, the
    /// lowest-index survivor becomes active.
    pub fn close(&mut self, id: &str) -> Result<CloseOutcome> {
        let pos = self.index_of(id).ok_or_else(|| {
            LoftError::new(
                ErrorType::Workspace,
                errors::TAB_NOT_FOUND,
                format!("{} is not open", id),
            )
        })?;

        // A pending confirmation for this tab is now stale
        if self.confirm.target() == Some(id) {
            self.confirm.cancel();
        }

        let was_active = pos == self.active;
        self.tabs.remove(pos);

        if self.tabs.is_empty() {
            self.active = 0;
            return Ok(CloseOutcome::Emptied);
        }

        if was_active {
            self.active = 0;
            return Ok(CloseOutcome::Activated(self.tabs[0].id.clone()));
        }

        // Keep the same tab active after the removal shifted indices
        if pos < self.active {
            self.active -= 1;
        }
        if self.active >= self.tabs.len() {
            self.active = self.tabs.len() - 1;
        }
        Ok(CloseOutcome::ClosedInactive)
    }

    /// Begin the delete flow: arms the confirmation for the target tab.
    /// Nothing else is blocked while the confirmation is pending.
    pub fn request_delete(&mut self, id: &str) -> Result<()> {
        if self.index_of(id).is_none() {
            return Err(LoftError::new(
                ErrorType::Workspace,
                errors::TAB_NOT_FOUND,
                format!("{} is not open", id),
            ));
        }
        self.confirm.request(id);
        Ok(())
    }

    /// Confirm a pending deletion. Returns None when the confirmation was
    /// stale (target already closed by another path); the dialog is
    /// dismissed either way.
    pub fn confirm_delete(&mut self) -> Result<Option<CloseOutcome>> {
        let target = match self.confirm.take() {
            Some(t) => t,
            None => return Ok(None),
        };
        if self.index_of(&target).is_none() {
            return Ok(None);
        }
        self.close(&target).map(Some)
    }

    /// Dismiss a pending deletion without deleting
    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Id of the tab awaiting delete confirmation, if any
    pub fn pending_delete(&self) -> Option<&str> {
        self.confirm.target()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.tabs.iter().any(|t| t.is_dirty)
    }

    /// Titles of tabs with unsaved changes
    pub fn dirty_tabs(&self) -> Vec<&str> {
        self.tabs
            .iter()
            .filter(|t| t.is_dirty)
            .map(|t| t.id.as_str())
            .collect()
    }
}

fn no_active_tab() -> LoftError {
    LoftError::new(
        ErrorType::Workspace,
        errors::NO_ACTIVE_TAB,
        errors::MSG_NO_ACTIVE_TAB,
    )
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

//! Shell core
//! Ties the workspace, completion engine, layout manager and panels
//! together and routes host events between them. Everything here is
//! synchronous and completes within one event-loop turn.

use crate::completion::Suggestion;
use crate::error::{ErrorManager, LoftError};
use crate::git_panel::GitStatusSnapshot;
use crate::host::{EditorWidget, HostAdapter, HostFs};
use crate::language::Language;
use crate::layout::{LayoutManager, ViewportSize};
use crate::telemetry::TelemetrySampler;
use crate::workspace::{CloseOutcome, CreateOutcome, Tab, Workspace};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;
use unicode_width::UnicodeWidthChar;

/// Shell-level options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Cap on suggestions returned per completion request
    pub completion_max_results: usize,
    /// Whether the Tab key opens the suggestion widget on a sigil line
    pub tab_key_override: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            completion_max_results: 50,
            tab_key_override: true,
        }
    }
}

/// The IDE shell: one workspace, one layout, one adapter
pub struct Shell {
    pub workspace: Workspace,
    pub layout: LayoutManager,
    pub adapter: HostAdapter,
    pub telemetry: TelemetrySampler,
    pub git: GitStatusSnapshot,
    pub errors: ErrorManager,
    options: ShellOptions,
}

impl Shell {
    pub fn new(viewport: ViewportSize) -> Self {
        Self::with_options(viewport, ShellOptions::default())
    }

    pub fn with_options(viewport: ViewportSize, options: ShellOptions) -> Self {
        Shell {
            workspace: Workspace::new(),
            layout: LayoutManager::new(viewport),
            adapter: HostAdapter::default(),
            telemetry: TelemetrySampler::new(),
            git: GitStatusSnapshot::mock(),
            errors: ErrorManager::new(),
            options,
        }
    }

    pub fn options(&self) -> &ShellOptions {
        &self.options
    }

    /// Open a file as a new tab and load it into the widget
    pub fn open_file(
        &mut self,
        name: &str,
        content: &str,
        widget: &mut dyn EditorWidget,
    ) {
        self.workspace.open(Tab::with_content(name, content));
        self.adapter.sync_to_widget(&self.workspace, widget);
    }

    /// New-file command. Returns false when the host must prompt for a
    /// name and call again.
    pub fn create_file(&mut self, name: Option<&str>, widget: &mut dyn EditorWidget) -> bool {
        match self.workspace.create(name) {
            Ok(CreateOutcome::Created) => {
                self.adapter.sync_to_widget(&self.workspace, widget);
                true
            }
            Ok(CreateOutcome::NamePrompt) => false,
            Err(err) => {
                self.surface(err, widget);
                true
            }
        }
    }

    /// Tab-bar click: stash the live buffer into the outgoing tab, then
    /// swap the incoming tab's content into the widget
    pub fn select_tab(&mut self, id: &str, widget: &mut dyn EditorWidget) {
        if self.workspace.is_active(id) {
            return;
        }
        if !self.workspace.is_empty() {
            if let Err(err) = self.workspace.update_active_content(&widget.get_value()) {
                self.surface(err, widget);
            }
        }
        match self.workspace.activate(id) {
            Ok(()) => self.adapter.sync_to_widget(&self.workspace, widget),
            Err(err) => self.surface(err, widget),
        }
    }

    /// Keystroke mutation of the live buffer
    pub fn buffer_edited(&mut self, widget: &dyn EditorWidget) {
        // Ignoring the empty-workspace case: typing with no tab open
        // mutates nothing
        let _ = self.workspace.update_active_content(&widget.get_value());
    }

    /// Save command: optimistic, with failures surfaced on the status line
    pub fn save(&mut self, widget: &mut dyn EditorWidget, fs: &mut dyn HostFs) {
        let live = widget.get_value();
        match self.workspace.save(&live, fs) {
            Ok(()) => {
                if let Some(id) = self.workspace.active_id() {
                    let message = format!("Saved {}", id);
                    self.errors.notifications_mut().success(&message);
                    widget.set_status(&message);
                }
            }
            Err(err) => self.surface(err, widget),
        }
    }

    /// Close command, with the close-fallback buffer swap
    pub fn close_tab(&mut self, id: &str, widget: &mut dyn EditorWidget) {
        match self.workspace.close(id) {
            Ok(CloseOutcome::Activated(_)) | Ok(CloseOutcome::Emptied) => {
                self.adapter.sync_to_widget(&self.workspace, widget);
            }
            Ok(CloseOutcome::ClosedInactive) => {}
            Err(err) => self.surface(err, widget),
        }
    }

    pub fn rename_tab(&mut self, old_id: &str, new_id: &str, widget: &mut dyn EditorWidget) {
        if let Err(err) = self.workspace.rename(old_id, new_id) {
            self.surface(err, widget);
        }
    }

    pub fn request_delete(&mut self, id: &str, widget: &mut dyn EditorWidget) {
        if let Err(err) = self.workspace.request_delete(id) {
            self.surface(err, widget);
        }
    }

    /// Confirm a pending delete; stale confirmations dismiss silently
    pub fn confirm_delete(&mut self, widget: &mut dyn EditorWidget) {
        match self.workspace.confirm_delete() {
            Ok(Some(CloseOutcome::Activated(_))) | Ok(Some(CloseOutcome::Emptied)) => {
                self.adapter.sync_to_widget(&self.workspace, widget);
            }
            Ok(Some(CloseOutcome::ClosedInactive)) | Ok(None) => {}
            Err(err) => self.surface(err, widget),
        }
    }

    /// Language of the active tab; PlainText when none is open
    pub fn active_language(&self) -> Language {
        self.workspace
            .active_tab()
            .map(|t| t.language)
            .unwrap_or(Language::PlainText)
    }

    /// One completion request against the active tab's provider
    pub fn completions(
        &self,
        line_text: &str,
        cursor_column: usize,
        line_number: usize,
    ) -> Vec<Suggestion> {
        let mut suggestions = self.adapter.provide_completion_items(
            self.active_language(),
            line_text,
            cursor_column,
            line_number,
        );
        suggestions.truncate(self.options.completion_max_results);
        suggestions
    }

    /// Tab keypress on the given line
    pub fn handle_tab_key(&mut self, current_line: &str, widget: &mut dyn EditorWidget) -> bool {
        if !self.options.tab_key_override {
            widget.insert_tab();
            return false;
        }
        self.adapter.handle_tab_key(current_line, widget)
    }

    /// Route a host mouse event to the layout's drag state machine
    pub fn on_mouse(&mut self, event: MouseEvent) {
        let (x, y) = (event.column as i32, event.row as i32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(pane) = self.layout.handle_at(x, y) {
                    self.layout.begin_drag(pane);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.layout.pointer_moved(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.layout.end_drag();
            }
            _ => {}
        }
    }

    /// Periodic housekeeping: telemetry sampling and notification expiry
    pub fn tick(&mut self, now: Instant) {
        self.telemetry.maybe_sample(now);
        self.errors.notifications_mut().prune_expired(now);
    }

    /// Tab bar line for rendering, active tab bracketed and dirty tabs
    /// starred, truncated to the widget's column budget
    pub fn tab_bar(&self, max_cols: usize) -> String {
        let mut bar = String::new();
        let mut used = 0usize;
        for tab in self.workspace.tabs() {
            let title = truncate_display(&tab.id, crate::constants::ui::TAB_TITLE_MAX);
            let marker = if tab.is_dirty {
                crate::constants::ui::DIRTY_MARKER
            } else {
                ""
            };
            let cell = if self.workspace.is_active(&tab.id) {
                format!("[{}{}] ", title, marker)
            } else {
                format!(" {}{}  ", title, marker)
            };
            let cell_width = display_width(&cell);
            if used + cell_width > max_cols {
                break;
            }
            used += cell_width;
            bar.push_str(&cell);
        }
        bar
    }

    /// Status line: active tab, language, and the latest notification
    pub fn status_line(&self) -> String {
        let name = self
            .workspace
            .active_id()
            .unwrap_or(crate::constants::ui::NO_NAME);
        let language = self.active_language().display_name();
        match self.errors.notifications().latest() {
            Some(notification) => format!("{} [{}] | {}", name, language, notification.message),
            None => format!("{} [{}]", name, language),
        }
    }

    fn surface(&mut self, err: LoftError, widget: &mut dyn EditorWidget) {
        widget.set_status(&err.message);
        self.errors.handle(err);
    }
}

fn display_width(s: &str) -> usize {
    s.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate to a display width, appending an ellipsis when cut
fn truncate_display(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;

//! Global constants for the Loft shell

pub mod ui {
    /// Display text for tabs with no file name
    pub const NO_NAME: &str = "[No Name]";

    /// Single-character shorthand that expands into a document template
    pub const TRIGGER_SIGIL: char = '!';

    /// Dirty-tab marker in the tab bar
    pub const DIRTY_MARKER: &str = "*";

    /// Maximum display width of a tab title before truncation
    pub const TAB_TITLE_MAX: usize = 24;
}

pub mod panes {
    /// Smallest width the sidebar may be dragged to (px)
    pub const MIN_SIDEBAR_WIDTH: u32 = 160;
    /// Smallest height the bottom panel may be dragged to (px)
    pub const MIN_PANEL_HEIGHT: u32 = 96;
    /// Width the editor column must always retain (px)
    pub const MIN_EDITOR_WIDTH: u32 = 320;
    /// Height the editor row must always retain (px)
    pub const MIN_EDITOR_HEIGHT: u32 = 240;

    pub const DEFAULT_SIDEBAR_WIDTH: u32 = 240;
    pub const DEFAULT_PANEL_HEIGHT: u32 = 192;
}

pub mod errors {
    // Error Codes
    pub const TAB_NOT_FOUND: &str = "TAB_NOT_FOUND";
    pub const DUPLICATE_TAB: &str = "DUPLICATE_TAB";
    pub const EMPTY_NAME: &str = "EMPTY_NAME";
    pub const RENAME_CONFLICT: &str = "RENAME_CONFLICT";
    pub const SAVE_FAILED: &str = "SAVE_FAILED";
    pub const NO_ACTIVE_TAB: &str = "NO_ACTIVE_TAB";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";

    // Error Messages
    pub const MSG_NO_ACTIVE_TAB: &str = "No active tab";
    pub const MSG_SAVE_FAILED: &str = "Write failed; buffer kept in memory";
    pub const MSG_RENAME_CONFLICT: &str = "A tab with that name is already open";
}

pub mod notifications {
    // Status-line TTLs per notification kind (seconds)
    pub const SUCCESS_TTL_SECS: u64 = 3;
    pub const INFO_TTL_SECS: u64 = 5;
    pub const WARNING_TTL_SECS: u64 = 8;
    pub const ERROR_TTL_SECS: u64 = 10;
}

pub mod telemetry {
    /// Seconds between performance samples
    pub const SAMPLE_INTERVAL_SECS: u64 = 5;
}

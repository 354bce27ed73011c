//! Layout manager
//! Pane visibility, pane sizes, and drag-to-resize sessions
//!
//! ## layout/ Invariants
//!
//! - Pane sizes never go negative and never exceed the viewport bound.
//! - At most one drag session is active at a time.
//! - Global listeners are registered on press and deregistered on release,
//!   through a single exit path, so repeated drags never accumulate them.
//! - Visibility toggles are independent of the resize state machine.

use crate::constants::panes::{
    DEFAULT_PANEL_HEIGHT, DEFAULT_SIDEBAR_WIDTH, MIN_EDITOR_HEIGHT, MIN_EDITOR_WIDTH,
    MIN_PANEL_HEIGHT, MIN_SIDEBAR_WIDTH,
};

/// A resizable pane with a drag handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Sidebar,
    Panel,
}

/// Resize state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Resizing(Pane),
}

/// Host viewport dimensions (px)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// Pane geometry and visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub sidebar_width: u32,
    pub panel_height: u32,
    pub sidebar_visible: bool,
    pub panel_visible: bool,
    pub fullscreen: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        LayoutState {
            sidebar_width: DEFAULT_SIDEBAR_WIDTH,
            panel_height: DEFAULT_PANEL_HEIGHT,
            sidebar_visible: true,
            panel_visible: true,
            fullscreen: false,
        }
    }
}

/// Owns the layout state and the drag session lifecycle
pub struct LayoutManager {
    state: LayoutState,
    drag: DragState,
    viewport: ViewportSize,
    /// Count of attached global pointer listeners (move + up per session)
    registered_listeners: usize,
}

impl LayoutManager {
    pub fn new(viewport: ViewportSize) -> Self {
        let mut manager = Self {
            state: LayoutState::default(),
            drag: DragState::Idle,
            viewport,
            registered_listeners: 0,
        };
        manager.clamp_sizes();
        manager
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Number of currently attached global listeners; zero outside a
    /// drag session
    pub fn registered_listeners(&self) -> usize {
        self.registered_listeners
    }

    /// Pointer-down on a pane's resize handle. Returns false if a session
    /// is already active; only one session may run at a time.
    pub fn begin_drag(&mut self, pane: Pane) -> bool {
        if self.drag != DragState::Idle {
            return false;
        }
        self.drag = DragState::Resizing(pane);
        // Global move + up listeners attach exactly once per session
        self.registered_listeners += 2;
        true
    }

    /// Pointer-move while a session is active; ignored otherwise.
    /// The sidebar tracks pointer x; the panel tracks the distance from
    /// the pointer to the bottom of the viewport.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        let pane = match self.drag {
            DragState::Resizing(pane) => pane,
            DragState::Idle => return,
        };
        match pane {
            Pane::Sidebar => {
                let width = x.max(0) as u32;
                self.state.sidebar_width = clamp_sidebar(width, self.viewport);
            }
            Pane::Panel => {
                let height = (self.viewport.height as i32 - y).max(0) as u32;
                self.state.panel_height = clamp_panel(height, self.viewport);
            }
        }
    }

    /// Pointer-up: the single exit path for a drag session, covering both
    /// normal release and abnormal termination. No-op when idle.
    pub fn end_drag(&mut self) {
        if self.drag == DragState::Idle {
            return;
        }
        self.drag = DragState::Idle;
        self.registered_listeners = self.registered_listeners.saturating_sub(2);
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.sidebar_visible = !self.state.sidebar_visible;
    }

    pub fn toggle_panel(&mut self) {
        self.state.panel_visible = !self.state.panel_visible;
    }

    /// Fullscreen changes window chrome only; stored pane sizes are kept
    pub fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
    }

    /// The pane whose resize handle sits under the pointer, if any.
    /// Handles are a few px wide on the sidebar's right edge and the
    /// panel's top edge; hidden panes expose no handle.
    pub fn handle_at(&self, x: i32, y: i32) -> Option<Pane> {
        const GRIP: i32 = 3;
        if self.state.sidebar_visible {
            let edge = self.state.sidebar_width as i32;
            if (x - edge).abs() <= GRIP {
                return Some(Pane::Sidebar);
            }
        }
        if self.state.panel_visible {
            let edge = self.viewport.height as i32 - self.state.panel_height as i32;
            if (y - edge).abs() <= GRIP {
                return Some(Pane::Panel);
            }
        }
        None
    }

    /// Viewport resize re-clamps stored sizes against the new bounds
    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
        self.clamp_sizes();
    }

    fn clamp_sizes(&mut self) {
        self.state.sidebar_width = clamp_sidebar(self.state.sidebar_width, self.viewport);
        self.state.panel_height = clamp_panel(self.state.panel_height, self.viewport);
    }
}

fn clamp_sidebar(width: u32, viewport: ViewportSize) -> u32 {
    let upper = viewport
        .width
        .saturating_sub(MIN_EDITOR_WIDTH)
        .max(MIN_SIDEBAR_WIDTH);
    width.clamp(MIN_SIDEBAR_WIDTH, upper)
}

fn clamp_panel(height: u32, viewport: ViewportSize) -> u32 {
    let upper = viewport
        .height
        .saturating_sub(MIN_EDITOR_HEIGHT)
        .max(MIN_PANEL_HEIGHT);
    height.clamp(MIN_PANEL_HEIGHT, upper)
}

use super::*;
use crate::host::{BufferWidget, SessionFs};
use crate::layout::{DragState, Pane};

fn shell() -> Shell {
    Shell::new(ViewportSize {
        width: 1280,
        height: 800,
    })
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::NONE,
    }
}

#[test]
fn test_open_loads_widget_buffer() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("index.html", "<h1>hi</h1>", &mut widget);
    assert_eq!(widget.get_value(), "<h1>hi</h1>");
    assert_eq!(shell.workspace.active_id(), Some("index.html"));
}

#[test]
fn test_tab_switch_stashes_outgoing_edits() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("a.html", "aaa", &mut widget);
    shell.open_file("b.html", "bbb", &mut widget);
    shell.select_tab("a.html", &mut widget);
    assert_eq!(widget.get_value(), "aaa");

    // Edit a.html, switch away, switch back: the edit survives
    widget.set_value("aaa edited");
    shell.select_tab("b.html", &mut widget);
    assert_eq!(widget.get_value(), "bbb");
    shell.select_tab("a.html", &mut widget);
    assert_eq!(widget.get_value(), "aaa edited");
    assert!(shell.workspace.get("a.html").unwrap().is_dirty);
}

#[test]
fn test_create_prompts_when_unnamed() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    assert!(!shell.create_file(None, &mut widget));
    assert!(shell.workspace.is_empty());

    assert!(shell.create_file(Some("new.css"), &mut widget));
    assert_eq!(shell.workspace.active_id(), Some("new.css"));
    assert_eq!(widget.get_value(), "");
}

#[test]
fn test_save_success_and_failure_surface_status() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();
    let mut fs = SessionFs::new();

    shell.open_file("app.js", "", &mut widget);
    widget.set_value("let x = 1;");
    shell.buffer_edited(&widget);
    assert!(shell.workspace.active_tab().unwrap().is_dirty);

    shell.save(&mut widget, &mut fs);
    assert!(!shell.workspace.active_tab().unwrap().is_dirty);
    assert_eq!(fs.read_file("app.js"), Some("let x = 1;"));
    assert_eq!(widget.status(), "Saved app.js");

    struct FailingFs;
    impl crate::host::HostFs for FailingFs {
        fn write_file(&mut self, _: &str, _: &str) -> crate::host::DialogResult {
            crate::host::DialogResult::Failed
        }
        fn create_folder(&mut self, _: &str) -> crate::host::DialogResult {
            crate::host::DialogResult::Failed
        }
        fn open_file_browser(&mut self) -> crate::host::DialogResult {
            crate::host::DialogResult::Failed
        }
    }

    widget.set_value("let x = 2;");
    shell.buffer_edited(&widget);
    shell.save(&mut widget, &mut FailingFs);
    assert!(shell.workspace.active_tab().unwrap().is_dirty);
    assert_eq!(widget.status(), crate::constants::errors::MSG_SAVE_FAILED);
}

#[test]
fn test_close_fallback_swaps_buffer() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("a.html", "aaa", &mut widget);
    shell.open_file("b.html", "bbb", &mut widget);

    shell.close_tab("b.html", &mut widget);
    assert_eq!(widget.get_value(), "aaa");

    shell.close_tab("a.html", &mut widget);
    assert_eq!(widget.get_value(), "");
}

#[test]
fn test_delete_flow_through_shell() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("a.html", "aaa", &mut widget);
    shell.open_file("b.html", "bbb", &mut widget);

    shell.request_delete("b.html", &mut widget);
    assert_eq!(shell.workspace.pending_delete(), Some("b.html"));
    shell.confirm_delete(&mut widget);
    assert_eq!(shell.workspace.tab_count(), 1);
    assert_eq!(widget.get_value(), "aaa");
}

#[test]
fn test_completions_use_active_tab_language() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("index.html", "", &mut widget);
    assert!(shell
        .completions("<di", 3, 0)
        .iter()
        .any(|s| s.label == "div"));

    shell.open_file("app.js", "", &mut widget);
    assert!(shell.completions("<di", 3, 0).iter().all(|s| s.label != "div"));
}

#[test]
fn test_completion_results_are_capped() {
    let viewport = ViewportSize {
        width: 1280,
        height: 800,
    };
    let mut shell = Shell::with_options(
        viewport,
        ShellOptions {
            completion_max_results: 3,
            tab_key_override: true,
        },
    );
    let mut widget = BufferWidget::new();
    shell.open_file("index.html", "", &mut widget);

    assert!(shell.completions("<", 1, 0).len() <= 3);
}

#[test]
fn test_mouse_drag_session_round_trip() {
    let mut shell = shell();
    let edge = shell.layout.state().sidebar_width as u16;

    shell.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), edge, 300));
    assert_eq!(shell.layout.drag_state(), DragState::Resizing(Pane::Sidebar));

    shell.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 400, 300));
    assert_eq!(shell.layout.state().sidebar_width, 400);

    shell.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 400, 300));
    assert_eq!(shell.layout.drag_state(), DragState::Idle);
    assert_eq!(shell.layout.registered_listeners(), 0);
}

#[test]
fn test_mouse_down_off_handle_starts_nothing() {
    let mut shell = shell();
    shell.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 600, 10));
    assert_eq!(shell.layout.drag_state(), DragState::Idle);
}

#[test]
fn test_tab_bar_marks_active_and_dirty() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    shell.open_file("a.html", "", &mut widget);
    shell.open_file("b.html", "", &mut widget);
    widget.set_value("edited");
    shell.buffer_edited(&widget);

    let bar = shell.tab_bar(120);
    assert!(bar.contains(" a.html "));
    assert!(bar.contains("[b.html*]"));
}

#[test]
fn test_tab_bar_respects_column_budget() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();
    for i in 0..20 {
        shell.open_file(&format!("file-{:02}.html", i), "", &mut widget);
    }
    let bar = shell.tab_bar(40);
    assert!(bar.chars().count() <= 40);
}

#[test]
fn test_status_line_reports_language_and_notification() {
    let mut shell = shell();
    let mut widget = BufferWidget::new();

    assert!(shell.status_line().contains(crate::constants::ui::NO_NAME));

    shell.open_file("main.ts", "", &mut widget);
    assert_eq!(shell.status_line(), "main.ts [TypeScript]");

    shell.errors.notifications_mut().info("hello");
    assert!(shell.status_line().ends_with("| hello"));
}

#[test]
fn test_tab_key_override_can_be_disabled() {
    let viewport = ViewportSize {
        width: 1280,
        height: 800,
    };
    let mut shell = Shell::with_options(
        viewport,
        ShellOptions {
            completion_max_results: 50,
            tab_key_override: false,
        },
    );
    let mut widget = BufferWidget::new();

    assert!(!shell.handle_tab_key("!", &mut widget));
    assert_eq!(widget.tabs_inserted(), 1);
    assert_eq!(widget.suggestion_openings(), 0);
}

#[test]
fn test_tick_samples_telemetry() {
    let mut shell = shell();
    shell.tick(Instant::now());
    assert!(shell.telemetry.latest().is_some());
}

//! Loft - an embedded multi-file IDE shell
//! Main entry point: wires the shell to a crossterm-driven host loop

use anyhow::Context;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseEvent,
};
use crossterm::{cursor, execute, terminal};
use std::io::Write;
use std::time::{Duration, Instant};

use loft::editor::Shell;
use loft::host::{BufferWidget, EditorWidget, SessionFs};
use loft::layout::ViewportSize;

/// Approximate cell-to-px scaling for the layout's pixel geometry
const CELL_WIDTH: u16 = 8;
const CELL_HEIGHT: u16 = 16;

fn main() -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("query terminal size")?;
    let mut shell = Shell::new(viewport_for(cols, rows));
    let mut widget = BufferWidget::new();
    let mut fs = SessionFs::new();

    shell.open_file(
        "index.html",
        "<!DOCTYPE html>\n<html>\n<body>\n</body>\n</html>\n",
        &mut widget,
    );
    shell.open_file("styles.css", "body {\n}\n", &mut widget);
    shell.open_file("app.js", "", &mut widget);

    terminal::enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnableMouseCapture, cursor::Hide).context("init terminal")?;

    let result = run(&mut shell, &mut widget, &mut fs);

    execute!(stdout, DisableMouseCapture, cursor::Show).ok();
    terminal::disable_raw_mode().ok();
    result
}

fn run(shell: &mut Shell, widget: &mut BufferWidget, fs: &mut SessionFs) -> anyhow::Result<()> {
    loop {
        if crossterm::event::poll(Duration::from_millis(250)).context("poll events")? {
            match crossterm::event::read().context("read event")? {
                Event::Key(key) => {
                    if !handle_key(shell, widget, fs, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => shell.on_mouse(scale_mouse(mouse)),
                Event::Resize(cols, rows) => shell.layout.set_viewport(viewport_for(cols, rows)),
                _ => {}
            }
        }
        shell.tick(Instant::now());
        render(shell)?;
    }
}

/// Returns false when the shell should quit
fn handle_key(
    shell: &mut Shell,
    widget: &mut BufferWidget,
    fs: &mut SessionFs,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return false,
        KeyCode::Char('s') => shell.save(widget, fs),
        KeyCode::Char('b') => shell.layout.toggle_sidebar(),
        KeyCode::Char('j') => shell.layout.toggle_panel(),
        KeyCode::Char('f') => shell.layout.toggle_fullscreen(),
        KeyCode::Tab => {
            let line = widget.get_value().lines().last().unwrap_or("").to_string();
            shell.handle_tab_key(&line, widget);
        }
        KeyCode::Left | KeyCode::Right => cycle_tab(shell, widget, key.code == KeyCode::Right),
        _ => {}
    }
    true
}

fn cycle_tab(shell: &mut Shell, widget: &mut BufferWidget, forward: bool) {
    let count = shell.workspace.tab_count();
    let current = match shell.workspace.active_index() {
        Some(idx) => idx,
        None => return,
    };
    let next = if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    };
    let id = shell.workspace.tabs()[next].id.clone();
    shell.select_tab(&id, widget);
}

fn render(shell: &Shell) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("query terminal size")?;
    let mut stdout = std::io::stdout();

    execute!(
        stdout,
        cursor::MoveTo(0, 0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )
    .context("draw tab bar")?;
    write!(stdout, "{}", shell.tab_bar(cols as usize))?;

    if shell.layout.state().panel_visible {
        let lines = shell.git.panel_lines();
        let first_row = rows.saturating_sub(1 + lines.len() as u16);
        for (i, line) in lines.iter().enumerate() {
            execute!(
                stdout,
                cursor::MoveTo(0, first_row + i as u16),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )
            .context("draw git panel")?;
            write!(stdout, "{}", line)?;
        }
    }

    execute!(
        stdout,
        cursor::MoveTo(0, rows.saturating_sub(1)),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )
    .context("draw status line")?;
    let telemetry = match shell.telemetry.latest() {
        Some(sample) => format!(
            " | {:.1} MB, {:.1} ms",
            sample.memory_usage_mb, sample.editor_latency_ms
        ),
        None => String::new(),
    };
    write!(
        stdout,
        "{} | {}{}",
        shell.status_line(),
        shell.git.summary(),
        telemetry
    )?;
    stdout.flush().context("flush frame")?;
    Ok(())
}

fn viewport_for(cols: u16, rows: u16) -> ViewportSize {
    ViewportSize {
        width: cols.saturating_mul(CELL_WIDTH) as u32,
        height: rows.saturating_mul(CELL_HEIGHT) as u32,
    }
}

fn scale_mouse(mut mouse: MouseEvent) -> MouseEvent {
    mouse.column = mouse.column.saturating_mul(CELL_WIDTH);
    mouse.row = mouse.row.saturating_mul(CELL_HEIGHT);
    mouse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_scaling() {
        let viewport = viewport_for(100, 40);
        assert_eq!(viewport.width, 800);
        assert_eq!(viewport.height, 640);
    }

    #[test]
    fn test_viewport_scaling_saturates_on_huge_terminals() {
        let viewport = viewport_for(u16::MAX, u16::MAX);
        assert_eq!(viewport.width, u16::MAX as u32);
        assert_eq!(viewport.height, u16::MAX as u32);
    }

    #[test]
    fn test_mouse_scaling_saturates() {
        let mouse = scale_mouse(MouseEvent {
            kind: crossterm::event::MouseEventKind::Moved,
            column: u16::MAX,
            row: u16::MAX,
            modifiers: crossterm::event::KeyModifiers::NONE,
        });
        assert_eq!(mouse.column, u16::MAX);
        assert_eq!(mouse.row, u16::MAX);
    }
}

use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use boggle_core::BOARD_WIDTH;

// Grid design:
// +---+---+---+---+
// | A | B | - | D |
// +---+---+---+---+
const CELL_WIDTH: u16 = 4;
const GRID_WIDTH: u16 = CELL_WIDTH * BOARD_WIDTH as u16 + 1;
const GRID_HEIGHT: u16 = 2 * BOARD_WIDTH as u16 + 1;
const PANEL_WIDTH: u16 = 24;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(
        stdout,
        Hide,
        SetBackgroundColor(app.theme.bg),
        Clear(ClearType::All)
    )?;

    let total_width = GRID_WIDTH + 4 + PANEL_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > GRID_HEIGHT + 10 { 2 } else { 1 };

    execute!(
        stdout,
        MoveTo(start_x, start_y),
        SetForegroundColor(app.theme.header),
        Print("BOGGLE")
    )?;

    let grid_y = start_y + 2;
    render_grid(stdout, app, start_x, grid_y)?;
    render_results(stdout, app, start_x + GRID_WIDTH + 4, grid_y, term_height)?;

    let status_y = grid_y + GRID_HEIGHT + 1;
    execute!(
        stdout,
        MoveTo(start_x, status_y),
        SetForegroundColor(app.theme.info),
        Print(app.status_line())
    )?;
    render_controls(stdout, app, start_x, status_y + 2)?;

    if let Some(msg) = app.view().notification() {
        render_notification(stdout, app, msg, term_width, term_height)?;
    }

    execute!(stdout, Show, MoveTo(0, term_height.saturating_sub(1)))?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let border = format!("+{}", "---+".repeat(BOARD_WIDTH));

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.border),
        Print(&border)
    )?;

    for (row, cells) in app.view().cells.iter().enumerate() {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y), SetForegroundColor(theme.border), Print("|"))?;

        for (col, &c) in cells.iter().enumerate() {
            let selected = app.cursor.row == row && app.cursor.col == col;
            let bg = if selected { theme.selected_bg } else { theme.bg };
            let fg = if c == boggle_core::EMPTY_CHAR { theme.empty } else { theme.letter };

            execute!(
                stdout,
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(format!(" {} ", c)),
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
        }

        execute!(stdout, MoveTo(x, cell_y + 1), Print(&border))?;
    }

    Ok(())
}

fn render_results(
    stdout: &mut io::Stdout,
    app: &App,
    x: u16,
    y: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let Some(ref panel) = app.view().results else {
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.info),
            Print("Press Enter to solve")
        )?;
        return Ok(());
    };

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.header),
        Print(&panel.header)
    )?;

    // Keep the list on screen; words past the bottom are summarized
    let available = term_height.saturating_sub(y + 3) as usize;
    let shown = panel.entries.len().min(available);
    for (i, word) in panel.entries.iter().take(shown).enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + 1 + i as u16),
            SetForegroundColor(theme.fg),
            Print(word)
        )?;
    }
    if shown < panel.entries.len() {
        execute!(
            stdout,
            MoveTo(x, y + 1 + shown as u16),
            SetForegroundColor(theme.info),
            Print(format!("... {} more", panel.entries.len() - shown))
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let controls = [
        ("A-Z", "set cell"),
        ("Bksp", "clear"),
        ("Arrows", "move"),
        ("Ctrl+R", "randomize"),
        ("Enter", "solve"),
        ("Esc", "quit"),
    ];

    execute!(stdout, MoveTo(x, y))?;
    for (key, action) in controls {
        execute!(
            stdout,
            SetForegroundColor(app.theme.key),
            Print(key),
            SetForegroundColor(app.theme.info),
            Print(format!(" {}  ", action))
        )?;
    }
    Ok(())
}

fn render_notification(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let queued = app.view().queued_notifications();
    let hint = if queued > 0 {
        format!("Press Enter to continue ({} more)", queued)
    } else {
        "Press Enter to continue".to_string()
    };

    // Two columns of padding each side, a blank row above, hint and blank below
    let lines = notification_lines(
        msg,
        usize::from(term_width).saturating_sub(4).max(1),
        usize::from(term_height).saturating_sub(4).max(1),
    );
    let text_width = lines
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(hint.chars().count()))
        .max()
        .unwrap_or(0);
    let width = u16::try_from(text_width.saturating_add(4))
        .unwrap_or(u16::MAX)
        .min(term_width);
    let height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .min(term_height);
    let x = term_width.saturating_sub(width) / 2;
    let y = term_height.saturating_sub(height) / 2;
    let blank = " ".repeat(usize::from(width));

    execute!(stdout, SetBackgroundColor(app.theme.selected_bg))?;
    for dy in 0..height {
        execute!(stdout, MoveTo(x, y.saturating_add(dy)), Print(&blank))?;
    }
    execute!(stdout, SetForegroundColor(app.theme.error))?;
    for (dy, line) in (1u16..).zip(&lines) {
        execute!(stdout, MoveTo(x.saturating_add(2), y.saturating_add(dy)), Print(line))?;
    }
    execute!(
        stdout,
        MoveTo(x.saturating_add(2), y.saturating_add(height).saturating_sub(2)),
        SetForegroundColor(app.theme.info),
        Print(&hint),
        SetBackgroundColor(app.theme.bg)
    )?;
    Ok(())
}

/// Split a message into non-blank lines, each cut to `max_chars` characters,
/// keeping at most `max_lines` of them
fn notification_lines(msg: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    msg.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .take(max_lines)
        .map(|line| line.chars().take(max_chars).collect())
        .collect()
}

//! Node-chain rendering for one tracked list
//!
//! A list is drawn as a row of boxed nodes joined by arrows, followed by a
//! terminator slot for the `null` successor of the last node. Each node
//! shows up to three content lines: the element's display text split on
//! `:`, clipped to the cell width. Below the chain sit the cursor pointer
//! and the caller's annotation text.
//!
//! Border colors layer in a fixed precedence: a persistent mark wins over
//! the last command's highlight, which wins over the cursor outline, which
//! wins over the green of nodes freshly arrived through a CONCAT.

use std::fmt;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::animator::ListScene;
use crate::command::Highlight;
use crate::ui::theme::DEFAULT_THEME;

/// Rows a list pane occupies: five box rows, pointer, caption, two borders.
pub const PANE_HEIGHT: u16 = 9;

/// Content columns inside a node box.
const CELL_WIDTH: usize = 9;

/// Left margin holding the entry arrow into the first node.
const MARGIN: usize = 4;

const LINK: &str = "──▶";

/// Border color for the node at `idx` (`idx == len` is the terminator
/// slot), or `None` for the resting outline.
fn node_color<T>(scene: &ListScene<'_, T>, idx: usize) -> Option<Color> {
    let len = scene.mirror.len();
    let cursor_col = scene.cursor.map_or(len, |i| i.min(len));
    let is_node = idx < len;

    if is_node && scene.mark == Some(idx) {
        return Some(DEFAULT_THEME.mark);
    }
    match scene.highlight {
        Highlight::Append if is_node && idx + 1 == len => return Some(DEFAULT_THEME.fresh),
        Highlight::Insert
            if is_node && scene.cursor.and_then(|c| c.checked_sub(1)) == Some(idx) =>
        {
            return Some(DEFAULT_THEME.fresh)
        }
        Highlight::GetContent | Highlight::SetContent if idx == cursor_col => {
            return Some(DEFAULT_THEME.access)
        }
        _ => {}
    }
    if idx == cursor_col {
        return Some(DEFAULT_THEME.cursor);
    }
    match scene.fresh_from {
        Some(from) if is_node && idx >= from => Some(DEFAULT_THEME.fresh),
        _ => None,
    }
}

/// Split the display text on `:` into three fixed-width cell lines.
fn content_cells(text: &str) -> [String; 3] {
    let mut parts = text.split(':');
    [(); 3].map(|_| {
        let part = parts.next().unwrap_or("");
        let clipped: String = part.chars().take(CELL_WIDTH).collect();
        format!("{:<width$}", clipped, width = CELL_WIDTH)
    })
}

pub fn render_list_pane<T: fmt::Display>(frame: &mut Frame, area: Rect, scene: &ListScene<'_, T>) {
    let theme = &DEFAULT_THEME;
    let len = scene.mirror.len();
    let cursor_col = scene.cursor.map_or(len, |i| i.min(len));
    let text_style = Style::default().fg(theme.fg);

    // five rows per box: border, three content lines, border; the middle
    // content line carries the arrows
    let mut rows: Vec<Vec<Span>> = vec![
        vec![Span::raw(" ".repeat(MARGIN))],
        vec![Span::raw(" ".repeat(MARGIN))],
        vec![Span::styled("──▶ ", text_style)],
        vec![Span::raw(" ".repeat(MARGIN))],
        vec![Span::raw(" ".repeat(MARGIN))],
    ];

    for (idx, value) in scene.mirror.iter().enumerate() {
        let border = Style::default().fg(node_color(scene, idx).unwrap_or(theme.node_border));
        let cells = content_cells(&value.to_string());
        rows[0].push(Span::styled(format!("┌{}┐", "─".repeat(CELL_WIDTH)), border));
        for (r, cell) in cells.into_iter().enumerate() {
            rows[r + 1].push(Span::styled("│", border));
            rows[r + 1].push(Span::styled(cell, text_style));
            rows[r + 1].push(Span::styled("│", border));
        }
        rows[4].push(Span::styled(format!("└{}┘", "─".repeat(CELL_WIDTH)), border));

        for row in [0, 1, 3, 4] {
            rows[row].push(Span::raw("   "));
        }
        rows[2].push(Span::styled(LINK, text_style));
    }

    // terminator slot: plain "null" text, boxed when the cursor (or an
    // access highlight at the past-the-end position) sits on it
    match node_color(scene, len) {
        Some(color) => {
            let border = Style::default().fg(color);
            rows[0].push(Span::styled("┌──────┐", border));
            rows[1].push(Span::styled("│      │", border));
            rows[2].push(Span::styled("│", border));
            rows[2].push(Span::styled(" null ", Style::default().fg(theme.comment)));
            rows[2].push(Span::styled("│", border));
            rows[3].push(Span::styled("│      │", border));
            rows[4].push(Span::styled("└──────┘", border));
        }
        None => {
            rows[2].push(Span::styled("null", Style::default().fg(theme.comment)));
        }
    }

    let pointer_x = if cursor_col < len {
        MARGIN + cursor_col * (CELL_WIDTH + 5) + (CELL_WIDTH + 2) / 2
    } else {
        MARGIN + len * (CELL_WIDTH + 5) + 3
    };
    let pointer_row = vec![
        Span::raw(" ".repeat(pointer_x)),
        Span::styled("▲", Style::default().fg(theme.cursor)),
    ];
    let caption_row = vec![
        Span::raw("  "),
        Span::styled(scene.caption, Style::default().fg(theme.caption)),
    ];

    let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    lines.push(Line::from(pointer_row));
    lines.push(Line::from(caption_row));

    let title = scene.names.join(", ");
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.pane_border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.pane_title),
        ));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

//! Terminal rendering.
//!
//! One screen, top to bottom:
//! - toolbar: add button and search input
//! - grid: the current page of the filtered list
//! - pager line
//! - status line: last store failure, or key hints
//!
//! The grid is laid out cell by cell so every clickable cell can be
//! registered in the frame's [`HitAreaRegistry`](interaction::HitAreaRegistry).

pub mod element_ids;
pub mod input;
pub mod interaction;
pub mod table;
pub mod theme;

pub use input::LineInput;
pub use table::{EditBuffer, EditField, RowClass, TodoTable, PAGE_SIZE};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, Focus};
use crate::models::ToDoItem;
use interaction::ClickAction;

/// Creation date column format.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const ADD_LABEL: &str = " + Add ";
const EDIT_LABEL: &str = "Edit";
const DELETE_LABEL: &str = "Delete";
const SAVE_LABEL: &str = "Save";
const CANCEL_LABEL: &str = "Cancel";
const PREV_LABEL: &str = "< Prev";
const NEXT_LABEL: &str = "Next >";
const CURSOR: &str = "▏";

// ============================================================================
// Columns
// ============================================================================

/// A grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Done,
    Title,
    Description,
    CreatedOn,
    Actions,
}

impl Column {
    pub fn title(self) -> &'static str {
        match self {
            Column::Done => "Done",
            Column::Title => "Title",
            Column::Description => "Description",
            Column::CreatedOn => "Created On",
            Column::Actions => "Actions",
        }
    }

    fn constraint(self) -> Constraint {
        match self {
            Column::Done => Constraint::Length(4),
            Column::Title => Constraint::Fill(2),
            Column::Description => Constraint::Fill(3),
            Column::CreatedOn => Constraint::Length(16),
            Column::Actions => Constraint::Length(13),
        }
    }
}

/// Visible columns, left to right.
pub fn visible_columns(show_creation_date: bool) -> Vec<Column> {
    let mut columns = vec![Column::Done, Column::Title, Column::Description];
    if show_creation_date {
        columns.push(Column::CreatedOn);
    }
    columns.push(Column::Actions);
    columns
}

// ============================================================================
// Main rendering
// ============================================================================

/// Draw the whole screen and rebuild the app's hit areas.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let [toolbar, grid, pager, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_toolbar(frame, toolbar, app);
    render_grid(frame, grid, app);
    render_pager(frame, pager, app);
    render_status(frame, status, app);

    app.hit_areas.refresh_hover();
    if let Some(area) = app.hit_areas.hovered() {
        if let Some(style) = area.hover_style {
            frame.buffer_mut().set_style(area.rect, style);
        }
    }
}

fn render_toolbar(frame: &mut Frame, area: Rect, app: &mut App) {
    let [add, search] = Layout::horizontal([
        Constraint::Length(ADD_LABEL.width() as u16 + 2),
        Constraint::Min(10),
    ])
    .spacing(1)
    .areas(area);

    // Disabled while a draft is in flight
    let enabled = !app.controller.is_adding();
    let add_style = if enabled {
        Style::default()
            .fg(theme::COLOR_BUTTON)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(ADD_LABEL)
            .style(add_style)
            .block(Block::bordered().border_style(add_style)),
        add,
    );
    if enabled {
        app.hit_areas
            .register(add, ClickAction::AddTodo, Some(theme::hover_style()));
    }

    let focused = app.focus == Focus::Search;
    let border = if focused {
        theme::COLOR_ACCENT
    } else {
        theme::COLOR_BORDER
    };
    let block = Block::bordered()
        .title(" Search ")
        .border_style(Style::default().fg(border));
    let inner_width = block.inner(search).width as usize;
    let term = app.controller.search_term();
    let line = if focused {
        input_line(&app.search, inner_width, Style::default())
    } else if term.is_empty() {
        Line::from(Span::styled(
            "Press / to search",
            Style::default().fg(theme::COLOR_DIM),
        ))
    } else {
        Line::from(truncate(term, inner_width))
    };
    frame.render_widget(Paragraph::new(line).block(block), search);
    app.hit_areas.register(search, ClickAction::FocusSearch, None);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    let table = app.controller.view();
    let block = Block::bordered()
        .title(format!(" Todos ({}) ", table.rows().len()))
        .border_style(Style::default().fg(theme::COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let columns = visible_columns(table.show_creation_date());
    let constraints: Vec<Constraint> = columns.iter().map(|c| c.constraint()).collect();
    let layout = Layout::horizontal(constraints).spacing(1);

    // Header
    let header = Rect { height: 1, ..inner };
    let cells = layout.split(header);
    for (column, cell) in columns.iter().zip(cells.iter()) {
        frame.render_widget(
            Paragraph::new(truncate(column.title(), cell.width as usize)).style(
                Style::default()
                    .fg(theme::COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            *cell,
        );
        app.hit_areas
            .register(*cell, ClickAction::ColumnHeader(column.title()), None);
    }

    let body_height = inner.height.saturating_sub(1) as usize;
    let page_rows = table.page_rows();

    if page_rows.is_empty() {
        if body_height > 0 {
            let message = if app.controller.search_term().trim().is_empty() {
                "No todos yet. Press 'a' to add one.".to_string()
            } else {
                format!("No todos match '{}'.", app.controller.search_term())
            };
            let row = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            frame.render_widget(
                Paragraph::new(truncate(&message, row.width as usize))
                    .style(Style::default().fg(theme::COLOR_DIM)),
                row,
            );
        }
        return;
    }

    let offset = table.page_offset();
    let selected = table.selected_index();
    let rows: Vec<(usize, ToDoItem)> = page_rows
        .iter()
        .take(body_height)
        .cloned()
        .enumerate()
        .collect();

    for (i, item) in rows {
        let row = Rect {
            y: inner.y + 1 + i as u16,
            height: 1,
            ..inner
        };
        let is_selected = selected == Some(offset + i);
        render_row(frame, row, &layout, &columns, &item, is_selected, app);
    }
}

fn render_row(
    frame: &mut Frame,
    row: Rect,
    layout: &Layout,
    columns: &[Column],
    item: &ToDoItem,
    is_selected: bool,
    app: &mut App,
) {
    let edit = app
        .controller
        .view()
        .editing()
        .filter(|edit| edit.id() == item.id)
        .cloned();

    let mut row_style = RowClass::of(item).style();
    if let Some(bg) = table::row_background(is_selected, edit.is_some()) {
        row_style = row_style.bg(bg);
        frame.buffer_mut().set_style(row, Style::default().bg(bg));
    }
    app.hit_areas.register(row, ClickAction::SelectRow(item.id), None);

    let cells = layout.split(row);
    for (column, cell) in columns.iter().zip(cells.iter()) {
        let width = cell.width as usize;
        match column {
            Column::Done => {
                let mark = if item.is_completed { "[x]" } else { "[ ]" };
                frame.render_widget(Paragraph::new(mark).style(row_style), *cell);
                app.hit_areas.register(
                    *cell,
                    ClickAction::ToggleCompleted(item.id),
                    Some(theme::hover_style()),
                );
            }
            Column::Title | Column::Description => {
                let (value, field, action) = if *column == Column::Title {
                    (&item.title, EditField::Title, ClickAction::FocusTitle)
                } else {
                    (&item.description, EditField::Description, ClickAction::FocusDescription)
                };
                match &edit {
                    Some(edit) => {
                        let input = edit.input(field);
                        let style = Style::default().add_modifier(Modifier::UNDERLINED);
                        let line = if edit.field == field && app.focus == Focus::Grid {
                            input_line(input, width, style)
                        } else {
                            Line::from(Span::styled(truncate(input.value(), width), style))
                        };
                        frame.render_widget(Paragraph::new(line), *cell);
                        app.hit_areas.register(*cell, action, None);
                    }
                    None => {
                        frame.render_widget(
                            Paragraph::new(truncate(value, width)).style(row_style),
                            *cell,
                        );
                    }
                }
            }
            Column::CreatedOn => {
                let date = item.creation_date.format(DATE_FORMAT).to_string();
                frame.render_widget(
                    Paragraph::new(truncate(&date, width))
                        .style(row_style.fg(theme::COLOR_DIM)),
                    *cell,
                );
            }
            Column::Actions => {
                let (first, second) = if edit.is_some() {
                    (
                        (SAVE_LABEL, ClickAction::SaveTodo, theme::COLOR_SUCCESS),
                        (CANCEL_LABEL, ClickAction::CancelEdit, theme::COLOR_DIM),
                    )
                } else {
                    (
                        (EDIT_LABEL, ClickAction::EditTodo(item.id), theme::COLOR_BUTTON),
                        (DELETE_LABEL, ClickAction::DeleteTodo(item.id), theme::COLOR_DANGER),
                    )
                };
                let mut x = cell.x;
                for (label, action, color) in [first, second] {
                    let right = cell.x + cell.width;
                    let label_width = (label.width() as u16).min(right.saturating_sub(x));
                    if label_width == 0 {
                        break;
                    }
                    let rect = Rect::new(x, cell.y, label_width, 1);
                    frame.render_widget(
                        Paragraph::new(label).style(Style::default().fg(color)),
                        rect,
                    );
                    app.hit_areas
                        .register(rect, action, Some(theme::hover_style()));
                    x = x.saturating_add(label_width + 1);
                }
            }
        }
    }
}

fn render_pager(frame: &mut Frame, area: Rect, app: &mut App) {
    let table = app.controller.view();
    let page = table.page();
    let pages = table.page_count();
    let label = format!("  Page {}/{}  ", page + 1, pages);

    let enabled = |on: bool| {
        if on {
            Style::default().fg(theme::COLOR_BUTTON)
        } else {
            Style::default().fg(theme::COLOR_DIM)
        }
    };
    let has_prev = page > 0;
    let has_next = page + 1 < pages;
    let line = Line::from(vec![
        Span::styled(PREV_LABEL, enabled(has_prev)),
        Span::raw(label.clone()),
        Span::styled(NEXT_LABEL, enabled(has_next)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let prev_width = (PREV_LABEL.width() as u16).min(area.width);
    if has_prev {
        app.hit_areas.register(
            Rect { width: prev_width, ..area },
            ClickAction::PrevPage,
            Some(theme::hover_style()),
        );
    }
    let next_x = area.x + prev_width + label.width() as u16;
    if has_next && next_x < area.x + area.width {
        let width = (NEXT_LABEL.width() as u16).min(area.x + area.width - next_x);
        app.hit_areas.register(
            Rect::new(next_x, area.y, width, 1),
            ClickAction::NextPage,
            Some(theme::hover_style()),
        );
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.controller.notice() {
        Some(notice) => Line::from(vec![
            Span::styled(notice.message(), Style::default().fg(theme::COLOR_ERROR)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(theme::COLOR_DIM)),
        ]),
        None => Line::from(Span::styled(
            key_hints(app),
            Style::default().fg(theme::COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current mode.
pub fn key_hints(app: &App) -> &'static str {
    if app.focus == Focus::Search {
        "type to filter · Enter/Esc done"
    } else if app.is_editing() {
        "Tab switch field · Enter save · Esc cancel"
    } else {
        "a add · e edit · d delete · Space done · / search · [ ] page · q quit"
    }
}

// ============================================================================
// Text helpers
// ============================================================================

/// Clip `text` to `width` columns, ending in an ellipsis when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// The last `width` columns of `text`, so the end being typed stays visible.
fn fit_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}

/// An input with its cursor, scrolled so the cursor stays in view.
fn input_line(input: &LineInput, width: usize, style: Style) -> Line<'static> {
    let value = input.value();
    let split = value
        .char_indices()
        .nth(input.cursor())
        .map_or(value.len(), |(idx, _)| idx);
    let (before, rest) = value.split_at(split);
    let cursor_style = Style::default().fg(theme::COLOR_ACCENT);

    let mut chars = rest.chars();
    let Some(under) = chars.next() else {
        return Line::from(vec![
            Span::styled(fit_tail(before, width.saturating_sub(1)), style),
            Span::styled(CURSOR, cursor_style),
        ]);
    };

    let under_width = under.width().unwrap_or(0).max(1);
    let head = fit_tail(before, width.saturating_sub(under_width));
    let tail_width = width.saturating_sub(head.width() + under_width);
    Line::from(vec![
        Span::styled(head, style),
        Span::styled(under.to_string(), cursor_style.add_modifier(Modifier::REVERSED)),
        Span::styled(truncate(chars.as_str(), tail_width), style),
    ])
}

//! Terminal event mapping for the map viewer.

use citymap_core::Cell;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// What the event loop does in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Quit,
    /// Pointer moved to a terminal position; the view maps it to a cell.
    PointerMoved { x: u16, y: u16 },
    /// Left click at a terminal position.
    Select { x: u16, y: u16 },
    /// Step the hover cursor one cell with the keyboard.
    MoveCursor(Direction),
    /// Terminal resized; redraw only.
    Redraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Map one terminal event to a viewer action.
pub fn map_event(event: &Event) -> Option<ViewerAction> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        Event::Resize(_, _) => Some(ViewerAction::Redraw),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<ViewerAction> {
    if should_quit(key) {
        return Some(ViewerAction::Quit);
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ViewerAction::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(ViewerAction::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(ViewerAction::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(ViewerAction::MoveCursor(Direction::Right)),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<ViewerAction> {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(ViewerAction::PointerMoved {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::Down(MouseButton::Left) => Some(ViewerAction::Select {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}

/// Step the hover cursor one cell, clamped to a `cols` x `rows` grid.
pub fn step_cursor(cell: Cell, dir: Direction, cols: usize, rows: usize) -> Cell {
    match dir {
        Direction::Up => Cell::new(cell.col, cell.row.saturating_sub(1)),
        Direction::Down => Cell::new(cell.col, (cell.row + 1).min(rows.saturating_sub(1))),
        Direction::Left => Cell::new(cell.col.saturating_sub(1), cell.row),
        Direction::Right => Cell::new((cell.col + 1).min(cols.saturating_sub(1)), cell.row),
    }
}

/// Whether a key event should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

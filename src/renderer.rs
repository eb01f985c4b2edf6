use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SEGMENT, Theme};
use crate::game::{EndReason, GameState, Phase};
use crate::grid::{Cell, Grid};
use crate::loop_driver::LoopDriver;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns used per logical tile.
const TILE_WIDTH: u16 = 2;

/// Overlay shown above the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    GameOver(EndReason),
}

impl Screen {
    /// Derives the overlay from the driver and its engine.
    #[must_use]
    pub fn of(driver: &LoopDriver) -> Self {
        match driver.engine().state().phase {
            Phase::Idle => Self::Start,
            Phase::GameOver(reason) => Self::GameOver(reason),
            Phase::Running if driver.is_paused() => Self::Paused,
            Phase::Running => Self::Playing,
        }
    }

    /// Overlay for a frame drawn straight after a tick fired.
    #[must_use]
    pub fn after_tick(state: &GameState) -> Self {
        state.end_reason().map_or(Self::Playing, Self::GameOver)
    }
}

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, grid: Grid, screen: Screen, theme: &Theme) {
    let area = frame.area();
    let [board_row, hud_row] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let play_area = centered_board(board_row, grid);
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, grid, state.food, theme);
    render_snake(frame, inner, grid, state, theme);
    render_hud(frame, hud_row, state, theme);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, theme),
        Screen::Paused => render_pause_menu(frame, play_area),
        Screen::GameOver(reason) => render_game_over_menu(frame, play_area, state.score, reason),
        Screen::Playing => {}
    }
}

fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let text = format!("Score: {}   Length: {}", state.score, state.snake.len());
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.hud_score)),
        area,
    );
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, grid: Grid, food: Cell, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, grid, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food).bg(theme.play_bg));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, grid: Grid, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for (index, segment) in state.snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, grid, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(theme.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SEGMENT, style);
    }
}

fn centered_board(area: Rect, grid: Grid) -> Rect {
    let width = grid.tiles().saturating_mul(TILE_WIDTH).saturating_add(2);
    let height = grid.tiles().saturating_add(2);

    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    board
}

fn logical_to_terminal(inner: Rect, grid: Grid, cell: Cell) -> Option<(u16, u16)> {
    if !grid.in_bounds(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(TILE_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

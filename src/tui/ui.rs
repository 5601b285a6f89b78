use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BoardGrid, CellGeometry, StatusBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let board = app.game.board();
    let geometry = CellGeometry::fit(tui.viewport, tui.board_scale, board.max_tile());

    let [title_area, board_area, status_area] = layout(frame.area(), geometry);

    TitleBar::new(app.seed).render(frame, title_area);
    BoardGrid::new(board, geometry).render(frame, board_area);
    StatusBar::new(app.game.score(), app.game.game_over()).render(frame, status_area);
}

/// Title, board and status stacked and centered, one blank line between each.
fn layout(area: Rect, geometry: CellGeometry) -> [Rect; 3] {
    use Constraint::Length;

    let vertical = Layout::vertical([
        Length(1),
        Length(1),
        Length(geometry.board_height()),
        Length(1),
        Length(StatusBar::height()),
    ])
    .flex(Flex::Center);
    let [title_area, _, board_row, _, status_area] = vertical.areas(area);

    let [board_area] = Layout::horizontal([Length(geometry.board_width())])
        .flex(Flex::Center)
        .areas(board_row);

    [title_area, board_area, status_area]
}

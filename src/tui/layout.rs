use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Single-column screen layout, top to bottom:
/// title, query field, search button, error text, results, status bar
pub struct AppLayout {
    pub title_area: Rect,
    pub input_area: Rect,
    pub button_area: Rect,
    pub error_area: Rect,
    pub results_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Bordered input field
                Constraint::Length(1), // Search button
                Constraint::Length(1), // Error text
                Constraint::Min(3),    // Results
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            input_area: chunks[1],
            button_area: chunks[2],
            error_area: chunks[3],
            results_area: chunks[4],
            status_area: chunks[5],
        }
    }
}

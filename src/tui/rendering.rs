use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::ResultRecord;
use crate::search::SearchError;
use crate::utils::single_line;

pub const SCREEN_TITLE: &str = "Web Search Engine";
pub const INPUT_PLACEHOLDER: &str = "Enter your query";
pub const EMPTY_LIST_TEXT: &str = "No results found.";

const TEXT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const LINK: Color = Color::Rgb(96, 165, 250);
const BAR: Color = Color::Rgb(24, 24, 27);

/// Everything the screen draws, borrowed from the app for one frame
pub struct RenderState<'a> {
    pub query: &'a str,
    pub focus: Focus,
    pub results: &'a [ResultRecord],
    pub selected_idx: usize,
    pub error: Option<&'a SearchError>,
    pub searching: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_title(frame, layout.title_area);
    render_input(frame, layout.input_area, state.query, state.focus);
    render_button(frame, layout.button_area, state.searching);
    render_error(frame, layout.error_area, state.error);
    render_results(frame, layout.results_area, state.results, state.selected_idx, state.focus);
    render_status_bar(frame, layout.status_area, state);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(SCREEN_TITLE)
        .style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn border_style(focused: bool) -> Style {
    if focused { Style::default().fg(ACCENT) } else { Style::default().fg(MUTED) }
}

fn render_input(frame: &mut Frame, area: Rect, query: &str, focus: Focus) {
    let focused = focus == Focus::Input;
    let content = if query.is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED))
    } else {
        Span::styled(query, Style::default().fg(TEXT))
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default().borders(Borders::ALL).border_style(border_style(focused)).title(" Query "),
    );
    frame.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        // Cursor after the last typed cell, clamped inside the border
        let typed = u16::try_from(query.width()).unwrap_or(u16::MAX);
        let x = area.x + 1 + typed.min(area.width - 3);
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_button(frame: &mut Frame, area: Rect, searching: bool) {
    let (label, style) = if searching {
        ("Searching…", Style::default().fg(MUTED))
    } else {
        ("[ Search ]", Style::default().fg(TEXT).bg(ACCENT).add_modifier(Modifier::BOLD))
    };
    let button = Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center);
    frame.render_widget(button, area);
}

fn render_error(frame: &mut Frame, area: Rect, error: Option<&SearchError>) {
    if let Some(error) = error {
        let text = Paragraph::new(error.to_string())
            .style(Style::default().fg(ERROR))
            .alignment(Alignment::Center);
        frame.render_widget(text, area);
    }
}

fn result_item(record: &ResultRecord, selected: bool) -> ListItem<'static> {
    let title_style = if selected {
        Style::default().fg(TEXT).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(single_line(&record.title), title_style)),
        Line::from(Span::styled(single_line(&record.description), Style::default().fg(MUTED))),
        Line::from(Span::styled(
            single_line(&record.url),
            Style::default().fg(LINK).add_modifier(Modifier::UNDERLINED),
        )),
    ];
    ListItem::new(Text::from(lines))
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    results: &[ResultRecord],
    selected_idx: usize,
    focus: Focus,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focus == Focus::Results))
        .title(" Results ");

    if results.is_empty() {
        let empty = Paragraph::new(EMPTY_LIST_TEXT)
            .style(Style::default().fg(MUTED))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, record)| result_item(record, idx == selected_idx))
        .collect();

    // ListState keeps the selected row scrolled into view
    let mut list_state = ListState::default().with_selected(Some(selected_idx));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let style = Style::default().fg(TEXT).bg(BAR);

    let (text, style) = match state.status_message {
        Some(msg) => {
            let color = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), style.fg(color))
        }
        None => {
            let mut parts = vec![];
            if !state.results.is_empty() {
                parts.push(format!(
                    "result {}/{}",
                    state.selected_idx + 1,
                    state.results.len()
                ));
            }
            parts.push("Enter: search".to_string());
            parts.push("Tab: focus".to_string());
            if !state.results.is_empty() {
                parts.push("Ctrl+Y: copy URL".to_string());
            }
            if !state.query.is_empty() {
                parts.push("Esc: clear".to_string());
            }
            parts.push("Ctrl+C: quit".to_string());
            (format!(" {} ", parts.join(" | ")), style)
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;

    fn buffer_lines(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn draw(state: &RenderState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render_ui(f, state)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn state<'a>(results: &'a [ResultRecord], error: Option<&'a SearchError>) -> RenderState<'a> {
        RenderState {
            query: "",
            focus: Focus::Input,
            results,
            selected_idx: 0,
            error,
            searching: false,
            status_message: None,
        }
    }

    fn count_containing(lines: &[String], needle: &str) -> usize {
        lines.iter().filter(|line| line.contains(needle)).count()
    }

    #[test]
    fn test_render_initial_screen() {
        let lines = draw(&state(&[], None));
        let screen = lines.join("\n");

        assert!(screen.contains(SCREEN_TITLE));
        assert!(screen.contains(INPUT_PLACEHOLDER));
        assert!(screen.contains("[ Search ]"));
        assert!(screen.contains(EMPTY_LIST_TEXT));
    }

    #[test]
    fn test_cursor_follows_display_width() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let input = AppLayout::new(Rect::new(0, 0, 80, 24)).input_area;

        let wide = RenderState { query: "日本", ..state(&[], None) };
        terminal.draw(|f| render_ui(f, &wide)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(input.x + 5, input.y + 1));

        let narrow = RenderState { query: "ab", ..state(&[], None) };
        terminal.draw(|f| render_ui(f, &narrow)).unwrap();
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(input.x + 3, input.y + 1));
    }

    #[test]
    fn test_render_single_result_row() {
        let results = [ResultRecord::new("Alpha", "Bravo", "https://charlie.example")];
        let lines = draw(&state(&results, None));

        assert_eq!(count_containing(&lines, "Alpha"), 1);
        assert_eq!(count_containing(&lines, "Bravo"), 1);
        assert_eq!(count_containing(&lines, "https://charlie.example"), 1);
        assert_eq!(count_containing(&lines, EMPTY_LIST_TEXT), 0);
        assert_eq!(count_containing(&lines, "Try again later"), 0);
    }

    #[test]
    fn test_render_error_with_empty_list() {
        let error = SearchError::FetchFailed;
        let lines = draw(&state(&[], Some(&error)));
        let screen = lines.join("\n");

        assert!(screen.contains("Couldn't fetch results. Try again later."));
        assert!(screen.contains(EMPTY_LIST_TEXT));
    }

    #[test]
    fn test_render_query_replaces_placeholder() {
        let mut s = state(&[], None);
        s.query = "rust";
        let screen = draw(&s).join("\n");

        assert!(screen.contains("rust"));
        assert!(!screen.contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_render_searching_label() {
        let mut s = state(&[], None);
        s.searching = true;
        let screen = draw(&s).join("\n");

        assert!(screen.contains("Searching…"));
        assert!(!screen.contains("[ Search ]"));
    }

    #[test]
    fn test_render_strips_escape_sequences_from_results() {
        let results = [ResultRecord::new("\x1b[31mRed\x1b[0m title", "line\nbreak", "u")];
        let screen = draw(&state(&results, None)).join("\n");

        assert!(screen.contains("Red title"));
        assert!(screen.contains("line break"));
    }

    #[test]
    fn test_render_many_results_scrolls_to_selection() {
        let results: Vec<ResultRecord> = (0..20)
            .map(|i| ResultRecord::new(format!("Title {:02}", i), "desc", "url"))
            .collect();
        let mut s = state(&results, None);
        s.selected_idx = 19;
        s.focus = Focus::Results;
        let screen = draw(&s).join("\n");

        assert!(screen.contains("Title 19"));
        assert!(!screen.contains("Title 00"));
        assert!(screen.contains("result 20/20"));
    }

    #[test]
    fn test_render_status_message() {
        let msg = StatusMessage {
            text: "✓ Copied URL".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now(),
        };
        let mut s = state(&[], None);
        s.status_message = Some(&msg);
        let screen = draw(&s).join("\n");

        assert!(screen.contains("✓ Copied URL"));
        assert!(!screen.contains("Ctrl+C: quit"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        let results = [ResultRecord::new("A", "B", "C")];
        let s = state(&results, None);
        terminal.draw(|f| render_ui(f, &s)).unwrap();
    }
}

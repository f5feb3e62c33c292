use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Items
            Constraint::Length(3), // Input / status
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    draw_item_list(frame, chunks[1], app);
    draw_input_line(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_text = format!("Undo strategy: {}", app.dispatcher.strategy());
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("undolist"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_item_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .collection
        .iter()
        .map(|item| {
            let checkbox = if item.completed { "☑" } else { "☐" };
            let style = if item.completed {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::styled(format!("{:>5} ", item.id.to_string()), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{} {}", checkbox, item.text), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Items"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !app.collection.is_empty() {
        list_state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_input_line(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if app.edit.edit_mode {
        let (before_cursor, after_cursor) = app.edit.split_at_cursor();
        (
            format!("{}█{}", before_cursor, after_cursor),
            Style::default().bg(Color::Blue).fg(Color::White),
        )
    } else {
        (
            app.status.clone().unwrap_or_default(),
            Style::default().fg(Color::Magenta),
        )
    };

    let title = if app.edit.edit_mode { "New item" } else { "Status" };
    let input = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(style);

    frame.render_widget(input, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = if app.edit.edit_mode {
        "EDIT MODE | Enter: add | Esc: cancel | ←→: cursor | Backspace/Delete: edit".to_string()
    } else {
        let undo_label = app
            .dispatcher
            .undo_description()
            .unwrap_or_else(|| "nothing to undo".to_string());
        format!(
            "Items: {} | Completed: {} | History: {} | u: {} | ?: help | q: quit",
            app.total_items(),
            app.completed_items(),
            app.dispatcher.history_len(),
            undo_label
        )
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "undolist - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Navigate up/down",
        "",
        "CHANGES:",
        "  a                 Add a new item at the end",
        "  Enter / Space     Toggle completion",
        "  d                 Delete item",
        "  u                 Undo last change",
        "",
        "OTHER:",
        "  Esc               Clear status line",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });

    let area = centered_rect(70, 60, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

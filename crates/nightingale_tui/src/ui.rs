//! UI rendering for the chat and planner screens.

use crate::chat::ChatApp;
use crate::messages;
use crate::planner::{FormField, PlanApp};
use nightingale_core::ModelChoice;
use nightingale_interface::TextGenerator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

/// Draw the chat screen.
#[tracing::instrument(skip_all)]
pub fn draw_chat<D: TextGenerator>(f: &mut Frame, app: &ChatApp<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Transcript
            Constraint::Length(3), // Input line
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, messages::CHAT_TITLE, app.model, chunks[0]);
    draw_transcript(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);
    draw_chat_status(f, app, chunks[3]);
}

/// Draw the planner screen.
#[tracing::instrument(skip_all)]
pub fn draw_planner<D: TextGenerator>(f: &mut Frame, app: &PlanApp<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form and latest plan
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, messages::PLANNER_TITLE, app.model, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_form(f, app, panes[0]);
    draw_latest_plan(f, app, panes[1]);
    draw_planner_status(f, app, chunks[2]);
}

/// Draw the header naming the screen and the selected model.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, title: &str, model: ModelChoice, area: ratatui::layout::Rect) {
    let text = format!("{} - {}", title, messages::model_header(model));
    let header = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the conversation, keeping the newest turn in view.
#[tracing::instrument(skip_all)]
fn draw_transcript<D: TextGenerator>(
    f: &mut Frame,
    app: &ChatApp<D>,
    area: ratatui::layout::Rect,
) {
    let lines: Vec<String> = app
        .transcript
        .turns()
        .iter()
        .map(|turn| format!("{}: {}", messages::role_label(turn.role()), turn.content()))
        .collect();
    let text = lines.join("\n");

    let inner_height = area.height.saturating_sub(2);
    let offset = scroll_offset(text.lines().count(), inner_height, app.scroll);

    let transcript = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("会話"))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .scroll((offset, 0));
    f.render_widget(transcript, area);
}

/// Scroll offset that keeps the newest line in view, less any manual scroll.
fn scroll_offset(line_count: usize, inner_height: u16, scroll: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner_height)
        .saturating_sub(scroll)
}

/// Draw the input line, falling back to the placeholder hint when empty.
#[tracing::instrument(skip_all)]
fn draw_input<D: TextGenerator>(f: &mut Frame, app: &ChatApp<D>, area: ratatui::layout::Rect) {
    let (text, style) = if app.input.is_empty() {
        (
            messages::INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (app.input.as_str(), Style::default())
    };
    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("入力"));
    f.render_widget(input, area);
}

/// Draw the chat status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_chat_status<D: TextGenerator>(
    f: &mut Frame,
    app: &ChatApp<D>,
    area: ratatui::layout::Rect,
) {
    let help_text = "Enter: 送信 | Tab: モデル切替 | ↑↓: スクロール | Esc: 終了";
    let status_text = format!("{} | {}", app.status, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the survey form with the focused line highlighted.
#[tracing::instrument(skip_all)]
fn draw_form<D: TextGenerator>(f: &mut Frame, app: &PlanApp<D>, area: ratatui::layout::Rect) {
    let rows: Vec<Row> = FormField::ALL
        .iter()
        .map(|&field| {
            let style = if field == app.focused() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![field.label().to_string(), app.field_value(field)]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(24), Constraint::Min(20)])
        .block(Block::default().borders(Borders::ALL).title("職場情報"));
    f.render_widget(table, area);
}

/// Draw the newest generated plan, or a hint when none exists yet.
#[tracing::instrument(skip_all)]
fn draw_latest_plan<D: TextGenerator>(
    f: &mut Frame,
    app: &PlanApp<D>,
    area: ratatui::layout::Rect,
) {
    let text = match app.plans.latest() {
        Some(record) => format!("{}\n\n{}", record.date(), record.content()),
        None => "まだ計画がありません。Ctrl+G で生成します。".to_string(),
    };
    let plan = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("生成された行動計画"),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });
    f.render_widget(plan, area);
}

/// Draw the planner status bar with help text.
#[tracing::instrument(skip_all)]
fn draw_planner_status<D: TextGenerator>(
    f: &mut Frame,
    app: &PlanApp<D>,
    area: ratatui::layout::Rect,
) {
    let help_text =
        "Ctrl+G: 生成 | Ctrl+E: CSV出力 | Tab: モデル切替 | ↑↓: 項目 | ←→/Space: 変更 | Esc: 終了";
    let status_text = format!("{} | {}", app.status, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_newest_line_in_view() {
        // 30 lines in a 10-line pane: skip the first 20.
        assert_eq!(scroll_offset(30, 10, 0), 20);
        // Manual scroll walks back toward the start.
        assert_eq!(scroll_offset(30, 10, 5), 15);
        // Short transcripts never scroll.
        assert_eq!(scroll_offset(3, 10, 0), 0);
    }

    #[test]
    fn test_scroll_offset_saturates_on_very_long_transcripts() {
        let lines = usize::from(u16::MAX) + 10;
        assert_eq!(scroll_offset(lines, 10, 0), u16::MAX - 10);
    }
}

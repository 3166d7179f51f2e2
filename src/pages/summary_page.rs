use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::components::selection_status;
use crate::metrics::format_growth;
use crate::theme;

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(f.area());

    let mut title_spans = vec![Span::styled(
        " Industry Summary ",
        Style::default().fg(theme::MAUVE).add_modifier(Modifier::BOLD),
    )];
    title_spans.extend(selection_status::selection_spans(app.level, app.metric));

    let title = Paragraph::new(Line::from(title_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::LAVENDER)),
    );
    f.render_widget(title, chunks[0]);

    let header = Row::new(vec![
        Cell::from("Industry"),
        Cell::from("Year"),
        Cell::from(app.metric.label()),
        Cell::from("Companies"),
        Cell::from("Growth"),
    ])
    .style(
        Style::default()
            .fg(theme::BLUE)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app
        .summary
        .iter()
        .map(|row| {
            let growth_color = if row.growth_pct < 0.0 {
                theme::RED
            } else {
                theme::GREEN
            };
            Row::new(vec![
                Cell::from(row.industry.clone()),
                Cell::from(row.year.to_string()),
                Cell::from(format!("{:.2}", row.total)),
                Cell::from(row.companies.to_string()),
                Cell::from(Span::styled(
                    format_growth(row.growth_pct),
                    Style::default().fg(growth_color),
                )),
            ])
            .style(Style::default().fg(theme::TEXT))
        })
        .collect();

    let table_title = format!(" Aggregates ({} industry-years) ", app.summary.len());
    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(6),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(table_title)
            .border_style(Style::default().fg(theme::SURFACE2)),
    )
    .row_highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[1], &mut app.table_state);

    let help = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
            Span::raw(": Industry Level  "),
            Span::styled("m", Style::default().fg(Color::Yellow)),
            Span::raw(": Toggle Metric  "),
            Span::styled("Tab", Style::default().fg(Color::Magenta)),
            Span::raw(": Charts  "),
            Span::styled("q", Style::default().fg(Color::Red)),
            Span::raw(": Quit"),
        ]),
        Line::from(vec![
            Span::styled("↑/k", Style::default().fg(Color::Cyan)),
            Span::raw(": Up  "),
            Span::styled("↓/j", Style::default().fg(Color::Cyan)),
            Span::raw(": Down  "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
            Span::raw(": Page  "),
            Span::styled("Wheel", Style::default().fg(Color::Cyan)),
            Span::raw(": Scroll"),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Controls "));
    f.render_widget(help, chunks[2]);
}

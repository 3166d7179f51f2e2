use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::{growth_bars, selection_status};
use crate::constants::chart;
use crate::theme;

pub fn render(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let mut title_spans = vec![Span::styled(
        format!(
            " Top {} Industries by Mean {} Growth ",
            chart::TOP_N,
            app.metric.label()
        ),
        Style::default().fg(theme::MAUVE).add_modifier(Modifier::BOLD),
    )];
    title_spans.extend(selection_status::selection_spans(app.level, app.metric));

    let title = Paragraph::new(Line::from(title_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::LAVENDER)),
    );
    f.render_widget(title, chunks[0]);

    // one panel per recent year, filled row-major like a 3x2 subplot grid
    let cells = grid_cells(chunks[1]);
    for (panel, cell) in app.panels.iter().zip(cells.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", panel.year))
            .title_style(Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(theme::SURFACE1));
        let inner = block.inner(*cell);
        f.render_widget(block, *cell);

        if panel.bars.is_empty() {
            let empty = Paragraph::new("no classified industries")
                .style(Style::default().fg(theme::SUBTEXT0));
            f.render_widget(empty, inner);
            continue;
        }
        let lines = growth_bars::bar_lines(&panel.bars, inner.width);
        f.render_widget(Paragraph::new(lines), inner);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("1/2/3", Style::default().fg(Color::Cyan)),
        Span::raw(": Industry Level  "),
        Span::styled("m", Style::default().fg(Color::Yellow)),
        Span::raw(": Toggle Metric  "),
        Span::styled("Tab", Style::default().fg(Color::Magenta)),
        Span::raw(": Summary Table  "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(": Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Controls "));
    f.render_widget(help, chunks[2]);
}

/// Splits an area into the fixed chart grid, row-major.
fn grid_cells(area: Rect) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Ratio(1, chart::GRID_ROWS as u32);
            chart::GRID_ROWS
        ])
        .split(area);

    let mut cells = Vec::with_capacity(chart::GRID_ROWS * chart::GRID_COLS);
    for row in rows.iter() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, chart::GRID_COLS as u32);
                chart::GRID_COLS
            ])
            .split(*row);
        cells.extend(cols.iter().copied());
    }
    cells
}

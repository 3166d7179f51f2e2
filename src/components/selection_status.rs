use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::theme;
use crate::types::{IndustryLevel, Metric};

/// Creates spans showing the active industry level and metric selection
pub fn selection_spans(level: IndustryLevel, metric: Metric) -> Vec<Span<'static>> {
    vec![
        Span::raw("   "),
        Span::styled("Level: ", Style::default().fg(theme::SUBTEXT1)),
        Span::styled(
            level.label(),
            Style::default().fg(theme::SKY).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Metric: ", Style::default().fg(theme::SUBTEXT1)),
        Span::styled(
            metric.label(),
            Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ]
}

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::metrics::format_growth;
use crate::theme;

const MAX_LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 8;

/// Builds one line per industry: padded label, proportional bar, percent.
/// Bars are scaled against the panel's largest absolute growth; negative
/// growth renders red, everything else green.
pub fn bar_lines(bars: &[(String, f64)], width: u16) -> Vec<Line<'static>> {
    let label_width = bars
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_LABEL_WIDTH);
    let bar_space = (width as usize)
        .saturating_sub(label_width + VALUE_WIDTH + 2)
        .max(1);
    let max_abs = bars
        .iter()
        .map(|(_, growth)| growth.abs())
        .fold(0.0_f64, f64::max);

    bars.iter()
        .map(|(name, growth)| {
            let filled = if max_abs == 0.0 {
                0
            } else {
                ((growth.abs() / max_abs) * bar_space as f64).round() as usize
            };
            let color = if *growth < 0.0 {
                theme::RED
            } else {
                theme::GREEN
            };
            let label: String = name.chars().take(label_width).collect();

            Line::from(vec![
                Span::styled(
                    format!("{label:<label_width$} "),
                    Style::default().fg(theme::SUBTEXT1),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>width$}", format_growth(*growth), width = VALUE_WIDTH),
                    Style::default().fg(theme::TEXT),
                ),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_lines_scale_to_largest() {
        let bars = vec![
            ("Mining".to_string(), -25.0),
            ("Tech".to_string(), 50.0),
        ];
        let lines = bar_lines(&bars, 40);
        assert_eq!(lines.len(), 2);

        let bar_width = |line: &Line| {
            line.spans[1]
                .content
                .chars()
                .filter(|c| *c == '█')
                .count()
        };
        // half the growth, half the bar
        assert_eq!(bar_width(&lines[0]) * 2, bar_width(&lines[1]));
        assert!(lines[1].spans[2].content.contains("50.00%"));
    }

    #[test]
    fn test_bar_lines_handle_all_zero() {
        let bars = vec![("Tech".to_string(), 0.0)];
        let lines = bar_lines(&bars, 30);
        assert_eq!(lines[0].spans[1].content, "");
    }
}

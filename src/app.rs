use ratatui::widgets::TableState;

use crate::constants::chart;
use crate::metrics::{self, ChartPanel, GrowthPoint, SummaryRow};
use crate::types::{IndustryLevel, JoinedRow, Metric};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Page {
    Summary,
    Charts,
}

/// Dashboard state. The joined table is loaded once per invocation; only
/// the metric and presentation stages re-run when a selection changes.
pub struct App {
    joined: Vec<JoinedRow>,
    pub level: IndustryLevel,
    pub metric: Metric,
    pub page: Page,
    pub summary: Vec<SummaryRow>,
    pub panels: Vec<ChartPanel>,
    pub table_state: TableState,
}

impl App {
    pub fn new(joined: Vec<JoinedRow>, level: IndustryLevel, metric: Metric) -> Self {
        let mut app = App {
            joined,
            level,
            metric,
            page: Page::Summary,
            summary: Vec::new(),
            panels: Vec::new(),
            table_state: TableState::default(),
        };
        app.recompute();
        app
    }

    fn recompute(&mut self) {
        self.summary = metrics::industry_summary(&self.joined, self.level, self.metric);
        let points: Vec<GrowthPoint> =
            metrics::company_growth(&self.joined, self.level, self.metric);
        let years = metrics::recent_years(&self.joined, chart::YEARS);
        self.panels = metrics::top_movers(&points, &years, chart::TOP_N);
        self.table_state = TableState::default();
        if !self.summary.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn set_level(&mut self, level: IndustryLevel) {
        if self.level != level {
            self.level = level;
            self.recompute();
        }
    }

    pub fn toggle_metric(&mut self) {
        self.metric = match self.metric {
            Metric::Revenue => Metric::Profit,
            Metric::Profit => Metric::Revenue,
        };
        self.recompute();
    }

    pub fn toggle_page(&mut self) {
        self.page = match self.page {
            Page::Summary => Page::Charts,
            Page::Charts => Page::Summary,
        };
    }

    pub fn scroll_down(&mut self, step: usize) {
        if self.summary.is_empty() {
            return;
        }
        let last = self.summary.len() - 1;
        let next = self
            .table_state
            .selected()
            .map_or(0, |i| (i + step).min(last));
        self.table_state.select(Some(next));
    }

    pub fn scroll_up(&mut self, step: usize) {
        if self.summary.is_empty() {
            return;
        }
        let next = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(step));
        self.table_state.select(Some(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndustryInfo;

    fn joined(code: &str, year: i32, revenue: f64, industry: &str) -> JoinedRow {
        JoinedRow {
            code: code.to_string(),
            revenue,
            operating_profit: revenue * 2.0,
            year,
            industry: Some(IndustryInfo {
                level1: industry.to_string(),
                level2: format!("{industry}-mid"),
                level3: format!("{industry}-narrow"),
            }),
        }
    }

    fn fixture() -> Vec<JoinedRow> {
        vec![
            joined("A", 2018, 100.0, "Tech"),
            joined("A", 2019, 150.0, "Tech"),
            joined("B", 2018, 40.0, "Mining"),
            joined("B", 2019, 60.0, "Mining"),
        ]
    }

    #[test]
    fn test_new_computes_views() {
        let app = App::new(fixture(), IndustryLevel::Broad, Metric::Revenue);
        assert_eq!(app.summary.len(), 4);
        assert_eq!(app.panels.len(), 2);
        assert_eq!(app.table_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_changes_redrive_metrics() {
        let mut app = App::new(fixture(), IndustryLevel::Broad, Metric::Revenue);
        let revenue_total = app.summary[0].total;

        app.toggle_metric();
        assert_eq!(app.metric, Metric::Profit);
        assert_eq!(app.summary[0].total, revenue_total * 2.0);

        app.set_level(IndustryLevel::Narrow);
        assert!(app.summary.iter().any(|r| r.industry == "Tech-narrow"));
    }

    #[test]
    fn test_scroll_clamps_to_table() {
        let mut app = App::new(fixture(), IndustryLevel::Broad, Metric::Revenue);
        app.scroll_up(3);
        assert_eq!(app.table_state.selected(), Some(0));
        app.scroll_down(100);
        assert_eq!(app.table_state.selected(), Some(app.summary.len() - 1));
    }
}

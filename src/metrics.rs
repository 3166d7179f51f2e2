use hashbrown::{HashMap, HashSet};

use crate::types::{IndustryLevel, JoinedRow, Metric};

/// Growth of `current` over `previous` in percent. An absent or zero
/// previous value means no growth, never a division error.
pub fn pct_growth(previous: Option<f64>, current: f64) -> f64 {
    match previous {
        Some(prev) if prev != 0.0 => (current - prev) / prev * 100.0,
        _ => 0.0,
    }
}

pub fn format_growth(pct: f64) -> String {
    format!("{pct:.2}%")
}

/// One company-year growth observation under a (level, metric) selection
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthPoint {
    pub code: String,
    pub industry: Option<String>,
    pub year: i32,
    pub growth_pct: f64,
}

/// Per-company year-over-year growth of the chosen metric. Rows are grouped
/// by (industry at `level`, company code) and ordered by year inside each
/// group; the first observed year of a group has growth 0.
pub fn company_growth(rows: &[JoinedRow], level: IndustryLevel, metric: Metric) -> Vec<GrowthPoint> {
    let mut groups: HashMap<(Option<String>, &str), Vec<(i32, f64)>> = HashMap::new();
    for row in rows {
        let key = (row.industry_at(level).map(str::to_string), row.code.as_str());
        groups.entry(key).or_default().push((row.year, row.metric(metric)));
    }

    let mut points = Vec::with_capacity(rows.len());
    for ((industry, code), mut series) in groups {
        series.sort_by_key(|(year, _)| *year);
        let mut previous = None;
        for (year, value) in series {
            points.push(GrowthPoint {
                code: code.to_string(),
                industry: industry.clone(),
                year,
                growth_pct: pct_growth(previous, value),
            });
            previous = Some(value);
        }
    }
    points
}

/// One (industry, year) aggregate for the summary table
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub industry: String,
    pub year: i32,
    /// Chosen metric summed over the industry's companies that year
    pub total: f64,
    pub companies: usize,
    pub growth_pct: f64,
}

/// Industry-year aggregates: summed metric, distinct company count, and the
/// aggregate's own year-over-year growth. Computed from the raw totals, not
/// from per-company growth rates. Unclassified rows are excluded, and
/// absent (industry, year) combinations produce no row at all.
pub fn industry_summary(
    rows: &[JoinedRow],
    level: IndustryLevel,
    metric: Metric,
) -> Vec<SummaryRow> {
    let mut totals: HashMap<(&str, i32), (f64, HashSet<&str>)> = HashMap::new();
    for row in rows {
        let Some(industry) = row.industry_at(level) else {
            continue;
        };
        let entry = totals
            .entry((industry, row.year))
            .or_insert_with(|| (0.0, HashSet::new()));
        entry.0 += row.metric(metric);
        entry.1.insert(row.code.as_str());
    }

    let mut by_industry: HashMap<&str, Vec<(i32, f64, usize)>> = HashMap::new();
    for ((industry, year), (total, codes)) in totals {
        by_industry
            .entry(industry)
            .or_default()
            .push((year, total, codes.len()));
    }

    let mut summary = Vec::new();
    for (industry, mut years) in by_industry {
        years.sort_by_key(|(year, ..)| *year);
        let mut previous = None;
        for (year, total, companies) in years {
            summary.push(SummaryRow {
                industry: industry.to_string(),
                year,
                total,
                companies,
                growth_pct: pct_growth(previous, total),
            });
            previous = Some(total);
        }
    }
    summary.sort_by(|a, b| (a.industry.as_str(), a.year).cmp(&(b.industry.as_str(), b.year)));
    summary
}

/// One chart panel: top industries by mean per-company growth for a year,
/// ascending so the largest bar renders last
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub year: i32,
    pub bars: Vec<(String, f64)>,
}

/// The most recent `count` observed years, ascending.
pub fn recent_years(rows: &[JoinedRow], count: usize) -> Vec<i32> {
    let mut years: Vec<i32> = rows
        .iter()
        .map(|row| row.year)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    years.sort_unstable();
    let skip = years.len().saturating_sub(count);
    years.split_off(skip)
}

/// For each requested year, the `top_n` industries with the largest mean
/// per-company growth. Panels hold at most `top_n` bars and fewer when a
/// year has fewer classified industries.
pub fn top_movers(points: &[GrowthPoint], years: &[i32], top_n: usize) -> Vec<ChartPanel> {
    years
        .iter()
        .map(|&year| {
            let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
            for point in points.iter().filter(|p| p.year == year) {
                let Some(industry) = point.industry.as_deref() else {
                    continue;
                };
                let entry = sums.entry(industry).or_insert((0.0, 0));
                entry.0 += point.growth_pct;
                entry.1 += 1;
            }

            let mut means: Vec<(String, f64)> = sums
                .into_iter()
                .map(|(industry, (sum, count))| (industry.to_string(), sum / count as f64))
                .collect();
            means.sort_by(|a, b| b.1.total_cmp(&a.1));
            means.truncate(top_n);
            means.reverse();
            ChartPanel { year, bars: means }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndustryInfo;

    const TOLERANCE: f64 = 1e-9;

    fn row(code: &str, year: i32, revenue: f64, industry: Option<&str>) -> JoinedRow {
        JoinedRow {
            code: code.to_string(),
            revenue,
            operating_profit: revenue / 10.0,
            year,
            industry: industry.map(|name| IndustryInfo {
                level1: name.to_string(),
                level2: format!("{name}-mid"),
                level3: format!("{name}-narrow"),
            }),
        }
    }

    #[test]
    fn test_pct_growth_definition() {
        assert!((pct_growth(Some(100.0), 150.0) - 50.0).abs() < TOLERANCE);
        assert!((pct_growth(Some(150.0), 120.0) + 20.0).abs() < TOLERANCE);
        assert_eq!(pct_growth(None, 42.0), 0.0);
        assert_eq!(pct_growth(Some(0.0), 42.0), 0.0);
    }

    #[test]
    fn test_company_growth_series() {
        let rows = vec![
            row("A", 2019, 150.0, Some("Tech")),
            row("A", 2018, 100.0, Some("Tech")),
            row("A", 2020, 120.0, Some("Tech")),
        ];
        let mut points = company_growth(&rows, IndustryLevel::Broad, Metric::Revenue);
        points.sort_by_key(|p| p.year);

        let growth: Vec<f64> = points.iter().map(|p| p.growth_pct).collect();
        assert_eq!(points.len(), 3);
        assert_eq!(growth[0], 0.0);
        assert!((growth[1] - 50.0).abs() < TOLERANCE);
        assert!((growth[2] + 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_summary_sums_counts_and_growth() {
        let rows = vec![
            row("A", 2018, 100.0, Some("Tech")),
            row("B", 2018, 50.0, Some("Tech")),
            row("A", 2019, 200.0, Some("Tech")),
            row("B", 2019, 100.0, Some("Tech")),
        ];
        let summary = industry_summary(&rows, IndustryLevel::Broad, Metric::Revenue);
        assert_eq!(summary.len(), 2);

        assert_eq!(summary[0].year, 2018);
        assert_eq!(summary[0].total, 150.0);
        assert_eq!(summary[0].companies, 2);
        assert_eq!(summary[0].growth_pct, 0.0);

        // aggregate growth comes from the summed totals: (300-150)/150
        assert_eq!(summary[1].total, 300.0);
        assert!((summary[1].growth_pct - 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_summary_is_not_mean_of_company_growth() {
        // A grows 10x from a small base, B shrinks slightly from a large
        // one. The mean of company growth is hugely positive while the
        // aggregate barely moves.
        let rows = vec![
            row("A", 2018, 1.0, Some("Tech")),
            row("B", 2018, 1000.0, Some("Tech")),
            row("A", 2019, 10.0, Some("Tech")),
            row("B", 2019, 995.0, Some("Tech")),
        ];
        let summary = industry_summary(&rows, IndustryLevel::Broad, Metric::Revenue);
        let aggregate = summary[1].growth_pct;
        assert!((aggregate - ((1005.0 - 1001.0) / 1001.0 * 100.0)).abs() < TOLERANCE);
        assert!(aggregate < 1.0);
    }

    #[test]
    fn test_summary_skips_unclassified_and_absent_years() {
        let rows = vec![
            row("A", 2018, 100.0, Some("Tech")),
            row("U", 2018, 500.0, None),
            row("B", 2020, 80.0, Some("Mining")),
        ];
        let summary = industry_summary(&rows, IndustryLevel::Broad, Metric::Revenue);
        // no row for unclassified companies, no (Tech, 2020) or (Mining, 2018)
        assert_eq!(summary.len(), 2);
        assert!(summary.iter().all(|r| r.industry != ""));
        assert!(!summary.iter().any(|r| r.industry == "Tech" && r.year == 2020));
    }

    #[test]
    fn test_level_changes_grouping() {
        let rows = vec![
            row("A", 2018, 100.0, Some("Tech")),
            row("B", 2018, 50.0, Some("Tech")),
        ];
        let broad = industry_summary(&rows, IndustryLevel::Broad, Metric::Revenue);
        let narrow = industry_summary(&rows, IndustryLevel::Narrow, Metric::Revenue);
        assert_eq!(broad[0].industry, "Tech");
        assert_eq!(narrow[0].industry, "Tech-narrow");
    }

    #[test]
    fn test_recent_years_keeps_last_six() {
        let rows: Vec<JoinedRow> = (2014..=2022)
            .map(|year| row("A", year, 100.0, Some("Tech")))
            .collect();
        assert_eq!(
            recent_years(&rows, 6),
            vec![2017, 2018, 2019, 2020, 2021, 2022]
        );
        assert_eq!(recent_years(&rows[..2], 6), vec![2014, 2015]);
    }

    #[test]
    fn test_top_movers_capped_and_ascending() {
        let mut rows = Vec::new();
        for (i, name) in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]
            .iter()
            .enumerate()
        {
            rows.push(row(name, 2018, 100.0, Some(name)));
            rows.push(row(name, 2019, 100.0 + (i as f64 + 1.0) * 10.0, Some(name)));
        }
        let points = company_growth(&rows, IndustryLevel::Broad, Metric::Revenue);
        let panels = top_movers(&points, &[2019], 8);

        assert_eq!(panels.len(), 1);
        let bars = &panels[0].bars;
        assert_eq!(bars.len(), 8);
        assert!(bars.windows(2).all(|pair| pair[0].1 <= pair[1].1));
        // the two weakest growers fell out of the top 8
        assert!(!bars.iter().any(|(name, _)| name == "a" || name == "b"));
    }

    #[test]
    fn test_top_movers_with_fewer_industries() {
        let rows = vec![
            row("A", 2018, 100.0, Some("Tech")),
            row("A", 2019, 120.0, Some("Tech")),
            row("U", 2019, 10.0, None),
        ];
        let points = company_growth(&rows, IndustryLevel::Broad, Metric::Revenue);
        let panels = top_movers(&points, &[2019], 8);
        assert_eq!(panels[0].bars.len(), 1);
        assert_eq!(panels[0].bars[0].0, "Tech");
    }

    #[test]
    fn test_format_growth_round_trip() {
        for value in [0.0, 50.0, -20.0, 3.14159, -0.004, 123.456] {
            let formatted = format_growth(value);
            assert!(formatted.ends_with('%'));
            let parsed: f64 = formatted.trim_end_matches('%').parse().unwrap();
            assert!((parsed - value).abs() <= 0.01, "{formatted} vs {value}");
        }
    }
}

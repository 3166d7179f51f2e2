use clap::ValueEnum;

/// One row of a yearly extract, tagged with the year taken from its filename
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyYear {
    pub code: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub year: i32,
}

/// One row of the classification spreadsheet
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub code: String,
    pub level1: String,
    pub level2: String,
    pub level3: String,
}

/// The three tiers a company can carry in the classification taxonomy
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryInfo {
    pub level1: String,
    pub level2: String,
    pub level3: String,
}

/// A company-year row after the classification join. Companies without a
/// classification row keep `industry: None` rather than being dropped
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub code: String,
    pub revenue: f64,
    pub operating_profit: f64,
    pub year: i32,
    pub industry: Option<IndustryInfo>,
}

impl JoinedRow {
    /// Industry name at the chosen tier, if the company is classified
    pub fn industry_at(&self, level: IndustryLevel) -> Option<&str> {
        self.industry.as_ref().map(|info| match level {
            IndustryLevel::Broad => info.level1.as_str(),
            IndustryLevel::Medium => info.level2.as_str(),
            IndustryLevel::Narrow => info.level3.as_str(),
        })
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Profit => self.operating_profit,
        }
    }
}

/// Classification tier the whole pipeline aggregates by
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndustryLevel {
    Broad,
    Medium,
    Narrow,
}

impl IndustryLevel {
    pub fn label(&self) -> &'static str {
        match self {
            IndustryLevel::Broad => "Level 1 (broad)",
            IndustryLevel::Medium => "Level 2 (medium)",
            IndustryLevel::Narrow => "Level 3 (narrow)",
        }
    }
}

/// Metric the dashboard analyzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Revenue,
    Profit,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue",
            Metric::Profit => "Operating profit",
        }
    }
}

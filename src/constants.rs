pub mod files {
    /// Yearly extracts are named `<prefix><YYYY>.xlsx`.
    pub const DATA_PREFIX: &str = "Data";
    pub const DATA_EXT: &str = ".xlsx";
    /// Default classification spreadsheet, looked up inside the data dir.
    pub const CLASSIFICATION_FILE: &str = "classification.xlsx";
}

pub mod columns {
    pub const COMPANY_CODE: &str = "company_code";
    pub const REVENUE: &str = "revenue";
    pub const OPERATING_PROFIT: &str = "operating_profit";

    pub const INDUSTRY_LEVEL_1: &str = "industry_level_1";
    pub const INDUSTRY_LEVEL_2: &str = "industry_level_2";
    pub const INDUSTRY_LEVEL_3: &str = "industry_level_3";
}

pub mod chart {
    /// Industries shown per panel.
    pub const TOP_N: usize = 8;
    /// Most recent observed years charted, one panel each.
    pub const YEARS: usize = 6;

    pub const GRID_ROWS: usize = 3;
    pub const GRID_COLS: usize = 2;
}

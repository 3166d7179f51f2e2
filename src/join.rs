use std::path::Path;

use calamine::{Data, Range};
use hashbrown::HashMap;
use log::{debug, info};

use crate::constants::columns;
use crate::loader::{self, LoadError};
use crate::types::{Classification, CompanyYear, IndustryInfo, JoinedRow};

/// Reads the classification spreadsheet into one row per company.
pub fn load_classification(path: &Path) -> Result<Vec<Classification>, LoadError> {
    let sheet = loader::read_first_sheet(path)?;
    let file = path.display().to_string();
    let classes = parse_classification_rows(&sheet, &file)?;
    info!("{}: {} classified companies", file, classes.len());
    Ok(classes)
}

pub(crate) fn parse_classification_rows(
    sheet: &Range<Data>,
    file: &str,
) -> Result<Vec<Classification>, LoadError> {
    let headers = loader::header_row(sheet);
    let code_col = loader::require_column(&headers, columns::COMPANY_CODE, file)?;
    let level1_col = loader::require_column(&headers, columns::INDUSTRY_LEVEL_1, file)?;
    let level2_col = loader::require_column(&headers, columns::INDUSTRY_LEVEL_2, file)?;
    let level3_col = loader::require_column(&headers, columns::INDUSTRY_LEVEL_3, file)?;

    let mut classes = Vec::new();
    for row in sheet.rows().skip(1) {
        let Some(code) = row.get(code_col).and_then(loader::cell_text) else {
            continue;
        };
        let tier = |col: usize| {
            row.get(col)
                .and_then(loader::cell_text)
                .unwrap_or_default()
        };
        classes.push(Classification {
            code,
            level1: tier(level1_col),
            level2: tier(level2_col),
            level3: tier(level3_col),
        });
    }
    Ok(classes)
}

/// Left join on company code: every company-year row comes out exactly
/// once, with `industry: None` when the code has no classification row.
/// Duplicate classification codes are a data-quality precondition and are
/// not validated; the last row seen wins.
pub fn left_join(rows: Vec<CompanyYear>, classes: &[Classification]) -> Vec<JoinedRow> {
    let by_code: HashMap<&str, &Classification> = classes
        .iter()
        .map(|class| (class.code.as_str(), class))
        .collect();

    let mut unmatched = 0usize;
    let joined: Vec<JoinedRow> = rows
        .into_iter()
        .map(|row| {
            let industry = by_code.get(row.code.as_str()).map(|class| IndustryInfo {
                level1: class.level1.clone(),
                level2: class.level2.clone(),
                level3: class.level3.clone(),
            });
            if industry.is_none() {
                unmatched += 1;
            }
            JoinedRow {
                code: row.code,
                revenue: row.revenue,
                operating_profit: row.operating_profit,
                year: row.year,
                industry,
            }
        })
        .collect();

    if unmatched > 0 {
        debug!("{unmatched} company-year rows kept without a classification");
    }
    joined
}

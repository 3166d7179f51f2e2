use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, DataType, Range, Reader};
use log::{debug, info};
use thiserror::Error;
use walkdir::WalkDir;

use crate::constants::{columns, files};
use crate::types::CompanyYear;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data files matching {prefix}<YYYY>.xlsx found in {dir}")]
    NoDataFiles { dir: String, prefix: String },
    #[error("{file}: missing required column \"{column}\"")]
    MissingColumn { file: String, column: String },
    #[error("{file}: workbook has no worksheet")]
    EmptyWorkbook { file: String },
    #[error("{file}: {source}")]
    Workbook {
        file: String,
        source: calamine::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

/// Extracts the 4-digit year tag from a data filename, if the name matches
/// `<prefix><YYYY>.xlsx` exactly.
pub fn year_from_filename(name: &str, prefix: &str) -> Option<i32> {
    let digits = name.strip_prefix(prefix)?.strip_suffix(files::DATA_EXT)?;
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Lists the yearly extracts in `dir`, sorted by year. Errors when nothing
/// matches, so downstream stages never run on an empty table.
pub fn discover_files(dir: &Path, prefix: &str) -> Result<Vec<(PathBuf, i32)>, LoadError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(year) = year_from_filename(&name, prefix) {
            found.push((entry.into_path(), year));
        }
    }
    if found.is_empty() {
        return Err(LoadError::NoDataFiles {
            dir: dir.display().to_string(),
            prefix: prefix.to_string(),
        });
    }
    found.sort_by_key(|(_, year)| *year);
    Ok(found)
}

/// Reads every matching yearly extract under `dir` into one unified table,
/// one row per company per source year.
pub fn load_dir(dir: &Path, prefix: &str) -> Result<Vec<CompanyYear>, LoadError> {
    let mut rows = Vec::new();
    for (path, year) in discover_files(dir, prefix)? {
        let sheet = read_first_sheet(&path)?;
        let file = path.display().to_string();
        let before = rows.len();
        rows.extend(parse_company_rows(&sheet, &file, year)?);
        info!("{}: {} rows tagged year {}", file, rows.len() - before, year);
    }
    Ok(rows)
}

/// First worksheet of a workbook, with errors naming the offending file.
pub(crate) fn read_first_sheet(path: &Path) -> Result<Range<Data>, LoadError> {
    let file = path.display().to_string();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Workbook {
        file: file.clone(),
        source,
    })?;
    workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::EmptyWorkbook { file: file.clone() })?
        .map_err(|source| LoadError::Workbook { file, source })
}

/// Parses company rows out of one sheet. Rows without a company code are
/// skipped; unreadable numeric cells default to 0.
pub(crate) fn parse_company_rows(
    sheet: &Range<Data>,
    file: &str,
    year: i32,
) -> Result<Vec<CompanyYear>, LoadError> {
    let headers = header_row(sheet);
    let code_col = require_column(&headers, columns::COMPANY_CODE, file)?;
    let revenue_col = require_column(&headers, columns::REVENUE, file)?;
    let profit_col = require_column(&headers, columns::OPERATING_PROFIT, file)?;

    let mut rows = Vec::new();
    for row in sheet.rows().skip(1) {
        let Some(code) = row.get(code_col).and_then(cell_text) else {
            debug!("{file}: skipping row without company code");
            continue;
        };
        rows.push(CompanyYear {
            code,
            revenue: row.get(revenue_col).map_or(0.0, cell_number),
            operating_profit: row.get(profit_col).map_or(0.0, cell_number),
            year,
        });
    }
    Ok(rows)
}

pub(crate) fn header_row(sheet: &Range<Data>) -> Vec<String> {
    sheet
        .rows()
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
        .unwrap_or_default()
}

/// Header lookup, case-insensitive on trimmed names.
pub fn find_column(headers: &[String], wanted: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(wanted))
}

pub(crate) fn require_column(
    headers: &[String],
    wanted: &str,
    file: &str,
) -> Result<usize, LoadError> {
    find_column(headers, wanted).ok_or_else(|| LoadError::MissingColumn {
        file: file.to_string(),
        column: wanted.to_string(),
    })
}

pub(crate) fn cell_text(cell: &Data) -> Option<String> {
    if cell.is_empty() {
        return None;
    }
    let text = cell.to_string();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn cell_number(cell: &Data) -> f64 {
    cell.as_f64()
        .or_else(|| cell.get_string().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(0.0)
}

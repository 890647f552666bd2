//! Workbook writer
//!
//! The workbook is assembled in memory, written to a temporary file next
//! to the destination and renamed over it, so a failed export never leaves
//! a truncated file at `path`.

use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{ColNum, RowNum, Workbook, Worksheet};
use tempfile::NamedTempFile;
use tracing::info;

use crate::category::{Alarm, StyleTable};
use crate::error::{AlarmError, Result};

use super::template::{FORMAT_VERSION, HARDWARE_VERSION, HEADERS};
use super::{report_rows, HEADER_ROW};

/// Write the alarm table for `plc_name` to `path`, replacing any existing file.
pub fn write_report(
    path: &Path,
    plc_name: &str,
    alarms: &[Alarm],
    styles: &StyleTable,
) -> Result<()> {
    let contents = build_workbook(plc_name, alarms, styles)?;
    persist(path, &contents)?;
    info!("Wrote {} alarms to {}", alarms.len(), path.display());
    Ok(())
}

fn build_workbook(plc_name: &str, alarms: &[Alarm], styles: &StyleTable) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    write_metadata(sheet)?;
    write_row(sheet, HEADER_ROW, HEADERS.iter().copied())?;
    for (row, cells) in report_rows(plc_name, alarms, styles) {
        write_row(sheet, row, cells.iter().map(String::as_str))?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_metadata(sheet: &mut Worksheet) -> Result<()> {
    write_row(
        sheet,
        0,
        ["VERSION", FORMAT_VERSION, "HARDWARE_VERSION", HARDWARE_VERSION],
    )
}

/// Empty values are left as blank cells.
fn write_row<'a, I>(sheet: &mut Worksheet, row: RowNum, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for (col, value) in values.into_iter().enumerate() {
        if value.is_empty() {
            continue;
        }
        sheet.write_string(row, col as ColNum, value)?;
    }
    Ok(())
}

fn persist(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AlarmError::Io(e.error))?;
    Ok(())
}

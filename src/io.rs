//! Helpers for saving a ledger to CSV and loading it back

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use log::{error, info, warn};

use crate::{
    codec::{self, HEADER},
    errors::Error,
    types::Ledger,
};

/// What happened when loading from a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file does not exist; the ledger was left untouched
    Missing,
    /// The file was read and this many expenses were restored
    Loaded(usize),
}

/// Writes every expense in the ledger as CSV, in insertion order.
///
/// Output data will be in the form:
/// ```csv
/// id,amount,memo,date
/// "1","5000","coffee, latte","2024-01-01"
/// ```
pub fn save_expenses_to_csv<W, L>(writer: &mut W, ledger: &L) -> Result<(), Error>
where
    W: Write,
    L: Ledger + ?Sized,
{
    writeln!(writer, "{HEADER}")?;
    for expense in ledger.expenses() {
        writeln!(writer, "{}", codec::encode_expense(expense))?;
    }
    writer.flush()?;
    Ok(())
}

/// Replaces the contents of the ledger with the expenses read from a CSV stream.
///
/// The first line is taken to be the header and is never interpreted. Blank lines and rows
/// with fewer than four fields are skipped. The identifier counter is resynchronised from
/// whatever ended up in the ledger, even when the load is aborted.
///
/// # Errors
/// [`Error::Field`] on the first row whose id or amount is not a number, or [`Error::IdRange`]
/// on an id too large to count past. Expenses restored before that row stay in the ledger.
/// Bytes that are not valid UTF-8 are replaced, never rejected.
pub fn load_expenses_from_csv<R, L>(reader: R, ledger: &mut L) -> Result<usize, Error>
where
    R: BufRead,
    L: Ledger + ?Sized,
{
    ledger.clear();
    let restored = restore_rows(reader, ledger);
    ledger.resync_next_id();
    restored
}

/// Decodes the data rows of a stream into the ledger, stopping at the first bad row
fn restore_rows<R, L>(reader: R, ledger: &mut L) -> Result<usize, Error>
where
    R: BufRead,
    L: Ledger + ?Sized,
{
    let mut restored = 0;
    for (index, raw) in reader.split(b'\n').enumerate().skip(1) {
        let line_number = index + 1;
        let mut raw = raw?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        // Undecodable bytes become U+FFFD rather than failing the load
        let line = String::from_utf8_lossy(&raw);
        if line.trim().is_empty() {
            continue;
        }
        match codec::decode_row(&line) {
            Ok(Some(expense)) => {
                ledger.restore(expense);
                restored += 1;
            }
            Ok(None) => warn!("Skipping line {line_number}: fewer than four fields"),
            Err(err) => {
                error!("Aborting load at line {line_number}: {err}");
                return Err(err);
            }
        }
    }
    Ok(restored)
}

/// Saves the ledger to a file, replacing anything already there
pub fn save_to_path<L>(path: &Path, ledger: &L) -> Result<(), Error>
where
    L: Ledger + ?Sized,
{
    let mut writer = BufWriter::new(File::create(path)?);
    save_expenses_to_csv(&mut writer, ledger)?;
    info!(
        "Saved {} expenses to {}",
        ledger.expenses().len(),
        path.display()
    );
    Ok(())
}

/// Loads the ledger from a file.
///
/// A missing file is reported as [`LoadOutcome::Missing`] and leaves the ledger unchanged.
pub fn load_from_path<L>(path: &Path, ledger: &mut L) -> Result<LoadOutcome, Error>
where
    L: Ledger + ?Sized,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("No expense file at {}", path.display());
            return Ok(LoadOutcome::Missing);
        }
        Err(err) => return Err(err.into()),
    };
    let restored = load_expenses_from_csv(BufReader::new(file), ledger)?;
    info!("Loaded {restored} expenses from {}", path.display());
    Ok(LoadOutcome::Loaded(restored))
}

//! Quoted-field CSV encoding and decoding for expense rows.
//!
//! Every field is written wrapped in double quotes with embedded quotes doubled:
//! ```csv
//! id,amount,memo,date
//! "1","5000","coffee, latte","2024-01-01"
//! "2","1200","she said ""hi""","2024-01-02"
//! ```
//! Reading is lenient. Malformed quoting never fails; an unterminated quote simply runs to
//! the end of the line.

use std::str::FromStr;

use crate::{
    errors::Error,
    types::{Expense, ExpenseId},
};

/// First line of every saved file
pub const HEADER: &str = "id,amount,memo,date";

/// Number of fields an expense row needs before it is decoded
const EXPENSE_FIELDS: usize = 4;

/// Quotes a single field, doubling any double quotes inside it.
///
/// Applied to every field regardless of content, so `""` is the encoding of an empty string.
#[must_use]
pub fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Scanner state while splitting a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// Commas separate fields
    Unquoted,
    /// Commas are literal; `""` is an escaped quote
    Quoted,
}

/// Splits one line (without its terminator) into fields.
///
/// Quote characters toggle between quoted and unquoted scanning and are not themselves kept,
/// except for a doubled quote inside a quoted section which yields one literal `"`. Whitespace
/// is kept as-is and an empty line gives a single empty field.
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match (state, ch) {
            (QuoteState::Quoted, '"') => {
                if chars.next_if_eq(&'"').is_some() {
                    current.push('"');
                } else {
                    state = QuoteState::Unquoted;
                }
            }
            (QuoteState::Unquoted, '"') => state = QuoteState::Quoted,
            (QuoteState::Unquoted, ',') => fields.push(std::mem::take(&mut current)),
            (_, ch) => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Encodes an expense as one line of four quoted fields: id, amount, memo, date
#[must_use]
pub fn encode_expense(expense: &Expense) -> String {
    [
        escape_field(&expense.id.to_string()),
        escape_field(&expense.amount.to_string()),
        escape_field(&expense.memo),
        escape_field(&expense.date),
    ]
    .join(",")
}

/// Decodes one data row into an expense.
///
/// Rows with fewer than four fields, blank lines included, give `Ok(None)`. Fields past the
/// fourth are ignored.
///
/// # Errors
/// [`Error::Field`] if the id or amount field is not an integer, [`Error::IdRange`] if the id
/// is above [`ExpenseId::MAX_LOADED`]
pub fn decode_row(line: &str) -> Result<Option<Expense>, Error> {
    let mut fields = parse_line(line);
    if fields.len() < EXPENSE_FIELDS {
        return Ok(None);
    }
    fields.truncate(EXPENSE_FIELDS);
    let date = fields.pop().unwrap_or_default();
    let memo = fields.pop().unwrap_or_default();
    let id: u64 = parse_number("id", &fields[0])?;
    if id > ExpenseId::MAX_LOADED {
        return Err(Error::IdRange(id));
    }
    let amount = parse_number("amount", &fields[1])?;
    Ok(Some(Expense {
        id: ExpenseId::from(id),
        amount,
        memo,
        date,
    }))
}

/// Parses a numeric column, keeping the field name and raw text for the error
fn parse_number<T>(field: &'static str, value: &str) -> Result<T, Error>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| Error::Field {
        field,
        value: value.to_string(),
        source,
    })
}

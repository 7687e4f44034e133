use std::num::ParseIntError;

/// Error type that can be returned by fallible operations in this crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading or writing the expense file or the interactive terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A CSV row carried all four fields, but its identifier or amount was not a number.
    ///
    /// This aborts the whole load; records restored before the offending row stay in the
    /// ledger.
    #[error("Field `{field}` is not a number: {value:?}")]
    Field {
        /// Name of the column that failed to parse (`id` or `amount`)
        field: &'static str,
        /// The raw field text after unquoting
        value: String,
        /// The underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
    /// A CSV row carried an identifier too large for the ledger to count past
    #[error("Identifier {0} is out of range")]
    IdRange(u64),
    /// The interactive input stream ended while a command or answer was expected
    #[error("No more input can be read")]
    InputExhausted,
}

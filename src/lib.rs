#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
/// Quoted-field CSV encoding and decoding of expense rows
pub mod codec;
/// Command-line configuration
pub mod config;
/// Interactive menu loop
pub mod controller;
/// Error handling and custom [`Error`](std::error::Error) types
pub mod errors;
/// Functions for saving and loading a ledger as CSV
pub mod io;
/// Ledger operations and aggregates
mod ops;
/// Data types used throughout the expense ledger
pub mod types;

//! Error types for the dino-data crate.
//!
//! This module defines semantic error enums for roster parsing, mock data
//! generation, and table reservation, following the project's error handling
//! conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing or loading a roster document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The roster file could not be read.
    #[error("failed to read roster file at '{path}': {message}")]
    IoError {
        /// Path to the roster file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The roster JSON is malformed or missing required fields.
    #[error("invalid roster JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The roster version is not supported.
    #[error("unsupported roster version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the roster.
        actual: u32,
    },

    /// The roster lists no restaurants.
    #[error("roster contains no restaurants")]
    EmptyRestaurants,

    /// Two restaurants share an identifier.
    #[error("duplicate restaurant id '{id}'")]
    DuplicateRestaurant {
        /// The repeated identifier.
        id: String,
    },

    /// A restaurant does not use the fixed table layout.
    #[error("restaurant '{id}' declares {actual} tables; the layout has {expected}")]
    UnsupportedTableCount {
        /// Restaurant identifier.
        id: String,
        /// Number of tables in the fixed layout.
        expected: usize,
        /// Number of tables declared in the roster.
        actual: usize,
    },

    /// A restaurant claims more free tables than it has.
    #[error("restaurant '{id}' has {available} available tables but only {total} in total")]
    AvailableExceedsTotal {
        /// Restaurant identifier.
        id: String,
        /// Declared available tables.
        available: usize,
        /// Declared total tables.
        total: usize,
    },

    /// The roster lists no customer names.
    #[error("roster contains no customer names")]
    EmptyCustomerNames,

    /// A customer name is empty or whitespace-only.
    #[error("customer name at index {index} is blank")]
    BlankCustomerName {
        /// Index of the blank name in the array.
        index: usize,
    },
}

/// Errors that can occur while generating mock reservation data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// More distinct time slots were requested than the evening offers.
    #[error("requested {requested} distinct time slots but only {available} exist")]
    NotEnoughTimeSlots {
        /// Number of slots requested.
        requested: usize,
        /// Number of canonical slots.
        available: usize,
    },

    /// More available tables were requested than the layout holds.
    #[error("{available} available tables requested but the layout has {total}")]
    TooManyAvailableTables {
        /// Requested number of free tables.
        available: usize,
        /// Number of tables in the layout.
        total: usize,
    },

    /// No customer names were supplied to pick from.
    #[error("customer name roster is empty")]
    EmptyNameRoster,

    /// A generated booking could not be placed on the layout.
    #[error("generated reservation rejected: {0}")]
    Reservation(#[from] ReservationError),
}

/// Errors raised when building or applying a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    /// The table number is outside the layout.
    #[error("table {value} does not exist; tables are numbered 1 to {max}")]
    UnknownTable {
        /// Rejected table number.
        value: usize,
        /// Highest table number.
        max: usize,
    },

    /// The party size is outside the supported range.
    #[error("party size {value} is outside {min}..={max}")]
    PartySizeOutOfRange {
        /// Rejected party size.
        value: u8,
        /// Smallest allowed party.
        min: u8,
        /// Largest allowed party.
        max: u8,
    },

    /// The time is not written as `HH:MM`.
    #[error("'{value}' is not a time in HH:MM form")]
    MalformedTime {
        /// Rejected input.
        value: String,
    },

    /// The time is well formed but is not a bookable slot.
    #[error("{value} is not a reservation slot between 18:00 and 21:00")]
    UnavailableTime {
        /// Rejected input.
        value: String,
    },

    /// The customer name is empty or whitespace-only.
    #[error("customer name must not be empty")]
    BlankCustomerName,

    /// The table already holds a reservation.
    #[error("table {table} is already reserved")]
    AlreadyReserved {
        /// Table number.
        table: u8,
    },
}

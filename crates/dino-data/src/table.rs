//! Table layout and reservation types.
//!
//! Every restaurant uses the same fixed layout of [`TABLE_COUNT`] tables. A
//! table is either available or holds exactly one [`Reservation`]; the
//! reservation data only exists inside the reserved state.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::error::ReservationError;

/// Number of tables in every restaurant layout.
pub const TABLE_COUNT: usize = 25;

const MAX_TABLE_ID: u8 = 25;

/// First hour with reservation slots.
pub const FIRST_SLOT_HOUR: u8 = 18;

/// Last hour with a reservation slot; only its `:00` boundary is bookable.
pub const LAST_SLOT_HOUR: u8 = 21;

const SLOT_MINUTES: [u8; 4] = [0, 15, 30, 45];

/// Number of bookable slots in an evening.
pub const SLOT_COUNT: usize = 13;

/// Identifier of a table, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "u8")]
pub struct TableId(u8);

impl TableId {
    /// Validates a table number.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::UnknownTable`] when `value` is not in
    /// `1..=25`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dino_data::TableId;
    ///
    /// assert_eq!(TableId::new(7).map(TableId::get), Ok(7));
    /// assert!(TableId::new(26).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self, ReservationError> {
        u8::try_from(value)
            .ok()
            .filter(|id| (1..=MAX_TABLE_ID).contains(id))
            .map(Self)
            .ok_or(ReservationError::UnknownTable {
                value,
                max: TABLE_COUNT,
            })
    }

    /// Every table in layout order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_TABLE_ID).map(Self)
    }

    /// Returns the table number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of the table in the layout.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<usize> for TableId {
    type Error = ReservationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TableId> for u8 {
    fn from(value: TableId) -> Self {
        value.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Number of guests in a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PartySize(u8);

impl PartySize {
    /// Smallest party that can book a table.
    pub const MIN: u8 = 1;
    /// Largest party a table seats.
    pub const MAX: u8 = 5;

    /// Validates a party size.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::PartySizeOutOfRange`] outside `1..=5`.
    pub const fn new(value: u8) -> Result<Self, ReservationError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ReservationError::PartySizeOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The word used for the guests: `dino` for one, `dinos` otherwise.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        if self.0 == 1 { "dino" } else { "dinos" }
    }
}

impl Distribution<PartySize> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PartySize {
        PartySize(rng.random_range(PartySize::MIN..=PartySize::MAX))
    }
}

impl TryFrom<u8> for PartySize {
    type Error = ReservationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartySize> for u8 {
    fn from(value: PartySize) -> Self {
        value.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.noun())
    }
}

/// A 15-minute reservation boundary between 18:00 and 21:00.
///
/// Displays and serialises as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    /// The earliest bookable slot, 18:00.
    pub const FIRST: Self = Self {
        hour: FIRST_SLOT_HOUR,
        minute: 0,
    };

    /// Every bookable slot in chronological order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dino_data::TimeSlot;
    ///
    /// let slots: Vec<String> = TimeSlot::all().map(|slot| slot.to_string()).collect();
    /// assert_eq!(slots.first().map(String::as_str), Some("18:00"));
    /// assert_eq!(slots.last().map(String::as_str), Some("21:00"));
    /// assert_eq!(slots.len(), 13);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .flat_map(|hour| SLOT_MINUTES.into_iter().map(move |minute| Self { hour, minute }))
            .filter(|slot| slot.hour < LAST_SLOT_HOUR || slot.minute == 0)
    }

    /// Hour component.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for TimeSlot {
    type Err = ReservationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || ReservationError::MalformedTime {
            value: value.to_owned(),
        };
        let (hour_text, minute_text) = value.split_once(':').ok_or_else(malformed)?;
        let hour = parse_two_digits(hour_text).ok_or_else(malformed)?;
        let minute = parse_two_digits(minute_text).ok_or_else(malformed)?;
        let candidate = Self { hour, minute };
        if Self::all().any(|slot| slot == candidate) {
            Ok(candidate)
        } else {
            Err(ReservationError::UnavailableTime {
                value: value.to_owned(),
            })
        }
    }
}

impl Distribution<TimeSlot> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TimeSlot {
        TimeSlot::all().choose(rng).unwrap_or(TimeSlot::FIRST)
    }
}

fn parse_two_digits(part: &str) -> Option<u8> {
    if part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit()) {
        part.parse().ok()
    } else {
        None
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ReservationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A confirmed booking held by a reserved table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    customer_name: String,
    party_size: PartySize,
    time: TimeSlot,
}

impl Reservation {
    /// Builds a reservation for a named customer.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::BlankCustomerName`] if the name is empty or
    /// whitespace-only.
    pub fn new(
        name: impl Into<String>,
        party_size: PartySize,
        time: TimeSlot,
    ) -> Result<Self, ReservationError> {
        let customer_name = name.into();
        if customer_name.trim().is_empty() {
            return Err(ReservationError::BlankCustomerName);
        }
        Ok(Self {
            customer_name,
            party_size,
            time,
        })
    }

    /// Customer the table is held for.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Number of guests.
    #[must_use]
    pub const fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// Arrival slot.
    #[must_use]
    pub const fn time(&self) -> TimeSlot {
        self.time
    }

    /// One-line description, e.g. `Ian Malcolm - 2 dinos at 19:15`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} - {} at {}",
            self.customer_name, self.party_size, self.time
        )
    }
}

/// A manual booking as entered in the reservation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    /// Customer the table is held for.
    pub customer_name: String,
    /// Contact phone number; kept with the request only.
    pub phone: String,
    /// Number of guests.
    pub party_size: PartySize,
    /// Arrival slot.
    pub time: TimeSlot,
}

impl ReservationRequest {
    /// Converts the dialog input into a table reservation.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::BlankCustomerName`] for a blank name.
    pub fn into_reservation(self) -> Result<Reservation, ReservationError> {
        Reservation::new(self.customer_name, self.party_size, self.time)
    }
}

/// Occupancy of a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TableStatus {
    /// Free to book.
    Available,
    /// Held for a customer.
    Reserved(Reservation),
}

/// One table in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    id: TableId,
    #[serde(flatten)]
    status: TableStatus,
}

impl Table {
    const fn available(id: TableId) -> Self {
        Self {
            id,
            status: TableStatus::Available,
        }
    }

    /// Table number.
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// Current occupancy.
    #[must_use]
    pub const fn status(&self) -> &TableStatus {
        &self.status
    }

    /// Returns `true` when the table holds a reservation.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self.status, TableStatus::Reserved(_))
    }

    /// The reservation held by this table, if any.
    #[must_use]
    pub const fn reservation(&self) -> Option<&Reservation> {
        match &self.status {
            TableStatus::Reserved(reservation) => Some(reservation),
            TableStatus::Available => None,
        }
    }
}

/// The full layout of one restaurant.
///
/// ## Invariants
/// - Holds exactly [`TABLE_COUNT`] tables, numbered 1 to 25 in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TableGrid {
    tables: Vec<Table>,
}

impl Default for TableGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TableGrid {
    /// A layout with every table available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: TableId::all().map(Table::available).collect(),
        }
    }

    /// All tables in layout order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The table with the given number.
    #[expect(
        clippy::indexing_slicing,
        reason = "TableId is always within the fixed layout"
    )]
    #[must_use]
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.index()]
    }

    /// Books an available table.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationError::AlreadyReserved`] if the table is taken.
    #[expect(
        clippy::indexing_slicing,
        reason = "TableId is always within the fixed layout"
    )]
    pub fn reserve(&mut self, id: TableId, reservation: Reservation) -> Result<(), ReservationError> {
        let table = &mut self.tables[id.index()];
        if table.is_reserved() {
            return Err(ReservationError::AlreadyReserved { table: id.get() });
        }
        table.status = TableStatus::Reserved(reservation);
        Ok(())
    }

    /// Number of free tables.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.tables.iter().filter(|table| !table.is_reserved()).count()
    }

    /// Number of booked tables.
    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.tables.iter().filter(|table| table.is_reserved()).count()
    }

    /// Customer names currently holding a table.
    pub fn customer_names(&self) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .filter_map(Table::reservation)
            .map(Reservation::customer_name)
    }
}

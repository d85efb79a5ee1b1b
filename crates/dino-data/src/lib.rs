//! Credential validation and mock reservation data for Dino Reserve.
//!
//! This crate holds the pure logic behind the demo: the rules a manager's
//! username, email, and password must satisfy, the fixed table layout, and
//! the generators that fill a restaurant with believable bookings. It has no
//! I/O beyond optionally reading a roster file.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - First-error-wins validation of signup and login credentials
//! - A 25-table layout whose tables are either free or hold one reservation
//! - Random time slots, party sizes, and customer names for mock bookings
//! - An embedded restaurant and customer-name roster
//!
//! # Example
//!
//! ```
//! use dino_data::{Roster, generate_grid, validate_password};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! assert!(validate_password("Dino@123").is_ok());
//!
//! let roster = Roster::builtin().expect("embedded roster");
//! let bistro = roster.find_restaurant("trex-bistro").expect("restaurant exists");
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let grid = generate_grid(&mut rng, roster.customer_names(), bistro.available_tables())
//!     .expect("generation succeeds");
//!
//! assert_eq!(grid.reserved_count(), 7);
//! ```

mod error;
mod generator;
mod roster;
mod table;
mod validation;

pub use error::{GenerationError, ReservationError, RosterError};
pub use generator::{
    canonical_time_slots, generate_grid, generate_party_size, generate_time_slots,
    pick_unused_name, suggest_reservation,
};
pub use roster::{Restaurant, Roster};
pub use table::{
    FIRST_SLOT_HOUR, LAST_SLOT_HOUR, PartySize, Reservation, ReservationRequest, SLOT_COUNT,
    TABLE_COUNT, Table, TableGrid, TableId, TableStatus, TimeSlot,
};
pub use validation::{
    Field, FieldError, FieldErrors, SPECIAL_CHARACTERS, validate_credentials, validate_email,
    validate_field, validate_password, validate_username,
};

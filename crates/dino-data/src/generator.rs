//! Mock reservation generation.
//!
//! These helpers fill a fresh table layout with believable bookings and
//! pre-fill the manual reservation dialog. Every function takes the RNG as a
//! parameter: pass a seeded `ChaCha8Rng` for reproducible layouts or an
//! entropy-seeded one for a different evening on every visit.
//!
//! Selection without replacement always shuffles or samples indices, so the
//! amount of work is bounded by the input size.

use std::collections::HashSet;
use std::hash::BuildHasher;

use fake::Fake;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom, index};

use crate::error::GenerationError;
use crate::table::{
    PartySize, Reservation, ReservationRequest, SLOT_COUNT, TABLE_COUNT, TableGrid, TableId,
    TimeSlot,
};

/// Returns the 13 bookable slots from 18:00 to 21:00 in order.
#[must_use]
pub fn canonical_time_slots() -> Vec<TimeSlot> {
    TimeSlot::all().collect()
}

/// Draws `count` distinct time slots in random order.
///
/// # Errors
///
/// Returns [`GenerationError::NotEnoughTimeSlots`] when `count` exceeds the
/// 13 slots of an evening.
///
/// # Example
///
/// ```
/// use dino_data::generate_time_slots;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let slots = generate_time_slots(&mut rng, 5).expect("enough slots");
/// assert_eq!(slots.len(), 5);
/// assert!(generate_time_slots(&mut rng, 14).is_err());
/// ```
pub fn generate_time_slots<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<TimeSlot>, GenerationError> {
    if count > SLOT_COUNT {
        return Err(GenerationError::NotEnoughTimeSlots {
            requested: count,
            available: SLOT_COUNT,
        });
    }

    let mut slots = canonical_time_slots();
    slots.shuffle(rng);
    slots.truncate(count);
    Ok(slots)
}

/// Draws a party size uniformly from 1 to 5.
pub fn generate_party_size<R: Rng + ?Sized>(rng: &mut R) -> PartySize {
    rng.random()
}

/// Picks a customer name that is not yet in `used`.
///
/// Once every name in the roster is taken, any name may be returned again.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyNameRoster`] if `roster` is empty.
pub fn pick_unused_name<'a, R, S>(
    rng: &mut R,
    roster: &'a [String],
    used: &HashSet<String, S>,
) -> Result<&'a str, GenerationError>
where
    R: Rng + ?Sized,
    S: BuildHasher,
{
    let unused: Vec<&String> = roster
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .collect();

    unused
        .choose(rng)
        .copied()
        .or_else(|| roster.choose(rng))
        .map(String::as_str)
        .ok_or(GenerationError::EmptyNameRoster)
}

/// Builds a layout with `25 - available_tables` mock reservations.
///
/// Reserved tables are sampled without replacement. Each gets a name from
/// `names` (no repeats until the pool runs dry), a random party size, and a
/// time slot. Slots are distinct for the first 13 bookings; larger bookings
/// are dealt from a freshly shuffled evening for each further round.
///
/// # Errors
///
/// Returns [`GenerationError`] if more than 25 tables are requested free or
/// tables must be booked from an empty name pool.
///
/// # Example
///
/// ```
/// use dino_data::{Roster, generate_grid};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let roster = Roster::builtin().expect("embedded roster");
/// let mut rng = ChaCha8Rng::seed_from_u64(2026);
/// let grid = generate_grid(&mut rng, roster.customer_names(), 18).expect("generated");
///
/// assert_eq!(grid.reserved_count(), 7);
/// assert_eq!(grid.available_count(), 18);
/// ```
pub fn generate_grid<R: Rng + ?Sized>(
    rng: &mut R,
    names: &[String],
    available_tables: usize,
) -> Result<TableGrid, GenerationError> {
    let reserved_count = TABLE_COUNT.checked_sub(available_tables).ok_or(
        GenerationError::TooManyAvailableTables {
            available: available_tables,
            total: TABLE_COUNT,
        },
    )?;

    let table_indices = index::sample(rng, TABLE_COUNT, reserved_count);
    let times = deal_time_slots(rng, reserved_count)?;

    let mut used_names = HashSet::with_capacity(reserved_count);
    let mut grid = TableGrid::new();
    for (table_index, time) in table_indices.into_iter().zip(times) {
        let name = pick_unused_name(rng, names, &used_names)?.to_owned();
        used_names.insert(name.clone());
        let reservation = Reservation::new(name, generate_party_size(rng), time)?;
        grid.reserve(TableId::new(table_index + 1)?, reservation)?;
    }

    Ok(grid)
}

/// Deals `count` slots, reshuffling the evening whenever it runs out.
fn deal_time_slots<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<TimeSlot>, GenerationError> {
    let mut dealt = Vec::with_capacity(count);
    while dealt.len() < count {
        let remaining = count - dealt.len();
        dealt.extend(generate_time_slots(rng, remaining.min(SLOT_COUNT))?);
    }
    Ok(dealt)
}

/// Pre-fills the manual reservation dialog.
///
/// The suggestion uses a name nobody on `grid` holds yet (while the pool
/// allows), a random party size and slot, and a fake phone number.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyNameRoster`] if `names` is empty.
pub fn suggest_reservation<R: Rng + ?Sized>(
    rng: &mut R,
    names: &[String],
    grid: &TableGrid,
) -> Result<ReservationRequest, GenerationError> {
    let used: HashSet<String> = grid.customer_names().map(str::to_owned).collect();
    let customer_name = pick_unused_name(rng, names, &used)?.to_owned();
    let phone: String = PhoneNumber(EN).fake_with_rng(rng);

    Ok(ReservationRequest {
        customer_name,
        phone,
        party_size: generate_party_size(rng),
        time: rng.random(),
    })
}

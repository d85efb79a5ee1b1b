//! Restaurant and customer-name roster.
//!
//! The roster is fixed demo configuration: the restaurants a manager can pick
//! from and the pool of customer names used for mock reservations. A copy is
//! embedded in the crate and parsed once per process; alternative rosters can
//! be loaded from JSON files with the same schema.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::Utf8Path;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::table::TABLE_COUNT;

/// Current supported roster version.
const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_ROSTER_JSON: &str = include_str!("../data/roster.json");

static BUILTIN_ROSTER: LazyLock<Result<Roster, RosterError>> =
    LazyLock::new(|| Roster::from_json(BUILTIN_ROSTER_JSON));

/// A dinosaur-themed restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    id: String,
    name: String,
    dino_type: String,
    emoji: String,
    description: String,
    total_tables: usize,
    available_tables: usize,
}

impl Restaurant {
    /// Stable slug, e.g. `trex-bistro`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resident dinosaur species.
    #[must_use]
    pub fn dino_type(&self) -> &str {
        &self.dino_type
    }

    /// Decorative emoji shown beside the name.
    #[must_use]
    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    /// Marketing blurb.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of tables in the layout.
    #[must_use]
    pub const fn total_tables(&self) -> usize {
        self.total_tables
    }

    /// Number of tables left free when the layout is first generated.
    #[must_use]
    pub const fn available_tables(&self) -> usize {
        self.available_tables
    }

    /// Number of tables pre-booked with mock reservations.
    #[must_use]
    pub const fn reserved_tables(&self) -> usize {
        self.total_tables.saturating_sub(self.available_tables)
    }
}

/// Immutable restaurant and customer-name configuration.
///
/// # Example
///
/// ```
/// use dino_data::Roster;
///
/// let json = r#"{
///     "version": 1,
///     "restaurants": [{
///         "id": "raptor-cafe",
///         "name": "Raptor Café",
///         "dinoType": "Velociraptor",
///         "emoji": "🦖",
///         "description": "Quick bites for fast diners.",
///         "totalTables": 25,
///         "availableTables": 20
///     }],
///     "customerNames": ["Owen Grady"]
/// }"#;
///
/// let roster = Roster::from_json(json).expect("valid roster");
/// let restaurant = roster.find_restaurant("raptor-cafe").expect("restaurant exists");
/// assert_eq!(restaurant.reserved_tables(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    version: u32,
    restaurants: Vec<Restaurant>,
    customer_names: Vec<String>,
}

impl Roster {
    /// Returns the roster embedded in the crate.
    ///
    /// The embedded document is parsed on first use and shared afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if the embedded document fails validation.
    pub fn builtin() -> Result<&'static Self, RosterError> {
        BUILTIN_ROSTER.as_ref().map_err(Clone::clone)
    }

    /// Parses a roster from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] if:
    /// - The JSON is malformed or misses required fields
    /// - The version is unsupported
    /// - There are no restaurants, or two share an id
    /// - A restaurant does not use the 25-table layout, or claims more free
    ///   tables than it has
    /// - There are no customer names, or one is blank
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let raw: RawRoster = serde_json::from_str(json).map_err(|e| RosterError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a roster file relative to a directory capability.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IoError`] if the file cannot be read, or any
    /// error from [`Roster::from_json`].
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RosterError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RosterError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawRoster) -> Result<Self, RosterError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RosterError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.restaurants.is_empty() {
            return Err(RosterError::EmptyRestaurants);
        }

        let mut seen = HashSet::new();
        let restaurants = raw
            .restaurants
            .into_iter()
            .map(|restaurant| {
                if !seen.insert(restaurant.id.clone()) {
                    return Err(RosterError::DuplicateRestaurant { id: restaurant.id });
                }
                Restaurant::try_from(restaurant)
            })
            .collect::<Result<Vec<_>, _>>()?;

        if raw.customer_names.is_empty() {
            return Err(RosterError::EmptyCustomerNames);
        }
        if let Some(index) = raw
            .customer_names
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(RosterError::BlankCustomerName { index });
        }

        Ok(Self {
            version: raw.version,
            restaurants,
            customer_names: raw.customer_names,
        })
    }

    /// Returns the roster version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all restaurants in listing order.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Returns the customer-name pool.
    #[must_use]
    pub fn customer_names(&self) -> &[String] {
        &self.customer_names
    }

    /// Finds a restaurant by id.
    #[must_use]
    pub fn find_restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|restaurant| restaurant.id == id)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoster {
    version: u32,
    restaurants: Vec<RawRestaurant>,
    customer_names: Vec<String>,
}

/// Raw JSON representation of a restaurant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRestaurant {
    id: String,
    name: String,
    dino_type: String,
    emoji: String,
    description: String,
    total_tables: usize,
    available_tables: usize,
}

impl TryFrom<RawRestaurant> for Restaurant {
    type Error = RosterError;

    fn try_from(raw: RawRestaurant) -> Result<Self, Self::Error> {
        if raw.total_tables != TABLE_COUNT {
            return Err(RosterError::UnsupportedTableCount {
                id: raw.id,
                expected: TABLE_COUNT,
                actual: raw.total_tables,
            });
        }
        if raw.available_tables > raw.total_tables {
            return Err(RosterError::AvailableExceedsTotal {
                id: raw.id,
                available: raw.available_tables,
                total: raw.total_tables,
            });
        }
        Ok(Self {
            id: raw.id,
            name: raw.name,
            dino_type: raw.dino_type,
            emoji: raw.emoji,
            description: raw.description,
            total_tables: raw.total_tables,
            available_tables: raw.available_tables,
        })
    }
}

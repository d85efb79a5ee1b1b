//! Plain-text views of the restaurant list and a table layout.

use std::fmt;

use dino_data::{Restaurant, Table};

use crate::table_layout::TableLayout;

/// Tables per row of the floor plan.
const GRID_COLUMNS: usize = 5;

/// Width every floor-plan cell is padded to.
const CELL_WIDTH: usize = 26;

/// The restaurant picker.
#[derive(Debug, Clone, Copy)]
pub struct RestaurantList<'a> {
    restaurants: &'a [Restaurant],
}

impl<'a> RestaurantList<'a> {
    /// Wraps the restaurants to list.
    #[must_use]
    pub const fn new(restaurants: &'a [Restaurant]) -> Self {
        Self { restaurants }
    }
}

impl fmt::Display for RestaurantList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for restaurant in self.restaurants {
            writeln!(
                f,
                "{} {} [{}]",
                restaurant.emoji(),
                restaurant.name(),
                restaurant.id()
            )?;
            writeln!(
                f,
                "    {} | {} of {} tables available",
                restaurant.dino_type(),
                restaurant.available_tables(),
                restaurant.total_tables()
            )?;
            writeln!(f, "    {}", restaurant.description())?;
        }
        Ok(())
    }
}

/// A restaurant's floor plan with availability badges.
#[derive(Debug, Clone, Copy)]
pub struct LayoutView<'a> {
    layout: &'a TableLayout,
    username: Option<&'a str>,
}

impl<'a> LayoutView<'a> {
    /// Wraps a layout for display.
    #[must_use]
    pub const fn new(layout: &'a TableLayout) -> Self {
        Self {
            layout,
            username: None,
        }
    }

    /// Greets the signed-in manager above the floor plan.
    #[must_use]
    pub const fn greeting(mut self, username: &'a str) -> Self {
        self.username = Some(username);
        self
    }
}

impl fmt::Display for LayoutView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let restaurant = self.layout.restaurant();
        if let Some(username) = self.username {
            writeln!(f, "Welcome, {username}!")?;
        }
        writeln!(
            f,
            "{} {} ({})",
            restaurant.emoji(),
            restaurant.name(),
            restaurant.dino_type()
        )?;
        writeln!(
            f,
            "🦕 {} Available | 🍽️ {} Feeding",
            self.layout.available_count(),
            self.layout.reserved_count()
        )?;
        writeln!(f)?;

        for row in self.layout.grid().tables().chunks(GRID_COLUMNS) {
            let cells: Vec<String> = row
                .iter()
                .map(|table| format!("{:<CELL_WIDTH$}", cell(table)))
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }
        Ok(())
    }
}

/// One floor-plan cell: the guest's first name, party, and slot, or a free
/// table marker.
fn cell(table: &Table) -> String {
    match table.reservation() {
        Some(reservation) => {
            let name = reservation.customer_name();
            let first_name = name.split_whitespace().next().unwrap_or(name);
            format!(
                "{:>2} {} | {} | {}",
                table.id(),
                first_name,
                reservation.party_size(),
                reservation.time()
            )
        }
        None => format!("{:>2} Hungry Dino", table.id()),
    }
}

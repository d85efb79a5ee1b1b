//! Per-restaurant table layout.
//!
//! Opening a restaurant generates its mock bookings once; everything after
//! that (inspecting a booked table, picking a free one, confirming a manual
//! booking) mutates this layout's grid and nothing else.

use std::fmt;
use std::sync::Arc;

use dino_data::{
    GenerationError, Reservation, ReservationError, ReservationRequest, Restaurant, TableGrid,
    TableId, generate_grid, suggest_reservation,
};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::notify::{Notification, Notifier};

/// Errors raised by layout operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A booking was confirmed with no table picked.
    #[error("no table is selected for reservation")]
    NoTableSelected,
    /// The booking details were rejected.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
    /// Mock bookings could not be generated.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// What a click on a table did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The table was free and is now selected for booking.
    Selected(TableId),
    /// The table was booked; its details were shown instead.
    ShowedReservation(TableId),
}

/// A restaurant's tables for one visit.
#[derive(Clone)]
pub struct TableLayout {
    restaurant: Restaurant,
    customer_names: Vec<String>,
    grid: TableGrid,
    selected: Option<TableId>,
    notifier: Arc<dyn Notifier>,
}

impl TableLayout {
    /// Opens `restaurant`, booking all but its available tables with mock
    /// reservations drawn from `customer_names`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Generation`] if the mock bookings cannot be
    /// generated, e.g. when `customer_names` is empty.
    pub fn open<R: Rng + ?Sized>(
        restaurant: Restaurant,
        customer_names: &[String],
        rng: &mut R,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, LayoutError> {
        let grid = generate_grid(rng, customer_names, restaurant.available_tables())?;
        info!(
            restaurant = restaurant.id(),
            reserved = grid.reserved_count(),
            "table layout opened"
        );
        Ok(Self {
            restaurant,
            customer_names: customer_names.to_vec(),
            grid,
            selected: None,
            notifier,
        })
    }

    /// Handles a click on table `id`.
    ///
    /// A booked table shows its details for three seconds; a free table is
    /// selected and the booking dialog opens for it.
    pub fn click(&mut self, id: TableId) -> ClickOutcome {
        if let Some(reservation) = self.grid.table(id).reservation() {
            self.notifier.notify(
                Notification::info(format!("Table {id} Reservation"))
                    .with_description(reservation.summary()),
            );
            return ClickOutcome::ShowedReservation(id);
        }

        debug!(table = id.get(), "table selected");
        self.selected = Some(id);
        ClickOutcome::Selected(id)
    }

    /// The table whose booking dialog is open.
    #[must_use]
    pub const fn selected_table(&self) -> Option<TableId> {
        self.selected
    }

    /// Suggested values for the booking dialog.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Generation`] if there are no customer names to
    /// suggest from.
    pub fn suggest<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ReservationRequest, LayoutError> {
        Ok(suggest_reservation(rng, &self.customer_names, &self.grid)?)
    }

    /// Closes the booking dialog without booking.
    pub const fn close_dialog(&mut self) {
        self.selected = None;
    }

    /// Books the selected table and closes the dialog.
    ///
    /// The phone number is collected by the dialog but not stored on the
    /// table. On error the selection is kept so the dialog stays open.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NoTableSelected`] if no table is selected, or
    /// [`LayoutError::Reservation`] if the request is invalid.
    pub fn confirm(&mut self, request: ReservationRequest) -> Result<TableId, LayoutError> {
        let id = self.selected.ok_or(LayoutError::NoTableSelected)?;
        let reservation: Reservation = request.into_reservation()?;
        let summary = reservation.summary();
        self.grid.reserve(id, reservation)?;
        self.selected = None;

        info!(
            restaurant = self.restaurant.id(),
            table = id.get(),
            "table reserved"
        );
        self.notifier.notify(
            Notification::success(format!("Table {id} reserved successfully!"))
                .with_description(summary),
        );
        Ok(id)
    }

    /// The restaurant being managed.
    #[must_use]
    pub const fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    /// The current table grid.
    #[must_use]
    pub const fn grid(&self) -> &TableGrid {
        &self.grid
    }

    /// Number of free tables.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.grid.available_count()
    }

    /// Number of booked tables.
    #[must_use]
    pub fn reserved_count(&self) -> usize {
        self.grid.reserved_count()
    }
}

impl fmt::Debug for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableLayout")
            .field("restaurant", &self.restaurant.id())
            .field("grid", &self.grid)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

//! Navigation between the login, restaurant list, and table screens.

use std::fmt;
use std::sync::Arc;

use dino_data::Roster;
use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::notify::Notifier;
use crate::table_layout::{LayoutError, TableLayout};

/// Errors raised by navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No restaurant has the requested id.
    #[error("unknown restaurant '{id}'")]
    UnknownRestaurant {
        /// Requested restaurant id.
        id: String,
    },
    /// A restaurant was opened from somewhere other than the restaurant list.
    #[error("restaurants can only be opened from the restaurant list")]
    NotOnRestaurantList,
    /// The restaurant's layout could not be built.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    /// The signup/login form.
    Login,
    /// The list of restaurants for a signed-in manager.
    Restaurants {
        /// Signed-in manager.
        username: String,
    },
    /// One restaurant's tables.
    Tables {
        /// Signed-in manager.
        username: String,
        /// The open layout.
        layout: Box<TableLayout>,
    },
}

/// One manager's walk through the app.
pub struct Session<'r> {
    roster: &'r Roster,
    screen: Screen,
    notifier: Arc<dyn Notifier>,
}

impl<'r> Session<'r> {
    /// Starts on the login screen.
    #[must_use]
    pub const fn new(roster: &'r Roster, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            roster,
            screen: Screen::Login,
            notifier,
        }
    }

    /// Shows the restaurant list for `username`.
    pub fn logged_in(&mut self, username: impl Into<String>) {
        let name = username.into();
        info!(username = %name, "manager signed in");
        self.screen = Screen::Restaurants { username: name };
    }

    /// Opens the restaurant `id`, generating a fresh layout for this visit.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotOnRestaurantList`] unless the restaurant
    /// list is showing, [`SessionError::UnknownRestaurant`] for an unknown
    /// id, or [`SessionError::Layout`] if the layout cannot be generated.
    pub fn open_restaurant<R: Rng + ?Sized>(
        &mut self,
        id: &str,
        rng: &mut R,
    ) -> Result<&mut TableLayout, SessionError> {
        let Screen::Restaurants { username: current } = &self.screen else {
            return Err(SessionError::NotOnRestaurantList);
        };
        let username = current.clone();
        let restaurant = self
            .roster
            .find_restaurant(id)
            .ok_or_else(|| SessionError::UnknownRestaurant { id: id.to_owned() })?;

        let layout = TableLayout::open(
            restaurant.clone(),
            self.roster.customer_names(),
            rng,
            Arc::clone(&self.notifier),
        )?;
        self.screen = Screen::Tables {
            username,
            layout: Box::new(layout),
        };
        self.layout_mut().ok_or(SessionError::NotOnRestaurantList)
    }

    /// Leaves the table screen for the restaurant list.
    ///
    /// Does nothing on other screens.
    pub fn back(&mut self) {
        let screen = std::mem::replace(&mut self.screen, Screen::Login);
        self.screen = match screen {
            Screen::Tables { username, .. } => Screen::Restaurants { username },
            other => other,
        };
    }

    /// Returns to the login screen.
    pub fn log_out(&mut self) {
        if let Some(username) = self.username() {
            info!(username, "manager signed out");
        }
        self.screen = Screen::Login;
    }

    /// The current screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The signed-in manager, if any.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        match &self.screen {
            Screen::Login => None,
            Screen::Restaurants { username } | Screen::Tables { username, .. } => {
                Some(username.as_str())
            }
        }
    }

    /// The open layout, if the table screen is showing.
    pub fn layout_mut(&mut self) -> Option<&mut TableLayout> {
        match &mut self.screen {
            Screen::Tables { layout, .. } => Some(layout.as_mut()),
            _ => None,
        }
    }

    /// The roster restaurants are opened from.
    #[must_use]
    pub const fn roster(&self) -> &'r Roster {
        self.roster
    }
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("screen", &self.screen)
            .finish_non_exhaustive()
    }
}

//! Interaction state and terminal front end for Dino Reserve.
//!
//! The modules here hold what a graphical front end would drive: the login
//! form and its delayed hand-over, navigation between screens, and a
//! restaurant's table layout with inspection and manual booking. Outcomes
//! are reported through the [`Notifier`] port.

pub mod cli;
pub mod config;
pub mod login;
pub mod notify;
pub mod render;
pub mod session;
pub mod table_layout;

pub use cli::{Cli, CliError, Command};
pub use config::{ReserveSettings, SettingsError};
pub use login::{AuthMode, FormPhase, LoginForm, LoginPage, PendingLogin, Submission};
pub use notify::{
    ConsoleNotifier, INFO_DURATION, Notification, NotificationKind, Notifier, SUCCESS_DURATION,
    TracingNotifier,
};
pub use render::{LayoutView, RestaurantList};
pub use session::{Screen, Session, SessionError};
pub use table_layout::{ClickOutcome, LayoutError, TableLayout};

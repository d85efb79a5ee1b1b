//! Command-line front end.
//!
//! Each subcommand walks the same state machines an interactive front end
//! would: the login page for `auth`, and a signed-in session for `grid` and
//! `reserve`.

use std::io::{self, Write};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dino_data::{
    FieldErrors, PartySize, ReservationError, ReservationRequest, Restaurant,
    TableGrid, TableId, TimeSlot,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ReserveSettings, SettingsError};
use crate::login::{LoginPage, Submission};
use crate::notify::Notifier;
use crate::render::{LayoutView, RestaurantList};
use crate::session::{Session, SessionError};
use crate::table_layout::{ClickOutcome, LayoutError};

/// Errors reported by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error("failed to load configuration: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// Settings loaded but named unusable resources.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Navigation failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// A layout operation failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A command-line booking value was invalid.
    #[error(transparent)]
    Reservation(#[from] ReservationError),
    /// The credentials failed validation.
    #[error("{count} credential field(s) failed validation")]
    CredentialsRejected {
        /// Number of failing fields.
        count: usize,
    },
    /// The grid could not be serialised.
    #[error("failed to serialise grid: {0}")]
    Json(#[from] serde_json::Error),
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// `dino-reserve` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dino-reserve",
    about = "Manage table bookings at prehistoric restaurants",
    version
)]
pub struct Cli {
    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List restaurants and how many tables each keeps free.
    Restaurants,
    /// Show a restaurant's floor plan with generated bookings.
    Grid(GridArgs),
    /// Submit the signup or login form once.
    Auth(AuthArgs),
    /// Book a free table by hand.
    Reserve(ReserveArgs),
}

/// Arguments for `grid`.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Restaurant id, e.g. `trex-bistro`.
    #[arg(long, value_name = "id")]
    pub restaurant: String,
    /// Generator seed; overrides `DINO_RESERVE_SEED`.
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,
    /// Print the grid as JSON.
    #[arg(long)]
    pub json: bool,
    /// Manager greeted above the floor plan.
    #[arg(long, value_name = "name", default_value = "Manager")]
    pub username: String,
}

/// Arguments for `auth`.
#[derive(Debug, Clone, Args)]
pub struct AuthArgs {
    /// Manager username.
    #[arg(long, default_value = "")]
    pub username: String,
    /// Contact email.
    #[arg(long, default_value = "")]
    pub email: String,
    /// Account password.
    #[arg(long, default_value = "")]
    pub password: String,
    /// Log into an existing account instead of signing up.
    #[arg(long)]
    pub login: bool,
}

/// Arguments for `reserve`.
#[derive(Debug, Clone, Args)]
pub struct ReserveArgs {
    /// Restaurant id, e.g. `trex-bistro`.
    #[arg(long, value_name = "id")]
    pub restaurant: String,
    /// Table number, 1 to 25.
    #[arg(long, value_name = "n")]
    pub table: usize,
    /// Customer name; suggested when omitted.
    #[arg(long)]
    pub name: Option<String>,
    /// Contact phone; suggested when omitted.
    #[arg(long)]
    pub phone: Option<String>,
    /// Party size, 1 to 5; suggested when omitted.
    #[arg(long, value_name = "n")]
    pub party_size: Option<u8>,
    /// Arrival slot as `HH:MM`; suggested when omitted.
    #[arg(long, value_name = "HH:MM")]
    pub time: Option<String>,
    /// Generator seed; overrides `DINO_RESERVE_SEED`.
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,
    /// Manager greeted above the floor plan.
    #[arg(long, value_name = "name", default_value = "Manager")]
    pub username: String,
}

/// JSON shape printed by `grid --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GridDocument<'a> {
    restaurant: &'a Restaurant,
    available_count: usize,
    reserved_count: usize,
    tables: &'a TableGrid,
}

/// Runs one subcommand, writing its report to `out`.
///
/// Notifications raised along the way go to `notifier`.
///
/// # Errors
///
/// Returns [`CliError`] when the command fails; the caller reports it and
/// exits non-zero.
pub async fn run<W: Write>(
    cli: Cli,
    settings: &ReserveSettings,
    notifier: Arc<dyn Notifier>,
    out: &mut W,
) -> Result<(), CliError> {
    match cli.command {
        Command::Restaurants => {
            let roster = settings.load_roster()?;
            write!(out, "{}", RestaurantList::new(roster.restaurants()))?;
            Ok(())
        }
        Command::Grid(args) => grid(&args, settings, notifier, out),
        Command::Auth(args) => auth(args, settings, notifier, out).await,
        Command::Reserve(args) => reserve(args, settings, notifier, out),
    }
}

fn grid<W: Write>(
    args: &GridArgs,
    settings: &ReserveSettings,
    notifier: Arc<dyn Notifier>,
    out: &mut W,
) -> Result<(), CliError> {
    let roster = settings.load_roster()?;
    let mut rng = settings.rng(args.seed);
    let mut session = Session::new(&roster, notifier);
    session.logged_in(args.username.as_str());
    let layout = session.open_restaurant(&args.restaurant, &mut rng)?;

    if args.json {
        let document = GridDocument {
            restaurant: layout.restaurant(),
            available_count: layout.available_count(),
            reserved_count: layout.reserved_count(),
            tables: layout.grid(),
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", LayoutView::new(layout).greeting(&args.username))?;
    }
    Ok(())
}

async fn auth<W: Write>(
    args: AuthArgs,
    settings: &ReserveSettings,
    notifier: Arc<dyn Notifier>,
    out: &mut W,
) -> Result<(), CliError> {
    let mut page = LoginPage::new(notifier, settings.success_delay());
    let form = page.form_mut();
    if args.login {
        form.toggle_mode();
    }
    form.set_username(args.username);
    form.set_email(args.email);
    form.set_password(args.password);

    let mut welcomed = None;
    match page.submit(|username| welcomed = Some(username)).await {
        Submission::Rejected(errors) => {
            write_field_errors(out, &errors)?;
            Err(CliError::CredentialsRejected {
                count: errors.iter().count(),
            })
        }
        Submission::Accepted(_) | Submission::InFlight => {
            if let Some(username) = welcomed {
                writeln!(out, "Welcome, {username}!")?;
            }
            Ok(())
        }
    }
}

fn write_field_errors<W: Write>(out: &mut W, errors: &FieldErrors) -> io::Result<()> {
    for (field, error) in errors.iter() {
        writeln!(out, "{field}: {error}")?;
    }
    Ok(())
}

fn reserve<W: Write>(
    args: ReserveArgs,
    settings: &ReserveSettings,
    notifier: Arc<dyn Notifier>,
    out: &mut W,
) -> Result<(), CliError> {
    let table = TableId::new(args.table)?;
    let party_size = args.party_size.map(PartySize::new).transpose()?;
    let time = args
        .time
        .as_deref()
        .map(str::parse::<TimeSlot>)
        .transpose()?;

    let roster = settings.load_roster()?;
    let mut rng = settings.rng(args.seed);
    let mut session = Session::new(&roster, notifier);
    session.logged_in(args.username.as_str());
    let layout = session.open_restaurant(&args.restaurant, &mut rng)?;

    if let ClickOutcome::ShowedReservation(_) = layout.click(table) {
        return Err(ReservationError::AlreadyReserved { table: table.get() }.into());
    }

    let suggestion = layout.suggest(&mut rng)?;
    debug!(table = table.get(), "filling booking dialog");
    let request = ReservationRequest {
        customer_name: args.name.unwrap_or(suggestion.customer_name),
        phone: args.phone.unwrap_or(suggestion.phone),
        party_size: party_size.unwrap_or(suggestion.party_size),
        time: time.unwrap_or(suggestion.time),
    };
    layout.confirm(request)?;

    write!(out, "{}", LayoutView::new(layout).greeting(&args.username))?;
    Ok(())
}

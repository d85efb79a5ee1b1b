//! Behavioural tests for the manager's journey through the app.
//!
//! These scenarios exercise the login form's submission policy, the delayed
//! hand-over after a successful login, and booking or inspecting tables in a
//! restaurant layout.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dino_data::{Field, FieldError, Roster, TableId};
use dino_reserve::{
    LoginForm, LoginPage, Notification, NotificationKind, Notifier, Session, TableLayout,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Notifier double that keeps every notification for inspection.
#[derive(Debug, Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().expect("notification log").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen
            .lock()
            .expect("notification log")
            .push(notification);
    }
}

/// Test world holding the form, layout, and recorded side effects.
#[derive(Default, ScenarioState)]
struct World {
    notifier: Slot<Arc<RecordingNotifier>>,
    form: Slot<LoginForm>,
    handed_over: Slot<(Option<String>, Duration)>,
    layout: Slot<TableLayout>,
    clicked: Slot<TableId>,
}

impl World {
    fn notifier(&self) -> Arc<RecordingNotifier> {
        if let Some(notifier) = self.notifier.get() {
            return notifier;
        }
        let notifier = Arc::new(RecordingNotifier::default());
        self.notifier.set(Arc::clone(&notifier));
        notifier
    }

    fn form(&self) -> LoginForm {
        self.form.get().expect("form should be set")
    }

    fn edit_form(&self, edit: impl FnOnce(&mut LoginForm)) {
        let mut form = self.form();
        edit(&mut form);
        self.form.set(form);
    }

    fn layout(&self) -> TableLayout {
        self.layout.get().expect("layout should be open")
    }

    fn edit_layout(&self, edit: impl FnOnce(&mut TableLayout)) {
        let mut layout = self.layout();
        edit(&mut layout);
        self.layout.set(layout);
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

fn first_table(layout: &TableLayout, reserved: bool) -> TableId {
    layout
        .grid()
        .tables()
        .iter()
        .find(|table| table.is_reserved() == reserved)
        .map(dino_data::Table::id)
        .expect("layout has such a table")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("an empty signup form")]
fn an_empty_signup_form(world: &World) {
    world.form.set(LoginForm::new());
}

#[given("a login form filled with valid credentials")]
fn a_login_form_filled_with_valid_credentials(world: &World) {
    let mut form = LoginForm::new();
    form.toggle_mode();
    form.set_username("Rex");
    form.set_email("rex@dino.com");
    form.set_password("Dino@123");
    world.form.set(form);
}

#[given("the manager is viewing {restaurant} with seed {seed:u64}")]
fn the_manager_is_viewing(world: &World, restaurant: String, seed: u64) {
    let roster = Roster::builtin().expect("embedded roster");
    let mut session = Session::new(roster, world.notifier());
    session.logged_in("Rex");
    let layout = session
        .open_restaurant(&restaurant, &mut ChaCha8Rng::seed_from_u64(seed))
        .expect("restaurant opens")
        .clone();
    world.layout.set(layout);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the manager types the username {value}")]
fn the_manager_types_the_username(world: &World, value: String) {
    world.edit_form(|form| form.set_username(value));
}

#[when("the manager submits the form")]
fn the_manager_submits_the_form(world: &World) {
    world.edit_form(|form| {
        let _ = form.submit();
    });
}

#[when("the manager switches to login")]
fn the_manager_switches_to_login(world: &World) {
    world.edit_form(LoginForm::toggle_mode);
}

#[when("the form is submitted on the login page")]
fn the_form_is_submitted_on_the_login_page(world: &World) {
    let mut page = LoginPage::new(world.notifier(), Duration::from_millis(500));
    *page.form_mut() = world.form();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("test runtime");
    let handed_over = runtime.block_on(async {
        let started = tokio::time::Instant::now();
        let mut received = None;
        let _ = page.submit(|username| received = Some(username)).await;
        (received, started.elapsed())
    });
    world.handed_over.set(handed_over);
}

#[when("the manager clicks the first free table")]
fn the_manager_clicks_the_first_free_table(world: &World) {
    world.edit_layout(|layout| {
        let id = first_table(layout, false);
        let _ = layout.click(id);
        world.clicked.set(id);
    });
}

#[when("the manager clicks the first booked table")]
fn the_manager_clicks_the_first_booked_table(world: &World) {
    world.edit_layout(|layout| {
        let id = first_table(layout, true);
        let _ = layout.click(id);
        world.clicked.set(id);
    });
}

#[when("the manager confirms a booking for {name}")]
fn the_manager_confirms_a_booking_for(world: &World, name: String) {
    world.edit_layout(|layout| {
        let mut request = layout
            .suggest(&mut ChaCha8Rng::seed_from_u64(1))
            .expect("suggestion");
        request.customer_name = name;
        layout.confirm(request).expect("booking succeeds");
    });
}

// ============================================================================
// Then steps
// ============================================================================

#[then("no field shows an error")]
fn no_field_shows_an_error(world: &World) {
    let form = world.form();
    assert!(form.errors().is_empty(), "unexpected errors: {:?}", form.errors());
}

#[then("the username shows no error")]
fn the_username_shows_no_error(world: &World) {
    assert_eq!(world.form().error(Field::Username), None);
}

#[then("the email shows the error {message}")]
fn the_email_shows_the_error(world: &World, message: String) {
    let error: Option<FieldError> = world.form().error(Field::Email);
    assert_eq!(error.map(|e| e.to_string()), Some(message));
}

#[then("the login callback received {username} after at least {millis:u64} ms")]
fn the_login_callback_received(world: &World, username: String, millis: u64) {
    let (received, elapsed) = world
        .handed_over
        .get()
        .expect("form should have been submitted");
    assert_eq!(received, Some(username));
    assert!(elapsed >= Duration::from_millis(millis), "{elapsed:?}");
}

#[then("a success notification said {title}")]
fn a_success_notification_said(world: &World, title: String) {
    let notifications = world.notifier().notifications();
    assert!(
        notifications
            .iter()
            .any(|n| n.kind == NotificationKind::Success && n.title == title),
        "missing '{title}' in {notifications:?}"
    );
}

#[then("the success notification names the booked table")]
fn the_success_notification_names_the_booked_table(world: &World) {
    let id = world.clicked.get().expect("a table was clicked");
    let notifications = world.notifier().notifications();
    let last = notifications.last().expect("a notification was sent");
    assert_eq!(last.kind, NotificationKind::Success);
    assert_eq!(last.title, format!("Table {id} reserved successfully!"));
    assert_eq!(last.duration, Duration::from_secs(2));
}

#[then("{count:usize} tables are available")]
fn tables_are_available(world: &World, count: usize) {
    assert_eq!(world.layout().available_count(), count);
}

#[then("no table is selected")]
fn no_table_is_selected(world: &World) {
    assert!(world.layout().selected_table().is_none());
}

#[then("an info notification describes the booking")]
fn an_info_notification_describes_the_booking(world: &World) {
    let id = world.clicked.get().expect("a table was clicked");
    let layout = world.layout();
    let reservation = layout
        .grid()
        .table(id)
        .reservation()
        .expect("table is booked");
    let notifications = world.notifier().notifications();
    let last = notifications.last().expect("a notification was sent");

    assert_eq!(last.kind, NotificationKind::Info);
    assert_eq!(last.title, format!("Table {id} Reservation"));
    assert_eq!(last.description, Some(reservation.summary()));
    assert_eq!(last.duration, Duration::from_secs(3));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Errors stay hidden until the first submit"
)]
fn errors_stay_hidden_until_the_first_submit(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Fixing a field clears its error while typing"
)]
fn fixing_a_field_clears_its_error(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Switching to login clears errors"
)]
fn switching_to_login_clears_errors(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "A valid login hands over the username after the delay"
)]
fn valid_login_hands_over_the_username(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Booking a free table"
)]
fn booking_a_free_table(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/login_flow.feature",
    name = "Inspecting a booked table"
)]
fn inspecting_a_booked_table(world: World) {
    let _ = world;
}

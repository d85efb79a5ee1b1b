//! Manager signup and login form.
//!
//! [`LoginForm`] is the synchronous state machine behind the form: it holds
//! the typed credentials, the error shown beside each field, and whether a
//! successful submission is waiting to hand over. [`LoginPage`] drives one
//! submission end to end: notify, pause so the notice can be read, then call
//! the caller's login callback.
//!
//! ## Submission policy
//! - Before the first failed submit, typing never shows errors.
//! - A submit validates every field and replaces the error record wholesale.
//! - Afterwards, editing a field that shows an error re-validates that field
//!   only, so fixing it clears the message as the manager types.
//! - While a successful submission is pending, the form is locked.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dino_data::{Field, FieldError, FieldErrors, validate_credentials, validate_field};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::notify::{Notification, Notifier};

/// Whether the form creates an account or signs into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Create a new manager account.
    #[default]
    Signup,
    /// Sign into an existing account.
    Login,
}

impl AuthMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Signup => Self::Login,
            Self::Login => Self::Signup,
        }
    }

    /// Notification title after a successful submission.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Signup => "Account created successfully!",
            Self::Login => "Login successful!",
        }
    }

    /// Label of the submit button.
    #[must_use]
    pub const fn action_label(self) -> &'static str {
        match self {
            Self::Signup => "Create Account",
            Self::Login => "Login",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signup => f.write_str("signup"),
            Self::Login => f.write_str("login"),
        }
    }
}

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input.
    #[default]
    Editing,
    /// A successful submission is waiting for its callback; input is ignored.
    Submitting,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    username: String,
    mode: AuthMode,
}

impl PendingLogin {
    /// Username handed to the login callback.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Mode the form was in when submitted.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }
}

/// Result of pressing submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every field is valid.
    Accepted(PendingLogin),
    /// At least one field failed; the errors are now shown on the form.
    Rejected(FieldErrors),
    /// A previous submission is still pending, so this one was ignored.
    InFlight,
}

/// Credential form state.
#[derive(Clone, Default)]
pub struct LoginForm {
    username: String,
    email: String,
    password: Zeroizing<String>,
    mode: AuthMode,
    errors: FieldErrors,
    phase: FormPhase,
}

impl LoginForm {
    /// Creates an empty form in signup mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the username.
    pub fn set_username(&mut self, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        self.username = value.into();
        self.revalidate(Field::Username);
    }

    /// Updates the email.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        self.email = value.into();
        self.revalidate(Field::Email);
    }

    /// Updates the password. The previous value is wiped from memory.
    pub fn set_password(&mut self, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        self.password = Zeroizing::new(value.into());
        self.revalidate(Field::Password);
    }

    /// Switches between signup and login, clearing every error.
    pub fn toggle_mode(&mut self) {
        if self.is_locked() {
            return;
        }
        self.mode = self.mode.toggled();
        self.errors = FieldErrors::default();
    }

    /// Validates every field and, if all pass, locks the form.
    pub fn submit(&mut self) -> Submission {
        if self.is_locked() {
            debug!("submit ignored while a login is pending");
            return Submission::InFlight;
        }

        self.errors = validate_credentials(&self.username, &self.email, &self.password);
        if !self.errors.is_empty() {
            debug!(failed = self.errors.iter().count(), "credentials rejected");
            return Submission::Rejected(self.errors);
        }

        self.phase = FormPhase::Submitting;
        Submission::Accepted(PendingLogin {
            username: self.username.clone(),
            mode: self.mode,
        })
    }

    /// Unlocks the form once the pending login has been handed over.
    pub const fn complete_submission(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// Current username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Errors currently shown on the form.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error currently shown beside `field`.
    #[must_use]
    pub const fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    const fn is_locked(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    fn revalidate(&mut self, field: Field) {
        if self.errors.get(field).is_none() {
            return;
        }
        let value = match field {
            Field::Username => self.username.as_str(),
            Field::Email => self.email.as_str(),
            Field::Password => self.password.as_str(),
        };
        self.errors.set(field, validate_field(field, value).err());
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("mode", &self.mode)
            .field("errors", &self.errors)
            .field("phase", &self.phase)
            .finish()
    }
}

/// The login screen: form state plus notification and delayed hand-over.
pub struct LoginPage {
    form: LoginForm,
    notifier: Arc<dyn Notifier>,
    success_delay: Duration,
}

impl LoginPage {
    /// Creates a page with an empty form.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>, success_delay: Duration) -> Self {
        Self {
            form: LoginForm::new(),
            notifier,
            success_delay,
        }
    }

    /// The form being edited.
    #[must_use]
    pub const fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Mutable access for typing into the form.
    pub const fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    /// Submits the form.
    ///
    /// On success this emits the mode's success notification, waits for the
    /// configured delay, and then calls `on_login` with the username exactly
    /// once. Rejected and in-flight submissions return immediately without
    /// calling it.
    pub async fn submit<F>(&mut self, on_login: F) -> Submission
    where
        F: FnOnce(String),
    {
        let submission = self.form.submit();
        if let Submission::Accepted(pending) = &submission {
            info!(mode = %pending.mode(), "credentials accepted");
            self.notifier
                .notify(Notification::success(pending.mode().success_message()));
            tokio::time::sleep(self.success_delay).await;
            on_login(pending.username().to_owned());
            self.form.complete_submission();
        }
        submission
    }
}

impl fmt::Debug for LoginPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPage")
            .field("form", &self.form)
            .field("success_delay", &self.success_delay)
            .finish_non_exhaustive()
    }
}

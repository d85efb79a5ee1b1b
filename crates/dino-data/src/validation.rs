//! Credential validation for the manager login and signup form.
//!
//! Each field is checked against an ordered list of rules. Rules are evaluated
//! in order and the first violated rule decides the message, so a field only
//! ever reports one problem at a time.
//!
//! # Validation Rules
//!
//! - Username: required; must start with an ASCII capital letter.
//! - Email: required; must look like `local@domain.tld` with no whitespace.
//! - Password: required; must contain an uppercase letter, a lowercase letter,
//!   a digit, and one of [`SPECIAL_CHARACTERS`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Punctuation accepted as the password's special character.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// A single field validation failure.
///
/// The display text is the message shown beside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    /// The username was left empty.
    #[error("Username is required")]
    UsernameRequired,
    /// The username does not begin with `A-Z`.
    #[error("Username must start with a capital letter")]
    UsernameNotCapitalised,
    /// The email was left empty.
    #[error("Email is required")]
    EmailRequired,
    /// The email is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address (e.g., example@domain.com)")]
    EmailInvalid,
    /// The password was left empty.
    #[error("Password is required")]
    PasswordRequired,
    /// The password has no uppercase letter.
    #[error("Password must contain at least 1 uppercase letter")]
    PasswordMissingUppercase,
    /// The password has no lowercase letter.
    #[error("Password must contain at least 1 lowercase letter")]
    PasswordMissingLowercase,
    /// The password has neither a digit nor a special character.
    #[error("Password must contain a number and special character")]
    PasswordMissingDigitAndSpecial,
    /// The password has no digit.
    #[error("Password must contain at least 1 number")]
    PasswordMissingDigit,
    /// The password has no special character.
    #[error("Password must contain at least 1 special character (e.g., @, #, $)")]
    PasswordMissingSpecial,
}

/// The fields collected by the credentials form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Manager username.
    Username,
    /// Contact email address.
    Email,
    /// Account password.
    Password,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    /// Lowercase field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation outcome for the whole form.
///
/// A field with no entry is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    username: Option<FieldError>,
    email: Option<FieldError>,
    password: Option<FieldError>,
}

impl FieldErrors {
    /// Returns the error recorded for `field`, if any.
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Records or clears the error for `field`.
    pub const fn set(&mut self, field: Field, error: Option<FieldError>) {
        match field {
            Field::Username => self.username = error,
            Field::Email => self.email = error,
            Field::Password => self.password = error,
        }
    }

    /// Returns `true` when no field holds an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Iterates over the recorded errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|error| (field, error)))
    }
}

/// Validates a username.
///
/// # Errors
///
/// Returns [`FieldError::UsernameRequired`] for empty input and
/// [`FieldError::UsernameNotCapitalised`] when the first character is not an
/// ASCII capital letter.
///
/// # Examples
///
/// ```
/// use dino_data::{FieldError, validate_username};
///
/// assert!(validate_username("RexManager").is_ok());
/// assert_eq!(
///     validate_username("rex"),
///     Err(FieldError::UsernameNotCapitalised)
/// );
/// ```
pub fn validate_username(value: &str) -> Result<(), FieldError> {
    first_violation(USERNAME_RULES, value)
}

/// Validates an email address.
///
/// # Errors
///
/// Returns [`FieldError::EmailRequired`] for empty input and
/// [`FieldError::EmailInvalid`] when the value is not shaped like
/// `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use dino_data::{FieldError, validate_email};
///
/// assert!(validate_email("a@b.c").is_ok());
/// assert_eq!(validate_email("abc"), Err(FieldError::EmailInvalid));
/// ```
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    first_violation(EMAIL_RULES, value)
}

/// Validates a password.
///
/// Only the first missing character class is reported, in the order
/// uppercase, lowercase, digit-and-special, digit, special.
///
/// # Errors
///
/// Returns the [`FieldError`] for the first rule the password breaks.
///
/// # Examples
///
/// ```
/// use dino_data::{FieldError, validate_password};
///
/// assert!(validate_password("Dino@123").is_ok());
/// assert_eq!(
///     validate_password("abc"),
///     Err(FieldError::PasswordMissingUppercase)
/// );
/// ```
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    first_violation(PASSWORD_RULES, &PasswordProfile::of(value))
}

/// Validates one field by name.
///
/// # Errors
///
/// Returns the field's [`FieldError`] when the value breaks one of its rules.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Username => validate_username(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

/// Validates all three credentials unconditionally.
#[must_use]
pub fn validate_credentials(username: &str, email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, value) in [
        (Field::Username, username),
        (Field::Email, email),
        (Field::Password, password),
    ] {
        errors.set(field, validate_field(field, value).err());
    }
    errors
}

/// A predicate paired with the error it raises.
struct Rule<T: ?Sized> {
    violated: fn(&T) -> bool,
    error: FieldError,
}

fn first_violation<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Result<(), FieldError> {
    rules
        .iter()
        .find(|rule| (rule.violated)(value))
        .map_or(Ok(()), |rule| Err(rule.error))
}

const USERNAME_RULES: &[Rule<str>] = &[
    Rule {
        violated: str::is_empty,
        error: FieldError::UsernameRequired,
    },
    Rule {
        violated: lacks_capital_initial,
        error: FieldError::UsernameNotCapitalised,
    },
];

const EMAIL_RULES: &[Rule<str>] = &[
    Rule {
        violated: str::is_empty,
        error: FieldError::EmailRequired,
    },
    Rule {
        violated: is_malformed_email,
        error: FieldError::EmailInvalid,
    },
];

const PASSWORD_RULES: &[Rule<PasswordProfile>] = &[
    Rule {
        violated: PasswordProfile::is_empty,
        error: FieldError::PasswordRequired,
    },
    Rule {
        violated: PasswordProfile::lacks_uppercase,
        error: FieldError::PasswordMissingUppercase,
    },
    Rule {
        violated: PasswordProfile::lacks_lowercase,
        error: FieldError::PasswordMissingLowercase,
    },
    Rule {
        violated: PasswordProfile::lacks_digit_and_special,
        error: FieldError::PasswordMissingDigitAndSpecial,
    },
    Rule {
        violated: PasswordProfile::lacks_digit,
        error: FieldError::PasswordMissingDigit,
    },
    Rule {
        violated: PasswordProfile::lacks_special,
        error: FieldError::PasswordMissingSpecial,
    },
];

fn lacks_capital_initial(value: &str) -> bool {
    !value.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn is_malformed_email(value: &str) -> bool {
    !email_regex().is_match(value)
}

/// Character classes present in a password.
#[derive(Debug, Clone, Copy)]
struct PasswordProfile {
    empty: bool,
    uppercase: bool,
    lowercase: bool,
    digit: bool,
    special: bool,
}

impl PasswordProfile {
    fn of(value: &str) -> Self {
        Self {
            empty: value.is_empty(),
            uppercase: value.chars().any(|c| c.is_ascii_uppercase()),
            lowercase: value.chars().any(|c| c.is_ascii_lowercase()),
            digit: value.chars().any(|c| c.is_ascii_digit()),
            special: value.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    const fn is_empty(&self) -> bool {
        self.empty
    }

    const fn lacks_uppercase(&self) -> bool {
        !self.uppercase
    }

    const fn lacks_lowercase(&self) -> bool {
        !self.lowercase
    }

    const fn lacks_digit_and_special(&self) -> bool {
        !self.digit && !self.special
    }

    const fn lacks_digit(&self) -> bool {
        !self.digit
    }

    const fn lacks_special(&self) -> bool {
        !self.special
    }
}

#[cfg(test)]
mod tests {
    //! Covers rule ordering for every credential field.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("RexManager")]
    #[case("A")]
    #[case("Z9 with spaces")]
    fn accepts_capitalised_usernames(#[case] value: &str) {
        assert_eq!(validate_username(value), Ok(()));
    }

    #[rstest]
    #[case("", FieldError::UsernameRequired)]
    #[case("rex", FieldError::UsernameNotCapitalised)]
    #[case("1Rex", FieldError::UsernameNotCapitalised)]
    #[case(" Rex", FieldError::UsernameNotCapitalised)]
    #[case("Érin", FieldError::UsernameNotCapitalised)]
    fn rejects_usernames(#[case] value: &str, #[case] expected: FieldError) {
        assert_eq!(validate_username(value), Err(expected));
    }

    #[rstest]
    #[case("a@b.c")]
    #[case("manager@dinoreserve.com")]
    #[case("first.last@sub.domain.org")]
    fn accepts_well_formed_emails(#[case] value: &str) {
        assert_eq!(validate_email(value), Ok(()));
    }

    #[rstest]
    #[case("", FieldError::EmailRequired)]
    #[case("abc", FieldError::EmailInvalid)]
    #[case("a@b", FieldError::EmailInvalid)]
    #[case("a b@c.d", FieldError::EmailInvalid)]
    #[case("a@@b.c", FieldError::EmailInvalid)]
    #[case("@b.c", FieldError::EmailInvalid)]
    fn rejects_emails(#[case] value: &str, #[case] expected: FieldError) {
        assert_eq!(validate_email(value), Err(expected));
    }

    #[rstest]
    #[case("", FieldError::PasswordRequired)]
    #[case("abc", FieldError::PasswordMissingUppercase)]
    #[case("ABCDEF", FieldError::PasswordMissingLowercase)]
    #[case("Abcdef", FieldError::PasswordMissingDigitAndSpecial)]
    #[case("Abcdef!", FieldError::PasswordMissingDigit)]
    #[case("Abcdef1", FieldError::PasswordMissingSpecial)]
    #[case("1234!", FieldError::PasswordMissingUppercase)]
    fn reports_first_failing_password_rule(#[case] value: &str, #[case] expected: FieldError) {
        assert_eq!(validate_password(value), Err(expected));
    }

    #[rstest]
    #[case("Abcdef1!")]
    #[case("Dino@123")]
    #[case("Xy9\\")]
    #[case("Xy9\"")]
    fn accepts_passwords_with_every_class(#[case] value: &str) {
        assert_eq!(validate_password(value), Ok(()));
    }

    #[test]
    fn every_special_character_counts() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Ab1{special}");
            assert_eq!(validate_password(&password), Ok(()), "rejected {special:?}");
        }
    }

    #[test]
    fn validators_are_idempotent() {
        for value in ["", "abc", "Abcdef1!", "a@b.c"] {
            assert_eq!(validate_username(value), validate_username(value));
            assert_eq!(validate_email(value), validate_email(value));
            assert_eq!(validate_password(value), validate_password(value));
        }
    }

    #[test]
    fn credentials_report_every_failing_field() {
        let errors = validate_credentials("rex", "", "Abcdef1!");

        assert_eq!(
            errors.get(Field::Username),
            Some(FieldError::UsernameNotCapitalised)
        );
        assert_eq!(errors.get(Field::Email), Some(FieldError::EmailRequired));
        assert_eq!(errors.get(Field::Password), None);
        assert_eq!(errors.iter().count(), 2);
    }

    #[test]
    fn valid_credentials_produce_no_errors() {
        let errors = validate_credentials("Rex", "rex@dino.io", "Dino@123");
        assert!(errors.is_empty());
    }

    #[test]
    fn field_errors_can_be_cleared() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Email, Some(FieldError::EmailInvalid));
        assert!(!errors.is_empty());

        errors.set(Field::Email, None);
        assert!(errors.is_empty());
    }
}

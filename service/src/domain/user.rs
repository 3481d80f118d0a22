//! User data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;
use zeroize::Zeroizing;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyName,
    NameTooLong { max: usize },
    EmptyEmail,
    InvalidEmail,
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must be a valid address"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed))
    }

    /// Generate a new random [`UserId`].
    ///
    /// This is the only place a user identity originates; records read back
    /// from a store reuse the identifier they were persisted with.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human readable name for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

/// Maximum allowed length for a user name.
pub const USER_NAME_MAX: usize = 128;

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: USER_NAME_MAX });
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Contact email address for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One '@' separating non-empty halves, no whitespace anywhere.
        let pattern = "^[^@\\s]+@[^@\\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Credential stored alongside the user record.
///
/// ## Invariants
/// - Non-empty; caller-provided whitespace is retained to avoid surprising
///   credential comparisons.
///
/// The value is held and persisted exactly as provided; no hashing is
/// applied anywhere in this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`] from owned input.
    pub fn new(password: impl Into<String>) -> Result<Self, UserValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }

        Ok(Self(Zeroizing::new(password)))
    }

    /// Password string provided by the caller.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Validated draft of a user awaiting identity assignment.
///
/// Carries the fields of a create request once presence and format checks
/// have passed; [`User::create`] turns it into a persisted record shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: UserName,
    email: EmailAddress,
    password: Password,
}

impl NewUser {
    /// Build a draft from validated components.
    pub fn new(name: UserName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }

    /// Fallible constructor enforcing the field invariants on string inputs.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;

        Ok(Self::new(name, email, password))
    }
}

/// Application user record.
///
/// ## Invariants
/// - `id` is assigned exactly once, by [`User::create`], and never changes.
/// - `name` is non-blank, `email` matches the address format, `password`
///   is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password: Password,
}

impl User {
    /// Build a [`User`] from validated components.
    ///
    /// Intended for adapters reconstructing a record that already owns its
    /// identity; new records go through [`User::create`].
    pub fn new(id: UserId, name: UserName, email: EmailAddress, password: Password) -> Self {
        Self {
            id,
            name,
            email,
            password,
        }
    }

    /// Mint a record from a draft, assigning a fresh random identity.
    pub fn create(draft: NewUser) -> Self {
        let NewUser {
            name,
            email,
            password,
        } = draft;
        Self::new(UserId::random(), name, email, password)
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name supplied at creation.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address supplied at creation.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored credential.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

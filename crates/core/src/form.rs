//! Edit form bound to the focused record.
//!
//! The form always mirrors the focused record's fields. Rebinding it to a
//! different focus replaces every field; nothing from the previous record is
//! carried over. Required-field checks happen here, before any request is
//! sent, because the record store does not validate.

use thiserror::Error;

use crate::focus::Focus;
use crate::types::{NewUser, User, UserId, UserPatch};

/// A required form field was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

/// What submitting the form will do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// No record is focused: create a new one.
    Create(NewUser),
    /// A record is focused: patch it.
    Update { id: UserId, patch: UserPatch },
}

/// Editable copy of a record's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditForm {
    id: Option<UserId>,
    name: String,
    email: String,
    pristine: bool,
}

impl EditForm {
    /// An empty form that creates a record on submit.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            pristine: true,
            ..Self::default()
        }
    }

    /// A form holding `user`'s current values.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id.clone()),
            name: user.name.clone(),
            email: user.email.clone(),
            pristine: true,
        }
    }

    /// Bind to whatever `focus` resolves to in `users`.
    ///
    /// An unresolved focus yields a blank form.
    #[must_use]
    pub fn bind(focus: &Focus, users: &[User]) -> Self {
        focus
            .resolve(users)
            .map_or_else(Self::blank, Self::from_user)
    }

    /// ID of the record being edited, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns true until a field is edited.
    #[must_use]
    pub const fn is_pristine(&self) -> bool {
        self.pristine
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.pristine = false;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.pristine = false;
    }

    /// Validate required fields and describe the request to send.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `name` or `email` is empty or whitespace.
    pub fn submission(&self) -> Result<Submission, ValidationError> {
        let new = NewUser::validated(&self.name, &self.email)?;
        Ok(match &self.id {
            Some(id) => Submission::Update {
                id: id.clone(),
                patch: UserPatch::new(Some(new.name), Some(new.email)),
            },
            None => Submission::Create(new),
        })
    }
}

impl NewUser {
    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first empty field.
    pub fn validated(name: &str, email: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        Ok(Self::new(name, email))
    }
}

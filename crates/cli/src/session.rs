//! Editing session: the client side of the focus-sync protocol.
//!
//! A [`Session`] keeps the last fetched user list, the [`Focus`] and the
//! [`EditForm`] bound to it. Every mutation is followed by a full refetch and
//! the focus is recomputed from the refetched list; the mutation's own echo is
//! never used to decide what to show.
//!
//! All actions take `&mut self`, so one session never has two round trips in
//! flight. A failed request leaves the list, focus and form as they were.

use roster_core::{
    EditForm, Focus, FocusEvent, Submission, User, UserId, ValidationError, next_focus,
};
use thiserror::Error;
use tracing::debug;

use crate::directory::{ClientError, UserDirectory};

/// Why a session action did not go through.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required field is empty; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The form has not been edited since it was bound; nothing was sent.
    #[error("nothing to submit: the form has not been edited")]
    Unchanged,

    /// The user asked to edit a record that is not in the current list.
    #[error("no user with id {0} in the current list")]
    UnknownUser(UserId),

    /// A request to the directory failed; local state is unchanged.
    #[error("directory request failed: {0}")]
    Transport(#[from] ClientError),
}

/// Result of a successful submit round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(User),
    Updated(User),
    /// The record vanished before the update reached the store.
    NotFound(UserId),
}

/// Client-side editing state over a [`UserDirectory`].
#[derive(Debug)]
pub struct Session<D> {
    directory: D,
    users: Vec<User>,
    focus: Focus,
    form: EditForm,
}

impl<D: UserDirectory> Session<D> {
    /// Create a session with nothing loaded yet.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            users: Vec::new(),
            focus: Focus::None,
            form: EditForm::blank(),
        }
    }

    /// Users as of the last successful fetch.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub const fn focus(&self) -> &Focus {
        &self.focus
    }

    pub const fn form(&self) -> &EditForm {
        &self.form
    }

    pub const fn directory(&self) -> &D {
        &self.directory
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.set_name(name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.set_email(email);
    }

    /// Fetch the full list and focus its first record.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transport` if the fetch fails.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        let users = self.directory.list_users().await?;
        self.apply(users, &FocusEvent::Loaded, true);
        Ok(())
    }

    /// Send the form: create if no record is focused, update otherwise.
    ///
    /// On success the list is refetched and focus returns to its first
    /// record. An update of a record that no longer exists still refetches.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Validation` or `SessionError::Unchanged` without
    /// contacting the directory, or `SessionError::Transport` if either the
    /// mutation or the refetch fails.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        let submission = self.form.submission()?;
        if self.form.is_pristine() {
            return Err(SessionError::Unchanged);
        }

        let (outcome, event) = match submission {
            Submission::Create(new) => {
                let user = self.directory.create_user(&new).await?;
                (SubmitOutcome::Created(user), FocusEvent::Created)
            }
            Submission::Update { id, patch } => {
                let outcome = match self.directory.update_user(&id, &patch).await? {
                    Some(user) => SubmitOutcome::Updated(user),
                    None => {
                        debug!(user_id = %id, "update target no longer exists");
                        SubmitOutcome::NotFound(id)
                    }
                };
                (outcome, FocusEvent::Updated)
            }
        };

        let users = self.directory.list_users().await?;
        self.apply(users, &event, true);
        Ok(outcome)
    }

    /// Focus `id` and load its values into the form. No request is made.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownUser` if `id` is not in the current list.
    pub fn edit(&mut self, id: &UserId) -> Result<(), SessionError> {
        if self.users.iter().all(|user| &user.id != id) {
            return Err(SessionError::UnknownUser(id.clone()));
        }
        let event = FocusEvent::EditRequested(id.clone());
        self.focus = next_focus(&self.focus, &self.users, &event);
        self.form = EditForm::bind(&self.focus, &self.users);
        Ok(())
    }

    /// Delete `id`, refetch, and move focus off it if it was focused.
    ///
    /// Returns the deleted record, or `None` if the store did not have it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Transport` if the delete or the refetch fails.
    pub async fn delete(&mut self, id: &UserId) -> Result<Option<User>, SessionError> {
        let deleted = self.directory.delete_user(id).await?;
        if deleted.is_none() {
            debug!(user_id = %id, "delete target did not exist");
        }

        let users = self.directory.list_users().await?;
        self.apply(users, &FocusEvent::Deleted(id.clone()), false);
        Ok(deleted)
    }

    /// Discard form edits and focus the first record of the current list.
    pub fn reset(&mut self) {
        self.focus = next_focus(&self.focus, &self.users, &FocusEvent::Reset);
        self.form = EditForm::bind(&self.focus, &self.users);
    }

    /// Clear focus and the form so the next submit creates a record.
    pub fn new_record(&mut self) {
        self.focus = next_focus(&self.focus, &self.users, &FocusEvent::NewRecord);
        self.form = EditForm::blank();
    }

    /// Replace the list and recompute focus.
    ///
    /// The form is rebound when `rebind` is set or the focus moved.
    fn apply(&mut self, users: Vec<User>, event: &FocusEvent, rebind: bool) {
        let focus = next_focus(&self.focus, &users, event);
        if rebind || focus != self.focus {
            self.form = EditForm::bind(&focus, &users);
        }
        debug!(
            event = ?event,
            users = users.len(),
            focus = ?focus.id(),
            "session refocused"
        );
        self.users = users;
        self.focus = focus;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::testing::FakeDirectory;

    async fn loaded(names: &[&str]) -> Session<FakeDirectory> {
        let mut session = Session::new(FakeDirectory::with_users(names));
        session.load().await.unwrap();
        session
    }

    fn ids(session: &Session<FakeDirectory>) -> Vec<&str> {
        session.users().iter().map(|u| u.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_focuses_first_user() {
        let session = loaded(&["Alice", "Bob"]).await;
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
        assert_eq!(session.form().name(), "Alice");
        assert!(session.form().is_pristine());
    }

    #[tokio::test]
    async fn test_load_empty_directory() {
        let session = loaded(&[]).await;
        assert_eq!(session.focus(), &Focus::None);
        assert_eq!(session.form(), &EditForm::blank());
    }

    #[tokio::test]
    async fn test_create_then_delete_focused() {
        let mut session = loaded(&["Alice", "Bob"]).await;

        session.new_record();
        session.set_name("Carol");
        session.set_email("carol@x");
        let outcome = session.submit().await.unwrap();

        let SubmitOutcome::Created(carol) = outcome else {
            panic!("expected create, got {outcome:?}");
        };
        assert_eq!(ids(&session), ["1", "2", carol.id.as_str()]);
        assert_ne!(carol.id.as_str(), "1");
        assert_ne!(carol.id.as_str(), "2");
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));

        let deleted = session.delete(&UserId::new("1")).await.unwrap();
        assert_eq!(deleted.unwrap().name, "Alice");
        assert_eq!(ids(&session), ["2", carol.id.as_str()]);
        assert_eq!(session.focus(), &Focus::Record(UserId::new("2")));
        assert_eq!(session.form().name(), "Bob");
    }

    #[tokio::test]
    async fn test_update_refetches_and_resets_focus() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.edit(&UserId::new("2")).unwrap();
        session.set_name("Bobby");

        let outcome = session.submit().await.unwrap();

        assert!(matches!(outcome, SubmitOutcome::Updated(ref u) if u.name == "Bobby"));
        assert_eq!(session.users()[1].name, "Bobby");
        assert_eq!(session.users()[1].email, "bob@x");
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
        assert_eq!(session.form().name(), "Alice");
    }

    #[tokio::test]
    async fn test_update_of_vanished_record_still_refetches() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.edit(&UserId::new("2")).unwrap();
        session.set_email("new@x");
        session.directory().remove_behind_the_back("2");

        let outcome = session.submit().await.unwrap();

        assert_eq!(outcome, SubmitOutcome::NotFound(UserId::new("2")));
        assert_eq!(ids(&session), ["1"]);
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
    }

    #[tokio::test]
    async fn test_delete_unknown_keeps_everything() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.edit(&UserId::new("2")).unwrap();
        let before = session.users().to_vec();

        let deleted = session.delete(&UserId::new("99")).await.unwrap();

        assert!(deleted.is_none());
        assert_eq!(session.users(), before.as_slice());
        assert_eq!(session.focus(), &Focus::Record(UserId::new("2")));
    }

    #[tokio::test]
    async fn test_delete_other_record_keeps_form_edits() {
        let mut session = loaded(&["Alice", "Bob", "Carol"]).await;
        session.edit(&UserId::new("3")).unwrap();
        session.set_name("Caroline");

        session.delete(&UserId::new("1")).await.unwrap();

        assert_eq!(session.focus(), &Focus::Record(UserId::new("3")));
        assert_eq!(session.form().name(), "Caroline");
    }

    #[tokio::test]
    async fn test_delete_last_record() {
        let mut session = loaded(&["Alice"]).await;
        session.delete(&UserId::new("1")).await.unwrap();

        assert!(session.users().is_empty());
        assert_eq!(session.focus(), &Focus::None);
        assert_eq!(session.form(), &EditForm::blank());
    }

    #[tokio::test]
    async fn test_validation_blocks_request() {
        let mut session = loaded(&["Alice"]).await;
        session.new_record();
        session.set_name("Carol");
        let sent = session.directory().requests();

        let err = session.submit().await.unwrap_err();

        assert!(matches!(
            err,
            SessionError::Validation(ValidationError::MissingEmail)
        ));
        assert_eq!(session.directory().requests(), sent);
    }

    #[tokio::test]
    async fn test_pristine_form_is_not_sent() {
        let mut session = loaded(&["Alice"]).await;
        let sent = session.directory().requests();

        assert!(matches!(
            session.submit().await,
            Err(SessionError::Unchanged)
        ));
        assert_eq!(session.directory().requests(), sent);
    }

    #[tokio::test]
    async fn test_transport_failure_leaves_state_intact() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.edit(&UserId::new("2")).unwrap();
        session.set_name("Bobby");
        let form = session.form().clone();

        // Mutation succeeds, refetch fails.
        session.directory().fail_after(1);
        let err = session.submit().await.unwrap_err();

        assert!(matches!(err, SessionError::Transport(_)));
        assert_eq!(session.users()[1].name, "Bob");
        assert_eq!(session.focus(), &Focus::Record(UserId::new("2")));
        assert_eq!(session.form(), &form);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_focus() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.directory().fail_after(0);

        assert!(session.delete(&UserId::new("1")).await.is_err());
        assert_eq!(ids(&session), ["1", "2"]);
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
    }

    #[tokio::test]
    async fn test_edit_unknown_user() {
        let mut session = loaded(&["Alice"]).await;
        let err = session.edit(&UserId::new("9")).unwrap_err();
        assert!(matches!(err, SessionError::UnknownUser(_)));
        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
    }

    #[tokio::test]
    async fn test_reset_discards_edits() {
        let mut session = loaded(&["Alice", "Bob"]).await;
        session.edit(&UserId::new("2")).unwrap();
        session.set_name("Bobby");

        session.reset();

        assert_eq!(session.focus(), &Focus::Record(UserId::new("1")));
        assert_eq!(session.form().name(), "Alice");
        assert!(session.form().is_pristine());
    }
}

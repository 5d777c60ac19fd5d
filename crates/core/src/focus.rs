//! Focus state: which record the client is currently editing.
//!
//! Focus is a reference by ID into the most recently fetched user list. The
//! client never trusts a mutation's echoed result to decide focus; after every
//! mutation it refetches the full list and derives the next focus from that
//! list with [`next_focus`].
//!
//! # Transitions
//!
//! | Event | Next focus |
//! |---|---|
//! | `Loaded`, `Created`, `Updated`, `Reset` | first record, or none |
//! | `Deleted(id)` | unchanged if the focused record survived, else first record, or none |
//! | `EditRequested(id)` | that record, if it is in the list |
//! | `NewRecord` | none (blank form) |
//!
//! After any mutation event the result is none only when the list is empty,
//! and otherwise names a record present in the list.

use crate::types::{User, UserId};

/// The record being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Focus {
    /// No record selected; the form creates a new user on submit.
    #[default]
    None,
    /// The record with this ID is selected.
    Record(UserId),
}

impl Focus {
    /// Focus on the first record of `users`, or none if the list is empty.
    #[must_use]
    pub fn first(users: &[User]) -> Self {
        users
            .first()
            .map_or(Self::None, |user| Self::Record(user.id.clone()))
    }

    /// The focused ID, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&UserId> {
        match self {
            Self::None => None,
            Self::Record(id) => Some(id),
        }
    }

    /// Look up the focused record in `users`.
    ///
    /// Returns `None` when nothing is focused or the focused ID is no longer
    /// in the list.
    #[must_use]
    pub fn resolve<'a>(&self, users: &'a [User]) -> Option<&'a User> {
        let id = self.id()?;
        users.iter().find(|user| &user.id == id)
    }
}

/// What caused the focus to be recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusEvent {
    /// A full list fetch completed.
    Loaded,
    /// A create round trip and its refetch completed.
    Created,
    /// An update round trip and its refetch completed.
    Updated,
    /// A delete of this ID and its refetch completed.
    Deleted(UserId),
    /// The user picked a record from the list to edit.
    EditRequested(UserId),
    /// The user discarded their edits.
    Reset,
    /// The user asked for a blank form to create a new record.
    NewRecord,
}

impl FocusEvent {
    /// Returns true for events that follow a store round trip and refetch.
    #[must_use]
    pub const fn is_refetch(&self) -> bool {
        matches!(
            self,
            Self::Loaded | Self::Created | Self::Updated | Self::Deleted(_)
        )
    }
}

/// Compute the next focus from the previous focus and the list it must be
/// resolved against.
///
/// `users` is the freshly fetched list for refetch events and the current
/// list for local events.
#[must_use]
pub fn next_focus(previous: &Focus, users: &[User], event: &FocusEvent) -> Focus {
    match event {
        FocusEvent::Loaded | FocusEvent::Created | FocusEvent::Updated | FocusEvent::Reset => {
            Focus::first(users)
        }
        FocusEvent::Deleted(deleted) => match previous {
            Focus::Record(current) if current != deleted && contains(users, current) => {
                previous.clone()
            }
            _ => Focus::first(users),
        },
        FocusEvent::EditRequested(id) => {
            if contains(users, id) {
                Focus::Record(id.clone())
            } else {
                previous.clone()
            }
        }
        FocusEvent::NewRecord => Focus::None,
    }
}

fn contains(users: &[User], id: &UserId) -> bool {
    users.iter().any(|user| &user.id == id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            email: format!("{}@x", name.to_lowercase()),
        }
    }

    fn alice_bob() -> Vec<User> {
        vec![user("1", "Alice"), user("2", "Bob")]
    }

    fn focus(id: &str) -> Focus {
        Focus::Record(UserId::new(id))
    }

    #[test]
    fn test_loaded_focuses_first_record() {
        let next = next_focus(&Focus::None, &alice_bob(), &FocusEvent::Loaded);
        assert_eq!(next, focus("1"));
    }

    #[test]
    fn test_loaded_empty_list_is_none() {
        let next = next_focus(&focus("1"), &[], &FocusEvent::Loaded);
        assert_eq!(next, Focus::None);
    }

    #[test]
    fn test_submit_resets_to_first_record() {
        let users = vec![user("1", "Alice"), user("2", "Bob"), user("3", "Carol")];

        assert_eq!(
            next_focus(&Focus::None, &users, &FocusEvent::Created),
            focus("1")
        );
        assert_eq!(
            next_focus(&focus("2"), &users, &FocusEvent::Updated),
            focus("1")
        );
    }

    #[test]
    fn test_delete_of_focused_record_moves_to_first() {
        let refreshed = vec![user("2", "Bob"), user("3", "Carol")];
        let next = next_focus(
            &focus("1"),
            &refreshed,
            &FocusEvent::Deleted(UserId::new("1")),
        );
        assert_eq!(next, focus("2"));
    }

    #[test]
    fn test_delete_of_other_record_keeps_focus() {
        let refreshed = vec![user("1", "Alice"), user("3", "Carol")];
        let next = next_focus(
            &focus("3"),
            &refreshed,
            &FocusEvent::Deleted(UserId::new("2")),
        );
        assert_eq!(next, focus("3"));
    }

    #[test]
    fn test_delete_of_unknown_id_keeps_focus() {
        let next = next_focus(
            &focus("2"),
            &alice_bob(),
            &FocusEvent::Deleted(UserId::new("99")),
        );
        assert_eq!(next, focus("2"));
    }

    #[test]
    fn test_delete_last_record_is_none() {
        let next = next_focus(&focus("1"), &[], &FocusEvent::Deleted(UserId::new("1")));
        assert_eq!(next, Focus::None);
    }

    #[test]
    fn test_delete_recovers_focus_that_vanished_elsewhere() {
        // Focused record was removed by someone else between fetches.
        let refreshed = vec![user("3", "Carol")];
        let next = next_focus(
            &focus("1"),
            &refreshed,
            &FocusEvent::Deleted(UserId::new("2")),
        );
        assert_eq!(next, focus("3"));
    }

    #[test]
    fn test_delete_from_blank_form_refocuses() {
        let next = next_focus(
            &Focus::None,
            &alice_bob(),
            &FocusEvent::Deleted(UserId::new("99")),
        );
        assert_eq!(next, focus("1"));
    }

    #[test]
    fn test_edit_requested_focuses_record() {
        let next = next_focus(
            &focus("1"),
            &alice_bob(),
            &FocusEvent::EditRequested(UserId::new("2")),
        );
        assert_eq!(next, focus("2"));
    }

    #[test]
    fn test_edit_requested_unknown_record_keeps_focus() {
        let next = next_focus(
            &focus("1"),
            &alice_bob(),
            &FocusEvent::EditRequested(UserId::new("99")),
        );
        assert_eq!(next, focus("1"));
    }

    #[test]
    fn test_reset_and_new_record() {
        assert_eq!(
            next_focus(&focus("2"), &alice_bob(), &FocusEvent::Reset),
            focus("1")
        );
        assert_eq!(
            next_focus(&focus("2"), &alice_bob(), &FocusEvent::NewRecord),
            Focus::None
        );
    }

    #[test]
    fn test_refetch_events_always_resolve() {
        let lists = [
            vec![],
            vec![user("1", "Alice")],
            vec![user("2", "Bob"), user("4", "Dan")],
            alice_bob(),
        ];
        let previous = [Focus::None, focus("1"), focus("2"), focus("3")];
        let events = [
            FocusEvent::Loaded,
            FocusEvent::Created,
            FocusEvent::Updated,
            FocusEvent::Deleted(UserId::new("1")),
            FocusEvent::Deleted(UserId::new("2")),
            FocusEvent::Deleted(UserId::new("99")),
        ];

        for users in &lists {
            for prev in &previous {
                for event in &events {
                    assert!(event.is_refetch());
                    let next = next_focus(prev, users, event);
                    if users.is_empty() {
                        assert_eq!(next, Focus::None, "{prev:?} {event:?}");
                    } else {
                        assert!(next.resolve(users).is_some(), "{prev:?} {event:?} {users:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_resolve() {
        let users = alice_bob();
        assert_eq!(focus("2").resolve(&users).unwrap().name, "Bob");
        assert!(focus("9").resolve(&users).is_none());
        assert!(Focus::None.resolve(&users).is_none());
        assert_eq!(Focus::first(&users).resolve(&users), Some(&users[0]));
    }
}

//! Plain-text rendering of the user list and the edit form.

use std::io::{self, Write};

use roster_core::{EditForm, Focus, User};

/// Write the user table, marking the focused record with `*`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn users<W: Write>(out: &mut W, users: &[User], focus: &Focus) -> io::Result<()> {
    if users.is_empty() {
        return writeln!(out, "(no users)");
    }

    let id_width = column_width("ID", users.iter().map(|u| u.id.as_str()));
    let name_width = column_width("NAME", users.iter().map(|u| u.name.as_str()));

    writeln!(out, "  {:<id_width$}  {:<name_width$}  EMAIL", "ID", "NAME")?;
    for user in users {
        let marker = if focus.id() == Some(&user.id) { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<id_width$}  {:<name_width$}  {}",
            user.id, user.name, user.email
        )?;
    }
    Ok(())
}

/// Write a single record on one line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn user<W: Write>(out: &mut W, user: &User) -> io::Result<()> {
    writeln!(out, "{}  {} <{}>", user.id, user.name, user.email)
}

/// Write the form, headed by what a submit would do.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn form<W: Write>(out: &mut W, form: &EditForm) -> io::Result<()> {
    match form.id() {
        Some(id) => write!(out, "Editing user {id}")?,
        None => write!(out, "New user")?,
    }
    if form.is_pristine() {
        writeln!(out)?;
    } else {
        writeln!(out, " (modified)")?;
    }
    writeln!(out, "  name:  {}", form.name())?;
    writeln!(out, "  email: {}", form.email())
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

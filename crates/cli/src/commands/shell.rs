//! Interactive editor.
//!
//! Reads one command per line, applies it to a [`Session`] and prints the
//! resulting list and form. Errors from a single command are printed and the
//! shell keeps going; only output failures end it early.

use std::io::Write;

use roster_core::UserId;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::CommandError;
use crate::directory::UserDirectory;
use crate::render;
use crate::session::{Session, SubmitOutcome};

const HELP: &str = "\
Commands:
  list           show all users
  edit ID        edit an existing user
  new            start a new user
  name VALUE     set the name field
  email VALUE    set the email field
  submit         create or update from the form
  delete ID      delete a user
  reset          discard edits and edit the first user
  reload         refetch the list
  help           show this message
  quit           leave the shell
";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Edit(UserId),
    New,
    Name(String),
    Email(String),
    Submit,
    Delete(UserId),
    Reset,
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line. Blank lines yield `Ok(None)`.
    ///
    /// Field values take the rest of the line, so they may contain spaces.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::UnknownCommand` or `CommandError::Usage`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let command = match word {
            "list" | "ls" => bare(rest, Self::List, "list")?,
            "new" => bare(rest, Self::New, "new")?,
            "submit" | "save" => bare(rest, Self::Submit, "submit")?,
            "reset" => bare(rest, Self::Reset, "reset")?,
            "reload" => bare(rest, Self::Reload, "reload")?,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "name" => Self::Name(rest.to_string()),
            "email" => Self::Email(rest.to_string()),
            "edit" => Self::Edit(single_id(rest, "edit ID")?),
            "delete" | "rm" => Self::Delete(single_id(rest, "delete ID")?),
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn bare(rest: &str, command: ShellCommand, usage: &'static str) -> Result<ShellCommand, CommandError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CommandError::Usage(usage))
    }
}

fn single_id(rest: &str, usage: &'static str) -> Result<UserId, CommandError> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return Err(CommandError::Usage(usage));
    }
    Ok(UserId::new(rest))
}

/// Load the directory, then process `input` until it ends or `quit`.
///
/// # Errors
///
/// Returns `CommandError` if the initial load fails or output cannot be
/// written. Failures of individual commands are printed instead.
pub async fn run<D, R, W>(session: &mut Session<D>, input: R, out: &mut W) -> Result<(), CommandError>
where
    D: UserDirectory,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    session.load().await?;
    show(session, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let result = match ShellCommand::parse(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(session, command, out).await,
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {}
            Err(CommandError::Io(e)) => return Err(e.into()),
            Err(e) => {
                tracing::debug!(error = %e, "Shell command failed");
                writeln!(out, "error: {e}")?;
            }
        }
    }
    Ok(())
}

/// Apply one command to the session and print its effect.
async fn execute<D: UserDirectory, W: Write>(
    session: &mut Session<D>,
    command: ShellCommand,
    out: &mut W,
) -> Result<(), CommandError> {
    match command {
        ShellCommand::List => show(session, out)?,
        ShellCommand::Edit(id) => {
            session.edit(&id)?;
            render::form(out, session.form())?;
        }
        ShellCommand::New => {
            session.new_record();
            render::form(out, session.form())?;
        }
        ShellCommand::Name(value) => {
            session.set_name(value);
            render::form(out, session.form())?;
        }
        ShellCommand::Email(value) => {
            session.set_email(value);
            render::form(out, session.form())?;
        }
        ShellCommand::Submit => {
            match session.submit().await? {
                SubmitOutcome::Created(user) => {
                    write!(out, "created ")?;
                    render::user(out, &user)?;
                }
                SubmitOutcome::Updated(user) => {
                    write!(out, "updated ")?;
                    render::user(out, &user)?;
                }
                SubmitOutcome::NotFound(id) => writeln!(out, "user {id} no longer exists")?,
            }
            show(session, out)?;
        }
        ShellCommand::Delete(id) => {
            match session.delete(&id).await? {
                Some(user) => {
                    write!(out, "deleted ")?;
                    render::user(out, &user)?;
                }
                None => writeln!(out, "no user with id {id}")?,
            }
            show(session, out)?;
        }
        ShellCommand::Reset => {
            session.reset();
            show(session, out)?;
        }
        ShellCommand::Reload => {
            session.load().await?;
            show(session, out)?;
        }
        ShellCommand::Help => write!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn show<D: UserDirectory, W: Write>(session: &Session<D>, out: &mut W) -> Result<(), CommandError> {
    render::users(out, session.users(), session.focus())?;
    writeln!(out)?;
    render::form(out, session.form())?;
    Ok(())
}

//! Command-line parsing for the `myron-admin` binary.

use myron_core::navigation::Route;
use myron_core::types::DbId;

pub const USAGE: &str = "\
usage: myron-admin <route> [action] [--yes]

routes:   dashboard | categories | donations | events | contacts
actions:  list                          (default)
          view <id>
          add field=value...
          edit <id> field=value...
          delete <id>

`image=<path>` attaches an image file. `--yes` answers every confirmation.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing route")]
    MissingRoute,

    #[error("unknown route `{0}`")]
    UnknownRoute(String),

    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error("`{0}` needs a record id")]
    MissingId(&'static str),

    #[error("invalid record id `{0}`")]
    InvalidId(String),

    #[error("expected field=value, got `{0}`")]
    InvalidAssignment(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("the dashboard can only be listed")]
    DashboardAction,
}

/// A `field=value` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    View(DbId),
    Add(Vec<Assignment>),
    Edit(DbId, Vec<Assignment>),
    Delete(DbId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub route: Route,
    pub action: Action,
    pub assume_yes: bool,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut assume_yes = false;
    let mut rest = Vec::new();
    for arg in args.into_iter().map(Into::into) {
        match arg.as_str() {
            "--yes" | "-y" => assume_yes = true,
            _ => rest.push(arg),
        }
    }

    let mut rest = rest.into_iter();
    let route_arg = rest.next().ok_or(UsageError::MissingRoute)?;
    let route = Route::from_path(&route_arg).ok_or(UsageError::UnknownRoute(route_arg))?;

    let action = match rest.next().as_deref() {
        None | Some("list") => {
            if let Some(extra) = rest.next() {
                return Err(UsageError::UnexpectedArgument(extra));
            }
            Action::List
        }
        Some("view") => {
            let id = parse_id("view", rest.next())?;
            no_more(&mut rest)?;
            Action::View(id)
        }
        Some("delete") => {
            let id = parse_id("delete", rest.next())?;
            no_more(&mut rest)?;
            Action::Delete(id)
        }
        Some("add") => Action::Add(parse_assignments(rest)?),
        Some("edit") => {
            let id = parse_id("edit", rest.next())?;
            Action::Edit(id, parse_assignments(rest)?)
        }
        Some(other) => return Err(UsageError::UnknownAction(other.to_string())),
    };

    if route == Route::Dashboard && action != Action::List {
        return Err(UsageError::DashboardAction);
    }

    Ok(Command {
        route,
        action,
        assume_yes,
    })
}

fn parse_id(action: &'static str, arg: Option<String>) -> Result<DbId, UsageError> {
    let arg = arg.ok_or(UsageError::MissingId(action))?;
    arg.parse().map_err(|_| UsageError::InvalidId(arg))
}

fn no_more(rest: &mut impl Iterator<Item = String>) -> Result<(), UsageError> {
    match rest.next() {
        Some(extra) => Err(UsageError::UnexpectedArgument(extra)),
        None => Ok(()),
    }
}

fn parse_assignments(
    args: impl Iterator<Item = String>,
) -> Result<Vec<Assignment>, UsageError> {
    args.map(|arg| match arg.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok(Assignment {
            field: field.to_string(),
            value: value.to_string(),
        }),
        _ => Err(UsageError::InvalidAssignment(arg)),
    })
    .collect()
}

//! Core type definitions for mutations.

use crate::error::MutationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Timestamp sentinel meaning "let the server assign the current time".
pub const LATEST_TIMESTAMP: i64 = i64::MAX;

/// Which write a mutation describes once it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationKind {
    /// Store each cell as a new version, overwriting at equal timestamps.
    Put,
    /// Concatenate each value onto the current value of its column.
    Append,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MutationKind::Put => f.write_str("put"),
            MutationKind::Append => f.write_str("append"),
        }
    }
}

/// Write-ahead-log handling requested for a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Durability {
    /// Use whatever the target table is configured with.
    #[default]
    UseDefault,
    /// Do not write to the WAL at all.
    SkipWal,
    /// Write to the WAL asynchronously.
    AsyncWal,
    /// Write to the WAL synchronously.
    SyncWal,
    /// Write to the WAL and force it to disk.
    FsyncWal,
}

/// A single access right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    /// Read access.
    Read,
    /// Write access.
    Write,
    /// Coprocessor execution.
    Exec,
    /// Table creation.
    Create,
    /// Administrative access.
    Admin,
}

impl Action {
    /// Returns the single-character code of this action.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Action::Read => 'R',
            Action::Write => 'W',
            Action::Exec => 'X',
            Action::Create => 'C',
            Action::Admin => 'A',
        }
    }

    /// Parses a single-character action code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Action::Read),
            'W' => Some(Action::Write),
            'X' => Some(Action::Exec),
            'C' => Some(Action::Create),
            'A' => Some(Action::Admin),
            _ => None,
        }
    }
}

/// A set of actions granted to one principal.
///
/// Serialized as its action codes, e.g. `"RW"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Permission {
    actions: BTreeSet<Action>,
}

impl Permission {
    /// Creates a permission granting `actions`.
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    /// Returns true if `action` is granted.
    #[must_use]
    pub fn implies(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Returns the granted actions in code order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.actions.iter().copied()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            write!(f, "{}", action.code())?;
        }
        Ok(())
    }
}

impl FromStr for Permission {
    type Err = MutationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| {
                Action::from_code(c).ok_or_else(|| {
                    MutationError::invalid_attribute(
                        crate::mutation::ACL_ATTRIBUTE,
                        format!("unknown action code {c:?}"),
                    )
                })
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|actions| Self { actions })
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}

impl TryFrom<String> for Permission {
    type Error = MutationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! Sender selection.
//!
//! Every extractor except the busy-users ranking takes a [`UserSelection`]:
//! either [`Overall`](UserSelection::Overall) (no filtering) or a single
//! sender whose records are kept. Matching is exact: case and whitespace
//! matter, because sender names come verbatim from the export.
//!
//! # Examples
//!
//! ```
//! use chatstat::core::filter::{UserSelection, select_records, user_list};
//! use chatstat::MessageRecord;
//!
//! let records = vec![
//!     MessageRecord::new("Bob", "Hi"),
//!     MessageRecord::new("Alice", "Hello"),
//!     MessageRecord::group_notification("Carol joined"),
//!     MessageRecord::new("Alice", "How are you?"),
//! ];
//!
//! let alice: UserSelection = "Alice".into();
//! assert_eq!(select_records(&records, &alice).count(), 2);
//!
//! let overall: UserSelection = "Overall".into();
//! assert!(overall.is_overall());
//!
//! assert_eq!(user_list(&records), ["Overall", "Alice", "Bob"]);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::{MessageRecord, OVERALL};

/// Which senders an extractor looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserSelection {
    /// All records
    #[default]
    Overall,
    /// Only records whose sender equals this name
    User(String),
}

impl UserSelection {
    /// Selects a single sender. The name `"Overall"` selects everyone.
    pub fn user(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::User(name)
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, UserSelection::Overall)
    }

    /// Returns `true` if `record` passes this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::User(name) => record.sender == *name,
        }
    }
}

impl From<&str> for UserSelection {
    fn from(name: &str) -> Self {
        UserSelection::user(name)
    }
}

impl From<String> for UserSelection {
    fn from(name: String) -> Self {
        UserSelection::user(name)
    }
}

impl From<UserSelection> for String {
    fn from(selection: UserSelection) -> Self {
        match selection {
            UserSelection::Overall => OVERALL.to_string(),
            UserSelection::User(name) => name,
        }
    }
}

impl FromStr for UserSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserSelection::user(s))
    }
}

impl fmt::Display for UserSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSelection::Overall => f.write_str(OVERALL),
            UserSelection::User(name) => f.write_str(name),
        }
    }
}

/// Records that pass `selection`, in their original order.
pub fn select_records<'a>(
    records: &'a [MessageRecord],
    selection: &'a UserSelection,
) -> impl Iterator<Item = &'a MessageRecord> + 'a {
    records.iter().filter(move |r| selection.matches(r))
}

/// Selector options for a record set.
///
/// Distinct senders sorted ascending, without group notifications, with
/// `"Overall"` first.
pub fn user_list(records: &[MessageRecord]) -> Vec<String> {
    let mut users: Vec<String> = records
        .iter()
        .filter(|r| !r.is_group_notification())
        .map(|r| r.sender.clone())
        .collect();
    users.sort();
    users.dedup();
    users.insert(0, OVERALL.to_string());
    users
}

//! Contact model: shared base attributes plus a per-variant payload.

use crate::domain::ContactId;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display format for timestamps (minute precision).
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The kinds of contact the book can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactVariant {
    Person,
    Organization,
}

impl ContactVariant {
    /// All variants, in the order offered to the user.
    pub const ALL: [ContactVariant; 2] = [ContactVariant::Person, ContactVariant::Organization];

    /// Name as typed by the user and written to disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Organization => "organization",
        }
    }
}

impl fmt::Display for ContactVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| format!("unknown contact type: {s}"))
    }
}

/// Attributes only a person has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    pub surname: String,
    pub birth_date: String,
    pub gender: String,
}

/// Attributes only an organization has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationDetails {
    pub address: String,
}

/// Variant-specific payload of a [`Contact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContactDetails {
    Person(PersonDetails),
    Organization(OrganizationDetails),
}

impl ContactDetails {
    /// The variant tag of this payload.
    pub fn variant(&self) -> ContactVariant {
        match self {
            Self::Person(_) => ContactVariant::Person,
            Self::Organization(_) => ContactVariant::Organization,
        }
    }
}

/// A record in the contact book.
///
/// Contacts are snapshots produced by a builder. The only mutation after
/// construction is [`Contact::set_time_updated`]; editing any other field
/// produces a new snapshot that replaces this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: ContactId,
    name: String,
    number: String,
    time_created: NaiveDateTime,
    time_updated: NaiveDateTime,
    #[serde(flatten)]
    details: ContactDetails,
}

/// Identity and timestamps of a snapshot, carried across rebuilds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Stamp {
    pub id: ContactId,
    pub time_created: NaiveDateTime,
    pub time_updated: NaiveDateTime,
}

impl Stamp {
    /// A fresh identity created now.
    pub fn fresh() -> Self {
        let now = Local::now().naive_local();
        Self {
            id: ContactId::generate(),
            time_created: now,
            time_updated: now,
        }
    }
}

impl Contact {
    pub(crate) fn new(
        stamp: Stamp,
        name: String,
        number: String,
        details: ContactDetails,
    ) -> Self {
        let time_updated = stamp.time_updated.max(stamp.time_created);
        Self {
            id: stamp.id,
            name,
            number,
            time_created: stamp.time_created,
            time_updated,
            details,
        }
    }

    pub(crate) fn stamp(&self) -> Stamp {
        Stamp {
            id: self.id.clone(),
            time_created: self.time_created,
            time_updated: self.time_updated,
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn variant(&self) -> ContactVariant {
        self.details.variant()
    }

    /// Person surname; `None` for organizations.
    pub fn surname(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Person(p) => Some(&p.surname),
            ContactDetails::Organization(_) => None,
        }
    }

    /// Person birth date; `None` for organizations.
    pub fn birth_date(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Person(p) => Some(&p.birth_date),
            ContactDetails::Organization(_) => None,
        }
    }

    /// Person gender; `None` for organizations.
    pub fn gender(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Person(p) => Some(&p.gender),
            ContactDetails::Organization(_) => None,
        }
    }

    /// Organization address; `None` for people.
    pub fn address(&self) -> Option<&str> {
        match &self.details {
            ContactDetails::Organization(o) => Some(&o.address),
            ContactDetails::Person(_) => None,
        }
    }

    /// Name as shown in lists: "name surname" for people, the name otherwise.
    pub fn full_name(&self) -> String {
        match &self.details {
            ContactDetails::Person(p) => format!("{} {}", self.name, p.surname),
            ContactDetails::Organization(_) => self.name.clone(),
        }
    }

    /// Creation time, truncated to the minute.
    pub fn time_created(&self) -> NaiveDateTime {
        truncate_to_minute(self.time_created)
    }

    /// Last edit time, truncated to the minute.
    pub fn time_updated(&self) -> NaiveDateTime {
        truncate_to_minute(self.time_updated)
    }

    /// Record an edit. Times earlier than creation are clamped to it.
    pub fn set_time_updated(&mut self, time: NaiveDateTime) {
        self.time_updated = time.max(self.time_created);
    }
}

fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.details {
            ContactDetails::Person(p) => {
                writeln!(f, "Name: {}", self.name)?;
                writeln!(f, "Surname: {}", p.surname)?;
                writeln!(f, "Birth date: {}", p.birth_date)?;
                writeln!(f, "Gender: {}", p.gender)?;
            }
            ContactDetails::Organization(o) => {
                writeln!(f, "Organization name: {}", self.name)?;
                writeln!(f, "Address: {}", o.address)?;
            }
        }
        writeln!(f, "Number: {}", self.number)?;
        writeln!(f, "Time created: {}", self.time_created().format(TIME_FORMAT))?;
        writeln!(f, "Time last edit: {}", self.time_updated().format(TIME_FORMAT))
    }
}

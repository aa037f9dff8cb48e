use super::date::Date;
use super::location::Location;
use std::fmt;

/// The identity of a member across every command: names compare
/// case-insensitively, the date of birth exactly.
#[derive(Debug, Clone, Eq)]
pub struct MemberKey {
    pub first_name: String,
    pub last_name: String,
    pub dob: Date,
}

impl MemberKey {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, dob: Date) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            dob,
        }
    }

    pub fn matches(&self, first_name: &str, last_name: &str, dob: Date) -> bool {
        same_name(&self.first_name, first_name)
            && same_name(&self.last_name, last_name)
            && self.dob == dob
    }
}

impl PartialEq for MemberKey {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.first_name, &other.last_name, other.dob)
    }
}

fn same_name(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    key: MemberKey,
    expiration: Date,
    location: Location,
}

impl Member {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        dob: Date,
        expiration: Date,
        location: Location,
    ) -> Self {
        Self {
            key: MemberKey::new(first_name, last_name, dob),
            expiration,
            location,
        }
    }

    pub fn key(&self) -> &MemberKey {
        &self.key
    }

    pub fn first_name(&self) -> &str {
        &self.key.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.key.last_name
    }

    pub fn dob(&self) -> Date {
        self.key.dob
    }

    pub fn expiration(&self) -> Date {
        self.expiration
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Expired when the expiration date is strictly before `today`.
    pub fn is_expired(&self, today: Date) -> bool {
        self.expiration < today
    }

    /// Roster line for this member as seen on `today`.
    pub fn describe(&self, today: Date) -> MemberLine<'_> {
        MemberLine {
            member: self,
            today,
        }
    }
}

pub struct MemberLine<'a> {
    member: &'a Member,
    today: Date,
}

impl fmt::Display for MemberLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let member = self.member;
        let status = if member.is_expired(self.today) {
            "Membership expired"
        } else {
            "Membership expires"
        };

        write!(
            f,
            "{} {}, DOB: {}, {} {}, Location: {}",
            member.first_name(),
            member.last_name(),
            member.dob(),
            status,
            member.expiration(),
            member.location()
        )
    }
}

use crate::gym::{ClassKind, Date};
use std::fmt;

/// Why a command was refused. The `Display` text is exactly what the
/// operator sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("DOB {0}: invalid calendar date!")]
    InvalidDob(String),
    #[error("DOB {0}: cannot be today or a future date.")]
    FutureDob(Date),
    #[error("DOB {0}: must be 18 or older to join!")]
    Underage(Date),
    #[error("Expiration Date {0}: invalid calendar date!")]
    InvalidExpiration(String),
    #[error("{0}: invalid location!")]
    InvalidLocation(String),
    #[error("{first_name} {last_name} is already in the database.")]
    AlreadyInDatabase {
        first_name: String,
        last_name: String,
    },
    #[error("{first_name} {last_name} is not in the database.")]
    NotInDatabase {
        first_name: String,
        last_name: String,
    },
    #[error("{0} class does not exist.")]
    UnknownClass(String),
    #[error("{first_name} {last_name} {dob} does not exist in database.")]
    MemberNotFound {
        first_name: String,
        last_name: String,
        dob: Date,
    },
    #[error("{first_name} {last_name} {dob} membership expired.")]
    MembershipExpired {
        first_name: String,
        last_name: String,
        dob: Date,
    },
    #[error("{class} time conflict -- {first_name} {last_name} has already checked into {conflicting}")]
    TimeConflict {
        class: ClassKind,
        first_name: String,
        last_name: String,
        conflicting: ClassKind,
    },
    #[error("{first_name} {last_name} has already checked into {class}.")]
    AlreadyCheckedIn {
        first_name: String,
        last_name: String,
        class: ClassKind,
    },
    #[error("{first_name} {last_name} is not a participant in {class}")]
    NotParticipant {
        first_name: String,
        last_name: String,
        class: ClassKind,
    },
}

/// Successful outcome of a mutating command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    Added {
        first_name: String,
        last_name: String,
    },
    Removed {
        first_name: String,
        last_name: String,
    },
    CheckedIn {
        first_name: String,
        last_name: String,
        class: ClassKind,
    },
    Dropped {
        first_name: String,
        last_name: String,
        class_token: String,
    },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::Added {
                first_name,
                last_name,
            } => write!(f, "{first_name} {last_name} added."),
            Confirmation::Removed {
                first_name,
                last_name,
            } => write!(f, "{first_name} {last_name} removed."),
            Confirmation::CheckedIn {
                first_name,
                last_name,
                class,
            } => write!(f, "{first_name} {last_name} checked into {class}."),
            Confirmation::Dropped {
                first_name,
                last_name,
                class_token,
            } => write!(f, "{first_name} {last_name} dropped {class_token}"),
        }
    }
}

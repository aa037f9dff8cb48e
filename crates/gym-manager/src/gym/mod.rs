//! Gym domain: calendar dates, members, the member database and the class
//! timetable.

pub mod database;
pub mod date;
pub mod fitness_class;
pub mod location;
pub mod member;
pub mod schedule;

pub use database::{Listing, MemberDatabase};
pub use date::Date;
pub use fitness_class::{FitnessClass, Timetable};
pub use location::{County, Location};
pub use member::{Member, MemberKey};
pub use schedule::{ClassKind, ClassSchedule, ClassSlot};

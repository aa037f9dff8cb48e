//! Console command dispatcher.
//!
//! A [`GymManager`] owns the member database and the class timetable for one
//! session and applies commands one line at a time. Every command is
//! validated completely before anything is mutated, and the first failed
//! check is reported as a single [`Rejection`].

mod command;
mod import;
mod rejection;

pub use command::{ClassRequest, Command, CommandError};
pub use import::{ImportError, ImportSummary, RejectedRow};
pub use rejection::{Confirmation, Rejection};

use crate::gym::{
    ClassKind, ClassSchedule, Date, Listing, Location, Member, MemberDatabase, MemberKey,
    Timetable,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

const BANNER: &str = "Gym Manager Running...";
const FAREWELL: &str = "Gym Manager terminated.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct GymManager {
    database: MemberDatabase,
    timetable: Timetable,
    today: Date,
}

impl GymManager {
    pub fn new(schedule: &ClassSchedule, today: Date) -> Self {
        Self {
            database: MemberDatabase::new(),
            timetable: Timetable::new(schedule),
            today,
        }
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn database(&self) -> &MemberDatabase {
        &self.database
    }

    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }

    /// Reads commands until `Q` or end of input, writing the transcript to
    /// `out`. Bytes that are not UTF-8 are replaced, so a garbled line is
    /// reported as an invalid command instead of ending the session.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{BANNER}")?;

        let mut raw = Vec::new();
        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            let flow = match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(command, out)?,
                Err(err) => {
                    debug!(%err, "unrecognised command line");
                    writeln!(out, "{err}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
            writeln!(out)?;
        }

        writeln!(out, "{FAREWELL}")?;
        out.flush()
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        let outcome = match command {
            Command::Add {
                first_name,
                last_name,
                dob,
                expiration,
                location,
            } => self.add_member(&first_name, &last_name, &dob, &expiration, &location),
            Command::Remove {
                first_name,
                last_name,
                dob,
            } => self.remove_member(&first_name, &last_name, &dob),
            Command::CheckIn(request) => self.check_in(&request),
            Command::Drop(request) => self.drop_class(&request),
            Command::Print(listing) => {
                let today = self.today;
                match listing {
                    Listing::Unsorted => self.database.print(out, today)?,
                    Listing::ByCounty => self.database.print_by_county(out, today)?,
                    Listing::ByName => self.database.print_by_name(out, today)?,
                    Listing::ByExpiration => self.database.print_by_expiration_date(out, today)?,
                }
                return Ok(Flow::Continue);
            }
            Command::Schedule => {
                self.timetable
                    .print_class_schedule(out, &self.database, self.today)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        match outcome {
            Ok(confirmation) => writeln!(out, "{confirmation}")?,
            Err(rejection) => {
                debug!(%rejection, "command rejected");
                writeln!(out, "{rejection}")?;
            }
        }
        Ok(Flow::Continue)
    }

    pub fn add_member(
        &mut self,
        first_name: &str,
        last_name: &str,
        dob: &str,
        expiration: &str,
        location: &str,
    ) -> Result<Confirmation, Rejection> {
        let dob = calendar_date(dob).map_err(Rejection::InvalidDob)?;
        if dob.is_future(self.today) {
            return Err(Rejection::FutureDob(dob));
        }
        if !dob.is_adult(self.today) {
            return Err(Rejection::Underage(dob));
        }

        let expiration = calendar_date(expiration).map_err(Rejection::InvalidExpiration)?;
        let location: Location = location
            .parse()
            .map_err(|_| Rejection::InvalidLocation(location.to_owned()))?;

        let member = Member::new(first_name, last_name, dob, expiration, location);
        if !self.database.add(member) {
            return Err(Rejection::AlreadyInDatabase {
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
            });
        }

        info!(%first_name, %last_name, %dob, location = location.label(), "member added");
        Ok(Confirmation::Added {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        })
    }

    pub fn remove_member(
        &mut self,
        first_name: &str,
        last_name: &str,
        dob: &str,
    ) -> Result<Confirmation, Rejection> {
        let key = dob
            .parse::<Date>()
            .ok()
            .map(|dob| MemberKey::new(first_name, last_name, dob))
            .filter(|key| self.database.contains(key))
            .ok_or_else(|| Rejection::NotInDatabase {
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
            })?;

        self.database.remove(&key);
        let dropped = self.timetable.remove_everywhere(&key);

        info!(%first_name, %last_name, dropped_classes = dropped, "member removed");
        Ok(Confirmation::Removed {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        })
    }

    pub fn check_in(&mut self, request: &ClassRequest) -> Result<Confirmation, Rejection> {
        let kind = self.scheduled_class(&request.class)?;
        let dob = calendar_date(&request.dob).map_err(Rejection::InvalidDob)?;

        let member = self
            .database
            .lookup(&request.first_name, &request.last_name, dob)
            .ok_or_else(|| Rejection::MemberNotFound {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                dob,
            })?;

        let class = self
            .timetable
            .class(kind)
            .ok_or_else(|| Rejection::UnknownClass(request.class.clone()))?;

        if class.is_member_expired(member, self.today) {
            return Err(Rejection::MembershipExpired {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                dob: member.dob(),
            });
        }
        if let Some(conflicting) = self.timetable.time_conflict(kind, member.key()) {
            return Err(Rejection::TimeConflict {
                class: kind,
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                conflicting,
            });
        }
        if class.find_member(member.key()).is_some() {
            return Err(Rejection::AlreadyCheckedIn {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                class: kind,
            });
        }

        let key = member.key().clone();
        let confirmation = Confirmation::CheckedIn {
            first_name: member.first_name().to_owned(),
            last_name: member.last_name().to_owned(),
            class: kind,
        };

        self.timetable
            .class_mut(kind)
            .ok_or_else(|| Rejection::UnknownClass(request.class.clone()))?
            .check_in(key);

        info!(class = kind.label(), first_name = %request.first_name, last_name = %request.last_name, "member checked in");
        Ok(confirmation)
    }

    pub fn drop_class(&mut self, request: &ClassRequest) -> Result<Confirmation, Rejection> {
        let kind = self.scheduled_class(&request.class)?;
        let dob = calendar_date(&request.dob).map_err(Rejection::InvalidDob)?;

        let not_participant = || Rejection::NotParticipant {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            class: kind,
        };

        let key = self
            .database
            .lookup(&request.first_name, &request.last_name, dob)
            .map(|member| member.key().clone())
            .ok_or_else(not_participant)?;

        let class = self
            .timetable
            .class_mut(kind)
            .ok_or_else(|| Rejection::UnknownClass(request.class.clone()))?;
        if !class.drop_member(&key) {
            return Err(not_participant());
        }

        info!(class = kind.label(), first_name = %request.first_name, last_name = %request.last_name, "member dropped class");
        Ok(Confirmation::Dropped {
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            class_token: request.class.clone(),
        })
    }

    fn scheduled_class(&self, raw: &str) -> Result<ClassKind, Rejection> {
        raw.parse::<ClassKind>()
            .ok()
            .filter(|kind| self.timetable.class(*kind).is_some())
            .ok_or_else(|| Rejection::UnknownClass(raw.to_owned()))
    }
}

/// Parses and validates a date token; on failure returns the text to echo
/// back to the operator.
fn calendar_date(raw: &str) -> Result<Date, String> {
    match raw.parse::<Date>() {
        Ok(date) if date.is_valid() => Ok(date),
        Ok(date) => Err(date.to_string()),
        Err(_) => Err(raw.to_owned()),
    }
}

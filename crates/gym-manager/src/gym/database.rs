use super::date::Date;
use super::member::{Member, MemberKey};
use std::io::{self, Write};

/// Orderings available when listing the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Unsorted,
    ByCounty,
    ByName,
    ByExpiration,
}

impl Listing {
    pub const fn header(self) -> &'static str {
        match self {
            Self::Unsorted => "-list of members-",
            Self::ByCounty => "-list of members sorted by county and zipcode-",
            Self::ByName => "-list of members sorted by last name, and first name-",
            Self::ByExpiration => "-list of members sorted by membership expiration date-",
        }
    }
}

const EMPTY_DATABASE: &str = "Member database is empty!";
const END_OF_LIST: &str = "-end of list-";

/// Members in insertion order. Sorted listings are built on a copy of the
/// references, so the stored order never changes except through
/// [`MemberDatabase::add`] and [`MemberDatabase::remove`].
#[derive(Debug, Default)]
pub struct MemberDatabase {
    members: Vec<Member>,
}

impl MemberDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, position: usize) -> Option<&Member> {
        self.members.get(position)
    }

    /// Returns `false` without touching the database when a member with the
    /// same key is already present.
    pub fn add(&mut self, member: Member) -> bool {
        if self.contains(member.key()) {
            return false;
        }

        self.members.push(member);
        true
    }

    pub fn remove(&mut self, key: &MemberKey) -> bool {
        match self.position(key) {
            Some(position) => {
                self.members.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn find(&self, first_name: &str, last_name: &str, dob: Date) -> Option<usize> {
        self.members
            .iter()
            .position(|member| member.key().matches(first_name, last_name, dob))
    }

    pub fn lookup(&self, first_name: &str, last_name: &str, dob: Date) -> Option<&Member> {
        self.find(first_name, last_name, dob)
            .and_then(|position| self.get(position))
    }

    pub fn lookup_key(&self, key: &MemberKey) -> Option<&Member> {
        self.position(key).and_then(|position| self.get(position))
    }

    pub fn contains(&self, key: &MemberKey) -> bool {
        self.position(key).is_some()
    }

    fn position(&self, key: &MemberKey) -> Option<usize> {
        self.find(&key.first_name, &key.last_name, key.dob)
    }

    pub fn sorted(&self, listing: Listing) -> Vec<&Member> {
        let mut view: Vec<&Member> = self.members.iter().collect();
        match listing {
            Listing::Unsorted => {}
            Listing::ByCounty => view.sort_by(|a, b| {
                a.location()
                    .county()
                    .cmp(&b.location().county())
                    .then_with(|| a.location().zip_code().cmp(b.location().zip_code()))
            }),
            Listing::ByName => view.sort_by(|a, b| {
                a.last_name()
                    .to_lowercase()
                    .cmp(&b.last_name().to_lowercase())
                    .then_with(|| {
                        a.first_name()
                            .to_lowercase()
                            .cmp(&b.first_name().to_lowercase())
                    })
            }),
            Listing::ByExpiration => view.sort_by_key(|member| member.expiration()),
        }
        view
    }

    pub fn write_listing<W: Write>(
        &self,
        listing: Listing,
        out: &mut W,
        today: Date,
    ) -> io::Result<()> {
        if self.is_empty() {
            return writeln!(out, "{EMPTY_DATABASE}");
        }

        writeln!(out, "{}", listing.header())?;
        for member in self.sorted(listing) {
            writeln!(out, "{}", member.describe(today))?;
        }
        writeln!(out, "{END_OF_LIST}")
    }

    pub fn print<W: Write>(&self, out: &mut W, today: Date) -> io::Result<()> {
        self.write_listing(Listing::Unsorted, out, today)
    }

    pub fn print_by_county<W: Write>(&self, out: &mut W, today: Date) -> io::Result<()> {
        self.write_listing(Listing::ByCounty, out, today)
    }

    pub fn print_by_name<W: Write>(&self, out: &mut W, today: Date) -> io::Result<()> {
        self.write_listing(Listing::ByName, out, today)
    }

    pub fn print_by_expiration_date<W: Write>(&self, out: &mut W, today: Date) -> io::Result<()> {
        self.write_listing(Listing::ByExpiration, out, today)
    }
}

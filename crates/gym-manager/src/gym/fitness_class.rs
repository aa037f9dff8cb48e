use super::database::MemberDatabase;
use super::date::Date;
use super::member::{Member, MemberKey};
use super::schedule::{ClassKind, ClassSchedule, ClassSlot};
use std::collections::BTreeMap;
use std::io::{self, Write};

const SCHEDULE_HEADER: &str = "-Fitness classes-";
const PARTICIPANTS_HEADER: &str = "     ** participants **";
const PARTICIPANT_INDENT: &str = "      ";

/// One class and the members currently checked into it.
///
/// The roster stores member keys only; the [`MemberDatabase`] owns the
/// members themselves.
#[derive(Debug, Clone)]
pub struct FitnessClass {
    slot: ClassSlot,
    participants: Vec<MemberKey>,
}

impl FitnessClass {
    pub fn new(slot: ClassSlot) -> Self {
        Self {
            slot,
            participants: Vec::new(),
        }
    }

    pub fn kind(&self) -> ClassKind {
        self.slot.kind
    }

    pub fn slot(&self) -> &ClassSlot {
        &self.slot
    }

    pub fn participants(&self) -> &[MemberKey] {
        &self.participants
    }

    pub fn is_member_expired(&self, member: &Member, today: Date) -> bool {
        member.is_expired(today)
    }

    pub fn find_member(&self, key: &MemberKey) -> Option<usize> {
        self.participants
            .iter()
            .position(|participant| participant == key)
    }

    pub fn check_in(&mut self, key: MemberKey) {
        self.participants.push(key);
    }

    pub fn drop_member(&mut self, key: &MemberKey) -> bool {
        match self.find_member(key) {
            Some(position) => {
                self.participants.remove(position);
                true
            }
            None => false,
        }
    }
}

/// Every class of the session, keyed by class.
#[derive(Debug, Clone)]
pub struct Timetable {
    classes: BTreeMap<ClassKind, FitnessClass>,
}

impl Timetable {
    pub fn new(schedule: &ClassSchedule) -> Self {
        let classes = schedule
            .slots()
            .iter()
            .cloned()
            .map(|slot| (slot.kind, FitnessClass::new(slot)))
            .collect();

        Self { classes }
    }

    pub fn class(&self, kind: ClassKind) -> Option<&FitnessClass> {
        self.classes.get(&kind)
    }

    pub fn class_mut(&mut self, kind: ClassKind) -> Option<&mut FitnessClass> {
        self.classes.get_mut(&kind)
    }

    pub fn classes(&self) -> impl Iterator<Item = &FitnessClass> {
        self.classes.values()
    }

    /// The other class meeting at the same time as `kind` that the member is
    /// already checked into, if any.
    pub fn time_conflict(&self, kind: ClassKind, key: &MemberKey) -> Option<ClassKind> {
        let target = self.class(kind)?;
        self.classes()
            .filter(|other| other.slot().overlaps(target.slot()))
            .find(|other| other.find_member(key).is_some())
            .map(FitnessClass::kind)
    }

    pub fn has_time_conflict(&self, kind: ClassKind, key: &MemberKey) -> bool {
        self.time_conflict(kind, key).is_some()
    }

    /// Drops the member from every roster; used when the member leaves the
    /// database.
    pub fn remove_everywhere(&mut self, key: &MemberKey) -> usize {
        self.classes
            .values_mut()
            .map(|class| class.drop_member(key))
            .filter(|dropped| *dropped)
            .count()
    }

    pub fn print_class_schedule<W: Write>(
        &self,
        out: &mut W,
        database: &MemberDatabase,
        today: Date,
    ) -> io::Result<()> {
        writeln!(out, "{SCHEDULE_HEADER}")?;
        for class in self.classes() {
            writeln!(out, "{}", class.slot())?;
            if class.participants().is_empty() {
                continue;
            }

            writeln!(out, "{PARTICIPANTS_HEADER}")?;
            for key in class.participants() {
                if let Some(member) = database.lookup_key(key) {
                    writeln!(out, "{PARTICIPANT_INDENT}{}", member.describe(today))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(first: &str) -> MemberKey {
        MemberKey::new(first, "Doe", Date::new(1, 1, 1990))
    }

    #[test]
    fn check_in_and_drop_track_roster() {
        let mut timetable = Timetable::new(&ClassSchedule::standard());
        let pilates = timetable
            .class_mut(ClassKind::Pilates)
            .expect("pilates scheduled");

        pilates.check_in(key("John"));
        assert_eq!(pilates.find_member(&key("JOHN")), Some(0));
        assert!(pilates.drop_member(&key("john")));
        assert!(!pilates.drop_member(&key("john")));
        assert!(pilates.participants().is_empty());
    }

    #[test]
    fn conflict_only_across_overlapping_classes() {
        let mut timetable = Timetable::new(&ClassSchedule::standard());
        timetable
            .class_mut(ClassKind::Cardio)
            .expect("cardio scheduled")
            .check_in(key("John"));

        assert_eq!(
            timetable.time_conflict(ClassKind::Spinning, &key("John")),
            Some(ClassKind::Cardio)
        );
        assert!(!timetable.has_time_conflict(ClassKind::Cardio, &key("John")));
        assert!(!timetable.has_time_conflict(ClassKind::Pilates, &key("John")));
        assert!(!timetable.has_time_conflict(ClassKind::Spinning, &key("Jane")));
    }

    #[test]
    fn remove_everywhere_clears_all_rosters() {
        let mut timetable = Timetable::new(&ClassSchedule::standard());
        for kind in [ClassKind::Pilates, ClassKind::Cardio] {
            timetable
                .class_mut(kind)
                .expect("class scheduled")
                .check_in(key("John"));
        }

        assert_eq!(timetable.remove_everywhere(&key("John")), 2);
        assert!(timetable
            .classes()
            .all(|class| class.participants().is_empty()));
    }
}

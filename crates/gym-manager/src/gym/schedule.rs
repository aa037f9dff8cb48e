use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClassKind {
    Pilates,
    Spinning,
    Cardio,
}

impl ClassKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Pilates, Self::Spinning, Self::Cardio]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Pilates => "Pilates",
            Self::Spinning => "Spinning",
            Self::Cardio => "Cardio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fitness class '{0}'")]
pub struct UnknownClass(pub String);

impl FromStr for ClassKind {
    type Err = UnknownClass;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownClass(raw.to_owned()))
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed time slot and instructor of one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSlot {
    pub kind: ClassKind,
    pub instructor: String,
    pub starts_at: NaiveTime,
}

impl ClassSlot {
    pub fn new(kind: ClassKind, instructor: impl Into<String>, starts_at: NaiveTime) -> Self {
        Self {
            kind,
            instructor: instructor.into(),
            starts_at,
        }
    }

    pub fn overlaps(&self, other: &ClassSlot) -> bool {
        self.kind != other.kind && self.starts_at == other.starts_at
    }
}

impl fmt::Display for ClassSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.kind,
            self.instructor,
            self.starts_at.format("%-H:%M")
        )
    }
}

/// Timetable configuration, built once at startup and handed to whatever
/// needs to know when classes meet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSchedule {
    slots: Vec<ClassSlot>,
}

impl ClassSchedule {
    /// Keeps the first slot given for each class.
    pub fn new(slots: impl IntoIterator<Item = ClassSlot>) -> Self {
        let mut unique: Vec<ClassSlot> = Vec::new();
        for slot in slots {
            if !unique.iter().any(|existing| existing.kind == slot.kind) {
                unique.push(slot);
            }
        }
        unique.sort_by_key(|slot| slot.kind);
        Self { slots: unique }
    }

    pub fn standard() -> Self {
        Self::new([
            ClassSlot::new(ClassKind::Pilates, "JENNIFER", at(9, 30)),
            ClassSlot::new(ClassKind::Spinning, "DENISE", at(14, 0)),
            ClassSlot::new(ClassKind::Cardio, "KIM", at(14, 0)),
        ])
    }

    pub fn slots(&self) -> &[ClassSlot] {
        &self.slots
    }

    pub fn slot(&self, kind: ClassKind) -> Option<&ClassSlot> {
        self.slots.iter().find(|slot| slot.kind == kind)
    }
}

impl Default for ClassSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

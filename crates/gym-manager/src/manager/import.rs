use super::{GymManager, Rejection};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
struct MemberRow {
    first_name: String,
    last_name: String,
    dob: String,
    expiration: String,
    location: String,
}

/// A CSV row that failed the same checks as the `A` command. Rows are
/// numbered from 1, not counting the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row: usize,
    pub reason: Rejection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unable to open member file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed member record at row {row}: {source}")]
    Record { row: usize, source: csv::Error },
}

impl GymManager {
    pub fn import_members_from_path<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<ImportSummary, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.import_members(file)
    }

    /// Loads `first_name,last_name,dob,expiration,location` rows. Malformed
    /// CSV aborts the import; rows that fail validation are skipped and
    /// reported.
    pub fn import_members<R: Read>(&mut self, reader: R) -> Result<ImportSummary, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut summary = ImportSummary::default();
        for (index, record) in csv_reader.deserialize::<MemberRow>().enumerate() {
            let row = index + 1;
            let record = record.map_err(|source| ImportError::Record { row, source })?;

            match self.add_member(
                &record.first_name,
                &record.last_name,
                &record.dob,
                &record.expiration,
                &record.location,
            ) {
                Ok(_) => summary.added += 1,
                Err(reason) => {
                    warn!(row, %reason, "member row rejected");
                    summary.rejected.push(RejectedRow { row, reason });
                }
            }
        }

        info!(
            added = summary.added,
            rejected = summary.rejected.len(),
            "member import finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::{ClassSchedule, Date};
    use std::io::Cursor;

    fn manager() -> GymManager {
        GymManager::new(&ClassSchedule::standard(), Date::new(10, 16, 2026))
    }

    #[test]
    fn imports_valid_rows_and_reports_rejections() {
        let csv = "first_name,last_name,dob,expiration,location\n\
                   John,Doe,1/20/1990,3/30/2027,Edison\n\
                   Kid,Doe, 1/1/2015 ,3/30/2027,Edison\n\
                   john,DOE,1/20/1990,3/30/2028,Franklin\n\
                   Mary,Lindsey,12/1/1989,5/1/2027,Nowhere\n";

        let mut gym = manager();
        let summary = gym
            .import_members(Cursor::new(csv))
            .expect("well-formed csv imports");

        assert_eq!(summary.added, 1);
        assert_eq!(
            summary.rejected,
            vec![
                RejectedRow {
                    row: 2,
                    reason: Rejection::Underage(Date::new(1, 1, 2015)),
                },
                RejectedRow {
                    row: 3,
                    reason: Rejection::AlreadyInDatabase {
                        first_name: "john".into(),
                        last_name: "DOE".into(),
                    },
                },
                RejectedRow {
                    row: 4,
                    reason: Rejection::InvalidLocation("Nowhere".into()),
                },
            ]
        );
        assert_eq!(gym.database().len(), 1);
    }

    #[test]
    fn malformed_rows_abort_the_import() {
        let csv = "first_name,last_name,dob,expiration,location\nJohn,Doe,1/20/1990\n";
        let mut gym = manager();
        let err = gym
            .import_members(Cursor::new(csv))
            .expect_err("short record fails");
        assert!(matches!(err, ImportError::Record { row: 1, .. }));
    }

    #[test]
    fn missing_file_reports_path() {
        let mut gym = manager();
        let err = gym
            .import_members_from_path("/definitely/not/here.csv")
            .expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}

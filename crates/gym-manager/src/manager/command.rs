use crate::gym::Listing;

/// One parsed console line. Date, class and location tokens stay raw so the
/// dispatcher can validate them in the order the operator sees diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        first_name: String,
        last_name: String,
        dob: String,
        expiration: String,
        location: String,
    },
    Remove {
        first_name: String,
        last_name: String,
        dob: String,
    },
    Print(Listing),
    Schedule,
    CheckIn(ClassRequest),
    Drop(ClassRequest),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRequest {
    pub class: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{0} is an invalid command!")]
    Unknown(String),
    #[error("{0}: missing data tokens.")]
    MissingTokens(String),
}

impl Command {
    /// `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&op, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let require = |count: usize| -> Result<(), CommandError> {
            if args.len() < count {
                Err(CommandError::MissingTokens(op.to_owned()))
            } else {
                Ok(())
            }
        };

        let command = match op {
            "A" => {
                require(5)?;
                Self::Add {
                    first_name: args[0].to_owned(),
                    last_name: args[1].to_owned(),
                    dob: args[2].to_owned(),
                    expiration: args[3].to_owned(),
                    location: args[4].to_owned(),
                }
            }
            "R" => {
                require(3)?;
                Self::Remove {
                    first_name: args[0].to_owned(),
                    last_name: args[1].to_owned(),
                    dob: args[2].to_owned(),
                }
            }
            "P" => Self::Print(Listing::Unsorted),
            "PC" => Self::Print(Listing::ByCounty),
            "PN" => Self::Print(Listing::ByName),
            "PD" => Self::Print(Listing::ByExpiration),
            "S" => Self::Schedule,
            "C" | "D" => {
                require(4)?;
                let request = ClassRequest {
                    class: args[0].to_owned(),
                    first_name: args[1].to_owned(),
                    last_name: args[2].to_owned(),
                    dob: args[3].to_owned(),
                };
                if op == "C" {
                    Self::CheckIn(request)
                } else {
                    Self::Drop(request)
                }
            }
            "Q" if args.is_empty() => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_owned())),
        };

        Ok(Some(command))
    }
}

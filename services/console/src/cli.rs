use crate::session::{self, SessionArgs};
use clap::Parser;
use gym_manager::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "gym-manager",
    about = "Manage gym members and fitness class rosters from the console",
    version
)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) session: SessionArgs,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    session::run(cli.session)
}

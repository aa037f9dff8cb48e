mod cli;
mod infra;
mod session;

use gym_manager::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

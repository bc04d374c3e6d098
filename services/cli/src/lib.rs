mod cli;
mod commands;
mod infra;

use tutor_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

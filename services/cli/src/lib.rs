mod cli;
mod demo;
mod infra;
mod render;
mod shell;

use covoimmo::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

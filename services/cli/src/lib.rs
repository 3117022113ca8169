mod analyze;
mod cli;
mod infra;
mod score;

use post_sentiment::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

mod cli;
mod demo;
mod infra;
mod routes;
mod security;
mod server;

use pathwise::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

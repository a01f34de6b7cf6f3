mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use risk_aware::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

//! Binary surface for the parameter catalog: the HTTP service plus the
//! catalog and demo commands built on the `tasador` library.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use tasador::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

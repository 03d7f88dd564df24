use std::process::ExitCode;
use dotenv::dotenv;
use tracing::error;
use places_entries::controller;
use places_entries::helpers::usage::parse_config_or_exit;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = parse_config_or_exit();

    match controller::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(
                "Something went wrong collecting {} in {} due to: {:#}",
                config.business_type,
                config.city_name,
                e
            );
            ExitCode::FAILURE
        }
    }
}

use anyhow::Context;
use firstuser::{configuration::get_configuration, startup::Application, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let _guard = telemetry::init(&configuration.logger)?;

    let application = Application::build(&configuration).await?;
    application.run_until_stopped().await?;
    Ok(())
}

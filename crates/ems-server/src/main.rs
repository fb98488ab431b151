use anyhow::Context;
use ems_server::{get_configuration, get_socket_address, initialize_tracing, ApiServerBuilder};
use ems_shared::telemetry;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (file, path) =
        telemetry::create_trace_file("ems-server").context("failed to create file for traces")?;
    initialize_tracing("ems_server", "info", file);
    println!("Traces being written to: {path:?}");

    let configuration = get_configuration().context("failed to read configuration")?;
    let addr = get_socket_address(&configuration.application)
        .context("failed to get socket address")?;
    let api_server_builder = ApiServerBuilder::new(configuration, env!("CARGO_PKG_VERSION"))
        .context("failed to initialize API Server")?;
    let (api_server, port) = api_server_builder
        .build_runnable_api_server(addr)
        .await
        .context("failed to finalize API Server")?;

    // Print a message to stdout that server is started
    println!("-- Server Started on port {port} --");
    info!("-- Server Started --");
    println!("{}", "-".repeat(80)); // Add separator

    let outcome = api_server.run().await;
    match &outcome {
        Ok(()) => info!("API Server has exited with Ok(())"),
        Err(e) => error!(
            error.cause_chain = ?e,
            error.message = %e,
            "API Server resulted in an error: {e}"
        ),
    }
    outcome
}

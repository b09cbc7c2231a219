use anyhow::Context;
use tourist_suite::configuration::get_configuration;
use tourist_suite::domain::RunId;
use tourist_suite::observer::TracingObserver;
use tourist_suite::runner::SuiteRunner;
use tourist_suite::scenarios;
use tourist_suite::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so that the report on stdout stays readable
    let subscriber = get_subscriber("tourist-suite".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let client = configuration
        .api
        .client()
        .context("Failed to build the API client.")?;

    let selected = scenarios::select(std::env::args().nth(1).as_deref())?;

    let run_id = RunId::generate();
    tracing::info!(%run_id, base_url = %client.base_url(), "Starting the suite");
    let runner =
        SuiteRunner::new(client, run_id, configuration.fixture).with_observer(TracingObserver);
    let report = runner.run(&selected).await;

    println!("{}", report);
    if !report.is_success() {
        std::process::exit(report.exit_code());
    }
    Ok(())
}

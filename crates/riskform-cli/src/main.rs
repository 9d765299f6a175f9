mod consent;
mod display;
mod input;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use riskform_client::{ApiClient, ConfirmController, SubmissionController};
use riskform_core::consent::ConsentStore;
use riskform_core::prediction::ConfirmRequest;
use riskform_core::rules::RuleSet;

use crate::consent::FileConsentStore;

#[derive(Parser)]
#[command(name = "riskform", version, about = "Client for the riskform scoring service")]
struct Cli {
    /// Base URL of the scoring service.
    #[arg(
        long,
        global = true,
        env = "RISKFORM_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the input fields the service currently accepts.
    Schema,
    /// Validate measurements and request a risk score.
    Predict {
        /// Measurements as NAME=VALUE pairs, e.g. radius_mean=14.2.
        #[arg(value_name = "NAME=VALUE")]
        values: Vec<String>,
        /// Acknowledge the research disclaimer (remembered for next time).
        #[arg(long)]
        accept_risks: bool,
    },
    /// Submit a doctor-confirmed outcome for a prior submission.
    Confirm {
        submission_id: i64,
        /// Confirmed outcome: benign, malignant, 0, or 1.
        label: String,
        /// Acknowledge the research disclaimer (remembered for next time).
        #[arg(long)]
        accept_risks: bool,
    },
    /// Look up a prior submission and its confirmation status.
    Submission { id: u64 },
    /// Check whether the service is reachable.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("riskform v{}", env!("CARGO_PKG_VERSION"));
    let cli = Cli::parse();
    let api = ApiClient::new(cli.api_url);

    match cli.command {
        Command::Schema => {
            let schema = api
                .fetch_schema()
                .await
                .context("failed to load the measurement form schema")?;
            display::print_schema(&schema);
        }
        Command::Predict {
            values,
            accept_risks,
        } => {
            ensure_consent(accept_risks)?;

            let schema = api
                .fetch_schema()
                .await
                .context("failed to load the measurement form schema")?;
            let rules = RuleSet::compile(&schema);
            let raw = input::parse_pairs(&values)?;

            let record = match rules.validate(&raw) {
                Ok(record) => record,
                Err(errors) => {
                    display::print_field_errors(&errors);
                    bail!("validation failed; nothing was submitted");
                }
            };

            let mut controller = SubmissionController::new(api);
            let result = controller.submit(&record).await?;
            display::print_result(&result);
        }
        Command::Confirm {
            submission_id,
            label,
            accept_risks,
        } => {
            ensure_consent(accept_risks)?;

            let request = match ConfirmRequest::new(submission_id, input::parse_label(&label)) {
                Ok(request) => request,
                Err(errors) => {
                    display::print_field_errors(&errors);
                    bail!("validation failed; nothing was submitted");
                }
            };

            let mut controller = ConfirmController::new(api);
            let outcome = controller.confirm(&request).await?;
            let text = if outcome.confirmed_label == 1 {
                "malignant"
            } else {
                "benign"
            };
            println!(
                "Confirmed outcome for submission {} as {}.",
                outcome.submission_id, text
            );
        }
        Command::Submission { id } => {
            let detail = api
                .submission(id)
                .await
                .with_context(|| format!("failed to fetch submission {id}"))?;
            display::print_submission(&detail);
        }
        Command::Health => {
            let status = api.health().await.context("service is not reachable")?;
            println!("service status: {status}");
        }
    }

    Ok(())
}

/// One-time consent gate ahead of any submission. `--accept-risks`
/// records the acknowledgement; without it, a first-time user is shown
/// the disclaimer and nothing is sent.
fn ensure_consent(accept_risks: bool) -> anyhow::Result<()> {
    let path = FileConsentStore::default_path()
        .context("could not determine a config directory for the consent record")?;
    let mut store = FileConsentStore::new(path);

    if store.get() {
        return Ok(());
    }
    if accept_risks {
        store.set(true).context("failed to record consent")?;
        return Ok(());
    }

    display::print_disclaimer();
    bail!("re-run with --accept-risks to acknowledge the disclaimer");
}

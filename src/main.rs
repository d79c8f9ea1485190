use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;

use billdesk::render::{format_status_card, format_transitions};
use billdesk::sla::SlaStatus;
use billdesk::workflow::{Transition, WorkflowClient, WorkflowGateway, WorkflowSnapshot};

#[derive(Parser)]
#[command(name = "billdesk")]
#[command(about = "Back-office invoice workflow SLA tracking")]
#[command(
    long_about = "Billdesk is a thin client to the upstream billing API. It fetches \
                  per-invoice workflow snapshots, evaluates SLA health locally, and \
                  drives allowed transitions back through the workflow service."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Emit machine-readable JSON instead of the rendered status card
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the workflow state and SLA status of an invoice
    Status {
        /// Invoice identifier, e.g. INV-1042
        invoice_id: String,
    },
    /// List the transitions the workflow service will currently accept
    Transitions {
        invoice_id: String,
    },
    /// Apply a workflow transition and show the resulting status
    Transition {
        invoice_id: String,
        /// Target state name as reported by `billdesk transitions`
        target_state: String,
        /// Optional comment recorded with the transition
        #[arg(long)]
        comment: Option<String>,
    },
}

#[derive(Serialize)]
struct StatusReport<'a> {
    invoice_id: &'a str,
    snapshot: &'a WorkflowSnapshot,
    sla: &'a SlaStatus,
}

#[derive(Serialize)]
struct TransitionsReport<'a> {
    invoice_id: &'a str,
    transitions: &'a [Transition],
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    billdesk::init_config()?;
    let json_logs = billdesk::config()?.observability.json_logs;
    billdesk::init_telemetry(json_logs)?;

    let client = WorkflowClient::from_config()?;

    match cli.command {
        Commands::Status { invoice_id } => {
            let snapshot = client.fetch_snapshot(&invoice_id).await?;
            print_status(&invoice_id, &snapshot, cli.json)?;
        }
        Commands::Transitions { invoice_id } => {
            let transitions = client.fetch_available_transitions(&invoice_id).await?;
            if cli.json {
                let report = TransitionsReport {
                    invoice_id: &invoice_id,
                    transitions: &transitions,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_transitions(&invoice_id, &transitions));
            }
        }
        Commands::Transition {
            invoice_id,
            target_state,
            comment,
        } => {
            let snapshot = client
                .apply_transition(&invoice_id, &target_state, comment.as_deref())
                .await?;
            if !cli.json {
                println!("Applied transition to '{target_state}'");
            }
            print_status(&invoice_id, &snapshot, cli.json)?;
        }
    }

    billdesk::shutdown_telemetry();
    Ok(())
}

fn print_status(invoice_id: &str, snapshot: &WorkflowSnapshot, json: bool) -> Result<()> {
    let status = SlaStatus::evaluate(snapshot, Utc::now());

    if json {
        let report = StatusReport {
            invoice_id,
            snapshot,
            sla: &status,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_status_card(invoice_id, snapshot, &status));
    }

    Ok(())
}

use actual_csv_exporter::actual::ActualApi;
use actual_csv_exporter::config::Config;
use actual_csv_exporter::export::{ReportFile, export_transactions};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(period) = config.report_period() else {
        error!("Could not determine the month to export");
        return ExitCode::FAILURE;
    };

    let actual_api = match ActualApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!("Error creating ActualApi: {:#?}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = match ReportFile::create(&config.transaction_output_dir, &period) {
        Ok(report) => report,
        Err(e) => {
            error!("Error creating report file: {}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Exporting transactions of {} to {}",
        period,
        report.path().display()
    );

    let summary = match export_transactions(&actual_api, &period, report.writer()).await {
        Ok(summary) => summary,
        Err(e) => {
            error!("Export of {} failed: {}", period, e);
            if let Err(e) = report.discard() {
                warn!("Error removing incomplete report: {}", e);
            }
            return ExitCode::FAILURE;
        }
    };

    let path = match report.persist() {
        Ok(path) => path,
        Err(e) => {
            error!("Error saving report: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if summary.accounts_failed > 0 {
        warn!(
            "Transactions of {} accounts could not be fetched and are missing from the report",
            summary.accounts_failed
        );
    }
    if summary.transactions_written == 0 {
        info!("No transactions found for any account");
    } else {
        info!(
            "Written {} total transactions from {} accounts to {}",
            summary.transactions_written,
            summary.accounts_exported,
            path.display()
        );
    }

    ExitCode::SUCCESS
}

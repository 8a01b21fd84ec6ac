//! Export of one month of transactions to a CSV report

use crate::actual::LedgerSource;
use crate::period::ReportPeriod;
use crate::report::TransactionCsvWriter;
use crate::resolver::NameResolver;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Accounts with at least one exported transaction.
    pub accounts_exported: usize,
    pub accounts_skipped: usize,
    pub accounts_failed: usize,
    pub transactions_written: usize,
}

/**
Report file of a period.

Rows are written to `<YYYY-MM>.csv.tmp`, which replaces `<YYYY-MM>.csv` only when
[`ReportFile::persist`] is called, so a failed export never touches the previous
report of the month.
*/
pub struct ReportFile {
    path: PathBuf,
    tmp_path: PathBuf,
    file: File,
}

impl ReportFile {
    /// Creates (or truncates) the temporary file, creating the folder if needed.
    pub fn create(output_dir: &Path, period: &ReportPeriod) -> Result<Self, Box<dyn Error>> {
        if !output_dir.as_os_str().is_empty() && !fs::exists(output_dir)? {
            fs::create_dir_all(output_dir)?;
            info!("Created folder: {}", output_dir.display());
        }

        let path = output_dir.join(period.file_name());
        let tmp_path = output_dir.join(format!("{}.tmp", period.file_name()));
        let file = File::create(&tmp_path)?;

        Ok(Self {
            path,
            tmp_path,
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> &File {
        &self.file
    }

    /// Moves the written report into place, replacing any previous one.
    pub fn persist(self) -> Result<PathBuf, Box<dyn Error>> {
        let Self {
            path,
            tmp_path,
            file,
        } = self;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &path)?;
        info!("Saved file: {}", path.display());

        Ok(path)
    }

    /// Removes the temporary file, the previous report is left as is.
    pub fn discard(self) -> Result<(), Box<dyn Error>> {
        let Self { tmp_path, file, .. } = self;
        drop(file);

        fs::remove_file(&tmp_path)?;
        Ok(())
    }
}

/**
Writes every transaction of `period` into `destination`, grouped by account.

Closed accounts are skipped. An account whose transactions cannot be fetched is
logged and skipped, a write error stops the export. Each account's rows are flushed
before the next account is fetched.
*/
pub async fn export_transactions<S, W>(
    source: &S,
    period: &ReportPeriod,
    destination: W,
) -> Result<ExportSummary, Box<dyn Error>>
where
    S: LedgerSource,
    W: Write,
{
    let categories = source.get_categories().await?;
    let payees = source.get_payees().await?;
    let resolver = NameResolver::new(categories, payees);
    info!(
        "Loaded {} categories and {} payees",
        resolver.category_count(),
        resolver.payee_count()
    );

    let mut writer = TransactionCsvWriter::new(destination, resolver)?;

    let accounts = source.get_accounts().await?;
    info!("Found {} accounts", accounts.len());

    let mut summary = ExportSummary::default();
    for account in accounts {
        if account.closed {
            info!("Skipping closed account: {}", account.name);
            summary.accounts_skipped += 1;
            continue;
        }

        let transactions = match source.get_transactions(&account.id, period).await {
            Ok(transactions) => transactions,
            Err(e) => {
                warn!(
                    "Failed to fetch transactions for account {}: {}",
                    account.name, e
                );
                summary.accounts_failed += 1;
                continue;
            }
        };

        if transactions.is_empty() {
            info!("No transactions for account: {}", account.name);
            continue;
        }

        if let Err(e) = writer.add_batch(&account, &transactions) {
            error!(
                "Failed to write transactions of account {}: {}",
                account.name, e
            );
            return Err(Box::new(e));
        }

        info!(
            "Written {} transactions for account {}",
            transactions.len(),
            account.name
        );
        summary.accounts_exported += 1;
        summary.transactions_written += transactions.len();
    }

    Ok(summary)
}

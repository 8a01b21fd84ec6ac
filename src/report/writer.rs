use super::{HEADER, TransactionRow};
use crate::actual::{Account, Transaction};
use crate::resolver::NameResolver;
use std::io::Write;

/// Writes the transaction report, one batch of rows per account.
///
/// Each batch is rendered in memory first and handed to the destination in a single
/// write, so a batch that fails leaves nothing behind for later writes to flush.
pub struct TransactionCsvWriter<W: Write> {
    destination: W,
    resolver: NameResolver,
}

impl<W: Write> TransactionCsvWriter<W> {
    /// Writes and flushes the header. An error here means `destination` is unusable.
    pub fn new(destination: W, resolver: NameResolver) -> csv::Result<Self> {
        let mut writer = Self {
            destination,
            resolver,
        };
        let header = render([HEADER])?;
        writer.write_out(&header)?;

        Ok(writer)
    }

    /// Appends the rows of `account`'s transactions, in order, then flushes.
    pub fn add_batch(&mut self, account: &Account, transactions: &[Transaction]) -> csv::Result<()> {
        if transactions.is_empty() {
            return Ok(());
        }

        let rows: Vec<TransactionRow> = transactions
            .iter()
            .map(|transaction| TransactionRow::new(account, transaction, &self.resolver))
            .collect();

        let batch = render(rows.iter().map(TransactionRow::as_record))?;
        self.write_out(&batch)
    }

    pub fn into_inner(self) -> W {
        self.destination
    }

    fn write_out(&mut self, bytes: &[u8]) -> csv::Result<()> {
        self.destination.write_all(bytes)?;
        self.destination.flush()?;
        Ok(())
    }
}

fn render<'a, I>(records: I) -> csv::Result<Vec<u8>>
where
    I: IntoIterator<Item = [&'a str; 7]>,
{
    let mut scratch = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    for record in records {
        scratch.write_record(record)?;
    }
    let bytes = scratch.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

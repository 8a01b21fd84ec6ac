mod account;
mod api;
mod category;
mod payee;
mod transaction;

pub use self::account::*;
pub use self::api::*;
pub use self::category::*;
pub use self::payee::*;
pub use self::transaction::*;

use crate::period::ReportPeriod;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Envelope of every listing returned by the Actual HTTP API.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: Vec<T>,
}

/// Where the export reads its accounts, categories, payees and transactions from.
#[allow(async_fn_in_trait)]
pub trait LedgerSource {
    async fn get_accounts(&self) -> Result<Vec<Account>, Box<dyn Error>>;

    async fn get_categories(&self) -> Result<Vec<Category>, Box<dyn Error>>;

    async fn get_payees(&self) -> Result<Vec<Payee>, Box<dyn Error>>;

    /// Transactions of one account, dated within the period (bounds included).
    async fn get_transactions(
        &self,
        account_id: &str,
        period: &ReportPeriod,
    ) -> Result<Vec<Transaction>, Box<dyn Error>>;
}

/*!
Structs related to Actual accounts APIs' responses.
*/

use serde::{Deserialize, Serialize};

/**
Structure representing an Actual account.

Actual returns a few more fields (`offbudget`, balances), only those needed for
the export are kept.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// ID of the account.
    pub id: String,
    /// The name of the account.
    pub name: String,
    /// If true, the account is closed and not exported.
    #[serde(default)]
    pub closed: bool,
}

/**
Response of /budgets/{sync_id}/accounts
*/
pub type AccountsResponse = super::DataResponse<Account>;

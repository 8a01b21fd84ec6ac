/*!
Structs related to Actual transactions APIs' responses.
*/

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/**
Structure representing an Actual transaction.

Actual returns many more fields (`imported_payee`, `cleared`, `tombstone`,
`is_parent`, `is_child`, `parent_id`, `imported_id`, `transfer_id`,
`sort_order`, `schedule`, `subtransactions`...), they are ignored on decode.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ID of the transaction.
    pub id: String,

    /// ID of the related account.
    pub account: String,

    /// ID of the category, null for uncategorized transactions.
    #[serde(default)]
    pub category: Option<String>,

    /// ID of the payee.
    #[serde(default)]
    pub payee: Option<String>,

    /// Amount in cents, negative for outflows.
    pub amount: i64,

    #[serde(default)]
    pub notes: Option<String>,

    /// Date of the transaction, `YYYY-MM-DD`.
    pub date: String,

    /// Error attached to the transaction by Actual, e.g. an unbalanced split.
    /// Object errors are kept as their JSON text.
    #[serde(default, deserialize_with = "deserialize_error")]
    pub error: Option<String>,
}

fn deserialize_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/**
Response of /budgets/{sync_id}/accounts/{account_id}/transactions
*/
pub type TransactionsResponse = super::DataResponse<Transaction>;

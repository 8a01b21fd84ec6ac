/*!
Structs related to Actual payees APIs' responses.
*/

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payee {
    /// ID of the payee.
    pub id: String,
    pub name: String,
}

/**
Response of /budgets/{sync_id}/payees
*/
pub type PayeesResponse = super::DataResponse<Payee>;

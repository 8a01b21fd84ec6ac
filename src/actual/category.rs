/*!
Structs related to Actual categories APIs' responses.
*/

use serde::{Deserialize, Serialize};

/**
Structure representing an Actual budget category.

`group_id` and `hidden` are also returned, they are ignored on decode.
*/
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// ID of the category.
    pub id: String,
    /// Display name of the category.
    pub name: String,
    /// Income categories are the source side of a posting, see `TransactionRow::new`.
    #[serde(default)]
    pub is_income: bool,
}

/**
Response of /budgets/{sync_id}/categories
*/
pub type CategoriesResponse = super::DataResponse<Category>;

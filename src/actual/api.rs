//! Struct and methods to call the Actual HTTP API

use super::{
    Account, AccountsResponse, CategoriesResponse, Category, LedgerSource, Payee, PayeesResponse,
    Transaction, TransactionsResponse,
};
use crate::config::Config;
use crate::period::ReportPeriod;
use reqwest::StatusCode;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Clone)]
pub struct ActualApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    budget_sync_id: String,
}

impl ActualApi {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.actual_api_url.trim_end_matches('/').to_string(),
            api_key: config.actual_api_key.clone(),
            budget_sync_id: config.budget_sync_id.clone(),
        })
    }

    fn budget_url(&self, path: &str) -> String {
        format!("{}/budgets/{}{}", self.api_url, self.budget_sync_id, path)
    }

    async fn get<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, Box<dyn Error>>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        let api = self.budget_url(path);

        debug!("Calling Actual API: {}", api);

        let response = self
            .client
            .get(&api)
            .header("x-api-key", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(format!("unexpected status code: {}", status.as_u16()).into());
        }

        let text = response.text().await?;
        match serde_json::from_str::<T>(&text) {
            Ok(json) => Ok(json),
            Err(e) => {
                error!("Failed to decode Actual API response: {:?}", &text);
                Err(Box::new(e))
            }
        }
    }
}

impl LedgerSource for ActualApi {
    async fn get_accounts(&self) -> Result<Vec<Account>, Box<dyn Error>> {
        let resp = self.get::<AccountsResponse>("/accounts", &[]).await?;
        Ok(resp.data)
    }

    async fn get_categories(&self) -> Result<Vec<Category>, Box<dyn Error>> {
        let resp = self.get::<CategoriesResponse>("/categories", &[]).await?;
        Ok(resp.data)
    }

    async fn get_payees(&self) -> Result<Vec<Payee>, Box<dyn Error>> {
        let resp = self.get::<PayeesResponse>("/payees", &[]).await?;
        Ok(resp.data)
    }

    async fn get_transactions(
        &self,
        account_id: &str,
        period: &ReportPeriod,
    ) -> Result<Vec<Transaction>, Box<dyn Error>> {
        let since_date = period.start_date();
        let until_date = period.end_date();
        let resp = self
            .get::<TransactionsResponse>(
                &format!("/accounts/{}/transactions", account_id),
                &[("since_date", since_date.as_str()), ("until_date", until_date.as_str())],
            )
            .await?;
        Ok(resp.data)
    }
}

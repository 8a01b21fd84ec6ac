//! Exporter settings read from the environment (and `.env`)

use crate::period::ReportPeriod;
use std::error::Error;
use std::path::PathBuf;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub actual_api_url: String,
    pub actual_api_key: String,
    pub budget_sync_id: String,
    pub transaction_output_dir: PathBuf,
    /// Month to export, the current one when unset.
    pub export_month: Option<ReportPeriod>,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| format!("Missing required environment variable: {}", key))
        };

        let export_month = match var("EXPORT_MONTH") {
            Some(month) => Some(month.parse::<ReportPeriod>()?),
            None => None,
        };

        let http_timeout_secs: u64 = match var("HTTP_TIMEOUT_SECS") {
            Some(secs) => secs
                .trim()
                .parse()
                .map_err(|e| format!("Invalid HTTP_TIMEOUT_SECS {:?}: {}", secs, e))?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            actual_api_url: required("ACTUAL_API_URL")?,
            actual_api_key: required("ACTUAL_API_KEY")?,
            budget_sync_id: required("BUDGET_SYNC_ID")?,
            transaction_output_dir: var("TRANSACTION_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            export_month,
            http_timeout_secs,
        })
    }

    /// Configured month, or the current one.
    pub fn report_period(&self) -> Option<ReportPeriod> {
        self.export_month.or_else(ReportPeriod::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("ACTUAL_API_URL", "http://localhost:5007/v1"),
        ("ACTUAL_API_KEY", "secret"),
        ("BUDGET_SYNC_ID", "budget-1"),
    ];

    #[test]
    fn reads_required_values_with_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.actual_api_url, "http://localhost:5007/v1");
        assert_eq!(config.actual_api_key, "secret");
        assert_eq!(config.budget_sync_id, "budget-1");
        assert_eq!(config.transaction_output_dir, PathBuf::from("."));
        assert_eq!(config.export_month, None);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    fn reads_optional_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("TRANSACTION_OUTPUT_DIR", "/tmp/reports"));
        vars.push(("EXPORT_MONTH", "2024-03"));
        vars.push(("HTTP_TIMEOUT_SECS", "5"));

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.transaction_output_dir, PathBuf::from("/tmp/reports"));
        assert_eq!(config.export_month, ReportPeriod::month(2024, 3));
        assert_eq!(config.report_period(), ReportPeriod::month(2024, 3));
        assert_eq!(config.http_timeout_secs, 5);
    }

    #[test]
    fn names_missing_variable() {
        let err = Config::from_lookup(lookup(&REQUIRED[..2])).unwrap_err();

        assert!(err.to_string().contains("BUDGET_SYNC_ID"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[1] = ("ACTUAL_API_KEY", "  ");

        let err = Config::from_lookup(lookup(&vars)).unwrap_err();

        assert!(err.to_string().contains("ACTUAL_API_KEY"));
    }

    #[test]
    fn rejects_malformed_export_month() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("EXPORT_MONTH", "March"));

        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}

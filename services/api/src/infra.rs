use chrono::Local;
use enlist_calc::calculators::recruitment::CutoffTable;
use enlist_calc::calculators::YearMonth;
use enlist_calc::config::DatasetConfig;
use enlist_calc::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Cutoff dataset from an explicit path, else the configured one, else the
/// published table.
pub(crate) fn load_cutoffs(
    override_path: Option<&Path>,
    datasets: &DatasetConfig,
) -> Result<CutoffTable, AppError> {
    match override_path.or(datasets.cutoff_csv.as_deref()) {
        Some(path) => {
            let table = CutoffTable::from_path(path)?;
            info!(path = %path.display(), entries = table.len(), "loaded cutoff dataset");
            Ok(table)
        }
        None => Ok(CutoffTable::published()),
    }
}

pub(crate) fn current_month() -> YearMonth {
    YearMonth::from_date(Local::now().date_naive())
}

pub(crate) fn parse_year_month(raw: &str) -> Result<YearMonth, String> {
    raw.parse::<YearMonth>()
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_cli_months() {
        let month = parse_year_month("2025-06").expect("month");
        assert_eq!(month, YearMonth::new(2025, 6).expect("valid"));
        assert!(parse_year_month("June").is_err());
    }

    #[test]
    fn published_cutoffs_without_override() {
        let table = load_cutoffs(None, &DatasetConfig::default()).expect("table");
        assert_eq!(table, CutoffTable::published());
    }

    #[test]
    fn missing_dataset_is_reported() {
        let datasets = DatasetConfig {
            cutoff_csv: Some(PathBuf::from("missing/cutoffs.csv")),
        };
        let err = load_cutoffs(None, &datasets).unwrap_err();
        assert!(matches!(err, AppError::Dataset(_)));
    }
}

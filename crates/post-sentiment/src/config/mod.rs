use crate::report::ChartOrder;
use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

pub const DEFAULT_RESULTS_PATH: &str = "sentiment_results.csv";
pub const DEFAULT_CHART_PATH: &str = "sentiment_histogram.png";
const DEFAULT_CHART_WIDTH: u32 = 800;
const DEFAULT_CHART_HEIGHT: u32 = 500;
const MIN_CHART_WIDTH: u32 = 200;
const MIN_CHART_HEIGHT: u32 = 150;
const MAX_CHART_WIDTH: u32 = 10_000;
const MAX_CHART_HEIGHT: u32 = 10_000;

/// Top-level configuration for a sentiment run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub report: ReportConfig,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let results_path = env::var("SENTIMENT_RESULTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_RESULTS_PATH));
        let chart_path = env::var("SENTIMENT_CHART_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CHART_PATH));

        let order = match env::var("SENTIMENT_CHART_ORDER") {
            Ok(value) => value
                .parse::<ChartOrder>()
                .map_err(|_| ConfigError::InvalidChartOrder { value })?,
            Err(_) => ChartOrder::default(),
        };

        let width = dimension_var(
            "SENTIMENT_CHART_WIDTH",
            DEFAULT_CHART_WIDTH,
            MIN_CHART_WIDTH..=MAX_CHART_WIDTH,
        )?;
        let height = dimension_var(
            "SENTIMENT_CHART_HEIGHT",
            DEFAULT_CHART_HEIGHT,
            MIN_CHART_HEIGHT..=MAX_CHART_HEIGHT,
        )?;
        let show = flag_var("SENTIMENT_CHART_SHOW")?;

        let lexicon_path = env::var("SENTIMENT_LEXICON_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("SENTIMENT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            report: ReportConfig {
                results_path,
                chart_path,
                chart: ChartConfig {
                    order,
                    width,
                    height,
                    show,
                },
            },
            scoring: ScoringConfig { lexicon_path },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn dimension_var(
    name: &'static str,
    default: u32,
    range: RangeInclusive<u32>,
) -> Result<u32, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    match raw.trim().parse::<u32>() {
        Ok(value) if range.contains(&value) => Ok(value),
        _ => Err(ConfigError::InvalidDimension {
            name,
            value: raw,
            min: *range.start(),
            max: *range.end(),
        }),
    }
}

fn flag_var(name: &'static str) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::InvalidFlag { name, value: raw }),
    }
}

/// Where the two report sinks write.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub results_path: PathBuf,
    pub chart_path: PathBuf,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Copy)]
pub struct ChartConfig {
    pub order: ChartOrder,
    pub width: u32,
    pub height: u32,
    /// Open the saved chart in the system image viewer after the run.
    pub show: bool,
}

/// Optional custom lexicon; the built-in one is used otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub lexicon_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidChartOrder {
        value: String,
    },
    InvalidDimension {
        name: &'static str,
        value: String,
        min: u32,
        max: u32,
    },
    InvalidFlag {
        name: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidChartOrder { value } => write!(
                f,
                "SENTIMENT_CHART_ORDER must be 'frequency' or 'canonical' (got '{value}')"
            ),
            ConfigError::InvalidDimension {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "{name} must be an integer between {min} and {max} (got '{value}')"
            ),
            ConfigError::InvalidFlag { name, value } => {
                write!(f, "{name} must be true or false (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("SENTIMENT_RESULTS_PATH");
        env::remove_var("SENTIMENT_CHART_PATH");
        env::remove_var("SENTIMENT_CHART_ORDER");
        env::remove_var("SENTIMENT_CHART_WIDTH");
        env::remove_var("SENTIMENT_CHART_HEIGHT");
        env::remove_var("SENTIMENT_CHART_SHOW");
        env::remove_var("SENTIMENT_LEXICON_PATH");
        env::remove_var("SENTIMENT_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.report.results_path, PathBuf::from("sentiment_results.csv"));
        assert_eq!(config.report.chart_path, PathBuf::from("sentiment_histogram.png"));
        assert_eq!(config.report.chart.order, ChartOrder::Frequency);
        assert_eq!(config.report.chart.width, 800);
        assert_eq!(config.report.chart.height, 500);
        assert!(!config.report.chart.show);
        assert!(config.scoring.lexicon_path.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_overrides_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SENTIMENT_CHART_ORDER", "canonical");
        env::set_var("SENTIMENT_CHART_WIDTH", "1024");
        env::set_var("SENTIMENT_CHART_SHOW", "yes");
        env::set_var("SENTIMENT_LEXICON_PATH", "lexicon.csv");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.report.chart.order, ChartOrder::Canonical);
        assert_eq!(config.report.chart.width, 1024);
        assert!(config.report.chart.show);
        assert_eq!(
            config.scoring.lexicon_path,
            Some(PathBuf::from("lexicon.csv"))
        );
    }

    #[test]
    fn rejects_invalid_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SENTIMENT_CHART_ORDER", "random");
        let err = AppConfig::load().expect_err("order rejected");
        assert!(matches!(err, ConfigError::InvalidChartOrder { .. }));

        reset_env();
        env::set_var("SENTIMENT_CHART_HEIGHT", "20");
        let err = AppConfig::load().expect_err("height rejected");
        reset_env();
        assert!(matches!(
            err,
            ConfigError::InvalidDimension {
                name: "SENTIMENT_CHART_HEIGHT",
                ..
            }
        ));

        env::set_var("SENTIMENT_CHART_WIDTH", "4294967295");
        let err = AppConfig::load().expect_err("oversized width rejected");
        reset_env();
        match err {
            ConfigError::InvalidDimension {
                name: "SENTIMENT_CHART_WIDTH",
                max,
                ..
            } => assert_eq!(max, 10_000),
            other => panic!("unexpected error: {other}"),
        }

        env::set_var("SENTIMENT_CHART_HEIGHT", "10001");
        let err = AppConfig::load().expect_err("oversized height rejected");
        reset_env();
        assert!(err.to_string().contains("between 150 and 10000"));

        env::set_var("SENTIMENT_CHART_WIDTH", "10000");
        let config = AppConfig::load().expect("upper bound accepted");
        reset_env();
        assert_eq!(config.report.chart.width, 10_000);

        env::set_var("SENTIMENT_CHART_SHOW", "sometimes");
        let err = AppConfig::load().expect_err("flag rejected");
        reset_env();
        assert!(matches!(
            err,
            ConfigError::InvalidFlag {
                name: "SENTIMENT_CHART_SHOW",
                ..
            }
        ));
    }
}

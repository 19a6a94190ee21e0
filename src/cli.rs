//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{default_db_path, AppConfig, OutputFormat};
use crate::report::ReportOptions;

/// Student grades - build the sample database, run the analysis queries, render charts.
#[derive(Parser, Debug)]
#[command(name = "student-grades")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "STUDENT_GRADES_DB_PATH", default_value_os_t = default_db_path())]
    pub db: PathBuf,

    /// Directory for the SVG charts
    #[arg(long, env = "STUDENT_GRADES_CHART_DIR", default_value = "charts")]
    pub chart_dir: PathBuf,

    /// Skip chart rendering
    #[arg(long, env = "STUDENT_GRADES_NO_CHARTS")]
    pub no_charts: bool,

    /// Also write students.csv, grades.csv and combined.csv to this directory
    #[arg(long, env = "STUDENT_GRADES_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Back up and delete the database file before running
    #[arg(long, env = "STUDENT_GRADES_RESET")]
    pub reset: bool,

    /// Report output format
    #[arg(long, env = "STUDENT_GRADES_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report language (en, zh-CN)
    #[arg(long, env = "STUDENT_GRADES_LOCALE", default_value = "en")]
    pub locale: String,

    /// Subject whose average is reported
    #[arg(long, env = "STUDENT_GRADES_SUBJECT", default_value = "Math")]
    pub subject: String,

    /// Report every grade strictly above this value
    #[arg(long, env = "STUDENT_GRADES_THRESHOLD", default_value_t = 90)]
    pub threshold: i64,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, env = "STUDENT_GRADES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, env = "STUDENT_GRADES_JSON_LOGS")]
    pub json_logs: bool,
}

impl Cli {
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            db_path: self.db,
            chart_dir: self.chart_dir,
            export_dir: self.export_dir,
            render_charts: !self.no_charts,
            reset: self.reset,
            output_format: self.format,
            locale: self.locale,
            report: ReportOptions {
                focus_subject: self.subject,
                high_score_threshold: self.threshold,
            },
        }
    }
}

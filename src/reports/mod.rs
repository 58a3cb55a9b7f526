//! Reports module for FinBEE
//!
//! Terminal and CSV renderings of the analytics: the full dashboard plus the
//! individual sections it is built from.

pub mod dashboard;
pub mod sections;

pub use dashboard::DashboardReport;
pub use sections::{
    format_anomalies, format_category_breakdown, format_month_stats, format_summary, format_tax,
    format_year_overview, MONTH_NAMES,
};

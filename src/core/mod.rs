//! Core modules for Runedra

pub mod config;
pub mod calculator;
pub mod session;
pub mod report;
pub mod preset;

pub use config::VariantConfig;
pub use calculator::{InfusionCalculator, MetricLine, parse_decimal, stability_index};
pub use session::{InfusionSession, PacingPhase};
pub use report::{report_id, save_report, save_report_json, load_report_json, ReportError};
pub use preset::{Preset, ParameterOverrides, PresetError};

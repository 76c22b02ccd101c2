//! Report files for the shell's share action
//!
//! A report is the share text of one result, written under a content-derived id.

use std::fs;
use std::path::{Path, PathBuf};
use sha2::{Digest, Sha256};
use thiserror::Error;
use crate::core::calculator::InfusionCalculator;
use crate::types::{DisplayZone, ResultRecord};

/// Failure while writing or reading a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("report serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Get code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "R101_REPORT_STORAGE_ERROR",
            Self::Serialize(_) => "R102_REPORT_SERIALIZE_ERROR",
        }
    }
}

/// `infusion_<variant>_<YYYYmmdd_HHMMSS>_<first 4 bytes of sha256(share text)>`
///
/// Hashes the UTC rendering so the id does not depend on the machine's zone.
pub fn report_id(result: &ResultRecord) -> String {
    let text = InfusionCalculator::new(result.variant)
        .with_zone(DisplayZone::Utc)
        .render_share_text(result);
    let digest = sha256(text.as_bytes());
    format!(
        "infusion_{}_{}_{:08x}",
        result.variant.code(),
        result.timestamp.format("%Y%m%d_%H%M%S"),
        u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
    )
}

/// Write the share text, timestamps rendered in `zone`, to `<dir>/<id>.txt`
pub fn save_report(
    result: &ResultRecord,
    dir: impl AsRef<Path>,
    zone: DisplayZone,
) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let text = InfusionCalculator::new(result.variant)
        .with_zone(zone)
        .render_share_text(result);
    let path = dir.join(format!("{}.txt", report_id(result)));
    fs::write(&path, text)?;

    log::info!("report saved: {}", path.display());
    Ok(path)
}

/// Write the record as JSON to `<dir>/<id>.json` and return the path
pub fn save_report_json(result: &ResultRecord, dir: impl AsRef<Path>) -> Result<PathBuf, ReportError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(result)?;
    let path = dir.join(format!("{}.json", report_id(result)));
    fs::write(&path, json)?;

    log::info!("report saved: {}", path.display());
    Ok(path)
}

/// Load a record written by `save_report_json`
pub fn load_report_json(path: impl AsRef<Path>) -> Result<ResultRecord, ReportError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ParameterSet, Variant};
    use chrono::{TimeZone, Utc};

    fn make_result(a: &str) -> ResultRecord {
        let mut params = ParameterSet::defaults_for(Variant::Cryo);
        params.factor_a = a.to_string();
        params.factor_b = "5".to_string();
        InfusionCalculator::new(Variant::Cryo)
            .compute_at(&params, Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 5).unwrap())
    }

    #[test]
    fn test_report_id_shape() {
        let id = report_id(&make_result("10"));
        assert!(id.starts_with("infusion_cryo_20261019_080005_"), "got {}", id);
        assert_eq!(id.len(), "infusion_cryo_20261019_080005_".len() + 8);
    }

    #[test]
    fn test_report_id_follows_content() {
        assert_eq!(report_id(&make_result("10")), report_id(&make_result("10")));
        assert_ne!(report_id(&make_result("10")), report_id(&make_result("11")));
    }

    #[test]
    fn test_error_codes() {
        let err = ReportError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert_eq!(err.code(), "R101_REPORT_STORAGE_ERROR");
    }

    #[test]
    fn test_saved_text_uses_zone_but_id_does_not() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = make_result("10");
        let eastern = chrono::FixedOffset::west_opt(4 * 3600).unwrap();

        let path = save_report(&result, dir.path(), DisplayZone::Offset(eastern)).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert!(text.ends_with("Generated on 10/19/2026, 4:00 AM"), "got {}", text);
        assert!(path.ends_with(format!("{}.txt", report_id(&result))));
    }
}

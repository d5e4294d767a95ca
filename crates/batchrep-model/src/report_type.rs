//! Closed set of supported report types.

use std::fmt;

/// Report type tag, keyed by the archive table the batch run lands in.
///
/// Adding a device type means adding a variant here plus its cleaner and
/// layout, and registering the pair in `batchrep-report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportType {
    /// 提取罐 (extraction tank), archive table `T_TQ_Batch_Archive`.
    ExtractionTank,
    /// 双效浓缩器 (double-effect concentrator), archive table `T_SX_Batch_Archive`.
    Concentrator,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::ExtractionTank, ReportType::Concentrator];

    /// The archive-table identifier used as the registry key.
    pub const fn archive_key(self) -> &'static str {
        match self {
            ReportType::ExtractionTank => "T_TQ_Batch_Archive",
            ReportType::Concentrator => "T_SX_Batch_Archive",
        }
    }

    /// Device-type label used in error messages and the CLI listing.
    pub const fn label(self) -> &'static str {
        match self {
            ReportType::ExtractionTank => "提取罐",
            ReportType::Concentrator => "双效浓缩器",
        }
    }

    pub fn from_archive_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|report_type| report_type.archive_key() == key)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.archive_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_keys_round_trip() {
        for report_type in ReportType::ALL {
            assert_eq!(
                ReportType::from_archive_key(report_type.archive_key()),
                Some(report_type)
            );
        }
    }

    #[test]
    fn unknown_key_is_none() {
        assert_eq!(ReportType::from_archive_key("T_Unknown_Archive"), None);
    }
}

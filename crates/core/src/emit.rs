//! Output file paths and header comments.
//!
//! Both dialects prefix each set's objects with a header comment, written
//! once per file. The wording differs between a filter-driven (applied)
//! set and one scoped to a single host.

/// File extension used by legacy config files.
pub const LEGACY_FILE_EXTENSION: &str = ".cfg";

/// Output dialect a compile run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Zone-partitioned hierarchical config with dynamic apply rules.
    Modern,
    /// Flat per-zone files with statically bound hosts.
    Legacy,
}

/// Path of the modern servicesets file for a zone.
pub fn modern_config_path(zone: &str) -> String {
    format!("zones.d/{zone}/servicesets")
}

/// Path (without extension) of the legacy servicesets file for a zone.
pub fn legacy_config_path(zone: &str) -> String {
    format!("director/{zone}/servicesets")
}

/// The per-set header comment for a dialect.
pub fn header_comment(dialect: Dialect, filter_driven: bool, set_name: &str) -> String {
    match dialect {
        Dialect::Modern => format!("/** Service Set '{set_name}' **/\n\n"),
        Dialect::Legacy if filter_driven => format!("## applied Service Set '{set_name}'\n\n"),
        Dialect::Legacy => format!("## Service Set '{set_name}' on this host\n\n"),
    }
}

//! Canonical catalog fixtures shared by the harnesses.

use super::builders::CatalogBuilder;
use scn_core::{Catalog, SearchOverlay};

/// The standard two-domain catalog used by most filter tests.
///
/// ```text
/// Access Control
///   Identity Management
///     Multi-Factor Authentication  "Require a second factor."
///       TOTP
///       Hardware Keys
/// Infrastructure Security
///   Cloud Configuration
///     Network Segmentation  "Split workloads into zones."
///       Networking
///       Storage
/// ```
pub fn standard_catalog() -> (Catalog, SearchOverlay) {
    CatalogBuilder::new()
        .domain("Access Control")
        .subdomain("Identity Management")
        .control("Multi-Factor Authentication", Some("Require a second factor."))
        .subcontrol("TOTP")
        .subcontrol("Hardware Keys")
        .domain("Infrastructure Security")
        .subdomain("Cloud Configuration")
        .control("Network Segmentation", Some("Split workloads into zones."))
        .subcontrol("Networking")
        .subcontrol("Storage")
        .attach()
}

/// A catalog whose titles exercise the HTML-sensitive characters.
pub fn markup_heavy_catalog() -> (Catalog, SearchOverlay) {
    CatalogBuilder::new()
        .domain("Data & Privacy")
        .subdomain("Retention <Policies>")
        .control("Erasure \"Right\"", Some("Honour user's erasure requests & appeals."))
        .subcontrol("Erasure of <PII> & 'backups'")
        .attach()
}

//! Constraint resolution for requirements manifests: dotted-numeric version
//! ordering and conjunctive (ANDed) constraint matching with per-constraint
//! violation reporting.

pub mod matcher;
pub mod version;

//! Conjunctive constraint evaluation and violation reporting.

use std::fmt;

use reqfile_core::requirement::{CompareOp, Constraint, Requirement};

use crate::version::PackageVersion;

/// Check a single constraint against a candidate version.
pub fn matches(constraint: &Constraint, candidate: &PackageVersion) -> bool {
    let bound = PackageVersion::parse(&constraint.version);
    let ok = match constraint.op {
        CompareOp::Eq => *candidate == bound,
        CompareOp::Ne => *candidate != bound,
        CompareOp::Ge => *candidate >= bound,
        CompareOp::Gt => *candidate > bound,
        CompareOp::Le => *candidate <= bound,
        CompareOp::Lt => *candidate < bound,
    };
    tracing::trace!(constraint = %constraint, candidate = %candidate, ok, "constraint check");
    ok
}

/// Check all of a requirement's constraints against a candidate version.
///
/// Constraints AND together; an unconstrained requirement accepts everything.
pub fn is_satisfied_by(requirement: &Requirement, candidate: &PackageVersion) -> bool {
    requirement.constraints.iter().all(|c| matches(c, candidate))
}

/// Evaluate a candidate version against a requirement, recording every
/// violated constraint for diagnostics.
pub fn evaluate(requirement: &Requirement, candidate: &PackageVersion) -> MatchReport {
    let violations = requirement
        .constraints
        .iter()
        .filter(|c| !matches(c, candidate))
        .cloned()
        .collect();
    MatchReport {
        package: requirement.name.clone(),
        candidate: candidate.to_string(),
        checked: requirement.constraints.len(),
        violations,
    }
}

/// The outcome of evaluating one candidate version against one requirement.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub package: String,
    pub candidate: String,
    pub checked: usize,
    pub violations: Vec<Constraint>,
}

impl MatchReport {
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return write!(
                f,
                "{} {} satisfies all {} constraint(s)",
                self.package, self.candidate, self.checked
            );
        }
        writeln!(
            f,
            "{} {} violates {} of {} constraint(s):",
            self.package,
            self.candidate,
            self.violations.len(),
            self.checked
        )?;
        for c in &self.violations {
            writeln!(f, "  requires {c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(line: &str) -> Requirement {
        Requirement::parse(line).unwrap()
    }

    fn v(s: &str) -> PackageVersion {
        PackageVersion::parse(s)
    }

    #[test]
    fn conjunctive_bounds() {
        let r = req("pbr>=0.6,!=0.7,<1.0");
        assert!(is_satisfied_by(&r, &v("0.6")));
        assert!(is_satisfied_by(&r, &v("0.9")));
        assert!(!is_satisfied_by(&r, &v("0.7")));
        assert!(!is_satisfied_by(&r, &v("1.0")));
    }

    #[test]
    fn lower_bound_only() {
        let r = req("six>=1.7.0");
        assert!(is_satisfied_by(&r, &v("1.7.0")));
        assert!(is_satisfied_by(&r, &v("2.0.0")));
        assert!(!is_satisfied_by(&r, &v("1.6.9")));
    }

    #[test]
    fn unconstrained_accepts_everything() {
        let r = req("suds-jurko");
        assert!(is_satisfied_by(&r, &v("0.6")));
        assert!(is_satisfied_by(&r, &v("1.0.dev1")));
    }

    #[test]
    fn exact_pin() {
        let r = req("requests==2.2.1");
        assert!(is_satisfied_by(&r, &v("2.2.1")));
        assert!(!is_satisfied_by(&r, &v("2.2.2")));
    }

    #[test]
    fn exclusion_folds_trailing_zeros() {
        let r = req("pbr!=0.7");
        assert!(!is_satisfied_by(&r, &v("0.7.0")));
        assert!(is_satisfied_by(&r, &v("0.7.1")));
    }

    #[test]
    fn report_lists_each_violation() {
        let r = req("pbr>=0.6,!=0.7,<1.0");
        let report = evaluate(&r, &v("1.2"));
        assert!(!report.is_satisfied());
        assert_eq!(report.checked, 3);
        assert_eq!(report.violations.len(), 1);
        let text = report.to_string();
        assert!(text.contains("pbr 1.2 violates 1 of 3"), "got: {text}");
        assert!(text.contains("requires <1.0"), "got: {text}");
    }

    #[test]
    fn report_on_satisfied_candidate() {
        let r = req("six>=1.7.0");
        let report = evaluate(&r, &v("1.9.0"));
        assert!(report.is_satisfied());
        assert_eq!(
            report.to_string(),
            "six 1.9.0 satisfies all 1 constraint(s)"
        );
    }
}

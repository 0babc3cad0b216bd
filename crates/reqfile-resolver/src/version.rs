//! Package version parsing and comparison.
//!
//! Requirement constraints compare versions by dotted-numeric precedence, not
//! lexicographically:
//! - Tokens are split on `.`, `-`, `_`, and at letter/digit boundaries
//! - Numeric tokens compare as numbers (`1.10` > `1.9`)
//! - Pre/post-release qualifiers order as
//!   `dev` < `a` < `b` < `rc` < `""` (release) < `post`
//! - Trailing zero segments are insignificant (`1.0` equals `1.0.0`)

use std::cmp::Ordering;
use std::fmt;

/// A parsed package version with comparable segments.
#[derive(Debug, Clone)]
pub struct PackageVersion {
    pub original: String,
    segments: Vec<Segment>,
}

impl PartialEq for PackageVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageVersion {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

/// Well-known release qualifiers with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Dev,
    Alpha,
    Beta,
    Rc,
    Release,
    Post,
}

impl PackageVersion {
    pub fn parse(version: &str) -> Self {
        let segments = parse_segments(version);
        Self {
            original: version.to_string(),
            segments,
        }
    }

    pub fn is_prerelease(&self) -> bool {
        self.segments.iter().any(|s| {
            matches!(
                s,
                Segment::Qualifier(QualifierKind::Dev)
                    | Segment::Qualifier(QualifierKind::Alpha)
                    | Segment::Qualifier(QualifierKind::Beta)
                    | Segment::Qualifier(QualifierKind::Rc)
            )
        })
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for PackageVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let a = self.segments.get(i);
            let b = other.segments.get(i);
            let ord = compare_segments(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for PackageVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(s) if s.is_empty() => Ordering::Equal,
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Qualifier(a), Segment::Qualifier(b)) => a.cmp(b),
        // A zero release segment equals the implied release qualifier, so
        // `1.0.0` still sorts below `1.0.post1`.
        (Segment::Numeric(0), Segment::Qualifier(q)) => QualifierKind::Release.cmp(q),
        (Segment::Qualifier(q), Segment::Numeric(0)) => q.cmp(&QualifierKind::Release),
        (Segment::Numeric(_), Segment::Qualifier(_)) => Ordering::Greater,
        (Segment::Qualifier(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Numeric(_), Segment::Text(_)) => Ordering::Greater,
        (Segment::Text(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Text(a), Segment::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Segment::Qualifier(q), Segment::Text(_)) => {
            if *q >= QualifierKind::Release {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Qualifier(q)) => {
            if *q >= QualifierKind::Release {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

fn parse_segments(version: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in version.chars() {
        let boundary = matches!(ch, '.' | '-' | '_')
            || current
                .chars()
                .last()
                .is_some_and(|prev| prev.is_ascii_digit() != ch.is_ascii_digit());
        if boundary {
            if !current.is_empty() {
                segments.push(classify(&current));
                current.clear();
            }
        }
        if !matches!(ch, '.' | '-' | '_') {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        segments.push(classify(&current));
    }

    segments
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token.to_lowercase().as_str() {
        "dev" => Segment::Qualifier(QualifierKind::Dev),
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "rc" | "c" | "pre" | "preview" => Segment::Qualifier(QualifierKind::Rc),
        "" | "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "post" | "r" | "rev" => Segment::Qualifier(QualifierKind::Post),
        _ => Segment::Text(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_ordering() {
        let v1 = PackageVersion::parse("1.0");
        let v2 = PackageVersion::parse("2.0");
        assert!(v1 < v2);
    }

    #[test]
    fn three_part_ordering() {
        let v1 = PackageVersion::parse("1.6.9");
        let v2 = PackageVersion::parse("1.7.0");
        let v3 = PackageVersion::parse("2.0.0");
        assert!(v1 < v2);
        assert!(v2 < v3);
    }

    #[test]
    fn numeric_not_lexicographic() {
        let v1 = PackageVersion::parse("1.9");
        let v2 = PackageVersion::parse("1.10");
        assert!(v1 < v2);
    }

    #[test]
    fn trailing_zeros_equal() {
        let v1 = PackageVersion::parse("1.0");
        let v2 = PackageVersion::parse("1.0.0");
        assert_eq!(v1, v2);
    }

    #[test]
    fn prerelease_ordering() {
        let dev = PackageVersion::parse("1.0.dev1");
        let alpha = PackageVersion::parse("1.0a1");
        let beta = PackageVersion::parse("1.0b1");
        let rc = PackageVersion::parse("1.0rc1");
        let release = PackageVersion::parse("1.0");
        let post = PackageVersion::parse("1.0.post1");

        assert!(dev < alpha);
        assert!(alpha < beta);
        assert!(beta < rc);
        assert!(rc < release);
        assert!(release < post);
    }

    #[test]
    fn post_release_above_trailing_zero() {
        let release = PackageVersion::parse("1.0.0");
        let post = PackageVersion::parse("1.0.post1");
        assert!(release < post);
    }

    #[test]
    fn mixed_token_splits_at_digit_boundary() {
        let v1 = PackageVersion::parse("0.9b1");
        let v2 = PackageVersion::parse("0.9b2");
        let rel = PackageVersion::parse("0.9");
        assert!(v1 < v2);
        assert!(v2 < rel);
    }

    #[test]
    fn unknown_text_below_release() {
        let tagged = PackageVersion::parse("1.0.0-nightly");
        let release = PackageVersion::parse("1.0.0");
        assert!(tagged < release);
    }

    #[test]
    fn is_prerelease() {
        assert!(PackageVersion::parse("1.0rc2").is_prerelease());
        assert!(PackageVersion::parse("2.0.dev3").is_prerelease());
        assert!(!PackageVersion::parse("1.0").is_prerelease());
        assert!(!PackageVersion::parse("1.0.post1").is_prerelease());
    }

    #[test]
    fn display() {
        let v = PackageVersion::parse("1.7.0");
        assert_eq!(v.to_string(), "1.7.0");
    }
}

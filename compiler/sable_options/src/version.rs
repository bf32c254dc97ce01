//! Language versions.

use std::fmt;
use std::str::FromStr;

/// A requested or resolved language version.
///
/// `Default`, `Latest` and `LatestMajor` are aliases that resolve to
/// [`LanguageVersion::LATEST_STABLE`]; `Other` keeps an unrecognised raw
/// value so it can be reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LanguageVersion {
    CSharp1,
    CSharp2,
    CSharp3,
    CSharp4,
    CSharp5,
    CSharp6,
    CSharp7,
    CSharp7_1,
    CSharp7_2,
    CSharp7_3,
    CSharp8,
    CSharp9,
    CSharp10,
    CSharp11,
    CSharp12,
    CSharp13,
    Preview,
    Default,
    Latest,
    LatestMajor,
    Other(i32),
}

const KNOWN: &[LanguageVersion] = &[
    LanguageVersion::CSharp1,
    LanguageVersion::CSharp2,
    LanguageVersion::CSharp3,
    LanguageVersion::CSharp4,
    LanguageVersion::CSharp5,
    LanguageVersion::CSharp6,
    LanguageVersion::CSharp7,
    LanguageVersion::CSharp7_1,
    LanguageVersion::CSharp7_2,
    LanguageVersion::CSharp7_3,
    LanguageVersion::CSharp8,
    LanguageVersion::CSharp9,
    LanguageVersion::CSharp10,
    LanguageVersion::CSharp11,
    LanguageVersion::CSharp12,
    LanguageVersion::CSharp13,
    LanguageVersion::Preview,
    LanguageVersion::Default,
    LanguageVersion::Latest,
    LanguageVersion::LatestMajor,
];

impl LanguageVersion {
    /// What `Default`, `Latest` and `LatestMajor` resolve to.
    pub const LATEST_STABLE: LanguageVersion = LanguageVersion::CSharp13;

    /// The raw numeric value (`7.3` is `703`, `8.0` is `800`).
    pub const fn raw(self) -> i32 {
        match self {
            LanguageVersion::CSharp1 => 1,
            LanguageVersion::CSharp2 => 2,
            LanguageVersion::CSharp3 => 3,
            LanguageVersion::CSharp4 => 4,
            LanguageVersion::CSharp5 => 5,
            LanguageVersion::CSharp6 => 6,
            LanguageVersion::CSharp7 => 7,
            LanguageVersion::CSharp7_1 => 701,
            LanguageVersion::CSharp7_2 => 702,
            LanguageVersion::CSharp7_3 => 703,
            LanguageVersion::CSharp8 => 800,
            LanguageVersion::CSharp9 => 900,
            LanguageVersion::CSharp10 => 1000,
            LanguageVersion::CSharp11 => 1100,
            LanguageVersion::CSharp12 => 1200,
            LanguageVersion::CSharp13 => 1300,
            LanguageVersion::Preview => i32::MAX - 1,
            LanguageVersion::Default => 0,
            LanguageVersion::Latest => i32::MAX,
            LanguageVersion::LatestMajor => i32::MAX - 2,
            LanguageVersion::Other(raw) => raw,
        }
    }

    /// Inverse of [`LanguageVersion::raw`]; unknown values become `Other`.
    pub fn from_raw(raw: i32) -> Self {
        KNOWN
            .iter()
            .copied()
            .find(|v| v.raw() == raw)
            .unwrap_or(LanguageVersion::Other(raw))
    }

    pub fn is_valid(self) -> bool {
        !matches!(self, LanguageVersion::Other(_))
    }

    /// Resolve alias versions to a concrete version.
    #[must_use]
    pub fn effective(self) -> Self {
        match self {
            LanguageVersion::Default | LanguageVersion::Latest | LanguageVersion::LatestMajor => {
                Self::LATEST_STABLE
            }
            other => other,
        }
    }

    /// Does this (resolved) version include everything `required` introduced?
    pub fn supports(self, required: LanguageVersion) -> bool {
        self.effective().raw() >= required.effective().raw()
    }

    /// Text used in messages and on the command line (`7.3`, `preview`).
    pub fn display(self) -> String {
        match self {
            LanguageVersion::CSharp1 => "1".into(),
            LanguageVersion::CSharp2 => "2".into(),
            LanguageVersion::CSharp3 => "3".into(),
            LanguageVersion::CSharp4 => "4".into(),
            LanguageVersion::CSharp5 => "5".into(),
            LanguageVersion::CSharp6 => "6".into(),
            LanguageVersion::CSharp7 => "7.0".into(),
            LanguageVersion::CSharp7_1 => "7.1".into(),
            LanguageVersion::CSharp7_2 => "7.2".into(),
            LanguageVersion::CSharp7_3 => "7.3".into(),
            LanguageVersion::CSharp8 => "8.0".into(),
            LanguageVersion::CSharp9 => "9.0".into(),
            LanguageVersion::CSharp10 => "10.0".into(),
            LanguageVersion::CSharp11 => "11.0".into(),
            LanguageVersion::CSharp12 => "12.0".into(),
            LanguageVersion::CSharp13 => "13.0".into(),
            LanguageVersion::Preview => "preview".into(),
            LanguageVersion::Default => "default".into(),
            LanguageVersion::Latest => "latest".into(),
            LanguageVersion::LatestMajor => "latestmajor".into(),
            LanguageVersion::Other(raw) => raw.to_string(),
        }
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// A language version string that names no known version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language version '{0}'")]
pub struct UnknownLanguageVersion(pub String);

impl FromStr for LanguageVersion {
    type Err = UnknownLanguageVersion;

    /// Accepts `7`, `7.0`, `7.3` and the alias names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let found = KNOWN.iter().copied().find(|v| {
            let display = v.display();
            display == lower || display.strip_suffix(".0") == Some(lower.as_str())
        });
        found.ok_or_else(|| UnknownLanguageVersion(s.to_string()))
    }
}

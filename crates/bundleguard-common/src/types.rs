//! Types shared between the config schema and the pipeline steps.

use serde::{Deserialize, Serialize};

/// Which replacement table the sanitizer applies.
///
/// `EscapeUnicode` rewrites a forbidden pattern into JavaScript `\uXXXX`
/// escapes, which string literals decode back at runtime. `MangleAscii`
/// alters the text itself (`hxxp://`, `GITHUB-WORKSPACE`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SanitizeMode {
    #[default]
    EscapeUnicode,
    MangleAscii,
}

impl SanitizeMode {
    pub const ALL: [SanitizeMode; 2] = [SanitizeMode::EscapeUnicode, SanitizeMode::MangleAscii];

    pub fn as_str(self) -> &'static str {
        match self {
            SanitizeMode::EscapeUnicode => "escape-unicode",
            SanitizeMode::MangleAscii => "mangle-ascii",
        }
    }
}

impl std::fmt::Display for SanitizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SanitizeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "escape-unicode" => Ok(SanitizeMode::EscapeUnicode),
            "mangle-ascii" => Ok(SanitizeMode::MangleAscii),
            other => Err(format!(
                "unknown sanitize mode '{other}' (expected escape-unicode or mangle-ascii)"
            )),
        }
    }
}

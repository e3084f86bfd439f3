//! Comment dialects
//!
//! A dialect is the set of markers that start a comment in some family of
//! languages. Which dialect applies to a file is decided by its extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Comment syntax family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `//` line comments and `/* */` blocks (C, Rust, Go, Java, JS...)
    CStyle,
    /// `#` line comments (Python, shell, Ruby, YAML...)
    Hash,
    /// `--` line comments (SQL, Lua, Haskell)
    DoubleDash,
    /// `;` line comments (Lisps, assembly)
    Semicolon,
    /// `%` line comments (TeX, Erlang, MATLAB)
    Percent,
}

impl Dialect {
    /// Regex fragment matching the comment marker(s) of this dialect
    ///
    /// For C-style comments this includes the leading `*` of a block
    /// comment continuation line.
    #[must_use]
    pub const fn marker_pattern(self) -> &'static str {
        match self {
            Self::CStyle => r"/{2,}!?|/\*+!?|\*",
            Self::Hash => r"#+",
            Self::DoubleDash => r"-{2,}",
            Self::Semicolon => r";+",
            Self::Percent => r"%+",
        }
    }

    /// Pick the dialect for a file from its extension (or well-known name)
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        match &*name {
            "Makefile" | "Dockerfile" | "Rakefile" | "Gemfile" => return Some(Self::Hash),
            _ => {},
        }

        let ext = path.extension()?.to_string_lossy().to_lowercase();
        Self::for_extension(&ext)
    }

    /// Pick the dialect for a bare file extension (without the dot)
    #[must_use]
    pub fn for_extension(ext: &str) -> Option<Self> {
        let dialect = match ext {
            "rs" | "go" | "c" | "h" | "cc" | "cpp" | "hpp" | "java" | "js" | "jsx" | "ts"
            | "tsx" | "kt" | "kts" | "swift" | "scala" | "cs" | "php" | "groovy" | "dart"
            | "proto" => Self::CStyle,
            "py" | "sh" | "bash" | "zsh" | "rb" | "pl" | "r" | "yaml" | "yml" | "toml"
            | "cmake" | "nix" | "tf" => Self::Hash,
            "sql" | "lua" | "hs" | "elm" | "ada" => Self::DoubleDash,
            "lisp" | "clj" | "cljs" | "el" | "scm" | "asm" => Self::Semicolon,
            "tex" | "erl" | "hrl" | "m" => Self::Percent,
            _ => return None,
        };
        Some(dialect)
    }
}

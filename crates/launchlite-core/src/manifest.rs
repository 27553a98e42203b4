//! Dependency manifest (`requirements.txt`) parsing.
//!
//! Parsing here is only what the launcher needs: the line list to hand to
//! pip, a package name per line for diagnostics, and a stable digest to key
//! the install stamp. Version resolution stays with pip.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// One requirement line from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Package name (the part before any version constraint or extras)
    pub name: String,
    /// Full requirement spec as written (e.g. `requests>=2.31`)
    pub spec: String,
}

/// Parsed manifest: requirement list plus the digest of the normalized content.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    pub requirements: Vec<Requirement>,
    /// SHA-256 over the normalized requirement specs, hex-encoded
    pub digest: String,
}

impl Manifest {
    /// Load and parse a manifest file. `-r <file>` includes are followed one
    /// level, resolved relative to the including file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Read manifest {}", path.display()))?;
        let mut requirements = parse_requirements(&content);

        for include in parse_includes(&content) {
            let include_path = path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(&include);
            let included = std::fs::read_to_string(&include_path)
                .with_context(|| format!("Read included manifest {}", include_path.display()))?;
            requirements.extend(parse_requirements(&included));
        }

        let digest = digest_of(&requirements);
        Ok(Self {
            requirements,
            digest,
        })
    }
}

/// Parse requirement lines: blanks and comments skipped, inline comments
/// stripped, `-r`/`-` option lines excluded.
pub fn parse_requirements(content: &str) -> Vec<Requirement> {
    content
        .lines()
        .filter_map(|line| {
            let line = strip_inline_comment(line.trim());
            if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
                return None;
            }
            Some(Requirement {
                name: package_name(line).to_string(),
                spec: line.to_string(),
            })
        })
        .collect()
}

/// Collect `-r <file>` include targets.
fn parse_includes(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let line = strip_inline_comment(line.trim());
            line.strip_prefix("-r ")
                .or_else(|| line.strip_prefix("--requirement "))
                .map(|rest| rest.trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Strip a ` #` inline comment. Pip treats an unescaped `#` preceded by
/// whitespace (or at line start) as a comment.
fn strip_inline_comment(line: &str) -> &str {
    match line.find(" #") {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// Extract the package name from a requirement spec: everything up to the
/// first extras bracket, version operator, or environment-marker separator.
pub fn package_name(spec: &str) -> &str {
    let end = spec
        .find(|c: char| matches!(c, '[' | '=' | '>' | '<' | '~' | '!' | ';' | ' '))
        .unwrap_or(spec.len());
    spec[..end].trim()
}

/// Stable digest of a requirement list (order-sensitive, whitespace-normalized).
pub fn digest_of(requirements: &[Requirement]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    for req in requirements {
        hasher.update(req.spec.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let reqs = parse_requirements(
            "# deps for sojbot\n\nrequests>=2.31\n  \ndiscord.py==2.3.2  # pinned\n",
        );
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].spec, "requests>=2.31");
        assert_eq!(reqs[0].name, "requests");
        assert_eq!(reqs[1].spec, "discord.py==2.3.2");
        assert_eq!(reqs[1].name, "discord.py");
    }

    #[test]
    fn test_parse_excludes_option_lines() {
        let reqs = parse_requirements("-r base.txt\n--no-binary :all:\ngevent\n");
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].name, "gevent");
    }

    #[test]
    fn test_package_name_extraction() {
        assert_eq!(package_name("requests"), "requests");
        assert_eq!(package_name("requests>=2.31"), "requests");
        assert_eq!(package_name("uvicorn[standard]==0.30"), "uvicorn");
        assert_eq!(package_name("protobuf~=4.25"), "protobuf");
        assert_eq!(package_name("tomli; python_version < '3.11'"), "tomli");
    }

    #[test]
    fn test_digest_stable_under_trailing_whitespace() {
        let a = parse_requirements("requests>=2.31\ngevent\n");
        let b = parse_requirements("requests>=2.31   \n\ngevent  # ws client\n");
        assert_eq!(digest_of(&a), digest_of(&b));
    }

    #[test]
    fn test_digest_changes_with_content() {
        let a = parse_requirements("requests>=2.31\n");
        let b = parse_requirements("requests>=2.32\n");
        assert_ne!(digest_of(&a), digest_of(&b));
    }

    #[test]
    fn test_load_follows_includes_one_level() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("base.txt"), "gevent\n").expect("write base");
        std::fs::write(
            dir.path().join("requirements.txt"),
            "-r base.txt\nrequests>=2.31\n",
        )
        .expect("write manifest");

        let manifest = Manifest::load(&dir.path().join("requirements.txt")).expect("load");
        let names: Vec<_> = manifest.requirements.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["requests", "gevent"]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Manifest::load(&dir.path().join("nope.txt")).is_err());
    }
}

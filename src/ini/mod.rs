//! Minimal reader for INI-style documents.
//!
//! Supported syntax:
//! - `[name]` starts (or reopens) a section. Names are trimmed and
//!   case-sensitive.
//! - `key = value` assigns within the current section. The line is split
//!   at the first `=`; key and value are trimmed, nothing else is done to
//!   the value.
//! - Blank lines and lines starting with `#` or `;` are skipped.
//!
//! Keys appearing before the first header land in the unnamed section `""`.
//! A repeated key overwrites the earlier value.

mod error;

pub use error::IniError;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key/value pairs of one `[section]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    values: BTreeMap<String, String>,
}

impl IniSection {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// A parsed INI document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniFile {
    sections: BTreeMap<String, IniSection>,
}

impl IniFile {
    /// Read and parse the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IniError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse an in-memory document.
    pub fn parse(text: &str) -> Result<Self, IniError> {
        let mut file = IniFile::default();
        let mut current = String::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(IniError::Syntax {
                        line: line_no,
                        message: format!("unterminated section header `{line}`"),
                    });
                };
                current = name.trim().to_string();
                file.section_mut(&current);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: format!("expected `key = value`, found `{line}`"),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(IniError::Syntax {
                    line: line_no,
                    message: "empty key".to_string(),
                });
            }
            file.section_mut(&current)
                .values
                .insert(key.to_string(), value.trim().to_string());
        }

        Ok(file)
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    fn section_mut(&mut self, name: &str) -> &mut IniSection {
        self.sections.entry(name.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_sections_and_values() {
        let doc = "\
# generated by the installer
[locations]
bin = /opt/app/bin
agents=/opt/app/agents

[other]
; comment
key = value with spaces  
";
        let ini = IniFile::parse(doc).unwrap();
        let loc = ini.section("locations").unwrap();
        assert_eq!(loc.get("bin"), Some("/opt/app/bin"));
        assert_eq!(loc.get("agents"), Some("/opt/app/agents"));
        assert_eq!(loc.get("key"), None);
        assert_eq!(
            ini.section("other").unwrap().get("key"),
            Some("value with spaces")
        );
        assert!(ini.section("missing").is_none());
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let ini = IniFile::parse("[s]\nopts = a=b=c\nempty =\n").unwrap();
        let s = ini.section("s").unwrap();
        assert_eq!(s.get("opts"), Some("a=b=c"));
        assert_eq!(s.get("empty"), Some(""));
    }

    #[test]
    fn repeated_sections_merge_and_last_key_wins() {
        let ini = IniFile::parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nx = 3\nz = 4\n").unwrap();
        let a = ini.section("a").unwrap();
        assert_eq!(a.get("x"), Some("3"));
        assert_eq!(a.get("z"), Some("4"));
        assert_eq!(a.get("y"), None);
    }

    #[test]
    fn keys_before_header_go_to_unnamed_section() {
        let ini = IniFile::parse("top = 1\n[locations]\nbin = /b\n").unwrap();
        assert_eq!(ini.section("").unwrap().get("top"), Some("1"));
        assert_eq!(ini.section("locations").unwrap().get("top"), None);
    }

    #[test]
    fn section_names_are_case_sensitive() {
        let ini = IniFile::parse("[Locations]\nbin = /b\n").unwrap();
        assert!(ini.section("locations").is_none());
        assert!(ini.has_section("Locations"));
    }

    #[test]
    fn empty_section_is_recorded() {
        let ini = IniFile::parse("[locations]\n").unwrap();
        assert!(ini.has_section("locations"));
        assert_eq!(ini.section("locations"), Some(&IniSection::default()));
    }

    #[test]
    fn line_without_equals_is_syntax_error() {
        let err = IniFile::parse("[locations]\n\nbin /usr/bin\n").unwrap_err();
        assert!(matches!(err, IniError::Syntax { line: 3, .. }), "{err:?}");
    }

    #[test]
    fn unterminated_header_is_syntax_error() {
        let err = IniFile::parse("[locations\nbin = /b\n").unwrap_err();
        assert!(matches!(err, IniError::Syntax { line: 1, .. }), "{err:?}");
    }

    #[test]
    fn empty_key_is_syntax_error() {
        let err = IniFile::parse("[s]\n = value\n").unwrap_err();
        assert!(matches!(err, IniError::Syntax { line: 2, .. }), "{err:?}");
    }

    #[test]
    fn load_reads_from_disk() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("locations.ini");
        fs::write(&path, "[locations]\ndoc = /d\n").unwrap();
        let ini = IniFile::load(&path).unwrap();
        assert_eq!(ini.section("locations").unwrap().get("doc"), Some("/d"));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("absent.ini");
        let err = IniFile::load(&path).unwrap_err();
        match err {
            IniError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

//! Resolution of installed (or in-development) component locations.
//!
//! A [`Locator`] is built once from either a locations file or a root
//! directory and is read-only afterwards:
//!
//! - If the input is a regular file it is parsed as an INI document and
//!   every key of its `[locations]` section is taken verbatim.
//! - Otherwise the input is treated as a root directory. When the root holds
//!   both `Rakefile` and `DEVELOPERS.TXT` it is a source checkout and all
//!   paths hang off it; any other root (including one that does not exist)
//!   resolves to the fixed natively packaged locations.
//!
//! Nothing here checks that a resolved path exists.

mod error;
pub mod layout;

pub use error::LocatorError;
pub use layout::{is_source_tree, BUILD_MANIFEST, DEVELOPER_NOTES};

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::fs_op::PathType;
use crate::ini::{IniFile, IniSection};

/// Section of the locations file holding the keys below.
pub const LOCATIONS_SECTION: &str = "locations";

pub const KEY_BIN: &str = "bin";
pub const KEY_AGENTS: &str = "agents";
pub const KEY_HELPER_SCRIPTS: &str = "helper_scripts";
pub const KEY_RESOURCES: &str = "resources";
pub const KEY_DOC: &str = "doc";
pub const KEY_RUBYLIB: &str = "rubylib";
pub const KEY_COMPILABLE_SOURCE: &str = "compilable_source";
pub const KEY_HEADERS: &str = "headers";
pub const KEY_APACHE2_MODULE: &str = "apache2_module";

/// Every key a locations file must define, in the order they are read.
pub const REQUIRED_KEYS: [&str; 9] = [
    KEY_BIN,
    KEY_AGENTS,
    KEY_HELPER_SCRIPTS,
    KEY_RESOURCES,
    KEY_DOC,
    KEY_RUBYLIB,
    KEY_COMPILABLE_SOURCE,
    KEY_HEADERS,
    KEY_APACHE2_MODULE,
];

/// Launcher script living in the helper scripts directory.
pub const SPAWN_SERVER_NAME: &str = "passenger-spawn-server";

/// Header namespaces expected under [`Locator::header_dir`]. Not verified.
pub const HEADER_NAMESPACES: [&str; 3] = ["boost", "oxt", "common"];

/// How a [`Locator`] arrived at its paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Read from a locations file.
    Configured { file: PathBuf },
    /// Fixed system-wide install prefixes.
    NativelyPackaged,
    /// Development checkout rooted at `root`.
    SourceTree { root: PathBuf },
}

/// Resolved component locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locator {
    layout: Layout,
    bin_dir: PathBuf,
    agents_dir: PathBuf,
    helper_scripts_dir: PathBuf,
    resources_dir: PathBuf,
    doc_dir: PathBuf,
    library_dir: PathBuf,
    compilable_source_dir: PathBuf,
    header_dir: PathBuf,
    apache2_module: PathBuf,
}

impl Locator {
    /// Resolve from `root_or_file`.
    ///
    /// A regular file is read as a locations file; anything else, including
    /// a path that does not exist, is treated as a root directory. Only the
    /// file branch can fail.
    pub fn new<P: AsRef<Path>>(root_or_file: P) -> Result<Self, LocatorError> {
        let input = root_or_file.as_ref();
        if PathType::of(input).is_regular_file() {
            Self::from_config_file(input)
        } else {
            Ok(Self::from_root(input))
        }
    }

    /// Read all locations from the `[locations]` section of `file`.
    pub fn from_config_file<P: AsRef<Path>>(file: P) -> Result<Self, LocatorError> {
        let file = file.as_ref();
        let ini = IniFile::load(file).map_err(|source| LocatorError::Ini {
            file: file.to_path_buf(),
            source,
        })?;
        Self::from_ini(file, &ini)
    }

    /// Resolve from an already parsed document. `file` is recorded in the
    /// layout and used in error messages only.
    pub fn from_ini<P: AsRef<Path>>(file: P, ini: &IniFile) -> Result<Self, LocatorError> {
        let file = file.as_ref();
        if !ini.has_section(LOCATIONS_SECTION) {
            tracing::debug!(file = %file.display(), "no [{LOCATIONS_SECTION}] section");
        }
        let empty = IniSection::default();
        let section = ini.section(LOCATIONS_SECTION).unwrap_or(&empty);
        let option = |key: &'static str| -> Result<PathBuf, LocatorError> {
            section
                .get(key)
                .map(PathBuf::from)
                .ok_or_else(|| LocatorError::MissingConfigurationOption {
                    key,
                    file: file.to_path_buf(),
                })
        };

        let locator = Locator {
            bin_dir: option(KEY_BIN)?,
            agents_dir: option(KEY_AGENTS)?,
            helper_scripts_dir: option(KEY_HELPER_SCRIPTS)?,
            resources_dir: option(KEY_RESOURCES)?,
            doc_dir: option(KEY_DOC)?,
            library_dir: option(KEY_RUBYLIB)?,
            compilable_source_dir: option(KEY_COMPILABLE_SOURCE)?,
            header_dir: option(KEY_HEADERS)?,
            apache2_module: option(KEY_APACHE2_MODULE)?,
            layout: Layout::Configured {
                file: file.to_path_buf(),
            },
        };
        tracing::debug!(file = %file.display(), "resolved locations from file");
        Ok(locator)
    }

    /// Resolve by directory convention. Never fails.
    pub fn from_root<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        let locator = if is_source_tree(root) {
            layout::source_tree(root)
        } else {
            layout::natively_packaged()
        };
        tracing::debug!(
            root = %root.display(),
            layout = ?locator.layout,
            "resolved locations by convention"
        );
        locator
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_source_tree(&self) -> bool {
        matches!(self.layout, Layout::SourceTree { .. })
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }

    pub fn helper_scripts_dir(&self) -> &Path {
        &self.helper_scripts_dir
    }

    /// Full path of the spawn server launcher script.
    pub fn spawn_server_path(&self) -> PathBuf {
        self.helper_scripts_dir.join(SPAWN_SERVER_NAME)
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    pub fn doc_dir(&self) -> &Path {
        &self.doc_dir
    }

    /// Library sources. Empty for natively packaged installs.
    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    pub fn has_library_dir(&self) -> bool {
        !self.library_dir.as_os_str().is_empty()
    }

    /// Sources for building native extensions: the native support code and
    /// the web-server module.
    pub fn compilable_source_dir(&self) -> &Path {
        &self.compilable_source_dir
    }

    /// Public headers; holds the [`HEADER_NAMESPACES`] subdirectories.
    pub fn header_dir(&self) -> &Path {
        &self.header_dir
    }

    pub fn apache2_module(&self) -> &Path {
        &self.apache2_module
    }

    /// Render the resolved paths as a locations document that
    /// [`Locator::from_ini`] reads back to the same paths.
    ///
    /// The reader trims values and splits on line breaks, so a path with
    /// leading or trailing whitespace, a line break, or non UTF-8 bytes is
    /// refused with [`LocatorError::Unrepresentable`].
    pub fn to_locations_ini(&self) -> Result<String, LocatorError> {
        let entries: [(&'static str, &Path); 9] = [
            (KEY_BIN, &self.bin_dir),
            (KEY_AGENTS, &self.agents_dir),
            (KEY_HELPER_SCRIPTS, &self.helper_scripts_dir),
            (KEY_RESOURCES, &self.resources_dir),
            (KEY_DOC, &self.doc_dir),
            (KEY_RUBYLIB, &self.library_dir),
            (KEY_COMPILABLE_SOURCE, &self.compilable_source_dir),
            (KEY_HEADERS, &self.header_dir),
            (KEY_APACHE2_MODULE, &self.apache2_module),
        ];
        let mut out = format!("[{LOCATIONS_SECTION}]\n");
        for (key, path) in entries {
            let value = ini_value(key, path)?;
            let _ = writeln!(out, "{key} = {value}");
        }
        Ok(out)
    }
}

fn ini_value<'a>(key: &'static str, path: &'a Path) -> Result<&'a str, LocatorError> {
    let unrepresentable = |reason: &'static str| LocatorError::Unrepresentable {
        key,
        path: path.to_path_buf(),
        reason,
    };
    let value = path.to_str().ok_or_else(|| unrepresentable("not valid UTF-8"))?;
    if value.contains(['\n', '\r']) {
        return Err(unrepresentable("contains a line break"));
    }
    if value.trim() != value {
        return Err(unrepresentable("has leading or trailing whitespace"));
    }
    Ok(value)
}

//! The two convention-mode path tables.

use std::path::{Path, PathBuf};

use super::{Layout, Locator};
use crate::fs_op;

/// Build manifest present at the top of a source checkout.
pub const BUILD_MANIFEST: &str = "Rakefile";
/// Developer notes present at the top of a source checkout.
pub const DEVELOPER_NOTES: &str = "DEVELOPERS.TXT";

/// Location of the web-server module relative to a source root.
pub const SOURCE_TREE_MODULE: &str = "ext/apache2/mod_passenger.so";

pub(crate) const PACKAGED_BIN_DIR: &str = "/usr/bin";
pub(crate) const PACKAGED_AGENTS_DIR: &str = "/usr/lib/phusion-passenger/agents";
pub(crate) const PACKAGED_HELPER_SCRIPTS_DIR: &str = "/usr/share/phusion-passenger/helper-scripts";
pub(crate) const PACKAGED_RESOURCES_DIR: &str = "/usr/share/phusion-passenger";
pub(crate) const PACKAGED_DOC_DIR: &str = "/usr/share/doc/phusion-passenger";
pub(crate) const PACKAGED_COMPILABLE_SOURCE_DIR: &str =
    "/usr/share/phusion-passenger/compilable-source";
pub(crate) const PACKAGED_HEADER_DIR: &str = "/usr/include/phusion-passenger";
pub(crate) const PACKAGED_MODULE: &str = "/usr/lib/apache2/modules/mod_passenger.so";

/// An empty root stands for the filesystem root.
fn effective_root(root: &Path) -> &Path {
    if root.as_os_str().is_empty() {
        Path::new("/")
    } else {
        root
    }
}

/// `<root>/<suffix>` by plain concatenation. Relative roots stay relative
/// and a trailing separator on `root` is not doubled.
pub(crate) fn under(root: &Path, suffix: &str) -> PathBuf {
    let root = effective_root(root);
    let mut joined = root.as_os_str().to_owned();
    if !root.as_os_str().as_encoded_bytes().ends_with(b"/") {
        joined.push("/");
    }
    joined.push(suffix);
    PathBuf::from(joined)
}

/// A root is a source tree only when both marker files sit directly in it.
pub fn is_source_tree(root: &Path) -> bool {
    let manifest = fs_op::exists(under(root, BUILD_MANIFEST));
    let notes = fs_op::exists(under(root, DEVELOPER_NOTES));
    tracing::trace!(
        root = %root.display(),
        manifest,
        notes,
        "checked source tree markers"
    );
    manifest && notes
}

/// Fixed OS-standard locations. `root` plays no part in the result.
pub(crate) fn natively_packaged() -> Locator {
    Locator {
        layout: Layout::NativelyPackaged,
        bin_dir: PathBuf::from(PACKAGED_BIN_DIR),
        agents_dir: PathBuf::from(PACKAGED_AGENTS_DIR),
        helper_scripts_dir: PathBuf::from(PACKAGED_HELPER_SCRIPTS_DIR),
        resources_dir: PathBuf::from(PACKAGED_RESOURCES_DIR),
        doc_dir: PathBuf::from(PACKAGED_DOC_DIR),
        library_dir: PathBuf::new(),
        compilable_source_dir: PathBuf::from(PACKAGED_COMPILABLE_SOURCE_DIR),
        header_dir: PathBuf::from(PACKAGED_HEADER_DIR),
        apache2_module: PathBuf::from(PACKAGED_MODULE),
    }
}

/// Locations relative to a development checkout at `root`.
pub(crate) fn source_tree(root: &Path) -> Locator {
    let root = effective_root(root);
    Locator {
        layout: Layout::SourceTree {
            root: root.to_path_buf(),
        },
        bin_dir: under(root, "bin"),
        agents_dir: under(root, "agents"),
        helper_scripts_dir: under(root, "helper-scripts"),
        resources_dir: under(root, "resources"),
        doc_dir: under(root, "doc"),
        library_dir: under(root, "lib"),
        compilable_source_dir: root.to_path_buf(),
        header_dir: under(root, "ext"),
        apache2_module: under(root, SOURCE_TREE_MODULE),
    }
}

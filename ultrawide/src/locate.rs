// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    fs::{self, File, FileType, OpenOptions},
    io,
    path::{Path, PathBuf},
};

use log::debug;

use crate::config::PatchConfig;

/// An error indicating that the target file could not be located.
///
/// # Examples
///
/// ```no_run
/// use ultrawide::{LocateError, PatchConfig};
///
/// match ultrawide::locate("/games/witcher3".as_ref(), &PatchConfig::new()) {
///     Ok(_) => println!("found it"),
///     Err(LocateError::NotFound { .. }) => println!("not installed here"),
///     Err(LocateError::Io(e)) => println!("couldn't search: {e}"),
/// }
/// ```
#[derive(Debug)]
pub enum LocateError {
    /// An I/O error occurred while traversing the tree or opening the file
    Io(io::Error),
    /// No matching file exists under the root
    NotFound {
        /// The file name searched for
        file: &'static str,
        /// The root of the search
        root: PathBuf,
    },
}

impl Display for LocateError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LocateError::Io(e) => write!(f, "I/O error: {e}"),
            LocateError::NotFound { file, root } => {
                write!(f, "file {file} not found in {}", root.display())
            }
        }
    }
}

impl Error for LocateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LocateError::Io(e) => e.source(),
            LocateError::NotFound { .. } => None,
        }
    }
}

impl From<io::Error> for LocateError {
    fn from(value: io::Error) -> Self {
        LocateError::Io(value)
    }
}

/// Finds the path of the target file under `root`.
///
/// The tree is walked depth-first with the entries of each directory visited in file name order.
/// The first file named [`get_target_file()`](PatchConfig::get_target_file) that sits anywhere
/// below a directory named [`get_target_dir()`](PatchConfig::get_target_dir) is returned. `root`
/// itself counts as the target directory if its name matches. Symbolic links to directories are
/// not followed, but the target file itself may be a symbolic link to a regular file.
///
/// # Errors
///
/// Returns [`LocateError::NotFound`] if there is no match and [`LocateError::Io`] if any directory
/// can't be read.
pub fn find(root: &Path, config: &PatchConfig) -> Result<PathBuf, LocateError> {
    let in_target = root
        .file_name()
        .is_some_and(|name| name == config.get_target_dir());

    search(root, in_target, config)?.ok_or_else(|| LocateError::NotFound {
        file: config.get_target_file(),
        root: root.to_path_buf(),
    })
}

/// Finds the target file under `root` and opens it for reading and writing.
///
/// See [`find()`] for how the search is performed. The file is closed when the returned handle is
/// dropped.
///
/// # Errors
///
/// Returns an error if [`find()`] fails or the file can't be opened.
pub fn locate(root: &Path, config: &PatchConfig) -> Result<File, LocateError> {
    let path = find(root, config)?;
    let file = OpenOptions::new().read(true).write(true).open(&path)?;

    Ok(file)
}

fn search(dir: &Path, in_target: bool, config: &PatchConfig) -> io::Result<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let file_type = entry.file_type()?;
        let name = entry.file_name();

        if file_type.is_dir() {
            let entering = !in_target && name == config.get_target_dir();
            if entering {
                debug!("Searching target directory {}", entry.path().display());
            }

            if let Some(found) = search(&entry.path(), in_target || entering, config)? {
                return Ok(Some(found));
            }
        } else if in_target && name == config.get_target_file() {
            let path = entry.path();
            if !is_file(&path, file_type) {
                continue;
            }
            debug!("Found target file {}", path.display());

            return Ok(Some(path));
        }
    }

    Ok(None)
}

/// Whether `path` is a regular file or a symbolic link to one
fn is_file(path: &Path, file_type: FileType) -> bool {
    file_type.is_file() || (file_type.is_symlink() && fs::metadata(path).is_ok_and(|m| m.is_file()))
}

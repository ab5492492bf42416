// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

use log::info;

/// Copies the full content of `target` into a new file at `dest`
///
/// `target` is read from its start regardless of its current position, and is rewound to its start
/// again once the copy completes. An existing file at `dest` is overwritten. The backup is synced
/// to disk before returning. If successful, returns the number of bytes copied.
///
/// # Errors
///
/// Returns an error if `dest` can't be created or an I/O error occurs while copying. A partially
/// written backup is left in place.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use ultrawide::PatchConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PatchConfig::new();
/// let root = Path::new("/games/witcher3");
/// let mut target = ultrawide::locate(root, &config)?;
///
/// ultrawide::backup(&mut target, &config.backup_path(root))?;
/// # Ok(())
/// # }
/// ```
pub fn backup<R>(target: &mut R, dest: &Path) -> io::Result<u64>
where
    R: Read + Seek + ?Sized,
{
    target.seek(SeekFrom::Start(0))?;

    let mut backup_file = File::create(dest)?;
    let copied = io::copy(target, &mut backup_file)?;
    backup_file.sync_all()?;

    // Leave the target rewound for whoever reads it next
    target.seek(SeekFrom::Start(0))?;

    info!("Backed up {copied} bytes to {}", dest.display());

    Ok(copied)
}

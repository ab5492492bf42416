// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::resolution::{ResolutionTable, WITCHER3_RESOLUTIONS};

/// Configuration for locating, backing up and patching a game executable.
///
/// The defaults describe the DirectX 12 build of The Witcher 3. A single configuration is meant to
/// be built once at startup and passed by reference to [`locate()`](crate::locate),
/// [`backup()`](crate::backup) and [`patch()`](crate::patch).
///
/// # Examples
///
/// ```
/// use ultrawide::PatchConfig;
///
/// let mut config = PatchConfig::new();
/// config.target_file("witcher3_test.exe").expected_occurrences(1);
///
/// assert_eq!(config.get_target_file(), "witcher3_test.exe");
/// assert_eq!(config.get_target_dir(), "x64_dx12");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PatchConfig {
    target_dir: &'static str,
    target_file: &'static str,
    backup_file: &'static str,
    signature: [u8; 4],
    expected_occurrences: usize,
    resolutions: ResolutionTable,
}

impl PatchConfig {
    /// Creates a new configuration with the Witcher 3 defaults
    pub const fn new() -> Self {
        Self {
            target_dir: Self::DEFAULT_TARGET_DIR,
            target_file: Self::DEFAULT_TARGET_FILE,
            backup_file: Self::DEFAULT_BACKUP_FILE,
            signature: Self::DEFAULT_SIGNATURE,
            expected_occurrences: Self::DEFAULT_EXPECTED_OCCURRENCES,
            resolutions: WITCHER3_RESOLUTIONS,
        }
    }

    /// Sets the name of the directory the target file lives under.
    pub fn target_dir(&mut self, name: &'static str) -> &mut Self {
        self.target_dir = name;
        self
    }

    /// Sets the name of the file to patch.
    pub fn target_file(&mut self, name: &'static str) -> &mut Self {
        self.target_file = name;
        self
    }

    /// Sets the name of the backup file created in the root directory.
    pub fn backup_file(&mut self, name: &'static str) -> &mut Self {
        self.backup_file = name;
        self
    }

    /// Sets the bytes searched for and replaced.
    pub fn signature(&mut self, signature: [u8; 4]) -> &mut Self {
        self.signature = signature;
        self
    }

    /// Sets the number of signature occurrences a known executable version contains.
    ///
    /// A different count still patches successfully, but is reported as a possible version
    /// mismatch.
    pub fn expected_occurrences(&mut self, count: usize) -> &mut Self {
        self.expected_occurrences = count;
        self
    }

    /// Sets the table of selectable resolutions.
    pub fn resolutions(&mut self, table: ResolutionTable) -> &mut Self {
        self.resolutions = table;
        self
    }

    /// The name of the directory the target file lives under
    pub const fn get_target_dir(&self) -> &'static str {
        self.target_dir
    }

    /// The name of the file to patch
    pub const fn get_target_file(&self) -> &'static str {
        self.target_file
    }

    /// The name of the backup file
    pub const fn get_backup_file(&self) -> &'static str {
        self.backup_file
    }

    /// The bytes searched for and replaced
    pub const fn get_signature(&self) -> [u8; 4] {
        self.signature
    }

    /// The number of signature occurrences a known executable version contains
    pub const fn get_expected_occurrences(&self) -> usize {
        self.expected_occurrences
    }

    /// The table of selectable resolutions
    pub const fn get_resolutions(&self) -> ResolutionTable {
        self.resolutions
    }

    /// The path of the backup file for a game installed at `root`
    ///
    /// The backup is placed directly in `root`, not next to the target file.
    pub fn backup_path(&self, root: &Path) -> PathBuf {
        root.join(self.backup_file)
    }

    /// The default target directory
    pub const DEFAULT_TARGET_DIR: &'static str = "x64_dx12";

    /// The default target file
    pub const DEFAULT_TARGET_FILE: &'static str = "witcher3.exe";

    /// The default backup file
    pub const DEFAULT_BACKUP_FILE: &'static str = "witcher3_backup.exe";

    /// The default signature
    ///
    /// This is the 16:9 aspect ratio as a little-endian `f32`.
    pub const DEFAULT_SIGNATURE: [u8; 4] = [0x39, 0x8e, 0xe3, 0x3f];

    /// The default expected number of signature occurrences
    pub const DEFAULT_EXPECTED_OCCURRENCES: usize = 3;
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

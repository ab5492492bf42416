// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    fmt::{self, Display, Formatter},
    io::{self, Read, Seek, SeekFrom, Write},
};

use log::info;

use crate::{config::PatchConfig, resolution::aspect_ratio};

/// The result of patching a target file
///
/// Its [`Display`] implementation renders the message shown to users.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PatchOutcome {
    file: &'static str,
    replaced: usize,
    expected: usize,
}

impl PatchOutcome {
    /// The number of signature occurrences that were replaced
    pub const fn replaced(&self) -> usize {
        self.replaced
    }

    /// The number of occurrences a known executable version contains
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Whether the signature was absent, meaning the file was patched before
    pub const fn is_already_patched(&self) -> bool {
        self.replaced == 0
    }

    /// Whether some, but not the expected number of, occurrences were replaced
    ///
    /// This usually means the executable is a version the expected count wasn't taken from.
    pub const fn is_version_mismatch(&self) -> bool {
        self.replaced != 0 && self.replaced != self.expected
    }
}

impl Display for PatchOutcome {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.is_already_patched() {
            write!(f, "looks like {} is already patched", self.file)
        } else {
            write!(f, "updated {} times, expected {}", self.replaced, self.expected)
        }
    }
}

/// Replaces every occurrence of `signature` in `data` with `replacement`
///
/// Every offset is checked, including those overlapping a replacement just written. Returns the
/// number of replacements.
///
/// # Examples
///
/// ```
/// let mut data = [0, 1, 2, 3, 4, 1, 2, 3, 4];
///
/// let count = ultrawide::replace_all(&mut data, &[1, 2, 3, 4], &[9, 9, 9, 9]);
///
/// assert_eq!(count, 2);
/// assert_eq!(data, [0, 9, 9, 9, 9, 9, 9, 9, 9]);
/// ```
pub fn replace_all(data: &mut [u8], signature: &[u8; 4], replacement: &[u8; 4]) -> usize {
    let mut count = 0;

    for i in 0..data.len().saturating_sub(3) {
        if data[i..i + 4] == signature[..] {
            data[i..i + 4].copy_from_slice(replacement);
            count += 1;
        }
    }

    count
}

/// Overwrites every signature occurrence in `target` with `replacement`
///
/// The whole content of `target` is read from its start, patched in memory with
/// [`replace_all()`] and written back starting at offset 0. The length of `target` never changes.
///
/// Finding no occurrences isn't an error: the outcome then reports the file as already patched.
/// Neither is finding a number of occurrences other than
/// [`get_expected_occurrences()`](PatchConfig::get_expected_occurrences).
///
/// # Errors
///
/// Returns an error if an I/O error occurs while reading or writing `target`.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use ultrawide::{PatchConfig, WITCHER3_RESOLUTIONS};
///
/// # fn main() -> std::io::Result<()> {
/// let config = PatchConfig::new();
/// let replacement = WITCHER3_RESOLUTIONS.get("3440x1440").unwrap().bytes();
/// let mut target = Cursor::new(vec![0, 0x39, 0x8e, 0xe3, 0x3f, 0]);
///
/// let outcome = ultrawide::patch(&mut target, &replacement, &config)?;
///
/// assert_eq!(outcome.replaced(), 1);
/// assert_eq!(target.into_inner(), [0, 0x8e, 0xe3, 0x18, 0x40, 0]);
/// # Ok(())
/// # }
/// ```
pub fn patch<F>(
    target: &mut F,
    replacement: &[u8; 4],
    config: &PatchConfig,
) -> io::Result<PatchOutcome>
where
    F: Read + Write + Seek + ?Sized,
{
    target.seek(SeekFrom::Start(0))?;
    let mut content = Vec::new();
    target.read_to_end(&mut content)?;

    let replaced = replace_all(&mut content, &config.get_signature(), replacement);

    target.seek(SeekFrom::Start(0))?;
    target.write_all(&content)?;
    target.flush()?;

    info!(
        "Replaced {replaced} occurrences of aspect ratio {:.4} with {:.4}",
        aspect_ratio(&config.get_signature()),
        aspect_ratio(replacement),
    );

    Ok(PatchOutcome {
        file: config.get_target_file(),
        replaced,
        expected: config.get_expected_occurrences(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{patch, replace_all};
    use crate::config::PatchConfig;

    const SIGNATURE: [u8; 4] = PatchConfig::DEFAULT_SIGNATURE;
    const REPLACEMENT: [u8; 4] = [0x8e, 0xe3, 0x18, 0x40];

    fn with_signatures_at(len: usize, offsets: &[usize]) -> Vec<u8> {
        let mut data: Vec<u8> = (0..len).map(|i| (i % 7) as u8).collect();
        for &offset in offsets {
            data[offset..offset + 4].copy_from_slice(&SIGNATURE);
        }
        data
    }

    #[test]
    fn replaces_single_occurrence() {
        let original = with_signatures_at(64, &[17]);
        let mut data = original.clone();

        let count = replace_all(&mut data, &SIGNATURE, &REPLACEMENT);

        assert_eq!(count, 1);
        assert_eq!(data[17..21], REPLACEMENT);
        assert_eq!(data[..17], original[..17]);
        assert_eq!(data[21..], original[21..]);
    }

    #[test]
    fn leaves_patched_data_unchanged() {
        let mut data = with_signatures_at(64, &[3, 30, 60]);
        replace_all(&mut data, &SIGNATURE, &REPLACEMENT);
        let patched = data.clone();

        let count = replace_all(&mut data, &SIGNATURE, &REPLACEMENT);

        assert_eq!(count, 0);
        assert_eq!(data, patched);
    }

    #[test]
    fn replaces_three_occurrences() {
        let mut data = with_signatures_at(128, &[0, 50, 124]);

        let count = replace_all(&mut data, &SIGNATURE, &REPLACEMENT);

        assert_eq!(count, 3);
        assert_eq!(data[0..4], REPLACEMENT);
        assert_eq!(data[50..54], REPLACEMENT);
        assert_eq!(data[124..128], REPLACEMENT);
    }

    #[test]
    fn scans_with_single_byte_stride() {
        // Each replacement completes a new match one byte further on
        let mut data = [1, 1, 1, 1, 1, 1];

        let count = replace_all(&mut data, &[1, 1, 1, 1], &[1, 1, 1, 1]);

        assert_eq!(count, 3);
    }

    #[test]
    fn matches_overlapping_written_replacement() {
        let mut data = [1, 2, 1, 2, 2];

        let count = replace_all(&mut data, &[1, 2, 1, 2], &[3, 1, 2, 1]);

        // Skipping past each match would find only the first
        assert_eq!(count, 2);
        assert_eq!(data, [3, 3, 1, 2, 1]);
    }

    #[test]
    fn handles_short_buffers() {
        for len in 0..4 {
            let mut data = SIGNATURE[..len].to_vec();
            assert_eq!(
                replace_all(&mut data, &SIGNATURE, &REPLACEMENT),
                0,
                "matched in a {len} byte buffer",
            );
        }

        let mut data = SIGNATURE;
        assert_eq!(replace_all(&mut data, &SIGNATURE, &REPLACEMENT), 1);
        assert_eq!(data, REPLACEMENT);
    }

    #[test]
    fn patches_from_start_regardless_of_position() {
        let mut target = Cursor::new(with_signatures_at(40, &[2, 20, 36]));
        target.set_position(30);

        let outcome = patch(&mut target, &REPLACEMENT, &PatchConfig::new()).unwrap();

        assert_eq!(outcome.replaced(), 3);
        assert!(!outcome.is_already_patched());
        assert!(!outcome.is_version_mismatch());
        assert_eq!(outcome.to_string(), "updated 3 times, expected 3");

        let mut expected = with_signatures_at(40, &[]);
        for offset in [2, 20, 36] {
            expected[offset..offset + 4].copy_from_slice(&REPLACEMENT);
        }
        assert_eq!(target.into_inner(), expected);
    }

    #[test]
    fn reports_already_patched() {
        let mut target = Cursor::new(vec![0; 32]);

        let outcome = patch(&mut target, &REPLACEMENT, &PatchConfig::new()).unwrap();

        assert!(outcome.is_already_patched());
        assert!(!outcome.is_version_mismatch());
        assert_eq!(
            outcome.to_string(),
            "looks like witcher3.exe is already patched",
        );
        assert_eq!(target.into_inner(), vec![0; 32]);
    }

    #[test]
    fn reports_unexpected_count() {
        let mut target = Cursor::new(with_signatures_at(32, &[4, 12]));

        let outcome = patch(&mut target, &REPLACEMENT, &PatchConfig::new()).unwrap();

        assert_eq!(outcome.replaced(), 2);
        assert!(outcome.is_version_mismatch());
        assert_eq!(outcome.to_string(), "updated 2 times, expected 3");
    }

    #[test]
    fn uses_configured_expectation() {
        let mut config = PatchConfig::new();
        config.expected_occurrences(2);
        let mut target = Cursor::new(with_signatures_at(32, &[4, 12]));

        let outcome = patch(&mut target, &REPLACEMENT, &config).unwrap();

        assert!(!outcome.is_version_mismatch());
        assert_eq!(outcome.expected(), 2);
    }
}

// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use byteorder::{ByteOrder, LittleEndian};

/// A selectable screen resolution and the aspect-ratio bytes patched in for it
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Resolution {
    label: &'static str,
    bytes: [u8; 4],
}

impl Resolution {
    /// Creates a new resolution entry
    pub const fn new(label: &'static str, bytes: [u8; 4]) -> Self {
        Self { label, bytes }
    }

    /// The user-facing label, e.g., `3440x1440`
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The little-endian `f32` aspect ratio written over the signature
    pub const fn bytes(&self) -> [u8; 4] {
        self.bytes
    }

    /// The aspect ratio encoded by [`bytes()`](Self::bytes)
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(&self.bytes)
    }
}

/// An immutable lookup table from resolution label to replacement bytes
///
/// Labels are listed in the order the table was built with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResolutionTable {
    entries: &'static [Resolution],
}

impl ResolutionTable {
    /// Creates a table over `entries`
    pub const fn new(entries: &'static [Resolution]) -> Self {
        Self { entries }
    }

    /// Looks up the resolution with the given label
    ///
    /// Labels must match exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use ultrawide::WITCHER3_RESOLUTIONS;
    ///
    /// let resolution = WITCHER3_RESOLUTIONS.get("3440x1440").unwrap();
    /// assert_eq!(resolution.bytes(), [0x8e, 0xe3, 0x18, 0x40]);
    /// assert!(WITCHER3_RESOLUTIONS.get("1920x1080").is_none());
    /// ```
    pub fn get(&self, label: &str) -> Option<&'static Resolution> {
        self.iter().find(|r| r.label == label)
    }

    /// Iterates over every entry in table order
    pub fn iter(&self) -> impl Iterator<Item = &'static Resolution> + use<> {
        let entries = self.entries;
        entries.iter()
    }

    /// Iterates over every label in table order
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.iter().map(Resolution::label)
    }
}

/// Ultrawide resolutions supported for The Witcher 3 cutscenes
pub const WITCHER3_RESOLUTIONS: ResolutionTable = ResolutionTable::new(&[
    Resolution::new("2560x1080", [0x26, 0xb4, 0x17, 0x40]),
    Resolution::new("3440x1440", [0x8e, 0xe3, 0x18, 0x40]),
    Resolution::new("3840x1600", [0x9a, 0x99, 0x19, 0x40]),
    Resolution::new("5120x1440", [0x39, 0x8e, 0x63, 0x40]),
    Resolution::new("5120x2160", [0x26, 0xb4, 0x17, 0x40]),
    Resolution::new("6880x2880", [0x8e, 0xe3, 0x18, 0x40]),
]);

/// Encodes `width / height` as a little-endian `f32`
///
/// The division is carried out in `f64` and rounded once to `f32`.
///
/// # Examples
///
/// ```
/// // 16:9
/// assert_eq!(ultrawide::aspect_ratio_bytes(16, 9), [0x39, 0x8e, 0xe3, 0x3f]);
/// ```
pub fn aspect_ratio_bytes(width: u32, height: u32) -> [u8; 4] {
    let ratio = (f64::from(width) / f64::from(height)) as f32;
    let mut bytes = [0; 4];
    LittleEndian::write_f32(&mut bytes, ratio);
    bytes
}

/// Decodes a little-endian `f32` aspect ratio
pub fn aspect_ratio(bytes: &[u8; 4]) -> f32 {
    LittleEndian::read_f32(bytes)
}

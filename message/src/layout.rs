//! Byte offsets of every field in the wire frame.
//!
//! This table is the interoperability contract with the firmware's packed
//! `ShowcaseMessage` struct. Fields are little-endian and follow each other with
//! no alignment gaps; the frame ends in two reserved zero bytes.

use std::ops::Range;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub offset: usize,
    pub size:   usize,
}

impl Field {
    const fn after(prev: Field, size: usize) -> Self {
        Self {
            offset: prev.end(),
            size,
        }
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.size
    }

    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

pub const TYPE: Field = Field {
    offset: 0,
    size:   1,
};
pub const USERNAME: Field = Field::after(TYPE, 32);
pub const AMOUNT: Field = Field::after(USERNAME, 4);
pub const DESCRIPTION: Field = Field::after(AMOUNT, 16);
pub const STATUS: Field = Field::after(DESCRIPTION, 1);
pub const CHECKSUM: Field = Field::after(STATUS, 2);
pub const TIMESTAMP: Field = Field::after(CHECKSUM, 4);
pub const PADDING: Field = Field::after(TIMESTAMP, 2);

pub const FRAME_SIZE: usize = PADDING.end();

/// Every field in wire order, by name.
pub const FIELDS: [(&str, Field); 8] = [
    ("type", TYPE),
    ("username", USERNAME),
    ("amount", AMOUNT),
    ("description", DESCRIPTION),
    ("status", STATUS),
    ("checksum", CHECKSUM),
    ("timestamp", TIMESTAMP),
    ("padding", PADDING),
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offsets_match_firmware() {
        let expected = [
            ("type", 0, 1),
            ("username", 1, 32),
            ("amount", 33, 4),
            ("description", 37, 16),
            ("status", 53, 1),
            ("checksum", 54, 2),
            ("timestamp", 56, 4),
            ("padding", 60, 2),
        ];

        for ((name, field), (exp_name, offset, size)) in FIELDS.iter().zip(expected) {
            assert_eq!(*name, exp_name);
            assert_eq!(field.offset, offset, "{name} offset");
            assert_eq!(field.size, size, "{name} size");
        }

        assert_eq!(FRAME_SIZE, 62);
    }

    #[test]
    fn fields_are_contiguous() {
        let mut end = 0;

        for (name, field) in FIELDS {
            assert_eq!(field.offset, end, "gap before {name}");
            end = field.end();
        }

        assert_eq!(end, FRAME_SIZE);
    }
}

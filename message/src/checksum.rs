/// A checksum algorithm over a byte slice.
pub trait Checksum {
    type Output: Copy + Eq;

    fn checksum(vals: &[u8]) -> Self::Output;
}

/// Reflected CRC-16 with polynomial `0xa001` and initial value `0xffff`, computed
/// bit-serially without a lookup table.
///
/// These are the CRC-16/MODBUS parameters. The firmware computes it the same way,
/// so any change here breaks every deployed station.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseCrc;

impl ShowcaseCrc {
    pub const INIT: u16 = 0xffff;
    pub const POLY: u16 = 0xa001;
}

impl Checksum for ShowcaseCrc {
    type Output = u16;

    fn checksum(vals: &[u8]) -> u16 {
        vals.iter().fold(Self::INIT, |crc, &b| {
            (0..8).fold(crc ^ b as u16, |crc, _| {
                if crc & 1 == 1 {
                    (crc >> 1) ^ Self::POLY
                } else {
                    crc >> 1
                }
            })
        })
    }
}

#[inline]
pub fn checksum(vals: &[u8]) -> u16 {
    ShowcaseCrc::checksum(vals)
}

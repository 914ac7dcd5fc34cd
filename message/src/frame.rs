use byteorder::{
    ByteOrder,
    LE,
};
use packed_struct::{
    prelude::*,
    PackedStructInfo,
    PackingResult,
};

use crate::{
    checksum,
    layout,
    Clock,
    FixedStr,
    MessageRecord,
    MessageType,
    Status,
    SystemClock,
};

pub const FRAME_SIZE: usize = layout::FRAME_SIZE;

pub type Bytes = [u8; FRAME_SIZE];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed frame: expected {expected} bytes, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },
}

/// Wire-level view of a frame: every field at its fixed width.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    pub ty:          u8,
    pub username:    FixedStr<32>,
    pub amount:      i32,
    pub description: FixedStr<16>,
    pub status:      u8,
    pub checksum:    u16,
    pub timestamp:   u32,
}

impl Frame {
    pub fn to_bytes(&self) -> Bytes {
        let mut b = [0u8; FRAME_SIZE];

        b[layout::TYPE.offset] = self.ty;
        b[layout::USERNAME.range()].copy_from_slice(self.username.as_bytes());
        LE::write_i32(&mut b[layout::AMOUNT.range()], self.amount);
        b[layout::DESCRIPTION.range()].copy_from_slice(self.description.as_bytes());
        b[layout::STATUS.offset] = self.status;
        LE::write_u16(&mut b[layout::CHECKSUM.range()], self.checksum);
        LE::write_u32(&mut b[layout::TIMESTAMP.range()], self.timestamp);

        b
    }

    pub fn from_bytes(b: &Bytes) -> Self {
        let mut username = [0u8; 32];
        username.copy_from_slice(&b[layout::USERNAME.range()]);

        let mut description = [0u8; 16];
        description.copy_from_slice(&b[layout::DESCRIPTION.range()]);

        Self {
            ty:          b[layout::TYPE.offset],
            username:    FixedStr::from_bytes(username),
            amount:      LE::read_i32(&b[layout::AMOUNT.range()]),
            description: FixedStr::from_bytes(description),
            status:      b[layout::STATUS.offset],
            checksum:    LE::read_u16(&b[layout::CHECKSUM.range()]),
            timestamp:   LE::read_u32(&b[layout::TIMESTAMP.range()]),
        }
    }

    /// Checksum over this frame with the checksum field zeroed.
    #[inline]
    pub fn compute_checksum(&self) -> u16 {
        let unsealed = Frame {
            checksum: 0,
            ..*self
        };

        checksum::checksum(&unsealed.to_bytes())
    }

    /// This frame with its checksum field filled in.
    #[inline]
    pub fn sealed(self) -> Self {
        Frame {
            checksum: self.compute_checksum(),
            ..self
        }
    }

    #[inline]
    pub fn record(&self) -> MessageRecord {
        MessageRecord {
            ty:          MessageType(self.ty),
            username:    self.username.to_string_lossy(),
            amount:      self.amount,
            description: self.description.to_string_lossy(),
            status:      Status(self.status),
            checksum:    self.checksum,
            timestamp:   self.timestamp,
        }
    }
}

impl PackedStruct for Frame {
    type ByteArray = Bytes;

    #[inline]
    fn pack(&self) -> PackingResult<Self::ByteArray> {
        Ok(self.to_bytes())
    }

    #[inline]
    fn unpack(src: &Self::ByteArray) -> PackingResult<Self> {
        Ok(Self::from_bytes(src))
    }
}

impl PackedStructInfo for Frame {
    #[inline]
    fn packed_bits() -> usize {
        FRAME_SIZE * 8
    }
}

/// Caller-supplied content of an outgoing frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Outgoing<'a> {
    pub ty:          MessageType,
    pub username:    &'a str,
    pub amount:      i32,
    pub description: &'a str,
    pub status:      Status,
}

/// Which text fields lost content to the fixed field widths.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Truncation {
    pub username:    bool,
    pub description: bool,
}

impl Truncation {
    #[inline]
    pub fn any(&self) -> bool {
        self.username || self.description
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Encoded {
    pub frame:     Bytes,
    pub truncated: Truncation,
}

impl Encoded {
    #[inline]
    pub fn was_truncated(&self) -> bool {
        self.truncated.any()
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        &self.frame
    }
}

/// Encode `msg`, stamping it with `timestamp` or the current wall time.
#[inline]
pub fn encode(msg: &Outgoing<'_>, timestamp: Option<u32>) -> Encoded {
    encode_with_clock(msg, timestamp, &SystemClock)
}

#[tracing::instrument(skip_all, fields(ty = msg.ty.0), level = "trace")]
pub fn encode_with_clock(msg: &Outgoing<'_>, timestamp: Option<u32>, clock: &impl Clock) -> Encoded {
    let (username, username_truncated) = FixedStr::truncating(msg.username);
    let (description, description_truncated) = FixedStr::truncating(msg.description);

    let truncated = Truncation {
        username:    username_truncated,
        description: description_truncated,
    };

    if truncated.any() {
        tracing::debug!(
            username = truncated.username,
            description = truncated.description,
            "text truncated to field width"
        );
    }

    let frame = Frame {
        ty: msg.ty.0,
        username,
        amount: msg.amount,
        description,
        status: msg.status.0,
        checksum: 0,
        timestamp: timestamp.unwrap_or_else(|| clock.now()),
    }
    .sealed();

    tracing::trace!(checksum = frame.checksum, timestamp = frame.timestamp, "encoded frame");

    Encoded {
        frame: frame.to_bytes(),
        truncated,
    }
}

fn frame_bytes(src: &[u8]) -> Result<&Bytes, Error> {
    src.try_into().map_err(|_| Error::MalformedFrame {
        expected: FRAME_SIZE,
        actual:   src.len(),
    })
}

/// Extract the fields of a frame. The checksum is reported as found, not checked;
/// see [`verify`].
#[tracing::instrument(skip_all, fields(len = src.len()), level = "trace", err(Display))]
pub fn decode(src: &[u8]) -> Result<MessageRecord, Error> {
    Ok(Frame::from_bytes(frame_bytes(src)?).record())
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verification {
    Valid,
    ChecksumMismatch { embedded: u16, computed: u16 },
}

impl Verification {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

/// Recompute the checksum of `src` and compare it with the embedded one.
pub fn verify(src: &[u8]) -> Result<Verification, Error> {
    let mut scratch = *frame_bytes(src)?;

    let embedded = LE::read_u16(&scratch[layout::CHECKSUM.range()]);
    scratch[layout::CHECKSUM.range()].fill(0);
    let computed = checksum::checksum(&scratch);

    if computed == embedded {
        return Ok(Verification::Valid);
    }

    tracing::warn!(
        embedded = %hex::encode(embedded.to_le_bytes()),
        computed = %hex::encode(computed.to_le_bytes()),
        "frame with invalid checksum"
    );

    Ok(Verification::ChecksumMismatch {
        embedded,
        computed,
    })
}

//! Fixed-layout messages broadcast between showcase stations.
//!
//! Every message is a 62-byte little-endian frame protected by a reflected CRC-16
//! (see [`checksum`]). The layout in [`layout`] must match the firmware's packed
//! struct exactly.

pub mod checksum;
mod clock;
pub mod frame;
pub mod layout;
mod record;
mod text;

pub use checksum::{
    Checksum,
    ShowcaseCrc,
};
pub use clock::{
    Clock,
    FixedClock,
    SystemClock,
};
pub use frame::{
    decode,
    encode,
    encode_with_clock,
    verify,
    Encoded,
    Error,
    Frame,
    Outgoing,
    Truncation,
    Verification,
    FRAME_SIZE,
};
pub use record::{
    MessageRecord,
    MessageType,
    Status,
};
pub use text::FixedStr;

use std::path::PathBuf;

use message::{
    MessageType,
    Outgoing,
    Status,
};

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
#[structopt(about = "create test showcase message payloads")]
pub struct Options {
    #[structopt(
        long = "type",
        default_value = "2",
        allow_hyphen_values = true,
        help = "message type (number)"
    )]
    pub ty: i64,

    #[structopt(long, default_value = "TestUser")]
    pub username: String,

    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    pub amount: i64,

    #[structopt(long = "desc", default_value = "")]
    pub description: String,

    #[structopt(long, default_value = "0", allow_hyphen_values = true, help = "status byte")]
    pub status: i64,

    #[structopt(long, help = "seconds since the unix epoch (defaults to now)")]
    pub timestamp: Option<u64>,

    #[structopt(long, parse(from_os_str), help = "write binary to file")]
    pub out: Option<PathBuf>,

    #[structopt(long, help = "print fields as json")]
    pub json: bool,
}

impl Options {
    /// Message content, with numbers wrapped to their wire widths.
    pub fn outgoing(&self) -> Outgoing<'_> {
        Outgoing {
            ty:          MessageType(wrap_u8("type", self.ty)),
            username:    &self.username,
            amount:      wrap_i32("amount", self.amount),
            description: &self.description,
            status:      Status(wrap_u8("status", self.status)),
        }
    }

    pub fn timestamp(&self) -> Option<u32> {
        self.timestamp.map(|ts| {
            let wrapped = ts as u32;
            if wrapped as u64 != ts {
                tracing::warn!(given = ts, wrapped, "timestamp wrapped to 32 bits");
            }

            wrapped
        })
    }
}

/// Input format for frames read by `decode-frame`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    Raw,
    Hex,
    Base64,
}

#[derive(Debug, Clone, PartialEq, Eq, structopt::StructOpt)]
#[structopt(about = "decode showcase frames from files or stdin (default raw binary format)")]
pub struct DecodeOptions {
    #[structopt(
        long,
        help = "interpret input as hex (can be space and/or newline separated, does not strip 0x)"
    )]
    pub hex: bool,

    #[structopt(long, conflicts_with = "hex", help = "interpret input as base64")]
    pub base64: bool,

    #[structopt(long, help = "print fields as json")]
    pub json: bool,

    #[structopt(long, help = "treat a checksum mismatch as a failure")]
    pub strict: bool,

    #[structopt(parse(from_os_str), help = "frame files (reads stdin if none are given)")]
    pub inputs: Vec<PathBuf>,
}

impl DecodeOptions {
    pub fn format(&self) -> Format {
        match self {
            DecodeOptions {
                hex: true,
                ..
            } => Format::Hex,
            DecodeOptions {
                base64: true,
                ..
            } => Format::Base64,
            _ => Format::Raw,
        }
    }
}

fn wrap_u8(field: &'static str, val: i64) -> u8 {
    let wrapped = val as u8;
    if wrapped as i64 != val {
        tracing::warn!(field, given = val, wrapped, "value wrapped to 8 bits");
    }

    wrapped
}

fn wrap_i32(field: &'static str, val: i64) -> i32 {
    let wrapped = val as i32;
    if wrapped as i64 != val {
        tracing::warn!(field, given = val, wrapped, "value wrapped to 32 bits");
    }

    wrapped
}

#[cfg(test)]
mod test {
    use structopt::StructOpt;

    use super::*;

    #[test]
    fn defaults_match_reference_tool() {
        let options = Options::from_iter(["showcase-sim"]);
        let msg = options.outgoing();

        assert_eq!(msg.ty, MessageType::AUTH_REQUEST);
        assert_eq!(msg.username, "TestUser");
        assert_eq!(msg.amount, 0);
        assert_eq!(msg.description, "");
        assert_eq!(msg.status, Status::PENDING);
        assert_eq!(options.timestamp(), None);
        assert_eq!(options.out, None);
    }

    #[test]
    fn out_of_width_numbers_wrap() {
        let options = Options::from_iter([
            "showcase-sim",
            "--type",
            "258",
            "--status",
            "-1",
            "--amount",
            "4294967297",
            "--timestamp",
            "4294967296",
        ]);
        let msg = options.outgoing();

        assert_eq!(msg.ty, MessageType(2));
        assert_eq!(msg.status, Status(255));
        assert_eq!(msg.amount, 1);
        assert_eq!(options.timestamp(), Some(0));
    }

    #[test]
    fn negative_amount_parses() {
        let options = Options::from_iter(["showcase-sim", "--amount", "-50", "--desc", "refund"]);
        let msg = options.outgoing();

        assert_eq!(msg.amount, -50);
        assert_eq!(msg.description, "refund");
    }

    #[test]
    fn decode_format_selection() {
        assert_eq!(DecodeOptions::from_iter(["decode-frame"]).format(), Format::Raw);
        assert_eq!(DecodeOptions::from_iter(["decode-frame", "--hex"]).format(), Format::Hex);
        assert_eq!(
            DecodeOptions::from_iter(["decode-frame", "--base64", "a.bin"]).format(),
            Format::Base64
        );
        assert!(DecodeOptions::from_iter_safe(["decode-frame", "--hex", "--base64"]).is_err());
    }
}

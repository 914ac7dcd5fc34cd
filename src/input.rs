use base64::Engine;

use crate::options::Format;

/// Turn raw input into frame bytes according to `format`.
pub fn parse(format: Format, input: Vec<u8>) -> eyre::Result<Vec<u8>> {
    let buf = match format {
        Format::Raw => input,
        Format::Hex => {
            let s = String::from_utf8(input)?;
            hex::decode(s.trim().replace(&[' ', '\t', '\n', '\r'][..], ""))?
        },
        Format::Base64 => {
            let s = String::from_utf8(input)?;
            base64::engine::general_purpose::STANDARD.decode(s.trim())?
        },
    };

    Ok(buf)
}

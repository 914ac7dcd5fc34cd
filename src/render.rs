use message::{
    MessageRecord,
    Verification,
};

#[inline]
pub fn hex_string(frame: impl AsRef<[u8]>) -> String {
    hex::encode(frame)
}

/// Field-by-field breakdown of a decoded frame.
pub fn fields(record: &MessageRecord) -> String {
    let timestamp = match record.timestamp_utc() {
        Some(ts) => format!("{} ({})", record.timestamp, ts.format("%Y-%m-%dT%H:%M:%SZ")),
        None => record.timestamp.to_string(),
    };

    format!(
        "Fields:\n type: {}\n username: {}\n amount: {}\n desc: {}\n status: {}\n checksum: 0x{:04x}\n timestamp: {}\n",
        record.ty,
        record.username,
        record.amount,
        record.description,
        record.status,
        record.checksum,
        timestamp,
    )
}

#[inline]
pub fn json(record: &MessageRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

pub fn verification(v: &Verification) -> String {
    match v {
        Verification::Valid => "checksum: ok".to_string(),
        Verification::ChecksumMismatch {
            embedded,
            computed,
        } => format!("checksum: MISMATCH (embedded 0x{embedded:04x}, computed 0x{computed:04x})"),
    }
}

use std::fmt::{
    Display,
    Formatter,
};

use tap::Conv;

macro_rules! named_u8 {
    ($(#[$meta:meta])* $name:ident { $( $konst:ident = $val:literal => $label:literal, )* }) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Debug,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Default,
            derive_more::From,
            derive_more::Into,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u8);

        impl $name {
            $( pub const $konst: Self = Self($val); )*

            /// The name of a known value.
            pub fn name(&self) -> Option<&'static str> {
                match self.0 {
                    $( $val => Some($label), )*
                    _ => None,
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{} ({})", self.0, name),
                    None => write!(f, "{}", self.0),
                }
            }
        }
    };
}

named_u8! {
    /// Message kind. Any value is valid on the wire; known values are named.
    MessageType {
        IDENTITY_ASSIGN = 1 => "IdentityAssign",
        AUTH_REQUEST = 2 => "AuthRequest",
        AUTH_SUCCESS = 3 => "AuthSuccess",
        EARN_COIN = 4 => "EarnCoin",
        SPEND_REQUEST = 5 => "SpendRequest",
        SPEND_CONFIRM = 6 => "SpendConfirm",
        RESET_ALL = 99 => "ResetAll",
        HEARTBEAT = 100 => "Heartbeat",
        BALANCE_UPDATE = 101 => "BalanceUpdate",
        ERROR = 200 => "Error",
    }
}

named_u8! {
    Status {
        PENDING = 0 => "Pending",
        SUCCESS = 1 => "Success",
        ERROR = 2 => "Error",
    }
}

/// Logical content of a frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "type")]
    pub ty:          MessageType,
    pub username:    String,
    pub amount:      i32,
    pub description: String,
    pub status:      Status,
    pub checksum:    u16,
    pub timestamp:   u32,
}

impl MessageRecord {
    #[inline]
    pub fn timestamp_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.timestamp.conv::<i64>(), 0)
    }

    #[inline]
    pub fn display(&self) -> String {
        let ts = match self.timestamp_utc() {
            Some(ts) => ts.format("%y/%m/%d %TZ").to_string(),
            None => self.timestamp.to_string(),
        };

        format!(
            "{ts}: {} from {:?} amount {} ({:?}) [{}] crc 0x{:04x}",
            self.ty, self.username, self.amount, self.description, self.status, self.checksum,
        )
    }
}

impl Display for MessageRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn known_types_are_named() {
        assert_eq!(MessageType::AUTH_REQUEST.to_string(), "2 (AuthRequest)");
        assert_eq!(MessageType(7).to_string(), "7");
        assert_eq!(MessageType::from(200u8).name(), Some("Error"));
        assert_eq!(Status::SUCCESS.name(), Some("Success"));
        assert_eq!(u8::from(Status::ERROR), 2);
    }

    #[test]
    fn serializes_as_plain_numbers() {
        let record = MessageRecord {
            ty:          MessageType::EARN_COIN,
            username:    "alice".into(),
            amount:      -5,
            description: "latte".into(),
            status:      Status::PENDING,
            checksum:    0xbeef,
            timestamp:   1_700_000_000,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["status"], 0);
        assert_eq!(json["amount"], -5);

        let back: MessageRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn display_formats_timestamp() {
        let record = MessageRecord {
            ty:          MessageType::HEARTBEAT,
            username:    String::new(),
            amount:      0,
            description: String::new(),
            status:      Status::SUCCESS,
            checksum:    0x0102,
            timestamp:   1_700_000_000,
        };

        let shown = record.display();
        assert!(shown.starts_with("23/11/14 22:13:20Z"), "{shown}");
        assert!(shown.contains("100 (Heartbeat)"));
        assert!(shown.ends_with("crc 0x0102"));
    }
}

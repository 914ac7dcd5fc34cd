use std::fmt::{
    Debug,
    Display,
    Formatter,
};

/// Zero-terminated text in a fixed-width field of `N` bytes.
///
/// At most `N - 1` bytes of content are kept so the region always ends in at least
/// one zero byte, the way the firmware's `strncpy(dst, src, N - 1)` leaves it.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize>([u8; N]);

impl<const N: usize> FixedStr<N> {
    pub const CAPACITY: usize = N - 1;

    /// Copy `s` into the field, cutting it at the last UTF-8 character boundary that
    /// fits. Returns whether anything was dropped.
    pub fn truncating(s: &str) -> (Self, bool) {
        let mut len = s.len().min(Self::CAPACITY);
        while !s.is_char_boundary(len) {
            len -= 1;
        }

        let mut buf = [0u8; N];
        buf[..len].copy_from_slice(&s.as_bytes()[..len]);

        (Self(buf), len < s.len())
    }

    #[inline]
    pub fn from_bytes(raw: [u8; N]) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Bytes before the first zero, or the whole region if there is none.
    #[inline]
    pub fn content(&self) -> &[u8] {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        &self.0[..end]
    }

    /// The content as text, replacing invalid UTF-8 sequences.
    #[inline]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.content()).into_owned()
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> Display for FixedStr<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.content()))
    }
}

impl<const N: usize> Debug for FixedStr<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedStr<{}>({:?})", N, String::from_utf8_lossy(self.content()))
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn short_text_is_zero_filled() {
        let (s, truncated) = FixedStr::<16>::truncating("coffee");

        assert!(!truncated);
        assert_eq!(&s.as_bytes()[..6], b"coffee");
        assert!(s.as_bytes()[6..].iter().all(|&b| b == 0));
        assert_eq!(s.to_string_lossy(), "coffee");
    }

    #[test]
    fn exact_capacity_is_not_truncated() {
        let text = "a".repeat(31);
        let (s, truncated) = FixedStr::<32>::truncating(&text);

        assert!(!truncated);
        assert_eq!(s.as_bytes()[31], 0);
        assert_eq!(s.to_string_lossy(), text);
    }

    #[test]
    fn ascii_overflow_keeps_prefix() {
        let text = "x".repeat(40);
        let (s, truncated) = FixedStr::<32>::truncating(&text);

        assert!(truncated);
        assert_eq!(s.to_string_lossy(), &text[..31]);
    }

    #[test]
    fn overflow_backs_off_to_char_boundary() {
        // each 'é' is two bytes, so byte 15 would split the eighth one
        let text = "é".repeat(10);
        let (s, truncated) = FixedStr::<16>::truncating(&text);

        assert!(truncated);
        assert_eq!(s.to_string_lossy(), "é".repeat(7));
        assert_eq!(s.content().len(), 14);
    }

    #[test]
    fn unterminated_region_reads_whole_field() {
        let s = FixedStr::<4>::from_bytes(*b"abcd");
        assert_eq!(s.content(), b"abcd");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let s = FixedStr::<4>::from_bytes([b'a', 0xff, b'b', 0]);
        assert_eq!(s.to_string_lossy(), "a\u{fffd}b");
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(text in any::<String>()) {
            let (s, truncated) = FixedStr::<16>::truncating(&text);

            prop_assert!(s.content().len() <= 15);
            prop_assert_eq!(s.as_bytes()[15], 0);
            prop_assert_eq!(truncated, text.len() > 15);
            prop_assert!(text.starts_with(std::str::from_utf8(s.content()).unwrap()));
        }
    }
}

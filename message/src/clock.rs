/// Source of frame timestamps, in whole seconds since the unix epoch.
pub trait Clock: Send + Sync {
    fn now(&self) -> u32;
}

/// Wall time, truncated to the low 32 bits like the firmware's `uint32_t` field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> u32 {
        (chrono::Utc::now().timestamp() as u64 & u32::MAX as u64) as u32
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> u32 {
        self.0
    }
}

impl<T> Clock for &T
where
    T: Clock + ?Sized,
{
    #[inline]
    fn now(&self) -> u32 {
        (**self).now()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn system_clock_tracks_wall_time() {
        let expected = chrono::Utc::now().timestamp() as u32;
        let got = SystemClock.now();

        assert!(got.wrapping_sub(expected) <= 1);
    }

    #[test]
    fn fixed_clock_is_constant() {
        let clock = FixedClock(1_700_000_000);

        assert_eq!(clock.now(), 1_700_000_000);
        assert_eq!((&clock).now(), 1_700_000_000);
    }
}

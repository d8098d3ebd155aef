//! Time and identifier sources injected into the service.

use chrono::Utc;
use models::Timestamp;
use uuid::Uuid;

pub trait Clock: Send + Sync {
    /// Current time in nanoseconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or_default()
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs; no uniqueness check against the stores is made.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_nanoseconds() {
        // 2020-01-01 in ns
        assert!(SystemClock.now() > 1_577_836_800_000_000_000);
    }

    #[test]
    fn uuid_ids_are_distinct_and_parse() {
        let a = UuidV4.next_id();
        let b = UuidV4.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}

use std::sync::atomic::{AtomicU64, Ordering};

use crate::utils::error::PacketError;

/// Per-kind counters of dropped packets, shared by every datagram task.
#[derive(Debug, Default)]
pub struct FaultStats {
    decode: AtomicU64,
    integrity: AtomicU64,
    unsupported_type: AtomicU64,
    no_topics: AtomicU64,
    unhandled: AtomicU64,
    handler_failed: AtomicU64,
    encode: AtomicU64,
}

/// Point-in-time copy of [`FaultStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultCounts {
    pub decode: u64,
    pub integrity: u64,
    pub unsupported_type: u64,
    pub no_topics: u64,
    pub unhandled: u64,
    pub handler_failed: u64,
    pub encode: u64,
}

impl FaultCounts {
    pub fn total(&self) -> u64 {
        self.decode
            + self.integrity
            + self.unsupported_type
            + self.no_topics
            + self.unhandled
            + self.handler_failed
            + self.encode
    }
}

impl FaultStats {
    pub fn record(&self, err: &PacketError) {
        let counter = match err {
            PacketError::Decode(_) => &self.decode,
            PacketError::Integrity => &self.integrity,
            PacketError::UnsupportedType(_) => &self.unsupported_type,
            PacketError::NoTopics => &self.no_topics,
            PacketError::HandlerAbsent(_) => &self.unhandled,
            PacketError::Handler(_) => &self.handler_failed,
            PacketError::Encode(_) => &self.encode,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> FaultCounts {
        FaultCounts {
            decode: self.decode.load(Ordering::Relaxed),
            integrity: self.integrity.load(Ordering::Relaxed),
            unsupported_type: self.unsupported_type.load(Ordering::Relaxed),
            no_topics: self.no_topics.load(Ordering::Relaxed),
            unhandled: self.unhandled.load(Ordering::Relaxed),
            handler_failed: self.handler_failed.load(Ordering::Relaxed),
            encode: self.encode.load(Ordering::Relaxed),
        }
    }
}

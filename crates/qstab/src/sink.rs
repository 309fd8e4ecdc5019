//! Thread-safe output sink.
//!
//! Entity serialization itself is pure; the one shared resource is the
//! output byte stream. [`EntitySink`] guards it with a mutex held only for
//! the duration of one entity's completed buffer write, so lines from
//! different entities never interleave mid-line while entity blocks may
//! land in any relative order.

use std::io::{self, Write};
use std::sync::Mutex;

use zstd::stream::write::Encoder;

use crate::codec::encode_entity;
use crate::error::EncodeError;
use crate::model::Entity;

/// Append-only destination for serialized entities.
///
/// Shareable across worker threads; every call encodes into a private
/// buffer first and commits it with a single locked write, so a failed
/// entity writes nothing.
#[derive(Debug)]
pub struct EntitySink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> EntitySink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Serializes one entity and appends its lines atomically.
    pub fn write_entity(&self, entity: &Entity) -> Result<(), EncodeError> {
        let encoded = encode_entity(entity)?;
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| {
            // A panicked holder cannot have written a partial entity: the
            // lock is only held across one write_all.
            poisoned.into_inner()
        });
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> Result<(), EncodeError> {
        let mut writer = self.writer.lock().unwrap_or_else(|p| p.into_inner());
        writer.flush()?;
        Ok(())
    }

    /// Releases the underlying writer, e.g. to finish a compressor.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Wraps a writer in a streaming zstd encoder.
///
/// The returned encoder buffers; callers must `finish()` it (directly or
/// via [`EntitySink::into_inner`]) to produce a valid frame.
pub fn zstd_writer<W: Write>(writer: W, level: i32) -> io::Result<Encoder<'static, W>> {
    Encoder::new(writer, level)
}

//! The role-tagged scratch buffer.

use std::fmt;
use std::io;
use std::ops::{Deref, DerefMut};

use bytes::{BufMut, Bytes, BytesMut};

use super::Role;

/// A reusable byte buffer handed out by a role pool.
///
/// The role tag is fixed when the buffer is allocated, so a buffer always
/// finds its way back to the pool it came from. Writes append; reads see the
/// bytes written since the buffer was acquired.
pub struct ScratchBuffer {
    role: Role,
    data: BytesMut,
}

impl ScratchBuffer {
    pub(crate) fn with_capacity(role: Role, capacity: usize) -> Self {
        Self {
            role,
            data: BytesMut::with_capacity(capacity),
        }
    }

    pub(crate) fn from_parts(role: Role, data: BytesMut) -> Self {
        Self { role, data }
    }

    pub(crate) fn into_parts(self) -> (Role, BytesMut) {
        (self.role, self.data)
    }

    /// Returns the role this buffer belongs to.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns an appending writer over the buffer.
    ///
    /// Only [`BufMut`] is exposed, so the pooled storage cannot be split off
    /// or frozen while the buffer is on loan.
    pub fn writer(&mut self) -> &mut impl BufMut {
        &mut self.data
    }

    /// Clears the buffer without deallocating.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Appends `data`.
    pub fn extend_from_slice(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }

    /// Reserves room for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Copies the written bytes into an independently owned [`Bytes`].
    ///
    /// The snapshot stays valid after this buffer is released.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.data)
    }
}

impl Deref for ScratchBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for ScratchBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl AsRef<[u8]> for ScratchBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl io::Write for ScratchBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for ScratchBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScratchBuffer")
            .field("role", &self.role)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

//! A positioned byte source over a seekable reader.
//!
//! The decoder constantly compares positions and lengths
//! against the total stream size,
//! so both are tracked here instead of querying the reader each time.
use byteordered::{ByteOrdered, Endianness};
use std::io::{self, Read, Seek, SeekFrom};

/// A seekable byte source which keeps track of
/// its current position and total length.
#[derive(Debug)]
pub struct Source<S> {
    inner: S,
    pos: u64,
    len: u64,
}

impl<S> Source<S>
where
    S: Read + Seek,
{
    /// Wrap the given reader.
    ///
    /// Decoding starts at the reader's current position.
    pub fn new(mut inner: S) -> io::Result<Self> {
        let pos = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(pos))?;
        Ok(Source { inner, pos, len })
    }

    /// The current position in bytes.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The total length of the stream in bytes.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether the stream is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of bytes between the current position and the end.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.pos)
    }

    /// Move to the given absolute position,
    /// never beyond the end of the stream.
    pub fn seek(&mut self, pos: u64) -> io::Result<()> {
        let pos = pos.min(self.len);
        if pos != self.pos {
            self.pos = self.inner.seek(SeekFrom::Start(pos))?;
        }
        Ok(())
    }

    /// Move forward by the given number of bytes.
    pub fn skip(&mut self, n: u64) -> io::Result<()> {
        self.seek(self.pos.saturating_add(n))
    }

    /// Move backward by the given number of bytes.
    pub fn rewind(&mut self, n: u64) -> io::Result<()> {
        self.seek(self.pos.saturating_sub(n))
    }

    pub fn read_u16(&mut self, order: Endianness) -> io::Result<u16> {
        let out = ByteOrdered::runtime(&mut self.inner, order).read_u16();
        self.track(2, out)
    }

    pub fn read_i32(&mut self, order: Endianness) -> io::Result<i32> {
        let out = ByteOrdered::runtime(&mut self.inner, order).read_i32();
        self.track(4, out)
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        let out = self.inner.read_exact(buf);
        self.track(buf.len() as u64, out)
    }

    /// Read exactly `n` bytes into a new buffer.
    pub fn read_bytes(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0; n];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }

    fn track<T>(&mut self, n: u64, out: io::Result<T>) -> io::Result<T> {
        match out {
            Ok(v) => {
                self.pos += n;
                Ok(v)
            }
            Err(e) => {
                // the reader may have advanced by an unknown amount
                self.pos = self.inner.stream_position().unwrap_or(self.len);
                Err(e)
            }
        }
    }
}

impl<S> Source<S> {
    /// Recover the inner reader.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::Source;
    use byteordered::Endianness;
    use std::io::Cursor;

    #[test]
    fn tracks_position_and_length() {
        let data: &[u8] = &[0x08, 0x00, 0x10, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let mut src = Source::new(Cursor::new(data)).unwrap();
        assert_eq!(src.len(), 9);
        assert_eq!(src.read_u16(Endianness::Little).unwrap(), 0x0008);
        assert_eq!(src.read_u16(Endianness::Big).unwrap(), 0x1000);
        assert_eq!(src.position(), 4);
        assert_eq!(src.read_i32(Endianness::Little).unwrap(), -1);
        assert_eq!(src.remaining(), 1);

        // reading past the end fails
        assert!(src.read_u16(Endianness::Little).is_err());

        src.rewind(8).unwrap();
        assert_eq!(src.position(), 1);
        src.skip(100).unwrap();
        assert_eq!(src.position(), 9);
    }

    #[test]
    fn starts_at_current_position() {
        let mut cursor = Cursor::new(vec![0_u8; 16]);
        cursor.set_position(4);
        let src = Source::new(cursor).unwrap();
        assert_eq!(src.position(), 4);
        assert_eq!(src.remaining(), 12);
    }
}

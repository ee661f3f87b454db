//! Output side of a conversion: count units, or count and write them.

use crate::GbkError;

pub(crate) trait Sink<T> {
    /// Emits the units produced by the input sequence at `position`.
    ///
    /// Either all of `units` are accepted or none are.
    fn emit(&mut self, units: &[T], position: usize) -> Result<(), GbkError>;

    fn len(&self) -> usize;

    fn mode(&self) -> &'static str;
}

/// Sizing mode.
#[derive(Debug, Default)]
pub(crate) struct Measure {
    len: usize,
}

impl<T> Sink<T> for Measure {
    #[inline]
    fn emit(&mut self, units: &[T], _position: usize) -> Result<(), GbkError> {
        self.len += units.len();
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn mode(&self) -> &'static str {
        "measure"
    }
}

/// Fill mode over a caller-owned buffer.
#[derive(Debug)]
pub(crate) struct Fill<'a, T> {
    buf: &'a mut [T],
    len: usize,
}

impl<'a, T> Fill<'a, T> {
    pub(crate) fn new(buf: &'a mut [T]) -> Self {
        Self { buf, len: 0 }
    }
}

impl<T: Copy> Sink<T> for Fill<'_, T> {
    #[inline]
    fn emit(&mut self, units: &[T], position: usize) -> Result<(), GbkError> {
        let end = self.len + units.len();
        let capacity = self.buf.len();
        let dst = self
            .buf
            .get_mut(self.len..end)
            .ok_or(GbkError::OutputTooSmall { position, capacity })?;
        dst.copy_from_slice(units);
        self.len = end;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn mode(&self) -> &'static str {
        "fill"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_without_writing() {
        let mut sink = Measure::default();
        Sink::<u16>::emit(&mut sink, &[1, 2], 0).unwrap();
        Sink::<u16>::emit(&mut sink, &[3], 1).unwrap();
        assert_eq!(Sink::<u16>::len(&sink), 3);
    }

    #[test]
    fn fill_writes_in_order() {
        let mut buf = [0u8; 4];
        let mut sink = Fill::new(&mut buf);
        sink.emit(&[0xCA, 0xC0], 0).unwrap();
        sink.emit(&[0x21], 1).unwrap();
        assert_eq!(sink.len(), 3);
        assert_eq!(buf, [0xCA, 0xC0, 0x21, 0x00]);
    }

    #[test]
    fn fill_rejects_partial_group() {
        let mut buf = [0u16; 3];
        let mut sink = Fill::new(&mut buf);
        sink.emit(&[0x41, 0x42], 0).unwrap();
        assert_eq!(
            sink.emit(&[0xD83D, 0xDE00], 2),
            Err(GbkError::OutputTooSmall {
                position: 2,
                capacity: 3
            })
        );
        assert_eq!(sink.len(), 2);
        assert_eq!(buf, [0x41, 0x42, 0x00]);
    }
}

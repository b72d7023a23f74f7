//! Stream adapters built on [`Scalar::marshal_binary`] and
//! [`Scalar::unmarshal_binary`].

use crate::{Result, Scalar};
use alloc::vec;
use std::io::{Read, Write};

/// Write the binary encoding of `s` to `w`.
///
/// Returns the number of bytes written, which is always `s.marshal_size()`.
pub fn scalar_marshal_to<S, W>(s: &S, w: &mut W) -> Result<usize>
where
    S: Scalar,
    W: Write + ?Sized,
{
    let buf = s.marshal_binary()?;
    w.write_all(&buf)?;
    log::trace!("wrote {} scalar bytes", buf.len());
    Ok(buf.len())
}

/// Read exactly `s.marshal_size()` bytes from `r` and decode them into `s`.
///
/// A reader that ends early surfaces as [`Error::Io`](crate::Error::Io) with
/// [`std::io::ErrorKind::UnexpectedEof`]; `s` is not modified in that case.
pub fn scalar_unmarshal_from<S, R>(s: &mut S, r: &mut R) -> Result<usize>
where
    S: Scalar,
    R: Read + ?Sized,
{
    let mut buf = vec![0u8; s.marshal_size()];
    r.read_exact(&mut buf)?;
    log::trace!("read {} scalar bytes", buf.len());
    s.unmarshal_binary(&buf)?;
    Ok(buf.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, dev::tests::Mod251};
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[test]
    fn marshal_to_writes_encoding() {
        let mut out = Vec::new();
        let n = Mod251(42).marshal_to(&mut out).unwrap();
        assert_eq!(n, 1);
        assert_eq!(out, [42]);
    }

    #[test]
    fn unmarshal_from_reads_exactly_one_encoding() {
        let mut input: &[u8] = &[7, 9];
        let mut s = Mod251::default();
        assert_eq!(s.unmarshal_from(&mut input).unwrap(), 1);
        assert_eq!(s, Mod251(7));
        assert_eq!(input, [9]);
    }

    #[test]
    fn unmarshal_from_short_reader_is_io_error() {
        let mut input: &[u8] = &[];
        let mut s = Mod251(3);
        match s.unmarshal_from(&mut input) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(s, Mod251(3));
    }

    #[test]
    fn unmarshal_from_propagates_decode_error() {
        let mut input: &[u8] = &[255];
        let mut s = Mod251(3);
        assert!(matches!(
            s.unmarshal_from(&mut input),
            Err(Error::NonCanonical)
        ));
    }

    #[test]
    fn marshal_to_propagates_writer_error() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        match Mod251(1).marshal_to(&mut Full) {
            Err(Error::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::WriteZero);
                assert_eq!(e.to_string(), "full");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn display_renders_hex() {
        assert_eq!(Mod251(10).to_string(), String::from("0a"));
    }
}

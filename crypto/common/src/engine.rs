use core::fmt;

/// Failure taxonomy shared by every engine in the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// `input` was called after the digest had been produced, without an
    /// intervening `reset`.
    AlreadyFinalized,
    /// An internal invariant was violated; only `reset` recovers the engine.
    Corrupted,
    /// A caller-provided output slice does not match the digest size.
    InvalidLength { expected: usize, got: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyFinalized => f.write_str("input after finalize without reset"),
            Self::Corrupted => f.write_str("engine state is corrupted until reset"),
            Self::InvalidLength { expected, got } => {
                write!(f, "output buffer holds {got} bytes, digest needs {expected}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Lifecycle of one streaming digest computation.
///
/// A failure is latched, not returned at the point of misuse: `input` keeps
/// its infallible signature and every later `result` reports the cause.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Streaming,
    Finalized,
    Failed(Error),
}

/// Streaming hash primitive over `BLOCK_SIZE`-byte blocks producing
/// `HASH_SIZE`-byte digests.
///
/// Feeding the same bytes always yields the same digest regardless of how
/// the caller chunked its `input` calls, and the one-shot `digest` is the
/// streaming path internally.
pub trait HashEngine<const BLOCK_SIZE: usize, const HASH_SIZE: usize>: Clone + Default {
    /// Digest width in bits.
    const HASH_SIZE_BITS: usize = HASH_SIZE * 8;

    /// Restores the state of a freshly constructed engine.
    fn reset(&mut self);

    /// Absorbs `data` into the running digest.
    ///
    /// Calling this after the digest has been produced latches
    /// [`Error::AlreadyFinalized`]; the bytes are discarded.
    fn input(&mut self, data: &[u8]);

    /// Finalizes if necessary and returns the digest.
    ///
    /// Repeatable: every call after the first returns the same bytes until
    /// `reset`. Reports the latched failure instead of producing output
    /// from a misused engine.
    fn result(&mut self) -> Result<[u8; HASH_SIZE], Error>;

    /// Like [`result`](Self::result), serializing into a caller slice of
    /// exactly `HASH_SIZE` bytes.
    fn result_into(&mut self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() != HASH_SIZE {
            return Err(Error::InvalidLength {
                expected: HASH_SIZE,
                got: out.len(),
            });
        }
        out.copy_from_slice(&self.result()?);
        Ok(())
    }

    /// One-shot digest of `data`.
    #[must_use]
    fn digest(data: &[u8]) -> [u8; HASH_SIZE];
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::Error;

    #[test]
    fn display_names_the_misuse() {
        assert_eq!(
            Error::AlreadyFinalized.to_string(),
            "input after finalize without reset"
        );
        let err = Error::InvalidLength {
            expected: 32,
            got: 20,
        };
        assert_eq!(err.to_string(), "output buffer holds 20 bytes, digest needs 32");
    }
}

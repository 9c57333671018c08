use thiserror;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// State decoding was given a bit string whose length is not 25 lanes
    /// of a power-of-two width w <= 64.
    #[error("bit length {0} is not a valid Keccak state width")]
    InvalidStateWidth(usize),

    /// A SHA3 fixed digest was requested with a length outside
    /// {224, 256, 384, 512}.
    #[error("unsupported SHA3 digest length {0}")]
    UnsupportedDigestLength(usize),

    /// A bit group wider than 8 bits was handed to the byte packer.
    #[error("bit group of length {0} does not fit in one byte")]
    BitGroupTooWide(usize),
}

pub type Result<T> = core::result::Result<T, Error>;

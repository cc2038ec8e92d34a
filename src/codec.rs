// SPDX-License-Identifier: Apache-2.0

// Values stored in a FileBackedDictionary must know how to turn
// themselves into a byte blob and back. The store is agnostic to
// what the value represents; the blob is written verbatim as the
// entry file's content.

use crate::errors::{DecodeError, EncodeError};

pub trait Codec: Sized {
    fn encode(&self) -> Result<Vec<u8>, EncodeError>;
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError>;
}

// Raw bytes are their own codec; handy for tests and for callers
// which do their own serialization.
impl Codec for Vec<u8> {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(self.clone())
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(bytes.to_vec())
    }
}

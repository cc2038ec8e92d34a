// SPDX-License-Identifier: Apache-2.0

// fbdict is a string-keyed dictionary whose entries are durably
// backed by one file each inside a dedicated directory. Construction
// loads whatever valid entries the directory holds; every mutation
// is written through to disk before it becomes visible in memory.
// Values are anything implementing the Codec trait; image.rs ships
// the bitmap payload the gallery demo stores.

pub mod codec;
pub mod entry_file;
pub mod errors;
pub mod fbdict;
pub mod filename;
pub mod gallery;
pub mod image;
pub mod notifier;

pub use crate::codec::Codec;
pub use crate::errors::{DecodeError, EncodeError, StoreError};
pub use crate::fbdict::FileBackedDictionary;
pub use crate::notifier::StoreEvent;

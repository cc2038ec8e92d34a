// SPDX-License-Identifier: Apache-2.0

// The payload observed in the wild: a bitmap image wrapped for
// storage. ImageValue plays the role UIImageCodable plays on iOS:
// the image serializes to one opaque blob kept under a fixed
// "image_data" field, and decoding rebuilds the bitmap from that
// blob or fails.

use serde::{Deserialize, Serialize};

use crate::codec::Codec;
use crate::errors::{DecodeError, EncodeError};

const MAGIC: &[u8; 4] = b"FBMP";
const HEADER_LEN: usize = 12;
const BYTES_PER_PIXEL: usize = 4;

// RGBA8, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    fn expected_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * BYTES_PER_PIXEL
    }

    pub fn to_blob(&self) -> Result<Vec<u8>, EncodeError> {
        if self.pixels.len() != self.expected_len() {
            return Err(EncodeError::InvalidValue(format!(
                "{}x{} bitmap with {} pixel bytes",
                self.width,
                self.height,
                self.pixels.len()
            )));
        }

        let mut blob = Vec::with_capacity(HEADER_LEN + self.pixels.len());
        blob.extend_from_slice(MAGIC);
        blob.extend_from_slice(&self.width.to_le_bytes());
        blob.extend_from_slice(&self.height.to_le_bytes());
        blob.extend_from_slice(&self.pixels);
        Ok(blob)
    }

    pub fn from_blob(blob: &[u8]) -> Result<Self, DecodeError> {
        if blob.len() < HEADER_LEN || &blob[..4] != MAGIC {
            return Err(DecodeError::Corrupt(
                "blob is not a bitmap image".to_string(),
            ));
        }

        let width = u32::from_le_bytes([blob[4], blob[5], blob[6], blob[7]]);
        let height = u32::from_le_bytes([blob[8], blob[9], blob[10], blob[11]]);
        let pixels = &blob[HEADER_LEN..];

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(pixels.len()) {
            return Err(DecodeError::Corrupt(format!(
                "{}x{} bitmap with {} pixel bytes",
                width,
                height,
                pixels.len()
            )));
        }

        Ok(Self {
            width,
            height,
            pixels: pixels.to_vec(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageValue {
    pub image: Bitmap,
}

#[derive(Serialize, Deserialize)]
struct Encoded {
    image_data: Vec<u8>,
}

impl ImageValue {
    pub fn new(image: Bitmap) -> Self {
        Self { image }
    }
}

impl Codec for ImageValue {
    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let image_data = self.image.to_blob()?;
        Ok(serde_json::to_vec(&Encoded { image_data })?)
    }

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let encoded: Encoded = serde_json::from_slice(bytes)?;
        let image = Bitmap::from_blob(&encoded.image_data)?;
        Ok(Self { image })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_round_trip() -> Result<()> {
        let value = ImageValue::new(Bitmap::solid(4, 3, [255, 0, 0, 255]));
        let bytes = value.encode()?;
        let decoded = ImageValue::decode(&bytes)?;
        assert_eq!(decoded, value);
        Ok(())
    }

    #[test]
    fn test_blob_lives_under_fixed_field() -> Result<()> {
        let value = ImageValue::new(Bitmap::solid(1, 1, [0, 0, 0, 255]));
        let bytes = value.encode()?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert!(json.get("image_data").is_some());
        Ok(())
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        assert!(matches!(
            ImageValue::decode(b"not json at all"),
            Err(DecodeError::Serde(_))
        ));

        // valid wrapper, garbage blob
        let bytes = serde_json::to_vec(&Encoded {
            image_data: vec![0, 1, 2, 3],
        })
        .unwrap();
        assert!(matches!(
            ImageValue::decode(&bytes),
            Err(DecodeError::Corrupt(_))
        ));
    }

    #[test]
    fn test_truncated_pixel_data_fails_to_decode() {
        let mut blob = Bitmap::solid(2, 2, [1, 2, 3, 4]).to_blob().unwrap();
        blob.truncate(blob.len() - 3);
        assert!(matches!(
            Bitmap::from_blob(&blob),
            Err(DecodeError::Corrupt(_))
        ));
    }

    #[test]
    fn test_mismatched_dimensions_fail_to_encode() {
        let bitmap = Bitmap {
            width: 10,
            height: 10,
            pixels: vec![0; 7],
        };
        assert!(matches!(
            bitmap.to_blob(),
            Err(EncodeError::InvalidValue(_))
        ));
    }
}

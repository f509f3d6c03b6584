//! Flat vector block: contiguous f32 storage with exhaustive
//! squared-Euclidean scan and a little-endian binary file format.

use scout_core::errors::IndexError;

/// File magic for the binary vector block.
const MAGIC: &[u8; 4] = b"SCIX";
/// Format version.
const FORMAT_VERSION: u32 = 1;

/// Contiguous vector storage of fixed dimension.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    dimension: usize,
    data: Vec<f32>,
}

impl FlatIndex {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            data: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.data.len() / self.dimension
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a vector. Caller guarantees the length matches `dimension`.
    pub fn push(&mut self, vector: &[f32]) {
        debug_assert_eq!(vector.len(), self.dimension);
        self.data.extend_from_slice(vector);
    }

    /// Drop all vectors, keeping the dimension.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exhaustive scan: the `k` nearest vectors by squared Euclidean
    /// distance, as `(ordinal, distance)` ascending. Ties break by ordinal.
    pub fn search(&self, query: &[f32], k: usize) -> Vec<(usize, f32)> {
        let mut ranked: Vec<(usize, f32)> = (0..self.len())
            .map(|i| {
                let start = i * self.dimension;
                let row = &self.data[start..start + self.dimension];
                let dist: f32 = row
                    .iter()
                    .zip(query)
                    .map(|(a, b)| {
                        let d = a - b;
                        d * d
                    })
                    .sum();
                (i, dist)
            })
            .collect();

        ranked.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(k);
        ranked
    }

    /// Serialize: magic, version, dimension, count, then f32 LE data.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.data.len() * 4);
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        out.extend_from_slice(&(self.dimension as u32).to_le_bytes());
        out.extend_from_slice(&(self.len() as u32).to_le_bytes());
        for v in &self.data {
            out.extend_from_slice(&v.to_le_bytes());
        }
        out
    }

    /// Parse the binary format, validating header and payload length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IndexError> {
        if bytes.len() < 16 {
            return Err(IndexError::Malformed {
                reason: format!("header truncated: {} bytes", bytes.len()),
            });
        }
        if &bytes[0..4] != MAGIC {
            return Err(IndexError::Malformed {
                reason: "bad magic".to_string(),
            });
        }
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if version != FORMAT_VERSION {
            return Err(IndexError::Malformed {
                reason: format!("unsupported format version {version}"),
            });
        }
        let dimension = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]) as usize;
        let count = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]) as usize;

        let payload = &bytes[16..];
        let expected = dimension * count * 4;
        if payload.len() != expected {
            return Err(IndexError::Malformed {
                reason: format!(
                    "payload length {} does not match {count} x {dimension} vectors",
                    payload.len()
                ),
            });
        }

        let data = payload
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        Ok(Self { dimension, data })
    }
}

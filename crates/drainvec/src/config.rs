//! Block sizing configuration.

/// Configuration for a [`DrainVec`](crate::DrainVec)'s block store.
///
/// Controls how many elements each block holds. The capacity is fixed for
/// the life of a container: every block it ever allocates has the same
/// element count, so `capacity()` is always an exact multiple of it.
///
/// Larger blocks amortise allocation cost over more appends; smaller blocks
/// waste less tail memory per append stream and let a draining pass return
/// memory in finer steps. The default targets a fixed byte budget per block
/// rather than a fixed element count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of elements per block. Always at least 1.
    pub block_capacity: usize,
}

impl StoreConfig {
    /// Default byte budget per block: 8MB.
    pub const DEFAULT_BLOCK_BYTES: usize = 8 * 1024 * 1024;

    /// Create a config with the default byte budget for element type `T`.
    ///
    /// The capacity is `DEFAULT_BLOCK_BYTES / size_of::<T>()`, clamped to at
    /// least 1. Zero-sized types get `DEFAULT_BLOCK_BYTES` elements per
    /// block so the index arithmetic stays well-defined.
    pub fn for_element<T>() -> Self {
        let elem_bytes = std::mem::size_of::<T>().max(1);
        Self {
            block_capacity: (Self::DEFAULT_BLOCK_BYTES / elem_bytes).max(1),
        }
    }

    /// Create a config with an explicit per-block element count.
    ///
    /// A capacity of 0 is clamped to 1.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        Self {
            block_capacity: block_capacity.max(1),
        }
    }

    /// Storage footprint of a single full block in bytes, for element type `T`.
    pub fn block_bytes<T>(&self) -> usize {
        self.block_capacity * std::mem::size_of::<T>()
    }
}

use core::alloc::Layout;

use flx_types::usz;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Returned by checked indexing on a [`UniquePtr<[T]>`](crate::UniquePtr)
/// when `index >= len`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of bounds for a slice of length {len}")]
pub struct IndexError {
    pub index: usz,
    pub len: usz,
}

/// Returned by [`try_make_unique`](crate::try_make_unique) when the global
/// allocator cannot satisfy the request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("memory allocation of {size} bytes (align {align}) failed")]
pub struct AllocError {
    pub size: usz,
    pub align: usz,
}

impl AllocError {
    #[inline]
    pub(crate) const fn new(layout: Layout) -> Self {
        Self {
            size: layout.size(),
            align: layout.align(),
        }
    }
}

/// Returned by checked access through a null [`UniquePtr`](crate::UniquePtr).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("access through a null `UniquePtr`")]
pub struct NullPtrError;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        let e = IndexError { index: 4, len: 3 };
        assert_eq!(
            e.to_string(),
            "index 4 is out of bounds for a slice of length 3"
        );

        let e = AllocError::new(Layout::new::<u64>());
        assert_eq!(e.size, 8);
        assert_eq!(e.align, align_of::<u64>());
        assert!(e.to_string().starts_with("memory allocation of 8 bytes"));

        assert_eq!(NullPtrError.to_string(), "access through a null `UniquePtr`");
    }
}

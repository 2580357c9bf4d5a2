use alloc::alloc::{Layout, alloc};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ptr::NonNull;

use flx_types::usz;

use crate::{AllocError, UniquePtr};

// -----------------------------------------------------------------------------
// Factories

/// Allocates `value` on the heap and returns its sole owner.
///
/// Allocation failure is handled by the global allocator's default
/// (usually an abort), see [`try_make_unique`] for a fallible version.
///
/// # Examples
///
/// ```
/// use flx_ptr::make_unique;
///
/// let ptr = make_unique(42);
///
/// assert!(ptr.is_some());
/// assert_eq!(*ptr, 42);
/// ```
#[inline]
pub fn make_unique<T>(value: T) -> UniquePtr<T> {
    UniquePtr::from_box(Box::new(value))
}

/// Allocates the value returned by `f` and returns its sole owner.
///
/// # Examples
///
/// ```
/// use flx_ptr::make_unique_with;
///
/// let ptr = make_unique_with(|| [0u8; 16]);
/// assert_eq!(ptr.len(), 16);
/// ```
#[inline]
pub fn make_unique_with<T>(f: impl FnOnce() -> T) -> UniquePtr<T> {
    make_unique(f())
}

/// Fallible version of [`make_unique`].
///
/// On allocation failure `value` is dropped and an [`AllocError`]
/// describing the requested layout is returned.
///
/// # Examples
///
/// ```
/// use flx_ptr::try_make_unique;
///
/// let ptr = try_make_unique(String::from("flx")).unwrap();
/// assert_eq!(*ptr, "flx");
/// ```
pub fn try_make_unique<T>(value: T) -> Result<UniquePtr<T>, AllocError> {
    let layout = Layout::new::<T>();

    // `Box` does not allocate for zero-sized types.
    if layout.size() == 0 {
        return Ok(make_unique(value));
    }

    // SAFETY: `layout` has a non-zero size.
    let raw = unsafe { alloc(layout) }.cast::<T>();

    let Some(ptr) = NonNull::new(raw) else {
        log::error!(
            "failed to allocate {} bytes for `{}`",
            layout.size(),
            core::any::type_name::<T>()
        );
        return Err(AllocError::new(layout));
    };

    // SAFETY:
    // - `ptr` is freshly allocated by the global allocator with the layout
    //   of `T`, which is what `Box::from_raw` expects.
    // - `ptr` is valid for writes and properly aligned.
    unsafe {
        ptr.write(value);
        Ok(UniquePtr::from_non_null(ptr))
    }
}

/// Allocates a block of `len` default values.
///
/// # Examples
///
/// ```
/// use flx_ptr::make_unique_slice;
///
/// let ptr = make_unique_slice::<u32>(4);
///
/// assert_eq!(ptr.len(), 4);
/// assert_eq!(ptr[3], 0);
/// ```
pub fn make_unique_slice<T: Default>(len: usz) -> UniquePtr<[T]> {
    (0..len).map(|_| T::default()).collect()
}

/// Takes over the elements of `values` as an owned block.
///
/// Excess capacity is released first, so the pointer owns exactly
/// `values.len()` elements.
#[inline]
pub fn make_unique_slice_from<T>(values: Vec<T>) -> UniquePtr<[T]> {
    UniquePtr::from_box(values.into_boxed_slice())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn make_unique_holds_value() {
        let ptr = make_unique(String::from("value"));
        assert!(ptr.is_some());
        assert_eq!(ptr.as_str(), "value");

        let ptr = make_unique_with(|| vec![1, 2, 3]);
        assert_eq!(ptr.len(), 3);
    }

    #[test]
    fn try_make_unique_sized_and_zst() {
        let ptr = try_make_unique(0xABCDu32).unwrap();
        assert_eq!(*ptr, 0xABCD);
        assert!(ptr.as_ptr().is_aligned());

        let unit = try_make_unique(()).unwrap();
        assert!(unit.is_some());
        assert_eq!(unit.into_inner(), Some(()));
    }

    #[test]
    fn try_make_unique_frees_on_drop() {
        use core::cell::Cell;

        struct DropCounter<'a>(&'a Cell<usize>, [u64; 4]);

        impl Drop for DropCounter<'_> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let count = Cell::new(0);
        let ptr = try_make_unique(DropCounter(&count, [7; 4])).unwrap();
        assert_eq!(ptr.1, [7; 4]);

        drop(ptr);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn slices() {
        let ptr = make_unique_slice::<i64>(3);
        assert_eq!(ptr.as_slice(), &[0, 0, 0]);

        let mut values = Vec::with_capacity(16);
        values.extend([1u8, 2, 3]);
        let ptr = make_unique_slice_from(values);
        assert_eq!(ptr.len(), 3);
        assert_eq!(ptr[2], 3);

        assert!(make_unique_slice::<u8>(0).is_some());
    }
}

use alloc::boxed::Box;
use core::ops::{Index, IndexMut};

use flx_types::usz;

use crate::{IndexError, UniquePtr};

// -----------------------------------------------------------------------------
// Array-backed UniquePtr

impl<T> UniquePtr<[T]> {
    /// Number of elements in the owned block, `0` if null.
    #[inline]
    pub fn len(&self) -> usz {
        self.get().map_or(0, <[T]>::len)
    }

    /// Returns the owned block, or an empty slice if null.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.get().unwrap_or(&[])
    }

    /// Returns the owned block mutably, or an empty slice if null.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.get_mut() {
            Some(slice) => slice,
            None => &mut [],
        }
    }

    /// Returns the element at `index`, or an error if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::{IndexError, make_unique_slice_from};
    ///
    /// let ptr = make_unique_slice_from(vec![1, 2, 3]);
    ///
    /// assert_eq!(ptr.try_index(1), Ok(&2));
    /// assert_eq!(ptr.try_index(3), Err(IndexError { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn try_index(&self, index: usz) -> Result<&T, IndexError> {
        let slice = self.as_slice();
        let len = slice.len();
        slice.get(index).ok_or(IndexError { index, len })
    }

    /// Mutable version of [`try_index`](Self::try_index).
    #[inline]
    pub fn try_index_mut(&mut self, index: usz) -> Result<&mut T, IndexError> {
        let slice = self.as_mut_slice();
        let len = slice.len();
        slice.get_mut(index).ok_or(IndexError { index, len })
    }

    /// Indexes the owned block without doing bounds checks.
    ///
    /// The element is found by offsetting the base address by `index`.
    ///
    /// # Safety
    /// `index` must be in-bounds, which also implies `self` is not null.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::make_unique_slice_from;
    ///
    /// let ptr = make_unique_slice_from(vec![1, 2, 3, 4]);
    ///
    /// assert_eq!(unsafe { *ptr.get_unchecked(2) }, 3);
    /// ```
    #[cfg_attr(any(feature = "debug", debug_assertions), track_caller)]
    #[cfg_attr(not(any(feature = "debug", debug_assertions)), inline(always))]
    pub unsafe fn get_unchecked(&self, index: usz) -> &T {
        // debug_assert! only follows `debug_assertions`, the `debug`
        // feature needs the #[cfg] form.
        #[cfg(any(feature = "debug", debug_assertions))]
        assert!(index < self.len(), "tried to index out-of-bounds of a `UniquePtr<[T]>`");

        // SAFETY: `index` is in-bounds so the resulting pointer is valid to deref.
        unsafe { &*self.as_slice().as_ptr().add(index) }
    }

    /// Mutable version of [`get_unchecked`](Self::get_unchecked).
    ///
    /// # Safety
    /// `index` must be in-bounds, which also implies `self` is not null.
    #[cfg_attr(any(feature = "debug", debug_assertions), track_caller)]
    #[cfg_attr(not(any(feature = "debug", debug_assertions)), inline(always))]
    pub unsafe fn get_unchecked_mut(&mut self, index: usz) -> &mut T {
        #[cfg(any(feature = "debug", debug_assertions))]
        assert!(index < self.len(), "tried to index out-of-bounds of a `UniquePtr<[T]>`");

        // SAFETY: `index` is in-bounds so the resulting pointer is valid to deref.
        unsafe { &mut *self.as_mut_slice().as_mut_ptr().add(index) }
    }
}

impl<T> Index<usz> for UniquePtr<[T]> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    #[track_caller]
    fn index(&self, index: usz) -> &T {
        match self.try_index(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usz> for UniquePtr<[T]> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usz) -> &mut T {
        match self.try_index_mut(index) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> FromIterator<T> for UniquePtr<[T]> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_box(iter.into_iter().collect::<Box<[T]>>())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{IndexError, UniquePtr, make_unique_slice};
    use core::cell::Cell;
    use core::ptr;

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn addresses_follow_pointer_arithmetic() {
        let mut block: UniquePtr<[u32]> = (0..8).collect();
        let base = block.as_slice().as_ptr();

        for i in 0..8 {
            assert!(ptr::eq(&block[i], base.wrapping_add(i)));
            assert!(ptr::eq(unsafe { block.get_unchecked(i) }, base.wrapping_add(i)));
            assert_eq!(block.try_index(i), Ok(&(i as u32)));
        }

        block[3] = 30;
        unsafe { *block.get_unchecked_mut(4) = 40 };
        *block.try_index_mut(5).unwrap() = 50;
        assert_eq!(&block.as_slice()[3..6], &[30, 40, 50]);
    }

    #[test]
    fn null_slice_is_empty() {
        let mut ptr = UniquePtr::<[u8]>::null();

        assert_eq!(ptr.len(), 0);
        assert!(ptr.as_slice().is_empty());
        assert!(ptr.as_mut_slice().is_empty());
        assert_eq!(ptr.try_index(0), Err(IndexError { index: 0, len: 0 }));
    }

    #[test]
    #[should_panic(expected = "index 2 is out of bounds for a slice of length 2")]
    fn index_out_of_bounds_panics() {
        let ptr = make_unique_slice::<u8>(2);
        let _value = ptr[2];
    }

    #[test]
    fn drops_every_element_once() {
        let count = Cell::new(0);

        let ptr: UniquePtr<[DropCounter<'_>]> = (0..5).map(|_| DropCounter(&count)).collect();
        assert_eq!(ptr.len(), 5);
        assert_eq!(count.get(), 0);

        drop(ptr);
        assert_eq!(count.get(), 5);
    }
}

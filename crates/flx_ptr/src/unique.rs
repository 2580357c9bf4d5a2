use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::ptr::{self, NonNull};

use flx_types::b8;

use crate::NullPtrError;

// -----------------------------------------------------------------------------
// UniquePtr

/// A nullable, single-owner pointer to a heap allocation.
///
/// # Ownership
///
/// The allocation is made by the global allocator with the layout of `T`,
/// exactly as `Box<T>` does, and this pointer is the only handle to it.
/// Dropping a non-null `UniquePtr` drops the pointee and frees the memory.
///
/// # move-only
///
/// - It cannot be cloned or copied.
/// - [`take`](Self::take) and [`move_from`](Self::move_from) transfer
///   ownership and leave the source null.
/// - A pointer can never be moved into itself: the borrow checker rejects
///   `a.move_from(&mut a)`.
///
/// ```compile_fail
/// use flx_ptr::UniquePtr;
///
/// fn is_clone<T: Clone>() {}
/// is_clone::<UniquePtr<i32>>();
/// ```
///
/// ```compile_fail
/// let mut a = flx_ptr::make_unique(1);
/// a.move_from(&mut a);
/// ```
///
/// # Examples
///
/// ```
/// use flx_ptr::{UniquePtr, make_unique};
///
/// let mut a = make_unique(String::from("flx"));
/// let mut b: UniquePtr<String> = UniquePtr::null();
///
/// b.move_from(&mut a);
///
/// assert!(a.is_null());
/// assert_eq!(b.as_str(), "flx");
/// ```
pub struct UniquePtr<T: ?Sized> {
    ptr: Option<NonNull<T>>,
    _marker: PhantomData<T>,
}

// SAFETY: `UniquePtr<T>` owns its `T` like `Box<T>` does.
unsafe impl<T: ?Sized + Send> Send for UniquePtr<T> {}
// SAFETY: `&UniquePtr<T>` only hands out `&T`.
unsafe impl<T: ?Sized + Sync> Sync for UniquePtr<T> {}

impl<T: ?Sized> Unpin for UniquePtr<T> {}

impl<T: ?Sized> Drop for UniquePtr<T> {
    fn drop(&mut self) {
        if let Some(ptr) = self.ptr.take() {
            // SAFETY: `ptr` came from `Box::into_raw` (or an equivalent
            // allocation) and no other handle owns it.
            drop(unsafe { Box::from_raw(ptr.as_ptr()) });
        }
    }
}

impl<T: ?Sized> UniquePtr<T> {
    /// Creates a pointer that owns nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::UniquePtr;
    ///
    /// let ptr = UniquePtr::<u32>::null();
    /// assert!(ptr.is_null());
    /// ```
    #[inline(always)]
    pub const fn null() -> Self {
        Self {
            ptr: None,
            _marker: PhantomData,
        }
    }

    /// Takes ownership of a boxed value. No allocation is performed.
    #[inline]
    pub fn from_box(value: Box<T>) -> Self {
        Self {
            // SAFETY: `Box::into_raw` never returns null.
            ptr: Some(unsafe { NonNull::new_unchecked(Box::into_raw(value)) }),
            _marker: PhantomData,
        }
    }

    /// Takes ownership of a non-null address.
    ///
    /// # Safety
    ///
    /// - `ptr` must be valid to pass to `Box::from_raw`, i.e. allocated by
    ///   the global allocator with the layout of `T` and pointing to a valid `T`.
    /// - No other owner may free or access `ptr` afterwards.
    #[inline(always)]
    pub const unsafe fn from_non_null(ptr: NonNull<T>) -> Self {
        Self {
            ptr: Some(ptr),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if no allocation is held.
    #[inline(always)]
    pub const fn is_null(&self) -> b8 {
        self.ptr.is_none()
    }

    /// Returns `true` if an allocation is held.
    ///
    /// This is the boolean conversion of the pointer.
    #[inline(always)]
    pub const fn is_some(&self) -> b8 {
        self.ptr.is_some()
    }

    /// Returns the held address without giving up ownership.
    #[inline(always)]
    pub const fn as_non_null(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Returns a shared reference to the pointee, or `None` if null.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: a held pointer is valid and uniquely owned by `self`.
        self.ptr.map(|p| unsafe { p.as_ref() })
    }

    /// Returns a mutable reference to the pointee, or `None` if null.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: a held pointer is valid and `&mut self` is exclusive.
        self.ptr.map(|mut p| unsafe { p.as_mut() })
    }

    /// Like [`get`](Self::get), but returns an error on a null pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::{NullPtrError, UniquePtr};
    ///
    /// let ptr = UniquePtr::<u8>::null();
    /// assert_eq!(ptr.try_get(), Err(NullPtrError));
    /// ```
    #[inline]
    pub fn try_get(&self) -> Result<&T, NullPtrError> {
        self.get().ok_or(NullPtrError)
    }

    /// Like [`get_mut`](Self::get_mut), but returns an error on a null pointer.
    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, NullPtrError> {
        self.get_mut().ok_or(NullPtrError)
    }

    /// Dereferences the pointer without checking for null.
    ///
    /// # Safety
    ///
    /// `self` must not be null.
    #[cfg_attr(any(feature = "debug", debug_assertions), track_caller)]
    #[cfg_attr(not(any(feature = "debug", debug_assertions)), inline(always))]
    pub unsafe fn as_ref_unchecked(&self) -> &T {
        #[cfg(any(feature = "debug", debug_assertions))]
        assert!(self.ptr.is_some(), "dereferenced a null `UniquePtr`");

        // SAFETY: the caller guarantees the pointer is held.
        unsafe { self.ptr.unwrap_unchecked().as_ref() }
    }

    /// Mutably dereferences the pointer without checking for null.
    ///
    /// # Safety
    ///
    /// `self` must not be null.
    #[cfg_attr(any(feature = "debug", debug_assertions), track_caller)]
    #[cfg_attr(not(any(feature = "debug", debug_assertions)), inline(always))]
    pub unsafe fn as_mut_unchecked(&mut self) -> &mut T {
        #[cfg(any(feature = "debug", debug_assertions))]
        assert!(self.ptr.is_some(), "dereferenced a null `UniquePtr`");

        // SAFETY: the caller guarantees the pointer is held.
        unsafe { self.ptr.unwrap_unchecked().as_mut() }
    }

    /// Moves the allocation out into a new pointer, leaving `self` null.
    ///
    /// Neither allocates nor frees.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::make_unique;
    ///
    /// let mut a = make_unique(7);
    /// let b = a.take();
    ///
    /// assert!(a.is_null());
    /// assert_eq!(*b, 7);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::null())
    }

    /// Drops the current allocation (if any) and takes over the one held by
    /// `other`, which is left null.
    ///
    /// This is the same as `*self = other.take()`.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) -> &mut Self {
        *self = other.take();
        self
    }

    /// Gives up ownership and returns the held address, leaving `self` null.
    ///
    /// The caller becomes responsible for freeing the allocation, normally
    /// through `Box::from_raw` or [`from_non_null`](Self::from_non_null).
    #[must_use = "losing the released pointer leaks the allocation"]
    pub fn release_non_null(&mut self) -> Option<NonNull<T>> {
        let ptr = self.ptr.take();
        if let Some(p) = ptr {
            log::trace!("`UniquePtr` released ownership of {p:p}");
        }
        ptr
    }

    /// Drops the current allocation (if any) and leaves `self` null.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::make_unique;
    ///
    /// let mut ptr = make_unique(1);
    /// ptr.reset();
    /// assert!(ptr.is_null());
    /// ```
    #[inline]
    pub fn reset(&mut self) {
        drop(self.take());
    }

    /// Drops the current allocation (if any) and takes ownership of `value`.
    ///
    /// `self` already holds `value` when the old pointee's `Drop` runs.
    #[inline]
    pub fn reset_with(&mut self, value: Box<T>) {
        drop(mem::replace(self, Self::from_box(value)));
    }

    /// Takes ownership of `value` and returns the previous pointee, if any,
    /// without dropping it.
    #[inline]
    pub fn replace(&mut self, value: Box<T>) -> Option<Box<T>> {
        mem::replace(self, Self::from_box(value)).into_box()
    }

    /// Converts into a `Box`, or `None` if null.
    #[inline]
    pub fn into_box(mut self) -> Option<Box<T>> {
        // SAFETY: the pointer was owned by `self`, which is now null.
        self.ptr
            .take()
            .map(|p| unsafe { Box::from_raw(p.as_ptr()) })
    }
}

impl<T> UniquePtr<T> {
    /// Takes ownership of a raw address, which may be null.
    ///
    /// # Safety
    ///
    /// If `ptr` is non-null:
    /// - it must be valid to pass to `Box::from_raw`.
    /// - no other owner may free or access it afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::UniquePtr;
    ///
    /// let raw = Box::into_raw(Box::new(5u16));
    /// let ptr = unsafe { UniquePtr::from_raw(raw) };
    /// assert_eq!(*ptr, 5);
    ///
    /// let null = unsafe { UniquePtr::<u16>::from_raw(core::ptr::null_mut()) };
    /// assert!(null.is_null());
    /// ```
    #[inline(always)]
    pub const unsafe fn from_raw(ptr: *mut T) -> Self {
        Self {
            ptr: NonNull::new(ptr),
            _marker: PhantomData,
        }
    }

    /// Returns the held address, or null.
    ///
    /// The pointer stays owned by `self`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        match self.ptr {
            Some(p) => p.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Returns the held address as a mutable pointer, or null.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        match self.ptr {
            Some(p) => p.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Gives up ownership and returns the held address (null if empty),
    /// leaving `self` null.
    ///
    /// # Examples
    ///
    /// ```
    /// use flx_ptr::make_unique;
    ///
    /// let mut ptr = make_unique(3);
    /// let raw = ptr.release();
    /// assert!(ptr.is_null());
    ///
    /// // SAFETY: `raw` was produced by `make_unique` and is no longer owned.
    /// let value = unsafe { Box::from_raw(raw) };
    /// assert_eq!(*value, 3);
    /// ```
    #[must_use = "losing the released pointer leaks the allocation"]
    #[inline]
    pub fn release(&mut self) -> *mut T {
        match self.release_non_null() {
            Some(p) => p.as_ptr(),
            None => ptr::null_mut(),
        }
    }

    /// Drops the current allocation (if any) and takes ownership of `ptr`,
    /// which may be null.
    ///
    /// # Safety
    ///
    /// Same as [`from_raw`](Self::from_raw). In particular `ptr` must not be
    /// the address currently held by `self`.
    #[inline]
    pub unsafe fn reset_raw(&mut self, ptr: *mut T) {
        // SAFETY: upheld by the caller.
        drop(mem::replace(self, unsafe { Self::from_raw(ptr) }));
    }

    /// Moves the pointee out, freeing the allocation.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.into_box().map(|b| *b)
    }
}

// -----------------------------------------------------------------------------
// Deref

#[cold]
#[track_caller]
fn null_deref<T: ?Sized>() -> ! {
    log::error!(
        "dereferenced a null `UniquePtr<{}>`",
        core::any::type_name::<T>()
    );
    panic!("dereferenced a null `UniquePtr`")
}

impl<T: ?Sized> Deref for UniquePtr<T> {
    type Target = T;

    /// # Panics
    ///
    /// Panics if `self` is null.
    #[inline]
    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(value) => value,
            None => null_deref::<T>(),
        }
    }
}

impl<T: ?Sized> DerefMut for UniquePtr<T> {
    /// # Panics
    ///
    /// Panics if `self` is null.
    #[inline]
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.get_mut() {
            Some(value) => value,
            None => null_deref::<T>(),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

impl<T: ?Sized> Default for UniquePtr<T> {
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> From<Box<T>> for UniquePtr<T> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

impl<T: ?Sized> From<Option<Box<T>>> for UniquePtr<T> {
    #[inline]
    fn from(value: Option<Box<T>>) -> Self {
        match value {
            Some(value) => Self::from_box(value),
            None => Self::null(),
        }
    }
}

impl<T> From<T> for UniquePtr<T> {
    #[inline]
    fn from(value: T) -> Self {
        crate::make_unique(value)
    }
}

// -----------------------------------------------------------------------------
// Comparison

impl<T: ?Sized + PartialEq> PartialEq for UniquePtr<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: ?Sized + Eq> Eq for UniquePtr<T> {}

impl<T: ?Sized + PartialOrd> PartialOrd for UniquePtr<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T: ?Sized + Ord> Ord for UniquePtr<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T: ?Sized + Hash> Hash for UniquePtr<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

// -----------------------------------------------------------------------------
// Formatting

impl<T: ?Sized + fmt::Debug> fmt::Debug for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => fmt::Debug::fmt(value, f),
            None => f.write_str("null"),
        }
    }
}

impl<T: ?Sized> fmt::Pointer for UniquePtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ptr {
            Some(p) => fmt::Pointer::fmt(&p, f),
            None => fmt::Pointer::fmt(&ptr::null::<u8>(), f),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

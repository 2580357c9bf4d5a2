//! Fixed-width type aliases.
//!
//! Every alias names exactly one primitive, so `flx_types::u32` and `u32`
//! are interchangeable. The aliases exist to keep the spelling uniform across
//! the code base: the bit width is always part of the name, including for
//! [`b8`] and the unit type [`u0`].
//!
//! Two-digit spellings (`i08`, `u08`, `b08`, `u00`) are kept so that columns
//! of declarations line up.
//!
//! # Examples
//!
//! ```
//! use flx_types::{b8, f80, i16, u64};
//!
//! let flag: b8 = true;
//! let small: i16 = -3;
//! let wide: u64 = 1 << 40;
//! let ext: f80 = 0.5;
//!
//! assert!(flag);
//! assert_eq!(small as f80 + ext, -2.5);
//! assert_eq!(wide.count_ones(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![expect(non_camel_case_types, reason = "aliases mirror primitive names")]
#![no_std]

// -----------------------------------------------------------------------------
// Unit & bool

/// The unit type, `()`.
pub type u0 = ();
/// The unit type, `()`.
pub type u00 = ();

/// An 8-bit boolean.
pub type b8 = core::primitive::bool;
/// An 8-bit boolean.
pub type b08 = core::primitive::bool;

// -----------------------------------------------------------------------------
// Signed

/// 8-bit signed integer.
pub type i8 = core::primitive::i8;
/// 8-bit signed integer.
pub type i08 = core::primitive::i8;
/// 16-bit signed integer.
pub type i16 = core::primitive::i16;
/// 32-bit signed integer.
pub type i32 = core::primitive::i32;
/// 64-bit signed integer.
pub type i64 = core::primitive::i64;
/// Pointer-sized signed integer.
pub type isz = core::primitive::isize;

// -----------------------------------------------------------------------------
// Unsigned

/// 8-bit unsigned integer.
pub type u8 = core::primitive::u8;
/// 8-bit unsigned integer.
pub type u08 = core::primitive::u8;
/// 16-bit unsigned integer.
pub type u16 = core::primitive::u16;
/// 32-bit unsigned integer.
pub type u32 = core::primitive::u32;
/// 64-bit unsigned integer.
pub type u64 = core::primitive::u64;
/// Pointer-sized unsigned integer.
pub type usz = core::primitive::usize;

// -----------------------------------------------------------------------------
// Floating point

/// 32-bit IEEE 754 float.
pub type f32 = core::primitive::f32;
/// 64-bit IEEE 754 float.
pub type f64 = core::primitive::f64;
/// Widest native float.
///
/// Rust has no x87 80-bit extended type, so this is an alias of [`f64`].
/// Code that relies on the extra precision must not assume it here.
pub type f80 = core::primitive::f64;

// -----------------------------------------------------------------------------
// Prelude

/// Glob-importable re-export of every alias.
///
/// ```
/// use flx_types::prelude::*;
///
/// let x: u08 = 255;
/// let y: i64 = x as i64 + 1;
/// assert_eq!(y, 256);
/// ```
pub mod prelude {
    pub use crate::{b08, b8, u0, u00};
    pub use crate::{f32, f64, f80};
    pub use crate::{i08, i16, i32, i64, i8, isz};
    pub use crate::{u08, u16, u32, u64, u8, usz};
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use core::mem::size_of;

    #[test]
    fn widths() {
        assert_eq!(size_of::<super::u0>(), 0);
        assert_eq!(size_of::<super::b8>(), 1);

        assert_eq!(size_of::<super::i8>(), 1);
        assert_eq!(size_of::<super::i16>(), 2);
        assert_eq!(size_of::<super::i32>(), 4);
        assert_eq!(size_of::<super::i64>(), 8);

        assert_eq!(size_of::<super::u8>(), 1);
        assert_eq!(size_of::<super::u16>(), 2);
        assert_eq!(size_of::<super::u32>(), 4);
        assert_eq!(size_of::<super::u64>(), 8);

        assert_eq!(size_of::<super::f32>(), 4);
        assert_eq!(size_of::<super::f64>(), 8);
    }

    #[test]
    fn aliases_are_primitives() {
        fn same<A: 'static, B: 'static>() -> bool {
            TypeId::of::<A>() == TypeId::of::<B>()
        }

        assert!(same::<super::u0, ()>());
        assert!(same::<super::u00, super::u0>());
        assert!(same::<super::b08, bool>());
        assert!(same::<super::i08, i8>());
        assert!(same::<super::u08, u8>());
        assert!(same::<super::i64, i64>());
        assert!(same::<super::u64, u64>());
        assert!(same::<super::isz, isize>());
        assert!(same::<super::usz, usize>());
        assert!(same::<super::f80, f64>());
    }

    #[test]
    fn signedness() {
        assert_eq!(super::i08::MIN, -128);
        assert_eq!(super::u08::MAX, 255);
        assert_eq!(super::i16::MIN, i16::MIN);
        assert_eq!(super::u32::MAX, u32::MAX);
    }
}

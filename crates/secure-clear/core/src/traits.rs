// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The [`BulkClearable`] capability and its implementations for core types.

use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::num::{
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize, Wrapping,
};

/// Types whose storage can be overwritten with zero bytes as a whole.
///
/// This is the static check behind [`clear`](crate::clear),
/// [`clear_slice`](crate::clear_slice) and [`clear_vec`](crate::clear_vec).
/// A type qualifies when:
///
/// - it is [`Copy`], so it has no `Drop` implementation and owns no resource
///   that a blind overwrite would leak or corrupt (enforced by the
///   supertrait, a `Drop` type cannot implement this trait);
/// - the all-zero byte pattern is a valid value of the type.
///
/// References, raw pointers, function pointers and `NonZero*` integers are
/// deliberately not implemented. For pointers this also rejects the
/// decayed-array mistake: `clear(&mut ptr)` does not compile, the pointee
/// must be cleared with [`clear_raw`](crate::clear_raw) and an explicit length.
///
/// Structs made of clearable fields can use `#[derive(BulkClearable)]` from
/// `secure-clear-derive`.
///
/// # Safety
///
/// Implementors guarantee that a value consisting of `size_of::<Self>()`
/// zero bytes is a valid `Self`.
///
/// # Example
///
/// ```
/// use secure_clear_core::{BulkClearable, clear};
///
/// #[derive(Clone, Copy)]
/// #[repr(C)]
/// struct SessionKey {
///     id: u32,
///     key: [u8; 32],
/// }
///
/// // SAFETY: every field is an integer or an integer array.
/// unsafe impl BulkClearable for SessionKey {}
///
/// let mut key = SessionKey { id: 7, key: [0x5A; 32] };
/// clear(&mut key);
/// assert_eq!(key.id, 0);
/// assert_eq!(key.key, [0u8; 32]);
/// ```
///
/// A type with teardown logic is rejected. Adding `Drop` to an otherwise
/// eligible type is enough:
///
/// ```compile_fail,E0184
/// use secure_clear_core::BulkClearable;
///
/// #[derive(Clone, Copy)]
/// struct FileHandle(i32);
///
/// impl Drop for FileHandle {
///     fn drop(&mut self) {}
/// }
///
/// // error[E0184]: the trait `Copy` cannot be implemented for this type;
/// // the type has a destructor
/// unsafe impl BulkClearable for FileHandle {}
/// ```
///
/// The same type without `Drop` is accepted:
///
/// ```
/// use secure_clear_core::BulkClearable;
///
/// #[derive(Clone, Copy)]
/// struct FileHandle(i32);
///
/// // SAFETY: a zero `i32` is valid.
/// unsafe impl BulkClearable for FileHandle {}
/// ```
pub unsafe trait BulkClearable: Copy {}

macro_rules! impl_bulk_clearable {
    ($($ty:ty),* $(,)?) => {
        $(
            // SAFETY: all-zero is a valid value (0, 0.0, false, '\0', None, ()).
            unsafe impl BulkClearable for $ty {}
        )*
    };
}

impl_bulk_clearable!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
);

// Zero is the niche for `None`.
impl_bulk_clearable!(
    Option<NonZeroU8>,
    Option<NonZeroU16>,
    Option<NonZeroU32>,
    Option<NonZeroU64>,
    Option<NonZeroU128>,
    Option<NonZeroUsize>,
    Option<NonZeroI8>,
    Option<NonZeroI16>,
    Option<NonZeroI32>,
    Option<NonZeroI64>,
    Option<NonZeroI128>,
    Option<NonZeroIsize>,
);

// SAFETY: an array of zeroed elements is a zeroed array.
unsafe impl<T: BulkClearable, const N: usize> BulkClearable for [T; N] {}

// SAFETY: same layout and validity as `T`.
unsafe impl<T: BulkClearable> BulkClearable for Wrapping<T> {}

// SAFETY: any byte pattern is a valid `MaybeUninit`.
unsafe impl<T: BulkClearable> BulkClearable for MaybeUninit<T> {}

// SAFETY: zero-sized.
unsafe impl<T: ?Sized> BulkClearable for PhantomData<T> {}

macro_rules! impl_bulk_clearable_tuple {
    ($($name:ident),+) => {
        // SAFETY: a tuple of zeroed clearable fields is valid; padding has
        // no validity requirement.
        unsafe impl<$($name: BulkClearable),+> BulkClearable for ($($name,)+) {}
    };
}

impl_bulk_clearable_tuple!(A);
impl_bulk_clearable_tuple!(A, B);
impl_bulk_clearable_tuple!(A, B, C);
impl_bulk_clearable_tuple!(A, B, C, D);
impl_bulk_clearable_tuple!(A, B, C, D, E);
impl_bulk_clearable_tuple!(A, B, C, D, E, F);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G, H);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G, H, I);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_bulk_clearable_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

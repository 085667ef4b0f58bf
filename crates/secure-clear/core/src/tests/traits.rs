// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::num::{NonZeroI64, NonZeroU8, NonZeroU32, NonZeroUsize, Wrapping};

use pastey::paste;

use crate::probe::is_cleared;
use crate::traits::BulkClearable;
use crate::typed::clear;

fn assert_bulk_clearable<T: BulkClearable>() {}

macro_rules! test_clear_primitive {
    ($($ty:ident => $value:expr),* $(,)?) => {
        $(
            paste! {
                #[test]
                fn [<test_clear_ $ty>]() {
                    let mut value: $ty = $value;

                    // Assert (not) zeroization!
                    assert_ne!(value, <$ty>::default());

                    clear(&mut value);

                    // Assert zeroization!
                    assert_eq!(value, <$ty>::default());
                    assert!(unsafe { is_cleared(&value) });
                }
            }
        )*
    };
}

test_clear_primitive!(
    u8 => u8::MAX,
    u16 => u16::MAX,
    u32 => u32::MAX,
    u64 => u64::MAX,
    u128 => u128::MAX,
    usize => usize::MAX,
    i8 => i8::MIN,
    i16 => i16::MIN,
    i32 => -1,
    i64 => i64::MIN,
    i128 => -1,
    isize => isize::MIN,
    f32 => 1.5,
    f64 => -0.25,
    bool => true,
    char => 'Z',
);

#[test]
fn test_clear_option_non_zero_becomes_none() {
    let mut a = NonZeroU8::new(200);
    let mut b = NonZeroU32::new(0xFFFF);
    let mut c = NonZeroUsize::new(usize::MAX);
    let mut d = NonZeroI64::new(-5);

    clear(&mut a);
    clear(&mut b);
    clear(&mut c);
    clear(&mut d);

    assert_eq!(a, None);
    assert_eq!(b, None);
    assert_eq!(c, None);
    assert_eq!(d, None);
}

#[test]
fn test_clear_wrapping() {
    let mut counter = Wrapping(0xABCDu16);
    clear(&mut counter);
    assert_eq!(counter, Wrapping(0));
}

#[test]
fn test_clear_maybe_uninit() {
    let mut slot = MaybeUninit::new(0x1234_5678u32);
    clear(&mut slot);
    assert_eq!(unsafe { slot.assume_init() }, 0);
}

#[test]
fn test_clear_tuples() {
    let mut pair = (1u8, 2u64);
    let mut triple = (true, 'x', -1i32);
    let mut twelve = (1u8, 2u8, 3u8, 4u8, 5u8, 6u8, 7u8, 8u8, 9u8, 10u8, 11u8, 12u8);

    clear(&mut pair);
    clear(&mut triple);
    clear(&mut twelve);

    assert_eq!(pair, (0, 0));
    assert_eq!(triple, (false, '\0', 0));
    assert_eq!(twelve, (0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0));
}

#[test]
fn test_clear_nested_arrays() {
    let mut matrix = [[0xFFu16; 8]; 8];
    clear(&mut matrix);
    assert_eq!(matrix, [[0u16; 8]; 8]);
}

#[test]
fn test_bulk_clearable_implementations() {
    assert_bulk_clearable::<()>();
    assert_bulk_clearable::<PhantomData<str>>();
    assert_bulk_clearable::<PhantomData<Vec<u8>>>();
    assert_bulk_clearable::<[u8; 0]>();
    assert_bulk_clearable::<[(u8, i128); 3]>();
    assert_bulk_clearable::<(u8,)>();
    assert_bulk_clearable::<Option<core::num::NonZeroI128>>();
    assert_bulk_clearable::<MaybeUninit<[u64; 4]>>();
    assert_bulk_clearable::<Wrapping<i64>>();
}

// Without its destructor, a handle type is an ordinary clearable value; the
// `compile_fail` example on `BulkClearable` differs from this one only by
// `impl Drop`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct FileHandle(i32);

// SAFETY: a zero `i32` is valid.
unsafe impl BulkClearable for FileHandle {}

#[test]
fn test_clear_handle_without_drop() {
    assert_bulk_clearable::<FileHandle>();
    assert!(!core::mem::needs_drop::<FileHandle>());

    let mut handle = FileHandle(3);
    clear(&mut handle);

    // Assert zeroization!
    assert_eq!(handle, FileHandle(0));
}

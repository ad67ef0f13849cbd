//! Checks for values that support equality.
//!
//! Membership comes in two flavours: [`one_of`] scans an explicit list and
//! suits a handful of options, while [`one_in`] hashes the options into an
//! `IndexSet` for large enumerations. Both report options in the order they
//! were given.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::check::Check;
use crate::error::Violation;

/// What "empty" means for a type.
///
/// Implemented explicitly rather than by comparison to `Default`:
///
/// | type | empty when |
/// |------|------------|
/// | integers and floats | equal to zero |
/// | `bool` | `false` |
/// | `char` | `'\0'` |
/// | `str`, `String` | no bytes |
/// | `[E]`, `Vec<E>` | no elements |
/// | `Option<T>` | `None` |
/// | `&T` | `T` is empty |
pub trait Emptiness {
    /// Returns true if the value counts as empty.
    fn is_empty_value(&self) -> bool;
}

macro_rules! zero_is_empty {
    ($zero:expr => $($t:ty),*) => {
        $(
            impl Emptiness for $t {
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

zero_is_empty!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_is_empty!(0.0 => f32, f64);
zero_is_empty!('\0' => char);
zero_is_empty!(false => bool);

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> Emptiness for [E] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<E> Emptiness for Vec<E> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.is_none()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Passes only empty values (see [`Emptiness`]).
pub fn empty<T>() -> Check<T>
where
    T: Emptiness + Debug + ?Sized + 'static,
{
    Check::ensure(
        |value: &T| value.is_empty_value(),
        |value: &T| {
            Violation::new(format!("{:?} must be empty", value))
                .with_code("empty")
                .with_expected("empty value")
                .with_got(format!("{:?}", value))
        },
    )
}

/// Rejects empty values (see [`Emptiness`]).
///
/// ```rust
/// use verdict::checks::comparable::not_empty;
///
/// assert!(not_empty::<str>().is_valid("x"));
/// assert!(!not_empty::<str>().is_valid(""));
/// assert!(!not_empty::<u32>().is_valid(&0));
/// assert!(!not_empty::<Option<u8>>().is_valid(&None));
/// ```
pub fn not_empty<T>() -> Check<T>
where
    T: Emptiness + ?Sized + 'static,
{
    Check::ensure(
        |value: &T| !value.is_empty_value(),
        |_: &T| {
            Violation::new("must not be empty")
                .with_code("not_empty")
                .with_expected("non-empty value")
        },
    )
}

/// Passes values equal to `target`.
///
/// `target` may be any type the value compares against, so a `Check<str>`
/// can be built from a `String`.
pub fn equal<T, Q>(target: Q) -> Check<T>
where
    T: PartialEq<Q> + Debug + ?Sized + 'static,
    Q: Debug + Send + Sync + 'static,
{
    let expected = format!("{:?}", target);
    Check::ensure(
        move |value: &T| <T as PartialEq<Q>>::eq(value, &target),
        move |value: &T| {
            Violation::new(format!("{:?} must be equal to {}", value, expected))
                .with_code("equal")
                .with_expected(expected.clone())
                .with_got(format!("{:?}", value))
        },
    )
}

/// Rejects values equal to `target`.
pub fn not_equal<T, Q>(target: Q) -> Check<T>
where
    T: PartialEq<Q> + Debug + ?Sized + 'static,
    Q: Debug + Send + Sync + 'static,
{
    let rejected = format!("{:?}", target);
    Check::ensure(
        move |value: &T| <T as PartialEq<Q>>::ne(value, &target),
        move |value: &T| {
            Violation::new(format!("{:?} must not be equal to {}", value, rejected))
                .with_code("not_equal")
                .with_expected(format!("anything but {}", rejected))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Passes values equal to one of `options`.
///
/// An empty option list rejects everything.
///
/// ```rust
/// use verdict::checks::comparable::one_of;
///
/// let size = one_of(["S", "M", "L"]);
/// assert!(size.is_valid(&"M"));
/// assert_eq!(
///     size.validate(&"XL").unwrap_err().message,
///     r#""XL" must be one of ["S", "M", "L"]"#
/// );
/// ```
pub fn one_of<T, Q>(options: impl IntoIterator<Item = Q>) -> Check<T>
where
    T: PartialEq<Q> + Debug + ?Sized + 'static,
    Q: Debug + Send + Sync + 'static,
{
    let options: Vec<Q> = options.into_iter().collect();
    let listed = format!("{:?}", options);
    Check::ensure(
        move |value: &T| options.iter().any(|o| <T as PartialEq<Q>>::eq(value, o)),
        move |value: &T| {
            Violation::new(format!("{:?} must be one of {}", value, listed))
                .with_code("one_of")
                .with_expected(format!("one of {}", listed))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Rejects values equal to any of `options`.
pub fn not_one_of<T, Q>(options: impl IntoIterator<Item = Q>) -> Check<T>
where
    T: PartialEq<Q> + Debug + ?Sized + 'static,
    Q: Debug + Send + Sync + 'static,
{
    let options: Vec<Q> = options.into_iter().collect();
    let listed = format!("{:?}", options);
    Check::ensure(
        move |value: &T| !options.iter().any(|o| <T as PartialEq<Q>>::eq(value, o)),
        move |value: &T| {
            Violation::new(format!("{:?} must not be one of {}", value, listed))
                .with_code("not_one_of")
                .with_expected(format!("none of {}", listed))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Passes values contained in the hashed set built from `options`.
///
/// `K` only needs to borrow as the checked type, so a `Check<str>` can be
/// built from `String`s or `&'static str`s.
///
/// ```rust
/// use verdict::checks::comparable::one_in;
/// use verdict::Check;
///
/// let currency: Check<str> = one_in(["EUR", "USD", "JPY"]);
/// assert!(currency.is_valid("JPY"));
/// assert!(!currency.is_valid("XYZ"));
/// ```
pub fn one_in<T, K>(options: impl IntoIterator<Item = K>) -> Check<T>
where
    T: Hash + Eq + Debug + ?Sized + 'static,
    K: Borrow<T> + Hash + Eq + Debug + Send + Sync + 'static,
{
    let set: IndexSet<K> = options.into_iter().collect();
    let listed = format!("{:?}", set.iter().collect::<Vec<_>>());
    Check::ensure(
        move |value: &T| set.contains(value),
        move |value: &T| {
            Violation::new(format!("{:?} must be one of {}", value, listed))
                .with_code("one_in")
                .with_expected(format!("one of {}", listed))
                .with_got(format!("{:?}", value))
        },
    )
}

/// Rejects values contained in the hashed set built from `options`.
pub fn not_one_in<T, K>(options: impl IntoIterator<Item = K>) -> Check<T>
where
    T: Hash + Eq + Debug + ?Sized + 'static,
    K: Borrow<T> + Hash + Eq + Debug + Send + Sync + 'static,
{
    let set: IndexSet<K> = options.into_iter().collect();
    let listed = format!("{:?}", set.iter().collect::<Vec<_>>());
    Check::ensure(
        move |value: &T| !set.contains(value),
        move |value: &T| {
            Violation::new(format!("{:?} must not be one of {}", value, listed))
                .with_code("not_one_in")
                .with_expected(format!("none of {}", listed))
                .with_got(format!("{:?}", value))
        },
    )
}

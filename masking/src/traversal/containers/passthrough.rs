//! Opaque `Maskable` implementations for scalar-like types.
//!
//! Opaque values are copied unchanged unless a filter matches them, in which
//! case they become their zero value.

use std::{
    cmp::Ordering,
    marker::PhantomData,
    path::PathBuf,
    time::{Duration, SystemTime},
};

use super::impl_maskable_opaque;
use crate::traversal::{Maskable, Shape, Walker};

// =============================================================================
// Primitives
// =============================================================================

impl_maskable_opaque!(bool);
impl_maskable_opaque!(char);

// Signed integers
impl_maskable_opaque!(i8);
impl_maskable_opaque!(i16);
impl_maskable_opaque!(i32);
impl_maskable_opaque!(i64);
impl_maskable_opaque!(i128);
impl_maskable_opaque!(isize);

// Unsigned integers
impl_maskable_opaque!(u8);
impl_maskable_opaque!(u16);
impl_maskable_opaque!(u32);
impl_maskable_opaque!(u64);
impl_maskable_opaque!(u128);
impl_maskable_opaque!(usize);

// Floating point
impl_maskable_opaque!(f32);
impl_maskable_opaque!(f64);

impl_maskable_opaque!(());

// =============================================================================
// Other std types
// =============================================================================

impl_maskable_opaque!(Duration);
impl_maskable_opaque!(SystemTime => SystemTime::UNIX_EPOCH);
impl_maskable_opaque!(Ordering => Ordering::Equal);
impl_maskable_opaque!(PathBuf);

impl<T: 'static> Maskable for PhantomData<T> {
    const SHAPE: Shape = Shape::Opaque;

    fn zeroed() -> Self {
        PhantomData
    }

    fn walk(&self, _walker: &Walker<'_>, _field: &str, _tag: &str) -> Self {
        PhantomData
    }
}

// =============================================================================
// Date/time and UUID types (feature-gated)
// =============================================================================

#[cfg(feature = "chrono")]
mod chrono_opaque {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

    use super::impl_maskable_opaque;

    impl_maskable_opaque!(DateTime<Utc>);
    impl_maskable_opaque!(NaiveDateTime);
    impl_maskable_opaque!(NaiveDate);
    impl_maskable_opaque!(NaiveTime);
}

#[cfg(feature = "time")]
mod time_opaque {
    use time::{Date, Duration, OffsetDateTime, Time, UtcOffset};

    use super::impl_maskable_opaque;

    impl_maskable_opaque!(OffsetDateTime => OffsetDateTime::UNIX_EPOCH);
    impl_maskable_opaque!(Date => Date::MIN);
    impl_maskable_opaque!(Time => Time::MIDNIGHT);
    impl_maskable_opaque!(Duration => Duration::ZERO);
    impl_maskable_opaque!(UtcOffset => UtcOffset::UTC);
}

#[cfg(feature = "uuid")]
mod uuid_opaque {
    use uuid::Uuid;

    use super::impl_maskable_opaque;

    impl_maskable_opaque!(Uuid => Uuid::nil());
}

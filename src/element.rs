//! The [`Element`] capability used to render and hash the values of a
//! [`SeqList`](../struct.SeqList.html).
//!
//! An empty slot is an `Option::None`; its rendering (`null`) and hash (`0`) are
//! decided by the `Option` implementation below and nowhere else.

use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher,},
};

/// The text rendered for an empty slot.
pub const NULL: &str = "null";

/// A value which can be rendered and hashed as part of a [`SeqList`](../struct.SeqList.html).
pub trait Element {
    /// Writes this value as it appears between the brackets of a rendered list.
    ///
    /// # Params
    ///
    /// fmt --- The formatter to write to.
    fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result;
    /// Returns the hash of this value, stable for the life of the process.
    fn element_hash(&self,) -> u64;
}

/// Hashes `value` with a fixed-key hasher.
#[inline]
fn stable_hash<H: Hash + ?Sized,>(value: &H,) -> u64 {
    let mut hasher = DefaultHasher::new();

    value.hash(&mut hasher);
    hasher.finish()
}

macro_rules! hashable_element {
    ($($ty:ty,)*) => {$(
        impl Element for $ty {
            #[inline]
            fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt::Display::fmt(self, fmt,) }
            #[inline]
            fn element_hash(&self,) -> u64 { stable_hash(self,) }
        }
    )*};
}

hashable_element! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    bool, char, str, String,
}

macro_rules! float_element {
    ($($ty:ty,)*) => {$(
        impl Element for $ty {
            #[inline]
            fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { fmt::Display::fmt(self, fmt,) }
            #[inline]
            fn element_hash(&self,) -> u64 { stable_hash(&self.to_bits(),) }
        }
    )*};
}

float_element! { f32, f64, }

impl<'a, E: Element + ?Sized,> Element for &'a E {
    #[inline]
    fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { E::fmt_element(self, fmt,) }
    #[inline]
    fn element_hash(&self,) -> u64 { E::element_hash(self,) }
}

impl<E: Element + ?Sized,> Element for Box<E,> {
    #[inline]
    fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { E::fmt_element(self, fmt,) }
    #[inline]
    fn element_hash(&self,) -> u64 { E::element_hash(self,) }
}

impl<E: Element,> Element for Option<E,> {
    fn fmt_element(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        match self {
            Some(value) => value.fmt_element(fmt,),
            None => fmt.write_str(NULL,),
        }
    }
    fn element_hash(&self,) -> u64 {
        self.as_ref().map_or(0, E::element_hash,)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Rendered<E,>(E,);

    impl<E: Element,> fmt::Display for Rendered<E,> {
        fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result { self.0.fmt_element(fmt,) }
    }

    #[test]
    fn test_empty_slot() {
        assert_eq!(Rendered(None::<&str>).to_string(), "null", "`None` did not render as null",);
        assert_eq!(None::<u32>.element_hash(), 0, "`None` did not hash to 0",);
    }

    #[test]
    fn test_present_slot() {
        assert_eq!(Rendered(Some("x")).to_string(), "x",);
        assert_eq!(Some(7u32).element_hash(), 7u32.element_hash(),
            "`Some` did not hash as its value",
        );
        assert_eq!("abc".element_hash(), String::from("abc").element_hash(),
            "`str` and `String` hashed differently",
        );
    }
}

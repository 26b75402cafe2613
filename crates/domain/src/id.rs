//! Typed identifier newtypes backed by store-assigned integers.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer assigned by a store.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }

            /// The identifier directly following this one.
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }

            /// Read the integer at the start of `s`, ignoring whatever follows it.
            ///
            /// Leading whitespace and one sign are skipped, and a `0x` prefix
            /// switches to hexadecimal, so `" 2abc"` reads as `2` and `"1.5"`
            /// as `1`. Returns `None` when no digit is found or the value does
            /// not fit.
            #[must_use]
            pub fn parse_leading(s: &str) -> Option<Self> {
                let s = s.trim_start();
                let (negative, rest) = match s.as_bytes().first() {
                    Some(b'-') => (true, &s[1..]),
                    Some(b'+') => (false, &s[1..]),
                    _ => (false, s),
                };
                let (radix, digits) = match rest.get(..2) {
                    Some("0x" | "0X") => (16, &rest[2..]),
                    _ => (10, rest),
                };
                let end = digits
                    .find(|c: char| !c.is_digit(radix))
                    .unwrap_or(digits.len());
                let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
                Some(Self(if negative { -magnitude } else { magnitude }))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Student`](crate::student::Student).
    StudentId
);

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Stable integer identifying a node's slot in a [`Graph`](crate::graph::Graph).
///
/// Handles never change while the node exists; a slot is only reused after
/// the node occupying it has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub const fn new(index: usize) -> Self {
        NodeHandle(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeHandle {
    fn from(index: usize) -> Self {
        NodeHandle(index)
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arc weight bound used by every search.
///
/// Distances are accumulated with [`Cost::checked_add`], compared with `<`,
/// and the per-hop cost of a reconstructed path is recovered with `-`.
/// "Unreached" is an absent distance, so no sentinel maximum is required.
pub trait Cost:
    Copy + PartialOrd + Add<Output = Self> + Sub<Output = Self> + fmt::Debug + fmt::Display
{
    fn zero() -> Self;

    /// `None` when the sum is not representable (integer overflow, or a
    /// float sum that is no longer finite).
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Weights must compare against zero; NaN does not.
    fn is_ordered(&self) -> bool {
        self.partial_cmp(&Self::zero()).is_some()
    }
}

macro_rules! impl_cost {
    (int: $($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
    (float: $($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }
            }
        )*
    };
}

impl_cost!(int: u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_cost!(float: f32, f64);

/// Payloads that can be shown by name in rendered paths and path tables.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for String {
    fn label(&self) -> &str {
        self
    }
}

impl Labeled for &str {
    fn label(&self) -> &str {
        self
    }
}

/// Node payload read from a node record: a label plus an optional number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePayload {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<i64>,
}

impl NodePayload {
    pub fn new(label: impl Into<String>) -> Self {
        NodePayload {
            label: label.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, attribute: i64) -> Self {
        self.attribute = Some(attribute);
        self
    }
}

impl Labeled for NodePayload {
    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for NodePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attribute {
            Some(attribute) => write!(f, "{}:{}", self.label, attribute),
            None => write!(f, "{}", self.label),
        }
    }
}

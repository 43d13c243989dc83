//! Typed point and cell ids.
//!
//! A mesh stores its ids in a chosen integer width `I` (`u16`, `u32` or
//! `u64`), so a mesh of a few thousand cells can use half the connectivity
//! memory of the default. Every id handed out by a [`PolyData`](super::PolyData)
//! is range-checked when the element is added; growth that would exceed the
//! width fails with [`MeshError::InvalidParameter`].
//!
//! Region ids and element counts are plain `usize` values.

use std::fmt;
use std::hash::Hash;

use crate::error::{MeshError, Result};

/// Integer width used to store point and cell ids.
pub trait MeshIndex:
    Copy + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static
{
    /// Name of the width, for error messages.
    const NAME: &'static str;

    /// Convert an id, or `None` if it does not fit.
    fn try_from_usize(v: usize) -> Option<Self>;

    /// Widen to `usize`.
    fn to_usize(self) -> usize;

    /// Whether `count` elements can all be given an id.
    fn can_address(count: usize) -> bool {
        count == 0 || Self::try_from_usize(count - 1).is_some()
    }
}

macro_rules! impl_mesh_index {
    ($($t:ty),*) => {
        $(
            impl MeshIndex for $t {
                const NAME: &'static str = stringify!($t);

                #[inline]
                fn try_from_usize(v: usize) -> Option<Self> {
                    <$t>::try_from(v).ok()
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_mesh_index!(u16, u32, u64);

/// Fail unless `count` elements of kind `what` fit in width `I`.
pub(crate) fn ensure_addressable<I: MeshIndex>(what: &'static str, count: usize) -> Result<()> {
    if I::can_address(count) {
        Ok(())
    } else {
        Err(MeshError::invalid_param(
            what,
            format!("{} with {} ids", count, I::NAME),
            "exceeds the id range of the mesh index type",
        ))
    }
}

/// Id of a point in a [`PolyData`](super::PolyData).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PointId<I: MeshIndex = u32>(I);

/// Id of a cell in a [`PolyData`](super::PolyData).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CellId<I: MeshIndex = u32>(I);

macro_rules! impl_id {
    ($name:ident, $tag:literal) => {
        impl<I: MeshIndex> $name<I> {
            /// Wrap a position in the point or cell list.
            ///
            /// # Panics
            ///
            /// Panics if `index` does not fit in `I`. Meshes check their size
            /// as they grow, so ids taken from a mesh always fit.
            #[inline]
            pub fn new(index: usize) -> Self {
                match I::try_from_usize(index) {
                    Some(raw) => Self(raw),
                    None => panic!("{} id {} does not fit in {}", $tag, index, I::NAME),
                }
            }

            /// Position in the point or cell list.
            #[inline]
            pub fn index(self) -> usize {
                self.0.to_usize()
            }
        }

        impl<I: MeshIndex> fmt::Debug for $name<I> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $tag, self.index())
            }
        }
    };
}

impl_id!(PointId, "P");
impl_id!(CellId, "C");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_width() {
        let p: PointId<u16> = PointId::new(1000);
        assert_eq!(p.index(), 1000);

        let c: CellId<u64> = CellId::new(5_000_000_000);
        assert_eq!(c.index(), 5_000_000_000);
    }

    #[test]
    fn test_can_address_counts_ids_not_values() {
        assert!(u16::can_address(0));
        assert!(u16::can_address(65_536));
        assert!(!u16::can_address(65_537));
        assert!(u32::can_address(65_537));
    }

    #[test]
    fn test_ensure_addressable_reports_width() {
        assert!(ensure_addressable::<u16>("points", 10).is_ok());

        let err = ensure_addressable::<u16>("points", 70_000).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
        assert!(err.to_string().contains("u16"));
    }

    #[test]
    #[should_panic(expected = "P id 70000 does not fit in u16")]
    fn test_oversized_id_panics() {
        let _: PointId<u16> = PointId::new(70_000);
    }

    #[test]
    fn test_debug_format() {
        let p: PointId = PointId::new(7);
        assert_eq!(format!("{:?}", p), "P(7)");

        let c: CellId = CellId::new(3);
        assert_eq!(format!("{:?}", c), "C(3)");
    }
}

//! Conversions between the small rule enums and array indices

use anyhow::{anyhow, Result};
use num_traits::{FromPrimitive, ToPrimitive};

/// Look up an enum variant by its index
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Index of an enum variant, for use with per-variant arrays
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}

impl<T: FromPrimitive> FromIndex for T {
    fn from_index(idx: usize) -> Result<Self> {
        T::from_usize(idx).ok_or_else(|| {
            anyhow!("Invalid {} index: {}", std::any::type_name::<T>(), idx)
        })
    }
}

impl<T: ToPrimitive> ToIndex for T {
    fn to_index(&self) -> Result<usize> {
        self.to_usize()
            .ok_or_else(|| anyhow!("{} has no index", std::any::type_name::<T>()))
    }
}

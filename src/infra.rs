#![doc(hidden)]

pub mod testing;

#[cfg(feature = "proptest")]
pub mod proptest;

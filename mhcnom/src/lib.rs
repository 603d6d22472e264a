#[cfg(feature = "core")]
#[doc(inline)]
pub use mhcnom_core as core;

#[cfg(feature = "lookup")]
#[doc(inline)]
pub use mhcnom_lookup as lookup;

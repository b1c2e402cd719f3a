//! Order appendix codec.
//!
//! The appendix is a packed unsigned integer attached to every order, carrying
//! execution metadata besides price and amount: execution type, trigger type,
//! reduce-only flag and either isolated margin or TWAP parameters.
//!
//! The layout generation is an explicit [`AppendixLayout`] handed to
//! [`AppendixCodec::new`]; see [`crate::Chain::appendix_codec`].

mod bits;
mod codec;
mod error;
mod layout;
pub mod value;

pub use bits::{fits_width, mask_to_width};
pub use codec::{AppendixCodec, PackedOrderAppendixBits};
pub use error::{AppendixError, AppendixResult};
pub use layout::AppendixLayout;

#[cfg(test)]
mod tests;

//! G.711 companding as used by telephony recordings.
//!
//! Only the μ-law expansion direction is provided, see [`mulaw`].

pub mod mulaw;

pub use mulaw::{Decoder, Scale};

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "dev")]
pub mod dev;

mod arithmetic;
mod curve;
mod error;
mod mul;
mod point;

pub use crate::{
    curve::Curve,
    error::{Error, Result},
    point::Point,
};
pub use bigfield::{
    self, PrimeField,
    bigint::{BigInt, BigUint},
};

//! Service layer
//!
//! `LinkStore` owns the record lifecycle; `RedirectService` maps fragment
//! routes onto it. Presentation front ends consume both.

mod link_store;
mod redirect;

pub use link_store::*;
pub use redirect::*;

//! Category Sub-Forms
//!
//! One component per (mode, category family) pair. Each collects the fields
//! for its category and emits exactly one normalized item per successful
//! submission.

mod common;
mod offer;
mod request;
pub mod state;

pub use common::ProductFormShell;
pub use offer::{
    OfferBuildingMaterials, OfferGenericProduct, OfferProductsOthers, OfferTents,
    OfferTextileProduct,
};
pub use request::{RequestGenericProduct, RequestOthers};

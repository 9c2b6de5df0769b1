pub mod cascade;
pub mod share_ref;
pub mod store;

pub use cascade::{Cascade, resolve};
pub use share_ref::{decode_share_ref, encode_share_ref};
pub use store::SelectionStore;

pub mod builder;
pub mod dom_utils;
pub mod traverse;

mod types;

pub use crate::types::{Id, Node, NodeId};

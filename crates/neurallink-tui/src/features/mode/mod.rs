//! Mode feature slice: toggling between login and sign-up, plus the
//! exit/enter transition that follows every change.

mod update;

pub use update::{settle_transition, toggle_mode};

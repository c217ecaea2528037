//! Coordinators: each turns one kind of host event into exactly one
//! store update, built from a pure transform.

pub mod autocomplete;
pub mod field_edit;
pub mod reorder;

//! Use-Cases der Application-Layer-Orchestrierung.

pub mod layers;
pub mod reorder;
pub mod selection;
pub mod style_edit;

#[cfg(test)]
pub(crate) mod test_support;

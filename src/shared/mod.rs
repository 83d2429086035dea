//! Geteilte Typen zwischen App- und UI-Layer (Optionen, Texte).

pub mod options;
pub mod strings;

pub use options::EditorOptions;
pub use strings::StringResources;

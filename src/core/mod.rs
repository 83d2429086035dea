//! Core-Domänentypen: Kartendokument, Overlays, Layer, Styles und die Layer-Liste.

pub mod extent;
pub mod ids;
pub mod import;
pub mod layer;
pub mod map_document;
pub mod overlay;
pub mod sample;
pub mod style;
/// Layer-Liste als Arena-Baum mit verzögertem Laden
pub mod tree;

pub use extent::Extent;
pub use ids::{LayerId, OverlayKey, StyleId};
pub use import::{import_layer, import_layers, replace_layer_source, ImportKind};
pub use layer::{Layer, LayerKind, LayerSource};
pub use map_document::{MapDocument, RefreshRequest};
pub use overlay::{LayerCollection, Overlay, OverlayKind, TileCacheState};
pub use style::{Style, StyleKind, ZoomLevel, ZoomLevelSet, ZoomRange, ZOOM_LEVEL_COUNT};
pub use tree::{ConcreteObject, DropIndicator, LayerTree, NodeId, TreeNode};

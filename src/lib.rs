//! Radius-Picking für 2D-Graph-Layouts.
//!
//! Beantwortet "was liegt nahe an diesem Punkt?" gegen ein extern besessenes
//! Layout/Graph-Paar: nächster Vertex, nächste Edge oder alle Vertices in
//! einer planaren Region, jeweils mit Maximaldistanz-Cutoff. Die Baseline ist
//! ein vollständiger Scan über alle Kandidaten — bewusst ohne Spatial-Index,
//! hinter demselben Contract durch eine beschleunigte Implementierung
//! ersetzbar.

pub mod accessor;
pub mod geometry;
pub mod graph;
pub mod region;
pub mod snapshot;

pub use accessor::{PickConfig, PickError, RadiusAccessor, UNBOUNDED_MAX_DISTANCE};
pub use graph::{Graph, Layout};
pub use region::{Circle, Polygon, Rect, Region};
pub use snapshot::{SnapshotGraph, SnapshotLayout};

//! Graph- und Layout-Traits: die Lese-Schnittstelle des Pickings.
//!
//! Graph und Layout sind extern besessen; das Picking liest nur. Beide Traits
//! sind generisch über opake Vertex-/Edge-IDs, damit beliebige
//! Graph-Implementierungen angebunden werden können.

use std::hash::Hash;

use glam::Vec2;

/// Lese-Sicht auf einen Graphen: Vertex-Menge, Edge-Menge, Inzidenz.
pub trait Graph {
    /// Opake Vertex-Identität.
    type VertexId: Copy + Eq + Hash;
    /// Opake Edge-Identität.
    type EdgeId: Copy + Eq + Hash;

    /// Iteriert über alle Vertices.
    ///
    /// Die Reihenfolge ist implementierungsdefiniert, muss aber für
    /// unveränderten Graph-Zustand deterministisch sein: bei exakt gleichen
    /// Distanzen gewinnt der zuerst enumerierte Kandidat.
    fn vertices(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Iteriert über alle Edges.
    fn edges(&self) -> impl Iterator<Item = Self::EdgeId> + '_;

    /// Die beiden inzidenten Vertices einer Edge (Reihenfolge ohne Bedeutung).
    ///
    /// `None`, wenn die Edge nicht (mehr) im Graphen liegt — der Accessor
    /// wertet das als Scan über einen parallel mutierten Graphen.
    fn endpoints(&self, edge: Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    /// Strukturversion des Graphen.
    ///
    /// Muss sich bei jeder strukturellen Änderung (Vertex oder Edge
    /// hinzugefügt/entfernt) ändern. Der Accessor liest den Zähler vor und
    /// nach jedem Scan und verwirft Scans, die eine Mutation überlappt haben.
    fn revision(&self) -> u64;
}

/// 2D-Layout: Zuordnung Vertex → Position über einem Graphen.
pub trait Layout {
    /// Der zugrunde liegende Graph-Typ.
    type Graph: Graph;

    /// Der Graph, den dieses Layout positioniert.
    fn graph(&self) -> &Self::Graph;

    /// Position eines Vertex.
    ///
    /// Muss für jeden aktuell enumerierten Vertex definiert sein; `None`
    /// bedeutet, dass der Vertex zwischenzeitlich entfernt wurde, und führt
    /// zum Verwerfen des laufenden Scans.
    fn position(&self, vertex: <Self::Graph as Graph>::VertexId) -> Option<Vec2>;
}

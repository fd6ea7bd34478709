//! Snapshot-Implementierung von [`Graph`] und [`Layout`].
//!
//! Einfacher, zusammenhängend besessener Graph mit Positionen: per `&mut`
//! aufbauen, dann per `&` an den Accessor geben. Während eines Scans kann er
//! nicht mutiert werden, Scans darüber sind also immer konsistent. Die
//! Enumeration folgt der Einfüge-Reihenfolge (IndexMap/IndexSet), damit der
//! Tie-Break reproduzierbar ist.

use glam::Vec2;
use indexmap::{IndexMap, IndexSet};

use crate::graph::{Graph, Layout};

/// Unveränderlich nutzbarer Graph mit `u64`-Vertex-IDs und
/// `(u64, u64)`-Edge-Schlüsseln.
#[derive(Debug, Clone, Default)]
pub struct SnapshotGraph {
    vertices: IndexSet<u64>,
    edges: IndexSet<(u64, u64)>,
    revision: u64,
}

impl SnapshotGraph {
    /// Erstellt einen leeren Graphen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Vertex hinzu. Gibt `false` zurück, wenn die ID schon existiert.
    pub fn add_vertex(&mut self, id: u64) -> bool {
        let added = self.vertices.insert(id);
        if added {
            self.revision += 1;
        }
        added
    }

    /// Verbindet zwei vorhandene Vertices.
    ///
    /// Gibt `false` zurück, wenn einer der Vertices fehlt oder die Edge
    /// schon existiert.
    pub fn add_edge(&mut self, a: u64, b: u64) -> bool {
        if !self.vertices.contains(&a) || !self.vertices.contains(&b) {
            return false;
        }
        let added = self.edges.insert((a, b));
        if added {
            self.revision += 1;
        }
        added
    }

    /// Entfernt einen Vertex inklusive aller inzidenten Edges.
    pub fn remove_vertex(&mut self, id: u64) -> bool {
        if !self.vertices.shift_remove(&id) {
            return false;
        }
        self.edges.retain(|&(a, b)| a != id && b != id);
        self.revision += 1;
        true
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Anzahl der Edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Graph for SnapshotGraph {
    type VertexId = u64;
    type EdgeId = (u64, u64);

    fn vertices(&self) -> impl Iterator<Item = u64> + '_ {
        self.vertices.iter().copied()
    }

    fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.edges.iter().copied()
    }

    fn endpoints(&self, edge: (u64, u64)) -> Option<(u64, u64)> {
        self.edges.contains(&edge).then_some(edge)
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

/// [`SnapshotGraph`] plus Vertex-Positionen: die Layout-Seite des Snapshots.
#[derive(Debug, Clone, Default)]
pub struct SnapshotLayout {
    graph: SnapshotGraph,
    positions: IndexMap<u64, Vec2>,
}

impl SnapshotLayout {
    /// Erstellt ein leeres Layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Vertex mit Position hinzu (bzw. verschiebt einen
    /// vorhandenen auf die neue Position).
    pub fn add_vertex(&mut self, id: u64, position: Vec2) {
        self.graph.add_vertex(id);
        self.positions.insert(id, position);
    }

    /// Verbindet zwei vorhandene Vertices. Gibt `false` zurück, wenn einer fehlt.
    pub fn add_edge(&mut self, a: u64, b: u64) -> bool {
        self.graph.add_edge(a, b)
    }

    /// Entfernt einen Vertex inklusive Position und inzidenter Edges.
    pub fn remove_vertex(&mut self, id: u64) -> bool {
        self.positions.shift_remove(&id);
        self.graph.remove_vertex(id)
    }

    /// Anzahl der Vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Anzahl der Edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Layout for SnapshotLayout {
    type Graph = SnapshotGraph;

    fn graph(&self) -> &SnapshotGraph {
        &self.graph
    }

    fn position(&self, vertex: u64) -> Option<Vec2> {
        self.positions.get(&vertex).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_enumerate_in_insertion_order() {
        let mut layout = SnapshotLayout::new();
        layout.add_vertex(7, Vec2::new(0.0, 0.0));
        layout.add_vertex(2, Vec2::new(1.0, 0.0));
        layout.add_vertex(5, Vec2::new(2.0, 0.0));

        let ids: Vec<u64> = layout.graph().vertices().collect();
        assert_eq!(ids, vec![7, 2, 5]);
    }

    #[test]
    fn add_edge_requires_both_vertices() {
        let mut layout = SnapshotLayout::new();
        layout.add_vertex(1, Vec2::ZERO);

        assert!(!layout.add_edge(1, 2));
        layout.add_vertex(2, Vec2::new(1.0, 0.0));
        assert!(layout.add_edge(1, 2));
        assert_eq!(layout.edge_count(), 1);
    }

    #[test]
    fn endpoints_only_for_existing_edges() {
        let mut graph = SnapshotGraph::new();
        graph.add_vertex(1);
        graph.add_vertex(2);
        graph.add_edge(1, 2);

        assert_eq!(graph.endpoints((1, 2)), Some((1, 2)));
        assert_eq!(graph.endpoints((2, 1)), None);
    }

    #[test]
    fn structural_changes_bump_revision() {
        let mut graph = SnapshotGraph::new();
        let r0 = graph.revision();

        graph.add_vertex(1);
        let r1 = graph.revision();
        assert_ne!(r0, r1);

        // doppeltes Einfügen ist keine strukturelle Änderung
        graph.add_vertex(1);
        assert_eq!(graph.revision(), r1);

        graph.add_vertex(2);
        graph.add_edge(1, 2);
        let r2 = graph.revision();

        graph.remove_vertex(1);
        assert_ne!(graph.revision(), r2);
        assert_eq!(graph.edge_count(), 0);
    }
}

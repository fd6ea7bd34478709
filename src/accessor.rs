//! Radius-Picking: nächster Vertex, nächste Edge, Region-Selektion.
//!
//! Der Accessor scannt pro Anfrage alle Kandidaten (O(n)-Baseline, bewusst
//! ohne Spatial-Index) und vergleicht quadrierte Euklidische Distanzen —
//! monoton zur echten Distanz, spart die Wurzel pro Vergleich. Auch der
//! Maximaldistanz-Cutoff wird quadriert verglichen.
//!
//! Scans über einen parallel mutierten Graphen werden über den
//! [`revision`](crate::graph::Graph::revision)-Zähler erkannt, verworfen und
//! von vorn begonnen (optimistisch, ohne Lock). Anders als ein unbegrenztes
//! Retry läuft die Schleife maximal [`PickConfig::max_retries`]-mal; danach
//! meldet der Aufruf [`PickError::Contended`], statt unter Dauer-Mutation
//! endlos zu drehen. Teilergebnisse verschiedener Versuche werden nie
//! gemischt.

use glam::Vec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::geometry::segment_distance_sq;
use crate::graph::{Graph, Layout};
use crate::region::Region;

/// Praktisch unbegrenzte Maximaldistanz (knapp unter √`f32::MAX`).
///
/// So gewählt, dass ihr Quadrat den darstellbaren f32-Bereich nicht überläuft.
pub const UNBOUNDED_MAX_DISTANCE: f32 = 1.8446742e19;

/// Default-Wiederholungslimit für Scans unter paralleler Mutation.
pub const DEFAULT_MAX_RETRIES: u32 = 16;

/// Konfiguration des [`RadiusAccessor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickConfig {
    /// Maximaldistanz, wenn der Aufruf keine eigene angibt.
    pub default_max_distance: f32,
    /// Maximale Anzahl Scan-Versuche bei parallel mutiertem Graphen
    /// (0 wird wie 1 behandelt).
    pub max_retries: u32,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            default_max_distance: UNBOUNDED_MAX_DISTANCE,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Fehler beim Picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    /// Jeder Scan-Versuch hat eine parallele Graph-Mutation überlappt.
    #[error("Graph wurde während {attempts} Scan-Versuchen parallel mutiert")]
    Contended {
        /// Anzahl der verworfenen Versuche
        attempts: u32,
    },
}

/// Radius-basierter Element-Accessor über einem [`Layout`].
///
/// Zustandslos bis auf die Konfiguration: einmal konstruieren, beliebig oft
/// anfragen. Alle Operationen sind rein lesend; gegen einen Graphen, der
/// während des Aufrufs nicht mutiert wird (z. B. [`SnapshotLayout`]
/// per `&`), gelingt immer schon der erste Scan.
///
/// [`SnapshotLayout`]: crate::snapshot::SnapshotLayout
#[derive(Debug, Clone, Default)]
pub struct RadiusAccessor {
    config: PickConfig,
}

impl RadiusAccessor {
    /// Erstellt einen Accessor mit der übergebenen Konfiguration.
    pub fn new(config: PickConfig) -> Self {
        Self { config }
    }

    /// Erstellt einen Accessor mit eigener Default-Maximaldistanz.
    pub fn with_max_distance(max_distance: f32) -> Self {
        Self::new(PickConfig {
            default_max_distance: max_distance,
            ..PickConfig::default()
        })
    }

    /// Die aktive Konfiguration.
    pub fn config(&self) -> &PickConfig {
        &self.config
    }

    /// Findet den Vertex, der `query` am nächsten liegt, innerhalb der
    /// konfigurierten Default-Maximaldistanz.
    pub fn nearest_vertex<L: Layout>(
        &self,
        layout: &L,
        query: Vec2,
    ) -> Result<Option<<L::Graph as Graph>::VertexId>, PickError> {
        self.nearest_vertex_within(layout, query, self.config.default_max_distance)
    }

    /// Findet den Vertex, der `query` am nächsten liegt, innerhalb von
    /// `max_distance`.
    ///
    /// Bei exakt gleichen Distanzen gewinnt der zuerst enumerierte Vertex
    /// (striktes `<` beim Vergleich). `Ok(None)`, wenn kein Vertex
    /// qualifiziert.
    pub fn nearest_vertex_within<L: Layout>(
        &self,
        layout: &L,
        query: Vec2,
        max_distance: f32,
    ) -> Result<Option<<L::Graph as Graph>::VertexId>, PickError> {
        if max_distance < 0.0 {
            return Ok(None);
        }

        let graph = layout.graph();
        let max_distance_sq = max_distance * max_distance;

        self.scan_with_retry(graph, || {
            let mut best = None;
            let mut best_distance_sq = max_distance_sq;

            for vertex in graph.vertices() {
                let position = layout.position(vertex)?;
                let distance_sq = position.distance_squared(query);
                if distance_sq < best_distance_sq {
                    best_distance_sq = distance_sq;
                    best = Some(vertex);
                }
            }

            Some(best)
        })
    }

    /// Sammelt alle Vertices, deren Position in `region` liegt.
    ///
    /// Das Ergebnis ist duplikatfrei und folgt der Enumerationsreihenfolge
    /// des Graphen.
    pub fn vertices_in<L: Layout, R: Region>(
        &self,
        layout: &L,
        region: &R,
    ) -> Result<IndexSet<<L::Graph as Graph>::VertexId>, PickError> {
        let graph = layout.graph();

        self.scan_with_retry(graph, || {
            let mut picked = IndexSet::new();

            for vertex in graph.vertices() {
                let position = layout.position(vertex)?;
                if region.contains(position) {
                    picked.insert(vertex);
                }
            }

            Some(picked)
        })
    }

    /// Findet die Edge, die `query` am nächsten liegt, innerhalb der
    /// konfigurierten Default-Maximaldistanz.
    pub fn nearest_edge<L: Layout>(
        &self,
        layout: &L,
        query: Vec2,
    ) -> Result<Option<<L::Graph as Graph>::EdgeId>, PickError> {
        self.nearest_edge_within(layout, query, self.config.default_max_distance)
    }

    /// Findet die Edge, die `query` am nächsten liegt, innerhalb von
    /// `max_distance`.
    ///
    /// Gemessen wird die quadrierte Distanz zum Segment zwischen den
    /// Endpunkt-Positionen (Lotfußpunkt auf das Segment geklemmt). Edges mit
    /// zusammenfallenden Endpunkten sind degeneriert und werden übersprungen.
    pub fn nearest_edge_within<L: Layout>(
        &self,
        layout: &L,
        query: Vec2,
        max_distance: f32,
    ) -> Result<Option<<L::Graph as Graph>::EdgeId>, PickError> {
        if max_distance < 0.0 {
            return Ok(None);
        }

        let graph = layout.graph();
        let max_distance_sq = max_distance * max_distance;

        self.scan_with_retry(graph, || {
            let mut best = None;
            let mut best_distance_sq = max_distance_sq;

            for edge in graph.edges() {
                let (a, b) = graph.endpoints(edge)?;
                let position_a = layout.position(a)?;
                let position_b = layout.position(b)?;

                let Some(distance_sq) = segment_distance_sq(query, position_a, position_b)
                else {
                    continue;
                };

                if distance_sq < best_distance_sq {
                    best_distance_sq = distance_sq;
                    best = Some(edge);
                }
            }

            Some(best)
        })
    }

    /// Führt `scan` aus, bis ein Versuch ohne überlappende Graph-Mutation
    /// durchläuft.
    ///
    /// Ein Versuch gilt als verworfen, wenn `scan` selbst eine Inkonsistenz
    /// meldet (`None`, z. B. verschwundener Vertex) oder sich die
    /// `revision` des Graphen zwischen Beginn und Ende geändert hat.
    fn scan_with_retry<G: Graph, T>(
        &self,
        graph: &G,
        mut scan: impl FnMut() -> Option<T>,
    ) -> Result<T, PickError> {
        let attempts = self.config.max_retries.max(1);

        for attempt in 1..=attempts {
            let revision = graph.revision();

            if let Some(result) = scan() {
                if graph.revision() == revision {
                    return Ok(result);
                }
            }

            log::debug!("Pick-Scan verworfen (Versuch {attempt}/{attempts}): Graph parallel mutiert");
        }

        Err(PickError::Contended { attempts })
    }
}

//! Lane/junction network representation and builder.
//!
//! # Data layout
//!
//! Edges, lanes, and junctions live in indexed `Vec`s; ids are positions.
//! An edge connects two junctions and carries at most one sidewalk lane
//! (the lane pedestrians travel on).  Junctions store their incoming and
//! outgoing edge lists; edge predecessors/successors are derived from them:
//!
//! ```text
//! predecessors(e) = incoming edges of e.from
//! successors(e)   = outgoing edges of e.to
//! ```
//!
//! # Edge classification
//!
//! `Normal` edges are ordinary streets.  `Crossing` and `WalkingArea` edges
//! are junction-internal pedestrian infrastructure: crossings span a road,
//! walking areas stitch sidewalk ends together.  The walkable-surface
//! builder in `ped-geom` keys its connector logic off this classification.

use ped_core::{EdgeId, JunctionId, LaneId, Permissions};

use crate::Polyline;

// ── Element types ─────────────────────────────────────────────────────────────

/// Classification of a lane-network edge.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// An ordinary street edge.
    Normal,
    /// A junction-internal road crossing.
    Crossing,
    /// A junction-internal pedestrian connector area.
    WalkingArea,
}

impl EdgeKind {
    #[inline]
    pub fn is_normal(self) -> bool {
        self == EdgeKind::Normal
    }
}

/// A directed lane-network edge.
#[derive(Clone, Debug)]
pub struct Edge {
    pub kind: EdgeKind,
    pub from: JunctionId,
    pub to: JunctionId,
    /// The pedestrian-permitted lane of this edge, if any.
    pub sidewalk: Option<LaneId>,
}

/// A lane: centerline shape, width, and access permissions.
#[derive(Clone, Debug)]
pub struct Lane {
    /// Owning edge.
    pub edge: EdgeId,
    pub shape: Polyline,
    /// Full lane width in metres.  Always > 0.
    pub width: f64,
    pub permissions: Permissions,
}

#[derive(Clone, Debug, Default)]
struct Junction {
    incoming: Vec<EdgeId>,
    outgoing: Vec<EdgeId>,
}

// ── LaneNetwork ───────────────────────────────────────────────────────────────

/// Immutable lane/junction network.
///
/// Do not construct directly; use [`LaneNetworkBuilder`].
pub struct LaneNetwork {
    edges: Vec<Edge>,
    lanes: Vec<Lane>,
    junctions: Vec<Junction>,
}

impl LaneNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    /// Iterator over all `JunctionId`s.
    pub fn junction_ids(&self) -> impl Iterator<Item = JunctionId> + '_ {
        (0..self.junctions.len() as u32).map(JunctionId)
    }

    // ── Element access ────────────────────────────────────────────────────

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    #[inline]
    pub fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: EdgeId) -> EdgeKind {
        self.edges[id.index()].kind
    }

    /// The sidewalk lane of `edge`, if it has one.
    pub fn sidewalk(&self, edge: EdgeId) -> Option<(LaneId, &Lane)> {
        let id = self.edges[edge.index()].sidewalk?;
        Some((id, &self.lanes[id.index()]))
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Edges entering the from-junction of `edge` (upstream neighbours).
    pub fn predecessors(&self, edge: EdgeId) -> &[EdgeId] {
        &self.junctions[self.edges[edge.index()].from.index()].incoming
    }

    /// Edges leaving the to-junction of `edge` (downstream neighbours).
    pub fn successors(&self, edge: EdgeId) -> &[EdgeId] {
        &self.junctions[self.edges[edge.index()].to.index()].outgoing
    }

    /// Predecessors ∪ successors, deduplicated, `edge` itself excluded.
    pub fn adjacent_edges(&self, edge: EdgeId) -> Vec<EdgeId> {
        let mut adjacent: Vec<EdgeId> = self
            .predecessors(edge)
            .iter()
            .chain(self.successors(edge))
            .copied()
            .filter(|&e| e != edge)
            .collect();
        adjacent.sort_unstable();
        adjacent.dedup();
        adjacent
    }

    /// Incoming edges of `junction`.
    pub fn incoming(&self, junction: JunctionId) -> &[EdgeId] {
        &self.junctions[junction.index()].incoming
    }

    /// Outgoing edges of `junction`.
    pub fn outgoing(&self, junction: JunctionId) -> &[EdgeId] {
        &self.junctions[junction.index()].outgoing
    }

    /// Incoming ∪ outgoing edges of `junction`, deduplicated.
    pub fn junction_edges(&self, junction: JunctionId) -> Vec<EdgeId> {
        let j = &self.junctions[junction.index()];
        let mut edges: Vec<EdgeId> = j.incoming.iter().chain(&j.outgoing).copied().collect();
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// `true` if some walking-area edge is adjacent to both `edge` and
    /// `other` — the two sidewalks are stitched together at a junction.
    pub fn has_walking_area_between(&self, edge: EdgeId, other: EdgeId) -> bool {
        self.adjacent_edges(edge).iter().any(|&next| {
            self.kind(next) == EdgeKind::WalkingArea
                && self.adjacent_edges(next).contains(&other)
        })
    }
}

// ── LaneNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`LaneNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ped_core::{Permissions, Point2};
/// use ped_net::{EdgeKind, LaneNetworkBuilder, Polyline};
///
/// let mut b = LaneNetworkBuilder::new();
/// let j0 = b.add_junction();
/// let j1 = b.add_junction();
/// let e = b.add_edge(EdgeKind::Normal, j0, j1);
/// b.set_sidewalk(
///     e,
///     Polyline::new(vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]),
///     2.0,
///     Permissions::PEDESTRIAN,
/// );
/// let net = b.build();
/// assert_eq!(net.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct LaneNetworkBuilder {
    edges: Vec<Edge>,
    lanes: Vec<Lane>,
    junctions: Vec<Junction>,
}

impl LaneNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a junction and return its `JunctionId` (sequential from 0).
    pub fn add_junction(&mut self) -> JunctionId {
        let id = JunctionId(self.junctions.len() as u32);
        self.junctions.push(Junction::default());
        id
    }

    /// Add a directed edge from `from` to `to` and register it with both
    /// junctions' adjacency lists.
    pub fn add_edge(&mut self, kind: EdgeKind, from: JunctionId, to: JunctionId) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge { kind, from, to, sidewalk: None });
        self.junctions[from.index()].outgoing.push(id);
        self.junctions[to.index()].incoming.push(id);
        id
    }

    /// Attach the sidewalk lane of `edge`.
    ///
    /// # Panics
    /// Panics if `width` is not strictly positive or the edge already has a
    /// sidewalk.
    pub fn set_sidewalk(
        &mut self,
        edge: EdgeId,
        shape: Polyline,
        width: f64,
        permissions: Permissions,
    ) -> LaneId {
        assert!(width > 0.0, "lane width must be positive");
        assert!(
            self.edges[edge.index()].sidewalk.is_none(),
            "edge {edge} already has a sidewalk lane"
        );
        let id = LaneId(self.lanes.len() as u32);
        self.lanes.push(Lane { edge, shape, width, permissions });
        self.edges[edge.index()].sidewalk = Some(id);
        id
    }

    /// Consume the builder and produce a [`LaneNetwork`].
    pub fn build(self) -> LaneNetwork {
        LaneNetwork {
            edges: self.edges,
            lanes: self.lanes,
            junctions: self.junctions,
        }
    }
}

//! Route stages: an ordered edge sequence with a forward-only cursor.

use ped_core::EdgeId;

/// Where across the departure lane the pedestrian starts.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LateralPlacement {
    /// On the lane centerline.
    #[default]
    Center,
    /// Fixed offset in metres, positive towards the left of travel.
    Offset(f64),
    /// Uniformly random within ± half the lane width.
    Random,
}

/// One walking stage of a pedestrian's plan: the ordered route edges, the
/// departure and arrival longitudinal offsets, and a forward cursor.
///
/// The cursor only ever moves forward, one edge at a time; edges already
/// passed are never revisited.  This is what downstream consumers (edge
/// statistics, stop detection, visualization) key off.
#[derive(Clone, Debug)]
pub struct RouteStage {
    edges: Vec<EdgeId>,
    cursor: usize,
    /// Longitudinal start offset on the first edge's sidewalk, metres.
    pub depart_pos: f64,
    /// Longitudinal end offset on the last edge's sidewalk, metres.
    pub arrival_pos: f64,
    /// Lateral departure placement.
    pub lateral: LateralPlacement,
}

impl RouteStage {
    /// Construct a stage with the cursor at the first edge.
    ///
    /// # Panics
    /// Panics if `edges` is empty.
    pub fn new(edges: Vec<EdgeId>, depart_pos: f64, arrival_pos: f64) -> Self {
        assert!(!edges.is_empty(), "a route stage needs at least one edge");
        Self {
            edges,
            cursor: 0,
            depart_pos,
            arrival_pos,
            lateral: LateralPlacement::Center,
        }
    }

    /// Builder-style lateral placement override.
    pub fn with_lateral(mut self, lateral: LateralPlacement) -> Self {
        self.lateral = lateral;
        self
    }

    /// All route edges, in travel order.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Index of the edge the cursor is on.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The edge the cursor currently points at.
    #[inline]
    pub fn current_edge(&self) -> EdgeId {
        self.edges[self.cursor]
    }

    /// The sub-route from the cursor onward (current edge included).
    #[inline]
    pub fn forward_edges(&self) -> &[EdgeId] {
        &self.edges[self.cursor..]
    }

    /// The edge after the cursor, or `None` on the final edge.
    pub fn next_edge(&self) -> Option<EdgeId> {
        self.edges.get(self.cursor + 1).copied()
    }

    /// First edge of the route (the departure edge).
    #[inline]
    pub fn first_edge(&self) -> EdgeId {
        self.edges[0]
    }

    /// Last edge of the route (the arrival edge).
    #[inline]
    pub fn last_edge(&self) -> EdgeId {
        self.edges[self.edges.len() - 1]
    }

    /// `true` when the cursor is on the final edge.
    #[inline]
    pub fn at_final_edge(&self) -> bool {
        self.cursor + 1 == self.edges.len()
    }

    /// Advance the cursor by one edge.
    ///
    /// Returns `true` if the cursor was already on the final edge — the
    /// route is complete and the cursor does not move.  Returns `false`
    /// for an ordinary mid-route transition.
    pub fn advance(&mut self) -> bool {
        if self.at_final_edge() {
            true
        } else {
            self.cursor += 1;
            false
        }
    }
}

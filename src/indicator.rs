//! Drag interaction: maps a pointer x position to the nearest polyline vertex.
//!
//! [`IndicatorTracker`] keeps the vertices published by the last layout pass
//! and the little bit of state needed for edge-triggered haptic pulses.

use crate::haptics::HapticPulse;
use crate::path::ChartPoint;

/// Selected data index and where the indicator sits (chart space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub index: usize,
    pub position: ChartPoint,
}

/// Result of one [`IndicatorTracker::locate`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateOutcome {
    /// No vertices have been published yet.
    Empty,
    /// Single-point chart: the indicator snapped onto it.
    Snapped(Selection),
    /// The pointer sits on a limit or exactly on a vertex; the indicator did not move.
    AtLimit,
    /// The indicator moved along a segment.
    OnSegment(Selection),
}

impl LocateOutcome {
    pub fn selection(&self) -> Option<Selection> {
        match self {
            LocateOutcome::Snapped(s) | LocateOutcome::OnSegment(s) => Some(*s),
            LocateOutcome::Empty | LocateOutcome::AtLimit => None,
        }
    }

    pub fn is_limit(&self) -> bool {
        matches!(self, LocateOutcome::AtLimit)
    }
}

/// Outcome of a locate call plus the haptic pulse it triggered, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    pub outcome: LocateOutcome,
    pub pulse: Option<HapticPulse>,
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorTracker {
    points: Vec<ChartPoint>,
    /// Index of the left bracketing vertex seen by the previous call of this drag.
    current_previous: Option<usize>,
    on_limits: bool,
    selection: Option<Selection>,
    visible: bool,
}

impl IndicatorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the vertex list after a layout pass.
    pub fn publish(&mut self, points: Vec<ChartPoint>) {
        log::trace!("indicator received {} vertices", points.len());
        self.points = points;
        let stale = self
            .selection
            .map_or(self.points.is_empty(), |sel| sel.index >= self.points.len());
        if stale {
            self.selection = None;
            self.visible = false;
            self.current_previous = None;
        }
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    /// Last selection; it survives limit hits and the end of a drag.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_on_limits(&self) -> bool {
        self.on_limits
    }

    /// Move the indicator to the vertex nearest to `pointer_x` (chart space).
    pub fn locate(&mut self, pointer_x: f64) -> Located {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                return Located {
                    outcome: LocateOutcome::Empty,
                    pulse: None,
                }
            }
        };

        if self.points.len() == 1 {
            let sel = Selection {
                index: 0,
                position: first,
            };
            self.selection = Some(sel);
            self.visible = true;
            return Located {
                outcome: LocateOutcome::Snapped(sel),
                pulse: None,
            };
        }

        // `max` first so a NaN pointer lands on the left limit.
        let x = pointer_x.max(0.0).min(last.x);

        let mut previous = (0, first);
        let mut next = previous;
        let mut counter = 0;
        for (i, &p) in self.points.iter().enumerate() {
            if x >= p.x {
                previous = (i, p);
            }
            if x <= p.x {
                next = (i, p);
                break;
            }
            counter += 1;
        }

        if previous.0 == next.0 || previous.1.x == next.1.x {
            let pulse = if self.on_limits {
                None
            } else {
                self.on_limits = true;
                Some(HapticPulse::LimitReached)
            };
            return Located {
                outcome: LocateOutcome::AtLimit,
                pulse,
            };
        }
        self.on_limits = false;

        let pulse = match self.current_previous {
            Some(idx) if idx != previous.0 => Some(HapticPulse::SegmentCrossed),
            _ => None,
        };
        self.current_previous = Some(previous.0);

        // y = m*x + b through both bracketing vertices
        let (p, n) = (previous.1, next.1);
        let m = (p.y - n.y) / (p.x - n.x);
        let b = p.y - m * p.x;
        let position = ChartPoint::new(x, m * x + b);

        let index = if position.distance(&p) < position.distance(&n) {
            counter - 1
        } else {
            counter
        };

        let sel = Selection { index, position };
        self.selection = Some(sel);
        self.visible = true;
        Located {
            outcome: LocateOutcome::OnSegment(sel),
            pulse,
        }
    }

    /// Drag finished: hide the indicator and forget the segment history.
    pub fn end_drag(&mut self) {
        self.current_previous = None;
        self.visible = false;
    }
}

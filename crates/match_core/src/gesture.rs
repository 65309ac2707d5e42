//! Drag-to-decide state machine for a single swipe card.
//!
//! The machine knows nothing about any UI toolkit: the host feeds it abstract
//! pointer events and button actions, renders [`CardTransform`], and schedules
//! the exit delay when a commit is reported.

use std::time::Duration;

/// Horizontal displacement a drag must exceed to commit.
pub const SWIPE_THRESHOLD: f64 = 100.0;
/// Degrees of rotation per unit of horizontal displacement while dragging.
pub const ROTATION_FACTOR: f64 = 0.1;
/// Horizontal offset a committed card snaps to.
pub const EXIT_OFFSET: f64 = 500.0;
/// Rotation a committed card snaps to.
pub const EXIT_ROTATION: f64 = 30.0;
/// Time between a commit and the decision callback, for the fly-out animation.
pub const EXIT_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// A right swipe expresses interest; a left swipe skips.
    pub fn is_interested(self) -> bool {
        matches!(self, SwipeDirection::Right)
    }

    fn sign(self) -> f64 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
}

/// Button presses that bypass dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Skip,
    ExpressInterest,
}

impl CardAction {
    pub fn direction(self) -> SwipeDirection {
        match self {
            CardAction::Skip => SwipeDirection::Left,
            CardAction::ExpressInterest => SwipeDirection::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Released under the threshold; the card is back at rest.
    Reverted,
    /// The card is leaving; call [`GestureMachine::exit_elapsed`] after [`EXIT_DELAY`].
    Committed(SwipeDirection),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging {
        origin: (f64, f64),
        offset: (f64, f64),
    },
    Exiting {
        direction: SwipeDirection,
        offset_y: f64,
        delivered: bool,
    },
}

/// What the render host needs to draw the card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_degrees: f64,
    pub pending_direction: Option<SwipeDirection>,
    pub dragging: bool,
    pub exiting: bool,
}

impl CardTransform {
    pub const REST: CardTransform = CardTransform {
        offset_x: 0.0,
        offset_y: 0.0,
        rotation_degrees: 0.0,
        pending_direction: None,
        dragging: false,
        exiting: false,
    };
}

/// Per-card gesture state. Once the card starts exiting every further input
/// is ignored, so exactly one decision leaves the machine.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureMachine {
    interactive: bool,
    phase: Phase,
}

impl GestureMachine {
    /// Machine for the top-of-stack card.
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            phase: Phase::Idle,
        }
    }

    /// Machine for a preview card: renders at rest, accepts no input.
    pub fn preview() -> Self {
        Self {
            interactive: false,
            phase: Phase::Idle,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// Feeds one pointer event. Returns an outcome only on release.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<GestureOutcome> {
        if !self.interactive {
            return None;
        }
        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Down { x, y }) => {
                self.phase = Phase::Dragging {
                    origin: (x, y),
                    offset: (0.0, 0.0),
                };
                None
            }
            (Phase::Dragging { origin, .. }, PointerEvent::Move { x, y }) => {
                self.phase = Phase::Dragging {
                    origin,
                    offset: (x - origin.0, y - origin.1),
                };
                None
            }
            (Phase::Dragging { offset: (dx, dy), .. }, PointerEvent::Up) => {
                if dx > SWIPE_THRESHOLD {
                    Some(self.commit(SwipeDirection::Right, dy))
                } else if dx < -SWIPE_THRESHOLD {
                    Some(self.commit(SwipeDirection::Left, dy))
                } else {
                    self.phase = Phase::Idle;
                    Some(GestureOutcome::Reverted)
                }
            }
            // Move/up without a live session, a second down, or input while exiting.
            _ => None,
        }
    }

    /// Skip / express-interest buttons: commit straight from rest.
    pub fn action(&mut self, action: CardAction) -> Option<GestureOutcome> {
        if !self.interactive || self.is_exiting() {
            return None;
        }
        Some(self.commit(action.direction(), 0.0))
    }

    /// The exit delay has elapsed. Yields the decision the first time only.
    pub fn exit_elapsed(&mut self) -> Option<SwipeDirection> {
        match &mut self.phase {
            Phase::Exiting {
                direction,
                delivered,
                ..
            } if !*delivered => {
                *delivered = true;
                Some(*direction)
            }
            _ => None,
        }
    }

    pub fn transform(&self) -> CardTransform {
        match self.phase {
            Phase::Idle => CardTransform::REST,
            Phase::Dragging {
                offset: (dx, dy), ..
            } => CardTransform {
                offset_x: dx,
                offset_y: dy,
                // Uncapped while dragging; only commits clamp.
                rotation_degrees: dx * ROTATION_FACTOR,
                pending_direction: preview_direction(dx),
                dragging: true,
                exiting: false,
            },
            Phase::Exiting {
                direction,
                offset_y,
                ..
            } => CardTransform {
                offset_x: EXIT_OFFSET * direction.sign(),
                offset_y,
                rotation_degrees: EXIT_ROTATION * direction.sign(),
                pending_direction: Some(direction),
                dragging: false,
                exiting: true,
            },
        }
    }

    fn commit(&mut self, direction: SwipeDirection, offset_y: f64) -> GestureOutcome {
        self.phase = Phase::Exiting {
            direction,
            offset_y,
            delivered: false,
        };
        GestureOutcome::Committed(direction)
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::interactive()
    }
}

fn preview_direction(dx: f64) -> Option<SwipeDirection> {
    let half = SWIPE_THRESHOLD / 2.0;
    if dx > half {
        Some(SwipeDirection::Right)
    } else if dx < -half {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    Began,
    Ended,
}

/// Identifies one press gesture from begin to end, so concurrent presses can
/// be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PressId(pub u64);

#[derive(Debug, Clone, Copy)]
pub enum GestureEvent {
    Tap {
        location: Vec2,
    },
    Press {
        id: PressId,
        location: Vec2,
        phase: PressPhase,
    },
}

pub const DEFAULT_MIN_PRESS_DURATION: f32 = 0.1;

struct PendingPointer {
    down_at: f32,
    location: Vec2,
}

/// Splits raw pointer input into taps and long presses. A pointer held past
/// the minimum press duration becomes a press (`Began` fires from `update`);
/// one released earlier becomes a tap at release time.
pub struct LongPressRecognizer {
    min_press_duration: f32,
    next_id: u64,
    pending: Option<PendingPointer>,
    active: Option<(PressId, Vec2)>,
}

impl LongPressRecognizer {
    pub fn new(min_press_duration: f32) -> Self {
        Self {
            min_press_duration,
            next_id: 0,
            pending: None,
            active: None,
        }
    }

    pub fn pointer_down(&mut self, location: Vec2, now: f32) {
        self.pending = Some(PendingPointer {
            down_at: now,
            location,
        });
    }

    /// Promotes a held pointer to a press once the duration threshold passes.
    pub fn update(&mut self, now: f32) -> Option<GestureEvent> {
        let pending = self.pending.as_ref()?;
        if now - pending.down_at < self.min_press_duration {
            return None;
        }

        let location = pending.location;
        self.pending = None;

        let id = PressId(self.next_id);
        self.next_id += 1;
        self.active = Some((id, location));

        Some(GestureEvent::Press {
            id,
            location,
            phase: PressPhase::Began,
        })
    }

    pub fn pointer_up(&mut self, location: Vec2, _now: f32) -> Option<GestureEvent> {
        if let Some((id, begin_location)) = self.active.take() {
            return Some(GestureEvent::Press {
                id,
                location: begin_location,
                phase: PressPhase::Ended,
            });
        }

        self.pending.take()?;
        Some(GestureEvent::Tap { location })
    }
}

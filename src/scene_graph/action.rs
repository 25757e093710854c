use glam::{Quat, Vec3};

/// A timed rotation by a fixed angle about an axis, in the spirit of a scene
/// kit rotate-by action.
#[derive(Debug, Clone, Copy)]
pub struct RotateBy {
    pub axis: Vec3,
    pub angle: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct ActiveAction {
    rotate: RotateBy,
    elapsed: f32,
    repeat_forever: bool,
}

impl ActiveAction {
    pub fn once(rotate: RotateBy) -> ActiveAction {
        ActiveAction {
            rotate,
            elapsed: 0.0,
            repeat_forever: false,
        }
    }

    pub fn repeat_forever(rotate: RotateBy) -> ActiveAction {
        ActiveAction {
            rotate,
            elapsed: 0.0,
            repeat_forever: true,
        }
    }

    /// Advances the action by `dt` seconds. Returns the rotation to apply for
    /// this step and whether the action is still running. A finite action
    /// never rotates past its total angle.
    pub fn advance(&mut self, dt: f32) -> (Quat, bool) {
        let step = if self.repeat_forever {
            dt
        } else {
            dt.min(self.rotate.duration - self.elapsed)
        };
        self.elapsed += step;

        let angle = self.rotate.angle * (step / self.rotate.duration);
        let delta = Quat::from_axis_angle(self.rotate.axis, angle);
        let running = self.repeat_forever || self.elapsed < self.rotate.duration;
        (delta, running)
    }
}

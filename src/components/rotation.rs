use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// How long a carousel slide or highlighted feature stays up.
pub const ROTATE_EVERY_MS: u32 = 4000;

/// Which of `len` items is current. Wraps around in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    pub index: usize,
    pub len: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationAction {
    Next,
    Prev,
    Select(usize),
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn step(self, action: RotationAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            RotationAction::Next => (self.index + 1) % self.len,
            RotationAction::Prev => (self.index + self.len - 1) % self.len,
            RotationAction::Select(index) if index < self.len => index,
            RotationAction::Select(_) => self.index,
        };
        Self { index, ..self }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    /// Horizontal shift of a slide track holding one item per 100%.
    pub fn track_offset_percent(&self) -> usize {
        self.index * 100
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: RotationAction) -> Rc<Self> {
        let next = self.step(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Rotation over `len` items that advances every `period_ms` while `running`.
#[hook]
pub fn use_rotation(len: usize, period_ms: u32, running: bool) -> UseReducerHandle<Rotation> {
    let rotation = use_reducer(move || Rotation::new(len));

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |(running, period_ms): &(bool, u32)| {
                let interval = running.then(|| {
                    Interval::new(*period_ms, move || dispatcher.dispatch(RotationAction::Next))
                });
                move || drop(interval)
            },
            (running, period_ms),
        );
    }

    rotation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let start = Rotation::new(5);
        assert_eq!(start.step(RotationAction::Prev).index, 4);

        let mut rotation = start;
        for _ in 0..5 {
            rotation = rotation.step(RotationAction::Next);
        }
        assert_eq!(rotation, start);
        assert_eq!(start.step(RotationAction::Next).step(RotationAction::Prev), start);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let rotation = Rotation::new(4).step(RotationAction::Select(2));
        assert!(rotation.is_current(2));
        assert_eq!(rotation.step(RotationAction::Select(4)).index, 2);
        assert_eq!(rotation.track_offset_percent(), 200);
    }

    #[test]
    fn empty_rotation_never_moves() {
        let rotation = Rotation::new(0);
        for action in [RotationAction::Next, RotationAction::Prev, RotationAction::Select(0)] {
            assert_eq!(rotation.step(action), rotation);
        }
    }

    #[test]
    fn reducer_keeps_state_when_nothing_changes() {
        let rotation = Rc::new(Rotation::new(3));
        let same = rotation.clone().reduce(RotationAction::Select(0));
        assert!(Rc::ptr_eq(&rotation, &same));
        let moved = rotation.reduce(RotationAction::Next);
        assert_eq!(moved.index, 1);
    }
}

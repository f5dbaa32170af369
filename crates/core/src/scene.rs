//! Scene - one frame's worth of drawables in draw order.

use crate::camera::Camera;
use crate::draw::{Drawable, Renderer};
use crate::map::GridMap;
use crate::observer::Observer;
use crate::types::{Command, START_HEADING, START_X, START_Y};

/// The grid, the observer walking it, and the camera looking through it.
#[derive(Debug, Clone)]
pub struct Scene {
    pub map: GridMap,
    pub observer: Observer,
    pub camera: Camera,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(
            GridMap::default(),
            Observer::new(START_X, START_Y, START_HEADING),
            Camera::default(),
        )
    }
}

impl Scene {
    pub fn new(map: GridMap, observer: Observer, camera: Camera) -> Self {
        Self {
            map,
            observer,
            camera,
        }
    }

    /// Apply an input command to the observer.
    pub fn apply(&mut self, command: Command) {
        self.observer.apply(command);
        tracing::trace!(
            ?command,
            x = self.observer.x(),
            y = self.observer.y(),
            heading = self.observer.heading(),
            "command applied"
        );
    }

    /// Draw a full frame: clear, grid, rays and columns, then the observer.
    pub fn render(&self, gfx: &mut dyn Renderer) {
        gfx.clear();
        self.map.draw(gfx);
        self.camera.view(&self.map, &self.observer).draw(gfx);
        self.observer.draw(gfx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, DrawList};
    use crate::types::{palette, MAP_HEIGHT, MAP_WIDTH, RAY_COUNT};

    #[test]
    fn render_order_is_clear_map_camera_observer() {
        let scene = Scene::default();
        let mut list = DrawList::new();
        scene.render(&mut list);

        let cmds = list.commands();
        assert_eq!(cmds[0], DrawCommand::Clear);

        let tiles = MAP_WIDTH * MAP_HEIGHT;
        assert!(cmds[1..=tiles]
            .iter()
            .all(|c| matches!(c, DrawCommand::Rect { .. })));

        // Every ray hits inside the default walled grid: a ray plus a column each.
        let rays_end = 1 + tiles + 2 * RAY_COUNT;
        assert_eq!(cmds.len(), rays_end + 2);
        assert!(matches!(
            cmds[rays_end],
            DrawCommand::Point {
                color: palette::OBSERVER,
                ..
            }
        ));
        assert!(matches!(
            cmds[rays_end + 1],
            DrawCommand::Line {
                color: palette::HEADING,
                ..
            }
        ));
    }

    #[test]
    fn rendered_frames_are_finite() {
        let mut scene = Scene::default();
        let mut list = DrawList::new();
        for _ in 0..63 {
            scene.apply(Command::TurnRight);
            list.reset();
            scene.render(&mut list);
            assert!(list.commands().iter().all(DrawCommand::is_finite));
        }
    }

    #[test]
    fn identical_inputs_give_identical_frames() {
        let script = [
            Command::MoveForward,
            Command::TurnLeft,
            Command::MoveForward,
            Command::TurnLeft,
            Command::MoveBackward,
            Command::TurnRight,
        ];
        let mut a = Scene::default();
        let mut b = Scene::default();
        for cmd in script {
            a.apply(cmd);
            b.apply(cmd);
        }
        assert_eq!(a.observer, b.observer);

        let mut la = DrawList::new();
        let mut lb = DrawList::new();
        a.render(&mut la);
        b.render(&mut lb);
        assert_eq!(la.fingerprint(), lb.fingerprint());
    }

    #[test]
    fn moving_changes_the_frame() {
        let mut scene = Scene::default();
        let mut before = DrawList::new();
        scene.render(&mut before);
        scene.apply(Command::MoveForward);
        let mut after = DrawList::new();
        scene.render(&mut after);
        assert_ne!(before.fingerprint(), after.fingerprint());
    }
}

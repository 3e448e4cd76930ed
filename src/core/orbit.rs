//! Orbital card layout model
//!
//! Feature cards sit on a circle that slowly rotates. Clicking a card stops
//! the rotation and brings it to the front (270 degrees, top of the circle);
//! clicking the background resumes rotation.

/// Degrees added on every rotation tick
pub const ROTATION_STEP_DEG: f64 = 0.2;

/// Interval between rotation ticks in milliseconds
pub const ROTATION_TICK_MS: u32 = 50;

/// Angle at which a focused card is shown
pub const FOCUS_ANGLE_DEG: f64 = 270.0;

/// Orbit radius in pixels
pub const ORBIT_RADIUS: f64 = 180.0;

/// Stacking order of the focused card, above every orbiting card
pub const FOCUSED_Z_INDEX: i32 = 200;

pub const MIN_OPACITY: f64 = 0.5;
pub const MIN_SCALE: f64 = 0.85;

/// Wrap an angle into [0, 360)
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Computed position and depth cues of one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePlacement {
    pub x: f64,
    pub y: f64,
    /// Angle of the card on the circle, in degrees
    pub angle: f64,
    pub z_index: i32,
    pub opacity: f64,
    pub scale: f64,
}

impl NodePlacement {
    /// Inline CSS for the card
    pub fn css(&self, focused: bool) -> String {
        let (scale, z_index, opacity) = if focused {
            (1.0, FOCUSED_Z_INDEX, 1.0)
        } else {
            (self.scale, self.z_index, self.opacity)
        };
        format!(
            "transform: translate({:.2}px, {:.2}px) scale({:.3}); z-index: {}; opacity: {:.3};",
            self.x, self.y, scale, z_index, opacity
        )
    }
}

/// Rotation and focus state of the carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    angle: f64,
    auto_rotating: bool,
    focused: Option<usize>,
    count: usize,
}

impl OrbitState {
    pub fn new(count: usize) -> Self {
        Self {
            angle: 0.0,
            auto_rotating: true,
            focused: None,
            count,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn auto_rotating(&self) -> bool {
        self.auto_rotating
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// Advance one rotation tick; ignored while a card is focused.
    pub fn tick(&mut self) {
        if !self.auto_rotating {
            return;
        }
        let next = wrap_degrees(self.angle + ROTATION_STEP_DEG);
        self.angle = (next * 1000.0).round() / 1000.0;
        if self.angle >= 360.0 {
            self.angle = 0.0;
        }
    }

    /// Click on card `index`: focus it, or clear focus when it is already focused.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        if self.focused == Some(index) {
            self.clear_focus();
        } else {
            self.focus(index);
        }
    }

    /// Focus card `index`, stop rotating and turn the circle so it sits at the front.
    pub fn focus(&mut self, index: usize) {
        if index >= self.count {
            return;
        }
        self.focused = Some(index);
        self.auto_rotating = false;
        self.angle = wrap_degrees(FOCUS_ANGLE_DEG - base_angle(index, self.count));
    }

    /// Background click: drop focus and resume rotation.
    pub fn clear_focus(&mut self) {
        self.focused = None;
        self.auto_rotating = true;
    }

    pub fn placement(&self, index: usize) -> NodePlacement {
        place_node(index, self.count, self.angle)
    }

    pub fn placements(&self) -> impl Iterator<Item = NodePlacement> + '_ {
        (0..self.count).map(|i| self.placement(i))
    }
}

/// Evenly spaced starting angle of card `index` out of `total`
fn base_angle(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index as f64 / total as f64) * 360.0
}

/// Place card `index` of `total` for the given rotation.
pub fn place_node(index: usize, total: usize, rotation: f64) -> NodePlacement {
    let angle = wrap_degrees(base_angle(index, total) + rotation);
    let radian = angle.to_radians();
    let (sin, cos) = radian.sin_cos();
    let front = (1.0 + sin) / 2.0;

    NodePlacement {
        x: ORBIT_RADIUS * cos,
        y: ORBIT_RADIUS * sin,
        angle,
        z_index: (100.0 + 50.0 * cos).round() as i32,
        opacity: (MIN_OPACITY + 0.5 * front).clamp(MIN_OPACITY, 1.0),
        scale: (MIN_SCALE + 0.15 * front).clamp(MIN_SCALE, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(370.5), 10.5);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert!(wrap_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_even_spacing_and_bounds() {
        for total in 0..=12usize {
            for &rotation in &[0.0, 17.3, 181.0, 359.9] {
                let placements: Vec<_> = (0..total).map(|i| place_node(i, total, rotation)).collect();
                assert_eq!(placements.len(), total);

                for (i, p) in placements.iter().enumerate() {
                    assert!((0.0..360.0).contains(&p.angle));
                    assert!((MIN_OPACITY..=1.0).contains(&p.opacity));
                    assert!((MIN_SCALE..=1.0).contains(&p.scale));
                    assert!(approx(p.x.hypot(p.y), ORBIT_RADIUS));

                    if total > 1 {
                        let next = &placements[(i + 1) % total];
                        let gap = wrap_degrees(next.angle - p.angle);
                        assert!(approx(gap, 360.0 / total as f64));
                    }
                }
            }
        }
    }

    #[test]
    fn test_front_node_is_largest() {
        let front = place_node(0, 1, 90.0);
        let back = place_node(0, 1, 270.0);
        assert!(approx(front.scale, 1.0));
        assert!(approx(front.opacity, 1.0));
        assert!(approx(back.scale, MIN_SCALE));
        assert!(approx(back.opacity, MIN_OPACITY));
    }

    #[test]
    fn test_z_index_follows_cosine() {
        assert_eq!(place_node(0, 4, 0.0).z_index, 150);
        assert_eq!(place_node(2, 4, 0.0).z_index, 50);
        assert_eq!(place_node(1, 4, 0.0).z_index, 100);
    }

    #[test]
    fn test_tick_advances_and_wraps() {
        let mut orbit = OrbitState::new(3);
        orbit.tick();
        assert!(approx(orbit.angle(), 0.2));

        for _ in 0..1799 {
            orbit.tick();
        }
        assert!(orbit.angle() < 360.0);
        assert!(approx(orbit.angle(), 0.0));
    }

    #[test]
    fn test_focus_centers_node_and_stops_rotation() {
        for total in 1..=12usize {
            for index in 0..total {
                let mut orbit = OrbitState::new(total);
                for _ in 0..37 {
                    orbit.tick();
                }
                orbit.toggle(index);

                assert_eq!(orbit.focused(), Some(index));
                assert!(!orbit.auto_rotating());
                assert!(approx(orbit.placement(index).angle, FOCUS_ANGLE_DEG));

                let angle = orbit.angle();
                orbit.tick();
                assert_eq!(orbit.angle(), angle);
            }
        }
    }

    #[test]
    fn test_toggle_same_node_resumes() {
        let mut orbit = OrbitState::new(5);
        orbit.toggle(2);
        orbit.toggle(2);
        assert_eq!(orbit.focused(), None);
        assert!(orbit.auto_rotating());
    }

    #[test]
    fn test_switch_focus() {
        let mut orbit = OrbitState::new(4);
        orbit.toggle(1);
        orbit.toggle(3);
        assert_eq!(orbit.focused(), Some(3));
        assert!(approx(orbit.placement(3).angle, FOCUS_ANGLE_DEG));
    }

    #[test]
    fn test_background_click_clears_focus() {
        let mut orbit = OrbitState::new(4);
        orbit.focus(0);
        orbit.clear_focus();
        assert_eq!(orbit.focused(), None);
        assert!(orbit.auto_rotating());
    }

    #[test]
    fn test_out_of_range_focus_ignored() {
        let mut orbit = OrbitState::new(0);
        orbit.toggle(0);
        assert_eq!(orbit.focused(), None);
        assert!(orbit.auto_rotating());
        assert_eq!(orbit.placements().count(), 0);
    }

    #[test]
    fn test_single_node_always_focusable() {
        let mut orbit = OrbitState::new(1);
        orbit.toggle(0);
        assert!(approx(orbit.angle(), 270.0));
        assert!(approx(orbit.placement(0).angle, 270.0));
    }

    #[test]
    fn test_focused_css_is_elevated() {
        let p = place_node(0, 3, 0.0);
        assert!(p.css(true).contains("z-index: 200;"));
        assert!(p.css(true).contains("scale(1.000)"));
        assert!(p.css(false).contains(&format!("z-index: {};", p.z_index)));
    }
}

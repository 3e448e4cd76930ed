//! Scroll reveal state and styling
//!
//! Pure model behind the reveal components:
//! - `RevealConfig` for the viewport observer (threshold, root margin, trigger once)
//! - `RevealState`, the visibility state machine fed by intersection events
//! - `Direction` and `RevealStyle` for the hidden offset and CSS transition
//! - Stagger delay helpers for grouped and per-character reveals

/// CSS easing used by every reveal transition
pub const REVEAL_EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Default intersection ratio required to reveal
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default root margin: reveal slightly before the element is fully in view
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Viewport observer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Intersection ratio in [0, 1] at which the element counts as visible
    pub threshold: f64,
    /// Margin around the root, in CSS margin syntax
    pub root_margin: String,
    /// Whether the element stays visible after the first reveal
    pub trigger_once: bool,
}

impl RevealConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }

    pub fn with_trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }
}

/// Visibility state of a tracked element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    is_visible: bool,
    has_triggered: bool,
    trigger_once: bool,
}

impl RevealState {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            is_visible: false,
            has_triggered: false,
            trigger_once,
        }
    }

    /// State used when animations are unavailable or unwanted: visible for good.
    pub fn always_visible() -> Self {
        Self {
            is_visible: true,
            has_triggered: true,
            trigger_once: true,
        }
    }

    /// Apply one intersection event.
    ///
    /// Returns true if `is_visible` changed.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        let before = self.is_visible;

        if is_intersecting {
            if !self.trigger_once || !self.has_triggered {
                self.is_visible = true;
                self.has_triggered = true;
            }
        } else if !self.trigger_once {
            self.is_visible = false;
        }

        before != self.is_visible
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// Once-only states that already fired can stop observing.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_triggered
    }
}

/// Direction an element travels while being revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Offset applied while hidden, in pixels
    pub fn hidden_offset(&self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (distance, 0.0),
            Direction::Right => (-distance, 0.0),
        }
    }
}

/// Inline style of a revealed element at a given visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub direction: Direction,
    /// Travel distance in pixels
    pub distance: f64,
    /// Transition duration in milliseconds
    pub duration_ms: u32,
    /// Transition delay in milliseconds
    pub delay_ms: u32,
}

impl RevealStyle {
    pub fn new(direction: Direction, distance: f64, duration_ms: u32) -> Self {
        Self {
            direction,
            distance,
            duration_ms,
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn offset(&self, visible: bool) -> (f64, f64) {
        if visible {
            (0.0, 0.0)
        } else {
            self.direction.hidden_offset(self.distance)
        }
    }

    pub fn transform(&self, visible: bool) -> String {
        let (x, y) = self.offset(visible);
        format!("translate({}px, {}px)", x, y)
    }

    pub fn transition(&self) -> String {
        format!(
            "opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms",
            d = self.duration_ms,
            e = REVEAL_EASING,
            delay = self.delay_ms
        )
    }

    /// Full inline style string for the element
    pub fn css(&self, visible: bool) -> String {
        format!(
            "opacity: {}; transform: {}; transition: {}; will-change: {};",
            if visible { 1 } else { 0 },
            self.transform(visible),
            self.transition(),
            if visible { "auto" } else { "opacity, transform" }
        )
    }
}

/// Delay for the child at `index` of a staggered group
pub fn stagger_delay(index: usize, stagger_ms: u32, base_ms: u32) -> u32 {
    let step = u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms);
    base_ms.saturating_add(step)
}

/// One character of an animated headline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealGlyph {
    pub index: usize,
    /// Character to render; spaces become non-breaking so they keep their width
    pub text: char,
}

/// Split a headline into per-character reveal units
pub fn split_glyphs(text: &str) -> Vec<RevealGlyph> {
    text.chars()
        .enumerate()
        .map(|(index, c)| RevealGlyph {
            index,
            text: if c == ' ' { '\u{00A0}' } else { c },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin, "0px 0px -100px 0px");
        assert!(config.trigger_once);
    }

    #[test]
    fn test_config_threshold_is_clamped() {
        assert_eq!(RevealConfig::new(1.5).threshold, 1.0);
        assert_eq!(RevealConfig::new(-0.2).threshold, 0.0);
        assert_eq!(RevealConfig::new(0.3).threshold, 0.3);
    }

    #[test]
    fn test_trigger_once_never_reverts() {
        // Walk every event sequence of length 8
        for mask in 0u32..256 {
            let mut state = RevealState::new(true);
            let mut seen_visible = false;
            for bit in 0..8 {
                state.observe(mask & (1 << bit) != 0);
                if seen_visible {
                    assert!(state.is_visible(), "reverted for sequence {:#010b}", mask);
                }
                seen_visible |= state.is_visible();
            }
            assert_eq!(seen_visible, mask != 0);
        }
    }

    #[test]
    fn test_repeating_reveal_toggles() {
        let mut state = RevealState::new(false);
        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(state.observe(false));
        assert!(!state.is_visible());
        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(!state.is_settled());
    }

    #[test]
    fn test_leaving_before_entering_is_noop() {
        let mut state = RevealState::new(false);
        assert!(!state.observe(false));
        assert!(!state.is_visible());
        assert!(!state.has_triggered());
    }

    #[test]
    fn test_once_state_settles() {
        let mut state = RevealState::new(true);
        assert!(!state.is_settled());
        state.observe(true);
        assert!(state.is_settled());
        assert!(!state.observe(false));
    }

    #[test]
    fn test_always_visible() {
        let mut state = RevealState::always_visible();
        assert!(state.is_visible());
        state.observe(false);
        assert!(state.is_visible());
    }

    #[test]
    fn test_hidden_offsets() {
        assert_eq!(Direction::Up.hidden_offset(30.0), (0.0, 30.0));
        assert_eq!(Direction::Down.hidden_offset(30.0), (0.0, -30.0));
        assert_eq!(Direction::Left.hidden_offset(30.0), (30.0, 0.0));
        assert_eq!(Direction::Right.hidden_offset(30.0), (-30.0, 0.0));
    }

    #[test]
    fn test_visible_style_has_no_offset() {
        let style = RevealStyle::new(Direction::Left, 20.0, 600);
        assert_eq!(style.offset(true), (0.0, 0.0));
        assert_eq!(style.transform(true), "translate(0px, 0px)");
        assert_eq!(style.transform(false), "translate(20px, 0px)");
    }

    #[test]
    fn test_css_string() {
        let style = RevealStyle::new(Direction::Up, 30.0, 600).with_delay(200);
        let hidden = style.css(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate(0px, 30px)"));
        assert!(hidden.contains("opacity 600ms cubic-bezier(0.4, 0, 0.2, 1) 200ms"));
        assert!(hidden.contains("will-change: opacity, transform;"));

        let shown = style.css(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("will-change: auto;"));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0, 100, 0), 0);
        assert_eq!(stagger_delay(3, 100, 0), 300);
        assert_eq!(stagger_delay(2, 30, 500), 560);
        assert_eq!(stagger_delay(usize::MAX, 100, 0), u32::MAX);
    }

    #[test]
    fn test_split_glyphs_preserves_order_and_spaces() {
        let glyphs = split_glyphs("Hi there");
        assert_eq!(glyphs.len(), 8);
        assert_eq!(glyphs[0].text, 'H');
        assert_eq!(glyphs[2].text, '\u{00A0}');
        assert!(glyphs.iter().enumerate().all(|(i, g)| g.index == i));
    }
}

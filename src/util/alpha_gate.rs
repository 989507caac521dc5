//! Rewriting the color channel of a whole vertex array is O(n), so it only
//! happens when the requested alpha has moved by more than an epsilon since
//! the last rewrite.

/// Default change threshold for alpha rewrites.
pub const ALPHA_EPSILON: f32 = 0.01;

/// Remembers the last applied alpha and reports meaningful changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaGate {
    applied: f32,
    epsilon: f32,
}

impl AlphaGate {
    /// Gate that considers `initial` already applied.
    pub fn new(initial: f32, epsilon: f32) -> Self {
        Self {
            applied: initial,
            epsilon,
        }
    }

    /// Accept `alpha` if it differs from the applied value by more than the
    /// epsilon. Returns `true` when the caller must rewrite its colors.
    pub fn refresh(&mut self, alpha: f32) -> bool {
        if (alpha - self.applied).abs() > self.epsilon {
            self.applied = alpha;
            true
        } else {
            false
        }
    }

    /// The last accepted alpha.
    pub fn applied(&self) -> f32 {
        self.applied
    }
}

impl Default for AlphaGate {
    fn default() -> Self {
        Self::new(0.0, ALPHA_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_changes_are_ignored() {
        let mut gate = AlphaGate::new(1.0, ALPHA_EPSILON);
        assert!(!gate.refresh(0.995));
        assert!(!gate.refresh(1.0));
        assert_eq!(gate.applied(), 1.0);
    }

    #[test]
    fn large_change_is_applied_once() {
        let mut gate = AlphaGate::default();
        assert!(gate.refresh(0.5));
        assert_eq!(gate.applied(), 0.5);
        assert!(!gate.refresh(0.5));
        assert!(gate.refresh(0.3));
    }
}

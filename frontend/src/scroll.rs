/// Decides when the sticky header switches to its compact style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWatcher {
    threshold: f64,
}

impl ScrollWatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let watcher = ScrollWatcher::new(10.0);
        assert!(watcher.is_scrolled(11.0));
        assert!(!watcher.is_scrolled(10.0));
        assert!(!watcher.is_scrolled(0.0));
    }

    #[test]
    fn scrolling_back_up_clears_it() {
        let watcher = ScrollWatcher::new(10.0);
        let states: Vec<bool> = [0.0, 11.0, 480.0, 0.0]
            .into_iter()
            .map(|y| watcher.is_scrolled(y))
            .collect();
        assert_eq!(states, vec![false, true, true, false]);
    }
}

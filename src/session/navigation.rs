/// Cursor over a fixed, non-empty list of questions.
///
/// Every operation is total: moving past either end leaves the cursor
/// where it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: usize,
}

impl Navigator {
    /// `len` is clamped to at least one so `current` is always a valid index.
    pub fn new(len: usize) -> Self {
        Self {
            current: 0,
            len: len.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.len
    }

    /// Returns true if the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Returns true if the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_stops_at_last() {
        let mut nav = Navigator::new(3);
        assert!(nav.advance());
        assert!(nav.advance());
        assert!(nav.is_last());
        assert!(!nav.advance());
        assert_eq!(nav.current(), 2);
    }

    #[test]
    fn test_retreat_stops_at_first() {
        let mut nav = Navigator::new(3);
        assert!(nav.is_first());
        assert!(!nav.retreat());
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_advance_then_retreat_returns_to_start() {
        for start in 0..4 {
            let mut nav = Navigator::new(5);
            for _ in 0..start {
                nav.advance();
            }
            nav.advance();
            nav.retreat();
            assert_eq!(nav.current(), start);
        }
    }

    #[test]
    fn test_single_question_is_first_and_last() {
        let mut nav = Navigator::new(1);
        assert!(nav.is_first() && nav.is_last());
        assert!(!nav.advance());
        assert!(!nav.retreat());
    }

    #[test]
    fn test_zero_length_is_clamped() {
        let nav = Navigator::new(0);
        assert_eq!(nav.len(), 1);
        assert_eq!(nav.current(), 0);
    }
}

//! Message flow paging
//!
//! `MessagePager` walks a fixed list of notes one page at a time. Advancing
//! past the last page does not move the index; it reports completion so the
//! caller can leave the flow.

use crate::content::Note;

/// Result of pressing "next"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAdvance {
    /// Moved to the page at this index
    Moved(usize),
    /// Already on the last page, the flow is done
    Completed,
}

/// Zero-based cursor over a fixed list of notes
#[derive(Debug, Clone)]
pub struct MessagePager {
    notes: &'static [Note],
    index: usize,
}

impl MessagePager {
    pub fn new(notes: &'static [Note]) -> Self {
        Self { notes, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn notes(&self) -> &'static [Note] {
        self.notes
    }

    /// The note on the current page
    pub fn current(&self) -> Option<&'static Note> {
        self.notes.get(self.index)
    }

    /// True on the last page (and for an empty list)
    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.notes.len()
    }

    /// Move to the next page, or report completion from the last one
    pub fn advance(&mut self) -> PageAdvance {
        if self.is_last() {
            return PageAdvance::Completed;
        }
        self.index += 1;
        PageAdvance::Moved(self.index)
    }

    /// Reading progress in `0.0..=1.0`, counting the current page as read
    pub fn progress(&self) -> f32 {
        if self.notes.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f32 / self.notes.len() as f32
    }

    /// Whether the page at `index` has been reached
    pub fn is_reached(&self, index: usize) -> bool {
        index <= self.index
    }
}

/// State of the flow phase: the intro note, then the pager
#[derive(Debug, Clone)]
pub struct FlowState {
    show_intro: bool,
    pager: MessagePager,
}

impl FlowState {
    pub fn new(notes: &'static [Note]) -> Self {
        Self {
            show_intro: true,
            pager: MessagePager::new(notes),
        }
    }

    pub fn show_intro(&self) -> bool {
        self.show_intro
    }

    pub fn pager(&self) -> &MessagePager {
        &self.pager
    }

    /// Dismiss the intro note
    ///
    /// Returns false if the intro was already gone.
    pub fn begin_reading(&mut self) -> bool {
        std::mem::replace(&mut self.show_intro, false)
    }

    /// Next page. Ignored while the intro is still shown.
    pub fn next(&mut self) -> Option<PageAdvance> {
        if self.show_intro {
            return None;
        }
        Some(self.pager.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NOTES;

    #[test]
    fn test_advance_moves_until_last() {
        let n = NOTES.len();
        for i in 0..n {
            let mut pager = MessagePager::new(NOTES);
            for _ in 0..i {
                pager.advance();
            }
            assert_eq!(pager.index(), i);

            let result = pager.advance();
            if i < n - 1 {
                assert_eq!(result, PageAdvance::Moved(i + 1));
                assert_eq!(pager.index(), i + 1);
            } else {
                assert_eq!(result, PageAdvance::Completed);
                assert_eq!(pager.index(), i);
            }
        }
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut pager = MessagePager::new(NOTES);
        for _ in 0..(NOTES.len() * 3) {
            pager.advance();
            assert!(pager.index() < NOTES.len());
            assert!(pager.current().is_some());
        }
    }

    #[test]
    fn test_progress() {
        let mut pager = MessagePager::new(NOTES);
        assert!((pager.progress() - 0.1).abs() < f32::EPSILON);

        while pager.advance() != PageAdvance::Completed {}
        assert!((pager.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_list_completes_immediately() {
        let mut pager = MessagePager::new(&[]);
        assert!(pager.current().is_none());
        assert!(pager.is_last());
        assert_eq!(pager.progress(), 0.0);
        assert_eq!(pager.advance(), PageAdvance::Completed);
    }

    #[test]
    fn test_reached_dots() {
        let mut pager = MessagePager::new(NOTES);
        pager.advance();
        pager.advance();

        assert!(pager.is_reached(0));
        assert!(pager.is_reached(2));
        assert!(!pager.is_reached(3));
    }

    #[test]
    fn test_intro_gates_paging() {
        let mut flow = FlowState::new(NOTES);
        assert!(flow.show_intro());
        assert_eq!(flow.next(), None);
        assert_eq!(flow.pager().index(), 0);

        assert!(flow.begin_reading());
        assert!(!flow.begin_reading());
        assert_eq!(flow.next(), Some(PageAdvance::Moved(1)));
    }

    #[test]
    fn test_nine_nexts_then_completion() {
        let mut flow = FlowState::new(NOTES);
        flow.begin_reading();

        for expected in 1..NOTES.len() {
            assert_eq!(flow.next(), Some(PageAdvance::Moved(expected)));
        }
        assert!(flow.pager().is_last());
        assert_eq!(flow.next(), Some(PageAdvance::Completed));
    }
}

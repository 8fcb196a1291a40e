//! Notice records and the ordered notice collection

use serde::{Deserialize, Serialize};

use crate::errors::NoticeBoardError;
use crate::models::color::{ColorSource, NoticeColor};

/// A single posted notice: display text plus its assigned color.
///
/// Text and color live in one record so they can never fall out of
/// alignment when notices are inserted or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub text: String,
    pub color: NoticeColor,
}

/// The ordered, insertion-order-preserving collection of posted notices.
///
/// Identity is positional: callers address notices by their index in the
/// list widget. All mutations run synchronously on the UI event thread.
pub struct NoticeBoard {
    notices: Vec<Notice>,
    colors: Box<dyn ColorSource>,
}

impl NoticeBoard {
    pub fn new(colors: Box<dyn ColorSource>) -> Self {
        Self {
            notices: Vec::new(),
            colors,
        }
    }

    /// Append a new notice with a freshly generated color.
    ///
    /// Input is trimmed; whitespace-only input is rejected without mutating
    /// the collection.
    pub fn post(&mut self, raw: &str) -> Result<&Notice, NoticeBoardError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(NoticeBoardError::empty_post());
        }
        let color = self.colors.next_color();
        let index = self.notices.len();
        self.notices.push(Notice {
            text: text.to_string(),
            color,
        });
        Ok(&self.notices[index])
    }

    /// Replace the text of the notice at `selection` in place, keeping its
    /// color. Fails without mutating on an absent/out-of-range selection or
    /// on trimmed-empty text.
    pub fn update(&mut self, selection: Option<usize>, raw: &str) -> Result<&Notice, NoticeBoardError> {
        let index = selection
            .filter(|&i| i < self.notices.len())
            .ok_or_else(NoticeBoardError::no_selection_for_update)?;
        let text = raw.trim();
        if text.is_empty() {
            return Err(NoticeBoardError::empty_update());
        }
        self.notices[index].text = text.to_string();
        Ok(&self.notices[index])
    }

    /// Remove and return the notice at `selection` (text and color together).
    /// Fails without mutating on an absent/out-of-range selection.
    pub fn delete(&mut self, selection: Option<usize>) -> Result<Notice, NoticeBoardError> {
        let index = selection
            .filter(|&i| i < self.notices.len())
            .ok_or_else(NoticeBoardError::no_selection_for_delete)?;
        Ok(self.notices.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Notice> {
        self.notices.get(index)
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedColorSource(NoticeColor);

    impl ColorSource for FixedColorSource {
        fn next_color(&mut self) -> NoticeColor {
            self.0
        }
    }

    fn board_with_color(color: NoticeColor) -> NoticeBoard {
        NoticeBoard::new(Box::new(FixedColorSource(color)))
    }

    #[test]
    fn post_trims_and_assigns_color_from_source() {
        let color = NoticeColor::new(1, 2, 3);
        let mut board = board_with_color(color);

        let notice = board.post("  Meeting at 10am  ").unwrap();
        assert_eq!(notice.text, "Meeting at 10am");
        assert_eq!(notice.color, color);
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn update_keeps_existing_color() {
        let mut board = board_with_color(NoticeColor::new(9, 9, 9));
        board.post("original").unwrap();

        let updated = board.update(Some(0), "changed").unwrap();
        assert_eq!(updated.text, "changed");
        assert_eq!(updated.color, NoticeColor::new(9, 9, 9));
    }

    #[test]
    fn delete_returns_removed_notice() {
        let mut board = board_with_color(NoticeColor::new(5, 5, 5));
        board.post("first").unwrap();
        board.post("second").unwrap();

        let removed = board.delete(Some(0)).unwrap();
        assert_eq!(removed.text, "first");
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(0).unwrap().text, "second");
    }
}

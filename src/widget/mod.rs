//! Participant trait and the built-in leaf widgets.
//!
//! Every widget renders into a [`Block`](crate::block::Block) of exactly
//! its assigned size. Text is cropped, never wrapped.

mod line_editor;
mod list;
mod spacer;
mod table;
mod text_editor;
mod text_view;
mod traits;

pub use line_editor::LineEditor;
pub use list::{List, ListConfig, ListItem};
pub use spacer::Spacer;
pub use table::{Table, TableCell, TableConfig};
pub use text_editor::{TextEditor, TextEditorConfig};
pub use text_view::TextView;
pub use traits::{Action, Context, Participant};

use crate::block::display_width;
use unicode_segmentation::UnicodeSegmentation;

/// Longest prefix of `text` that fits in `width` columns.
fn take_width(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for (idx, grapheme) in text.grapheme_indices(true) {
        let w = display_width(grapheme);
        if used + w > width {
            break;
        }
        used += w;
        end = idx + grapheme.len();
    }
    &text[..end]
}

/// Shorten `text` to `width` columns, ending in `...` when there is room.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return take_width(text, width).to_string();
    }
    format!("{}...", take_width(text, width - 3))
}

/// Convert a row/column count for `set_str` coordinates.
pub(crate) fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide() {
        assert_eq!(truncate("日本語です", 7), "日本...");
        assert_eq!(take_width("日本", 3), "日");
    }
}

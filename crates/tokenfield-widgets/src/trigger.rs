#![forbid(unsafe_code)]

//! Trigger detection for the completion menu.
//!
//! The session is a pure function of document and selection. After every
//! edit and every cursor move the field re-derives it from scratch with
//! [`detect`]; nothing patches stored session state incrementally, so the
//! menu can never survive the conditions that opened it.
//!
//! ```text
//!             every edit / cursor move
//!            +---------------------------+
//!            |                           |
//!            v                           |
//!       +---------+   detect: hit    +--------+
//!       |  idle   | ---------------> | active |
//!       | no menu | <--------------- |  menu  |
//!       +---------+   detect: miss   +--------+
//! ```
//!
//! Escape clears the session until the next edit interval. Committing
//! rewrites the document, after which detect finds no trigger run and the
//! session closes on its own.
//!
//! A trigger run is, reading left from a collapsed selection: one `@`
//! followed by one or more word graphemes reaching exactly to the caret,
//! with end of line, whitespace, or a chip to the caret's right. The `@`
//! may sit mid-text (`hi@va` triggers, as the `@` ends the previous word),
//! but a chip between the `@` and the caret breaks the run.

use tokenfield_core::document::{Span, is_word_grapheme};
use unicode_segmentation::UnicodeSegmentation;

use crate::{EditSurface, Unit};

/// An active completion session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSession {
    /// The atom span of the whole trigger run, `@` included. Committing
    /// replaces exactly this span with a chip.
    pub anchor: Span,

    /// The text after the `@`, used to filter the catalog.
    pub prefix: String,

    /// Index of the highlighted candidate in the filtered list.
    pub highlighted: usize,
}

/// Direction of menu navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Move the highlight down, wrapping to the top.
    Next,
    /// Move the highlight up, wrapping to the bottom.
    Previous,
}

/// Derive the completion session from the surface's current state.
///
/// Returns `None` unless the selection is collapsed at the end of a
/// trigger run. The scan never crosses a chip: word motion treats chips as
/// units of their own, and [`EditSurface::text_between`] yields nothing
/// for them, so an `@` separated from the caret by a chip cannot match.
#[must_use]
pub fn detect<S: EditSurface + ?Sized>(surface: &S) -> Option<TriggerSession> {
    let selection = surface.selection()?;
    if !selection.is_collapsed() {
        return None;
    }
    let caret = selection.head;
    let word_start = surface.position_before(caret, Unit::Word)?;
    let run_start = surface.position_before(word_start, Unit::Character)?;
    let window = surface.text_between(Span::new(run_start, caret));
    let prefix = match_trigger_run(&window)?;
    if !clear_to_the_right(surface, caret) {
        return None;
    }
    Some(TriggerSession {
        anchor: Span::new(run_start, caret),
        prefix: prefix.to_string(),
        highlighted: 0,
    })
}

/// `@` plus at least one word grapheme, nothing else.
fn match_trigger_run(window: &str) -> Option<&str> {
    let prefix = window.strip_prefix('@')?;
    if prefix.is_empty() {
        return None;
    }
    if prefix.graphemes(true).all(is_word_grapheme) {
        Some(prefix)
    } else {
        None
    }
}

/// End of line, whitespace, or a chip immediately after the caret.
fn clear_to_the_right<S: EditSurface + ?Sized>(surface: &S, caret: usize) -> bool {
    match surface.position_after(caret, Unit::Character) {
        None => true,
        Some(next) => {
            let ahead = surface.text_between(Span::new(caret, next));
            ahead.is_empty() || ahead.chars().next().is_some_and(char::is_whitespace)
        }
    }
}

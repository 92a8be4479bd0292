#![forbid(unsafe_code)]

//! Core: document model, template codec, variable catalog, and input events.
//!
//! # Role in tokenfield
//! `tokenfield-core` is the data layer. It owns the single-line document of
//! text and variable chips, the atom-indexed position math, the `${name}`
//! template codec, and the normalized input event types the widget consumes.
//!
//! # Primary responsibilities
//! - **Document**: one line of text segments and atomic variable chips, with
//!   grapheme-aware positions, word boundaries, and edit operations.
//! - **Template codec**: `decode` a `${name}` template into a document and
//!   `encode` a document back; unrecognized markers stay literal text, so
//!   every template round-trips unchanged.
//! - **Catalog**: the fixed set of variable names, with prefix filtering for
//!   the completion menu and exact resolution for decoding.
//! - **Event**: canonical key and paste events with modifier flags.
//!
//! # How it fits in the system
//! The widget crate (`tokenfield-widgets`) drives a [`Document`] through a
//! [`TokenField`](https://docs.rs/tokenfield-widgets) and consumes
//! [`Event`] values fed in by the host. Nothing in this crate renders or
//! touches a terminal; hosts walk [`Document::segments`] and draw chips
//! however they like.
//!
//! ```
//! use tokenfield_core::{Catalog, template};
//!
//! let catalog = Catalog::new(["user", "host"]);
//! let doc = template::decode("Hello ${user}, this is ${typo}", &catalog);
//! // `${user}` became a chip; `${typo}` is not in the catalog and stayed text.
//! assert_eq!(template::encode(&doc), "Hello ${user}, this is ${typo}");
//! ```

pub mod catalog;
pub mod document;
pub mod event;
pub mod template;

pub use catalog::Catalog;
pub use document::{Document, Segment, SegmentKind, Selection, Span};
pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, PasteEvent};

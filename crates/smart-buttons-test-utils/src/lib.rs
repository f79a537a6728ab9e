//! Test utilities for the smart-buttons crates.
//!
//! - [`fixtures`]: document setup helpers (mounting, laying out nodes)
//! - [`EventRecorder`]: records handler invocations for later assertions
//!
//! # Example
//!
//! ```rust
//! use smart_buttons_dom::{Document, EventTarget, EventType};
//! use smart_buttons_test_utils::{fixtures, EventRecorder};
//!
//! let doc = Document::new();
//! let node = fixtures::mounted_element(&doc, "button");
//!
//! let recorder = EventRecorder::new();
//! doc.add_listener(EventTarget::Node(node), EventType::Click, recorder.handler("save"));
//! doc.click(node);
//!
//! assert_eq!(recorder.count_label("save"), 1);
//! ```
//!
//! # Design
//!
//! Recorders are cheap clones sharing one call log behind a `Mutex`, so a
//! handler can be moved into the document while the test keeps a handle.

pub mod fixtures;
pub mod recorder;

pub use recorder::{EventRecorder, RecordedCall};

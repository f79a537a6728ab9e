//! Vector math re-exported from [`glam`].
//!
//! Pointer coordinates and node offsets are plain [`Vec2`] values in
//! document (client) space.
//!
//! ```
//! use smart_buttons_core::math::Vec2;
//!
//! let pointer = Vec2::new(40.0, 12.0);
//! let origin = Vec2::new(10.0, 2.0);
//! assert_eq!(pointer - origin, Vec2::new(30.0, 10.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;

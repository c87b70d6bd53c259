//! Position/progress engine for the orbit carousel and scroll-linked
//! slideshow.
//!
//! One continuous scalar (rotation degrees or scroll fraction) plus a
//! cached active index, advanced by three competing writers: frame-driven
//! auto-play, user wheel input, and explicit jump requests. A single
//! motion state machine arbitrates between them so a scripted move is
//! never reinterpreted as user input.
//!
//! The engine is purely delta-time driven: the host feeds elapsed
//! milliseconds into [`ProgressEngine::advance_by_time`] each frame, so
//! tests can drive it without a real display loop.

pub mod projector;
pub mod state;

pub use projector::{project, OrbitGeometry, ProjectedVisual};
pub use state::{EngineMode, HostCommand, MotionState, ProgressEngine, SurfaceMetrics};

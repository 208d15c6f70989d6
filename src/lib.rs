//! Hello GPU
//!
//! Small wgpu demos driven by winit: a spinning triangle and quad, a
//! tumbling cube, a textured cube in perspective, and a menu overlay with
//! keyboard, mouse and gamepad navigation.

/// Window loop, renderer, input and configuration shared by every demo
pub mod app;

/// Build-time information (git SHA, branch, timestamp, etc.)
pub mod build_info;

/// The individual demos, one per binary
pub mod demos;

/// Startup health checks and their report
pub mod health;

/// Tracing subscriber setup for the binaries
pub mod logging;

/// Glyph atlas and text layout
pub mod text;

/// Menu overlay: scenes, focus, controls and transitions
pub mod ui;

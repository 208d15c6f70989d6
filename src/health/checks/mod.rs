//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod debug_ui;
pub mod glyph_atlas;
pub mod graphics_backend;
pub mod system_info;
pub mod ui_state;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use debug_ui::DebugUICheck;
pub use glyph_atlas::GlyphAtlasCheck;
pub use graphics_backend::GraphicsBackendCheck;
pub use system_info::SystemInfoCheck;
pub use ui_state::UiStateCheck;

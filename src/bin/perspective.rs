//! Textured cube in perspective

use hello_gpu::demos::PerspectiveDemo;

fn main() -> anyhow::Result<()> {
    hello_gpu::logging::init_tracing();
    hello_gpu::app::run::<PerspectiveDemo>()
}

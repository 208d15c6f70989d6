//! Spinning triangle

use hello_gpu::demos::TriangleDemo;

fn main() -> anyhow::Result<()> {
    hello_gpu::logging::init_tracing();
    hello_gpu::app::run::<TriangleDemo>()
}

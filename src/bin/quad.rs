//! Spinning quad

use hello_gpu::demos::QuadDemo;

fn main() -> anyhow::Result<()> {
    hello_gpu::logging::init_tracing();
    hello_gpu::app::run::<QuadDemo>()
}

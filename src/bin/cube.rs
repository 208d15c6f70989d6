//! Tumbling colored cube

use hello_gpu::demos::CubeDemo;

fn main() -> anyhow::Result<()> {
    hello_gpu::logging::init_tracing();
    hello_gpu::app::run::<CubeDemo>()
}

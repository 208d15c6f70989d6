//! Menu overlay with keyboard, mouse and gamepad navigation

use hello_gpu::demos::MenuDemo;

fn main() -> anyhow::Result<()> {
    hello_gpu::logging::init_tracing();
    hello_gpu::app::run::<MenuDemo>()
}

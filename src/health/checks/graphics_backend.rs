//! Graphics backend health check

use std::collections::BTreeSet;

use crate::app::renderer::texture::DEPTH_FORMAT;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that wgpu finds an adapter able to run the demos
pub struct GraphicsBackendCheck;

impl GraphicsBackendCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphicsBackendCheck {
    fn default() -> Self {
        Self::new()
    }
}

fn device_type_name(device_type: wgpu::DeviceType) -> &'static str {
    match device_type {
        wgpu::DeviceType::DiscreteGpu => "Discrete GPU",
        wgpu::DeviceType::IntegratedGpu => "Integrated GPU",
        wgpu::DeviceType::VirtualGpu => "Virtual GPU",
        wgpu::DeviceType::Cpu => "CPU",
        wgpu::DeviceType::Other => "Other",
    }
}

impl SystemCheck for GraphicsBackendCheck {
    fn name(&self) -> &'static str {
        "Graphics Backend"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates adapter availability and depth buffer support")
    }

    fn requires_gpu(&self) -> bool {
        true
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let adapters: Vec<_> = instance
            .enumerate_adapters(wgpu::Backends::all())
            .into_iter()
            .collect();

        if adapters.is_empty() {
            details.push("  ✗ No graphics adapters found".to_string());
            return CheckResult::fail("No compatible graphics adapters available")
                .with_details(details.join("\n"));
        }
        details.push(format!("  ✓ Found {} adapter(s)", adapters.len()));

        let mut backends = BTreeSet::new();
        let mut hardware = false;
        let mut depth_ok = false;

        for (i, adapter) in adapters.iter().enumerate() {
            let info = adapter.get_info();
            backends.insert(format!("{:?}", info.backend));
            hardware |= matches!(
                info.device_type,
                wgpu::DeviceType::DiscreteGpu | wgpu::DeviceType::IntegratedGpu
            );

            // The cube demos render into a depth attachment
            let depth = adapter
                .get_texture_format_features(DEPTH_FORMAT)
                .allowed_usages
                .contains(wgpu::TextureUsages::RENDER_ATTACHMENT);
            depth_ok |= depth;

            details.push(format!(
                "    [{i}] {} - {} ({:?}){}",
                info.name,
                device_type_name(info.device_type),
                info.backend,
                if depth { "" } else { ", no depth attachment" }
            ));
        }

        details.push(format!(
            "  Backends available: {}",
            backends.into_iter().collect::<Vec<_>>().join(", ")
        ));

        if !depth_ok {
            CheckResult::fail(format!("No adapter supports {DEPTH_FORMAT:?} attachments"))
                .with_details(details.join("\n"))
        } else if hardware {
            CheckResult::pass(format!("{} adapters found (hardware GPU available)", adapters.len()))
                .with_details(details.join("\n"))
        } else {
            CheckResult::warn(format!(
                "{} adapters found (software rendering only)",
                adapters.len()
            ))
            .with_details(details.join("\n"))
        }
    }
}

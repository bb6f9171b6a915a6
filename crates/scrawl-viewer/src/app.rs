use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use scrawl_engine::coords::Viewport;
use scrawl_engine::device::{Gpu, GpuInit, SurfaceErrorAction};
use scrawl_engine::engine::{EngineConfig, Renderer2D};
use scrawl_engine::gpu::WgpuSink;

use crate::scene;

pub fn run() -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
    let mut state = ViewerState::new();

    event_loop
        .run_app(&mut state)
        .context("winit event loop terminated with error")?;

    Ok(())
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct ViewerState {
    entry: Option<WindowEntry>,
    renderer: Renderer2D,
    sink: Option<WgpuSink>,
    frame_index: u64,
    exit_requested: bool,
}

impl ViewerState {
    fn new() -> Self {
        Self {
            entry: None,
            renderer: Renderer2D::new(EngineConfig::default()),
            sink: None,
            frame_index: 0,
            exit_requested: false,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("scrawl viewer")
            .with_inner_size(LogicalSize::new(1024.0, 640.0));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let entry = WindowEntryBuilder {
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, GpuInit::default()))
                    .expect("GPU initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }

    fn draw_frame(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        // Split borrows so the ouroboros closure does not capture `self`.
        let renderer = &mut self.renderer;
        let sink_slot = &mut self.sink;
        let frame_index = self.frame_index;
        let mut fatal = false;

        entry.with_mut(|fields| {
            let gpu = fields.gpu;
            let window: &Window = fields.window;

            let mut frame = match gpu.begin_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    if gpu.handle_surface_error(err) == SurfaceErrorAction::Fatal {
                        fatal = true;
                    }
                    return;
                }
            };

            // Clear pass; dropped before the shape pass opens.
            {
                let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("viewer clear"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &frame.view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Clear(wgpu::Color {
                                r: 0.02,
                                g: 0.02,
                                b: 0.04,
                                a: 1.0,
                            }),
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                    multiview_mask: None,
                });
            }

            let scale = window.scale_factor() as f32;
            let phys = window.inner_size();
            let viewport = Viewport::new(
                phys.width.max(1) as f32 / scale,
                phys.height.max(1) as f32 / scale,
            );

            let sink = sink_slot.get_or_insert_with(|| {
                WgpuSink::new(gpu.device(), gpu.queue(), gpu.surface_format())
            });

            sink.begin_frame(&mut frame.encoder, &frame.view, viewport, scale);

            let t = frame_index as f32 / 60.0;
            scene::build(renderer, viewport, t);
            if let Err(err) = renderer.flush(sink) {
                log::error!("frame flush failed: {err}");
            }

            sink.end_frame();

            window.pre_present_notify();
            gpu.submit(frame);
        });

        if fatal {
            self.exit_requested = true;
        }
        self.frame_index = self.frame_index.wrapping_add(1);
    }
}

impl ApplicationHandler for ViewerState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            event_loop.exit();
            return;
        }

        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; the scene animates.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                    entry.with_window(|w| w.request_redraw());
                }
            }

            WindowEvent::RedrawRequested => {
                self.draw_frame();
                if self.exit_requested {
                    event_loop.exit();
                }
            }

            _ => {}
        }
    }
}

use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use quadblit::{Pipeline, PipelineError};

use crate::args::Args;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    pipeline: Pipeline,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(args.width, args.height)))
            .with_resizable(false)
            .with_title("Offscreen blit demo");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .unwrap();

        let handle = window.as_ref().map(|w| w.raw_window_handle());
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(handle);

        let gl_window = GlWindow::new(window.unwrap(), &gl_config);

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attr)
                .unwrap()
        }
        .make_current(&gl_window.surface)
        .unwrap();

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        // frame dimensions are fixed from the created surface, never resized
        let size = gl_window.window.inner_size();
        let pipeline = Pipeline::new(size.width, size.height)?;

        // the blit sampler is unread by its fragment stage, so -1 is normal
        // there; the visualize location is asserted valid at construction
        eprintln!(
            "pipeline ready: {}x{}, sampler locations: blit {}, visualize {}",
            pipeline.width(),
            pipeline.height(),
            pipeline.blit_sampler_location(),
            pipeline.visualize_sampler_location(),
        );

        Ok(Self {
            event_loop,
            gl_context,
            gl_window,
            pipeline,
        })
    }

    pub fn run(mut self) -> ! {
        self.event_loop
            .run(move |event, _window_target, control_flow| {
                *control_flow = ControlFlow::Wait;
                match event {
                    Event::RedrawEventsCleared => {
                        self.gl_window.window.request_redraw();
                        self.gl_window
                            .surface
                            .swap_buffers(&self.gl_context)
                            .unwrap();
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::KeyboardInput { input, .. } => {
                            if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                                && input.state == ElementState::Pressed
                            {
                                control_flow.set_exit();
                            }
                        }
                        WindowEvent::CloseRequested => {
                            control_flow.set_exit();
                        }
                        _ => (),
                    },
                    Event::RedrawRequested(_) => {
                        self.pipeline.render_frame();
                    }
                    _ => (),
                }
            })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Self {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .unwrap()
        };

        Self { window, surface }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Pipeline(#[from] PipelineError),
}

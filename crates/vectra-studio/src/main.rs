//! Minimal host for the vectra engine.
//!
//! Owns a fixed shape collection, logs its convex hull and draws it in a window.
//! Keys: `r` rotates the square, `s` grows the rectangle, `0` resets both, `Esc` quits.

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use vectra_engine::core::{App, AppControl, FrameCtx};
use vectra_engine::device::GpuInit;
use vectra_engine::frame::{FrameDriver, RenderConfig};
use vectra_engine::hull::shapes_hull;
use vectra_engine::logging::{init_logging, LoggingConfig};
use vectra_engine::paint::Color;
use vectra_engine::scene::{
    Effect, Line, Point, Polygon, Rectangle, Shape, ShapeId, Square, VertexColors,
};
use vectra_engine::window::{Runtime, RuntimeConfig};

const SQUARE: usize = 1;
const RECTANGLE: usize = 2;

struct Studio {
    shapes: Vec<Shape>,
    driver: FrameDriver,
    dirty: bool,
}

impl Studio {
    fn new(config: RenderConfig) -> Result<Self> {
        let shapes = demo_shapes()?;
        log_hull(&shapes);
        Ok(Self {
            shapes,
            driver: FrameDriver::new(config),
            dirty: true,
        })
    }

    fn update_effect(&mut self, index: usize, f: impl FnOnce(Effect) -> Effect) {
        let Some(shape) = self.shapes.get_mut(index) else { return };
        let next = f(Effect::or_identity(shape.effect()));
        shape.set_effect((!next.is_identity()).then_some(next));
        log_hull(&self.shapes);
        self.dirty = true;
    }
}

impl App for Studio {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return AppControl::Continue;
        };
        if event.state != ElementState::Pressed {
            return AppControl::Continue;
        }

        match event.logical_key.as_ref() {
            Key::Named(NamedKey::Escape) => return AppControl::Exit,
            Key::Character("r") => self.update_effect(SQUARE, |e| Effect { rotate: e.rotate + 15.0, ..e }),
            Key::Character("s") => self.update_effect(RECTANGLE, |e| Effect { scale: e.scale * 1.1, ..e }),
            Key::Character("0") => {
                self.update_effect(SQUARE, |_| Effect::IDENTITY);
                self.update_effect(RECTANGLE, |_| Effect::IDENTITY);
            }
            _ => {}
        }
        AppControl::Continue
    }

    fn frame_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        ctx.render_shapes(&mut self.driver, &self.shapes)
    }
}

fn demo_shapes() -> Result<Vec<Shape>> {
    let red = Color::rgb(230, 57, 70);
    let blue = Color::rgb(69, 123, 157);
    let sand = Color::from_hex("#f1faee").context("bad demo color")?;
    let navy = Color::from_hex("#1d3557").context("bad demo color")?;

    let line = Line::new(
        ShapeId(1),
        Point::new(-15.0, -12.0, red),
        Point::new(15.0, -12.0, blue),
    );

    let square = Square::new(
        ShapeId(2),
        Point::at(-14.0, 2.0),
        8.0,
        VertexColors::new(red, blue, navy, sand),
    )
    .with_effect(Effect::new(0.0, 0.0, 20.0, 1.0));

    let rectangle = Rectangle::new(
        ShapeId(3),
        Point::at(2.0, 4.0),
        12.0,
        6.0,
        VertexColors::uniform(blue),
    );

    // Vertices deliberately out of angular order.
    let mut polygon = Polygon::new(
        ShapeId(4),
        vec![
            Point::new(0.0, -8.0, sand),
            Point::new(6.0, -2.0, red),
            Point::new(-6.0, -2.0, navy),
            Point::new(3.0, 2.0, blue),
            Point::new(-3.0, 2.0, red),
        ],
    );
    polygon.add_edge(0, 1)?;
    polygon.add_edge(1, 3)?;

    Ok(vec![line.into(), square.into(), rectangle.into(), polygon.into()])
}

fn log_hull(shapes: &[Shape]) {
    let hull = shapes_hull(shapes);
    let points: Vec<String> = hull.iter().map(|p| format!("({:.2}, {:.2})", p.x, p.y)).collect();
    log::info!("hull of {} shapes: {} points [{}]", shapes.len(), hull.len(), points.join(", "));
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RenderConfig::default();
    let studio = Studio::new(config)?;
    Runtime::run(
        RuntimeConfig {
            title: "Vectra Studio".to_string(),
            initial_size: LogicalSize::new(960.0, 640.0),
        },
        GpuInit::for_render(&config),
        studio,
    )
}

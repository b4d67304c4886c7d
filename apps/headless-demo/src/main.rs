//! Runs a scripted drag-to-dismiss gesture against a [`DragController`] and
//! logs the state the renderer would paint after each event.
//!
//! Usage: `headless-demo [WIDTHxHEIGHT]` (default surface is 400x800).

use anyhow::{bail, Context, Result};
use dragfab_core::{DragController, DraggableButtonConfig, SnapPolicy};
use dragfab_graphics::{Point, Size};
use dragfab_input::TouchEvent;
use log::info;

fn parse_surface(arg: &str) -> Result<Size> {
    let Some((width, height)) = arg.split_once('x') else {
        bail!("expected WIDTHxHEIGHT, got {arg:?}");
    };
    let width: f32 = width.parse().with_context(|| format!("bad width {width:?}"))?;
    let height: f32 = height
        .parse()
        .with_context(|| format!("bad height {height:?}"))?;
    Ok(Size::new(width, height))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let surface = match std::env::args().nth(1) {
        Some(arg) => parse_surface(&arg)?,
        None => Size::new(400.0, 800.0),
    };

    let mut controller = DragController::new(DraggableButtonConfig {
        initial_position: Point::new(50.0, 50.0),
        snap_policy: SnapPolicy::NearestHorizontalEdge,
        ..DraggableButtonConfig::default()
    });
    controller.set_surface_size(surface);
    controller.on_dismiss(|| info!("dismissed: host would remove the widget now"));

    // Grab the button near its center, wander, then drop it on the close target.
    let pointer = 1;
    let script = [
        TouchEvent::down(pointer, Point::new(78.0, 78.0)),
        TouchEvent::moved(pointer, Point::new(320.0, 200.0)),
        TouchEvent::moved(pointer, Point::new(150.0, 520.0)),
        TouchEvent::moved(
            pointer,
            Point::new(surface.width / 2.0 + 28.0, surface.height - 28.0),
        ),
        TouchEvent::up(
            pointer,
            Point::new(surface.width / 2.0 + 28.0, surface.height - 28.0),
        ),
    ];

    for event in &script {
        let consumed = controller.handle_touch_event(event);
        let snapshot = controller.snapshot();
        info!(
            "{:?} at ({:.0}, {:.0}) consumed={} -> phase={:?} origin=({:.0}, {:.0}) overlapping={}",
            event.action,
            event.position.x,
            event.position.y,
            consumed,
            snapshot.phase,
            snapshot.position.x,
            snapshot.position.y,
            snapshot.overlapping_close_target,
        );
    }

    if !controller.is_dismissed() {
        bail!("scripted gesture should have ended on the close target");
    }
    Ok(())
}

// What you SEE:
// • Live (mirrored) camera with a palette header across the top.
// • Hold D / left mouse: "index finger up" -> draw at the mouse.
// • Hold S / right mouse: "index + middle up" -> hover the header to pick a colour or the eraser.
// • Scroll or [ ] changes the pinch distance -> brush / eraser size.
// • C clears the canvas. Q or ESC quits.

use std::time::Instant;

use log::{debug, error, info};
use virtual_painter::camera::CameraCapture;
use virtual_painter::config::PainterConfig;
use virtual_painter::draw::{Drawer, draw_text_5x7};
use virtual_painter::error::Error;
use virtual_painter::landmarks::LandmarkAdapter;
use virtual_painter::palette::HeaderSet;
use virtual_painter::session::Session;
use virtual_painter::sim::{HandPose, SimulatedTracker};
use virtual_painter::timing::FpsMeter;
use virtual_painter::types::Point;

const SELECT_FINGERS: [bool; 5] = [false, true, true, false, false];
const DRAW_FINGERS: [bool; 5] = [false, true, false, false, false];
const FIST: [bool; 5] = [false; 5];

/// Stand-in for the hand model: the mouse is the index fingertip.
fn simulated_pose(drawer: &Drawer, pinch: f32) -> Option<HandPose> {
    let (mx, my) = drawer.mouse_pos()?;
    let fingers = if drawer.select_pose_held() {
        SELECT_FINGERS
    } else if drawer.draw_pose_held() {
        DRAW_FINGERS
    } else {
        FIST
    };
    Some(HandPose::new(Point::new(mx as i32, my as i32), fingers, pinch))
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = PainterConfig::from_env();

    /* --- Camera, header assets, window ---
       Visual: window opens with live camera feed and the first header. */
    let mut cam = CameraCapture::new(cfg.camera_index, cfg.frame_width, cfg.frame_height, cfg.mirror)?;
    let (w, h) = cam.resolution();
    let (w, h) = (w as usize, h as usize);
    let headers = HeaderSet::load_dir(&cfg.header_dir, w, cfg.header_height)?;
    let mut drawer = Drawer::new("Virtual Painter", w, h)?;

    /* --- Session state (canvas, tools, cursor, stroke) --- */
    let mut session = Session::new(&cfg, w, h, headers);
    let mut adapter = LandmarkAdapter::new(SimulatedTracker::new(), cfg.show_landmarks);
    let mut pinch: f32 = 100.0;

    let mut fps = FpsMeter::new(Instant::now());

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.quit_pressed() {
        /* 1) Grab a fresh live frame. A failed read ends the session. */
        let mut live = match cam.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                error!("{e}; stopping");
                break;
            }
        };

        /* 2) Inputs */
        if drawer.clear_pressed_once() {
            session.clear_canvas();
        }
        pinch = (pinch + drawer.pinch_delta()).clamp(0.0, 300.0);
        adapter.tracker_mut().set_pose(simulated_pose(&drawer, pinch));

        /* 3) Landmarks (skeleton overlay lands on `live`) */
        let hand = match adapter.detect(&mut live) {
            Ok(hand) => hand,
            Err(e) => {
                error!("{e}; stopping");
                break;
            }
        };

        /* 4) Smooth, classify, size/select, stroke, compose */
        let (mut screen, report) = session.process(&mut live, &hand)?;

        /* 5) HUD just under the header band */
        let tools = session.tools();
        let hud = format!(
            "{} | {} {} | FPS: {:.1}",
            report.mode.label(),
            tools.tool.label(),
            tools.thickness(),
            fps.fps()
        );
        draw_text_5x7(&mut screen, 8, cfg.header_height as i32 + 8, &hud, 0x00_FF_FF_FF);

        /* 6) Present to the window */
        drawer.present(&screen)?;

        /* 7) FPS counter */
        if let Some(rate) = fps.tick(Instant::now()) {
            debug!("FPS: {rate:.1}");
        }
    }

    info!("session over, {} segment(s) on the canvas", session.canvas().segment_count());
    Ok(())
}

//! On-screen preview of a rendered frame through SDL2.
//!
//! Only compiled with the `display` feature.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::RenderError;
use crate::render::Screen;

const WINDOW_TITLE: &str = "solidraster";

/// Shows `screen` in a window and blocks until it is closed or Escape is
/// pressed.
pub fn show(screen: &Screen) -> Result<(), RenderError> {
    show_frame(screen).map_err(RenderError::Display)
}

fn show_frame(screen: &Screen) -> Result<(), String> {
    let (width, height) = (screen.width(), screen.height());

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(WINDOW_TITLE, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
        .map_err(|e| e.to_string())?;

    let pixels: Vec<u8> = screen
        .to_argb()
        .into_iter()
        .flat_map(u32::to_ne_bytes)
        .collect();
    texture
        .update(None, &pixels, (width * 4) as usize)
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(()),
                _ => {}
            }
        }

        canvas.clear();
        canvas.copy(&texture, None, Some(Rect::new(0, 0, width, height)))?;
        canvas.present();
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}

// Copyright 2026 the Scribble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive paint window.
//!
//! Draw with the left mouse button. Keys:
//! 1/2/3 brush size, E eraser, R rainbow, K/B/G black/blue/green,
//! S next stamp, F freehand, U undo, C clear, Esc quit.

use kurbo::Point;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use peniko::Color;
use scribble_stamps::StampShape;
use scribble_style::BrushClass;
use scribble_surface::{DrawingSurface, Presenter, SurfaceEvent};

const START_WIDTH: usize = 960;
const START_HEIGHT: usize = 640;

fn main() -> Result<(), minifb::Error> {
    let mut window = Window::new(
        "Scribble",
        START_WIDTH,
        START_HEIGHT,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )?;
    window.set_target_fps(60);

    let mut surface = DrawingSurface::new();
    let presenter = Presenter::default();
    let mut frame: Vec<u32> = Vec::new();
    let mut stamp_index = 0_usize;
    let mut was_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (width, height) = window.get_size();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "window dimensions fit in u32"
        )]
        surface.layout(width as u32, height as u32);
        frame.resize(width * height, 0);

        handle_keys(&window, &mut surface, &mut stamp_index);

        let down = window.get_mouse_down(MouseButton::Left);
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
            let pos = Point::new(f64::from(mx), f64::from(my));
            match (was_down, down) {
                (false, true) => surface.pointer_down(pos),
                (true, true) => surface.pointer_move(pos),
                (true, false) => surface.pointer_up(),
                (false, false) => {}
            }
        } else if was_down && !down {
            surface.pointer_cancel();
        }
        was_down = down;

        for event in surface.take_events() {
            if let SurfaceEvent::HistoryChanged(can_undo) = event {
                println!("undo available: {can_undo}");
            }
        }

        if let Some(store) = surface.store() {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "window dimensions fit in u32"
            )]
            presenter.present_into(store, &mut frame, width as u32, height as u32);
        } else {
            frame.fill(0xFFFF_FFFF);
        }
        window.update_with_buffer(&frame, width, height)?;
    }
    Ok(())
}

fn handle_keys(window: &Window, surface: &mut DrawingSurface, stamp_index: &mut usize) {
    let tool = surface.tool_mut();
    if window.is_key_pressed(Key::Key1, KeyRepeat::No) {
        tool.select_brush(BrushClass::Thin);
    }
    if window.is_key_pressed(Key::Key2, KeyRepeat::No) {
        tool.select_brush(BrushClass::Normal);
    }
    if window.is_key_pressed(Key::Key3, KeyRepeat::No) {
        tool.select_brush(BrushClass::Thick);
    }
    if window.is_key_pressed(Key::K, KeyRepeat::No) {
        tool.select_color(Color::from_rgba8(0, 0, 0, 255));
    }
    if window.is_key_pressed(Key::B, KeyRepeat::No) {
        tool.select_color(Color::from_rgba8(30, 80, 255, 255));
    }
    if window.is_key_pressed(Key::G, KeyRepeat::No) {
        tool.select_color(Color::from_rgba8(0, 160, 60, 255));
    }
    if window.is_key_pressed(Key::E, KeyRepeat::No) {
        tool.toggle_eraser();
    }
    if window.is_key_pressed(Key::R, KeyRepeat::No) {
        tool.select_rainbow();
    }
    if window.is_key_pressed(Key::S, KeyRepeat::No) {
        *stamp_index = (*stamp_index + 1) % StampShape::ALL.len();
        tool.select_stamp(StampShape::ALL[*stamp_index]);
    }
    if window.is_key_pressed(Key::F, KeyRepeat::No) {
        tool.select_freehand();
    }
    if window.is_key_pressed(Key::U, KeyRepeat::No) {
        surface.undo();
    }
    if window.is_key_pressed(Key::C, KeyRepeat::No) {
        surface.clear();
    }
}

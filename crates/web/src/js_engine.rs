//! Binding to the engine object supplied by the JS host.
//!
//! The engine is built and loaded outside this crate. The host passes the
//! object in once it exists; this module only describes the methods the core
//! calls on it.

use wasm_bindgen::prelude::*;

use crate::engine::{CellView, Engine};

#[wasm_bindgen]
extern "C" {
    /// Engine instance handed over by the JS host.
    #[derive(Debug, Clone)]
    pub type GameIo;

    #[wasm_bindgen(method, js_name = width)]
    fn board_width(this: &GameIo) -> u32;

    #[wasm_bindgen(method, js_name = height)]
    fn board_height(this: &GameIo) -> u32;

    /// `Uint8Array` over the cell buffer, one byte per cell, row-major.
    #[wasm_bindgen(method, js_name = cells)]
    fn cell_bytes(this: &GameIo) -> js_sys::Uint8Array;

    #[wasm_bindgen(method, js_name = is_startup)]
    fn startup(this: &GameIo) -> bool;

    #[wasm_bindgen(method, js_name = is_paused)]
    fn paused(this: &GameIo) -> bool;

    #[wasm_bindgen(method, js_name = is_gameover)]
    fn game_over(this: &GameIo) -> bool;

    #[wasm_bindgen(method, js_name = move_left)]
    fn js_move_left(this: &GameIo);

    #[wasm_bindgen(method, js_name = move_right)]
    fn js_move_right(this: &GameIo);

    #[wasm_bindgen(method, js_name = rotate_left)]
    fn js_rotate_left(this: &GameIo);

    #[wasm_bindgen(method, js_name = rotate_right)]
    fn js_rotate_right(this: &GameIo);

    #[wasm_bindgen(method, js_name = soft_drop)]
    fn js_soft_drop(this: &GameIo);

    #[wasm_bindgen(method, js_name = hard_drop)]
    fn js_hard_drop(this: &GameIo);

    #[wasm_bindgen(method, js_name = toggle_pause)]
    fn js_toggle_pause(this: &GameIo);

    #[wasm_bindgen(method, js_name = run)]
    fn js_run(this: &GameIo);

    #[wasm_bindgen(method, js_name = update)]
    fn js_update(this: &GameIo);
}

impl Engine for GameIo {
    fn width(&self) -> u32 {
        self.board_width()
    }

    fn height(&self) -> u32 {
        self.board_height()
    }

    fn cells(&self) -> CellView<'_> {
        // The typed array may alias the engine's linear memory; copy it out
        // before anything else runs.
        CellView::owned(self.board_width(), self.board_height(), self.cell_bytes().to_vec())
    }

    fn is_startup(&self) -> bool {
        self.startup()
    }

    fn is_paused(&self) -> bool {
        self.paused()
    }

    fn is_game_over(&self) -> bool {
        self.game_over()
    }

    fn move_left(&mut self) {
        self.js_move_left();
    }

    fn move_right(&mut self) {
        self.js_move_right();
    }

    fn rotate_left(&mut self) {
        self.js_rotate_left();
    }

    fn rotate_right(&mut self) {
        self.js_rotate_right();
    }

    fn soft_drop(&mut self) {
        self.js_soft_drop();
    }

    fn hard_drop(&mut self) {
        self.js_hard_drop();
    }

    fn toggle_pause(&mut self) {
        self.js_toggle_pause();
    }

    fn run(&mut self) {
        self.js_run();
    }

    fn advance(&mut self) {
        self.js_update();
    }
}

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, KeyboardEventInit, Window};

use blockfall_web::input::KeyRegistry;
use blockfall_web::types::{LogicalAction, CANVAS_HEIGHT, CANVAS_WIDTH};
use blockfall_web::{CanvasLayer, GameCanvas, GameIo, KeyListeners, MountError};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

fn add_element(tag: &str, id: &str) -> web_sys::Element {
    let doc = document();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn add_canvases(prefix: &str) -> (HtmlCanvasElement, HtmlCanvasElement) {
    let main = add_element("canvas", &format!("{prefix}_main"));
    let overlay = add_element("canvas", &format!("{prefix}_screen"));
    (main.dyn_into().unwrap(), overlay.dyn_into().unwrap())
}

fn mount(prefix: &str) -> Option<GameCanvas> {
    GameCanvas::mount(
        Some(format!("{prefix}_main")),
        Some(format!("{prefix}_screen")),
    )
}

/// Dispatch a cancelable key event on the window; `true` if the default was
/// prevented.
fn dispatch_key(kind: &str, code: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_code(code);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict(kind, &init).unwrap();
    !window().dispatch_event(&event).unwrap()
}

/// 4x2 engine object in the shape the JS host hands over. `steps` counts
/// `update` calls.
fn js_engine() -> JsValue {
    Function::new_no_args(
        "return {
            steps: 0,
            startup: true,
            width() { return 4; },
            height() { return 2; },
            cells() { return new Uint8Array(8); },
            is_startup() { return this.startup; },
            is_paused() { return false; },
            is_gameover() { return false; },
            move_left() {}, move_right() {},
            rotate_left() {}, rotate_right() {},
            soft_drop() {}, hard_drop() {},
            toggle_pause() {},
            run() { this.startup = false; },
            update() { this.steps += 1; },
        };",
    )
    .call0(&JsValue::NULL)
    .unwrap()
}

fn steps(engine: &JsValue) -> f64 {
    Reflect::get(engine, &"steps".into()).unwrap().as_f64().unwrap()
}

#[wasm_bindgen_test]
fn mount_without_canvases_returns_none() {
    assert!(mount("absent").is_none());

    add_element("div", "plain_main");
    add_element("canvas", "plain_screen");
    assert!(mount("plain").is_none());
}

#[wasm_bindgen_test]
fn layer_lookup_names_the_failure() {
    add_element("div", "not_a_canvas");
    assert_eq!(
        CanvasLayer::find(&document(), "nowhere").err(),
        Some(MountError::MissingElement("nowhere".into()))
    );
    assert_eq!(
        CanvasLayer::find(&document(), "not_a_canvas").err(),
        Some(MountError::NotACanvas("not_a_canvas".into()))
    );
}

#[wasm_bindgen_test]
fn key_events_reach_the_registry() {
    let keys = Rc::new(RefCell::new(KeyRegistry::new()));
    let listeners = KeyListeners::attach(&window(), Rc::clone(&keys)).unwrap();

    assert!(dispatch_key("keydown", "KeyA"));
    assert!(keys.borrow().is_held(LogicalAction::MoveLeft));
    assert!(keys.borrow().is_held(LogicalAction::AnyKey));

    assert!(!dispatch_key("keyup", "KeyA"));
    assert!(!keys.borrow().is_held(LogicalAction::MoveLeft));

    // Unbound keys still count as "any key" but keep their default action.
    assert!(!dispatch_key("keydown", "KeyQ"));
    assert!(keys.borrow().is_held(LogicalAction::AnyKey));
    dispatch_key("keyup", "KeyQ");

    drop(listeners);
    assert!(!dispatch_key("keydown", "Space"));
    assert!(!keys.borrow().is_held(LogicalAction::HardDrop));
}

#[wasm_bindgen_test]
async fn unmount_stops_ticks_and_listeners() {
    let (main, _) = add_canvases("live");
    let view = mount("live").unwrap();
    assert_eq!((main.width(), main.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));

    let engine = js_engine();
    assert!(view.attach_engine(engine.clone().unchecked_into::<GameIo>()));
    assert!(!view.attach_engine(js_engine().unchecked_into::<GameIo>()));
    assert_eq!(view.board_size(), Some((4, 2)));
    assert_eq!((main.width(), main.height()), (69, 35));

    assert!(dispatch_key("keydown", "KeyS"));
    dispatch_key("keyup", "KeyS");

    TimeoutFuture::new(100).await;
    assert!(steps(&engine) > 0.0);

    view.unmount();
    let after = steps(&engine);
    TimeoutFuture::new(100).await;
    assert_eq!(steps(&engine), after);
    assert!(!dispatch_key("keydown", "KeyS"));
    dispatch_key("keyup", "KeyS");
}

#[wasm_bindgen_test]
async fn load_settling_after_unmount_is_dropped() {
    let (main, _) = add_canvases("late");
    let view = mount("late").unwrap();

    let resolve: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));
    let promise = {
        let resolve = Rc::clone(&resolve);
        Promise::new(&mut |res, _rej| {
            *resolve.borrow_mut() = Some(res);
        })
    };
    view.load_engine(promise);
    assert!(!view.is_engine_ready());
    view.unmount();

    let res = resolve.borrow_mut().take().unwrap();
    res.call1(&JsValue::NULL, &js_engine()).unwrap();
    TimeoutFuture::new(20).await;

    assert_eq!((main.width(), main.height()), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[wasm_bindgen_test]
async fn rejected_load_can_be_retried() {
    add_canvases("retry");
    let view = mount("retry").unwrap();

    view.load_engine(Promise::reject(&"no engine".into()));
    TimeoutFuture::new(20).await;
    assert!(!view.is_engine_ready());

    view.load_engine(Promise::resolve(&js_engine()));
    TimeoutFuture::new(20).await;
    assert!(view.is_engine_ready());
    view.unmount();
}

#[wasm_bindgen_test]
fn console_setup_tolerates_repeat_calls() {
    // The start hook has already run once on instantiation.
    blockfall_web::console::init_console();
    blockfall_web::console::init_console();
    tracing::warn!("console logging reachable");
    assert!(mount("still_absent").is_none());
}

//! DOM key listeners feeding the key registry.
//!
//! Listeners live as long as the [`KeyListeners`] value; dropping it removes
//! them from the window.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

use crate::error::MountError;
use crate::input::{actions_for_code, KeyRegistry};

type KeyHandler = Closure<dyn FnMut(KeyboardEvent)>;

pub struct KeyListeners {
    window: Window,
    keydown: KeyHandler,
    keyup: KeyHandler,
}

impl KeyListeners {
    pub fn attach(window: &Window, keys: Rc<RefCell<KeyRegistry>>) -> Result<Self, MountError> {
        let keydown = {
            let keys = Rc::clone(&keys);
            KeyHandler::new(move |ev: KeyboardEvent| {
                let code = ev.code();
                // Bound keys must not reach the page (Space scrolls).
                if !actions_for_code(&code).is_empty() {
                    ev.prevent_default();
                }
                if let Ok(mut keys) = keys.try_borrow_mut() {
                    keys.key_down(&code);
                }
            })
        };
        let keyup = KeyHandler::new(move |ev: KeyboardEvent| {
            if let Ok(mut keys) = keys.try_borrow_mut() {
                keys.key_up(&ev.code());
            }
        });

        window
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener("keydown"))?;
        if window
            .add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())
            .is_err()
        {
            let _ = window
                .remove_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
            return Err(MountError::Listener("keyup"));
        }

        Ok(Self {
            window: window.clone(),
            keydown,
            keyup,
        })
    }
}

impl Drop for KeyListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
    }
}

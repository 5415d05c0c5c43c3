use recoil::{
    SpringConfig, SpringConfigUpdate, Spring2D, UpdateObserver, Vec2,
};
use wasm_bindgen::prelude::*;

/// Calls back into JavaScript after every step so the page can re-render.
#[derive(Default)]
struct JsNotifier {
    callback: Option<js_sys::Function>,
}

impl UpdateObserver for JsNotifier {
    fn on_update(&mut self) {
        if let Some(callback) = &self.callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}

fn follower(config: SpringConfig<f32>, at: Vec2<f32>) -> Result<Spring2D<f32>, JsError> {
    Spring2D::at(config, at).map_err(|e| JsError::new(&e.to_string()))
}

// ---- Followers Demo ----

/// Three dots chasing the pointer with different spring presets.
#[wasm_bindgen]
pub struct FollowersDemo {
    stiff: Spring2D<f32>,
    wobbly: Spring2D<f32>,
    molasses: Spring2D<f32>,
    notifier: JsNotifier,
}

#[wasm_bindgen]
impl FollowersDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Result<FollowersDemo, JsError> {
        let at = Vec2::new(x, y);
        Ok(FollowersDemo {
            stiff: follower(SpringConfig::stiff(), at)?,
            wobbly: follower(SpringConfig::wobbly(), at)?,
            molasses: follower(SpringConfig::molasses(), at)?,
            notifier: JsNotifier::default(),
        })
    }

    /// Register a function called once per animation frame in which any
    /// follower moved.
    pub fn on_update(&mut self, callback: js_sys::Function) {
        self.notifier.callback = Some(callback);
    }

    /// The canvas became visible.
    pub fn attach(&mut self) {
        self.stiff.attach();
        self.wobbly.attach();
        self.molasses.attach();
    }

    /// The canvas went away; stop spending frames on it.
    pub fn detach(&mut self) {
        self.stiff.detach();
        self.wobbly.detach();
        self.molasses.detach();
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        let t = Vec2::new(x, y);
        self.stiff.set_to_position(t);
        self.wobbly.set_to_position(t);
        self.molasses.set_to_position(t);
    }

    /// Change how bouncy the wobbly follower is.
    pub fn set_wobble_damping(&mut self, damping: f32) -> Result<(), JsError> {
        self.wobbly
            .apply(SpringConfigUpdate::new().damping(damping))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Feed a `requestAnimationFrame` timestamp. The callback fires once
    /// if any follower moved.
    pub fn tick(&mut self, now_ms: f32) {
        let stiff = self.stiff.tick(now_ms);
        let wobbly = self.wobbly.tick(now_ms);
        let molasses = self.molasses.tick(now_ms);
        if stiff || wobbly || molasses {
            self.notifier.on_update();
        }
    }

    /// True while any follower still needs frames.
    pub fn is_animating(&self) -> bool {
        self.stiff.is_animating() || self.wobbly.is_animating() || self.molasses.is_animating()
    }

    /// Returns [sx, sy, wx, wy, mx, my] -- positions of stiff, wobbly, molasses
    pub fn positions(&self) -> Vec<f32> {
        let s = self.stiff.current_position();
        let w = self.wobbly.current_position();
        let m = self.molasses.current_position();
        vec![s.x, s.y, w.x, w.y, m.x, m.y]
    }

    /// Returns [stiff, wobbly, molasses] speeds
    pub fn speeds(&self) -> Vec<f32> {
        vec![
            self.stiff.current_velocity(),
            self.wobbly.current_velocity(),
            self.molasses.current_velocity(),
        ]
    }
}

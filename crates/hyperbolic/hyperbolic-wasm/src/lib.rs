use std::cell::RefCell;
use std::rc::Rc;

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use hyperbolic_core::{Config, DrawList, FrameStats, Renderer};

mod canvas;
mod logging;
mod timer;

pub use canvas::CanvasSurface;
use timer::{Interval, WindowListener};

/// Renderer plus the canvas it draws on; shared with the timer callbacks.
struct Scene {
    renderer: Renderer,
    surface: CanvasSurface,
}

impl Scene {
    fn tick(&mut self) -> FrameStats {
        self.renderer.tick(&mut self.surface)
    }

    /// Resizing the canvas clears it, so the frame is recorded first and
    /// only replayed once the new size is known to be valid.
    fn resize(&mut self, width: f64, height: f64) -> Result<FrameStats, JsError> {
        let mut list = DrawList::new();
        let stats = self
            .renderer
            .resize(width, height, &mut list)
            .map_err(|e| JsError::new(&format!("resize error: {e}")))?;
        self.surface.set_size(width, height);
        list.replay(&mut self.surface);
        Ok(stats)
    }
}

#[wasm_bindgen]
pub struct HyperbolicCanvas {
    scene: Rc<RefCell<Scene>>,
    interval: Option<Interval>,
    on_resize: Option<WindowListener>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn config_from_js(config: JsValue) -> Result<Config, JsError> {
    let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
        Config::default()
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
    };
    cfg.validate()
        .map_err(|e| JsError::new(&format!("config error: {e}")))?;
    Ok(cfg)
}

#[wasm_bindgen]
impl HyperbolicCanvas {
    /// Attach to `canvas`, size it to `width` x `height` and draw frame 0.
    /// `config` is an optional JSON object overriding individual keys:
    ///   new HyperbolicCanvas(el, innerWidth, innerHeight, { period: 600 })
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        width: f64,
        height: f64,
        config: JsValue,
    ) -> Result<HyperbolicCanvas, JsError> {
        console_error_panic_hook::set_once();

        let cfg = config_from_js(config)?;
        let surface = CanvasSurface::new(canvas).map_err(|e| JsError::new(&e))?;
        let renderer = Renderer::new(cfg, width, height)
            .map_err(|e| JsError::new(&format!("config error: {e}")))?;

        let mut scene = Scene { renderer, surface };
        scene.resize(width, height)?;
        Ok(HyperbolicCanvas {
            scene: Rc::new(RefCell::new(scene)),
            interval: None,
            on_resize: None,
        })
    }

    /// Draw the current frame and advance the clock. Returns FrameStats JSON.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<JsValue, JsError> {
        let stats = self.scene.borrow_mut().tick();
        swb::to_value(&stats).map_err(|e| JsError::new(&format!("stats error: {e}")))
    }

    /// Resize the canvas and redraw the current frame.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsError> {
        self.scene.borrow_mut().resize(width, height).map(|_| ())
    }

    /// Redraw the current frame without advancing.
    #[wasm_bindgen]
    pub fn render(&mut self) {
        let mut scene = self.scene.borrow_mut();
        let Scene { renderer, surface } = &mut *scene;
        renderer.render(surface);
    }

    /// Record the current frame as a list of drawing commands (JSON) instead
    /// of painting it.
    #[wasm_bindgen(js_name = draw_list)]
    pub fn draw_list(&mut self) -> Result<JsValue, JsError> {
        let mut list = DrawList::new();
        self.scene.borrow_mut().renderer.render(&mut list);
        swb::to_value(&list).map_err(|e| JsError::new(&format!("draw list error: {e}")))
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.scene.borrow().renderer.frame() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.interval.is_some()
    }

    /// Tick on a timer at the configured frame interval and follow window
    /// resizes. Calling start twice is a no-op.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<(), JsError> {
        if self.interval.is_some() {
            return Ok(());
        }
        let win = timer::window()?;
        let period_ms = self.scene.borrow().renderer.config().frame_interval_ms;

        let scene = Rc::clone(&self.scene);
        let on_tick = Closure::wrap(Box::new(move || {
            if let Ok(mut scene) = scene.try_borrow_mut() {
                scene.tick();
            }
        }) as Box<dyn FnMut()>);

        let scene = Rc::clone(&self.scene);
        let on_resize = Closure::wrap(Box::new(move || {
            let Some(win) = web_sys::window() else {
                return;
            };
            let Ok((w, h)) = timer::window_size(&win) else {
                return;
            };
            if let Ok(mut scene) = scene.try_borrow_mut() {
                if scene.resize(w, h).is_err() {
                    log::warn!("ignoring resize to {w}x{h}");
                }
            }
        }) as Box<dyn FnMut()>);

        self.on_resize = Some(WindowListener::new(&win, "resize", on_resize)?);
        self.interval = Some(Interval::new(&win, period_ms, on_tick)?);
        log::debug!("hyperbolic canvas started ({period_ms:.1} ms/frame)");
        Ok(())
    }

    /// Stop ticking and stop following window resizes.
    #[wasm_bindgen]
    pub fn stop(&mut self) {
        self.interval = None;
        self.on_resize = None;
    }
}

/// Largest frame number a JS number holds exactly.
const MAX_SAFE_FRAME: f64 = 9_007_199_254_740_991.0;
/// Fractional periods cannot be skipped over; every frame up to the target
/// is stepped, so the target is bounded.
const MAX_STEPPED_FRAME: f64 = 1_048_576.0;

/// Record frame `frame` of a fresh session into drawing commands (JSON),
/// without a canvas. Branch flags are replayed from frame 0.
#[wasm_bindgen(js_name = render_commands)]
pub fn render_commands(
    config: JsValue,
    width: f64,
    height: f64,
    frame: f64,
) -> Result<JsValue, JsError> {
    let cfg = config_from_js(config)?;
    if !(frame.is_finite() && (0.0..=MAX_SAFE_FRAME).contains(&frame)) {
        return Err(JsError::new(&format!("invalid frame {frame}")));
    }
    if cfg.period.fract() != 0.0 && frame > MAX_STEPPED_FRAME {
        return Err(JsError::new(&format!(
            "frame {frame} is too far ahead for fractional period {}",
            cfg.period
        )));
    }
    let mut renderer = Renderer::new(cfg, width, height)
        .map_err(|e| JsError::new(&format!("config error: {e}")))?;
    renderer.advance_to(frame as u64);
    let mut list = DrawList::new();
    renderer.render(&mut list);
    swb::to_value(&list).map_err(|e| JsError::new(&format!("draw list error: {e}")))
}

/// Route `log` output to the browser console at `level` ("off" .. "trace").
#[wasm_bindgen(js_name = init_logging)]
pub fn init_logging(level: &str) -> Result<(), JsError> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| JsError::new(&format!("unknown log level '{level}'")))?;
    logging::install(filter);
    Ok(())
}

/// Default configuration as a JSON object.
#[wasm_bindgen(js_name = default_config)]
pub fn default_config() -> Result<JsValue, JsError> {
    swb::to_value(&Config::default()).map_err(|e| JsError::new(&format!("config error: {e}")))
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

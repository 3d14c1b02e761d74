//! Space Rocks entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent};

    use space_rocks::input::Transition;
    use space_rocks::sim::State;
    use space_rocks::view::score_text;
    use space_rocks::{GameError, Renderer, Session, SessionStatus, Tuning};

    const SVG_NS: &str = "http://www.w3.org/2000/svg";

    /// Draws snapshots into the page's SVG canvas
    struct SvgRenderer {
        document: Document,
        svg: Element,
        ship: Element,
        score: Element,
        /// Ids of ellipses this renderer created
        drawn: HashSet<String>,
    }

    impl SvgRenderer {
        fn new(document: Document) -> Result<Self, GameError> {
            let find = |id: &str| {
                document
                    .get_element_by_id(id)
                    .ok_or_else(|| GameError::Dom(format!("missing #{}", id)))
            };
            Ok(Self {
                svg: find("svgCanvas")?,
                ship: find("ship")?,
                score: find("playerScore")?,
                drawn: HashSet::new(),
                document,
            })
        }

        fn body_view(&mut self, body: &space_rocks::sim::Body) -> Result<Element, GameError> {
            if let Some(v) = self.document.get_element_by_id(&body.id) {
                return Ok(v);
            }
            let dom = |e: JsValue| GameError::Dom(format!("{:?}", e));
            let v = self
                .document
                .create_element_ns(Some(SVG_NS), "ellipse")
                .map_err(dom)?;
            v.set_attribute("id", &body.id).map_err(dom)?;
            v.set_attribute("rx", &body.radius.to_string()).map_err(dom)?;
            v.set_attribute("ry", &body.radius.to_string()).map_err(dom)?;
            v.class_list().add_1(body.view_type.as_str()).map_err(dom)?;
            self.svg.append_child(&v).map_err(dom)?;
            self.drawn.insert(body.id.clone());
            Ok(v)
        }

        fn remove(&mut self, id: &str) -> Result<(), GameError> {
            self.drawn.remove(id);
            let v = self
                .document
                .get_element_by_id(id)
                .ok_or_else(|| GameError::MissingNode(id.to_string()))?;
            self.svg
                .remove_child(&v)
                .map(|_| ())
                .map_err(|_| GameError::MissingNode(id.to_string()))
        }
    }

    impl Renderer for SvgRenderer {
        fn render(&mut self, state: &State) {
            self.score.set_inner_html(&score_text(state.score));
            if let Err(e) = self.ship.set_attribute(
                "transform",
                &format!("translate({},{})", state.ship.pos.x, state.ship.pos.y),
            ) {
                log::warn!("Cannot move ship: {:?}", e);
            }

            for body in state.live_bodies() {
                match self.body_view(body) {
                    Ok(v) => {
                        let placed = v
                            .set_attribute("cx", &body.pos.x.to_string())
                            .and_then(|_| v.set_attribute("cy", &body.pos.y.to_string()));
                        if let Err(e) = placed {
                            log::warn!("Cannot move {}: {:?}", body.id, e);
                        }
                    }
                    Err(e) => log::error!("Cannot draw {}: {}", body.id, e),
                }
            }

            for body in &state.exit {
                if let Err(e) = self.remove(&body.id) {
                    log::warn!("Already removed: {}", e);
                }
            }
        }

        fn clear(&mut self) {
            let ids: Vec<String> = self.drawn.iter().cloned().collect();
            for id in ids {
                if let Err(e) = self.remove(&id) {
                    log::debug!("Clearing: {}", e);
                }
            }
        }
    }

    struct Game {
        session: Session<SvgRenderer>,
        last_time: f64,
    }

    pub fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| GameError::Dom(e.to_string()))?;

        log::info!("Space Rocks starting...");

        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Dom("no document".into()))?;

        let renderer = SvgRenderer::new(document.clone())?;
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(Tuning::load(), seed, renderer)?,
            last_time: 0.0,
        }));

        setup_input_handlers(&document, game.clone());
        request_animation_frame(game);

        log::info!("Space Rocks running!");
        Ok(())
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        for (name, transition) in [("keydown", Transition::Down), ("keyup", Transition::Up)] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(status) = g.session.handle_key(&event.code(), transition, event.repeat())
                {
                    log_status(status);
                }
            });
            if let Err(e) =
                document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("Cannot listen for {}: {:?}", name, e);
            }
            closure.forget();
        }
    }

    fn log_status(status: SessionStatus) {
        match status {
            SessionStatus::Running => {}
            SessionStatus::Cleared { score } => log::info!("Cleared! Final score {}", score),
            SessionStatus::Lost { score } => log::info!("Game over. Final score {}", score),
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("Cannot schedule frame: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;
            let status = g.session.advance(dt);
            log_status(status);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Space Rocks (native) starting...");
    log::info!("Native mode runs a scripted headless game - use `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted minute of game time against the in-memory scene
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use space_rocks::input::Transition;
    use space_rocks::sim::ViewType;
    use space_rocks::view::Scene;
    use space_rocks::{Session, SessionStatus, Tuning};

    const FRAME: f64 = 16.0;

    // Optional tuning file as the first argument
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load_file(&path).unwrap_or_else(|e| {
            log::warn!("{}, using default tuning", e);
            Tuning::default()
        }),
        None => Tuning::default(),
    };
    let mut session = match Session::new(tuning, 42, Scene::new()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start session: {}", e);
            return;
        }
    };
    let mut outcomes = Vec::new();

    for frame in 0..3750u32 {
        // Sweep left and right, firing along the way
        match frame % 240 {
            0 => {
                session.handle_key("ArrowLeft", Transition::Down, false);
            }
            60 => {
                session.handle_key("ArrowLeft", Transition::Up, false);
            }
            120 => {
                session.handle_key("ArrowRight", Transition::Down, false);
            }
            180 => {
                session.handle_key("ArrowRight", Transition::Up, false);
            }
            _ => {}
        }
        if frame % 8 == 0 {
            session.handle_key("Space", Transition::Down, false);
        } else if frame % 8 == 1 {
            session.handle_key("Space", Transition::Up, false);
        }

        let status = session.advance(FRAME);
        if status != SessionStatus::Running {
            outcomes.push(status);
        }
    }

    let scene = session.renderer();
    println!("\nHeadless run finished");
    println!("  sessions started: {}", session.sessions_started());
    println!("  outcomes: {:?}", outcomes);
    println!("  current {}", scene.score());
    println!("  frames rendered: {}", scene.frames());
    println!(
        "  live nodes: {} rocks, {} bullets, {} rock bullets",
        scene.nodes().filter(|n| n.class == ViewType::Rock).count(),
        scene.nodes().filter(|n| n.class == ViewType::Bullet).count(),
        scene.nodes().filter(|n| n.class == ViewType::RockBullet).count()
    );
    println!("  tolerated double removals: {}", scene.stale_removals());
}

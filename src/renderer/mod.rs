//! Canvas 2D presentation adapter
//!
//! Reads the entity stores and scalar stats each frame and draws them. Owns
//! no simulation state; the engine never waits on it.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2d context from the canvas; `None` if the host denied it
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }

    /// Draw one frame from the current state
    pub fn render(&self, state: &GameState, settings: &Settings) {
        self.draw_background(state, settings);
        self.draw_planet();

        if state.phase != GamePhase::Title {
            self.draw_ship(state);
            self.draw_lasers(state);
            self.draw_asteroids(state);
            self.draw_explosions(state);
        }
    }

    fn draw_background(&self, state: &GameState, settings: &Settings) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str("#080b1f");
        ctx.fill_rect(0.0, 0.0, PLAY_WIDTH as f64, PLAY_HEIGHT as f64);

        if !settings.starfield {
            return;
        }
        ctx.set_fill_style_str("#fff");
        for star in &state.stars {
            ctx.begin_path();
            let _ = ctx.arc(
                star.pos.x as f64,
                star.pos.y as f64,
                star.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    fn draw_planet(&self) {
        let ctx = &self.ctx;
        let cx = PLAY_WIDTH as f64 / 2.0;
        let cy = PLAY_HEIGHT as f64 + 25.0;

        // Upper limb of the planet peeks over the bottom edge
        if let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 10.0, cx, cy, 100.0) {
            let _ = gradient.add_color_stop(0.0, "#0088ff");
            let _ = gradient.add_color_stop(0.6, "#0066cc");
            let _ = gradient.add_color_stop(1.0, "#004499");
            ctx.set_fill_style_canvas_gradient(&gradient);
        } else {
            ctx.set_fill_style_str("#0066cc");
        }
        ctx.begin_path();
        let _ = ctx.ellipse(cx, cy, 100.0, 50.0, 0.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    fn draw_ship(&self, state: &GameState) {
        let ctx = &self.ctx;
        let ship = &state.ship;
        let r = ship.radius as f64;

        ctx.save();
        let _ = ctx.translate(ship.pos.x as f64, ship.pos.y as f64);
        // Hull is drawn nose-up; facing angle of -pi/2 means "up"
        let _ = ctx.rotate(ship.angle as f64 + std::f64::consts::FRAC_PI_2);
        ctx.set_fill_style_str("#00ccff");
        ctx.set_stroke_style_str("#00ffff");
        ctx.begin_path();
        ctx.move_to(0.0, -r);
        ctx.line_to(r * 0.75, r);
        ctx.line_to(0.0, r * 0.5);
        ctx.line_to(-r * 0.75, r);
        ctx.close_path();
        ctx.fill();
        ctx.stroke();
        ctx.restore();
    }

    fn draw_lasers(&self, state: &GameState) {
        let ctx = &self.ctx;
        let w = LASER_WIDTH as f64;
        let h = LASER_HEIGHT as f64;

        for laser in &state.lasers {
            ctx.save();
            let _ = ctx.translate(laser.pos.x as f64, laser.pos.y as f64);
            let _ = ctx.rotate(laser.angle as f64 + std::f64::consts::FRAC_PI_2);
            ctx.set_fill_style_str("#f00");
            ctx.set_shadow_color("#f88");
            ctx.set_shadow_blur(10.0);
            ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
            ctx.restore();
        }
    }

    fn draw_asteroids(&self, state: &GameState) {
        let ctx = &self.ctx;
        for asteroid in &state.asteroids {
            let r = asteroid.radius as f64;
            ctx.save();
            let _ = ctx.translate(asteroid.pos.x as f64, asteroid.pos.y as f64);
            let _ = ctx.rotate(asteroid.rotation as f64);

            ctx.set_fill_style_str("#888");
            ctx.set_stroke_style_str("#666");
            ctx.set_line_width(2.0);
            ctx.begin_path();
            let _ = ctx.arc(0.0, 0.0, r, 0.0, std::f64::consts::TAU);
            ctx.fill();
            ctx.stroke();

            // A few craters so the spin reads
            ctx.set_fill_style_str("#555");
            ctx.begin_path();
            let _ = ctx.arc(-r * 0.4, -r * 0.4, r * 0.25, 0.0, std::f64::consts::TAU);
            ctx.fill();
            ctx.set_fill_style_str("#666");
            ctx.begin_path();
            let _ = ctx.arc(r * 0.1, r * 0.3, r * 0.3, 0.0, std::f64::consts::TAU);
            ctx.fill();

            ctx.restore();
        }
    }

    fn draw_explosions(&self, state: &GameState) {
        let ctx = &self.ctx;
        for explosion in &state.explosions {
            let x = explosion.pos.x as f64;
            let y = explosion.pos.y as f64;
            let radius = explosion.draw_radius() as f64;
            if radius <= 0.0 {
                continue;
            }
            let alpha = explosion.opacity();

            let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
                continue;
            };
            let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 200, {alpha})"));
            let _ = gradient.add_color_stop(0.4, &format!("rgba(255, 100, 0, {alpha})"));
            let _ = gradient.add_color_stop(1.0, "rgba(255, 0, 0, 0)");

            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}

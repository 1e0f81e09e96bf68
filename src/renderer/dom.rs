//! DOM presenter
//!
//! Elements are looked up once. A missing element just skips the output it
//! would have shown; the two the game is unplayable without are reported
//! once here at startup.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::{RenderSink, RenderState};
use crate::settings::Settings;
use crate::sim::{GamePhase, SpeedLabel};

/// Number of hour markers around the clock face
const CLOCK_MARKERS: u32 = 12;
/// How long a "+1" popup stays in the DOM (ms)
const POPUP_LIFETIME_MS: i32 = 500;

pub struct DomRenderer {
    document: Document,
    container: Option<HtmlElement>,
    hand: Option<HtmlElement>,
    pig_wrapper: Option<HtmlElement>,
    pig_body: Option<HtmlElement>,
    pig_shadow: Option<HtmlElement>,
    beat_glow: Option<HtmlElement>,
    current_score: Option<HtmlElement>,
    high_score: Option<HtmlElement>,
    last_score: Option<HtmlElement>,
    menu_overlay: Option<HtmlElement>,
    start_content: Option<HtmlElement>,
    gameover_content: Option<HtmlElement>,
    commentary_text: Option<HtmlElement>,
    start_button: Option<HtmlElement>,
    speed_label: Option<HtmlElement>,
    hud: Option<HtmlElement>,
    footer_hint: Option<HtmlElement>,
    popup_layer: Option<HtmlElement>,
    settings: Settings,
}

fn lookup(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_style(el: &Option<HtmlElement>, property: &str, value: &str) {
    if let Some(el) = el {
        let _ = el.style().set_property(property, value);
    }
}

fn set_text(el: &Option<HtmlElement>, text: &str) {
    if let Some(el) = el {
        el.set_inner_text(text);
    }
}

fn add_class(el: &Option<HtmlElement>, class: &str) {
    if let Some(el) = el {
        let _ = el.class_list().add_1(class);
    }
}

fn remove_class(el: &Option<HtmlElement>, class: &str) {
    if let Some(el) = el {
        let _ = el.class_list().remove_1(class);
    }
}

impl DomRenderer {
    pub fn new(document: Document, settings: Settings) -> Self {
        let renderer = Self {
            container: lookup(&document, "game-container"),
            hand: lookup(&document, "clock-hand"),
            pig_wrapper: lookup(&document, "pig-wrapper"),
            pig_body: lookup(&document, "pig-body"),
            pig_shadow: lookup(&document, "pig-shadow"),
            beat_glow: lookup(&document, "beat-glow"),
            current_score: lookup(&document, "current-score"),
            high_score: lookup(&document, "high-score"),
            last_score: lookup(&document, "last-score"),
            menu_overlay: lookup(&document, "menu-overlay"),
            start_content: lookup(&document, "start-content"),
            gameover_content: lookup(&document, "gameover-content"),
            commentary_text: lookup(&document, "commentary-text"),
            start_button: lookup(&document, "start-button"),
            speed_label: lookup(&document, "speed-label"),
            hud: lookup(&document, "hud"),
            footer_hint: lookup(&document, "footer-hint"),
            popup_layer: lookup(&document, "score-popup-layer"),
            document,
            settings,
        };

        if renderer.hand.is_none() || renderer.pig_wrapper.is_none() {
            log::error!("Page is missing #clock-hand or #pig-wrapper - nothing to play with");
        }

        renderer.build_clock_face();
        renderer
    }

    /// The container receiving pointer presses, if present
    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    fn build_clock_face(&self) {
        let Some(face) = self.document.get_element_by_id("clock-face") else {
            return;
        };
        for i in 0..CLOCK_MARKERS {
            let Ok(marker) = self.document.create_element("div") else {
                continue;
            };
            marker.set_class_name("absolute w-2 h-6 bg-slate-300 rounded-full");
            let _ = marker.set_attribute(
                "style",
                &format!(
                    "transform: rotate({}deg) translateY(-150px); transform-origin: center center;",
                    i * 30
                ),
            );
            let _ = face.append_child(&marker);
        }
    }

    fn spawn_popup(&self) {
        let Some(layer) = &self.popup_layer else { return };
        let Ok(pop) = self.document.create_element("div") else {
            return;
        };
        pop.set_class_name("absolute text-5xl font-game text-pink-500 score-pop");
        pop.set_text_content(Some("+1"));
        if layer.append_child(&pop).is_err() {
            return;
        }

        let Some(window) = web_sys::window() else { return };
        let remove = Closure::once(move || pop.remove());
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            remove.as_ref().unchecked_ref(),
            POPUP_LIFETIME_MS,
        );
        remove.forget();
    }
}

impl RenderSink for DomRenderer {
    fn render(&mut self, state: &RenderState) {
        set_style(
            &self.hand,
            "transform",
            &format!("rotate({}deg)", state.hand_angle),
        );

        let glow = state.beat_glow_active && self.settings.effective_beat_glow();
        set_style(&self.beat_glow, "opacity", if glow { "0.4" } else { "0" });

        set_style(
            &self.pig_wrapper,
            "transform",
            &format!("translateX(-50%) translateY({}px)", -state.actor_rendered_y),
        );
        // The game-over pose (rotated body) is owned by CSS classes
        if state.phase != GamePhase::GameOver {
            set_style(
                &self.pig_body,
                "transform",
                &format!(
                    "scaleX({}) scaleY({})",
                    state.body_scale.x, state.body_scale.y
                ),
            );
        }
        set_style(
            &self.pig_shadow,
            "transform",
            &format!("scale({})", state.shadow_scale),
        );
        set_style(
            &self.pig_shadow,
            "opacity",
            &state.shadow_opacity.to_string(),
        );
        set_style(
            &self.pig_shadow,
            "bottom",
            &format!("{}px", state.actor_rendered_y),
        );
    }

    fn game_started(&mut self) {
        set_text(&self.current_score, "0");
        add_class(&self.menu_overlay, "hidden");
        if let Some(hud) = &self.hud {
            let list = hud.class_list();
            let _ = list.remove_2("opacity-0", "scale-50");
            let _ = list.add_2("opacity-100", "scale-100");
        }
        if let Some(container) = &self.container {
            let _ = container.class_list().replace("bg-menu", "bg-playing");
        }
        set_text(&self.footer_hint, "Press Space or Tap to Jump");
        add_class(&self.speed_label, "hidden");
        if let Some(body) = &self.pig_body {
            let _ = body.class_list().remove_2("rotate-90", "bg-pink-300");
        }
    }

    fn score_incremented(&mut self, score: u32, speed: f32) {
        set_text(&self.current_score, &score.to_string());
        if self.settings.effective_score_popups() {
            self.spawn_popup();
        }
        remove_class(&self.speed_label, "hidden");
        set_text(&self.speed_label, SpeedLabel::classify(speed).as_str());
    }

    fn game_over(&mut self, final_score: u32, _new_high_score: bool) {
        set_text(&self.last_score, &final_score.to_string());
        if let Some(body) = &self.pig_body {
            let _ = body.class_list().add_2("rotate-90", "bg-pink-300");
        }
        remove_class(&self.menu_overlay, "hidden");
        add_class(&self.start_content, "hidden");
        remove_class(&self.gameover_content, "hidden");
        set_text(&self.start_button, "TRY AGAIN");
        set_text(&self.footer_hint, "Jump to Restart");
    }

    fn commentary(&mut self, text: &str) {
        set_text(&self.commentary_text, &format!("\"{}\"", text));
    }

    fn best_score(&mut self, score: u32) {
        set_text(&self.high_score, &score.to_string());
    }
}

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use nelbac_core::advisor::{ChatMessage, CLEARED_MESSAGE};
use nelbac_core::cart::Cart;
use nelbac_core::catalog::Catalog;
use nelbac_core::engine::{EngineMode, HostCommand, ProgressEngine};
use nelbac_core::{AppConfig, Result};

use crate::event::AdvisorOutcome;
use crate::motion::ScalarAnimator;
use crate::theme::Theme;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    About,
    Cart,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Products => "Products",
            Page::About => "About Us",
            Page::Cart => "Cart",
        }
    }

    fn next(&self) -> Page {
        match self {
            Page::Home => Page::Products,
            Page::Products => Page::About,
            Page::About => Page::Cart,
            Page::Cart => Page::Home,
        }
    }

    fn prev(&self) -> Page {
        match self {
            Page::Home => Page::Cart,
            Page::Products => Page::Home,
            Page::About => Page::Products,
            Page::Cart => Page::About,
        }
    }
}

/// Advisor overlay state mirrored from the async session
pub struct AdvisorPanel {
    pub open: bool,
    pub input: String,
    pub waiting: bool,
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

impl AdvisorPanel {
    fn new() -> Self {
        Self {
            open: false,
            input: String::new(),
            waiting: false,
            session_id: String::new(),
            messages: Vec::new(),
        }
    }
}

/// Work the key handler cannot do synchronously; the run loop owns the
/// async side.
#[derive(Debug, PartialEq, Eq)]
pub enum AppSignal {
    AskAdvisor(String),
    ClearAdvisor,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub page: Page,
    pub catalog: Catalog,
    pub cart: Cart,
    pub engine: ProgressEngine,
    pub advisor: AdvisorPanel,
    pub selected_product: usize,
    pub selected_cart_line: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
    animator: ScalarAnimator,
    displayed_scalar: f64,
    last_tick: Instant,
}

impl App {
    pub fn new(config: Arc<AppConfig>, catalog: Catalog, theme: Theme) -> Result<Self> {
        let engine = ProgressEngine::new(
            catalog.vision.len(),
            config.engine.mode,
            config.engine.clone(),
        )?;
        let animator = ScalarAnimator::new(config.ui.motion.clone());

        Ok(Self {
            config,
            theme,
            page: Page::Home,
            catalog,
            cart: Cart::new(),
            engine,
            advisor: AdvisorPanel::new(),
            selected_product: 0,
            selected_cart_line: 0,
            status_message: None,
            should_quit: false,
            animator,
            displayed_scalar: 0.0,
            last_tick: Instant::now(),
        })
    }

    /// The rendered rotation in degrees, eased; the engine's scalar
    /// stays authoritative.
    pub fn displayed_scalar(&self) -> f64 {
        self.displayed_scalar
    }

    /// Eased overall progress through the sequence, in [0, 1]
    /// (scroll-linked mode).
    pub fn displayed_fraction(&self) -> f64 {
        self.displayed_scalar / 360.0
    }

    /// Visibility predicate for the engine: the Home sequence only
    /// auto-plays while Home is the visible page and no overlay covers
    /// it.
    pub fn sequence_visible(&self) -> bool {
        self.page == Page::Home && !self.advisor.open
    }

    /// The engine scalar mapped into the animator's angular domain.
    /// A scroll fraction wraps at 1.0 exactly as a rotation wraps at
    /// 360°, so the same shortest-arc easing applies to both modes.
    fn engine_scalar_degrees(&self) -> f64 {
        match self.engine.mode() {
            EngineMode::Orbit => self.engine.scalar(),
            EngineMode::ScrollLinked => self.engine.scalar() * 360.0,
        }
    }

    /// Seed the advisor panel once the persisted session is open.
    pub fn set_advisor_session(&mut self, session_id: String, messages: Vec<ChatMessage>) {
        self.advisor.session_id = session_id;
        self.advisor.messages = messages;
    }

    /// Per-frame update: advances the engine by wall-clock delta and
    /// eases the displayed rotation after it.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt_ms = now.duration_since(self.last_tick).as_secs_f64() * 1000.0;
        self.last_tick = now;

        self.engine.advance_by_time(dt_ms, self.sequence_visible());
        self.animator.follow(self.engine_scalar_degrees());
        self.displayed_scalar = self.animator.update();
    }

    /// Raw wheel delta from the host surface.
    pub fn on_wheel(&mut self, delta: f64) {
        if self.page != Page::Home || self.advisor.open {
            return;
        }
        if let Some(command) = self.engine.on_input_delta(delta) {
            self.apply_command(command);
        }
    }

    fn apply_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::RotateTo(deg) => self.animator.follow(deg),
            HostCommand::ScrollToFraction(frac) => self.animator.follow(frac * 360.0),
        }
    }

    fn jump_to(&mut self, target: i64) {
        let command = self.engine.jump_to(target);
        self.apply_command(command);
    }

    /// Apply the outcome of an async advisor request.
    pub fn on_advisor_outcome(&mut self, outcome: AdvisorOutcome) {
        self.advisor.waiting = false;
        match outcome {
            AdvisorOutcome::Reply { content } => {
                self.advisor.messages.push(ChatMessage::advisor(content));
            }
            AdvisorOutcome::Cleared => {
                self.advisor.messages = vec![ChatMessage::advisor(CLEARED_MESSAGE)];
            }
            AdvisorOutcome::Failure { error } => {
                tracing::error!("Advisor exchange failed: {}", error);
                self.status_message = Some(format!("Advisor unavailable: {}", error));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        if self.advisor.open {
            return self.handle_advisor_key(key);
        }

        self.status_message = None;

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('a') => {
                if self.config.advisor.enabled {
                    self.advisor.open = true;
                } else {
                    self.status_message = Some("Advisor is disabled in config".to_string());
                }
                None
            }
            KeyCode::Tab => {
                self.page = self.page.next();
                None
            }
            KeyCode::BackTab => {
                self.page = self.page.prev();
                None
            }
            KeyCode::Char('c') => {
                self.page = Page::Cart;
                None
            }
            _ => match self.page {
                Page::Home => self.handle_home_key(key),
                Page::Products => self.handle_products_key(key),
                Page::Cart => self.handle_cart_key(key),
                Page::About => None,
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        let count = self.engine.item_count() as i64;
        match key.code {
            KeyCode::Char('j') | KeyCode::Char('n') | KeyCode::Down | KeyCode::Right => {
                self.jump_to(self.engine.active_index() as i64 + 1);
            }
            KeyCode::Char('k') | KeyCode::Char('p') | KeyCode::Up | KeyCode::Left => {
                self.jump_to(self.engine.active_index() as i64 - 1);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let target = c as i64 - '1' as i64;
                if target < count {
                    self.jump_to(target);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_products_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        let count = self.catalog.products.len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected_product = (self.selected_product + 1) % count;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_product = (self.selected_product + count - 1) % count;
            }
            KeyCode::Enter => {
                let product = self.catalog.products[self.selected_product].clone();
                self.cart.add(&product);
                self.status_message = Some(format!("Added {} to cart", product.name));
            }
            _ => {}
        }
        None
    }

    fn handle_cart_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        let count = self.cart.items().len();
        if count == 0 {
            return None;
        }
        self.selected_cart_line = self.selected_cart_line.min(count - 1);
        let product_id = self.cart.items()[self.selected_cart_line].product.id.clone();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.selected_cart_line = (self.selected_cart_line + 1) % count;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.selected_cart_line = (self.selected_cart_line + count - 1) % count;
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.cart.update_quantity(&product_id, 1);
            }
            KeyCode::Char('-') => {
                self.cart.update_quantity(&product_id, -1);
            }
            KeyCode::Char('x') | KeyCode::Char('d') => {
                self.cart.remove(&product_id);
                self.selected_cart_line = 0;
            }
            _ => {}
        }
        None
    }

    fn handle_advisor_key(&mut self, key: KeyEvent) -> Option<AppSignal> {
        match key.code {
            KeyCode::Esc => {
                self.advisor.open = false;
                None
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.advisor.waiting {
                    return None;
                }
                self.advisor.waiting = true;
                Some(AppSignal::ClearAdvisor)
            }
            KeyCode::Enter => {
                let prompt = self.advisor.input.trim().to_string();
                if prompt.is_empty() || self.advisor.waiting {
                    return None;
                }
                self.advisor.input.clear();
                self.advisor.messages.push(ChatMessage::user(prompt.clone()));
                self.advisor.waiting = true;
                Some(AppSignal::AskAdvisor(prompt))
            }
            KeyCode::Backspace => {
                self.advisor.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.advisor.input.push(c);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Catalog::builtin(),
            Theme::default(),
        )
        .unwrap()
    }

    #[test]
    fn quit_key_sets_flag() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_pages_round_trip() {
        let mut app = app();
        for _ in 0..4 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn digit_jumps_to_slide() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));
        assert_eq!(app.engine.active_index(), 3);
    }

    #[test]
    fn enter_on_products_adds_to_cart() {
        let mut app = app();
        app.page = Page::Products;
        app.handle_key(key(KeyCode::Char('j')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.cart.count(), 1);
        assert_eq!(app.cart.items()[0].product.id, app.catalog.products[1].id);
    }

    #[test]
    fn wheel_ignored_outside_home() {
        let mut app = app();
        app.page = Page::Products;
        app.on_wheel(1.0);
        assert_eq!(app.engine.active_index(), 0);
    }

    #[test]
    fn wheel_steps_the_orbit() {
        let mut app = app();
        app.on_wheel(1.0);
        assert_eq!(app.engine.active_index(), 1);
    }

    #[test]
    fn advisor_overlay_captures_input() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.advisor.open);

        app.handle_key(key(KeyCode::Char('h')));
        app.handle_key(key(KeyCode::Char('i')));
        assert_eq!(app.advisor.input, "hi");
        // Page keys must not leak through while the overlay is open
        assert_eq!(app.page, Page::Home);

        let signal = app.handle_key(key(KeyCode::Enter));
        assert_eq!(signal, Some(AppSignal::AskAdvisor("hi".to_string())));
        assert!(app.advisor.waiting);
        assert!(app.advisor.input.is_empty());
    }

    #[test]
    fn empty_prompt_is_not_sent() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), None);
        assert!(!app.advisor.waiting);
    }

    fn scroll_app() -> App {
        let mut config = AppConfig::default();
        config.engine.mode = EngineMode::ScrollLinked;
        // Instant motion so the displayed fraction is deterministic
        config.ui.motion.smooth_enabled = false;
        App::new(Arc::new(config), Catalog::builtin(), Theme::default()).unwrap()
    }

    #[test]
    fn advisor_open_pauses_auto_play() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('a')));
        assert!(!app.sequence_visible());
    }

    #[test]
    fn engine_mode_comes_from_config() {
        let app = scroll_app();
        assert_eq!(app.engine.mode(), EngineMode::ScrollLinked);
    }

    #[test]
    fn scroll_jump_moves_the_displayed_fraction() {
        let mut app = scroll_app();
        app.handle_key(key(KeyCode::Char('4')));
        app.on_tick();
        assert_eq!(app.engine.active_index(), 3);
        assert!((app.displayed_fraction() - 3.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn wheel_steps_the_slideshow() {
        let mut app = scroll_app();
        app.on_wheel(1.0);
        app.on_tick();
        assert_eq!(app.engine.active_index(), 1);
        assert!((app.displayed_fraction() - 1.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn cart_quantity_keys() {
        let mut app = app();
        app.page = Page::Products;
        app.handle_key(key(KeyCode::Enter));
        app.page = Page::Cart;
        app.handle_key(key(KeyCode::Char('+')));
        assert_eq!(app.cart.items()[0].quantity, 2);
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.cart.is_empty());
    }
}

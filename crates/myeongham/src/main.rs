use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use myeongham_background::BackgroundState;
use myeongham_config::Config;
use myeongham_core::{AnimationSpeed, BackgroundStyle, ColorTheme, Section};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};

mod motion;
mod sections;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Profile content and appearance settings.
    config: Config,
    /// Section currently on screen.
    section: Section,
    /// Current background style.
    background_style: BackgroundStyle,
    /// Current animation speed.
    speed: AnimationSpeed,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Background animation state.
    background: BackgroundState,
    /// When the application started.
    started_at: Instant,
    /// Milliseconds into the run when the current section was entered.
    section_entered_ms: u64,
}

impl App {
    /// Construct a new instance of [`App`] from the loaded config.
    pub fn new(config: Config) -> Self {
        let background_style = config.appearance.background();
        let speed = config.appearance.speed();
        let color_theme = config.appearance.theme();
        Self {
            running: false,
            config,
            section: Section::Home,
            background_style,
            speed,
            color_theme,
            background: BackgroundState::new(),
            started_at: Instant::now(),
            section_entered_ms: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Milliseconds since the application started.
    fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.elapsed_ms();
        let color = self.color_theme.color();

        // The hero view is the only one with an animated background
        if self.section == Section::Home {
            self.background
                .render(frame, self.background_style, elapsed_ms, self.speed);
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Navigation bar
            Constraint::Fill(1),   // Section body
            Constraint::Length(1), // Help text and clock
        ])
        .split(frame.area());

        sections::render_nav(frame, chunks[0], self.section, color);

        let ms_in_section = elapsed_ms.saturating_sub(self.section_entered_ms);
        let profile = &self.config.profile;
        match self.section {
            Section::Home => {
                sections::render_home(frame, chunks[1], profile, color, ms_in_section)
            }
            Section::About => sections::render_about(frame, chunks[1], profile, color),
            Section::Skills => {
                sections::render_skills(frame, chunks[1], profile, color, ms_in_section)
            }
            Section::Projects => sections::render_projects(frame, chunks[1], profile, color),
            Section::Contact => sections::render_contact(frame, chunks[1], profile, color),
        }

        sections::render_footer(frame, chunks[2], self.background_style, color);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the speed's tick interval so each pass through the loop
    /// is one animation tick.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.speed.tick_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Tab | KeyCode::Right) => self.set_section(self.section.next()),
            (_, KeyCode::BackTab | KeyCode::Left) => self.set_section(self.section.prev()),
            (_, KeyCode::Char(ch @ '1'..='5')) => {
                if let Some(section) = Section::from_index((ch as u8 - b'1') as usize) {
                    self.set_section(section);
                }
            }
            (_, KeyCode::Char('b')) => self.cycle_background_style(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            (_, KeyCode::Char('a')) => self.cycle_animation_speed(),
            _ => {}
        }
    }

    /// Switch sections, tearing down the background when leaving the hero.
    fn set_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        if self.section == Section::Home {
            self.background.stop();
        }
        self.section = section;
        self.section_entered_ms = self.elapsed_ms();
    }

    /// Cycle the background style; the outgoing style's state is dropped so
    /// the incoming one starts fresh at the current dimensions.
    fn cycle_background_style(&mut self) {
        self.background_style = self.background_style.next();
        self.background.stop();
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Cycle through animation speeds.
    fn cycle_animation_speed(&mut self) {
        self.speed = self.speed.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.running = true;
        app.on_key_event(key(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_tab_and_backtab_walk_sections() {
        let mut app = app();
        app.on_key_event(key(KeyCode::Tab));
        assert_eq!(app.section, Section::About);
        app.on_key_event(key(KeyCode::BackTab));
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_digit_keys_jump_directly() {
        let mut app = app();
        app.on_key_event(key(KeyCode::Char('4')));
        assert_eq!(app.section, Section::Projects);
        app.on_key_event(key(KeyCode::Char('1')));
        assert_eq!(app.section, Section::Home);
    }

    #[test]
    fn test_b_cycles_background_style() {
        let mut app = app();
        let before = app.background_style;
        app.on_key_event(key(KeyCode::Char('b')));
        assert_ne!(app.background_style, before);
    }

    #[test]
    fn test_c_cycles_color_theme() {
        let mut app = app();
        let before = app.color_theme;
        app.on_key_event(key(KeyCode::Char('c')));
        assert_ne!(app.color_theme, before);
    }

    #[test]
    fn test_a_cycles_animation_speed() {
        let mut app = app();
        let before = app.speed;
        app.on_key_event(key(KeyCode::Char('a')));
        assert_ne!(app.speed, before);
    }

    #[test]
    fn test_leaving_home_tears_down_the_background() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(app.background.is_active());

        app.on_key_event(key(KeyCode::Tab));
        assert!(!app.background.is_active());

        // Coming back re-mounts the animation on the next draw
        app.on_key_event(key(KeyCode::BackTab));
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(app.background.is_active());
    }

    #[test]
    fn test_cycling_styles_drops_stale_state() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        assert!(app.background.is_active());

        app.on_key_event(key(KeyCode::Char('b')));
        assert!(!app.background.is_active());
    }

    #[test]
    fn test_every_section_renders_without_panicking() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        for _ in 0..Section::ALL.len() {
            terminal.draw(|frame| app.render(frame)).unwrap();
            app.on_key_event(key(KeyCode::Tab));
        }
    }

    #[test]
    fn test_tiny_terminal_renders_without_panicking() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        for _ in 0..Section::ALL.len() {
            terminal.draw(|frame| app.render(frame)).unwrap();
            app.on_key_event(key(KeyCode::Tab));
        }
    }
}

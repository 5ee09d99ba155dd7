//! TUI application state and logic

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Frame;

use super::event::{Event, EventHandler};
use super::views;
use super::Route;
use crate::domain::{FilterView, Session, TodoForm, TodoId, TodoStore, User};
use crate::graphql::{ApiError, GraphqlClient, Launch};

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keys go to the new-todo form
    Typing,
}

/// Lifecycle of the launches page data
#[derive(Debug, Default)]
pub enum LaunchesState {
    /// Not requested yet (or invalidated by a 401)
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Launch>),
    Failed(String),
}

/// Application state
pub struct App {
    /// Current page
    route: Route,

    /// Todo collection and filter
    todos: TodoStore,

    /// New-todo form
    form: TodoForm,

    /// Demo session
    session: Session,

    /// Input mode
    input_mode: InputMode,

    /// Selected index into the visible todos
    todo_index: usize,

    /// Selected launch card
    launch_index: usize,

    /// Launches page data
    launches: LaunchesState,

    /// How many launches to request
    launches_limit: u32,

    /// Set when the run loop should start a fetch
    fetch_requested: bool,

    /// Status message to display
    status_message: Option<String>,

    /// Message of a panic caught while drawing
    render_error: Option<String>,

    /// Whether to quit
    should_quit: bool,
}

impl App {
    /// Create a new application
    pub fn new(route: Route, launches_limit: u32) -> Self {
        let mut app = Self {
            route: Route::Home,
            todos: TodoStore::new(),
            form: TodoForm::new(),
            session: Session::new(),
            input_mode: InputMode::Normal,
            todo_index: 0,
            launch_index: 0,
            launches: LaunchesState::Idle,
            launches_limit,
            fetch_requested: false,
            status_message: None,
            render_error: None,
            should_quit: false,
        };
        app.set_route(route);
        app
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
        events: EventHandler,
        client: Arc<GraphqlClient>,
    ) -> Result<()> {
        while !self.should_quit() {
            if self.take_fetch_request() {
                let client = Arc::clone(&client);
                let limit = self.launches_limit;
                spawn_fetch(move || client.launches(Some(limit)), events.sender());
            }

            self.draw_guarded(terminal)?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
                Event::Launches(result) => self.apply_launches(result),
                Event::FetchCrashed(message) => self.fetch_crashed(&message),
            }
        }

        Ok(())
    }

    /// Draw one frame, turning a panic inside the views into the error screen
    pub fn draw_guarded<B: Backend>(&mut self, terminal: &mut ratatui::Terminal<B>) -> Result<()> {
        self.draw_guarded_with(terminal, App::draw)
    }

    fn draw_guarded_with<B, F>(&mut self, terminal: &mut ratatui::Terminal<B>, render: F) -> Result<()>
    where
        B: Backend,
        F: Fn(&App, &mut Frame),
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let app: &App = self;
            terminal.draw(|frame| render(app, frame)).map(|_| ())
        }));

        match outcome {
            Ok(result) => Ok(result?),
            Err(payload) => {
                let message = panic_message(&*payload);
                if self.render_error.is_some() {
                    return Err(anyhow!("Error screen failed to render: {}", message));
                }
                self.set_render_error(message);
                terminal.clear()?;
                Ok(())
            }
        }
    }

    /// Draw the UI
    pub fn draw(&self, frame: &mut Frame) {
        if self.render_error.is_some() {
            views::error::draw(frame, self);
        } else {
            views::draw(frame, self);
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Check for quit first (Ctrl+C anywhere)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.render_error.is_some() {
            self.handle_error_key(key);
            return;
        }

        // Messages last until the next key
        self.status_message = None;

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Typing => self.handle_typing_key(key),
        }
    }

    /// Handle keys in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }

            // Navigation
            KeyCode::Char('1') => self.set_route(Route::Home),
            KeyCode::Char('2') => self.set_route(Route::Todos),
            KeyCode::Char('3') => self.set_route(Route::Launches),
            KeyCode::Char('4') => self.set_route(Route::About),
            KeyCode::Tab => self.set_route(self.route.next()),
            KeyCode::BackTab => self.set_route(self.route.prev()),

            KeyCode::Char('L') => self.toggle_login(),

            KeyCode::Char('?') => {
                self.status_message = Some(
                    "1-4:pages Tab:next L:login i:new todo space:toggle d:delete f:filter C:clear r:retry q:quit"
                        .to_string(),
                );
            }

            _ => match self.route {
                Route::Home => self.handle_home_key(key),
                Route::Todos => self.handle_todos_key(key),
                Route::Launches => self.handle_launches_key(key),
                Route::Login => self.handle_login_key(key),
                Route::About => {}
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') => self.set_route(Route::Todos),
            KeyCode::Char('s') => self.set_route(Route::Launches),
            _ => {}
        }
    }

    fn handle_todos_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('i') | KeyCode::Char('a') => {
                self.input_mode = InputMode::Typing;
            }
            KeyCode::Char('j') | KeyCode::Down => self.move_todo_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_todo_selection(-1),
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(id) = self.selected_todo_id() {
                    self.todos.toggle_todo(&id);
                    self.clamp_todo_selection();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_todo_id() {
                    if let Some(todo) = self.todos.get(&id) {
                        self.status_message = Some(format!("Deleted: {}", todo.text));
                    }
                    self.todos.delete_todo(&id);
                    self.clamp_todo_selection();
                }
            }
            KeyCode::Char('f') => {
                self.todos.set_filter(self.todos.filter().next());
                self.clamp_todo_selection();
            }
            KeyCode::Char('C') => {
                let removed = self.todos.clear_completed();
                if removed > 0 {
                    self.status_message = Some(format!("Cleared {} completed", removed));
                }
                self.clamp_todo_selection();
            }
            _ => {}
        }
    }

    fn handle_launches_key(&mut self, key: KeyEvent) {
        let count = match &self.launches {
            LaunchesState::Loaded(launches) => launches.len(),
            _ => 0,
        };

        match key.code {
            KeyCode::Char('r') => {
                if !matches!(self.launches, LaunchesState::Loading) {
                    self.request_fetch();
                }
            }
            KeyCode::Char('j') | KeyCode::Down => {
                if count > 0 {
                    self.launch_index = (self.launch_index + 1) % count;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if count > 0 {
                    self.launch_index = if self.launch_index == 0 {
                        count - 1
                    } else {
                        self.launch_index - 1
                    };
                }
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.login_demo();
                self.set_route(Route::Home);
            }
            KeyCode::Esc => self.set_route(Route::Home),
            _ => {}
        }
    }

    /// Handle keys while the new-todo form has focus
    fn handle_typing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => match self.form.submit(&mut self.todos) {
                Ok(id) => {
                    if let Some(todo) = self.todos.get(&id) {
                        self.status_message = Some(format!("Added: {}", todo.text));
                    }
                    self.clamp_todo_selection();
                }
                Err(_) => {
                    // The form keeps the error for display
                }
            },
            KeyCode::Backspace => self.form.pop(),
            KeyCode::Char(c) => self.form.push(c),
            _ => {}
        }
    }

    /// Handle keys on the error screen
    fn handle_error_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('t') => {
                self.render_error = None;
            }
            KeyCode::Char('R') => self.reload(),
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Switch pages; the launches page fetches on its first visit
    pub fn set_route(&mut self, route: Route) {
        self.route = route;
        self.input_mode = InputMode::Normal;
        if route == Route::Launches && matches!(self.launches, LaunchesState::Idle) {
            self.request_fetch();
        }
    }

    fn toggle_login(&mut self) {
        if self.session.is_authenticated() {
            self.session.logout();
            self.status_message = Some("Logged out".to_string());
        } else {
            self.login_demo();
        }
    }

    fn login_demo(&mut self) {
        let user = User::demo();
        self.status_message = Some(format!("Logged in as {}", user.name));
        self.session.login(user);
    }

    fn request_fetch(&mut self) {
        self.launches = LaunchesState::Loading;
        self.launch_index = 0;
        self.fetch_requested = true;
    }

    /// Returns true once per requested fetch
    pub fn take_fetch_request(&mut self) -> bool {
        std::mem::take(&mut self.fetch_requested)
    }

    /// Store the outcome of a launches fetch
    pub fn apply_launches(&mut self, result: Result<Vec<Launch>, ApiError>) {
        match result {
            Ok(launches) => {
                self.launches = LaunchesState::Loaded(launches);
            }
            Err(e) if e.requires_login() => {
                // Fetch again once the user is back from the login page
                self.launches = LaunchesState::Idle;
                self.session.logout();
                self.route = Route::Login;
                self.input_mode = InputMode::Normal;
                self.status_message = Some("Session expired. Log in to continue.".to_string());
            }
            Err(e) => {
                self.launches = LaunchesState::Failed(e.to_string());
            }
        }
    }

    /// The fetch worker panicked before producing a result
    pub fn fetch_crashed(&mut self, message: &str) {
        self.launches = LaunchesState::Failed(format!("Launch fetch crashed: {}", message));
    }

    /// Show the error screen for a caught panic
    pub fn set_render_error(&mut self, message: impl Into<String>) {
        self.render_error = Some(message.into());
    }

    /// Start over: fresh stores, home page
    fn reload(&mut self) {
        *self = App::new(Route::Home, self.launches_limit);
    }

    fn selected_todo_id(&self) -> Option<TodoId> {
        FilterView::new(&self.todos)
            .visible
            .get(self.todo_index)
            .map(|t| t.id.clone())
    }

    fn move_todo_selection(&mut self, delta: isize) {
        let len = FilterView::new(&self.todos).visible.len();
        if len == 0 {
            self.todo_index = 0;
            return;
        }
        self.todo_index = (self.todo_index as isize + delta).rem_euclid(len as isize) as usize;
    }

    fn clamp_todo_selection(&mut self) {
        let len = FilterView::new(&self.todos).visible.len();
        if len == 0 {
            self.todo_index = 0;
        } else if self.todo_index >= len {
            self.todo_index = len - 1;
        }
    }

    // Accessors for views

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn todos(&self) -> &TodoStore {
        &self.todos
    }

    pub fn form(&self) -> &TodoForm {
        &self.form
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn todo_index(&self) -> usize {
        self.todo_index
    }

    pub fn launch_index(&self) -> usize {
        self.launch_index
    }

    pub fn launches(&self) -> &LaunchesState {
        &self.launches
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn render_error(&self) -> Option<&str> {
        self.render_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Fetch launches on a worker thread and post the result as an event.
/// A panic in `fetch` is reported as [`Event::FetchCrashed`], so the page
/// never waits on a worker that is gone.
fn spawn_fetch<F>(fetch: F, tx: mpsc::Sender<Event>)
where
    F: FnOnce() -> Result<Vec<Launch>, ApiError> + Send + 'static,
{
    thread::spawn(move || {
        let event = match panic::catch_unwind(AssertUnwindSafe(fetch)) {
            Ok(result) => Event::Launches(result),
            Err(payload) => Event::FetchCrashed(panic_message(&*payload)),
        };
        // The UI may already be gone
        let _ = tx.send(event);
    });
}

/// Best-effort text of a panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown error".to_string()
    }
}

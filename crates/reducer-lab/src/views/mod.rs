use crate::actions::Action;
use crate::state::AppState;
use ratatui::{
    crossterm::event::KeyEvent,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use strum::{Display, EnumCount, EnumIter, FromRepr, IntoEnumIterator};

pub mod movie_list_view;
mod remote_list;
pub mod shop_view;
pub mod stopwatch_view;
pub mod user_list_view;

pub use movie_list_view::MovieListView;
pub use shop_view::ShopView;
pub use stopwatch_view::StopwatchView;
pub use user_list_view::UserListView;

/// View identifier - allows comparing which view is active
///
/// Declaration order is the tab order; digit keys select by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCount, EnumIter, FromRepr)]
pub enum ViewId {
    Shop,
    Stopwatch,
    Movies,
    Users,
}

impl ViewId {
    /// View at a zero-based tab position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::from_repr((self.index() + 1) % Self::COUNT).unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        Self::from_repr((self.index() + Self::COUNT - 1) % Self::COUNT).unwrap_or(self)
    }

    /// A freshly mounted view for this id
    pub fn into_view(self) -> Box<dyn View> {
        match self {
            ViewId::Shop => Box::new(ShopView::new()),
            ViewId::Stopwatch => Box::new(StopwatchView::new()),
            ViewId::Movies => Box::new(MovieListView::new()),
            ViewId::Users => Box::new(UserListView::new()),
        }
    }
}

/// View trait - defines the interface that all views must implement
///
/// Views read the state and turn keys into actions; they never mutate.
/// The trait must stay object-safe: the active view travels inside
/// actions as a `Box<dyn View>` and must be `Send`.
pub trait View: std::fmt::Debug + Send {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view into the body area
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Translate a key that is not bound globally into an action.
    ///
    /// `now_ms` is the clock reading to stamp time-dependent actions with.
    fn translate_key(&self, _key: &KeyEvent, _state: &AppState, _now_ms: u64) -> Option<Action> {
        None
    }

    /// Key hints shown in the footer, as (key, description) pairs
    fn key_hints(&self, _state: &AppState) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Clone this view into a Box
    /// This is needed because Clone requires Sized, so we provide a manual clone method
    fn clone_box(&self) -> Box<dyn View>;
}

/// Implement Clone for Box<dyn View>
impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

const GLOBAL_HINTS: [(&str, &str); 3] = [("Tab", "switch"), ("1-4", "jump"), ("q", "quit")];

/// Render the entire application UI: tabs, the active view, key hints
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(state, header, f);
    state.active_view.render(state, body, f);
    render_footer(state, footer, f);
}

fn render_header(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let titles = ViewId::iter().map(|id| format!("{} {}", id.index() + 1, id));
    let uptime = Line::from(format!(" uptime {}s ", state.uptime_secs))
        .style(theme.muted())
        .right_aligned();

    let tabs = Tabs::new(titles)
        .select(state.active_view.view_id().index())
        .style(theme.muted())
        .highlight_style(theme.selected())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .title(Span::styled(" reducer-lab ", theme.panel_title()))
                .title(uptime),
        );

    f.render_widget(tabs, area);
}

fn render_footer(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let spans: Vec<Span> = state
        .active_view
        .key_hints(state)
        .into_iter()
        .chain(GLOBAL_HINTS)
        .flat_map(|(key, description)| {
            [
                Span::styled(format!(" {}", key), theme.key_hint()),
                Span::styled(format!(" {} ", description), theme.key_description()),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the whole UI into an in-memory terminal and return its text
#[cfg(test)]
pub(crate) fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    use ratatui::{backend::TestBackend, Terminal};

    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| render(state, f.area(), f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

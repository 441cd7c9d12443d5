//! Shared rendering for fetched lists

use crate::theme::Theme;
use crate::view_models::RemoteListViewModel;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render a remote list, or its loading indicator while the fetch is pending
pub fn render_remote_list(
    vm: &RemoteListViewModel,
    title: &str,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(Span::styled(format!(" {} ", title), theme.panel_title()));

    if vm.is_loading {
        let loading = Paragraph::new(Line::styled("Loading...", theme.warning())).block(block);
        f.render_widget(loading, area);
        return;
    }

    let count = Line::styled(format!(" {} ", vm.count_text), theme.muted()).right_aligned();
    let block = block.title(count);
    let items: Vec<ListItem> = vm
        .rows
        .iter()
        .map(|row| ListItem::new(Line::styled(row.text.clone(), theme.text())))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected());

    // Selection drives scrolling for lists taller than the area
    let mut list_state = ListState::default().with_selected(Some(vm.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

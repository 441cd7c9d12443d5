//! Shop View
//!
//! The product catalog with an add-to-cart action, and the cart panel as an
//! overlay while it is open.

use crate::actions::{Action, CartAction, ShopAction};
use crate::state::AppState;
use crate::theme::Theme;
use crate::view_models::{CartPanelViewModel, ShopViewModel};
use crate::views::{View, ViewId};
use ratatui::{
    crossterm::event::{KeyCode, KeyEvent},
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Shop screen view
#[derive(Debug, Clone)]
pub struct ShopView;

impl ShopView {
    pub fn new() -> Self {
        Self
    }
}

impl View for ShopView {
    fn view_id(&self) -> ViewId {
        ViewId::Shop
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let vm = ShopViewModel::from_state(&state.shop, &state.currency_suffix);
        let theme = &state.theme;

        let items: Vec<ListItem> = vm
            .products
            .iter()
            .map(|row| {
                let style = if row.is_cursor {
                    theme.selected()
                } else {
                    theme.text()
                };
                ListItem::new(Line::styled(row.text.clone(), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Span::styled(" Products ", theme.panel_title()))
            .title(
                Line::styled(format!(" {} ", vm.cart_button), theme.success()).right_aligned(),
            );

        f.render_widget(List::new(items).block(block), area);

        if let Some(cart) = &vm.cart {
            render_cart(cart, theme, area, f);
        }
    }

    fn translate_key(&self, key: &KeyEvent, state: &AppState, _now_ms: u64) -> Option<Action> {
        if state.shop.cart.is_open() {
            translate_cart_key(key)
        } else {
            translate_catalog_key(key)
        }
    }

    fn key_hints(&self, state: &AppState) -> Vec<(&'static str, &'static str)> {
        if state.shop.cart.is_open() {
            vec![
                ("j/k", "item"),
                ("+/-", "quantity"),
                ("d", "remove"),
                ("x", "clear"),
                ("c", "close cart"),
            ]
        } else {
            vec![("j/k", "product"), ("a", "add to cart"), ("c", "open cart")]
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }
}

fn translate_catalog_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::Shop(ShopAction::NextProduct),
        KeyCode::Char('k') | KeyCode::Up => Action::Shop(ShopAction::PreviousProduct),
        KeyCode::Char('a') | KeyCode::Enter => Action::Shop(ShopAction::AddSelected),
        KeyCode::Char('c') => Action::Cart(CartAction::ToggleCart),
        _ => return None,
    };
    Some(action)
}

fn translate_cart_key(key: &KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::Shop(ShopAction::NextItem),
        KeyCode::Char('k') | KeyCode::Up => Action::Shop(ShopAction::PreviousItem),
        KeyCode::Char('+') | KeyCode::Char('=') => Action::Shop(ShopAction::IncrementSelected),
        KeyCode::Char('-') => Action::Shop(ShopAction::DecrementSelected),
        KeyCode::Char('d') | KeyCode::Delete => Action::Shop(ShopAction::RemoveSelected),
        KeyCode::Char('x') => Action::Cart(CartAction::Clear),
        KeyCode::Char('c') | KeyCode::Esc => Action::Cart(CartAction::ToggleCart),
        _ => return None,
    };
    Some(action)
}

/// Render the cart panel centered over the catalog
fn render_cart(cart: &CartPanelViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let [panel_area] = Layout::horizontal([Constraint::Percentage(80)])
        .flex(Flex::Center)
        .areas(area);
    let [panel_area] = Layout::vertical([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(panel_area);

    f.render_widget(Clear, panel_area);

    let mut lines: Vec<Line> = if cart.is_empty {
        vec![Line::styled("Your cart is empty", theme.muted())]
    } else {
        cart.rows
            .iter()
            .map(|row| {
                let style = if row.is_cursor {
                    theme.selected()
                } else {
                    theme.text()
                };
                Line::styled(row.text.clone(), style)
            })
            .collect()
    };
    lines.push(Line::default());
    lines.push(Line::styled(cart.summary_text.clone(), theme.muted()));
    lines.push(Line::styled(cart.total_text.clone(), theme.success()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title(Span::styled(" Cart ", theme.panel_title()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, panel_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::app_reducer::reduce;
    use crate::views::render_to_string;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn translate(state: &AppState, code: KeyCode) -> Option<Action> {
        ShopView::new().translate_key(&key(code), state, 0)
    }

    fn apply(state: AppState, actions: &[Action]) -> AppState {
        actions.iter().fold(state, reduce)
    }

    #[test]
    fn test_catalog_keys() {
        let state = AppState::default();
        assert!(matches!(
            translate(&state, KeyCode::Char('j')),
            Some(Action::Shop(ShopAction::NextProduct))
        ));
        assert!(matches!(
            translate(&state, KeyCode::Char('a')),
            Some(Action::Shop(ShopAction::AddSelected))
        ));
        assert!(matches!(
            translate(&state, KeyCode::Char('c')),
            Some(Action::Cart(CartAction::ToggleCart))
        ));
        // Cart-only keys are ignored while the panel is closed
        assert!(translate(&state, KeyCode::Char('x')).is_none());
    }

    #[test]
    fn test_cart_keys_when_open() {
        let state = apply(
            AppState::default(),
            &[Action::Cart(CartAction::ToggleCart)],
        );
        assert!(matches!(
            translate(&state, KeyCode::Char('+')),
            Some(Action::Shop(ShopAction::IncrementSelected))
        ));
        assert!(matches!(
            translate(&state, KeyCode::Char('d')),
            Some(Action::Shop(ShopAction::RemoveSelected))
        ));
        assert!(matches!(
            translate(&state, KeyCode::Char('x')),
            Some(Action::Cart(CartAction::Clear))
        ));
        assert!(matches!(
            translate(&state, KeyCode::Esc),
            Some(Action::Cart(CartAction::ToggleCart))
        ));
    }

    #[test]
    fn test_renders_catalog_and_cart_button() {
        let state = apply(
            AppState::default(),
            &[
                Action::Shop(ShopAction::AddSelected),
                Action::Shop(ShopAction::AddSelected),
            ],
        );

        let text = render_to_string(&state, 80, 20);
        assert!(text.contains("Products"));
        assert!(text.contains("Laptop"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Cart (2)"));
    }

    #[test]
    fn test_renders_open_cart_overlay() {
        let state = apply(
            AppState::default(),
            &[
                Action::Shop(ShopAction::AddSelected),
                Action::Cart(CartAction::ToggleCart),
            ],
        );

        let text = render_to_string(&state, 100, 24);
        assert!(text.contains("1 items (1 distinct)"));
        assert!(text.contains("Total: 1,200,000"));
    }

    #[test]
    fn test_renders_empty_cart_notice() {
        let state = apply(
            AppState::default(),
            &[Action::Cart(CartAction::ToggleCart)],
        );

        let text = render_to_string(&state, 80, 20);
        assert!(text.contains("Your cart is empty"));
    }
}

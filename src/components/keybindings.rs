//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current screen.
//! The registry is the single source of truth: it resolves key events to
//! actions and also feeds the navigation bar and the help overlay.

use crate::types::{DietaryTag, ProductLabel, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PreviousTab,
    NextTab,
    Select,
    Back,
    Quit,
    Help,
    CarouselPrevious,
    CarouselNext,
    /// Jump to a 0-indexed slide
    CarouselJump(usize),
    ToggleProductLabel(ProductLabel),
    ToggleDietaryTag(DietaryTag),
    RaiseMaxPrice,
    LowerMaxPrice,
    RaiseMinPrice,
    LowerMinPrice,
    ResetFilters,
    Continue,
    ToggleInterest,
    SwitchPreview,
    InsertChar(char),
    DeleteChar,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    fn matches(&self, event: &KeyEvent) -> bool {
        // Shift is implied by the character itself for symbols like '?' and '+'
        let modifiers = event.modifiers - KeyModifiers::SHIFT;
        self.key == event.code && self.modifiers == modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Screen-specific keybindings
    screen_bindings: HashMap<Screen, Vec<Keybinding>>,
    /// Global keybindings (available on every screen)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            screen_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all screens
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            // Reachable while a text field captures '?'
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.screen_bindings.insert(
            Screen::Landing,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open demo"),
                // Back out of the landing page quits, after closing help
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Quit"),
            ],
        );

        self.screen_bindings.insert(
            Screen::Signup,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous field"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next field"),
                Keybinding::new(KeyCode::Tab, KeyAction::NavigateDown, "Tab", "Next field"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleInterest, "Space", "Toggle interest"),
                Keybinding::new(KeyCode::Enter, KeyAction::Continue, "Enter", "Continue"),
                Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
            ],
        );

        let mut email = vec![
            Keybinding::new(KeyCode::Left, KeyAction::CarouselPrevious, "Left", "Previous slide"),
            Keybinding::new(KeyCode::Right, KeyAction::CarouselNext, "Right", "Next slide"),
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchPreview, "Tab", "Desktop/mobile"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ];
        email.extend(Self::jump_bindings("Show slide"));
        self.screen_bindings.insert(Screen::Email, email);

        let mut menu = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::new(KeyCode::Left, KeyAction::PreviousTab, "Left", "Previous section"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next section"),
            Keybinding::new(KeyCode::Char('p'), KeyAction::ToggleDietaryTag(DietaryTag::Popular), "P", "Popular"),
            Keybinding::new(KeyCode::Char('v'), KeyAction::ToggleDietaryTag(DietaryTag::Vegetarian), "V", "Vegetarian"),
            Keybinding::new(KeyCode::Char('e'), KeyAction::ToggleDietaryTag(DietaryTag::Vegan), "E", "Vegan"),
            Keybinding::new(KeyCode::Char('s'), KeyAction::ToggleDietaryTag(DietaryTag::Spicy), "S", "Spicy"),
            Keybinding::new(KeyCode::Char('g'), KeyAction::ToggleDietaryTag(DietaryTag::GlutenFree), "G", "Gluten-free"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::ResetFilters, "R", "Reset filters"),
            Keybinding::new(KeyCode::Char(','), KeyAction::CarouselPrevious, ",", "Previous special"),
            Keybinding::new(KeyCode::Char('.'), KeyAction::CarouselNext, ".", "Next special"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ];
        menu.extend(Self::jump_bindings("Show special"));
        self.screen_bindings.insert(Screen::Menu, menu);

        let mut shop = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
            Keybinding::new(KeyCode::Left, KeyAction::PreviousTab, "Left", "Previous category"),
            Keybinding::new(KeyCode::Right, KeyAction::NextTab, "Right", "Next category"),
            Keybinding::new(KeyCode::Char('p'), KeyAction::ToggleProductLabel(ProductLabel::Popular), "P", "Popular"),
            Keybinding::new(KeyCode::Char('s'), KeyAction::ToggleProductLabel(ProductLabel::Sale), "S", "Sale"),
            Keybinding::new(KeyCode::Char('n'), KeyAction::ToggleProductLabel(ProductLabel::New), "N", "New"),
            Keybinding::new(KeyCode::Char('+'), KeyAction::RaiseMaxPrice, "+", "Raise max price"),
            Keybinding::new(KeyCode::Char('-'), KeyAction::LowerMaxPrice, "-", "Lower max price"),
            Keybinding::new(KeyCode::Char(']'), KeyAction::RaiseMinPrice, "]", "Raise min price"),
            Keybinding::new(KeyCode::Char('['), KeyAction::LowerMinPrice, "[", "Lower min price"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::ResetFilters, "R", "Reset filters"),
            Keybinding::new(KeyCode::Char(','), KeyAction::CarouselPrevious, ",", "Previous promo"),
            Keybinding::new(KeyCode::Char('.'), KeyAction::CarouselNext, ".", "Next promo"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ];
        shop.extend(Self::jump_bindings("Show promo"));
        self.screen_bindings.insert(Screen::Shop, shop);
    }

    /// Number keys 1-9 jump straight to a slide.
    fn jump_bindings(description: &str) -> Vec<Keybinding> {
        ('1'..='9')
            .enumerate()
            .map(|(index, digit)| {
                Keybinding::new(
                    KeyCode::Char(digit),
                    KeyAction::CarouselJump(index),
                    &digit.to_string(),
                    description,
                )
            })
            .collect()
    }

    /// Get keybindings for a specific screen (includes global bindings)
    pub fn get_bindings(&self, screen: Screen) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(screen_bindings) = self.screen_bindings.get(&screen) {
            bindings.extend(screen_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Map a key event to an action.
    ///
    /// With `text_entry` set, printable characters are typed into the focused
    /// field and Backspace deletes; only Ctrl+C and non-character keys keep
    /// their bindings.
    pub fn resolve(&self, screen: Screen, event: KeyEvent, text_entry: bool) -> Option<KeyAction> {
        if text_entry && !event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char(c) => return Some(KeyAction::InsertChar(c)),
                KeyCode::Backspace => return Some(KeyAction::DeleteChar),
                _ => {}
            }
        }

        self.get_bindings(screen)
            .into_iter()
            .find(|binding| binding.matches(&event))
            .map(|binding| binding.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, screen: Screen) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(screen);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match screen {
            Screen::Landing => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Screen::Signup => vec![
                KeyAction::NavigateUp,
                KeyAction::Continue,
                KeyAction::Back,
                KeyAction::Help,
            ],
            Screen::Email => vec![
                KeyAction::CarouselNext,
                KeyAction::SwitchPreview,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Screen::Menu | Screen::Shop => vec![
                KeyAction::NavigateUp,
                KeyAction::NextTab,
                KeyAction::ResetFilters,
                KeyAction::Back,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            // Combine paired keys into single items for cleaner display
            let combined = match action {
                KeyAction::NavigateUp => Some(("Up/Dn", "Navigate")),
                KeyAction::NextTab => Some(("Left/Right", "Tabs")),
                KeyAction::CarouselNext => Some(("Left/Right", "Slides")),
                _ => None,
            };
            if let Some((key_display, action_label)) = combined {
                items.push(NavBarItem {
                    key_display: key_display.to_string(),
                    action_label: action_label.to_string(),
                });
            } else if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a screen (for help overlay)
    pub fn get_help_content(&self, screen: Screen) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 4] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PreviousTab
                        | KeyAction::NextTab
                        | KeyAction::CarouselPrevious
                        | KeyAction::CarouselNext
                )
            }),
            ("Filters", |a| {
                matches!(
                    a,
                    KeyAction::ToggleProductLabel(_)
                        | KeyAction::ToggleDietaryTag(_)
                        | KeyAction::RaiseMaxPrice
                        | KeyAction::LowerMaxPrice
                        | KeyAction::RaiseMinPrice
                        | KeyAction::LowerMinPrice
                        | KeyAction::ResetFilters
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Continue
                        | KeyAction::ToggleInterest
                        | KeyAction::SwitchPreview
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Back | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(screen);
        let mut sections = Vec::new();
        for (title, belongs) in groups {
            let items: Vec<(String, String)> = bindings
                .iter()
                .filter(|b| belongs(&b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        // Nine jump keys collapse into one line
        if bindings
            .iter()
            .any(|b| matches!(b.action, KeyAction::CarouselJump(_)))
        {
            sections.push(HelpSection {
                title: "Carousel".to_string(),
                items: vec![("1-9".to_string(), "Jump to slide".to_string())],
            });
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_shop_label_keys() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Screen::Shop, key(KeyCode::Char('s')), false),
            Some(KeyAction::ToggleProductLabel(ProductLabel::Sale))
        );
        assert_eq!(
            ctx.resolve(Screen::Menu, key(KeyCode::Char('s')), false),
            Some(KeyAction::ToggleDietaryTag(DietaryTag::Spicy))
        );
    }

    #[test]
    fn test_shifted_symbols_resolve() {
        let ctx = KeybindingContext::new();
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            ctx.resolve(Screen::Shop, plus, false),
            Some(KeyAction::RaiseMaxPrice)
        );
        let help = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(Screen::Landing, help, false), Some(KeyAction::Help));
    }

    #[test]
    fn test_text_entry_captures_characters() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Screen::Signup, key(KeyCode::Char('q')), true),
            Some(KeyAction::InsertChar('q'))
        );
        assert_eq!(
            ctx.resolve(Screen::Signup, key(KeyCode::Backspace), true),
            Some(KeyAction::DeleteChar)
        );
        assert_eq!(
            ctx.resolve(Screen::Signup, key(KeyCode::Enter), true),
            Some(KeyAction::Continue)
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.resolve(Screen::Signup, ctrl_c, true), Some(KeyAction::Quit));
    }

    #[test]
    fn test_digit_jumps_are_zero_indexed() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Screen::Email, key(KeyCode::Char('1')), false),
            Some(KeyAction::CarouselJump(0))
        );
        assert_eq!(
            ctx.resolve(Screen::Shop, key(KeyCode::Char('9')), false),
            Some(KeyAction::CarouselJump(8))
        );
    }

    #[test]
    fn test_unbound_key() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(Screen::Landing, key(KeyCode::Char('z')), false), None);
    }

    #[test]
    fn test_every_screen_has_nav_items_and_help() {
        let ctx = KeybindingContext::new();
        for screen in Screen::iter() {
            assert!(!ctx.get_nav_items(screen).is_empty(), "{screen}");
            let help = ctx.get_help_content(screen);
            assert!(help.iter().any(|s| s.title == "General"), "{screen}");
        }
    }
}

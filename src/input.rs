use crate::view_state::{Overlay, ViewState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    FlipTheme,
    FlipSound,
    FlipTerminal,
    CloseTerminal,
    Scroll(&'static str),
    Blip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Scroll(&'static str),
    Blip,
}

/// Global key bindings. Everything not listed here is ignored.
pub fn actions_for_key(key: &str) -> &'static [Action] {
    match key {
        "~" => &[Action::FlipTerminal],
        "Escape" => &[Action::CloseTerminal],
        _ => &[],
    }
}

// Flips read the value in place so back-to-back activations never work
// from a stale snapshot.
pub fn apply(state: &mut ViewState, action: Action) -> Option<Effect> {
    match action {
        Action::FlipTheme => {
            state.dark_mode = !state.dark_mode;
            None
        }
        Action::FlipSound => {
            state.sound_enabled = !state.sound_enabled;
            None
        }
        Action::FlipTerminal => {
            state.terminal = state.terminal.toggled();
            None
        }
        Action::CloseTerminal => {
            state.terminal = Overlay::Closed;
            None
        }
        Action::Scroll(id) => Some(Effect::Scroll(id)),
        Action::Blip => Some(Effect::Blip),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::section;

    #[test]
    fn tilde_toggles_terminal() {
        let mut state = ViewState::default();
        for &action in actions_for_key("~") {
            apply(&mut state, action);
        }
        assert_eq!(state.terminal, Overlay::Open);
        for &action in actions_for_key("~") {
            apply(&mut state, action);
        }
        assert_eq!(state.terminal, Overlay::Closed);
    }

    #[test]
    fn escape_closes_and_stays_closed() {
        let mut state = ViewState {
            terminal: Overlay::Open,
            ..ViewState::default()
        };
        apply(&mut state, Action::CloseTerminal);
        assert_eq!(state.terminal, Overlay::Closed);
        apply(&mut state, Action::CloseTerminal);
        assert_eq!(state.terminal, Overlay::Closed);
    }

    #[test]
    fn close_control_dismisses_key_opened_terminal() {
        let mut state = ViewState::default();
        for &action in actions_for_key("~") {
            apply(&mut state, action);
        }
        assert_eq!(state.terminal, Overlay::Open);
        apply(&mut state, Action::CloseTerminal);
        assert_eq!(state.terminal, Overlay::Closed);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert!(actions_for_key("a").is_empty());
        assert!(actions_for_key("Enter").is_empty());
        assert_eq!(actions_for_key("Escape"), &[Action::CloseTerminal][..]);
    }

    #[test]
    fn theme_flip_is_an_involution() {
        let mut state = ViewState::default();
        apply(&mut state, Action::FlipTheme);
        assert!(!state.dark_mode);
        apply(&mut state, Action::FlipTheme);
        assert!(state.dark_mode);
    }

    #[test]
    fn sound_flip_tracks_prior_value() {
        let mut state = ViewState::default();
        for n in 1..=5 {
            apply(&mut state, Action::FlipSound);
            assert_eq!(state.sound_enabled, n % 2 == 1);
        }
    }

    #[test]
    fn view_projects_scrolls_to_projects() {
        let mut state = ViewState::default();
        let effect = apply(&mut state, Action::Scroll(section::PROJECTS));
        assert_eq!(effect, Some(Effect::Scroll("projects")));
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn blip_surfaces_without_touching_state() {
        let mut state = ViewState::default();
        let effect = apply(&mut state, Action::Blip);
        assert_eq!(effect, Some(Effect::Blip));
        assert_eq!(state, ViewState::default());
    }
}

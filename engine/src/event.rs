//! Engine events.

use winit::event::{ElementState, Event as WinitEvent, VirtualKeyCode, WindowEvent};

#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
#[non_exhaustive]
pub enum Event {
    Quit,
    WindowClose,
    Resized(u32, u32),
    Focused(bool),
    KeyInput { keycode: KeyCode, state: InputState },
    Unknown,
}

impl<'a, T> From<WinitEvent<'a, T>> for Event {
    fn from(event: WinitEvent<'a, T>) -> Self {
        match event {
            WinitEvent::LoopDestroyed => Self::Quit,
            WinitEvent::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => Self::Resized(size.width, size.height),
                WindowEvent::CloseRequested | WindowEvent::Destroyed => Self::WindowClose,
                WindowEvent::Focused(focused) => Self::Focused(focused),
                WindowEvent::KeyboardInput { input, .. } => match input.virtual_keycode {
                    Some(keycode) => Self::KeyInput {
                        keycode: keycode.into(),
                        state: input.state.into(),
                    },
                    None => Self::Unknown,
                },
                _ => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum InputState {
    Pressed,
    Released,
}

impl From<ElementState> for InputState {
    fn from(state: ElementState) -> Self {
        match state {
            ElementState::Pressed => Self::Pressed,
            ElementState::Released => Self::Released,
        }
    }
}

/// The subset of keys the demos react to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
#[non_exhaustive]
pub enum KeyCode {
    Escape,
    F1,
    Space,
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Unhandled,
}

impl From<VirtualKeyCode> for KeyCode {
    fn from(keycode: VirtualKeyCode) -> Self {
        match keycode {
            VirtualKeyCode::Escape => Self::Escape,
            VirtualKeyCode::F1 => Self::F1,
            VirtualKeyCode::Space => Self::Space,
            VirtualKeyCode::Up => Self::Up,
            VirtualKeyCode::Down => Self::Down,
            VirtualKeyCode::Left => Self::Left,
            VirtualKeyCode::Right => Self::Right,
            VirtualKeyCode::W => Self::W,
            VirtualKeyCode::A => Self::A,
            VirtualKeyCode::S => Self::S,
            VirtualKeyCode::D => Self::D,
            _ => Self::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycode_mapping() {
        assert_eq!(KeyCode::from(VirtualKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(VirtualKeyCode::F1), KeyCode::F1);
        assert_eq!(KeyCode::from(VirtualKeyCode::W), KeyCode::W);
        assert_eq!(KeyCode::from(VirtualKeyCode::F13), KeyCode::Unhandled);
    }

    #[test]
    fn loop_teardown_maps_to_quit() {
        let event: WinitEvent<'_, ()> = WinitEvent::LoopDestroyed;
        assert_eq!(Event::from(event), Event::Quit);
    }

    #[test]
    fn input_state_mapping() {
        assert_eq!(InputState::from(ElementState::Pressed), InputState::Pressed);
        assert_eq!(
            InputState::from(ElementState::Released),
            InputState::Released
        );
    }
}

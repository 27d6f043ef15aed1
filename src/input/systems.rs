use bevy::prelude::*;

use crate::core::ControllerConfig;

use super::{ControllerInput, InputBindings};

fn pressed(keys: &ButtonInput<KeyCode>, key: KeyCode) -> f32 {
    if keys.pressed(key) { 1.0 } else { 0.0 }
}

fn axis(keys: &ButtonInput<KeyCode>, positive: KeyCode, negative: KeyCode) -> f32 {
    pressed(keys, positive) - pressed(keys, negative)
}

pub fn sample_keys(keys: &ButtonInput<KeyCode>, bindings: &InputBindings) -> ControllerInput {
    ControllerInput {
        axes: Vec2::new(
            axis(keys, bindings.right, bindings.left),
            axis(keys, bindings.forward, bindings.back),
        ),
        run: keys.pressed(bindings.run),
    }
}

pub fn read_keyboard_input(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<ControllerConfig>,
    mut input: ResMut<ControllerInput>,
) {
    input.set_if_neq(sample_keys(&keys, &config.input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposing_keys_cancel() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::KeyW);

        let input = sample_keys(&keys, &bindings);
        assert_eq!(input.axes, Vec2::new(0.0, 1.0));
        assert!(!input.run);
    }

    #[test]
    fn back_and_run() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyS);
        keys.press(KeyCode::ShiftLeft);

        let input = sample_keys(&keys, &bindings);
        assert_eq!(input.axes, Vec2::new(0.0, -1.0));
        assert!(input.run);
    }
}

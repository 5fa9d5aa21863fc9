use crate::fish::{Mouth, render_fish};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MascotState {
    pub talking: bool,
    pub crying: bool,
}

/// Tears fall just below the eye, which sits at column 1 of the fish.
const TEARS: &str = " ' '";

/// One animation frame of the mascot at `tick`.
///
/// A quiet mascot keeps its mouth open. While talking the mouth opens on
/// even ticks and closes on odd ones.
pub fn render_mascot(length: usize, state: MascotState, tick: u64) -> Vec<String> {
    let mouth = if state.talking {
        Mouth::from(tick % 2 == 0)
    } else {
        Mouth::Open
    };

    let mut lines = vec![render_fish(length, mouth)];
    if state.crying {
        lines.push(TEARS.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_mouth_open() {
        let idle = MascotState::default();
        for tick in 0..4 {
            assert_eq!(render_mascot(5, idle, tick), vec!["<º))))><".to_string()]);
        }
    }

    #[test]
    fn test_talking_alternates() {
        let talking = MascotState { talking: true, crying: false };
        assert!(render_mascot(0, talking, 0)[0].starts_with('<'));
        assert!(render_mascot(0, talking, 1)[0].starts_with('='));
        assert!(render_mascot(0, talking, 2)[0].starts_with('<'));
    }

    #[test]
    fn test_crying_adds_tears() {
        let crying = MascotState { talking: false, crying: true };
        let frame = render_mascot(30, crying, 7);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[1], TEARS);
    }
}

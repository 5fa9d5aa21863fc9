/// Body segments every fish has regardless of message length.
pub const BASE_SEGMENTS: usize = 4;
/// Characters of message per extra body segment.
pub const CHARS_PER_SEGMENT: usize = 10;

const HEAD_OPEN: &str = "<º";
const HEAD_CLOSED: &str = "=º";
const SEGMENT: char = ')';
const TAIL: &str = "><";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mouth {
    Open,
    Closed,
}

impl From<bool> for Mouth {
    fn from(open: bool) -> Self {
        if open { Mouth::Open } else { Mouth::Closed }
    }
}

pub fn segment_count(length: usize) -> usize {
    BASE_SEGMENTS + length / CHARS_PER_SEGMENT
}

/// Render a one-line fish whose body grows with `length`.
///
/// `render_fish(10, Mouth::Open)` is `<º)))))><`.
pub fn render_fish(length: usize, mouth: Mouth) -> String {
    let head = match mouth {
        Mouth::Open => HEAD_OPEN,
        Mouth::Closed => HEAD_CLOSED,
    };
    let segments = segment_count(length);

    let mut fish = String::with_capacity(head.len() + segments + TAIL.len());
    fish.push_str(head);
    fish.extend(std::iter::repeat_n(SEGMENT, segments));
    fish.push_str(TAIL);
    fish
}

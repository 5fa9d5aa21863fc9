use sardine_types::Industry;

/// Narrowest interior a can is drawn with.
pub const MIN_INNER_WIDTH: usize = 32;
/// Space kept around the fish inside the can.
pub const FISH_PADDING: usize = 8;

const GENERIC_TEXTURE: &str = "~";

fn lid_texture(industry: Option<Industry>) -> &'static str {
    match industry {
        Some(Industry::Tech) => "01",
        Some(Industry::Finance) => "$.",
        Some(Industry::Creative) => "~*",
        Some(Industry::Service) => "+-",
        Some(Industry::Student) => "=:",
        Some(Industry::Unemployed) => ". ",
        Some(Industry::Other) => "#",
        None => GENERIC_TEXTURE,
    }
}

/// Interior width for a fish of `fish_width` chars. Always even.
pub fn inner_width(fish_width: usize) -> usize {
    let width = MIN_INNER_WIDTH.max(fish_width + FISH_PADDING);
    width + width % 2
}

fn repeat(s: &str, n: usize) -> String {
    s.repeat(n)
}

fn wall(inner: &str) -> String {
    format!("| {} |", inner)
}

/// Draw a can around `fish`. The lid texture comes from `industry`; empty
/// or unknown labels get the generic texture.
///
/// Every returned line has the same `char` count, `inner_width + 4`.
pub fn render_can(fish: &str, industry: &str) -> Vec<String> {
    let fish_width = fish.chars().count();
    let width = inner_width(fish_width);

    let texture: String = lid_texture(Industry::from_label(industry))
        .chars()
        .cycle()
        .take(width)
        .collect();

    let left = (width - fish_width) / 2;
    let right = width - fish_width - left;

    vec![
        format!(" .{}. ", repeat("─", width)),
        format!(" /{}\\ ", texture),
        wall(&format!("{}_______{}", repeat(" ", 5), repeat(" ", width - 12))),
        wall(&format!("{}(  PULL  ){}", repeat(" ", 4), repeat(" ", width - 14))),
        wall(&repeat(" ", width)),
        wall(&format!("{}{}{}", repeat(" ", left), fish, repeat(" ", right))),
        wall(&repeat(" ", width)),
        format!("|_{}_|", repeat("_", width)),
        format!(" \\{}/ ", repeat("_", width)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fish::{Mouth, render_fish};

    fn widths(lines: &[String]) -> Vec<usize> {
        lines.iter().map(|l| l.chars().count()).collect()
    }

    #[test]
    fn test_lines_are_aligned() {
        for len in [0, 9, 120, 400, 1000] {
            let fish = render_fish(len, Mouth::Open);
            let lines = render_can(&fish, "Tech");
            let expected = inner_width(fish.chars().count()) + 4;
            assert_eq!(lines.len(), 9);
            assert!(widths(&lines).iter().all(|w| *w == expected), "len {}", len);
        }
    }

    #[test]
    fn test_inner_width_is_even_and_bounded() {
        assert_eq!(inner_width(8), 32);
        assert_eq!(inner_width(24), 32);
        assert_eq!(inner_width(25), 34);
        assert_eq!(inner_width(26), 34);
        for w in 0..200 {
            let inner = inner_width(w);
            assert_eq!(inner % 2, 0);
            assert!(inner >= MIN_INNER_WIDTH);
            assert!(inner >= w + FISH_PADDING);
        }
    }

    #[test]
    fn test_fish_is_centered() {
        // A 9-char fish in a 32-wide interior: 23 spare, 11 left, 12 right.
        let fish = render_fish(10, Mouth::Open);
        let lines = render_can(&fish, "");
        let expected = format!("| {}{}{} |", " ".repeat(11), fish, " ".repeat(12));
        assert_eq!(lines[5], expected);
    }

    #[test]
    fn test_centering_formula() {
        for len in [0, 50, 333] {
            let fish = render_fish(len, Mouth::Closed);
            let fish_width = fish.chars().count();
            let width = inner_width(fish_width);
            let line = &render_can(&fish, "Finance")[5];
            let pad: usize = line[2..].chars().take_while(|c| *c == ' ').count();
            assert_eq!(pad, (width - fish_width) / 2);
        }
    }

    #[test]
    fn test_lid_texture_by_industry() {
        let fish = render_fish(0, Mouth::Open);
        assert!(render_can(&fish, "Tech")[1].starts_with(" /0101"));
        assert!(render_can(&fish, "Finance")[1].starts_with(" /$.$."));
        assert_eq!(render_can(&fish, "")[1], render_can(&fish, "Plumbing")[1]);
        assert!(render_can(&fish, "")[1].starts_with(" /~~~~"));
    }

    #[test]
    fn test_deterministic() {
        let fish = render_fish(42, Mouth::Open);
        assert_eq!(render_can(&fish, "Hug"), render_can(&fish, "Hug"));
    }
}

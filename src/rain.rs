use rand::Rng;

pub const DROP_COUNT: usize = 30;

pub const GLYPHS: [char; 12] = ['0', '1', '{', '}', '<', '>', '/', '*', '+', '-', '=', ';'];

/// One falling character in the background. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub id: usize,
    pub horizontal_percent: f64,
    pub glyph: char,
    pub delay: f64,
    pub duration: f64,
}

impl RainDrop {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; animation-delay: {:.3}s; animation-duration: {:.3}s",
            self.horizontal_percent, self.delay, self.duration
        )
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> Vec<RainDrop> {
    (0..DROP_COUNT)
        .map(|id| RainDrop {
            id,
            horizontal_percent: rng.gen_range(0.0..100.0),
            glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(3.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn drops_respect_ranges() {
        for seed in 0..50 {
            let drops = generate(&mut StdRng::seed_from_u64(seed));
            assert_eq!(drops.len(), DROP_COUNT);
            for drop in &drops {
                assert!((0.0..100.0).contains(&drop.horizontal_percent));
                assert!((0.0..5.0).contains(&drop.delay));
                assert!((3.0..5.0).contains(&drop.duration));
                assert!(GLYPHS.contains(&drop.glyph));
            }
        }
    }

    #[test]
    fn ids_run_in_order_and_are_unique() {
        let drops = generate(&mut StdRng::seed_from_u64(7));
        let ids = drops.iter().map(|d| d.id).collect::<Vec<_>>();
        assert_eq!(ids, (0..DROP_COUNT).collect::<Vec<_>>());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), DROP_COUNT);
    }

    #[test]
    fn same_seed_same_rain() {
        let a = generate(&mut StdRng::seed_from_u64(42));
        let b = generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn style_positions_the_drop() {
        let drop = RainDrop {
            id: 0,
            horizontal_percent: 12.5,
            glyph: '{',
            delay: 1.0,
            duration: 3.25,
        };
        assert_eq!(
            drop.style(),
            "left: 12.500%; animation-delay: 1.000s; animation-duration: 3.250s"
        );
    }
}

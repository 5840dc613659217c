//! Secret code generation

use crate::core::{Code, Palette};
use log::debug;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Generate a secret of `length` colors drawn uniformly, with replacement, from `palette`
///
/// # Examples
/// ```
/// use mastermind::core::Palette;
/// use mastermind::game::generate_secret;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let palette = Palette::base(6).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let secret = generate_secret(4, &palette, &mut rng);
/// assert_eq!(secret.len(), 4);
/// assert!(secret.colors().iter().all(|&c| palette.contains(c)));
/// ```
pub fn generate_secret<R: Rng>(length: usize, palette: &Palette, rng: &mut R) -> Code {
    let colors = palette.colors();
    // Palettes are never empty, so every draw yields a color
    let secret: Code = (0..length)
        .filter_map(|_| colors.choose(rng).copied())
        .collect::<Vec<_>>()
        .into();

    debug!("Generated secret of length {length} from {} colors", colors.len());
    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, Difficulty};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_fits_every_tier() {
        let mut rng = StdRng::seed_from_u64(42);

        for difficulty in Difficulty::ALL {
            let palette = difficulty.palette().unwrap();
            for _ in 0..100 {
                let secret = generate_secret(difficulty.code_length(), &palette, &mut rng);
                assert_eq!(secret.len(), difficulty.code_length());
                assert!(secret.colors().iter().all(|&c| palette.contains(c)));
            }
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let palette = Palette::base(8).unwrap();
        let first = generate_secret(6, &palette, &mut StdRng::seed_from_u64(9));
        let second = generate_secret(6, &palette, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn single_color_palette_repeats() {
        let red = Color::new(0);
        let palette = Palette::new(vec![red]).unwrap();
        let secret = generate_secret(5, &palette, &mut StdRng::seed_from_u64(1));
        assert_eq!(secret.colors(), &[red; 5]);
    }

    #[test]
    fn draws_with_replacement_over_whole_palette() {
        let palette = Palette::base(6).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        let mut repeated = false;

        for _ in 0..200 {
            let secret = generate_secret(4, &palette, &mut rng);
            let colors = secret.colors();
            seen.extend(colors.iter().copied());
            repeated |= (1..colors.len()).any(|i| colors[..i].contains(&colors[i]));
        }

        assert_eq!(seen.len(), palette.len());
        assert!(repeated, "800 draws from 6 colors never repeated within a code");
    }

    #[test]
    fn fills_every_position() {
        let palette = Palette::base(10).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for length in [1, 4, 6, 8, 32] {
            assert_eq!(generate_secret(length, &palette, &mut rng).len(), length);
        }
    }

    #[test]
    fn zero_length_secret_is_empty() {
        let palette = Palette::base(6).unwrap();
        assert!(generate_secret(0, &palette, &mut StdRng::seed_from_u64(0)).is_empty());
    }
}

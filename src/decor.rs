use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seed for the hero background. Fixed so the server render and the hydrated
/// client draw the same shapes.
pub const HERO_SEED: u64 = 0x5eed_cafe;
pub const HERO_BLOB_COUNT: usize = 20;

/// A soft circle in the hero background.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub width: f64,
    pub height: f64,
    pub top_pct: f64,
    pub left_pct: f64,
    pub opacity: f64,
}

impl Blob {
    pub fn style(&self) -> String {
        format!(
            "width: {:.0}px; height: {:.0}px; top: {:.2}%; left: {:.2}%; opacity: {:.3}",
            self.width, self.height, self.top_pct, self.left_pct, self.opacity
        )
    }
}

pub fn blobs(rng: &mut impl Rng, count: usize) -> Vec<Blob> {
    (0..count)
        .map(|_| Blob {
            width: rng.random_range(50.0..350.0),
            height: rng.random_range(50.0..350.0),
            top_pct: rng.random_range(0.0..100.0),
            left_pct: rng.random_range(0.0..100.0),
            opacity: rng.random_range(0.0..0.5),
        })
        .collect()
}

pub fn hero_blobs() -> Vec<Blob> {
    blobs(&mut StdRng::seed_from_u64(HERO_SEED), HERO_BLOB_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blobs_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let blobs = blobs(&mut rng, 200);
        assert_eq!(blobs.len(), 200);
        for b in &blobs {
            assert!((50.0..350.0).contains(&b.width));
            assert!((50.0..350.0).contains(&b.height));
            assert!((0.0..100.0).contains(&b.top_pct));
            assert!((0.0..100.0).contains(&b.left_pct));
            assert!((0.0..0.5).contains(&b.opacity));
        }
    }

    #[test]
    fn test_same_seed_same_blobs() {
        assert_eq!(hero_blobs(), hero_blobs());
        assert_eq!(hero_blobs().len(), HERO_BLOB_COUNT);
        let a = blobs(&mut StdRng::seed_from_u64(1), 5);
        let b = blobs(&mut StdRng::seed_from_u64(2), 5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_style() {
        let blob = Blob {
            width: 120.4,
            height: 80.6,
            top_pct: 12.3456,
            left_pct: 50.0,
            opacity: 0.25,
        };
        assert_eq!(
            blob.style(),
            "width: 120px; height: 81px; top: 12.35%; left: 50.00%; opacity: 0.250"
        );
    }
}

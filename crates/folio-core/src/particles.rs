//! Decorative floating particles for the hero background.

use rand::Rng;

/// Keyframes referenced by every particle's `animation`.
pub const FLOAT_KEYFRAMES: &str = r#"
@keyframes float {
  0%, 100% { transform: translateY(0) translateX(0); }
  25% { transform: translateY(-20px) translateX(10px); }
  50% { transform: translateY(-10px) translateX(-10px); }
  75% { transform: translateY(-30px) translateX(5px); }
}
"#;

/// One particle; sizes in px, positions in percent, times in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(2.0..7.0),
            left: rng.random_range(0.0..100.0),
            top: rng.random_range(0.0..100.0),
            duration: rng.random_range(5.0..15.0),
            delay: rng.random_range(0.0..5.0),
        }
    }

    /// Inline style positioning and animating the particle.
    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {size:.2}px; height: {size:.2}px; \
             background-color: rgba(255, 255, 255, 0.3); border-radius: 50%; \
             left: {left:.2}%; top: {top:.2}%; \
             animation: float {duration:.2}s ease-in-out infinite; animation-delay: {delay:.2}s;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// Generate `count` particles.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(30, &mut rng);
        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert!((2.0..7.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((5.0..15.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(5, &mut StdRng::seed_from_u64(1));
        let b = generate(5, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_is_square() {
        let p = Particle {
            size: 3.5,
            left: 10.0,
            top: 20.0,
            duration: 6.0,
            delay: 1.0,
        };
        let style = p.style();
        assert!(style.contains("width: 3.50px; height: 3.50px;"));
        assert!(style.contains("animation: float 6.00s ease-in-out infinite;"));
    }
}

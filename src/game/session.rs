//! One playable flight: a terrain profile and the craft descending
//! toward it.

use rand::Rng;

use super::logic;
use super::terrain::Terrain;
use super::types::{InputState, InvalidPlayfield, Lander, Playfield};

/// Owns everything a single flight needs and wires the pieces together.
/// The caller supplies time and input; the session never looks at a
/// clock or a keyboard itself.
#[derive(Debug, Clone)]
pub struct Session {
    field: Playfield,
    terrain: Terrain,
    lander: Lander,
}

impl Session {
    /// Start a flight over freshly generated terrain.
    ///
    /// Fails fast on dimensions no flight can happen in.
    pub fn new<R: Rng>(width: f64, height: f64, rng: &mut R) -> Result<Self, InvalidPlayfield> {
        let field = Playfield::new(width, height)?;
        Ok(Self {
            field,
            terrain: Terrain::generate(field, rng),
            lander: Lander::new(field),
        })
    }

    /// Advance the flight by `dt` seconds. Does nothing once the craft
    /// is down.
    pub fn step(&mut self, dt: f64, input: InputState) {
        logic::step(&mut self.lander, dt, input, self.field, &self.terrain);
    }

    /// Throw the flight away and start over: new terrain, new craft.
    /// Nothing carries over from the old attempt.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.terrain = Terrain::generate(self.field, rng);
        self.lander = Lander::new(self.field);
    }

    pub fn field(&self) -> Playfield {
        self.field
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn lander(&self) -> &Lander {
        &self.lander
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{START_ROTATION_DEG, START_X, START_Y};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_new_session_rejects_degenerate_fields() {
        let mut rng = create_test_rng();
        assert!(Session::new(0.0, 400.0, &mut rng).is_err());
        assert!(Session::new(800.0, 0.0, &mut rng).is_err());
        assert!(Session::new(-800.0, -400.0, &mut rng).is_err());
        assert!(Session::new(f64::NAN, 400.0, &mut rng).is_err());
        // Must fail before terrain generation, which could never walk
        // to the far edge of an infinite field.
        assert!(Session::new(f64::INFINITY, 400.0, &mut rng).is_err());
    }

    #[test]
    fn test_new_session_spawns_a_fresh_flight() {
        let mut rng = create_test_rng();
        let session = Session::new(800.0, 400.0, &mut rng).unwrap();

        let lander = session.lander();
        assert!((lander.x - START_X).abs() < f64::EPSILON);
        assert!((lander.y - START_Y).abs() < f64::EPSILON);
        assert!((lander.rotation - START_ROTATION_DEG).abs() < f64::EPSILON);
        assert!(!lander.is_down());

        let points = session.terrain().points();
        assert!(points.len() >= 2);
        assert!((points[points.len() - 1].x - 800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_advances_the_flight() {
        let mut rng = create_test_rng();
        let mut session = Session::new(800.0, 400.0, &mut rng).unwrap();

        let y_speed_before = session.lander().y_speed;
        session.step(0.016, InputState::default());
        assert!(session.lander().y_speed > y_speed_before);
    }

    #[test]
    fn test_reset_starts_over_from_the_spawn() {
        let mut rng = create_test_rng();
        let mut session = Session::new(800.0, 400.0, &mut rng).unwrap();

        for _ in 0..30 {
            session.step(0.016, InputState::default());
        }
        assert!((session.lander().y - START_Y).abs() > 1.0);

        session.reset(&mut rng);

        let lander = session.lander();
        assert!((lander.x - START_X).abs() < f64::EPSILON);
        assert!((lander.y - START_Y).abs() < f64::EPSILON);
        assert!(!lander.is_down());
    }

    #[test]
    fn test_reset_recovers_a_downed_flight() {
        let mut rng = create_test_rng();
        let mut session = Session::new(800.0, 400.0, &mut rng).unwrap();

        // The spawn velocity is far beyond the survivable touchdown
        // speed, so an unpiloted flight always ends in a crash.
        let mut steps = 0;
        while !session.lander().is_down() {
            session.step(0.016, InputState::default());
            steps += 1;
            assert!(steps < 5000, "flight never came down");
        }
        assert!(session.lander().crashed);

        session.reset(&mut rng);
        assert!(!session.lander().is_down());
        assert!(!session.lander().crashed);
    }
}

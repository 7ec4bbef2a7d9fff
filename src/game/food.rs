use crate::config::*;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

impl Food {
    pub fn new(x: f64, y: f64) -> Self {
        Food {
            x,
            y,
            radius: FOOD_RADIUS,
            color: String::new(),
        }
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Food::new(rng.gen_range(0.0..MAP_SIZE), rng.gen_range(0.0..MAP_SIZE))
    }
}

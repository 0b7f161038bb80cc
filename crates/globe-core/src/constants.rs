use std::time::Duration;

// Shared tuning constants used by both web and native frontends.

// Globe layout
pub const GLOBE_RADIUS: f64 = 10.0; // scene-space radius of the earth mesh
pub const EARTH_RADIUS_KM: f64 = 6371.0; // mean earth radius for haversine

// Scoring
pub const EXACT_MATCH_POINTS: i32 = 100; // typed or clicked the right country
pub const WRONG_CLICK_PENALTY: i32 = -10;
pub const TIME_EXPIRED_PENALTY: i32 = -5;
pub const FULL_CREDIT_RADIUS_KM: f64 = 50.0; // precision clicks closer than this score 100
pub const SCORE_DECAY_KM: f64 = 3000.0; // e-folding distance of the precision score

// Round pacing
pub const ROUND_SECONDS: u32 = 60;
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
pub const COUNTDOWN_WARNING_SECONDS: u32 = 10; // frontends start ticking audibly below this

// Decoy shuffle, typing mode: fixed window
pub const SHUFFLE_WINDOW: Duration = Duration::from_millis(1500);
pub const SHUFFLE_STEP: Duration = Duration::from_millis(60);

// Decoy shuffle, click modes: slowing interval
pub const SHUFFLE_START_INTERVAL: Duration = Duration::from_millis(50);
pub const SHUFFLE_GROWTH: f64 = 1.15; // interval multiplier per tick
pub const SHUFFLE_CEILING: Duration = Duration::from_millis(800);

// Catalog
pub const MIN_REGION_SIZE: usize = 3; // smaller filtered sets fall back to the whole world

// Frontends
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";
pub const HIGH_SCORE_KEY: &str = "earthGameHighScore";

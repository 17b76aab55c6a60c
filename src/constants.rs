/// Visual tuning constants for the cursor trail, glyph field, and parallax.
///
/// These constants express intended behavior (spawn rates, decay factors,
/// layout bounds) and keep magic numbers out of the code.
// Cursor trail particle pool
pub const TRAIL_SPAWN_PER_MOVE: usize = 5;
pub const TRAIL_PARTICLE_CAP: usize = 400;

// Uniform speed draw; a constant downward pull is added after the draw
pub const TRAIL_SPEED_MIN: f32 = 0.6;
pub const TRAIL_SPEED_SPAN: f32 = 1.4;
pub const TRAIL_GRAVITY_BIAS: f32 = 0.4;

// Per-frame integration (one step per animation frame, no dt)
pub const TRAIL_DAMPING: f32 = 0.98;
pub const TRAIL_LIFE_DECAY: f32 = 0.02; // ~50 frames from spawn to expiry

// Particle appearance
pub const TRAIL_SIZE_MIN: f32 = 2.0;
pub const TRAIL_SIZE_SPAN: f32 = 3.0;
pub const TRAIL_HUE_BASE: f32 = 190.0; // cyan-blue band
pub const TRAIL_HUE_SPAN: f32 = 40.0;
pub const TRAIL_ALPHA_COEFF: f32 = 0.14;

// Upper bound on the device pixel ratio used for the canvas backing store
pub const DPR_CAP: f64 = 2.0;

// Glyph field layout
pub const GLYPH_COLS: usize = 8;
pub const GLYPH_ROWS: usize = 6;
pub const GLYPH_DENSITY: usize = 1;
pub const GLYPH_JITTER_FRAC: f32 = 0.3; // fraction of cell extent, each side

// Per-token randomized attributes, fixed at construction
pub const GLYPH_SCALE_BASE: f32 = 0.7;
pub const GLYPH_SCALE_SPAN: f32 = 1.3;
pub const GLYPH_DUR_BASE_SEC: f32 = 12.0;
pub const GLYPH_DUR_SPAN_SEC: f32 = 14.0;
pub const GLYPH_DELAY_MAX_SEC: f32 = 8.0;
pub const GLYPH_DRIFT_SPAN_PX: f32 = 30.0; // drift in [-span/2, span/2) per axis

// Float animation opacity band (mirrored in the stylesheet keyframes)
pub const GLYPH_OPACITY_MIN: f32 = 0.10;
pub const GLYPH_OPACITY_MAX: f32 = 0.32;

// Kind pick thresholds, cumulative over a uniform [0, 1) draw
pub const GLYPH_PICK_ORBIT: f32 = 0.25;
pub const GLYPH_PICK_CHEVRONS: f32 = 0.50;
pub const GLYPH_PICK_BRACES: f32 = 0.65;

// Parallax deflection applied per glyph token (px at full offset)
pub const GLYPH_PARALLAX_X_PX: f32 = 8.0;
pub const GLYPH_PARALLAX_Y_PX: f32 = 6.0;

// Form relay endpoint; posts are multipart form data, responses JSON
pub const CONTACT_ENDPOINT: &str = "https://formrelay.io/f/xknqazvw";

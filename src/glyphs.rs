use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// Code-like snippets shown by text tokens.
pub const SNIPPETS: &[&str] = &[
    "fn main()",
    "async fn",
    "=> {}",
    "let mut",
    "impl Trait",
    "&mut self",
    "Box<dyn Fn>",
    "Ok(())",
    "Some(x)",
    ".await?",
    "match arm",
    "#[derive]",
    "|x| x + 1",
    "::<u32>",
    "Vec::new()",
    "if let",
    "0..=n",
    "mod tests",
    "pub use",
    "'static",
];

/// Icon variants, or a text token drawn from [`SNIPPETS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GlyphKind {
    Orbit,
    Chevrons,
    Braces,
    Snippet(&'static str),
}

/// One floating token. Every attribute is fixed at construction; nothing is
/// regenerated after mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphToken {
    pub kind: GlyphKind,
    pub left_pct: f32,
    pub top_pct: f32,
    pub scale: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub drift: Vec2,
}

/// Weighted kind pick over cumulative thresholds; icons dominate text.
pub fn pick_kind(rng: &mut impl Rng) -> GlyphKind {
    let roll = rng.gen::<f32>();
    if roll < GLYPH_PICK_ORBIT {
        GlyphKind::Orbit
    } else if roll < GLYPH_PICK_CHEVRONS {
        GlyphKind::Chevrons
    } else if roll < GLYPH_PICK_BRACES {
        GlyphKind::Braces
    } else {
        let idx = rng.gen_range(0..SNIPPETS.len());
        GlyphKind::Snippet(SNIPPETS[idx])
    }
}

/// Lay out `rows * cols * density` tokens on a jittered grid in percent
/// coordinates. Row-major, so a given seed always yields the same field.
pub fn build_field(cols: usize, rows: usize, density: usize, rng: &mut impl Rng) -> Vec<GlyphToken> {
    let cell_w = 100.0 / cols as f32;
    let cell_h = 100.0 / rows as f32;
    let mut tokens = Vec::with_capacity(cols * rows * density);
    for row in 0..rows {
        for col in 0..cols {
            for _ in 0..density {
                let jitter_x = (rng.gen::<f32>() - 0.5) * 2.0 * GLYPH_JITTER_FRAC * cell_w;
                let jitter_y = (rng.gen::<f32>() - 0.5) * 2.0 * GLYPH_JITTER_FRAC * cell_h;
                let drift = Vec2::new(
                    (rng.gen::<f32>() - 0.5) * GLYPH_DRIFT_SPAN_PX,
                    (rng.gen::<f32>() - 0.5) * GLYPH_DRIFT_SPAN_PX,
                );
                tokens.push(GlyphToken {
                    kind: pick_kind(rng),
                    left_pct: (col as f32 + 0.5) * cell_w + jitter_x,
                    top_pct: (row as f32 + 0.5) * cell_h + jitter_y,
                    scale: GLYPH_SCALE_BASE + rng.gen::<f32>() * GLYPH_SCALE_SPAN,
                    duration_sec: GLYPH_DUR_BASE_SEC + rng.gen::<f32>() * GLYPH_DUR_SPAN_SEC,
                    delay_sec: rng.gen::<f32>() * GLYPH_DELAY_MAX_SEC,
                    drift,
                });
            }
        }
    }
    tokens
}

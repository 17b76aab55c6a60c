use crate::constants::*;
use crate::glyphs::{GlyphKind, GlyphToken};
use web_sys as web;

const ORBIT_SVG: &str = "<svg viewBox=\"0 0 16 16\" width=\"1em\" height=\"1em\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"1.2\"><circle cx=\"8\" cy=\"8\" r=\"2.2\"/><ellipse cx=\"8\" cy=\"8\" rx=\"7\" ry=\"3\"/></svg>";
const CHEVRONS_SVG: &str = "<svg viewBox=\"0 0 16 16\" width=\"1em\" height=\"1em\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"1.5\" stroke-linecap=\"round\" stroke-linejoin=\"round\"><path d=\"M6 4 2 8l4 4\"/><path d=\"m10 4 4 4-4 4\"/></svg>";
const BRACES_SVG: &str = "<svg viewBox=\"0 0 16 16\" width=\"1em\" height=\"1em\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"1.2\" stroke-linecap=\"round\"><path d=\"M5.5 2C4 2 4 3 4 4v2c0 1-1 2-2 2 1 0 2 1 2 2v2c0 1 0 2 1.5 2\"/><path d=\"M10.5 2C12 2 12 3 12 4v2c0 1 1 2 2 2-1 0-2 1-2 2v2c0 1 0 2-1.5 2\"/></svg>";

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn token_html(token: &GlyphToken, reduced: bool) -> String {
    let inner = match token.kind {
        GlyphKind::Orbit => ORBIT_SVG.to_string(),
        GlyphKind::Chevrons => CHEVRONS_SVG.to_string(),
        GlyphKind::Braces => BRACES_SVG.to_string(),
        GlyphKind::Snippet(text) => escape_text(text),
    };
    // Keyframe transforms take over while the float animation runs; the
    // inline transform keeps parallax alive under animation delays.
    let parallax = if reduced {
        String::new()
    } else {
        format!(
            "transform:translate(calc(var(--mx, 0) * {}px), calc(var(--my, 0) * {}px));",
            GLYPH_PARALLAX_X_PX, GLYPH_PARALLAX_Y_PX
        )
    };
    format!(
        "<span class=\"glyph\" style=\"left:{:.2}%;top:{:.2}%;--s:{:.2};--dx:{:.1}px;--dy:{:.1}px;animation:glyph-float {:.2}s ease-in-out {:.2}s infinite;{}\">{}</span>",
        token.left_pct,
        token.top_pct,
        token.scale,
        token.drift.x,
        token.drift.y,
        token.duration_sec,
        token.delay_sec,
        parallax,
        inner
    )
}

/// Render the whole field into `#glyph-field` in one pass. Attributes were
/// fixed at construction, so this runs once per mount.
pub fn mount(document: &web::Document, tokens: &[GlyphToken], reduced: bool) {
    if let Some(container) = document.get_element_by_id("glyph-field") {
        let mut html = String::with_capacity(tokens.len() * 200);
        for token in tokens {
            html.push_str(&token_html(token, reduced));
        }
        container.set_inner_html(&html);
        log::info!("[field] {} glyph tokens mounted", tokens.len());
    }
}

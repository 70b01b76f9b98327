//! # Logo Placeholders
//!
//! Tokens ship without artwork, so each symbol gets a generated badge: a
//! disc in the brand color with radial shading and a light rim. Badges are
//! rasterized once per symbol and cached as textures; the symbol initials
//! are painted on top at draw time.

use egui::{Color32, ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use std::collections::HashMap;

/// Edge length of a rasterized badge in pixels
pub const BADGE_PIXELS: usize = 96;

/// Share of the radius covered by the rim
const RIM_WIDTH: f32 = 0.08;
/// Brightness at the highlight and at the far edge
const SHADE_HIGH: f32 = 1.18;
const SHADE_LOW: f32 = 0.72;

/// Rasterize a circular badge of `size` x `size` pixels in `color`
pub fn rasterize_badge(color: [u8; 3], size: usize) -> ColorImage {
    let mut pixels = vec![0u8; size * size * 4];

    let radius = size as f32 / 2.0;
    let center = radius;
    // Light falls from the top-left
    let highlight = (center - radius * 0.35, center - radius * 0.35);

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dist = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

            // One pixel of anti-aliasing on the outline
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage <= 0.0 {
                continue;
            }

            let light = ((px - highlight.0).powi(2) + (py - highlight.1).powi(2)).sqrt() / (radius * 2.0);
            let shade = SHADE_HIGH - (SHADE_HIGH - SHADE_LOW) * light.clamp(0.0, 1.0);

            let rim = dist / radius > 1.0 - RIM_WIDTH;
            let idx = (y * size + x) * 4;
            for channel in 0..3 {
                let mut value = color[channel] as f32 * shade;
                if rim {
                    value += (255.0 - value) * 0.35;
                }
                pixels[idx + channel] = value.clamp(0.0, 255.0) as u8;
            }
            pixels[idx + 3] = (coverage * 255.0) as u8;
        }
    }

    ColorImage::from_rgba_unmultiplied([size, size], &pixels)
}

/// Text color that stays readable on a badge of `color`
pub fn initials_color(color: [u8; 3]) -> Color32 {
    let luminance = 0.299 * color[0] as f32 + 0.587 * color[1] as f32 + 0.114 * color[2] as f32;
    if luminance > 170.0 {
        Color32::from_rgb(20, 20, 30)
    } else {
        Color32::WHITE
    }
}

/// Badge textures keyed by symbol
#[derive(Default)]
pub struct LogoCache {
    textures: HashMap<String, TextureHandle>,
}

impl LogoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for `symbol`, rasterizing it on first use
    pub fn texture(&mut self, ctx: &Context, symbol: &str, color: [u8; 3]) -> TextureId {
        if let Some(handle) = self.textures.get(symbol) {
            return handle.id();
        }

        let handle = ctx.load_texture(
            format!("logo-{}", symbol),
            rasterize_badge(color, BADGE_PIXELS),
            TextureOptions::LINEAR,
        );
        tracing::debug!(symbol, "Rasterized logo placeholder");

        let id = handle.id();
        self.textures.insert(symbol.to_string(), handle);
        id
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

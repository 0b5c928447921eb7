use rand::Rng;

use super::Color;

/// A color with each channel drawn uniformly from the full range.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color {
        r: rng.gen::<u8>(),
        g: rng.gen::<u8>(),
        b: rng.gen::<u8>(),
    }
}

/// Nudge each channel of `color` by a random offset in `[-magnitude / 2, magnitude / 2)`,
/// rounded down and clamped to the valid channel range.
pub fn perturb<R: Rng + ?Sized>(color: &Color, magnitude: f64, rng: &mut R) -> Color {
    let mut channels = color.channels();
    for channel in channels.iter_mut() {
        let offset = (rng.gen::<f64>() * magnitude - magnitude / 2.0).floor() as i32;
        *channel = (*channel as i32 + offset).clamp(0, 255) as u8;
    }
    Color::from_channels(channels)
}

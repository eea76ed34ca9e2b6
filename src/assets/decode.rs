use std::io::Cursor;

use anyhow::Context;
use image::{AnimationDecoder, RgbaImage, imageops::FilterType};

use crate::foundation::error::{PaintError, PaintResult};
use crate::raster::buffer::PixelBuffer;
use crate::texture::descriptor::TextureDescriptor;

/// Decoded animation: one target per frame plus its display delay.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationFrames {
    /// Frame targets, all the same size.
    pub frames: Vec<PixelBuffer>,
    /// Per-frame delay in milliseconds.
    pub delays_ms: Vec<u32>,
}

/// Decode a target image, flatten it over white and resize its shorter side to
/// `computation_size`.
pub fn decode_target(bytes: &[u8], computation_size: u32) -> PaintResult<PixelBuffer> {
    let img = image::load_from_memory(bytes)
        .context("decode target image from memory")?
        .to_rgba8();
    prepare_target(img, computation_size)
}

/// Decode a stroke texture.
pub fn decode_texture(bytes: &[u8]) -> PaintResult<TextureDescriptor> {
    let img = image::load_from_memory(bytes)
        .context("decode texture image from memory")?
        .to_rgba8();
    let (w, h) = img.dimensions();
    TextureDescriptor::from_rgba8(w, h, img.as_raw())
}

/// Decode every frame of a GIF as a painting target.
pub fn decode_animation_frames(bytes: &[u8], computation_size: u32) -> PaintResult<AnimationFrames> {
    let decoder = image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).context("open gif")?;
    let raw = decoder
        .into_frames()
        .collect_frames()
        .context("decode gif frames")?;
    if raw.is_empty() {
        return Err(PaintError::config("animation has no frames"));
    }

    let mut frames = Vec::with_capacity(raw.len());
    let mut delays_ms = Vec::with_capacity(raw.len());
    for frame in raw {
        let (num, den) = frame.delay().numer_denom_ms();
        delays_ms.push(num / den.max(1));
        frames.push(prepare_target(frame.into_buffer(), computation_size)?);
    }
    Ok(AnimationFrames { frames, delays_ms })
}

/// Encode a buffer as PNG.
pub fn encode_png(buffer: &PixelBuffer) -> PaintResult<Vec<u8>> {
    let img = to_image(buffer)?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

/// Encode frames as a looping GIF. `delays_ms` pairs with `frames` and defaults to 100 ms.
pub fn encode_gif(frames: &[PixelBuffer], delays_ms: &[u32]) -> PaintResult<Vec<u8>> {
    use image::codecs::gif::{GifEncoder, Repeat};

    let mut out = Vec::new();
    {
        let mut enc = GifEncoder::new(&mut out);
        enc.set_repeat(Repeat::Infinite).context("set gif repeat")?;
        for (i, buffer) in frames.iter().enumerate() {
            let delay = delays_ms.get(i).copied().unwrap_or(100);
            let frame = image::Frame::from_parts(
                to_image(buffer)?,
                0,
                0,
                image::Delay::from_numer_denom_ms(delay, 1),
            );
            enc.encode_frame(frame)
                .with_context(|| format!("encode gif frame {i}"))?;
        }
    }
    Ok(out)
}

fn prepare_target(mut img: RgbaImage, computation_size: u32) -> PaintResult<PixelBuffer> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PaintError::config("target image is empty"));
    }
    flatten_over_white(&mut img);

    let scale = f64::from(computation_size) / f64::from(w.min(h));
    let nw = ((f64::from(w) * scale).round() as u32).max(1);
    let nh = ((f64::from(h) * scale).round() as u32).max(1);
    let resized = if (nw, nh) == (w, h) {
        img
    } else {
        image::imageops::resize(&img, nw, nh, FilterType::Triangle)
    };
    PixelBuffer::from_rgba8(nw, nh, resized.as_raw())
}

fn flatten_over_white(img: &mut RgbaImage) {
    for px in img.pixels_mut() {
        let a = u16::from(px[3]);
        for c in 0..3 {
            let v = u16::from(px[c]) * a + 255 * (255 - a);
            px[c] = ((v + 127) / 255) as u8;
        }
        px[3] = 255;
    }
}

fn to_image(buffer: &PixelBuffer) -> PaintResult<RgbaImage> {
    RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba8())
        .ok_or_else(|| PaintError::evaluation("pixel buffer does not fit an rgba8 image"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

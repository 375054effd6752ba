/* Copyright 2020 @TwoCookingMice */

use exr::error::{Error, UnitResult};
use exr::prelude::*;

use crate::math::bitmap::Bitmap;

const LUMINANCE_CHANNEL: &str = "Y";

/// Write a single channel image as a one layer EXR with a `Y` channel.
pub fn write_mono_exr(bitmap: &Bitmap, file_path: &str) -> UnitResult {
    log::info!("Starting writing openexr image: {}.", file_path);

    let channel = AnyChannel::new(LUMINANCE_CHANNEL, FlatSamples::F32(bitmap.data().to_vec()));
    let layer = Layer::new(
        (bitmap.width(), bitmap.height()),
        LayerAttributes::named("skyradiance"),
        Encoding::FAST_LOSSLESS,
        AnyChannels::sort(vec![channel].into()),
    );
    Image::from_layer(layer).write().to_file(file_path)?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}

/// Read the `Y` channel of the first layer, or the first channel when the
/// file has no `Y`.
pub fn read_mono_exr(file_path: &str) -> std::result::Result<Bitmap, Error> {
    log::info!("Starting reading openexr image from: {}.", file_path);

    let image = read_first_flat_layer_from_file(file_path)?;
    let size = image.layer_data.size;
    let channels = &image.layer_data.channel_data.list;
    let channel = channels
        .iter()
        .find(|channel| channel.name.to_string() == LUMINANCE_CHANNEL)
        .or_else(|| channels.first())
        .ok_or_else(|| Error::Invalid("image has no channels".into()))?;

    let data: Vec<f32> = channel.sample_data.values_as_f32().collect();
    let bitmap = Bitmap::from_data(size.0, size.1, data)
        .ok_or_else(|| Error::Invalid("channel size does not match the layer".into()))?;

    log::info!("OpenEXR loaded, width = {}, height = {}.", bitmap.width(), bitmap.height());
    Ok(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exr_write_then_read() {
        let mut bitmap = Bitmap::new(5, 3);
        bitmap[(0, 0)] = 0.25;
        bitmap[(4, 2)] = 3.5e-3;
        bitmap[(2, 1)] = 12.0;

        let path = std::env::temp_dir().join(format!("skyradiance_exr_{}.exr", std::process::id()));
        let path = path.to_string_lossy().to_string();
        write_mono_exr(&bitmap, &path).unwrap();
        let loaded = read_mono_exr(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, bitmap);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_mono_exr("/nonexistent/dir/image.exr").is_err());
    }
}

use crate::errors::IconError;
use crate::render::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Encodes `image` as an 8-bit RGBA PNG at `path`, creating or truncating the file.
/// The parent directory must exist.
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    let file = File::create(path)?;
    let w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    let row_len = (image.width * 4) as usize;
    if image.stride as usize == row_len {
        writer.write_image_data(&image.pixels[..row_len * image.height as usize])?;
    } else {
        let mut packed = Vec::with_capacity(row_len * image.height as usize);
        for row in image.pixels.chunks(image.stride as usize).take(image.height as usize) {
            packed.extend_from_slice(&row[..row_len]);
        }
        writer.write_image_data(&packed)?;
    }
    writer.finish()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32, stride: u32) -> RgbaImage {
        let mut pixels = vec![0u8; (stride * height) as usize];
        for y in 0..height {
            for x in 0..width {
                let off = (y * stride + x * 4) as usize;
                let px: [u8; 4] = if (x + y) % 2 == 0 { [255, 0, 0, 255] } else { [0; 4] };
                pixels[off..off + 4].copy_from_slice(&px);
            }
        }
        RgbaImage::from_raw(pixels, width, height, stride)
    }

    fn read_back(path: &Path) -> (png::OutputInfo, Vec<u8>) {
        let decoder = png::Decoder::new(File::open(path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        buf.truncate(info.buffer_size());
        (info, buf)
    }

    #[test]
    fn writes_rgba8_with_image_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = checker(4, 3, 16);

        write_png(&image, &path).unwrap();

        let (info, data) = read_back(&path);
        assert_eq!((info.width, info.height), (4, 3));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(info.bit_depth, png::BitDepth::Eight);
        assert_eq!(data, image.pixels);
    }

    #[test]
    fn padded_rows_are_packed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        // 2 pixels wide, rows padded to 12 bytes
        let image = checker(2, 2, 12);

        write_png(&image, &path).unwrap();

        let (_, data) = read_back(&path);
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..4], &[255, 0, 0, 255]);
        assert_eq!(&data[4..8], &[0, 0, 0, 0]);
        assert_eq!(&data[8..12], &[0, 0, 0, 0]);
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"stale").unwrap();

        write_png(&checker(2, 2, 8), &path).unwrap();
        assert_eq!(read_back(&path).0.width, 2);
    }

    #[test]
    fn missing_parent_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public").join("icon.png");
        assert!(matches!(write_png(&checker(2, 2, 8), &path), Err(IconError::Io(_))));
    }
}

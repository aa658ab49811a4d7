//! Batch re-encoding of the landing page artwork.
//!
//! Each job is shrunk to fit its maximum width (never enlarged) and written
//! twice: a lossy JPEG at the job's quality and a PNG at best compression.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::DynamicImage;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to process {path}: {source}")]
    Codec {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageJob {
    /// File name inside the assets directory
    pub source: &'static str,
    /// Output file name without extension
    pub output_stem: &'static str,
    pub max_width: u32,
    /// JPEG quality, 1..=100
    pub quality: u8,
}

pub const JOBS: [ImageJob; 3] = [
    ImageJob {
        source: "8703d1eade1f26db4f0daf0c4127ca966e251655.png",
        output_stem: "thailand-bg",
        max_width: 1200,
        quality: 75,
    },
    ImageJob {
        source: "443c5c749ebfe974980617b9c917b81b051ddc82.png",
        output_stem: "logo",
        max_width: 200,
        quality: 85,
    },
    ImageJob {
        source: "63ee1135d2de80d559031f3410debd4eccdd3ec3.png",
        output_stem: "saturway-bg",
        max_width: 1200,
        quality: 75,
    },
];

/// Size of one processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: String,
    pub jpeg_path: PathBuf,
    pub png_path: PathBuf,
    pub input_bytes: u64,
    pub jpeg_bytes: u64,
    pub png_bytes: u64,
}

impl FileReport {
    /// Percentage saved by the JPEG relative to the input
    pub fn saved_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.jpeg_bytes as f64 / self.input_bytes as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "✓ {}\n  {} KB → {} KB ({:.1}% saved)\n  → {}\n  → {} ({} KB)",
            self.source,
            kilobytes(self.input_bytes),
            kilobytes(self.jpeg_bytes),
            self.saved_percent(),
            self.jpeg_path.display(),
            self.png_path.display(),
            kilobytes(self.png_bytes),
        )
    }
}

fn kilobytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<FileReport>,
    pub failed: Vec<(String, ImageError)>,
}

/// Dimensions that fit `max_width` while keeping the aspect ratio; never enlarges
pub fn fit_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width || width == 0 {
        return (width, height);
    }
    let scaled = (height as f64 * max_width as f64 / width as f64).round() as u32;
    (max_width, scaled.max(1))
}

/// Run every job; a failing file is logged and skipped
pub fn optimize_all(
    jobs: &[ImageJob],
    assets_dir: &Path,
    output_dir: &Path,
) -> Result<BatchReport, ImageError> {
    fs::create_dir_all(output_dir).map_err(|source| ImageError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut report = BatchReport::default();
    for job in jobs {
        match optimize_one(job, assets_dir, output_dir) {
            Ok(file) => {
                tracing::info!(
                    source = job.source,
                    input = file.input_bytes,
                    jpeg = file.jpeg_bytes,
                    png = file.png_bytes,
                    "Optimized image"
                );
                report.processed.push(file);
            }
            Err(e) => {
                tracing::error!("Error processing {}: {}", job.source, e);
                report.failed.push((job.source.to_string(), e));
            }
        }
    }
    Ok(report)
}

fn optimize_one(job: &ImageJob, assets_dir: &Path, output_dir: &Path) -> Result<FileReport, ImageError> {
    let input_path = assets_dir.join(job.source);
    let input_bytes = file_size(&input_path)?;

    let img = image::open(&input_path).map_err(|source| ImageError::Codec {
        path: input_path.clone(),
        source,
    })?;
    let (width, height) = fit_dimensions(img.width(), img.height(), job.max_width);
    let img = if (width, height) == (img.width(), img.height()) {
        img
    } else {
        img.resize_exact(width, height, FilterType::Lanczos3)
    };

    let jpeg_path = output_dir.join(format!("{}.jpg", job.output_stem));
    write_jpeg(&img, &jpeg_path, job.quality)?;
    let png_path = output_dir.join(format!("{}.png", job.output_stem));
    write_png(&img, &png_path)?;

    Ok(FileReport {
        source: job.source.to_string(),
        input_bytes,
        jpeg_bytes: file_size(&jpeg_path)?,
        png_bytes: file_size(&png_path)?,
        jpeg_path,
        png_path,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, ImageError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn file_size(path: &Path) -> Result<u64, ImageError> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn write_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), ImageError> {
    let writer = create(path)?;
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))
        .map_err(|source| ImageError::Codec {
            path: path.to_path_buf(),
            source,
        })
}

fn write_png(img: &DynamicImage, path: &Path) -> Result<(), ImageError> {
    let writer = create(path)?;
    let encoder = PngEncoder::new_with_quality(writer, CompressionType::Best, PngFilter::Adaptive);
    img.write_with_encoder(encoder)
        .map_err(|source| ImageError::Codec {
            path: path.to_path_buf(),
            source,
        })
}

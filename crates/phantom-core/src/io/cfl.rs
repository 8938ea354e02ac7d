//! Complex float arrays stored as a `.hdr`/`.cfl` file pair.
//!
//! The header lists the dimensions on the first non-comment line; the data
//! file holds little-endian `f32` real/imaginary pairs in column-major order.

use crate::common::constants::DIMS;
use crate::domain::SimuError;
use crate::multind::{ComplexArray, Dims, calc_size, checked_size, dims_from_slice};
use num_complex::Complex32;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const BYTES_PER_SAMPLE: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum CflError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid header '{}': {message}", path.display())]
    Header { path: PathBuf, message: String },
    #[error("data file '{}' holds {actual} bytes, header requires {expected}", path.display())]
    DataSize {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

impl From<CflError> for SimuError {
    fn from(error: CflError) -> Self {
        match error {
            CflError::Read { .. } | CflError::Write { .. } => {
                SimuError::io_system("IO.CFL", error.to_string())
            }
            CflError::Header { .. } | CflError::DataSize { .. } => {
                SimuError::input_validation("INPUT.CFL", error.to_string())
            }
        }
    }
}

/// Header and data paths for `name`, with any `.cfl`/`.hdr` suffix dropped.
pub fn cfl_paths(name: &Path) -> (PathBuf, PathBuf) {
    let base = match name.extension().and_then(|extension| extension.to_str()) {
        Some("cfl" | "hdr") => name.with_extension(""),
        _ => name.to_path_buf(),
    };
    (append_suffix(&base, "hdr"), append_suffix(&base, "cfl"))
}

fn append_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_owned();
    path.push(".");
    path.push(suffix);
    PathBuf::from(path)
}

pub fn write_cfl(name: &Path, array: &ComplexArray) -> Result<(), CflError> {
    let (header_path, data_path) = cfl_paths(name);

    fs::write(&header_path, render_header(array.dims())).map_err(|source| CflError::Write {
        path: header_path.clone(),
        source,
    })?;

    let write_error = |source: std::io::Error| CflError::Write {
        path: data_path.clone(),
        source,
    };
    let file = fs::File::create(&data_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for sample in array.data() {
        writer
            .write_all(&sample.re.to_le_bytes())
            .and_then(|()| writer.write_all(&sample.im.to_le_bytes()))
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}

pub fn read_cfl(name: &Path) -> Result<ComplexArray, CflError> {
    let (header_path, data_path) = cfl_paths(name);

    let header = fs::read_to_string(&header_path).map_err(|source| CflError::Read {
        path: header_path.clone(),
        source,
    })?;
    let dims = parse_header(&header).map_err(|message| CflError::Header {
        path: header_path.clone(),
        message,
    })?;

    let bytes = fs::read(&data_path).map_err(|source| CflError::Read {
        path: data_path.clone(),
        source,
    })?;
    let expected = calc_size(&dims) * BYTES_PER_SAMPLE;
    if bytes.len() != expected {
        return Err(CflError::DataSize {
            path: data_path,
            expected,
            actual: bytes.len(),
        });
    }

    let data = bytes
        .chunks_exact(BYTES_PER_SAMPLE)
        .map(|chunk| {
            let re = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            let im = f32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
            Complex32::new(re, im)
        })
        .collect();

    ComplexArray::from_vec(dims, data).ok_or_else(|| CflError::DataSize {
        path: data_path,
        expected,
        actual: bytes.len(),
    })
}

fn render_header(dims: &Dims) -> String {
    let extents = dims
        .iter()
        .map(|extent| extent.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("# Dimensions\n{extents}\n")
}

fn parse_header(header: &str) -> Result<Dims, String> {
    let line = header
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .ok_or_else(|| "missing dimensions line".to_string())?;

    let extents = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|_| format!("invalid extent '{token}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if extents.contains(&0) {
        return Err("extents must be positive".to_string());
    }

    let dims = dims_from_slice(&extents)
        .ok_or_else(|| format!("at most {DIMS} dimensions, got {}", extents.len()))?;

    checked_size(&dims)
        .and_then(|samples| samples.checked_mul(BYTES_PER_SAMPLE))
        .ok_or_else(|| format!("dimensions {line} exceed the addressable sample count"))?;
    Ok(dims)
}

#[cfg(test)]
mod tests {
    use super::{CflError, cfl_paths, parse_header, read_cfl, write_cfl};
    use crate::domain::SimuError;
    use crate::multind::{ComplexArray, dims_from_slice};
    use num_complex::Complex32;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn paths_strip_known_extensions() {
        let (hdr, cfl) = cfl_paths(Path::new("out/phantom.cfl"));
        assert_eq!(hdr, Path::new("out/phantom.hdr"));
        assert_eq!(cfl, Path::new("out/phantom.cfl"));

        let (hdr, _) = cfl_paths(Path::new("ksp.v2"));
        assert_eq!(hdr, Path::new("ksp.v2.hdr"));
    }

    #[test]
    fn write_then_read_preserves_samples() {
        let temp = TempDir::new().expect("tempdir should be created");
        let name = temp.path().join("array");
        let dims = dims_from_slice(&[1, 3, 2, 2]).expect("dims");
        let data = (0..12)
            .map(|v| Complex32::new(v as f32 * 0.5, -(v as f32)))
            .collect();
        let array = ComplexArray::from_vec(dims, data).expect("array");

        write_cfl(&name, &array).expect("write");
        let header = fs::read_to_string(temp.path().join("array.hdr")).expect("header");
        assert!(header.starts_with("# Dimensions\n1 3 2 2 1 "));
        assert_eq!(
            fs::metadata(temp.path().join("array.cfl")).expect("data").len(),
            96
        );

        assert_eq!(read_cfl(&name).expect("read"), array);
    }

    #[test]
    fn header_parser_pads_and_validates() {
        let dims = parse_header("# Dimensions\n3 64\n").expect("header");
        assert_eq!(&dims[..3], &[3, 64, 1]);

        assert!(parse_header("# only a comment\n").is_err());
        assert!(parse_header("# Dimensions\n3 x\n").is_err());
        assert!(parse_header("# Dimensions\n3 0\n").is_err());
        assert!(parse_header(&format!("# Dimensions\n{}\n", "1 ".repeat(17))).is_err());
    }

    #[test]
    fn header_with_overflowing_extents_is_rejected() {
        let message = parse_header("# Dimensions\n3 8589934592 8589934592\n")
            .expect_err("overflowing header");
        assert!(message.contains("exceed the addressable sample count"));
        assert!(parse_header("# Dimensions\n1 2305843009213693952\n").is_err());

        let temp = TempDir::new().expect("tempdir should be created");
        let name = temp.path().join("huge");
        fs::write(
            temp.path().join("huge.hdr"),
            "# Dimensions\n1 4294967296 4294967296\n",
        )
        .expect("header");
        fs::write(temp.path().join("huge.cfl"), b"").expect("data");

        let error = read_cfl(&name).expect_err("overflowing header");
        assert!(matches!(error, CflError::Header { .. }));
        assert_eq!(SimuError::from(error).placeholder(), "INPUT.CFL");
    }

    #[test]
    fn read_rejects_truncated_data() {
        let temp = TempDir::new().expect("tempdir should be created");
        let name = temp.path().join("short");
        fs::write(temp.path().join("short.hdr"), "# Dimensions\n2 2\n").expect("header");
        fs::write(temp.path().join("short.cfl"), [0u8; 24]).expect("data");

        let error = read_cfl(&name).expect_err("truncated");
        assert!(matches!(
            error,
            CflError::DataSize {
                expected: 32,
                actual: 24,
                ..
            }
        ));
        assert_eq!(SimuError::from(error).placeholder(), "INPUT.CFL");
    }

    #[test]
    fn read_reports_missing_files() {
        let temp = TempDir::new().expect("tempdir should be created");
        let error = read_cfl(&temp.path().join("absent")).expect_err("missing");
        assert!(matches!(error, CflError::Read { .. }));
        assert_eq!(SimuError::from(error).exit_code(), 3);
    }
}

use crate::{strip, Layout, UnpackError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct Unpacked {
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: Layout,
    pub padding: usize,
    pub written: usize,
}

/// Creates the parent directory of `path` (recursively) if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), UnpackError> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| UnpackError::io(dir, e))
        }
        _ => Ok(()),
    }
}

pub fn read_input(path: &Path) -> Result<Vec<u8>, UnpackError> {
    if !path.is_file() {
        return Err(UnpackError::InputNotFound(path.to_path_buf()));
    }

    let data = fs::read(path).map_err(|e| UnpackError::io(path, e))?;
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Writes `image` to `path` in one call, replacing whatever was there.
pub fn write_output(path: &Path, image: &[u8]) -> Result<(), UnpackError> {
    ensure_parent_dir(path)?;
    fs::write(path, image).map_err(|e| UnpackError::io(path, e))
}

/// Copies the ELF image embedded in `input` to `output`, dropping any
/// padding in front of it.
///
/// Nothing is written unless the magic is found, so an existing file at
/// `output` survives a failed run.
pub fn unpack<P, Q>(input: P, output: Q) -> Result<Unpacked, UnpackError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (input, output) = (input.as_ref(), output.as_ref());
    let data = read_input(input)?;

    let (layout, image) =
        strip(&data).ok_or_else(|| UnpackError::MagicNotFound(input.to_path_buf()))?;

    match layout {
        Layout::Bare => log::info!("{} is already a bare ELF image, copying", input.display()),
        Layout::Padded { offset } => {
            log::info!("Stripping {offset} bytes of padding from {}", input.display());
            if data[..offset].iter().any(|&b| b != 0) {
                log::debug!(
                    "Padding in {} is not zero-filled; using first ELF magic at {:#x}",
                    input.display(),
                    offset
                );
            }
        }
    }

    write_output(output, image)?;

    Ok(Unpacked {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        layout,
        padding: layout.offset(),
        written: image.len(),
    })
}

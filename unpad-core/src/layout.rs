use serde::Serialize;

/// The four bytes every ELF image starts with.
pub const ELF_MAGIC: &[u8; 4] = goblin::elf::header::ELFMAG;

/// Where the ELF image sits inside the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Magic at offset 0; the input is copied as-is.
    Bare,
    /// Magic first seen at `offset`; everything before it is padding.
    Padded { offset: usize },
}

impl Layout {
    /// Offset of the first output byte within the input.
    pub fn offset(&self) -> usize {
        match self {
            Layout::Bare => 0,
            Layout::Padded { offset } => *offset,
        }
    }
}

/// Offset of the first `\x7FELF` in `data`, at any byte position.
pub fn find_magic(data: &[u8]) -> Option<usize> {
    data.windows(ELF_MAGIC.len())
        .position(|window| window == ELF_MAGIC)
}

/// `None` when the magic appears nowhere in `data`.
pub fn locate(data: &[u8]) -> Option<Layout> {
    if data.starts_with(ELF_MAGIC) {
        return Some(Layout::Bare);
    }

    find_magic(data).map(|offset| Layout::Padded { offset })
}

/// Splits off the padding and returns the embedded image.
///
/// The returned slice borrows from `data` and is either all of it or the
/// suffix starting at the first magic occurrence. If the padding happens to
/// contain the magic itself, the image is cut at that earlier point.
pub fn strip(data: &[u8]) -> Option<(Layout, &[u8])> {
    let layout = locate(data)?;
    Some((layout, &data[layout.offset()..]))
}

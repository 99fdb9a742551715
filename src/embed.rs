//! Asset embedding
//!
//! Converts one input file into a compilable C++ header fragment so the
//! data can be linked into the binary instead of read from disk at
//! runtime. Binary inputs become a byte-count constant plus a hex byte
//! array; text inputs become a raw string literal holding the exact file
//! contents. The embedder is a pure format converter: it never inspects
//! the payload's meaning.

use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{BakeError, BakeResult};

/// Extension given to generated header fragments
const HEADER_EXTENSION: &str = "h";

/// Bytes per line in the generated hex array
const HEX_BYTES_PER_LINE: usize = 16;

/// Candidate raw-string delimiters, probed in order.
///
/// The plain `R"(...)"` form covers every realistic payload; the suffixed
/// forms exist so a payload that happens to contain `)"` still embeds
/// cleanly instead of producing an uncompilable header.
const RAW_DELIMITERS: [&str; 12] = [
    "", "mono", "mono0", "mono1", "mono2", "mono3", "mono4", "mono5", "mono6", "mono7", "mono8",
    "mono9",
];

/// How a file's contents are encoded into the header fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedMode {
    /// Hex byte array plus a length constant
    Binary,
    /// Raw string literal with the verbatim file contents
    Text,
}

/// Embed `path` as a header fragment next to it
///
/// Writes `<path with extension replaced by .h>` and returns that path.
/// The fragment is rendered fully in memory and written atomically, so a
/// failed embed never leaves a partial header behind.
pub fn embed_file(path: &Path, mode: EmbedMode) -> BakeResult<PathBuf> {
    let symbol = derive_symbol(path)?;

    let fragment = match mode {
        EmbedMode::Binary => render_binary_header(&symbol, &fs::read(path)?),
        EmbedMode::Text => {
            let bytes = fs::read(path)?;
            let text = String::from_utf8(bytes).map_err(|_| BakeError::NonUtf8Text {
                file: path.to_path_buf(),
            })?;
            render_text_header(&symbol, &text).ok_or_else(|| BakeError::DelimiterCollision {
                file: path.to_path_buf(),
            })?
        }
    };

    let output = path.with_extension(HEADER_EXTENSION);
    write_atomic(&output, &fragment)?;

    Ok(output)
}

/// Derive the embedded symbol name from the input file's stem
///
/// Symbol uniqueness across a whole program is the caller's concern; this
/// only guarantees the stem forms a valid C identifier.
fn derive_symbol(path: &Path) -> BakeResult<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();

    if !is_valid_identifier(&stem) {
        return Err(BakeError::BadSymbolName {
            stem,
            file: path.to_path_buf(),
        });
    }

    Ok(stem)
}

fn is_valid_identifier(stem: &str) -> bool {
    let mut chars = stem.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Render the binary-mode fragment: a length constant and a byte array.
///
/// The length constant always equals the array element count; decoding the
/// array must reproduce the input bytes exactly.
fn render_binary_header(symbol: &str, bytes: &[u8]) -> String {
    let mut out = String::new();

    out.push_str("\n#pragma once\n\n");
    let _ = writeln!(out, "constexpr int {}_data_length = {};\n", symbol, bytes.len());
    let _ = writeln!(out, "constexpr unsigned char {}_data[] = {{", symbol);

    for (index, byte) in bytes.iter().enumerate() {
        if index % HEX_BYTES_PER_LINE == 0 {
            out.push('\t');
        }
        let _ = write!(out, "0x{:02X}", byte);
        if index + 1 != bytes.len() {
            out.push_str(", ");
            if (index + 1) % HEX_BYTES_PER_LINE == 0 {
                // trailing space belongs to the separator, not the line
                out.pop();
                out.push('\n');
            }
        }
    }

    out.push_str("\n};\n");
    out
}

/// Render the text-mode fragment: one raw string constant.
///
/// Returns `None` when the payload contains the closing sequence of every
/// candidate delimiter; callers fail closed before touching the disk.
fn render_text_header(symbol: &str, text: &str) -> Option<String> {
    let delimiter = select_raw_delimiter(text)?;

    let mut out = String::new();
    out.push_str("\n#pragma once\n\n");
    let _ = write!(
        out,
        "constexpr const char* {}_data = R\"{delim}({}){delim}\";\n",
        symbol,
        text,
        delim = delimiter
    );

    Some(out)
}

fn select_raw_delimiter(text: &str) -> Option<&'static str> {
    RAW_DELIMITERS
        .into_iter()
        .find(|delim| !text.contains(&format!("){}\"", delim)))
}

/// Write via a temp file in the destination directory, then rename
fn write_atomic(path: &Path, content: &str) -> BakeResult<()> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut file = match dir {
        Some(parent) => tempfile::NamedTempFile::new_in(parent)?,
        None => tempfile::NamedTempFile::new_in(".")?,
    };
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

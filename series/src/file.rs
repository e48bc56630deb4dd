//! Opening DICOM files.
//!
//! A file is decoded up to and including its pixel data element,
//! while the declared transfer syntax is taken into account
//! as soon as it is found in the file meta group.
use crate::error::{OpenFileSnafu, ParseFileSnafu, ReadPreambleBytesSnafu, Result};
use dcmstack_dictionary_std::tags;
use dcmstack_parser::{AttributeTree, ElementReader, Endianness, ParseOptions};
use snafu::ResultExt;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

const PREAMBLE_LEN: u64 = 128;
const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
const JPEG_FAMILY_PREFIX: &str = "1.2.840.10008.1.2.4.";

/// Open a DICOM file with the default options.
pub fn open_file<P>(path: P) -> Result<DicomFile>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Whether to look for the 128-byte file preamble.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ReadPreamble {
    /// Skip the preamble if the `DICM` magic code is found after it,
    /// otherwise start at the first byte.
    #[default]
    Auto,
    /// Never skip a preamble,
    /// thus assuming that the file does not have it.
    Never,
    /// Always skip the first 128 bytes.
    Always,
}

/// A builder type for opening a DICOM file with additional options.
///
/// ```no_run
/// # use dcmstack_series::{OpenFileOptions, ReadPreamble};
/// let file = OpenFileOptions::new()
///     .read_preamble(ReadPreamble::Never)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct OpenFileOptions {
    read_preamble: ReadPreamble,
    parse: ParseOptions,
}

impl OpenFileOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set whether to look for the 128-byte file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the options of the element decoder.
    pub fn parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(&self, path: P) -> Result<DicomFile>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(OpenFileSnafu { path })?;
        let mut file = BufReader::new(file);
        let start = self.locate_data_set(&mut file, path)?;
        file.seek(SeekFrom::Start(start))
            .context(ReadPreambleBytesSnafu { path })?;

        tracing::debug!("Reading {} from position {}", path.display(), start);
        let mut reader =
            ElementReader::new(file, self.parse).context(ParseFileSnafu { path })?;
        let mut transfer_syntax = None;

        loop {
            let id = match reader.read_element() {
                Ok(Some(id)) => id,
                Ok(None) => break,
                Err(e) if e.is_truncated_header() => {
                    tracing::warn!("{} in {}, stopping", e, path.display());
                    break;
                }
                Err(e) => return Err(e).context(ParseFileSnafu { path }),
            };
            let node = &reader.tree()[id];
            let tag = node.tag();
            if tag == tags::PIXEL_DATA {
                // nothing of interest is expected after the pixel data
                break;
            }
            if tag != tags::TRANSFER_SYNTAX_UID {
                continue;
            }
            let ts = node.to_str().map(|uid| TransferSyntax::from_uid(&uid));
            if let Some(ts) = ts {
                tracing::debug!("Transfer syntax {} ({:?})", ts.uid(), ts.compression());
                if ts.is_big_endian() {
                    reader.context_mut().big_endian_transfer_syntax = true;
                }
                let deflated = ts.compression() == Compression::Deflate;
                transfer_syntax = Some(ts);
                if deflated {
                    tracing::warn!(
                        "Deflated data set in {} is not supported, stopping after the file meta group",
                        path.display()
                    );
                    break;
                }
            }
        }

        let byte_order = reader.context().byte_order;
        Ok(DicomFile {
            path: path.to_path_buf(),
            tree: reader.into_tree(),
            transfer_syntax,
            byte_order,
        })
    }

    /// Determine the position where the data set begins.
    fn locate_data_set<R>(&self, file: &mut R, path: &Path) -> Result<u64>
    where
        R: Read,
    {
        if self.read_preamble == ReadPreamble::Never {
            return Ok(0);
        }
        let mut buf = Vec::with_capacity(PREAMBLE_LEN as usize + 4);
        file.by_ref()
            .take(PREAMBLE_LEN + 4)
            .read_to_end(&mut buf)
            .context(ReadPreambleBytesSnafu { path })?;

        let start = if buf.len() >= PREAMBLE_LEN as usize + 4
            && buf[PREAMBLE_LEN as usize..] == DICM_MAGIC_CODE
        {
            PREAMBLE_LEN + 4
        } else if buf.len() >= 4 && buf[..4] == DICM_MAGIC_CODE {
            // no preamble after all
            4
        } else if self.read_preamble == ReadPreamble::Always {
            PREAMBLE_LEN
        } else {
            tracing::debug!("No DICM magic code in {}, reading from the start", path.display());
            0
        };
        Ok(start)
    }
}

/// The kind of compression applied to the pixel data,
/// as declared by the transfer syntax.
///
/// Decoding the compressed data is the concern of external codecs.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Native pixel data.
    #[default]
    None,
    /// JPEG baseline, extended or lossless.
    Jpeg,
    /// JPEG 2000 (including high-throughput JPEG 2000).
    Jpeg2000,
    /// JPEG-LS.
    JpegLs,
    /// RLE lossless.
    Rle,
    /// The whole data set is deflated.
    Deflate,
}

impl Compression {
    /// Whether the pixel data is encapsulated in fragments.
    pub fn is_encapsulated(self) -> bool {
        !matches!(self, Compression::None | Compression::Deflate)
    }
}

/// A transfer syntax declared in a file meta group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferSyntax {
    uid: String,
    big_endian: bool,
    compression: Compression,
}

impl TransferSyntax {
    /// Classify a transfer syntax by its UID.
    pub fn from_uid(uid: &str) -> Self {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        let compression = if uid == RLE_LOSSLESS {
            Compression::Rle
        } else if uid == DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN {
            Compression::Deflate
        } else if let Some(code) = uid
            .strip_prefix(JPEG_FAMILY_PREFIX)
            .and_then(|code| code.parse::<u32>().ok())
        {
            match code {
                50..=70 => Compression::Jpeg,
                80 | 81 => Compression::JpegLs,
                90..=93 | 201..=203 => Compression::Jpeg2000,
                _ => Compression::None,
            }
        } else {
            Compression::None
        };

        TransferSyntax {
            uid: uid.to_string(),
            big_endian: uid == EXPLICIT_VR_BIG_ENDIAN,
            compression,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Whether the data set is encoded in explicit VR big endian.
    pub fn is_big_endian(&self) -> bool {
        self.big_endian
    }

    pub fn compression(&self) -> Compression {
        self.compression
    }
}

/// A decoded DICOM file.
#[derive(Debug, Clone)]
pub struct DicomFile {
    path: PathBuf,
    tree: AttributeTree,
    transfer_syntax: Option<TransferSyntax>,
    byte_order: Endianness,
}

impl DicomFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decoded top-level elements and everything nested in them.
    pub fn tree(&self) -> &AttributeTree {
        &self.tree
    }

    /// The transfer syntax declared in the file meta group, if any.
    pub fn transfer_syntax(&self) -> Option<&TransferSyntax> {
        self.transfer_syntax.as_ref()
    }

    /// The byte order in effect when decoding stopped,
    /// which is the byte order of the pixel data.
    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn into_tree(self) -> AttributeTree {
        self.tree
    }
}

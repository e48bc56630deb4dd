//! The element reader,
//! which decodes a stream of data elements into an [`AttributeTree`].
//!
//! Each call to [`ElementReader::read_element`] decodes one top-level element
//! along with everything nested in it.
//! Sequences are followed with an explicit stack of open frames
//! rather than by recursion,
//! so that the nesting depth of a file has no bearing on the call stack.
use crate::decode::{decode_value, read_header, ElementHeader, Token, VrCode};
use crate::error::{ReadValueSnafu, Result, SeekSnafu, SourceSizeSnafu};
use crate::options::{ParseContext, ParseOptions};
use crate::source::Source;
use crate::text::CharacterSet;
use crate::tree::{AttributeNode, AttributeTree, NodeId};
use dcmstack_core::dictionary::{DataDictionary, DictionaryEntry};
use dcmstack_core::{Tag, Value, VR};
use dcmstack_dictionary_std::{tags, StandardDataDictionary};
use snafu::ResultExt;
use std::io::{Read, Seek};

/// The smallest number of bytes which can hold an element header.
const MIN_HEADER_LEN: u64 = 8;

/// Palette color lookup table data attributes,
/// which are always read as unsigned 16-bit words.
const PALETTE_LUT_DATA: [Tag; 6] = [
    tags::RED_PALETTE_COLOR_LOOKUP_TABLE_DATA,
    tags::GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA,
    tags::BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA,
    tags::SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA,
    tags::SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA,
    tags::SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA,
];

/// An open sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Frame {
    /// the sequence node
    node: NodeId,
    /// the position where the sequence ends,
    /// or the end of the stream if the length is undefined
    end: u64,
    /// whether the sequence ends with a sequence delimitation item
    undefined_length: bool,
}

/// A reader of DICOM data elements from a seekable source.
///
/// The reader owns a [`ParseContext`] which starts from the given options
/// and is updated as the stream reveals its byte order
/// and character set.
#[derive(Debug)]
pub struct ElementReader<S, D = StandardDataDictionary> {
    source: Source<S>,
    dict: D,
    ctx: ParseContext,
    tree: AttributeTree,
}

impl<S> ElementReader<S>
where
    S: Read + Seek,
{
    /// Create a new reader with the standard data dictionary.
    ///
    /// Decoding starts at the current position of the source.
    pub fn new(source: S, options: ParseOptions) -> Result<Self> {
        Self::new_with_dictionary(source, options, StandardDataDictionary)
    }
}

impl<S, D> ElementReader<S, D>
where
    S: Read + Seek,
    D: DataDictionary,
{
    /// Create a new reader with the given data dictionary.
    pub fn new_with_dictionary(source: S, options: ParseOptions, dict: D) -> Result<Self> {
        Ok(ElementReader {
            source: Source::new(source).context(SourceSizeSnafu)?,
            dict,
            ctx: options.into(),
            tree: AttributeTree::new(),
        })
    }

    /// The current decoding state.
    pub fn context(&self) -> &ParseContext {
        &self.ctx
    }

    /// Modify the current decoding state,
    /// such as when the transfer syntax becomes known.
    pub fn context_mut(&mut self) -> &mut ParseContext {
        &mut self.ctx
    }

    /// The current position in the source.
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// The elements decoded so far.
    pub fn tree(&self) -> &AttributeTree {
        &self.tree
    }

    /// Retrieve the elements decoded so far, consuming the reader.
    pub fn into_tree(self) -> AttributeTree {
        self.tree
    }

    /// Decode the next top-level element,
    /// along with all elements nested in it.
    ///
    /// Returns `Ok(None)` when fewer bytes than needed for a header remain.
    ///
    /// # Errors
    ///
    /// Corruption inside a sequence is recovered from
    /// by closing the sequence at its declared end.
    /// At the top level,
    /// a length which fits the stream in neither byte order
    /// results in [`Error::InvalidTagLength`](crate::Error::InvalidTagLength),
    /// and a stream which ends in the middle of a header
    /// results in [`Error::ReadHeader`](crate::Error::ReadHeader).
    pub fn read_element(&mut self) -> Result<Option<NodeId>> {
        let header = loop {
            if self.source.remaining() < MIN_HEADER_LEN {
                return Ok(None);
            }
            match read_header(&mut self.source, &mut self.ctx)? {
                Token::Header(header) => break header,
                Token::SequenceDelimiter => {
                    tracing::debug!(
                        "Sequence delimiter outside of a sequence at position {}",
                        self.source.position() - MIN_HEADER_LEN
                    );
                }
                Token::EndOfStream => return Ok(None),
            }
        };

        let (root, frame) = self.begin_element(header, None)?;
        let mut stack: Vec<Frame> = frame.into_iter().collect();

        while let Some(&frame) = stack.last() {
            let pos = self.source.position();
            if pos >= frame.end || self.source.remaining() < MIN_HEADER_LEN {
                stack.pop();
                self.close(frame, frame.end)?;
                continue;
            }

            let token = match read_header(&mut self.source, &mut self.ctx) {
                Ok(token) => token,
                Err(e) => {
                    tracing::warn!(
                        "Could not decode element in sequence {}, skipping to the end of the sequence: {}",
                        self.tree[frame.node].tag(),
                        e
                    );
                    stack.pop();
                    self.close(frame, frame.end)?;
                    continue;
                }
            };

            match token {
                Token::Header(header) if header.tag == tags::ITEM => {
                    // items are transparent: their elements belong to the sequence
                }
                Token::Header(header) => {
                    let (_, nested) = self.begin_element(header, Some(frame))?;
                    stack.extend(nested);
                }
                Token::SequenceDelimiter if frame.undefined_length => {
                    stack.pop();
                    let end = self.source.position();
                    self.close(frame, end)?;
                }
                Token::SequenceDelimiter => {}
                Token::EndOfStream => {
                    stack.pop();
                    self.close(frame, frame.end)?;
                }
            }
        }

        Ok(Some(root))
    }

    /// Decode all remaining top-level elements
    /// and retrieve the full tree.
    ///
    /// A stream which ends in the middle of an element header
    /// is taken as the end of the data.
    pub fn read_to_end(mut self) -> Result<AttributeTree> {
        loop {
            match self.read_element() {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) if e.is_truncated_header() => {
                    tracing::warn!("{}, stopping", e);
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.tree)
    }

    /// Decode top-level elements until one satisfies the given predicate,
    /// and return its identifier.
    ///
    /// Returns `Ok(None)` if the stream ends first.
    /// The source is left right after the matching element.
    pub fn read_until<P>(&mut self, mut predicate: P) -> Result<Option<NodeId>>
    where
        P: FnMut(&AttributeNode) -> bool,
    {
        while let Some(id) = self.read_element()? {
            if predicate(&self.tree[id]) {
                return Ok(Some(id));
            }
        }
        Ok(None)
    }

    /// Determine the value representation of an element.
    fn resolve_vr(&self, header: &ElementHeader) -> Option<VR> {
        if PALETTE_LUT_DATA.contains(&header.tag) {
            return Some(VR::US);
        }
        let dict_vr = self.dict.by_tag(header.tag).map(|e| e.vr());
        match header.vr_code {
            VrCode::Explicit(vr) => Some(vr),
            VrCode::Implicit => Some(dict_vr.unwrap_or(VR::Implicit)),
            VrCode::Reserved => Some(dict_vr.unwrap_or(VR::Reserved)),
            VrCode::Unrecognized(_) => dict_vr,
        }
    }

    /// Create the node of an element and decode its value,
    /// or open a new frame if it is a sequence.
    fn begin_element(
        &mut self,
        header: ElementHeader,
        parent: Option<Frame>,
    ) -> Result<(NodeId, Option<Frame>)> {
        let tag = header.tag;
        let vr = self.resolve_vr(&header);
        let key = self
            .dict
            .by_tag(tag)
            .map(|e| e.alias().to_string())
            .unwrap_or_else(|| tag.to_string());
        tracing::trace!(
            "{} {} at position {}, length {}",
            key,
            vr.map(VR::to_string).unwrap_or("??"),
            header.header_start,
            header.len
        );

        let container_end = parent.map(|f| f.end).unwrap_or_else(|| self.source.len());
        let node = AttributeNode::new(tag, vr, key, header.value_start, header.len);
        let id = self.tree.push(node, parent.map(|f| f.node));

        if vr == Some(VR::SQ) {
            self.tree.node_mut(id).set_value(Value::Sequence);
            let frame = if header.undefined {
                Frame {
                    node: id,
                    end: container_end,
                    undefined_length: true,
                }
            } else {
                let mut end = header.value_end();
                if end > container_end {
                    tracing::warn!(
                        "Sequence {} overruns its container, clamping to position {}",
                        tag,
                        container_end
                    );
                    end = container_end;
                }
                Frame {
                    node: id,
                    end,
                    undefined_length: false,
                }
            };
            return Ok((id, Some(frame)));
        }

        if header.undefined || tag == tags::ITEM {
            // no value of its own: what follows is decoded as further elements
            return Ok((id, None));
        }

        let end = header.value_end();
        if end > container_end {
            tracing::warn!(
                "Element {} at position {} overruns its sequence, skipping to position {}",
                tag,
                header.header_start,
                container_end
            );
            self.seek(container_end)?;
            self.tree.node_mut(id).set_end(container_end);
            return Ok((id, None));
        }

        let value = if tag == tags::PIXEL_DATA && !self.ctx.read_pixel_data {
            self.seek(end)?;
            Value::Empty
        } else {
            self.read_value(&header, vr)?
        };

        if tag == tags::SPECIFIC_CHARACTER_SET {
            self.update_charset(&value);
        }

        let node = self.tree.node_mut(id);
        node.set_value(value);
        node.set_end(end);
        Ok((id, None))
    }

    /// Read and decode the value of a primitive element,
    /// leaving the source right after it.
    fn read_value(&mut self, header: &ElementHeader, vr: Option<VR>) -> Result<Value> {
        let end = header.value_end();
        if end > self.source.len() {
            tracing::warn!(
                "Value of element {} is truncated by the end of the stream",
                header.tag
            );
            self.seek(end)?;
            return Ok(Value::Empty);
        }
        if header.len == 0 {
            return Ok(Value::Empty);
        }

        let vr = match vr {
            Some(vr) if crate::decode::has_decoder(vr) => vr,
            _ => {
                tracing::debug!(
                    "Skipping {} value bytes of element {}",
                    header.len,
                    header.tag
                );
                self.seek(end)?;
                return Ok(Value::Empty);
            }
        };

        let bytes = self
            .source
            .read_bytes(header.len as usize)
            .context(ReadValueSnafu {
                tag: header.tag,
                position: header.value_start,
            })?;
        let bytes = &bytes[..header.value_len as usize];

        match decode_value(vr, bytes, &self.ctx) {
            Some(Ok(value)) => Ok(value),
            Some(Err(e)) => {
                tracing::warn!(
                    "Could not decode {} value of element {}: {}",
                    vr,
                    header.tag,
                    e
                );
                Ok(Value::Empty)
            }
            None => Ok(Value::Empty),
        }
    }

    fn update_charset(&mut self, value: &Value) {
        let code = value.to_str();
        let code = code.as_deref().unwrap_or("");
        // only the first term matters for the repertoires supported
        let first = code.split('\\').next().unwrap_or("");
        match CharacterSet::from_code(first) {
            Some(charset) => self.ctx.charset = charset,
            None => tracing::warn!(
                "Unsupported character set `{}`, reading text with the default repertoire",
                code
            ),
        }
    }

    /// Close a sequence frame, leaving the source at the given end position.
    fn close(&mut self, frame: Frame, end: u64) -> Result<()> {
        let end = end.min(self.source.len());
        self.seek(end)?;
        self.tree.node_mut(frame.node).set_end(end);
        Ok(())
    }

    fn seek(&mut self, position: u64) -> Result<()> {
        self.source
            .seek(position)
            .context(SeekSnafu { position })
    }
}

impl<S, D> ElementReader<S, D> {
    /// Recover the underlying source.
    pub fn into_inner(self) -> S {
        self.source.into_inner()
    }
}

impl<S, D> From<ElementReader<S, D>> for AttributeTree {
    fn from(reader: ElementReader<S, D>) -> Self {
        reader.tree
    }
}

#[cfg(test)]
mod tests {
    use super::ElementReader;
    use crate::options::ParseOptions;
    use crate::tree::AttributeTree;
    use crate::Error;
    use byteordered::Endianness;
    use dcmstack_core::{Tag, Value, VR};
    use dcmstack_dictionary_std::tags;
    use smallvec::smallvec;
    use std::io::Cursor;

    fn read_all(data: &[u8], options: ParseOptions) -> AttributeTree {
        ElementReader::new(Cursor::new(data), options)
            .unwrap()
            .read_to_end()
            .unwrap()
    }

    #[test]
    fn flat_explicit_little_endian() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0008,0060) Modality
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00,
            b'M', b'R',
            // 10: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
            // 20: (0028,0011) Columns
            0x28, 0x00, 0x11, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x01,
            // 30: (0020,0032) ImagePositionPatient
            0x20, 0x00, 0x32, 0x00, b'D', b'S', 0x0A, 0x00,
            b'-', b'1', b'0', b'\\', b'2', b'0', b'.', b'5', b'\\', b'3',
        ];
        let tree = read_all(data, ParseOptions::default());
        assert_eq!(tree.roots().len(), 4);

        let modality = tree.get(tags::MODALITY).unwrap();
        assert_eq!(modality.key(), "Modality");
        assert_eq!(modality.vr(), Some(VR::CS));
        assert_eq!(modality.to_str().as_deref(), Some("MR"));

        let rows = tree.get(tags::ROWS).unwrap();
        assert_eq!(rows.value(), &Value::U16(512));
        assert_eq!(rows.byte_range(), 18..20);
        assert_eq!(tree.get(tags::COLUMNS).unwrap().to_number(), Some(256.));

        let ipp = tree.get(tags::IMAGE_POSITION_PATIENT).unwrap();
        assert_eq!(ipp.to_numbers(), vec![-10., 20.5, 3.]);
        assert_eq!(ipp.end(), data.len() as u64);
    }

    #[test]
    fn implicit_vr_uses_dictionary() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0028,0010) Rows, len: 2
            0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00,
            0x00, 0x02,
            // (0009,1001) private, len: 4
            0x09, 0x00, 0x01, 0x10, 0x04, 0x00, 0x00, 0x00,
            b'A', b'B', b'C', b'D',
        ];
        let tree = read_all(data, ParseOptions::default());
        let rows = tree.get(tags::ROWS).unwrap();
        assert_eq!(rows.vr(), Some(VR::US));
        assert_eq!(rows.value(), &Value::U16(512));

        let private = tree.get(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(private.key(), "(0009,1001)");
        assert_eq!(private.vr(), Some(VR::Implicit));
        assert_eq!(private.to_str().as_deref(), Some("ABCD"));
    }

    #[test]
    fn sequence_contains_its_elements() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0020,9113) PlanePositionSequence, len: 22
            0x20, 0x00, 0x13, 0x91, b'S', b'Q', 0x00, 0x00,
            0x16, 0x00, 0x00, 0x00,
            // 12: (FFFE,E000) Item, len: 14
            0xFE, 0xFF, 0x00, 0xE0, 0x0E, 0x00, 0x00, 0x00,
            // 20: (0020,0032) ImagePositionPatient
            0x20, 0x00, 0x32, 0x00, b'D', b'S', 0x06, 0x00,
            b'1', b'\\', b'2', b'\\', b'-', b'3',
            // 34: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        let sq_id = tree.root_id(tags::PLANE_POSITION_SEQUENCE).unwrap();
        let sq = &tree[sq_id];
        assert!(sq.is_sequence());
        assert_eq!(sq.byte_range(), 12..34);

        let ipp_id = tree.lookup_child(sq_id, tags::IMAGE_POSITION_PATIENT).unwrap();
        let ipp = &tree[ipp_id];
        assert_eq!(ipp.parent(), Some(sq_id));
        assert_eq!(ipp.to_numbers(), vec![1., 2., -3.]);
        assert!(ipp.value_start() >= sq.value_start() && ipp.end() <= sq.end());

        // the item is not a node of its own
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(tags::ROWS).unwrap().to_number(), Some(512.));
    }

    #[test]
    fn overrunning_child_is_clamped() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0020,9113) PlanePositionSequence, len: 22
            0x20, 0x00, 0x13, 0x91, b'S', b'Q', 0x00, 0x00,
            0x16, 0x00, 0x00, 0x00,
            // 12: (FFFE,E000) Item, len: 14
            0xFE, 0xFF, 0x00, 0xE0, 0x0E, 0x00, 0x00, 0x00,
            // 20: (0020,0032) ImagePositionPatient, len: 32 (wrong)
            0x20, 0x00, 0x32, 0x00, b'D', b'S', 0x20, 0x00,
            b'1', b'\\', b'2', b'\\', b'-', b'3',
            // 34: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        let sq_id = tree.root_id(tags::PLANE_POSITION_SEQUENCE).unwrap();
        let ipp = &tree[tree.lookup_child(sq_id, tags::IMAGE_POSITION_PATIENT).unwrap()];
        assert_eq!(ipp.value(), &Value::Empty);
        assert_eq!(ipp.end(), 34);
        assert_eq!(tree[sq_id].end(), 34);
        // decoding resumes right after the sequence
        assert_eq!(tree.get(tags::ROWS).unwrap().to_number(), Some(512.));
    }

    #[test]
    fn odd_length_is_rounded_up() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0008,0060) Modality, len: 7
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x07, 0x00,
            b'O', b'T', b'H', b'E', b'R', b'S', b'X', 0x00,
            // 16: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        let modality = tree.get(tags::MODALITY).unwrap();
        assert_eq!(modality.value().as_text(), Some("OTHERSX"));
        assert_eq!(modality.length(), 8);
        assert_eq!(modality.end(), 16);
        assert_eq!(tree.get(tags::ROWS).unwrap().to_number(), Some(512.));

        let mut reader =
            ElementReader::new(Cursor::new(data), ParseOptions::default().odd_locations(true))
                .unwrap();
        let id = reader.read_element().unwrap().unwrap();
        assert_eq!(reader.tree()[id].length(), 7);
        assert_eq!(reader.tree()[id].end(), 15);
        assert_eq!(reader.position(), 15);
    }

    #[test]
    fn unrecognized_vr_is_tolerated() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0009,1001) private, VR: ZZ, len: 4
            0x09, 0x00, 0x01, 0x10, b'Z', b'Z', 0x04, 0x00,
            0x01, 0x02, 0x03, 0x04,
            // 12: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        let private = tree.get(Tag(0x0009, 0x1001)).unwrap();
        assert_eq!(private.vr(), None);
        assert_eq!(private.value(), &Value::Empty);
        assert_eq!(private.end(), 12);
        assert_eq!(tree.get(tags::ROWS).unwrap().to_number(), Some(512.));
    }

    #[test]
    fn undefined_length_sequence() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0020,9113) PlanePositionSequence, undefined length
            0x20, 0x00, 0x13, 0x91, b'S', b'Q', 0x00, 0x00,
            0xFF, 0xFF, 0xFF, 0xFF,
            // 12: (FFFE,E000) Item, undefined length
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            // 20: (0020,0032) ImagePositionPatient
            0x20, 0x00, 0x32, 0x00, b'D', b'S', 0x06, 0x00,
            b'1', b'\\', b'2', b'\\', b'-', b'3',
            // 34: (FFFE,E00D) Item Delimitation Item
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // 42: (FFFE,E0DD) Sequence Delimitation Item
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
            // 50: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        assert_eq!(tree.roots().len(), 2);
        let sq_id = tree.root_id(tags::PLANE_POSITION_SEQUENCE).unwrap();
        assert_eq!(tree[sq_id].length(), 0);
        assert_eq!(tree[sq_id].end(), 50);
        assert_eq!(tree[sq_id].children().len(), 1);
        let rows = tree.get(tags::ROWS).unwrap();
        assert_eq!(rows.parent(), None);
        assert_eq!(rows.to_number(), Some(512.));
    }

    #[test]
    fn big_endian_transfer_syntax() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,0060) Modality
            0x00, 0x08, 0x00, 0x60, b'C', b'S', 0x00, 0x02,
            b'C', b'T',
            // (0028,0010) Rows
            0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02,
            0x02, 0x00,
        ];
        let options = ParseOptions::default().big_endian_transfer_syntax(true);
        let mut reader = ElementReader::new(Cursor::new(data), options).unwrap();
        assert!(reader.read_element().unwrap().is_some());
        assert_eq!(reader.context().byte_order, Endianness::Big);
        let tree = reader.read_to_end().unwrap();
        assert_eq!(tree.get(tags::MODALITY).unwrap().to_str().as_deref(), Some("CT"));
        assert_eq!(tree.get(tags::ROWS).unwrap().value(), &Value::U16(512));
    }

    #[test]
    fn invalid_length_at_top_level_is_fatal() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0009,1010), VR: OB, len: 0x01010000 LE, 257 BE
            0x09, 0x00, 0x10, 0x10, b'O', b'B', 0x00, 0x00,
            0x00, 0x00, 0x01, 0x01,
            0x00, 0x00, 0x00, 0x00,
        ];
        let reader = ElementReader::new(Cursor::new(data), ParseOptions::default()).unwrap();
        let e = reader.read_to_end().unwrap_err();
        assert!(matches!(e, Error::InvalidTagLength { .. }), "{:?}", e);
    }

    #[test]
    fn invalid_length_in_sequence_is_recovered() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // 0: (0020,9113) PlanePositionSequence, len: 20
            0x20, 0x00, 0x13, 0x91, b'S', b'Q', 0x00, 0x00,
            0x14, 0x00, 0x00, 0x00,
            // 12: (FFFE,E000) Item, len: 12
            0xFE, 0xFF, 0x00, 0xE0, 0x0C, 0x00, 0x00, 0x00,
            // 20: (0009,1010), VR: OB, len: 0x01010000 LE, 257 BE
            0x09, 0x00, 0x10, 0x10, b'O', b'B', 0x00, 0x00,
            0x00, 0x00, 0x01, 0x01,
            // 32: (0028,0010) Rows
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
        ];
        let tree = read_all(data, ParseOptions::default());
        let sq_id = tree.root_id(tags::PLANE_POSITION_SEQUENCE).unwrap();
        assert!(tree[sq_id].children().is_empty());
        assert_eq!(tree[sq_id].end(), 32);
        assert_eq!(tree.get(tags::ROWS).unwrap().to_number(), Some(512.));
    }

    #[test]
    fn pixel_data_is_skipped_unless_requested() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (7FE0,0010) PixelData, VR: OW, len: 4
            0xE0, 0x7F, 0x10, 0x00, b'O', b'W', 0x00, 0x00,
            0x04, 0x00, 0x00, 0x00,
            0x01, 0x00, 0x02, 0x00,
        ];
        let tree = read_all(data, ParseOptions::default());
        let pixels = tree.get(tags::PIXEL_DATA).unwrap();
        assert_eq!(pixels.value(), &Value::Empty);
        assert_eq!(pixels.byte_range(), 12..16);

        let tree = read_all(data, ParseOptions::default().read_pixel_data(true));
        let pixels = tree.get(tags::PIXEL_DATA).unwrap();
        assert_eq!(pixels.value(), &Value::U16s(smallvec![1, 2]));
    }

    #[test]
    fn specific_character_set_applies_to_text() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0008,0005) SpecificCharacterSet
            0x08, 0x00, 0x05, 0x00, b'C', b'S', 0x0A, 0x00,
            b'I', b'S', b'O', b'_', b'I', b'R', b' ', b'1', b'9', b'2',
            // (0010,0010) PatientName
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
            b'M', 0xC3, 0xBC, b'l', b'l', b'e', b'r', b' ',
        ];
        let tree = read_all(data, ParseOptions::default());
        assert_eq!(
            tree.get(tags::PATIENT_NAME).unwrap().to_str().as_deref(),
            Some("M\u{FC}ller")
        );
    }

    #[test]
    fn read_until_stops_at_match() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x08, 0x00, 0x60, 0x00, b'C', b'S', 0x02, 0x00,
            b'M', b'R',
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x02,
            0x28, 0x00, 0x11, 0x00, b'U', b'S', 0x02, 0x00,
            0x00, 0x01,
        ];
        let mut reader = ElementReader::new(Cursor::new(data), ParseOptions::default()).unwrap();
        let id = reader
            .read_until(|node| node.tag() == tags::ROWS)
            .unwrap()
            .unwrap();
        assert_eq!(reader.tree()[id].to_number(), Some(512.));
        assert_eq!(reader.position(), 20);
        assert!(reader.tree().get(tags::COLUMNS).is_none());

        assert_eq!(reader.read_until(|_| false).unwrap(), None);
        assert_eq!(reader.tree().roots().len(), 3);
    }

    #[test]
    fn short_tail_is_the_end() {
        let data: &[u8] = &[0x08, 0x00, 0x60, 0x00, b'C'];
        let mut reader = ElementReader::new(Cursor::new(data), ParseOptions::default()).unwrap();
        assert_eq!(reader.read_element().unwrap(), None);
        assert!(reader.into_tree().is_empty());
    }
}

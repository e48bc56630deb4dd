//! Series assembly over synthetic files on disk.
use dcmstack_dictionary_std::tags;
use dcmstack_parser::Endianness;
use dcmstack_series::{
    load_series, open_file, try_load_series, Compression, FileDescriptor, OpenFileOptions,
    ReadPreamble, SeriesSummary,
};
use std::path::PathBuf;

const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";

/// A minimal explicit VR encoder for building test files.
struct Writer {
    out: Vec<u8>,
    big_endian: bool,
}

impl Writer {
    fn new() -> Self {
        Writer {
            out: Vec::new(),
            big_endian: false,
        }
    }

    fn with_preamble() -> Self {
        let mut w = Writer::new();
        w.out.extend_from_slice(&[0; 128]);
        w.out.extend_from_slice(b"DICM");
        w
    }

    fn u16(&mut self, v: u16) {
        if self.big_endian {
            self.out.extend_from_slice(&v.to_be_bytes());
        } else {
            self.out.extend_from_slice(&v.to_le_bytes());
        }
    }

    fn u32(&mut self, v: u32) {
        if self.big_endian {
            self.out.extend_from_slice(&v.to_be_bytes());
        } else {
            self.out.extend_from_slice(&v.to_le_bytes());
        }
    }

    fn element(&mut self, tag: dcmstack_core::Tag, vr: &[u8; 2], value: &[u8]) -> &mut Self {
        self.u16(tag.group());
        self.u16(tag.element());
        self.out.extend_from_slice(vr);
        let len = value.len() as u32;
        if matches!(vr, b"OB" | b"OW" | b"SQ" | b"UN" | b"UT") {
            self.out.extend_from_slice(&[0, 0]);
            self.u32(len);
        } else {
            self.u16(len as u16);
        }
        self.out.extend_from_slice(value);
        self
    }

    fn text(&mut self, tag: dcmstack_core::Tag, vr: &[u8; 2], value: &str) -> &mut Self {
        let mut bytes = value.as_bytes().to_vec();
        if bytes.len() % 2 == 1 {
            bytes.push(if vr == b"UI" { 0 } else { b' ' });
        }
        self.element(tag, vr, &bytes)
    }

    fn us(&mut self, tag: dcmstack_core::Tag, value: u16) -> &mut Self {
        let bytes = if self.big_endian {
            value.to_be_bytes()
        } else {
            value.to_le_bytes()
        };
        self.element(tag, b"US", &bytes)
    }

    fn meta(&mut self, transfer_syntax: &str) -> &mut Self {
        self.text(tags::TRANSFER_SYNTAX_UID, b"UI", transfer_syntax)
    }

    fn image(&mut self, image_type: &str, rows: u16, columns: u16) -> &mut Self {
        self.text(tags::IMAGE_TYPE, b"CS", image_type)
            .us(tags::ROWS, rows)
            .us(tags::COLUMNS, columns)
            .us(tags::BITS_ALLOCATED, 8)
    }

    fn pixels(&mut self, len: usize) -> &mut Self {
        self.element(tags::PIXEL_DATA, b"OB", &vec![0x55; len])
    }
}

fn write(dir: &tempfile::TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

#[test]
fn open_file_with_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = Writer::with_preamble();
    w.meta(EXPLICIT_VR_LITTLE_ENDIAN)
        .text(tags::IMAGE_POSITION_PATIENT, b"DS", "-100\\-100\\42.5")
        .image("ORIGINAL\\PRIMARY\\AXIAL", 4, 4)
        .pixels(16);
    let pixel_offset = (w.out.len() - 16) as u64;
    let path = write(&dir, "image.dcm", &w.out);

    let file = open_file(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    let ts = file.transfer_syntax().unwrap();
    assert_eq!(ts.uid(), EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(ts.compression(), Compression::None);
    // offsets are relative to the start of the file
    let pixels = file.tree().get(tags::PIXEL_DATA).unwrap();
    assert_eq!(pixels.value_start(), pixel_offset);

    let descriptor = FileDescriptor::from_file(&file).unwrap();
    assert_eq!(descriptor.image_type(), "ORIGINAL\\PRIMARY\\AXIAL");
    assert_eq!(descriptor.z_offsets(), &[42.5]);
    assert_eq!(descriptor.tiles().len(), 1);
    assert_eq!(descriptor.tiles()[0].offset, pixel_offset);
    assert_eq!(descriptor.tiles()[0].len, 16);
}

#[test]
fn open_file_without_preamble() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = Writer::new();
    w.meta(EXPLICIT_VR_LITTLE_ENDIAN)
        .image("ORIGINAL\\PRIMARY", 2, 3)
        .pixels(6);
    let path = write(&dir, "raw.dcm", &w.out);

    for read_preamble in [ReadPreamble::Auto, ReadPreamble::Never] {
        let options = OpenFileOptions::new().read_preamble(read_preamble);
        let d = FileDescriptor::open(&path, &options).unwrap();
        assert_eq!((d.size_x(), d.size_y()), (3, 2));
    }
}

#[test]
fn big_endian_data_set() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = Writer::with_preamble();
    // the file meta group is always little endian
    w.meta(EXPLICIT_VR_BIG_ENDIAN);
    w.big_endian = true;
    w.image("ORIGINAL\\PRIMARY\\AXIAL", 300, 2).pixels(600);
    let path = write(&dir, "be.dcm", &w.out);

    let file = open_file(&path).unwrap();
    assert!(file.transfer_syntax().unwrap().is_big_endian());
    assert_eq!(file.byte_order(), Endianness::Big);

    let d = FileDescriptor::from_file(&file).unwrap();
    assert_eq!((d.size_x(), d.size_y()), (2, 300));
    assert_eq!(d.dimensions().byte_order, Endianness::Big);
    assert_eq!(d.tiles().len(), 1);
}

#[test]
fn encapsulated_pixel_data_is_one_tile() {
    let dir = tempfile::tempdir().unwrap();
    let mut w = Writer::with_preamble();
    w.meta(JPEG_BASELINE)
        .image("ORIGINAL\\PRIMARY", 64, 64)
        .pixels(10);
    let path = write(&dir, "jpeg.dcm", &w.out);

    let d = FileDescriptor::open(&path, &OpenFileOptions::new()).unwrap();
    assert_eq!(d.dimensions().compression, Compression::Jpeg);
    assert_eq!(d.tiles().len(), 1);
    assert_eq!(d.tiles()[0].len, 10);
    assert_eq!((d.tiles()[0].width, d.tiles()[0].height), (64, 64));
}

#[test]
fn load_and_sort_series() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for (name, image_type, z) in [
        ("label.dcm", "DERIVED\\PRIMARY\\LABEL\\NONE", "3"),
        ("resampled.dcm", "DERIVED\\PRIMARY\\VOLUME\\RESAMPLED", "2"),
        ("original.dcm", "ORIGINAL\\PRIMARY\\VOLUME\\NONE", "1"),
    ] {
        let mut w = Writer::with_preamble();
        w.meta(EXPLICIT_VR_LITTLE_ENDIAN)
            .text(tags::SLICE_LOCATION, b"DS", z)
            .image(image_type, 2, 2)
            .pixels(4);
        paths.push(write(&dir, name, &w.out));
    }
    // not an image: no rows or columns
    let mut w = Writer::with_preamble();
    w.meta(EXPLICIT_VR_LITTLE_ENDIAN)
        .text(tags::MODALITY, b"CS", "SR");
    paths.push(write(&dir, "report.dcm", &w.out));

    let series = load_series(&paths, &OpenFileOptions::new());
    let names: Vec<_> = series
        .iter()
        .map(|d| d.path().file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["original.dcm", "resampled.dcm", "label.dcm"]);

    let summary = SeriesSummary::from_sorted(&series);
    assert_eq!(summary.files, 3);
    assert_eq!(summary.planes, 3);
    assert_eq!(summary.z_offsets, vec![1., 2., 3.]);

    let e = try_load_series(&paths, &OpenFileOptions::new()).unwrap_err();
    assert!(matches!(e, dcmstack_series::Error::MissingAttribute { .. }));

    let ok = try_load_series(&paths[..3], &OpenFileOptions::new()).unwrap();
    assert_eq!(ok, series);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let e = open_file(dir.path().join("nope.dcm")).unwrap_err();
    assert!(matches!(e, dcmstack_series::Error::OpenFile { .. }));
}

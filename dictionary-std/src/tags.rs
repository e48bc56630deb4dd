//! Attribute tag constants, and the table of entries
//! backing the standard data element dictionary.

use dcmstack_core::dictionary::DictionaryEntryRef;
use dcmstack_core::header::Tag;
use dcmstack_core::header::VR::*;

/// FileMetaInformationGroupLength (0002,0000) UL
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// FileMetaInformationVersion (0002,0001) OB
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// MediaStorageSOPClassUID (0002,0002) UI
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// MediaStorageSOPInstanceUID (0002,0003) UI
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// TransferSyntaxUID (0002,0010) UI
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// ImplementationClassUID (0002,0012) UI
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// ImplementationVersionName (0002,0013) SH
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// SpecificCharacterSet (0008,0005) CS
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// ImageType (0008,0008) CS
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// SOPClassUID (0008,0016) UI
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOPInstanceUID (0008,0018) UI
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// StudyDate (0008,0020) DA
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// SeriesDate (0008,0021) DA
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// AcquisitionDate (0008,0022) DA
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// StudyTime (0008,0030) TM
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// SeriesTime (0008,0031) TM
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// AcquisitionTime (0008,0032) TM
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Modality (0008,0060) CS
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070) LO
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// CodeValue (0008,0100) SH
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
/// CodingSchemeDesignator (0008,0102) SH
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
/// CodeMeaning (0008,0104) LO
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
/// ProcedureCodeSequence (0008,1032) SQ
pub const PROCEDURE_CODE_SEQUENCE: Tag = Tag(0x0008, 0x1032);
/// SeriesDescription (0008,103E) LO
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// ManufacturerModelName (0008,1090) LO
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// AnatomicRegionSequence (0008,2218) SQ
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
/// PatientName (0010,0010) PN
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// PatientID (0010,0020) LO
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// PatientBirthDate (0010,0030) DA
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// ScanningSequence (0018,0020) CS
pub const SCANNING_SEQUENCE: Tag = Tag(0x0018, 0x0020);
/// SliceThickness (0018,0050) DS
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// SpacingBetweenSlices (0018,0088) DS
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// SequenceOfUltrasoundRegions (0018,6011) SQ
pub const SEQUENCE_OF_ULTRASOUND_REGIONS: Tag = Tag(0x0018, 0x6011);
/// RegionSpatialFormat (0018,6012) US
pub const REGION_SPATIAL_FORMAT: Tag = Tag(0x0018, 0x6012);
/// RegionDataType (0018,6014) US
pub const REGION_DATA_TYPE: Tag = Tag(0x0018, 0x6014);
/// StudyInstanceUID (0020,000D) UI
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// SeriesInstanceUID (0020,000E) UI
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// SeriesNumber (0020,0011) IS
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// AcquisitionNumber (0020,0012) IS
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// InstanceNumber (0020,0013) IS
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// ImagePositionPatient (0020,0032) DS
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// ImageOrientationPatient (0020,0037) DS
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// SliceLocation (0020,1041) DS
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// ImageComments (0020,4000) LT
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);
/// FrameContentSequence (0020,9111) SQ
pub const FRAME_CONTENT_SEQUENCE: Tag = Tag(0x0020, 0x9111);
/// PlanePositionSequence (0020,9113) SQ
pub const PLANE_POSITION_SEQUENCE: Tag = Tag(0x0020, 0x9113);
/// DimensionIndexValues (0020,9157) UL
pub const DIMENSION_INDEX_VALUES: Tag = Tag(0x0020, 0x9157);
/// SamplesPerPixel (0028,0002) US
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// PhotometricInterpretation (0028,0004) CS
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// PlanarConfiguration (0028,0006) US
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// NumberOfFrames (0028,0008) IS
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010) US
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011) US
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// PixelSpacing (0028,0030) DS
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// PixelAspectRatio (0028,0034) IS
pub const PIXEL_ASPECT_RATIO: Tag = Tag(0x0028, 0x0034);
/// BitsAllocated (0028,0100) US
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// BitsStored (0028,0101) US
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// HighBit (0028,0102) US
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// PixelRepresentation (0028,0103) US
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// WindowCenter (0028,1050) DS
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// WindowWidth (0028,1051) DS
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// RescaleIntercept (0028,1052) DS
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// RescaleSlope (0028,1053) DS
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// RedPaletteColorLookupTableData (0028,1201) OW
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// GreenPaletteColorLookupTableData (0028,1202) OW
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// BluePaletteColorLookupTableData (0028,1203) OW
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// SegmentedRedPaletteColorLookupTableData (0028,1221) OW
pub const SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1221);
/// SegmentedGreenPaletteColorLookupTableData (0028,1222) OW
pub const SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1222);
/// SegmentedBluePaletteColorLookupTableData (0028,1223) OW
pub const SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1223);
/// LUTData (0028,3006) US
pub const LUT_DATA: Tag = Tag(0x0028, 0x3006);
/// PixelMeasuresSequence (0028,9110) SQ
pub const PIXEL_MEASURES_SEQUENCE: Tag = Tag(0x0028, 0x9110);
/// AcquisitionContextSequence (0040,0555) SQ
pub const ACQUISITION_CONTEXT_SEQUENCE: Tag = Tag(0x0040, 0x0555);
/// TotalPixelMatrixColumns (0048,0006) UL
pub const TOTAL_PIXEL_MATRIX_COLUMNS: Tag = Tag(0x0048, 0x0006);
/// TotalPixelMatrixRows (0048,0007) UL
pub const TOTAL_PIXEL_MATRIX_ROWS: Tag = Tag(0x0048, 0x0007);
/// PlanePositionSlideSequence (0048,021A) SQ
pub const PLANE_POSITION_SLIDE_SEQUENCE: Tag = Tag(0x0048, 0x021A);
/// ColumnPositionInTotalImagePixelMatrix (0048,021E) SL
pub const COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021E);
/// RowPositionInTotalImagePixelMatrix (0048,021F) SL
pub const ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX: Tag = Tag(0x0048, 0x021F);
/// IconImageSequence (0088,0200) SQ
pub const ICON_IMAGE_SEQUENCE: Tag = Tag(0x0088, 0x0200);
/// PresentationLUTShape (2050,0020) CS
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);
/// SharedFunctionalGroupsSequence (5200,9229) SQ
pub const SHARED_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9229);
/// PerFrameFunctionalGroupsSequence (5200,9230) SQ
pub const PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE: Tag = Tag(0x5200, 0x9230);
/// PixelData (7FE0,0010) OW
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
/// Item (FFFE,E000) UN
pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
/// ItemDelimitationItem (FFFE,E00D) UN
pub const ITEM_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE00D);
/// SequenceDelimitationItem (FFFE,E0DD) UN
pub const SEQUENCE_DELIMITATION_ITEM: Tag = Tag(0xFFFE, 0xE0DD);

/// The dictionary entries, in tag order.
#[rustfmt::skip]
pub(crate) const ENTRIES: &[DictionaryEntryRef<'static>] = &[
    DictionaryEntryRef { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: UL },
    DictionaryEntryRef { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: OB },
    DictionaryEntryRef { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: UI },
    DictionaryEntryRef { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: UI },
    DictionaryEntryRef { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: UI },
    DictionaryEntryRef { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: UI },
    DictionaryEntryRef { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: SH },
    DictionaryEntryRef { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: CS },
    DictionaryEntryRef { tag: IMAGE_TYPE, alias: "ImageType", vr: CS },
    DictionaryEntryRef { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: UI },
    DictionaryEntryRef { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: UI },
    DictionaryEntryRef { tag: STUDY_DATE, alias: "StudyDate", vr: DA },
    DictionaryEntryRef { tag: SERIES_DATE, alias: "SeriesDate", vr: DA },
    DictionaryEntryRef { tag: ACQUISITION_DATE, alias: "AcquisitionDate", vr: DA },
    DictionaryEntryRef { tag: STUDY_TIME, alias: "StudyTime", vr: TM },
    DictionaryEntryRef { tag: SERIES_TIME, alias: "SeriesTime", vr: TM },
    DictionaryEntryRef { tag: ACQUISITION_TIME, alias: "AcquisitionTime", vr: TM },
    DictionaryEntryRef { tag: MODALITY, alias: "Modality", vr: CS },
    DictionaryEntryRef { tag: MANUFACTURER, alias: "Manufacturer", vr: LO },
    DictionaryEntryRef { tag: CODE_VALUE, alias: "CodeValue", vr: SH },
    DictionaryEntryRef { tag: CODING_SCHEME_DESIGNATOR, alias: "CodingSchemeDesignator", vr: SH },
    DictionaryEntryRef { tag: CODE_MEANING, alias: "CodeMeaning", vr: LO },
    DictionaryEntryRef { tag: PROCEDURE_CODE_SEQUENCE, alias: "ProcedureCodeSequence", vr: SQ },
    DictionaryEntryRef { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: LO },
    DictionaryEntryRef { tag: MANUFACTURER_MODEL_NAME, alias: "ManufacturerModelName", vr: LO },
    DictionaryEntryRef { tag: ANATOMIC_REGION_SEQUENCE, alias: "AnatomicRegionSequence", vr: SQ },
    DictionaryEntryRef { tag: PATIENT_NAME, alias: "PatientName", vr: PN },
    DictionaryEntryRef { tag: PATIENT_ID, alias: "PatientID", vr: LO },
    DictionaryEntryRef { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: DA },
    DictionaryEntryRef { tag: SCANNING_SEQUENCE, alias: "ScanningSequence", vr: CS },
    DictionaryEntryRef { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: DS },
    DictionaryEntryRef { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: DS },
    DictionaryEntryRef { tag: SEQUENCE_OF_ULTRASOUND_REGIONS, alias: "SequenceOfUltrasoundRegions", vr: SQ },
    DictionaryEntryRef { tag: REGION_SPATIAL_FORMAT, alias: "RegionSpatialFormat", vr: US },
    DictionaryEntryRef { tag: REGION_DATA_TYPE, alias: "RegionDataType", vr: US },
    DictionaryEntryRef { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: UI },
    DictionaryEntryRef { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: UI },
    DictionaryEntryRef { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: IS },
    DictionaryEntryRef { tag: ACQUISITION_NUMBER, alias: "AcquisitionNumber", vr: IS },
    DictionaryEntryRef { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: IS },
    DictionaryEntryRef { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: DS },
    DictionaryEntryRef { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: DS },
    DictionaryEntryRef { tag: SLICE_LOCATION, alias: "SliceLocation", vr: DS },
    DictionaryEntryRef { tag: IMAGE_COMMENTS, alias: "ImageComments", vr: LT },
    DictionaryEntryRef { tag: FRAME_CONTENT_SEQUENCE, alias: "FrameContentSequence", vr: SQ },
    DictionaryEntryRef { tag: PLANE_POSITION_SEQUENCE, alias: "PlanePositionSequence", vr: SQ },
    DictionaryEntryRef { tag: DIMENSION_INDEX_VALUES, alias: "DimensionIndexValues", vr: UL },
    DictionaryEntryRef { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: US },
    DictionaryEntryRef { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: CS },
    DictionaryEntryRef { tag: PLANAR_CONFIGURATION, alias: "PlanarConfiguration", vr: US },
    DictionaryEntryRef { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: IS },
    DictionaryEntryRef { tag: ROWS, alias: "Rows", vr: US },
    DictionaryEntryRef { tag: COLUMNS, alias: "Columns", vr: US },
    DictionaryEntryRef { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: DS },
    DictionaryEntryRef { tag: PIXEL_ASPECT_RATIO, alias: "PixelAspectRatio", vr: IS },
    DictionaryEntryRef { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: US },
    DictionaryEntryRef { tag: BITS_STORED, alias: "BitsStored", vr: US },
    DictionaryEntryRef { tag: HIGH_BIT, alias: "HighBit", vr: US },
    DictionaryEntryRef { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: US },
    DictionaryEntryRef { tag: WINDOW_CENTER, alias: "WindowCenter", vr: DS },
    DictionaryEntryRef { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: DS },
    DictionaryEntryRef { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: DS },
    DictionaryEntryRef { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: DS },
    DictionaryEntryRef { tag: RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "RedPaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "GreenPaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "BluePaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: SEGMENTED_RED_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedRedPaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: SEGMENTED_GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedGreenPaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: SEGMENTED_BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA, alias: "SegmentedBluePaletteColorLookupTableData", vr: OW },
    DictionaryEntryRef { tag: LUT_DATA, alias: "LUTData", vr: US },
    DictionaryEntryRef { tag: PIXEL_MEASURES_SEQUENCE, alias: "PixelMeasuresSequence", vr: SQ },
    DictionaryEntryRef { tag: ACQUISITION_CONTEXT_SEQUENCE, alias: "AcquisitionContextSequence", vr: SQ },
    DictionaryEntryRef { tag: TOTAL_PIXEL_MATRIX_COLUMNS, alias: "TotalPixelMatrixColumns", vr: UL },
    DictionaryEntryRef { tag: TOTAL_PIXEL_MATRIX_ROWS, alias: "TotalPixelMatrixRows", vr: UL },
    DictionaryEntryRef { tag: PLANE_POSITION_SLIDE_SEQUENCE, alias: "PlanePositionSlideSequence", vr: SQ },
    DictionaryEntryRef { tag: COLUMN_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX, alias: "ColumnPositionInTotalImagePixelMatrix", vr: SL },
    DictionaryEntryRef { tag: ROW_POSITION_IN_TOTAL_IMAGE_PIXEL_MATRIX, alias: "RowPositionInTotalImagePixelMatrix", vr: SL },
    DictionaryEntryRef { tag: ICON_IMAGE_SEQUENCE, alias: "IconImageSequence", vr: SQ },
    DictionaryEntryRef { tag: PRESENTATION_LUT_SHAPE, alias: "PresentationLUTShape", vr: CS },
    DictionaryEntryRef { tag: SHARED_FUNCTIONAL_GROUPS_SEQUENCE, alias: "SharedFunctionalGroupsSequence", vr: SQ },
    DictionaryEntryRef { tag: PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, alias: "PerFrameFunctionalGroupsSequence", vr: SQ },
    DictionaryEntryRef { tag: PIXEL_DATA, alias: "PixelData", vr: OW },
    DictionaryEntryRef { tag: ITEM, alias: "Item", vr: UN },
    DictionaryEntryRef { tag: ITEM_DELIMITATION_ITEM, alias: "ItemDelimitationItem", vr: UN },
    DictionaryEntryRef { tag: SEQUENCE_DELIMITATION_ITEM, alias: "SequenceDelimitationItem", vr: UN },
];

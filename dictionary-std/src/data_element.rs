//! The standard data element dictionary.
use crate::tags::ENTRIES;
use dcmstack_core::dictionary::{DataDictionary, DictionaryEntryRef};
use dcmstack_core::header::Tag;
use dcmstack_core::VR;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static DICT: Lazy<StandardDataDictionaryRegistry> = Lazy::new(init_dictionary);

/// Retrieve a singleton instance of the standard dictionary registry.
///
/// Note that one does not generally have to call this
/// unless when retrieving the underlying registry is important.
/// The unit type [`StandardDataDictionary`]
/// already provides a lazy loaded singleton implementing the necessary traits.
#[inline]
pub fn registry() -> &'static StandardDataDictionaryRegistry {
    &DICT
}

/// The data struct actually containing the standard dictionary.
///
/// This structure is made opaque via the unit type [`StandardDataDictionary`],
/// which provides a lazy loaded singleton.
#[derive(Debug)]
pub struct StandardDataDictionaryRegistry {
    /// mapping: name → entry
    by_name: HashMap<&'static str, &'static DictionaryEntryRef<'static>>,
    /// mapping: tag → entry
    by_tag: HashMap<Tag, &'static DictionaryEntryRef<'static>>,
}

impl StandardDataDictionaryRegistry {
    fn new() -> StandardDataDictionaryRegistry {
        StandardDataDictionaryRegistry {
            by_name: HashMap::with_capacity(ENTRIES.len()),
            by_tag: HashMap::with_capacity(ENTRIES.len()),
        }
    }

    /// record the given dictionary entry reference
    fn index(&mut self, entry: &'static DictionaryEntryRef<'static>) -> &mut Self {
        self.by_name.insert(entry.alias, entry);
        self.by_tag.insert(entry.tag, entry);
        self
    }

    /// Retrieve the number of indexed attributes.
    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    /// Whether the registry holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }
}

/// Generic Group Length dictionary entry.
static GROUP_LENGTH_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0000, 0x0000),
    alias: "GenericGroupLength",
    vr: VR::UL,
};

/// Generic Private Creator dictionary entry.
static PRIVATE_CREATOR_ENTRY: DictionaryEntryRef<'static> = DictionaryEntryRef {
    tag: Tag(0x0009, 0x0010),
    alias: "PrivateCreator",
    vr: VR::LO,
};

/// A data element dictionary which consults
/// the library's global DICOM attribute registry.
///
/// This is the type which would generally be used
/// whenever a data element dictionary is needed,
/// such as when decoding DICOM files.
///
/// The dictionary index is automatically initialized upon the first use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StandardDataDictionary;

impl StandardDataDictionary {
    fn indexed_tag(tag: Tag) -> Option<&'static DictionaryEntryRef<'static>> {
        registry().by_tag.get(&tag).cloned().or_else(|| {
            // check for private creator
            if tag.0 & 1 == 1 && (0x0010..=0x00FF).contains(&tag.1) {
                return Some(&PRIVATE_CREATOR_ENTRY);
            }
            // check for group length
            if tag.element() == 0x0000 {
                return Some(&GROUP_LENGTH_ENTRY);
            }

            None
        })
    }
}

impl DataDictionary for StandardDataDictionary {
    type Entry = DictionaryEntryRef<'static>;

    fn by_name(&self, name: &str) -> Option<&Self::Entry> {
        registry().by_name.get(name).cloned()
    }

    fn by_tag(&self, tag: Tag) -> Option<&Self::Entry> {
        StandardDataDictionary::indexed_tag(tag)
    }
}

fn init_dictionary() -> StandardDataDictionaryRegistry {
    let mut d = StandardDataDictionaryRegistry::new();
    for entry in ENTRIES {
        d.index(entry);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::StandardDataDictionary;
    use crate::tags;
    use dcmstack_core::dictionary::{DataDictionary, DictionaryEntry, DictionaryEntryRef};
    use dcmstack_core::header::{Tag, VR};

    #[test]
    fn smoke_test() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_name("PatientName"),
            Some(&DictionaryEntryRef {
                tag: Tag(0x0010, 0x0010),
                alias: "PatientName",
                vr: VR::PN,
            })
        );

        assert_eq!(
            dict.by_name("Modality"),
            Some(&DictionaryEntryRef {
                tag: Tag(0x0008, 0x0060),
                alias: "Modality",
                vr: VR::CS,
            })
        );

        let pixel_data = dict
            .by_tag(Tag(0x7FE0, 0x0010))
            .expect("Pixel Data attribute should exist");
        eprintln!("{:X?}", pixel_data.tag);
        assert_eq!(pixel_data.tag, Tag(0x7FE0, 0x0010));
        assert_eq!(pixel_data.alias, "PixelData");
        assert!(pixel_data.vr == VR::OW);
    }

    #[test]
    fn constants_available() {
        assert_eq!(tags::PATIENT_NAME, Tag(0x0010, 0x0010));
        assert_eq!(tags::MODALITY, Tag(0x0008, 0x0060));
        assert_eq!(tags::PIXEL_DATA, Tag(0x7FE0, 0x0010));
        assert_eq!(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, Tag(0x5200, 0x9230));
        assert_eq!(tags::SEQUENCE_DELIMITATION_ITEM, Tag(0xFFFE, 0xE0DD));
    }

    #[test]
    fn entries_are_sorted_and_unique() {
        let tags: Vec<Tag> = crate::tags::ENTRIES.iter().map(|e| e.tag()).collect();
        let mut sorted = tags.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(tags, sorted);
        assert_eq!(super::registry().len(), tags.len());
    }

    #[test]
    fn has_group_length_tags() {
        let dict = StandardDataDictionary::default();

        assert_eq!(
            dict.by_tag(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .map(|e| e.alias()),
            Some("FileMetaInformationGroupLength"),
        );

        // generic group length
        let generic = dict.by_tag(Tag(0x7FE0, 0x0000)).unwrap();
        assert_eq!(generic.alias(), "GenericGroupLength");
        assert_eq!(generic.vr(), VR::UL);
    }

    #[test]
    fn has_private_creator() {
        let dict = StandardDataDictionary::default();

        for tag in [
            Tag(0x0009, 0x0010),
            Tag(0x0009, 0x0011),
            Tag(0x000B, 0x0010),
            Tag(0x00ED, 0x00FF),
        ] {
            let entry = dict.by_tag(tag).unwrap();
            assert_eq!(entry.alias(), "PrivateCreator");
            assert_eq!(entry.vr(), VR::LO);
        }

        // private data elements are not known
        assert_eq!(dict.by_tag(Tag(0x0009, 0x1001)), None);
    }
}

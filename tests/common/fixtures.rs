//! Static places documents used across harnesses.

use numloc::campus::PlaceStore;
use std::path::{Path, PathBuf};

/// A small campus: main building, three buildings, two dormitories and a
/// library. Every alias is unique across entries. Building 3 carries an
/// explicit map link; nothing else does.
pub const CAMPUS_YAML: &str = r#"
places:
  - key: num_main
    title: МУИС-ийн Хичээлийн төв байр
    query: National University of Mongolia, Ulaanbaatar
    aliases: [МУИС, MUIS, төв байр]
  - key: num_building_1
    title: МУИС 1-р байр
    query: NUM Building 1, Ulaanbaatar
    aliases: [нэгдүгээр байр]
  - key: num_building_2
    title: МУИС 2-р байр
    query: NUM Building 2, Ulaanbaatar
    aliases: [2-р байр, хоёрдугаар байр]
  - key: num_building_3
    title: МУИС 3-р байр
    query: NUM Building 3, Ulaanbaatar
    url: https://maps.app.goo.gl/num3
  - key: num_dorm_2
    title: 2-р дотуур байр
    query: NUM Dormitory 2, Ulaanbaatar
    aliases: [dorm two]
  - key: num_dorm_4
    title: 4-р дотуур байр
    query: NUM Dormitory 4, Ulaanbaatar
    aliases: [dorm four, "  Дөрөвдүгээр Дотуур  "]
  - key: num_library
    title: Төв номын сан
    query: NUM Central Library, Ulaanbaatar
    aliases: [library, номын сан]
"#;

/// Keys of [`CAMPUS_YAML`], in file order.
pub const CAMPUS_KEYS: &[&str] = &[
    "num_main",
    "num_building_1",
    "num_building_2",
    "num_building_3",
    "num_dorm_2",
    "num_dorm_4",
    "num_library",
];

/// Two entries share the alias "шинэ байр"; the second one must win.
pub const DUPLICATE_ALIAS_YAML: &str = r#"
places:
  - key: old_hall
    title: Хуучин байр
    query: Old hall
    aliases: [шинэ байр, old]
  - key: new_hall
    title: Шинэ танхим
    query: New hall
    aliases: ["ШИНЭ БАЙР"]
"#;

/// Every record is missing at least one required field.
pub const INVALID_ONLY_YAML: &str = r#"
places:
  - key: no_title
    query: somewhere
  - title: No key
    query: somewhere
  - key: no_query
    title: No query
  - key: "   "
    title: Blank key
    query: somewhere
  - just a string
"#;

/// Store built from [`CAMPUS_YAML`].
pub fn campus_store() -> PlaceStore {
    PlaceStore::from_yaml_str(CAMPUS_YAML)
}

/// Write `yaml` to `locations.yml` inside `dir` and return the path.
pub fn write_places_file(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("locations.yml");
    std::fs::write(&path, yaml).expect("write places fixture");
    path
}

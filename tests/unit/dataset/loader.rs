use super::*;
use crate::foundation::core::Coord;

const DATASET: &str = r#"
{
  "time": [0.0, 2678400.0, null],
  "x": [0.0, 1000.0],
  "y": [40000.0, 80000.0],
  "fields": {
    "temperature": { "shape": [3, 2, 2], "data": [1, 2, 3, null, 5, 6, 7, 8, 9, 10, 11, 12] },
    "salinity": { "shape": [3, 2, 2], "data": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0] }
  }
}
"#;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "fieldmovie_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn nulls_become_nan_and_unrequested_fields_are_dropped() {
    let ds = read_dataset_json(DATASET.as_bytes(), &["temperature"]).unwrap();
    assert_eq!(ds.time.len(), 3);
    assert!(ds.time[2].is_nan());
    assert!(ds.field("salinity").is_none());

    let slice = ds.field("temperature").unwrap().slice(0).unwrap();
    assert_eq!(slice.get(0, 0), 1.0);
    assert!(slice.get(1, 1).is_nan());
    assert_eq!(ds.plot_range(Coord::Y), Some((40.0, 80.0)));
    assert!(ds.z.is_none());
}

#[test]
fn missing_variable_is_an_error() {
    let err = read_dataset_json(DATASET.as_bytes(), &["velocity"]).unwrap_err();
    assert!(err.to_string().contains("velocity"));
}

#[test]
fn time_count_must_match_field() {
    let json = DATASET.replace("[0.0, 2678400.0, null]", "[0.0, 2678400.0]");
    assert!(read_dataset_json(json.as_bytes(), &["temperature"]).is_err());
}

#[test]
fn json_loader_reads_models_in_order() {
    let tmp = temp_dir("json_loader");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("B.json"), DATASET).unwrap();
    std::fs::write(tmp.join("A.json"), DATASET).unwrap();

    let loader = JsonDatasetLoader::new(&tmp, vec!["B".into(), "A".into()]);
    let set = loader.load(&["temperature"]).unwrap();
    let names: Vec<_> = set.models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);
    assert_eq!(set.max_time, 2678400.0);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn json_loader_names_missing_model() {
    let loader = JsonDatasetLoader::new("/no/such/folder", vec!["ROMS".into()]);
    let err = loader.load(&["temperature"]).unwrap_err();
    assert!(err.to_string().contains("ROMS"));
}

#[test]
fn in_memory_loader_checks_variables() {
    let ds = read_dataset_json(DATASET.as_bytes(), &["temperature"]).unwrap();
    let set = ModelSet::new(vec![NamedDataset {
        name: "A".into(),
        dataset: ds,
    }])
    .unwrap();
    let loader = InMemoryLoader::new(set);
    assert!(loader.load(&["temperature"]).is_ok());
    assert!(loader.load(&["salinity"]).is_err());
}

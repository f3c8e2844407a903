use super::*;

const BASE: &str = r#"
{
  "experiment": { "name": "Ocean0" },
  "models": { "folder": "data", "names": ["COCO", "ROMS"] },
  "movies": {
    "fields": ["temperature"],
    "startYear": 0, "endYear": 1,
    "framesFolder": "frames", "folder": "movies"
  },
  "ffmpeg": {
    "input": ["-framerate", "30"],
    "output": ["-r", "30"],
    "extensions": ["mp4", "avi"]
  },
  "fields": {
    "temperature": { "axes": "xy", "title": "bottom temperature", "limits": [-2.5, 1.0] }
  }
}
"#;

fn parse(json: &str) -> MovieResult<Config> {
    Config::from_reader(json.as_bytes())
}

#[test]
fn parses_and_applies_defaults() {
    let cfg = parse(BASE).unwrap();
    assert_eq!(cfg.constants.s_per_yr, SECONDS_PER_YEAR);
    assert_eq!(cfg.ffmpeg.executable, "ffmpeg");
    let field = cfg.field("temperature").unwrap();
    assert_eq!(field.axes, AxisPair::Xy);
    assert_eq!(field.scale, 1.0);
    assert_eq!(field.cmap, DEFAULT_COLORMAP);
    assert_eq!(
        field.limits(),
        Limits {
            lower: -2.5,
            upper: 1.0
        }
    );
    assert_eq!(cfg.movies.frames_folder, PathBuf::from("frames"));
}

#[test]
fn unknown_axes_value_is_rejected_at_load() {
    let json = BASE.replace(r#""axes": "xy""#, r#""axes": "xx""#);
    let err = parse(&json).unwrap_err();
    assert!(matches!(err, MovieError::Validation(_)));
    assert!(err.to_string().contains("xx"));
}

#[test]
fn unknown_keys_are_rejected() {
    let json = BASE.replace(r#""name": "Ocean0""#, r#""name": "Ocean0", "nmae": "typo""#);
    assert!(parse(&json).is_err());
}

#[test]
fn movie_field_without_section_is_rejected() {
    let json = BASE.replace(r#""fields": ["temperature"]"#, r#""fields": ["salinity"]"#);
    let err = parse(&json).unwrap_err();
    assert!(err.to_string().contains("salinity"));
}

#[test]
fn unknown_colormap_is_rejected() {
    let json = BASE.replace(
        r#""limits": [-2.5, 1.0] }"#,
        r#""limits": [-2.5, 1.0], "cmap": "no_such_map" }"#,
    );
    let err = parse(&json).unwrap_err();
    assert!(err.to_string().contains("no_such_map"));
}

#[test]
fn custom_colormap_names_are_accepted() {
    let json = BASE.replace(
        r#""limits": [-2.5, 1.0] }"#,
        r#""limits": [-2.5, 1.0], "cmap": "thermal_driving" }"#,
    );
    assert!(parse(&json).is_ok());
}

#[test]
fn start_after_end_is_rejected() {
    let json = BASE.replace(r#""startYear": 0"#, r#""startYear": 3"#);
    assert!(parse(&json).is_err());
}

#[test]
fn empty_extension_list_is_rejected() {
    let json = BASE.replace(r#"["mp4", "avi"]"#, "[]");
    assert!(parse(&json).is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = Config::from_path("/no/such/fieldmovie.json").unwrap_err();
    assert!(err.to_string().contains("/no/such/fieldmovie.json"));
}

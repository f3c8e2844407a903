use super::*;
use crate::encode::ffmpeg::RecordingEncoder;
use std::cell::Cell;

const CONFIG: &str = r#"
{
  "experiment": { "name": "Ocean0" },
  "models": { "folder": "data", "names": ["COCO"] },
  "movies": {
    "fields": ["temperature"],
    "startYear": 0, "endYear": 1,
    "framesFolder": "frames", "folder": "movies"
  },
  "ffmpeg": { "extensions": ["mp4"] },
  "fields": {
    "temperature": { "axes": "xz", "title": "temperature", "limits": [-2.0, 1.0] }
  }
}
"#;

struct CountingLoader {
    calls: Cell<usize>,
}

impl DatasetLoader for CountingLoader {
    fn load(&self, _variables: &[&str]) -> MovieResult<ModelSet> {
        self.calls.set(self.calls.get() + 1);
        Err(MovieError::validation("no data in this test"))
    }
}

fn temp_dir(name: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "fieldmovie_movie_{name}_{}_{nanos}",
        std::process::id()
    ))
}

#[test]
fn stage_selection() {
    assert!(Stages::All.renders() && Stages::All.encodes());
    assert!(Stages::FramesOnly.renders() && !Stages::FramesOnly.encodes());
    assert!(!Stages::EncodeOnly.renders() && Stages::EncodeOnly.encodes());
    assert_eq!(Stages::default(), Stages::All);
}

#[test]
fn unknown_field_fails_before_loading() {
    let cfg = Config::from_reader(CONFIG.as_bytes()).unwrap();
    let loader = CountingLoader {
        calls: Cell::new(0),
    };
    let enc = RecordingEncoder::new();
    let fields = vec!["temperature".to_owned(), "salinity".to_owned()];
    let err = run_movies(&cfg, &fields, Stages::All, &loader, &enc).unwrap_err();
    assert!(err.to_string().contains("salinity"));
    assert_eq!(loader.calls.get(), 0);
    assert!(enc.jobs().is_empty());
}

#[test]
fn field_outside_movie_list_is_validated_before_output() {
    let dir = temp_dir("bad_cmap");
    let mut cfg = Config::from_reader(CONFIG.as_bytes()).unwrap();
    cfg.movies.folder = dir.join("movies");
    cfg.movies.frames_folder = dir.join("frames");
    let mut salinity = cfg.fields["temperature"].clone();
    salinity.cmap = "no_such_map".to_owned();
    cfg.fields.insert("salinity".to_owned(), salinity);

    let loader = CountingLoader {
        calls: Cell::new(0),
    };
    let enc = RecordingEncoder::new();
    let fields = vec!["salinity".to_owned()];
    let err = run_movies(&cfg, &fields, Stages::All, &loader, &enc).unwrap_err();

    assert!(matches!(err, MovieError::Validation(_)));
    assert!(err.to_string().contains("no_such_map"));
    assert_eq!(loader.calls.get(), 0);
    assert!(enc.jobs().is_empty());
    assert!(!dir.join("frames").exists());
}

#[test]
fn encode_only_skips_loading() {
    let dir = temp_dir("encode_only");
    let mut cfg = Config::from_reader(CONFIG.as_bytes()).unwrap();
    cfg.movies.folder = dir.join("movies");
    cfg.movies.frames_folder = dir.join("frames");

    let loader = CountingLoader {
        calls: Cell::new(0),
    };
    let enc = RecordingEncoder::new();
    let summary = plot_movie(&cfg, "temperature", Stages::EncodeOnly, &loader, &enc).unwrap();

    assert_eq!(loader.calls.get(), 0);
    assert_eq!(summary.frames, FrameCounts::default());
    assert_eq!(
        summary.movies,
        vec![dir.join("movies").join("Ocean0_temperature.mp4")]
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn loader_errors_propagate() {
    let cfg = Config::from_reader(CONFIG.as_bytes()).unwrap();
    let loader = CountingLoader {
        calls: Cell::new(0),
    };
    let enc = RecordingEncoder::new();
    let err = plot_movies(&cfg, &loader, &enc).unwrap_err();
    assert!(matches!(err, MovieError::Validation(_)));
    assert_eq!(loader.calls.get(), 1);
    assert!(enc.jobs().is_empty());
}

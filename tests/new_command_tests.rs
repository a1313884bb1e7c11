//! `new` command integration tests.
//!
//! These tests drive the full acquire → select → materialize flow through
//! `cli::run_new`, with fixture files, a scripted prompter, and a recording
//! materializer standing in for git.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use wge_cli::cli::{run_new, Acquisition, NewOptions, NewOutcome};
use wge_cli::config::PROJECT_NAME_TOO_SHORT;
use wge_cli::interactive::{ScriptedPrompter, GEOMETRY_LABEL, PROJECT_NAME_LABEL};
use wge_cli::{GeometryType, Materializer, ProjectConfig, TemplateCatalog, TemplateRef, WgeError};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

#[derive(Default)]
struct RecordingMaterializer {
    calls: RefCell<Vec<(TemplateRef, PathBuf)>>,
    fail: bool,
}

impl Materializer for RecordingMaterializer {
    fn materialize(&self, template: &TemplateRef, destination: &Path) -> wge_cli::Result<()> {
        self.calls
            .borrow_mut()
            .push((template.clone(), destination.to_path_buf()));
        if self.fail {
            return Err(WgeError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }
        Ok(())
    }
}

fn options(acquisition: Acquisition) -> NewOptions {
    NewOptions {
        acquisition,
        parent_dir: PathBuf::from("/work"),
        catalog: TemplateCatalog::default(),
        dry_run: false,
        quiet: false,
    }
}

fn run(
    options: NewOptions,
    prompter: &mut ScriptedPrompter,
    materializer: &RecordingMaterializer,
) -> (anyhow::Result<NewOutcome>, String) {
    let mut out = Vec::new();
    let result = run_new(options, prompter, materializer, &mut out);
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

fn wge_error(err: &anyhow::Error) -> &WgeError {
    err.downcast_ref::<WgeError>()
        .expect("error should originate from wge-cli")
}

// ============================================================================
// File Acquisition
// ============================================================================

mod file_flow {
    use super::*;

    #[test]
    fn spacewar_maps_to_3d_template() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("spacewar.yaml"));

        let (result, out) = run(options(acquisition), &mut prompter, &materializer);
        let outcome = result.expect("new should succeed");

        assert_eq!(
            outcome.config,
            ProjectConfig::new("spacewar", GeometryType::ThreeD)
        );
        assert_eq!(
            outcome.template.location(),
            "github.com/iWas-Coder/wge-3d-game-template"
        );
        assert_eq!(outcome.destination, PathBuf::from("/work/spacewar"));
        assert!(outcome.materialized);

        let calls = materializer.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, outcome.template);
        assert_eq!(calls[0].1, PathBuf::from("/work/spacewar"));

        assert!(out.contains("projectName: spacewar"));
        assert!(out.contains("Selected template: github.com/iWas-Coder/wge-3d-game-template"));
        assert!(prompter.asked().is_empty());
    }

    #[test]
    fn pong_maps_to_2d_template() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("pong.yaml"));

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);

        assert_eq!(
            result.unwrap().template.location(),
            "github.com/iWas-Coder/wge-2d-game-template"
        );
    }

    #[test]
    fn empty_geometry_never_reaches_selection() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("empty_geometry.yaml"));

        let (result, out) = run(options(acquisition), &mut prompter, &materializer);
        let err = result.unwrap_err();

        assert!(matches!(
            wge_error(&err),
            WgeError::MissingField("geometryType")
        ));
        assert!(!out.contains("Selected template"));
        assert!(materializer.calls.borrow().is_empty());
    }

    #[test]
    fn unknown_geometry_is_rejected() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("unknown_geometry.yaml"));

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);
        let err = result.unwrap_err();

        match wge_error(&err) {
            WgeError::UnknownGeometry(value) => assert_eq!(value, "4D"),
            other => panic!("expected UnknownGeometry, got {other:?}"),
        }
        assert!(materializer.calls.borrow().is_empty());
    }

    #[test]
    fn unknown_key_is_parse_failure() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("unknown_key.yaml"));

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);

        assert!(matches!(
            wge_error(&result.unwrap_err()),
            WgeError::Parse { .. }
        ));
    }

    #[test]
    fn name_outside_parent_never_reaches_materializer() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("escape.yaml");
        std::fs::write(&path, "projectName: \"../escape\"\ngeometryType: \"2D\"\n").unwrap();
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();

        let (result, _) = run(options(Acquisition::File(path)), &mut prompter, &materializer);

        match wge_error(&result.unwrap_err()) {
            WgeError::InvalidProjectName { name } => assert_eq!(name, "../escape"),
            other => panic!("expected InvalidProjectName, got {other:?}"),
        }
        assert!(materializer.calls.borrow().is_empty());
    }

    #[test]
    fn null_project_name_is_missing_field() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("null.yaml");
        std::fs::write(&path, "projectName: ~\ngeometryType: \"3D\"\n").unwrap();
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();

        let (result, _) = run(options(Acquisition::File(path)), &mut prompter, &materializer);

        assert!(matches!(
            wge_error(&result.unwrap_err()),
            WgeError::MissingField("projectName")
        ));
        assert!(materializer.calls.borrow().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let acquisition = Acquisition::File(fixture_path("does-not-exist.yaml"));

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);

        assert!(matches!(
            wge_error(&result.unwrap_err()),
            WgeError::NotFound { .. }
        ));
    }
}

// ============================================================================
// Interactive Acquisition
// ============================================================================

mod interactive_flow {
    use super::*;

    #[test]
    fn short_names_are_reasked() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new()
            .with_inputs(["", "a", "ab"])
            .with_selections([0]);
        let acquisition = Acquisition::from_args(None, None).unwrap();

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);
        let outcome = result.expect("new should succeed");

        assert_eq!(outcome.config.project_name, "ab");
        assert_eq!(outcome.config.geometry_type, "2D");
        assert_eq!(prompter.rejections().len(), 2);
        assert!(prompter
            .rejections()
            .iter()
            .all(|r| r == PROJECT_NAME_TOO_SHORT));
    }

    #[test]
    fn positional_name_skips_name_prompt() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new().with_selections([1]);
        let acquisition = Acquisition::from_args(Some("spacewar".to_string()), None).unwrap();

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);
        let outcome = result.expect("new should succeed");

        assert_eq!(outcome.config.project_name, "spacewar");
        assert_eq!(
            outcome.template.location(),
            "github.com/iWas-Coder/wge-3d-game-template"
        );
        assert_eq!(prompter.asked(), &[GEOMETRY_LABEL]);
        assert!(!prompter.asked().iter().any(|l| l == PROJECT_NAME_LABEL));
    }

    #[test]
    fn one_char_positional_name_is_preserved() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new().with_selections([0]);
        let acquisition = Acquisition::from_args(Some("x".to_string()), None).unwrap();

        let (result, _) = run(options(acquisition), &mut prompter, &materializer);
        let outcome = result.expect("new should succeed");

        assert_eq!(outcome.config.project_name, "x");
        assert_eq!(outcome.destination, PathBuf::from("/work/x"));
        assert_eq!(prompter.asked(), &[GEOMETRY_LABEL]);
        assert!(prompter.rejections().is_empty());
    }

    #[test]
    fn prompt_failure_aborts_before_selection() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new().with_inputs(["spacewar"]);
        let acquisition = Acquisition::from_args(None, None).unwrap();

        let (result, out) = run(options(acquisition), &mut prompter, &materializer);

        assert!(wge_error(&result.unwrap_err()).is_prompt());
        assert!(out.is_empty());
        assert!(materializer.calls.borrow().is_empty());
    }
}

// ============================================================================
// Options
// ============================================================================

mod options_flow {
    use super::*;

    #[test]
    fn dry_run_skips_materialization() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let mut opts = options(Acquisition::File(fixture_path("spacewar.yaml")));
        opts.dry_run = true;

        let (result, out) = run(opts, &mut prompter, &materializer);
        let outcome = result.expect("dry run should succeed");

        assert!(!outcome.materialized);
        assert!(materializer.calls.borrow().is_empty());
        assert!(out.contains("Selected template:"));
    }

    #[test]
    fn quiet_prints_nothing() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let mut opts = options(Acquisition::File(fixture_path("spacewar.yaml")));
        opts.quiet = true;

        let (result, out) = run(opts, &mut prompter, &materializer);

        assert!(result.is_ok());
        assert!(out.is_empty());
        assert_eq!(materializer.calls.borrow().len(), 1);
    }

    #[test]
    fn custom_catalog_changes_template_location() {
        let materializer = RecordingMaterializer::default();
        let mut prompter = ScriptedPrompter::new();
        let mut opts = options(Acquisition::File(fixture_path("pong.yaml")));
        opts.catalog = TemplateCatalog::new("git.example.com/games");

        let (result, _) = run(opts, &mut prompter, &materializer);

        assert_eq!(
            result.unwrap().template.location(),
            "git.example.com/games/wge-2d-game-template"
        );
    }

    #[test]
    fn materializer_failure_is_reported_with_project_name() {
        let materializer = RecordingMaterializer {
            fail: true,
            ..RecordingMaterializer::default()
        };
        let mut prompter = ScriptedPrompter::new();
        let opts = options(Acquisition::File(fixture_path("spacewar.yaml")));

        let (result, _) = run(opts, &mut prompter, &materializer);
        let err = result.unwrap_err();

        assert!(err.to_string().contains("spacewar"));
        assert!(matches!(
            wge_error(&err),
            WgeError::DestinationExists { .. }
        ));
    }
}

//! Drives the full scaffold workflow through real adapter types, using the
//! in-memory filesystem so no disk, interpreter, or git is needed.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use groundwork_adapters::{EmbeddedTemplateSource, MemoryFilesystem};
use groundwork_core::{
    application::{
        ScaffoldOptions, ScaffoldService,
        ports::{EnvironmentProvisioner, Filesystem, VersionControl},
    },
    domain::ProjectName,
    error::GroundworkResult,
};

#[derive(Clone, Default)]
struct RecordingEnv {
    roots: Arc<Mutex<Vec<PathBuf>>>,
}

impl EnvironmentProvisioner for RecordingEnv {
    fn provision(&self, root: &Path) -> GroundworkResult<()> {
        self.roots.lock().unwrap().push(root.to_path_buf());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingVcs {
    staged: Arc<Mutex<Vec<String>>>,
}

impl VersionControl for RecordingVcs {
    fn init(&self, _root: &Path) -> GroundworkResult<()> {
        Ok(())
    }

    fn stage(&self, _root: &Path, file: &str) -> GroundworkResult<()> {
        self.staged.lock().unwrap().push(file.to_string());
        Ok(())
    }
}

#[test]
fn embedded_templates_render_through_the_memory_filesystem() {
    let fs = MemoryFilesystem::new();
    let env = RecordingEnv::default();
    let vcs = RecordingVcs::default();

    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(EmbeddedTemplateSource::new()),
        Box::new(env.clone()),
        Box::new(vcs.clone()),
    );

    let name: ProjectName = "demo".parse().unwrap();
    let options = ScaffoldOptions {
        fullname: "Ada Lovelace".into(),
        ..ScaffoldOptions::default()
    };
    let report = service
        .scaffold(&name, Path::new("/work"), &options)
        .unwrap();

    assert_eq!(report.root, PathBuf::from("/work/demo"));
    assert_eq!(
        report.created_files,
        vec![".gitignore", "LICENSE", "README.md"]
    );

    // The root plus all four subdirectories.
    assert!(fs.exists(Path::new("/work/demo")));
    for dir in ["data", "docs", "tests", "src"] {
        assert!(fs.exists(&Path::new("/work/demo").join(dir)), "missing {dir}");
    }

    let readme = fs.read_file(Path::new("/work/demo/README.md")).unwrap();
    assert!(readme.starts_with("# demo"));
    let license = fs.read_file(Path::new("/work/demo/LICENSE")).unwrap();
    assert!(license.contains("Ada Lovelace"));

    assert_eq!(env.roots.lock().unwrap().as_slice(), &[PathBuf::from("/work/demo")]);
    assert_eq!(
        vcs.staged.lock().unwrap().as_slice(),
        &[".gitignore".to_string(), "LICENSE".to_string(), "README.md".to_string()]
    );
}

#[test]
fn rerun_on_the_same_root_is_rejected() {
    let fs = MemoryFilesystem::new();

    let make_service = |fs: MemoryFilesystem| {
        ScaffoldService::new(
            Box::new(fs),
            Box::new(EmbeddedTemplateSource::new()),
            Box::new(RecordingEnv::default()),
            Box::new(RecordingVcs::default()),
        )
    };

    let name: ProjectName = "demo".parse().unwrap();
    let options = ScaffoldOptions {
        skip_env: true,
        skip_vcs: true,
        ..ScaffoldOptions::default()
    };

    make_service(fs.clone())
        .scaffold(&name, Path::new("/work"), &options)
        .unwrap();
    let before = fs.list_files().len();

    let err = make_service(fs.clone())
        .scaffold(&name, Path::new("/work"), &options)
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs.list_files().len(), before, "second run must not write");
}

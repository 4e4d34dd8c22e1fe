//! Deterministic stand-ins for the pipeline's collaborators.

#![allow(dead_code)]

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use path::FileDiscovery;
use pipeline::{
    GenerationRequest, IdlTranslator, LinkageResolution, ProcessRunner, SpecProvider,
    ToolResolver,
};
use types::{ClientPlatform, CompilerKind, LinkageDescriptor};

pub const COMPILER: &str = "/tools/thrift/windows/thrift.exe";

/// Tool resolver answering with a fixed result.
pub struct StaticTools {
    pub path: Option<PathBuf>,
    pub lookups: AtomicUsize,
}

impl StaticTools {
    pub fn found(path: impl Into<PathBuf>) -> Arc<Self> {
        Arc::new(Self { path: Some(path.into()), lookups: AtomicUsize::new(0) })
    }

    pub fn missing() -> Arc<Self> { Arc::new(Self { path: None, lookups: AtomicUsize::new(0) }) }
}

impl ToolResolver for StaticTools {
    fn locate(&self, _kind: CompilerKind, _platform: ClientPlatform) -> Option<PathBuf> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.path.clone()
    }
}

/// What a scripted process run should report.
#[derive(Clone, Copy)]
pub enum Outcome {
    Exit(Option<i32>),
    SpawnError,
}

/// Process runner returning a scripted outcome and recording every call.
pub struct ScriptedRunner {
    pub outcome: Outcome,
    pub calls: Mutex<Vec<(PathBuf, Vec<OsString>)>>,
}

impl ScriptedRunner {
    pub fn exiting(code: i32) -> Arc<Self> { Self::with(Outcome::Exit(Some(code))) }

    pub fn with(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self { outcome, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<(PathBuf, Vec<OsString>)> {
        self.calls.lock().expect("runner mutex poisoned").clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, executable: &Path, args: &[OsString]) -> io::Result<Option<i32>> {
        self.calls
            .lock()
            .expect("runner mutex poisoned")
            .push((executable.to_path_buf(), args.to_vec()));
        match self.outcome {
            Outcome::Exit(code) => Ok(code),
            Outcome::SpawnError => {
                Err(io::Error::new(io::ErrorKind::PermissionDenied, "not executable"))
            }
        }
    }
}

/// Translator reporting a fixed result.
pub struct StubTranslator {
    pub succeed: bool,
    pub calls: Mutex<Vec<(PathBuf, PathBuf, PathBuf, Vec<OsString>)>>,
}

impl StubTranslator {
    pub fn new(succeed: bool) -> Arc<Self> {
        Arc::new(Self { succeed, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf, PathBuf, Vec<OsString>)> {
        self.calls.lock().expect("translator mutex poisoned").clone()
    }
}

impl IdlTranslator for StubTranslator {
    fn to_common_interface(
        &self,
        input_dir: &Path,
        main_file: &Path,
        output_dir: &Path,
        args: &[OsString],
    ) -> bool {
        self.calls.lock().expect("translator mutex poisoned").push((
            input_dir.to_path_buf(),
            main_file.to_path_buf(),
            output_dir.to_path_buf(),
            args.to_vec(),
        ));
        self.succeed
    }
}

/// Discovery returning canned files and recording every query.
pub struct RecordingDiscovery {
    pub files: Vec<PathBuf>,
    pub calls: Mutex<Vec<(PathBuf, String, bool, Duration)>>,
}

impl RecordingDiscovery {
    pub fn returning(files: Vec<PathBuf>) -> Arc<Self> {
        Arc::new(Self { files, calls: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> Vec<(PathBuf, String, bool, Duration)> {
        self.calls.lock().expect("discovery mutex poisoned").clone()
    }
}

impl FileDiscovery for RecordingDiscovery {
    fn find(
        &self,
        root: &Path,
        pattern: &str,
        recursive: bool,
        max_age: Duration,
    ) -> Vec<PathBuf> {
        self.calls.lock().expect("discovery mutex poisoned").push((
            root.to_path_buf(),
            pattern.to_string(),
            recursive,
            max_age,
        ));
        self.files.clone()
    }
}

/// Linkage resolver recording its inputs and returning a marker descriptor.
pub struct RecordingLinkage {
    pub calls: Mutex<Vec<(GenerationRequest, PathBuf)>>,
}

impl RecordingLinkage {
    pub fn new() -> Arc<Self> { Arc::new(Self { calls: Mutex::new(Vec::new()) }) }

    pub fn calls(&self) -> Vec<(GenerationRequest, PathBuf)> {
        self.calls.lock().expect("linkage mutex poisoned").clone()
    }
}

impl LinkageResolution for RecordingLinkage {
    fn resolve(&self, request: &GenerationRequest, compiler: &Path) -> LinkageDescriptor {
        self.calls
            .lock()
            .expect("linkage mutex poisoned")
            .push((request.clone(), compiler.to_path_buf()));
        let mut linkage = LinkageDescriptor::new();
        linkage.add_library("marker");
        linkage
    }
}

/// Provider over stubs for every collaborator.
pub fn provider(
    tools: Arc<StaticTools>,
    runner: Arc<ScriptedRunner>,
    translator: Arc<StubTranslator>,
    discovery: Arc<RecordingDiscovery>,
    linkage: Arc<RecordingLinkage>,
) -> SpecProvider {
    SpecProvider::builder()
        .tool_resolver(tools)
        .process_runner(runner)
        .translator(translator)
        .discovery(discovery)
        .linkage_resolver(linkage)
        .build()
}

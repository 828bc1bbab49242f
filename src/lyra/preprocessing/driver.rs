//! Runs the whole preprocessing step for a project directory.

use super::filter::Markers;
use super::staging::Stager;
use super::PrepError;
use crate::lyra::config::PrepConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One run of the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Main file name, without the `.rb` extension.
    pub input: String,
    /// Name of the produced file, without the `.rb` extension.
    pub output: String,
    /// Preprocessor program, e.g. `gcc` or `clang`.
    pub compiler: String,
    /// Program that runs the result. When set, the staging directory is removed afterwards.
    pub interpreter: Option<String>,
    /// Extra arguments passed to the interpreter.
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The preprocessed main file.
    pub script: PathBuf,
    /// False when the staging directory was removed after running the interpreter.
    pub kept: bool,
}

pub struct Driver {
    config: PrepConfig,
    root: PathBuf,
}

impl Driver {
    pub fn new(config: PrepConfig, root: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root: root.into(),
        }
    }

    pub fn run(&self, invocation: &Invocation) -> Result<Outcome, PrepError> {
        let stager = Stager::new(&self.config.staging, Markers::from(&self.config.markers))
            .exclude(invocation.output.clone())
            .exclude(format!("{}.rb", invocation.output));
        stager.stage(&self.root)?;
        let dir = stager.dir_in(&self.root);

        let main = dir.join(format!("{}.rb", invocation.input));
        let expanded = dir.join(format!("_{}.rb", invocation.input));
        let mut preprocess = Command::new(&invocation.compiler);
        preprocess
            .args(&self.config.preprocessor.args)
            .arg(&main)
            .arg("-o")
            .arg(&expanded);
        run(&invocation.compiler, &mut preprocess)?;

        let script = dir.join(format!("{}.rb", invocation.output));
        fs::rename(&expanded, &script).map_err(|e| PrepError::io(&expanded, e))?;
        tracing::info!(script = %script.display(), "preprocessed");

        let Some(interpreter) = &invocation.interpreter else {
            return Ok(Outcome { script, kept: true });
        };

        let mut launch = Command::new(interpreter);
        launch.arg(&script).args(&invocation.args);
        let status = run(interpreter, &mut launch);
        // Clean up even when the interpreter failed.
        remove_dir(&dir)?;
        status?;
        Ok(Outcome {
            script,
            kept: false,
        })
    }
}

fn run(program: &str, command: &mut Command) -> Result<(), PrepError> {
    tracing::info!(?command, "running");
    let status = command.status().map_err(|e| PrepError::Spawn {
        program: program.to_string(),
        message: e.to_string(),
    })?;
    if status.success() {
        Ok(())
    } else {
        Err(PrepError::ProcessFailed {
            program: program.to_string(),
            code: status.code(),
        })
    }
}

fn remove_dir(dir: &Path) -> Result<(), PrepError> {
    fs::remove_dir_all(dir).map_err(|e| PrepError::io(dir, e))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::lyra::config::Loader;

    /// `sh -c 'cp "$0" "$2"' <in> -o <out>` stands in for the C preprocessor.
    fn copying_config() -> PrepConfig {
        Loader::new()
            .set_override("preprocessor.args", vec!["-c", "cp \"$0\" \"$2\""])
            .unwrap()
            .build()
            .unwrap()
    }

    fn invocation(interpreter: Option<&str>) -> Invocation {
        Invocation {
            input: "main".to_string(),
            output: "app".to_string(),
            compiler: "sh".to_string(),
            interpreter: interpreter.map(str::to_string),
            args: vec![],
        }
    }

    #[test]
    fn preprocesses_into_output_file() {
        let root = tempfile::tempdir().unwrap();
        let source = "#pre\n#define X 1\n#endpre\n# c\nputs X\n";
        fs::write(root.path().join("main.rb"), source).unwrap();
        fs::write(root.path().join("app.rb"), "stale output\n").unwrap();

        let outcome = Driver::new(copying_config(), root.path())
            .run(&invocation(None))
            .unwrap();
        let dir = root.path().join("lyra_out");
        assert_eq!(outcome.script, dir.join("app.rb"));
        assert!(outcome.kept);
        assert_eq!(
            fs::read_to_string(&outcome.script).unwrap(),
            "#define X 1\nputs X\n"
        );
        assert!(!dir.join("_main.rb").exists());
    }

    #[test]
    fn interpreter_run_removes_staging_dir() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("main.rb"), "true\n").unwrap();

        let outcome = Driver::new(copying_config(), root.path())
            .run(&invocation(Some("sh")))
            .unwrap();
        assert!(!outcome.kept);
        assert!(!root.path().join("lyra_out").exists());
    }

    #[test]
    fn failing_preprocessor_is_reported() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("main.rb"), "x\n").unwrap();
        let config = Loader::new()
            .set_override("preprocessor.args", vec!["-c", "exit 3"])
            .unwrap()
            .build()
            .unwrap();

        let err = Driver::new(config, root.path())
            .run(&invocation(None))
            .unwrap_err();
        assert_eq!(
            err,
            PrepError::ProcessFailed {
                program: "sh".to_string(),
                code: Some(3)
            }
        );
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("main.rb"), "x\n").unwrap();
        let mut invocation = invocation(None);
        invocation.compiler = "lyra-no-such-preprocessor".to_string();

        let err = Driver::new(copying_config(), root.path())
            .run(&invocation)
            .unwrap_err();
        assert!(matches!(err, PrepError::Spawn { .. }));
    }
}

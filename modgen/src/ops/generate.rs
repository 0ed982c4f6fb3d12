//! Generate operation - build, render, preview, confirm, write.

use std::path::Path;

use eyre::{Context, Result};
use modgen_codegen::{DirLister, Platform, StatementBuilder, render};
use modgen_core::{ExtraVar, InstallationContext, ModuleFile, Prerequisite};
use tracing::debug;

use crate::{
    prompt::Confirm,
    reports::{GenerateReport, Outcome, Output, PreviewReport, Report},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Root directory that modulefiles are written below.
    pub modulefiles: &'a Path,
    /// Host family the library search variable is chosen for.
    pub platform: Platform,
    /// Prerequisites, in emission order.
    pub prereqs: &'a [Prerequisite],
    /// Extra environment variables, in emission order.
    pub extras: &'a [ExtraVar],
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// The preview is rendered to `out` before `confirm` is consulted; nothing
/// is written unless it returns `true`.
pub fn generate(
    ctx: &InstallationContext,
    opts: GenerateOptions,
    lister: &dyn DirLister,
    confirm: &dyn Confirm,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let directives = StatementBuilder::new(ctx)
        .with_platform(opts.platform)
        .with_lister(lister)
        .build(opts.prereqs, opts.extras);
    let module = render(&directives, ctx.dialect());
    let file = ModuleFile::new(
        opts.modulefiles,
        ctx.module_name(),
        ctx.dialect(),
        module.to_string(),
    );

    PreviewReport {
        module_name: ctx.module_name(),
        modulefiles: opts.modulefiles,
        target: file.path(),
        content: file.content(),
    }
    .render(out);

    let outcome = if opts.dry_run {
        Outcome::DryRun(file.path().to_path_buf())
    } else if !confirm.confirm("Write modulefile to disk?")? {
        debug!("write declined");
        Outcome::Aborted
    } else {
        file.write()
            .wrap_err_with(|| format!("Failed to write {}", file.path().display()))?
            .into()
    };

    Ok(GenerateReport {
        module_name: ctx.module_name().to_string(),
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, fs};

    use modgen_codegen::testing::{FakeLister, InstallTree};
    use modgen_core::{Dialect, InstallDirPolicy};

    use super::*;
    use crate::reports::CaptureOutput;

    /// Confirm stub that records whether it was asked.
    struct Stub {
        answer: bool,
        asked: Cell<bool>,
    }

    impl Stub {
        fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: Cell::new(false),
            }
        }
    }

    impl Confirm for Stub {
        fn confirm(&self, _prompt: &str) -> Result<bool> {
            self.asked.set(true);
            Ok(self.answer)
        }
    }

    fn resolve(tree: &InstallTree, dialect: Dialect) -> InstallationContext {
        InstallationContext::resolve(
            tree.install_dir().to_str().unwrap(),
            None,
            dialect,
            InstallDirPolicy::Keep,
        )
        .unwrap()
    }

    fn run(
        ctx: &InstallationContext,
        modulefiles: &Path,
        lister: &dyn DirLister,
        confirm: &dyn Confirm,
        dry_run: bool,
    ) -> (GenerateReport, String) {
        let mut out = CaptureOutput::default();
        let prereqs = [Prerequisite::from("gcc/8.3.0")];
        let extras = [ExtraVar::parse("HIP_DIR=install_dir").unwrap()];
        let report = generate(
            ctx,
            GenerateOptions {
                modulefiles,
                platform: Platform::Linux,
                prereqs: &prereqs,
                extras: &extras,
                dry_run,
            },
            lister,
            confirm,
            &mut out,
        )
        .unwrap();
        (report, out.text)
    }

    #[test]
    fn test_generate_writes_tcl_module() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);
        let stub = Stub::new(true);

        let (report, preview) =
            run(&ctx, &tree.modulefiles(), &FakeLister::empty(), &stub, false);

        let target = tree.modulefiles().join("demo").join("2.0");
        assert_eq!(report.outcome, Outcome::Written(target.clone()));
        assert!(stub.asked.get());

        let written = fs::read_to_string(&target).unwrap();
        assert!(written.starts_with("#%Module\n"));
        assert!(written.contains("prereq gcc/8.3.0\n"));
        assert!(written.contains("pushenv HIP_DIR \"$install_dir\"\n"));
        assert!(written.ends_with("prepend-path CMAKE_PREFIX_PATH $install_dir/lib/cmake\n"));
        assert!(preview.contains(written.trim_end()));
        assert!(preview.contains("module load demo/2.0"));
    }

    #[test]
    fn test_generate_lua_appends_extension() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Lua);

        let (report, _) = run(
            &ctx,
            &tree.modulefiles(),
            &FakeLister::empty(),
            &Stub::new(true),
            false,
        );

        let target = tree.modulefiles().join("demo").join("2.0.lua");
        assert_eq!(report.outcome, Outcome::Written(target.clone()));
        assert!(
            fs::read_to_string(&target)
                .unwrap()
                .contains("depends_on(\"gcc/8.3.0\")")
        );
    }

    #[test]
    fn test_generate_declined_writes_nothing() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);

        let (report, preview) = run(
            &ctx,
            &tree.modulefiles(),
            &FakeLister::empty(),
            &Stub::new(false),
            false,
        );

        assert_eq!(report.outcome, Outcome::Aborted);
        assert!(preview.contains("#%Module"));
        assert!(!tree.modulefiles().exists());
    }

    #[test]
    fn test_generate_dry_run_never_asks() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);
        let stub = Stub::new(true);

        let (report, _) = run(&ctx, &tree.modulefiles(), &FakeLister::empty(), &stub, true);

        assert!(matches!(report.outcome, Outcome::DryRun(_)));
        assert!(!stub.asked.get());
        assert!(!tree.modulefiles().exists());
    }

    #[test]
    fn test_generate_does_not_clobber() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);
        let target = tree.modulefiles().join("demo").join("2.0");
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(&target, "hand written").unwrap();

        let (report, _) = run(
            &ctx,
            &tree.modulefiles(),
            &FakeLister::empty(),
            &Stub::new(true),
            false,
        );

        assert_eq!(report.outcome, Outcome::AlreadyExists(target.clone()));
        assert_eq!(fs::read_to_string(&target).unwrap(), "hand written");
    }

    #[test]
    fn test_generate_parent_is_file() {
        let tree = InstallTree::new("demo", "2.0").unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);
        fs::create_dir_all(tree.modulefiles()).unwrap();
        let parent = tree.modulefiles().join("demo");
        fs::write(&parent, "a module named demo").unwrap();

        let (report, _) = run(
            &ctx,
            &tree.modulefiles(),
            &FakeLister::empty(),
            &Stub::new(true),
            false,
        );

        assert_eq!(report.outcome, Outcome::ParentIsFile(parent));
    }

    #[test]
    fn test_generate_detects_cmake_modules_on_disk() {
        let tree = InstallTree::new("demo", "2.0")
            .unwrap()
            .with_cmake_module("DemoConfig.cmake")
            .unwrap();
        let ctx = resolve(&tree, Dialect::Tcl);

        let (report, _) = run(
            &ctx,
            &tree.modulefiles(),
            &modgen_codegen::FsLister,
            &Stub::new(true),
            false,
        );

        let path = match &report.outcome {
            Outcome::Written(path) => path.clone(),
            other => panic!("expected a written module, got {:?}", other),
        };
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(written.matches("DEMO_MODULE_PATH").count(), 1);
        assert!(written.contains("pushenv DEMO_MODULE_PATH \"$install_dir/demo\"\n"));
    }
}

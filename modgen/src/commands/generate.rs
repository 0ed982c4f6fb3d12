use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use modgen_codegen::{FsLister, Platform};
use modgen_core::{
    Config, Dialect, ExtraVar, InstallDirPolicy, InstallationContext, Prerequisite,
    default_modulefiles_dir,
};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    prompt::{AssumeYes, Confirm, InteractiveConfirm},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the install directory
    pub install_dir: String,

    /// Full name of the module, e.g. cuda/versions/10.1.234
    /// (derived from the part of install_dir after '/install/' when omitted)
    pub module_name: Option<String>,

    /// Path to the modulefiles directory (default: $HOME/modulefiles)
    #[arg(long, env = "MODGEN_MODULEFILES")]
    pub modulefiles: Option<PathBuf>,

    /// Additional env var to export; the value `install_dir` refers to the
    /// install directory. Ex: -e HIP_DIR=install_dir
    #[arg(short, long, value_name = "NAME=VALUE")]
    pub extra: Vec<String>,

    /// Prerequisite module, may be repeated. Ex: -p gcc/8.3.0
    #[arg(short, long, value_name = "MODULE")]
    pub prereq: Vec<String>,

    /// Write a Lua modulefile (shorthand for --dialect lua)
    #[arg(short, long, conflicts_with = "dialect")]
    pub lua: bool,

    /// Modulefile dialect (default: tcl)
    #[arg(long)]
    pub dialect: Option<Dialect>,

    /// What to do with install_dir when the module name is derived from it:
    /// keep, before-install or through-install (default: keep)
    #[arg(long)]
    pub install_dir_policy: Option<InstallDirPolicy>,

    /// Host family to generate for: darwin or linux (default: this host)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Write without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Preview the modulefile without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a defaults file (default: <config dir>/modgen/config.toml)
    #[arg(long, env = "MODGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref()).unwrap_or_exit();

        let dialect = if self.lua {
            Dialect::Lua
        } else {
            self.dialect.or(config.dialect).unwrap_or_default()
        };
        let policy = self
            .install_dir_policy
            .or(config.install_dir_policy)
            .unwrap_or_default();

        let extras = self
            .extra
            .iter()
            .map(|arg| ExtraVar::parse(arg))
            .collect::<modgen_core::Result<Vec<_>>>()
            .unwrap_or_exit();
        let prereqs: Vec<Prerequisite> = config
            .prereqs
            .iter()
            .chain(&self.prereq)
            .map(|name| Prerequisite::new(name.as_str()))
            .collect();

        let ctx = InstallationContext::resolve(
            &self.install_dir,
            self.module_name.as_deref(),
            dialect,
            policy,
        )
        .unwrap_or_exit();

        let modulefiles = match self.modulefiles.clone().or(config.modulefiles) {
            Some(path) => path,
            None => default_modulefiles_dir().unwrap_or_exit(),
        };
        debug!(
            install_dir = ctx.install_dir(),
            module_name = ctx.module_name(),
            modulefiles = %modulefiles.display(),
            %dialect,
            "resolved arguments"
        );

        let confirm: &dyn Confirm = if self.yes {
            &AssumeYes
        } else {
            &InteractiveConfirm
        };

        let mut out = TerminalOutput::new();
        let report = ops::generate(
            &ctx,
            GenerateOptions {
                modulefiles: &modulefiles,
                platform: self.platform.unwrap_or_default(),
                prereqs: &prereqs,
                extras: &extras,
                dry_run: self.dry_run,
            },
            &FsLister,
            confirm,
            &mut out,
        )?;

        report.render(&mut out);
        Ok(())
    }
}

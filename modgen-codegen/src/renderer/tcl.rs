use modgen_core::Dialect;

use super::{DialectRenderer, INSTALL_DIR_VAR};
use crate::{Directive, EnvValue};

/// TCL modulefile syntax (Environment Modules, Lmod).
#[derive(Debug, Clone, Copy, Default)]
pub struct Tcl;

impl Tcl {
    fn value(value: &EnvValue) -> String {
        match value {
            EnvValue::Literal(s) => quote(s),
            EnvValue::InstallDir => format!("\"${}\"", INSTALL_DIR_VAR),
            EnvValue::InstallSubdir(sub) => format!("\"${}/{}\"", INSTALL_DIR_VAR, sub),
        }
    }
}

impl DialectRenderer for Tcl {
    fn dialect(&self) -> Dialect {
        Dialect::Tcl
    }

    fn header(&self) -> &'static str {
        "#%Module"
    }

    fn directive(&self, directive: &Directive) -> String {
        match directive {
            Directive::Prerequisite(name) => format!("prereq {}", name),
            Directive::SetInstallDir(path) => format!("set {} {}", INSTALL_DIR_VAR, path),
            Directive::SetEnv { name, value } => format!("pushenv {} {}", name, Self::value(value)),
            Directive::PrependPath { var, suffix } => {
                format!("prepend-path {} ${}/{}", var, INSTALL_DIR_VAR, suffix)
            }
        }
    }
}

/// Double-quoted TCL word.
///
/// Only `\` and `"` are escaped; `$` and `[` keep substituting, so a value
/// such as `$install_dir/share` still expands when the module loads.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prereq() {
        assert_eq!(Tcl.directive(&Directive::prereq("gcc/8.3.0")), "prereq gcc/8.3.0");
    }

    #[test]
    fn test_set_install_dir() {
        assert_eq!(
            Tcl.directive(&Directive::SetInstallDir("/opt/x".to_string())),
            "set install_dir /opt/x"
        );
    }

    #[test]
    fn test_set_env() {
        assert_eq!(
            Tcl.directive(&Directive::set_env(
                "CC",
                EnvValue::Literal("clang".to_string())
            )),
            "pushenv CC \"clang\""
        );
        assert_eq!(
            Tcl.directive(&Directive::set_env("HIP_DIR", EnvValue::InstallDir)),
            "pushenv HIP_DIR \"$install_dir\""
        );
        assert_eq!(
            Tcl.directive(&Directive::set_env(
                "FOO_MODULE_PATH",
                EnvValue::InstallSubdir("foo".to_string())
            )),
            "pushenv FOO_MODULE_PATH \"$install_dir/foo\""
        );
    }

    #[test]
    fn test_set_env_escapes_literal() {
        assert_eq!(
            Tcl.directive(&Directive::set_env(
                "MSG",
                EnvValue::Literal(r#"say "hi""#.to_string())
            )),
            r#"pushenv MSG "say \"hi\"""#
        );
        assert_eq!(
            Tcl.directive(&Directive::set_env(
                "WIN",
                EnvValue::Literal(r"C:\tools".to_string())
            )),
            r#"pushenv WIN "C:\\tools""#
        );
    }

    #[test]
    fn test_set_env_keeps_substitution() {
        assert_eq!(
            Tcl.directive(&Directive::set_env(
                "DATA",
                EnvValue::Literal("$install_dir/share".to_string())
            )),
            "pushenv DATA \"$install_dir/share\""
        );
    }

    #[test]
    fn test_prepend_path() {
        assert_eq!(
            Tcl.directive(&Directive::prepend_path("PKG_CONFIG_PATH", "lib/pkgconfig")),
            "prepend-path PKG_CONFIG_PATH $install_dir/lib/pkgconfig"
        );
    }
}

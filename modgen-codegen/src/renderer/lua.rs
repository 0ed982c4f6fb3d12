use modgen_core::Dialect;

use super::{DialectRenderer, INSTALL_DIR_VAR};
use crate::{Directive, EnvValue};

/// Lua modulefile syntax (Lmod).
#[derive(Debug, Clone, Copy, Default)]
pub struct Lua;

impl Lua {
    fn value(value: &EnvValue) -> String {
        match value {
            EnvValue::Literal(s) => quote(s),
            EnvValue::InstallDir => INSTALL_DIR_VAR.to_string(),
            EnvValue::InstallSubdir(sub) => below_install_dir(sub),
        }
    }
}

impl DialectRenderer for Lua {
    fn dialect(&self) -> Dialect {
        Dialect::Lua
    }

    fn header(&self) -> &'static str {
        "-- -*- lua -*-"
    }

    fn directive(&self, directive: &Directive) -> String {
        match directive {
            Directive::Prerequisite(name) => format!("depends_on({})", quote(name)),
            Directive::SetInstallDir(path) => {
                format!("local {} = {}", INSTALL_DIR_VAR, quote(path))
            }
            Directive::SetEnv { name, value } => {
                format!("setenv({}, {})", quote(name), Self::value(value))
            }
            Directive::PrependPath { var, suffix } => {
                format!("prepend_path({}, {})", quote(var), below_install_dir(suffix))
            }
        }
    }
}

fn below_install_dir(suffix: &str) -> String {
    format!("{} .. {}", INSTALL_DIR_VAR, quote(&format!("/{}", suffix)))
}

/// Double-quoted Lua string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
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
        assert_eq!(
            Lua.directive(&Directive::prereq("gcc/8.3.0")),
            "depends_on(\"gcc/8.3.0\")"
        );
    }

    #[test]
    fn test_set_install_dir() {
        assert_eq!(
            Lua.directive(&Directive::SetInstallDir("/opt/x".to_string())),
            "local install_dir = \"/opt/x\""
        );
    }

    #[test]
    fn test_set_env() {
        assert_eq!(
            Lua.directive(&Directive::set_env(
                "CC",
                EnvValue::Literal("clang".to_string())
            )),
            "setenv(\"CC\", \"clang\")"
        );
        assert_eq!(
            Lua.directive(&Directive::set_env("HIP_DIR", EnvValue::InstallDir)),
            "setenv(\"HIP_DIR\", install_dir)"
        );
        assert_eq!(
            Lua.directive(&Directive::set_env(
                "FOO_MODULE_PATH",
                EnvValue::InstallSubdir("foo".to_string())
            )),
            "setenv(\"FOO_MODULE_PATH\", install_dir .. \"/foo\")"
        );
    }

    #[test]
    fn test_prepend_path() {
        assert_eq!(
            Lua.directive(&Directive::prepend_path("PATH", "bin")),
            "prepend_path(\"PATH\", install_dir .. \"/bin\")"
        );
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\tools"), r#""C:\\tools""#);
    }
}

//! Output dialects understood by module-system tools.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Concrete syntax of a generated modulefile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// TCL, read by Environment Modules and Lmod
    #[default]
    Tcl,
    /// Lua, read by Lmod
    Lua,
}

impl Dialect {
    /// Returns the dialect identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Tcl => "tcl",
            Dialect::Lua => "lua",
        }
    }

    /// File extension appended to the module name, if any.
    ///
    /// TCL modulefiles are named after the module version itself, while Lmod
    /// only picks up Lua modulefiles carrying a `.lua` suffix.
    pub fn file_extension(&self) -> Option<&'static str> {
        match self {
            Dialect::Tcl => None,
            Dialect::Lua => Some("lua"),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tcl" => Ok(Dialect::Tcl),
            "lua" => Ok(Dialect::Lua),
            _ => Err(format!("unknown dialect '{}', expected 'tcl' or 'lua'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Dialect::from_str("tcl").unwrap(), Dialect::Tcl);
        assert_eq!(Dialect::from_str("TCL").unwrap(), Dialect::Tcl);
        assert_eq!(Dialect::from_str("Lua").unwrap(), Dialect::Lua);
        assert!(Dialect::from_str("python").is_err());
    }

    #[test]
    fn test_default_is_tcl() {
        assert_eq!(Dialect::default(), Dialect::Tcl);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(Dialect::Tcl.file_extension(), None);
        assert_eq!(Dialect::Lua.file_extension(), Some("lua"));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            dialect: Dialect,
        }

        let w: Wrapper = toml::from_str(r#"dialect = "lua""#).unwrap();
        assert_eq!(w.dialect, Dialect::Lua);
    }
}

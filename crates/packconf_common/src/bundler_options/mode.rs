use std::fmt::Display;

use serde::Serialize;

/// The named configuration variant selected for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
  Production,
  Development,
}

impl Mode {
  pub const PRODUCTION_FLAG: &'static str = "production";

  /// Only the exact literal `"production"` selects production. Everything else,
  /// an absent flag included, falls back to development.
  pub fn from_env_flag(flag: Option<&str>) -> Self {
    match flag {
      Some(Self::PRODUCTION_FLAG) => Self::Production,
      _ => Self::Development,
    }
  }

  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Production => write!(f, "production"),
      Self::Development => write!(f, "development"),
    }
  }
}

#[test]
fn test_from_env_flag() {
  assert_eq!(Mode::from_env_flag(Some("production")), Mode::Production);
  assert_eq!(Mode::from_env_flag(Some("development")), Mode::Development);
  assert_eq!(Mode::from_env_flag(Some("test")), Mode::Development);
  assert_eq!(Mode::from_env_flag(Some("")), Mode::Development);
  assert_eq!(Mode::from_env_flag(None), Mode::Development);
  // Case and whitespace are significant.
  assert_eq!(Mode::from_env_flag(Some("Production")), Mode::Development);
  assert_eq!(Mode::from_env_flag(Some(" production")), Mode::Development);
}

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// A batch of errors collected while reading or normalizing options.
///
/// Validation keeps going after the first problem so that users see every
/// mistake in their configuration at once.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn into_result<T>(self, value: T) -> BuildResult<T> {
    if self.0.is_empty() { Ok(value) } else { Err(self) }
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_into_result() {
  assert_eq!(BuildError::default().into_result(1).ok(), Some(1));

  let mut errors = BuildError::default();
  errors.push(anyhow::anyhow!("first"));
  errors.push(anyhow::anyhow!("second"));
  let err = errors.into_result(()).unwrap_err();
  assert_eq!(err.len(), 2);
  assert_eq!(err.to_string(), "first\nsecond");
}

use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  /// Resolves `self` against `base` the way Node's `path.resolve(base, self)` does:
  /// absolute paths are kept, relative ones are joined onto `base`, and the
  /// result is normalized lexically without touching the file system.
  fn resolve_from(&self, base: &Path) -> PathBuf;

  /// Slash separated form, used when printing paths in logs and messages.
  fn to_slash_string(&self) -> String;
}

impl PathExt for Path {
  fn resolve_from(&self, base: &Path) -> PathBuf {
    if self.is_absolute() { self.normalize() } else { base.join(self).normalize() }
  }

  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }
}

#[cfg(unix)]
#[test]
fn test_resolve_from() {
  let cwd = Path::new("/project");
  assert_eq!(Path::new("dist").resolve_from(cwd), Path::new("/project/dist"));
  assert_eq!(
    Path::new("./src/assets/img/").resolve_from(cwd),
    Path::new("/project/src/assets/img")
  );
  assert_eq!(Path::new("../shared").resolve_from(cwd), Path::new("/shared"));
  assert_eq!(Path::new("/elsewhere/out").resolve_from(cwd), Path::new("/elsewhere/out"));
}

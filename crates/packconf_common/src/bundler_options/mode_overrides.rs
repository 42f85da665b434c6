use crate::{DevServerOptions, Devtool, Mode};

/// Fields that only exist for one mode and are layered over the base options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeOverrides {
  pub mode: Mode,
  pub devtool: Option<Devtool>,
  pub dev_server: Option<DevServerOptions>,
}

impl ModeOverrides {
  pub fn for_mode(mode: Mode) -> Self {
    match mode {
      Mode::Production => Self { mode, devtool: None, dev_server: None },
      Mode::Development => Self {
        mode,
        devtool: Some(Devtool::EvalSourceMap),
        dev_server: Some(DevServerOptions { history_api_fallback: true, open: true }),
      },
    }
  }
}

#[test]
fn test_for_mode() {
  let production = ModeOverrides::for_mode(Mode::Production);
  assert_eq!(production.mode, Mode::Production);
  assert!(production.devtool.is_none());
  assert!(production.dev_server.is_none());

  let development = ModeOverrides::for_mode(Mode::Development);
  assert_eq!(development.mode, Mode::Development);
  assert_eq!(development.devtool, Some(Devtool::EvalSourceMap));
  assert_eq!(
    development.dev_server,
    Some(DevServerOptions { history_api_fallback: true, open: true })
  );
}

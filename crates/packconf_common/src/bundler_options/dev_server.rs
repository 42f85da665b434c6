use serde::Serialize;

/// Options for the local development server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
  /// Serve the entry page for any unknown route so that HTML5 history
  /// navigation works.
  pub history_api_fallback: bool,
  /// Launch a browser once the server is up.
  pub open: bool,
}

use std::{fmt, path::PathBuf};

use packconf_utils::indexmap::FxIndexMap;
use serde::{
  Deserialize, Deserializer, Serialize,
  de::{MapAccess, Visitor},
};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveOptions {
  /// Short import prefix to the directory it stands for.
  #[serde(default, deserialize_with = "unique_alias_keys")]
  pub alias: Option<FxIndexMap<String, PathBuf>>,
}

/// A JSON object may repeat a key, and a plain map would keep the last one
/// without a word. Aliases must be unique, so repeats are rejected here.
/// `null` reads as no alias map, like the other optional fields.
fn unique_alias_keys<'de, D: Deserializer<'de>>(
  deserializer: D,
) -> Result<Option<FxIndexMap<String, PathBuf>>, D::Error> {
  struct AliasVisitor;

  impl<'de> Visitor<'de> for AliasVisitor {
    type Value = FxIndexMap<String, PathBuf>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str("a map from alias to directory")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
      let mut alias = FxIndexMap::default();
      while let Some((key, target)) = access.next_entry::<String, PathBuf>()? {
        if alias.contains_key(&key) {
          return Err(serde::de::Error::custom(format_args!("duplicate alias `{key}`")));
        }
        alias.insert(key, target);
      }
      Ok(alias)
    }
  }

  struct OptionalAliasVisitor;

  impl<'de> Visitor<'de> for OptionalAliasVisitor {
    type Value = Option<FxIndexMap<String, PathBuf>>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
      f.write_str("a map from alias to directory, or null")
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
      Ok(None)
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
      Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
      deserializer.deserialize_map(AliasVisitor).map(Some)
    }
  }

  deserializer.deserialize_option(OptionalAliasVisitor)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedResolveOptions {
  /// Alias targets are absolute. Keys are unique and kept in declaration order.
  pub alias: FxIndexMap<String, PathBuf>,
}

impl NormalizedResolveOptions {
  /// Rewrites `specifier` if it starts with an alias key followed by `/` or is
  /// exactly the key. The first matching alias in declaration order wins.
  pub fn apply_alias(&self, specifier: &str) -> Option<PathBuf> {
    self.alias.iter().find_map(|(key, target)| {
      let rest = specifier.strip_prefix(key.as_str())?;
      if rest.is_empty() {
        Some(target.clone())
      } else {
        rest.strip_prefix('/').map(|rest| target.join(rest))
      }
    })
  }
}

#[test]
fn test_apply_alias() {
  let mut alias = FxIndexMap::default();
  alias.insert("@".to_string(), PathBuf::from("/project/src"));
  alias.insert("comp".to_string(), PathBuf::from("/project/src/components"));
  let resolve = NormalizedResolveOptions { alias };

  assert_eq!(resolve.apply_alias("@/index.js"), Some(PathBuf::from("/project/src/index.js")));
  assert_eq!(resolve.apply_alias("comp"), Some(PathBuf::from("/project/src/components")));
  assert_eq!(
    resolve.apply_alias("comp/button.js"),
    Some(PathBuf::from("/project/src/components/button.js"))
  );
  // A key that is only a prefix of the first segment is not an alias hit.
  assert_eq!(resolve.apply_alias("components/button.js"), None);
  assert_eq!(resolve.apply_alias("react"), None);
}

#[test]
fn test_duplicate_alias_is_rejected() {
  let options: ResolveOptions =
    serde_json::from_str(r#"{ "alias": { "@": "src", "img": "src/assets/img" } }"#).unwrap();
  let alias = options.alias.unwrap();
  assert_eq!(alias.keys().collect::<Vec<_>>(), ["@", "img"]);

  let err = serde_json::from_str::<ResolveOptions>(r#"{ "alias": { "@": "src", "@": "lib" } }"#)
    .unwrap_err();
  assert!(err.to_string().contains("duplicate alias `@`"));
}

#[test]
fn test_null_alias_reads_as_absent() {
  let options: ResolveOptions = serde_json::from_str(r#"{ "alias": null }"#).unwrap();
  assert!(options.alias.is_none());

  let options: ResolveOptions = serde_json::from_str("{}").unwrap();
  assert!(options.alias.is_none());

  let err = serde_json::from_str::<ResolveOptions>(r#"{ "alias": ["@"] }"#).unwrap_err();
  assert!(err.to_string().contains("a map from alias to directory"));
}

use crate::core::Storage;
use crate::domain::model::ExportBundle;
use crate::utils::error::Result;

/// Pretty JSON with two-space indentation. Non-ASCII text is written as-is.
pub fn encode_bundle(bundle: &ExportBundle) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(bundle)?)
}

/// Writes the bundle to `path`, replacing whatever was there.
pub async fn export_json<S: Storage>(storage: &S, bundle: &ExportBundle, path: &str) -> Result<()> {
    let data = encode_bundle(bundle)?;
    tracing::debug!("Writing {} bytes of JSON to '{}'", data.len(), path);
    storage.write_file(path, &data).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Item;

    #[test]
    fn test_encode_bundle_layout() {
        let bundle = ExportBundle {
            constructions: vec!["대림건설".to_string()],
            items: vec![Item::new("A-1", "O'Brien Supplies")],
        };

        let json = String::from_utf8(encode_bundle(&bundle).unwrap()).unwrap();

        assert_eq!(
            json,
            r#"{
  "constructions": [
    "대림건설"
  ],
  "items": [
    {
      "item_id": "A-1",
      "item_name": "O'Brien Supplies"
    }
  ]
}"#
        );
    }

    #[test]
    fn test_encode_bundle_round_trip() {
        let bundle = ExportBundle {
            constructions: vec!["Acme".to_string(), "Beta".to_string()],
            items: vec![Item::new("1", "a"), Item::new("1", "b")],
        };

        let bytes = encode_bundle(&bundle).unwrap();
        let decoded: ExportBundle = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(decoded, bundle);
        assert_eq!(encode_bundle(&decoded).unwrap(), bytes);
    }
}

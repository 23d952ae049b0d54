//! JSON encoding of [`ProfileDocument`]

use crate::error::Result;
use crate::model::ProfileDocument;

/// Encode a document as pretty-printed JSON. Variable order is kept.
pub fn encode_document(document: &ProfileDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Decode a document, rejecting anything without both required fields.
pub fn decode_document(json: &str) -> Result<ProfileDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShenvError;
    use crate::model::Variable;

    #[test]
    fn test_encode_field_names_and_layout() {
        let doc = ProfileDocument::new(
            ".zshrc",
            vec![Variable::new("EDITOR", "nvim"), Variable::new("PAGER", "less")],
        );
        let json = encode_document(&doc).unwrap();

        assert!(json.contains("\"profile_name\": \".zshrc\""));
        assert!(json.contains("\"environment_variables\": ["));
        assert!(json.contains('\n'));
        assert!(json.find("EDITOR").unwrap() < json.find("PAGER").unwrap());
    }

    #[test]
    fn test_decode_keeps_document_order() {
        let json = r#"{
            "profile_name": "zshrc",
            "environment_variables": [
                { "key": "Z", "value": "1" },
                { "key": "A", "value": "a=b" }
            ]
        }"#;
        let doc = decode_document(json).unwrap();
        assert_eq!(doc.profile_name, "zshrc");
        assert_eq!(
            doc.variables,
            vec![Variable::new("Z", "1"), Variable::new("A", "a=b")]
        );
    }

    #[test]
    fn test_decode_missing_variables_field() {
        let err = decode_document(r#"{ "profile_name": "zshrc" }"#).unwrap_err();
        assert!(matches!(err, ShenvError::MalformedDocument(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_decode_wrong_shape() {
        let json = r#"{ "profile_name": "zshrc", "environment_variables": { "A": "1" } }"#;
        assert!(matches!(
            decode_document(json),
            Err(ShenvError::MalformedDocument(_))
        ));
        assert!(decode_document("not json").is_err());
    }

    #[test]
    fn test_default_filename() {
        let doc = ProfileDocument::new(".bashrc", Vec::new());
        assert_eq!(doc.default_filename(), ".bashrc_env_vars.json");
    }
}

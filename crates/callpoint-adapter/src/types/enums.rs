/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Declared type of a command parameter.
///
/// The server-side set is open (payload types register their own); only
/// `File` changes client behavior, so unknown tags are carried through
/// untouched rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    ChooseOne,
    ChooseMultiple,
    File,
    Other(String),
}

impl ParameterType {
    /// Returns true when the parameter carries a file attachment.
    pub fn is_file(&self) -> bool {
        matches!(self, ParameterType::File)
    }
}

impl From<String> for ParameterType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "String" => ParameterType::String,
            "Number" => ParameterType::Number,
            "Boolean" => ParameterType::Boolean,
            "ChooseOne" => ParameterType::ChooseOne,
            "ChooseMultiple" => ParameterType::ChooseMultiple,
            "File" => ParameterType::File,
            _ => ParameterType::Other(value),
        }
    }
}

impl From<ParameterType> for String {
    fn from(value: ParameterType) -> Self {
        match value {
            ParameterType::String => "String".to_string(),
            ParameterType::Number => "Number".to_string(),
            ParameterType::Boolean => "Boolean".to_string(),
            ParameterType::ChooseOne => "ChooseOne".to_string(),
            ParameterType::ChooseMultiple => "ChooseMultiple".to_string(),
            ParameterType::File => "File".to_string(),
            ParameterType::Other(tag) => tag,
        }
    }
}

/// Outcome envelope status for task creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateStatus {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("String", ParameterType::String)]
    #[case("Number", ParameterType::Number)]
    #[case("Boolean", ParameterType::Boolean)]
    #[case("ChooseOne", ParameterType::ChooseOne)]
    #[case("ChooseMultiple", ParameterType::ChooseMultiple)]
    #[case("File", ParameterType::File)]
    #[case("PayloadList", ParameterType::Other("PayloadList".to_string()))]
    fn parameter_type_tags_round_trip(#[case] tag: &str, #[case] expected: ParameterType) {
        let parsed = ParameterType::from(tag.to_string());
        assert_eq!(parsed, expected);
        assert_eq!(String::from(parsed), tag);
    }

    #[test]
    fn only_file_is_file() {
        assert!(ParameterType::File.is_file());
        assert!(!ParameterType::String.is_file());
        assert!(!ParameterType::Other("FileList".to_string()).is_file());
    }

    #[test]
    fn create_status_uses_lowercase_tags() {
        let success: CreateStatus = serde_json::from_str(r#""success""#).expect("decode success");
        let error: CreateStatus = serde_json::from_str(r#""error""#).expect("decode error");
        assert_eq!(success, CreateStatus::Success);
        assert_eq!(error, CreateStatus::Error);
    }
}

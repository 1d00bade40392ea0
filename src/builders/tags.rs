//! Tag lists for `*.addTags` calls.

use crate::error::{LastfmError, Result};

/// Maximum tags accepted by one `addTags` call.
pub const MAX_TAGS_PER_CALL: usize = 10;

/// A validated list of 1 to 10 tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    /// Validate and wrap a list of tags.
    ///
    /// Tags are trimmed; blank tags are rejected.
    ///
    /// # Errors
    /// Returns `LastfmError::InvalidInput` for zero tags, more than ten, or
    /// a blank tag.
    pub fn new<I, S>(tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags
            .into_iter()
            .map(|t| t.into().trim().to_string())
            .collect();

        if tags.is_empty() {
            return Err(LastfmError::InvalidInput(
                "at least one tag is required".to_string(),
            ));
        }
        if tags.len() > MAX_TAGS_PER_CALL {
            return Err(LastfmError::InvalidInput(format!(
                "at most {} tags per call, got {}",
                MAX_TAGS_PER_CALL,
                tags.len()
            )));
        }
        if tags.iter().any(|t| t.is_empty()) {
            return Err(LastfmError::InvalidInput(
                "tags cannot be empty".to_string(),
            ));
        }

        Ok(Self { tags })
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false; a `TagList` holds at least one tag.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The tags.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// Value of the `tags` parameter: the tags joined by commas.
    pub fn to_param(&self) -> String {
        self.tags.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_bounds() {
        assert!(TagList::new(Vec::<String>::new()).is_err());
        assert!(TagList::new(["rock"]).is_ok());
        let ten: Vec<String> = (0..10).map(|i| format!("t{}", i)).collect();
        assert_eq!(TagList::new(ten).unwrap().len(), 10);
        let eleven: Vec<String> = (0..11).map(|i| format!("t{}", i)).collect();
        assert!(matches!(
            TagList::new(eleven),
            Err(LastfmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_blank_tag_rejected() {
        assert!(TagList::new(["rock", "  "]).is_err());
    }

    #[test]
    fn test_to_param_joins_trimmed() {
        let tags = TagList::new([" rock", "90s "]).unwrap();
        assert_eq!(tags.to_param(), "rock,90s");
    }
}

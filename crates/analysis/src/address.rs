//! Property address extraction from a finished analysis report.
//!
//! One further completion request turns the free-text report into the four
//! postal components used downstream for geocoding. The model answers in
//! `key: value` lines with a NOT_FOUND sentinel for anything missing.

use lienscope_llm::{LlmError, Message};
use tracing::debug;

use crate::pipeline::{DocumentAnalyzer, ANALYSIS_TEMPERATURE};
use crate::prompts;

/// Sentinel the model is instructed to emit for missing components.
const NOT_FOUND: &str = "NOT_FOUND";

/// Structured postal address extracted from an analysis report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAddress {
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl PropertyAddress {
    /// True when every component was found.
    pub fn is_complete(&self) -> bool {
        self.street_address.is_some()
            && self.city.is_some()
            && self.state.is_some()
            && self.zip_code.is_some()
    }

    /// Single-line form ("123 Main St, Springfield, IL 62701") suitable as
    /// geocoder input. Returns None without a street address; the remaining
    /// components alone don't identify a property.
    pub fn single_line(&self) -> Option<String> {
        let street = self.street_address.as_deref()?;
        let mut line = street.to_string();
        if let Some(city) = &self.city {
            line.push_str(", ");
            line.push_str(city);
        }
        match (&self.state, &self.zip_code) {
            (Some(state), Some(zip)) => {
                line.push_str(", ");
                line.push_str(state);
                line.push(' ');
                line.push_str(zip);
            }
            (Some(state), None) => {
                line.push_str(", ");
                line.push_str(state);
            }
            (None, Some(zip)) => {
                line.push(' ');
                line.push_str(zip);
            }
            (None, None) => {}
        }
        Some(line)
    }
}

impl DocumentAnalyzer {
    /// Extract the property address from a finished analysis report.
    pub async fn extract_address(&self, analysis: &str) -> Result<PropertyAddress, AddressError> {
        let messages = vec![
            Message::system(prompts::ADDRESS_SYSTEM_PROMPT),
            Message::user(analysis.to_string()),
        ];
        let response = self
            .provider
            .complete(messages, ANALYSIS_TEMPERATURE, self.max_tokens)
            .await
            .map_err(AddressError::Llm)?;

        debug!("address response: {}", response);

        let address = parse_address(&response);
        if address == PropertyAddress::default() {
            return Err(AddressError::NoComponents {
                raw_response: response,
            });
        }
        Ok(address)
    }
}

/// Parse the model's `key: value` lines. Unrecognized lines are skipped;
/// NOT_FOUND values become None.
fn parse_address(response: &str) -> PropertyAddress {
    let mut address = PropertyAddress::default();

    for line in response.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() || value == NOT_FOUND {
            continue;
        }
        match key.trim() {
            "street_address" => address.street_address = Some(value.to_string()),
            "city" => address.city = Some(value.to_string()),
            "state" => address.state = Some(value.to_string()),
            "zip_code" => address.zip_code = Some(value.to_string()),
            _ => {}
        }
    }

    address
}

#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address extraction request failed: {0}")]
    Llm(#[source] LlmError),

    #[error("no address components in response: {raw_response:?}")]
    NoComponents { raw_response: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::ChunkConfig;
    use lienscope_llm::provider::mock::MockProvider;

    #[test]
    fn parses_all_components() {
        let response = "street_address: 123 Main St\ncity: Springfield\nstate: IL\nzip_code: 62701";
        let addr = parse_address(response);
        assert_eq!(addr.street_address.as_deref(), Some("123 Main St"));
        assert_eq!(addr.city.as_deref(), Some("Springfield"));
        assert_eq!(addr.state.as_deref(), Some("IL"));
        assert_eq!(addr.zip_code.as_deref(), Some("62701"));
        assert!(addr.is_complete());
    }

    #[test]
    fn not_found_components_become_none() {
        let response = "street_address: 123 Main St\ncity: NOT_FOUND\nstate: IL\nzip_code: NOT_FOUND";
        let addr = parse_address(response);
        assert_eq!(addr.street_address.as_deref(), Some("123 Main St"));
        assert!(addr.city.is_none());
        assert!(addr.zip_code.is_none());
        assert!(!addr.is_complete());
    }

    #[test]
    fn chatter_around_the_components_is_ignored() {
        let response = "Here is the address:\nstreet_address: 9 Elm Ave\ncity: Dayton\nstate: OH\nzip_code: 45402\nLet me know if you need more.";
        let addr = parse_address(response);
        assert_eq!(addr.street_address.as_deref(), Some("9 Elm Ave"));
        assert!(addr.is_complete());
    }

    #[test]
    fn single_line_formats_for_geocoding() {
        let addr = PropertyAddress {
            street_address: Some("123 Main St".into()),
            city: Some("Springfield".into()),
            state: Some("IL".into()),
            zip_code: Some("62701".into()),
        };
        assert_eq!(
            addr.single_line().unwrap(),
            "123 Main St, Springfield, IL 62701"
        );
    }

    #[test]
    fn single_line_requires_street() {
        let addr = PropertyAddress {
            city: Some("Springfield".into()),
            ..Default::default()
        };
        assert!(addr.single_line().is_none());
    }

    #[tokio::test]
    async fn extract_address_round_trip() {
        let mock = MockProvider::new();
        mock.queue_text("street_address: 123 Main St\ncity: Springfield\nstate: IL\nzip_code: 62701");
        let handle = mock.clone();
        let analyzer = DocumentAnalyzer::new(Box::new(mock), ChunkConfig::default(), 4096);

        let addr = analyzer.extract_address("report text").await.unwrap();
        assert!(addr.is_complete());

        let calls = handle.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].messages[1].content, "report text");
        assert_eq!(calls[0].temperature, ANALYSIS_TEMPERATURE);
    }

    #[tokio::test]
    async fn all_not_found_is_an_error() {
        let mock = MockProvider::new();
        mock.queue_text("street_address: NOT_FOUND\ncity: NOT_FOUND\nstate: NOT_FOUND\nzip_code: NOT_FOUND");
        let analyzer = DocumentAnalyzer::new(Box::new(mock), ChunkConfig::default(), 4096);

        let err = analyzer.extract_address("report").await.unwrap_err();
        assert!(matches!(err, AddressError::NoComponents { .. }));
    }
}

//! Tests for the API client functionality
//!
//! Validates token handling on the GraphQL client and the reduction of
//! mutation results to form messages.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, NuberClient, form_message};
    use shared::models::{CoreOutput, GraphQLError, ResponseError, UNKNOWN_FAILURE};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");
        assert_eq!(client.endpoint(), "http://localhost:4000/graphql");
        assert_eq!(client.current_token(), None);
    }

    /// Tests that the token is shared between clones
    #[test]
    fn test_token_shared_between_clones() {
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");
        let clone = client.clone();
        client.set_token(Some("jwt".to_string()));
        assert_eq!(clone.current_token().as_deref(), Some("jwt"));

        clone.set_token(None);
        assert_eq!(client.current_token(), None);
    }

    /// Tests that an empty token is treated as no token
    #[test]
    fn test_empty_token_ignored() {
        let client = NuberClient::with_endpoint("http://localhost:4000/graphql");
        client.set_token(Some(String::new()));
        assert_eq!(client.current_token(), None);
    }

    /// Tests form messages for successful mutations
    #[test]
    fn test_form_message_success() {
        let result = Ok(CoreOutput {
            ok: true,
            error: None,
        });
        assert_eq!(form_message(&result), None);
    }

    /// Tests form messages for rejected mutations
    #[test]
    fn test_form_message_rejection() {
        let result = Ok(CoreOutput {
            ok: false,
            error: Some("There is a user with that email already".to_string()),
        });
        assert_eq!(
            form_message(&result).as_deref(),
            Some("There is a user with that email already")
        );

        let silent = Ok(CoreOutput {
            ok: false,
            error: None,
        });
        assert_eq!(form_message(&silent).as_deref(), Some(UNKNOWN_FAILURE));
    }

    /// Tests error response handling
    #[test]
    fn test_form_message_response_errors() {
        let result: Result<CoreOutput, ApiError> = Err(ResponseError::MissingData.into());
        assert_eq!(
            form_message(&result).as_deref(),
            Some("response contained no data")
        );

        let result: Result<CoreOutput, ApiError> = Err(ResponseError::GraphQL(vec![
            GraphQLError::new("Forbidden resource"),
        ])
        .into());
        assert_eq!(form_message(&result).as_deref(), Some("Forbidden resource"));
    }
}

//! Wire encoding of a [`ParamsMap`]: URL query strings for GET, form bodies for POST.

use url::{form_urlencoded, Url};

use crate::params::ParamsMap;

/// Parses `base` and appends every present parameter to its query string.
///
/// Existing query pairs on `base` are kept. When no parameter is present the
/// URL is returned as parsed, without a dangling `?`.
pub fn url_with_params(base: &str, params: &ParamsMap) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if params.present_pairs().next().is_some() {
        url.query_pairs_mut().extend_pairs(params.present_pairs());
    }
    Ok(url)
}

/// Present parameters as owned name/value pairs, in insertion order.
pub fn form_pairs(params: &ParamsMap) -> Vec<(String, String)> {
    params
        .present_pairs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// `application/x-www-form-urlencoded` body (UTF-8) for the present parameters.
pub fn form_body(params: &ParamsMap) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.present_pairs())
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_values_are_skipped_in_query() {
        let params = ParamsMap::new()
            .with_param("fullDetails", "true")
            .with_optional_param::<String>("branchId", None);
        let url = url_with_params("https://host/api/clients/123", &params).unwrap();
        assert_eq!(url.as_str(), "https://host/api/clients/123?fullDetails=true");
    }

    #[test]
    fn empty_string_value_is_sent() {
        let params = ParamsMap::new().with_param("state", "");
        let url = url_with_params("https://host/api/loans", &params).unwrap();
        assert_eq!(url.query(), Some("state="));
        assert_eq!(form_body(&params), "state=");
    }

    #[test]
    fn no_present_params_leaves_url_untouched() {
        let params = ParamsMap::new().with_optional_param::<String>("branchId", None);
        let url = url_with_params("https://host/api/clients", &params).unwrap();
        assert_eq!(url.as_str(), "https://host/api/clients");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn keys_and_values_are_percent_encoded_in_order() {
        let params = ParamsMap::new()
            .with_param("query", "jane doe&co")
            .with_param("first name", "Zoë")
            .with_param("limit", "5");
        let url = url_with_params("https://host/api/search", &params).unwrap();
        assert_eq!(
            url.query(),
            Some("query=jane+doe%26co&first+name=Zo%C3%AB&limit=5")
        );
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, form_pairs(&params));
    }

    #[test]
    fn existing_query_is_extended() {
        let params = ParamsMap::new().with_param("limit", "10");
        let url = url_with_params("https://host/api/clients?offset=20", &params).unwrap();
        assert_eq!(url.query(), Some("offset=20&limit=10"));
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = url_with_params("host/api/clients", &ParamsMap::new()).unwrap_err();
        assert_eq!(err, url::ParseError::RelativeUrlWithoutBase);
    }

    #[test]
    fn form_body_matches_query_encoding() {
        let params = ParamsMap::new()
            .with_param("accountHolderKey", "abc123")
            .with_optional_param::<String>("notes", None)
            .with_param("appkey", "my app");
        assert_eq!(form_body(&params), "accountHolderKey=abc123&appkey=my+app");
        assert_eq!(
            form_pairs(&params),
            vec![
                ("accountHolderKey".to_string(), "abc123".to_string()),
                ("appkey".to_string(), "my app".to_string()),
            ]
        );
    }
}

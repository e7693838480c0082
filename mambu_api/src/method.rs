use std::fmt;

/// HTTP verbs supported by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters travel in the URL query string. Only 200 is a success.
    Get,
    /// Parameters travel in a form-encoded body. 200 and 201 are successes.
    Post,
}

impl HttpMethod {
    /// Whether `status` counts as a successful answer for this method.
    pub fn is_success(self, status: u16) -> bool {
        match self {
            HttpMethod::Get => status == 200,
            HttpMethod::Post => status == 200 || status == 201,
        }
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_accepts_only_200() {
        assert!(HttpMethod::Get.is_success(200));
        for status in [201, 204, 301, 400, 404, 500] {
            assert!(!HttpMethod::Get.is_success(status), "GET {status}");
        }
    }

    #[test]
    fn maps_to_reqwest_method() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Post.as_reqwest(), reqwest::Method::POST);
        assert_eq!(HttpMethod::Post.as_reqwest().as_str(), HttpMethod::Post.as_str());
    }

    #[test]
    fn post_accepts_200_and_201() {
        assert!(HttpMethod::Post.is_success(200));
        assert!(HttpMethod::Post.is_success(201));
        for status in [202, 204, 400, 404, 409, 500] {
            assert!(!HttpMethod::Post.is_success(status), "POST {status}");
        }
    }
}

use ureq::Error::{Status, Transport};

use super::{FetchError, FileDownloader, Response};

pub struct UReqFetcher;

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Result<Response, FetchError> {
        let response = ureq::get(url).call();

        match response {
            Ok(response) => Ok(Self::into_response(response)),

            // ureq turns 4xx/5xx into errors, but the body is still a response
            Err(Status(_, response)) => Ok(Self::into_response(response)),

            Err(Transport(transport)) => Err(FetchError::transport(transport)),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        UReqFetcher
    }

    fn into_response(response: ureq::Response) -> Response {
        let status = response.status();

        Response::new(status, response.into_reader())
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}

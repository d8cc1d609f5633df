use std::cell::{Cell, RefCell};
use std::io::{self, Read};

use super::{FetchError, FileDownloader, Response};

pub struct MockFetcher {
    responses: RefCell<Vec<Result<Response, FetchError>>>,
    calls: Cell<usize>,
}

impl FileDownloader for MockFetcher {
    fn fetch(&self, _url: &str) -> Result<Response, FetchError> {
        self.calls.set(self.calls.get() + 1);

        let mut responses = self.responses.borrow_mut();

        if responses.is_empty() {
            Err(FetchError::transport("connection refused"))
        } else {
            responses.remove(0)
        }
    }
}

impl MockFetcher {
    pub fn new(responses: Vec<Result<Response, FetchError>>) -> Self {
        Self {
            responses: RefCell::new(responses),
            calls: Cell::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self::new(vec![])
    }

    pub fn ok(body: &[u8]) -> Result<Response, FetchError> {
        Ok(Response::new(200, io::Cursor::new(body.to_vec())))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Yields `prefix` and then fails, like a connection dropped mid-body.
pub struct FailingBody {
    prefix: io::Cursor<Vec<u8>>,
}

impl FailingBody {
    pub fn new(prefix: &[u8]) -> Self {
        Self {
            prefix: io::Cursor::new(prefix.to_vec()),
        }
    }
}

impl Read for FailingBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.prefix.read(buf)? {
            0 => Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset",
            )),
            n => Ok(n),
        }
    }
}

//! Mock probe and fetcher shared by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Result, bail};
use serde_json::Value;
use url::Url;

use super::client::ResultsFetcher;
use super::service::SearchService;
use crate::network::ConnectivityProbe;

pub const TEST_BASE_URL: &str = "https://results.example/web/";

pub struct FixedConnectivity {
    pub connected: bool,
    pub checks: Rc<Cell<usize>>,
}

impl ConnectivityProbe for FixedConnectivity {
    fn is_connected(&self) -> bool {
        self.checks.set(self.checks.get() + 1);
        self.connected
    }
}

/// Returns `response` for every request, or fails when it is `None`
pub struct MockFetcher {
    pub response: Option<Value>,
    pub requests: Rc<RefCell<Vec<String>>>,
}

impl ResultsFetcher for MockFetcher {
    fn fetch(&self, url: &Url) -> Result<Value> {
        self.requests.borrow_mut().push(url.to_string());
        match &self.response {
            Some(value) => Ok(value.clone()),
            None => bail!("Mock network error"),
        }
    }
}

pub struct MockService {
    pub service: SearchService,
    pub requests: Rc<RefCell<Vec<String>>>,
    pub checks: Rc<Cell<usize>>,
}

pub fn mock_service(connected: bool, response: Option<Value>) -> MockService {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let checks = Rc::new(Cell::new(0));
    let service = SearchService::new(
        Url::parse(TEST_BASE_URL).unwrap(),
        Box::new(FixedConnectivity { connected, checks: Rc::clone(&checks) }),
        Box::new(MockFetcher { response, requests: Rc::clone(&requests) }),
    );
    MockService { service, requests, checks }
}

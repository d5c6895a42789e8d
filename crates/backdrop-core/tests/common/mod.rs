//! Shared test helpers: a loader whose completions are released by hand.

#![allow(dead_code)]

use backdrop_core::{ImageLoader, LoadError};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Hands out one pending load per `load()` call, in call order.
///
/// Each load stays suspended until the matching `LoadHandle` completes it,
/// which lets a test choose the completion order independently of the
/// call order.
#[derive(Default)]
pub struct ManualLoader {
    pending: RefCell<VecDeque<oneshot::Receiver<Result<&'static str, LoadError>>>>,
    requested: RefCell<Vec<String>>,
}

pub struct LoadHandle(oneshot::Sender<Result<&'static str, LoadError>>);

impl LoadHandle {
    pub fn succeed(self, image: &'static str) {
        let _ = self.0.send(Ok(image));
    }

    pub fn fail(self, reason: &str) {
        let _ = self.0.send(Err(LoadError::new(reason)));
    }
}

impl ManualLoader {
    /// Queue a pending load for the next `load()` call.
    pub fn expect_load(&self) -> LoadHandle {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        LoadHandle(tx)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl ImageLoader for ManualLoader {
    type Image = &'static str;

    fn load(&self, url: &str) -> impl Future<Output = Result<&'static str, LoadError>> {
        self.requested.borrow_mut().push(url.to_string());
        let rx = self.pending.borrow_mut().pop_front();
        async move {
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(LoadError::new("load abandoned"))),
                None => Err(LoadError::new("no load expected")),
            }
        }
    }
}

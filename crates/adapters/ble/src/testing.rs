//! In-memory fakes for exercising the discovery/session state machine
//! without radio hardware.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::mpsc;

use wavekey_app::dispatcher::CommandSink;
use wavekey_domain::command::{CommandOrigin, CommandToken};
use wavekey_domain::outcome::ActionOutcome;

use crate::error::LinkError;
use crate::link::CommandLink;
use crate::scanner::PeripheralScanner;

/// Fake transport: frames arrive through an in-memory channel; dropping the
/// sender simulates transport loss.
pub(crate) struct FakeLink {
    address: String,
    frames: Option<mpsc::Receiver<Vec<u8>>>,
    fail_open: bool,
    closed: AtomicBool,
}

impl FakeLink {
    /// A link that opens successfully; returns the frame sender.
    pub(crate) fn connected(address: &str) -> (Self, mpsc::Sender<Vec<u8>>) {
        let (tx, rx) = mpsc::channel(16);
        let link = Self {
            address: address.to_owned(),
            frames: Some(rx),
            fail_open: false,
            closed: AtomicBool::new(false),
        };
        (link, tx)
    }

    /// A link whose `open` fails with a connect timeout.
    pub(crate) fn failing(address: &str) -> Self {
        Self {
            address: address.to_owned(),
            frames: None,
            fail_open: true,
            closed: AtomicBool::new(false),
        }
    }

    pub(crate) fn closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl CommandLink for FakeLink {
    fn address(&self) -> String {
        self.address.clone()
    }

    async fn open(&mut self) -> Result<mpsc::Receiver<Vec<u8>>, LinkError> {
        if self.fail_open {
            return Err(LinkError::ConnectTimeout);
        }
        Ok(self.frames.take().expect("fake link opened twice"))
    }

    async fn close(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Scripted scanner: misses until a given pass, then hands out queued links.
pub(crate) struct ScriptedScanner {
    passes: AtomicUsize,
    ready_after: usize,
    queue: Mutex<VecDeque<FakeLink>>,
}

impl ScriptedScanner {
    /// Misses on every pass before `pass`, then yields one link.
    pub(crate) fn found_on_pass(pass: usize) -> Self {
        let (link, _tx) = FakeLink::connected("AA:BB:CC:DD:EE:FF");
        Self {
            passes: AtomicUsize::new(0),
            ready_after: pass,
            queue: Mutex::new(VecDeque::from([link])),
        }
    }

    /// Never yields a link.
    pub(crate) fn never_found() -> Self {
        Self {
            passes: AtomicUsize::new(0),
            ready_after: usize::MAX,
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Yields the given links one per pass, then misses.
    pub(crate) fn with_links(links: Vec<FakeLink>) -> Self {
        Self {
            passes: AtomicUsize::new(0),
            ready_after: 1,
            queue: Mutex::new(links.into()),
        }
    }
}

impl PeripheralScanner for ScriptedScanner {
    type Link = FakeLink;

    async fn scan_once(&self, _name: &str) -> Result<Option<FakeLink>, LinkError> {
        let pass = self.passes.fetch_add(1, Ordering::SeqCst) + 1;
        if pass < self.ready_after {
            return Ok(None);
        }
        Ok(self.queue.lock().unwrap().pop_front())
    }
}

/// Records every submission and reports success.
#[derive(Default)]
pub(crate) struct RecordingSink {
    submissions: Mutex<Vec<(CommandToken, CommandOrigin)>>,
}

impl RecordingSink {
    pub(crate) fn tokens(&self) -> Vec<CommandToken> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .map(|(token, _)| *token)
            .collect()
    }

    pub(crate) fn origins(&self) -> Vec<CommandOrigin> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .map(|(_, origin)| *origin)
            .collect()
    }
}

impl CommandSink for RecordingSink {
    async fn submit(&self, token: CommandToken, origin: CommandOrigin) -> ActionOutcome {
        self.submissions.lock().unwrap().push((token, origin));
        ActionOutcome::Completed("ok".to_owned())
    }
}

use crate::client::{ChatClient, ChatMessage, ClientError};
use crate::console::Console;
use crate::error::{InfragenError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Console that answers questions from a fixed script and records output.
pub(crate) struct ScriptedConsole {
    answers: VecDeque<String>,
    asked: Vec<String>,
    said: Vec<String>,
    warnings: Vec<String>,
}

impl ScriptedConsole {
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            said: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn asked(&self) -> &[String] {
        &self.asked
    }

    pub(crate) fn said(&self) -> &[String] {
        &self.said
    }

    pub(crate) fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| {
                InfragenError::UserError("input closed before an answer was given".to_string())
            })
    }

    fn say(&mut self, line: &str) -> Result<()> {
        self.said.push(line.to_string());
        Ok(())
    }

    fn warn(&mut self, line: &str) -> Result<()> {
        self.warnings.push(line.to_string());
        Ok(())
    }
}

/// Chat client returning a canned reply and recording every request.
pub(crate) struct CannedClient {
    reply: std::result::Result<String, String>,
    requests: RefCell<Vec<(String, Vec<ChatMessage>)>>,
}

impl CannedClient {
    pub(crate) fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// A client whose every call fails with a decode error carrying `message`.
    pub(crate) fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<(String, Vec<ChatMessage>)> {
        self.requests.borrow().clone()
    }
}

impl ChatClient for CannedClient {
    fn send(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> std::result::Result<String, ClientError> {
        self.requests
            .borrow_mut()
            .push((model.to_string(), messages.to_vec()));
        self.reply.clone().map_err(ClientError::Decode)
    }
}
